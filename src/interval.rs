use crate::types::Float;

/// Closed range `[min, max]` over ray parameters and color channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

#[allow(dead_code)]
pub const EMPTY: Interval = Interval { min: Float::INFINITY, max: Float::NEG_INFINITY };
#[allow(dead_code)]
pub const UNIVERSE: Interval = Interval { min: Float::NEG_INFINITY, max: Float::INFINITY };

impl Interval {
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }

    /// Strict containment. Hit queries use this so roots at the interval
    /// boundary (t at or below the acne epsilon) are rejected.
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }

    pub fn clamp(&self, x: Float) -> Float {
        x.clamp(self.min, self.max)
    }
}
