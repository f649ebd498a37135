use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TimeUnit {
    Seconds,
    Milliseconds,
}

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum AxisFormat {
    #[default]
    Numeric,
    Time(TimeUnit),
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum AxisEdge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Domain bounds for a single axis (time or price), in data units.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Finite bounds with `min < max`.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min < self.max
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Grows both ends by `pct` of the span.
    pub fn padded(&self, pct: f64) -> Self {
        let pad = self.span() * pct;
        Self::new(self.min - pad, self.max + pad)
    }

    /// Widens a degenerate range around its centre so it stays non-empty.
    pub fn widened(&self, half_width: f64) -> Self {
        if self.span().abs() < f64::EPSILON {
            Self::new(self.min - half_width, self.max + half_width)
        } else {
            *self
        }
    }

    pub fn as_tuple(&self) -> (f64, f64) {
        (self.min, self.max)
    }
}

impl From<(f64, f64)> for AxisRange {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}
