use serde::{Deserialize, Serialize};

/// Unix timestamp in milliseconds.
pub type Timestamp = i64;

pub const DAY_MS: Timestamp = 24 * 60 * 60 * 1000;

/// One bar of price/volume data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ohlcv {
    pub time: Timestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Ohlcv {
    pub fn new(time: Timestamp, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// A flat bar where every price equals `price`.
    pub fn flat(time: Timestamp, price: f64) -> Self {
        Self::new(time, price, price, price, price, 0.0)
    }

    pub fn is_up(&self) -> bool {
        self.close >= self.open
    }

    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }

    pub fn field(&self, field: PriceField) -> f64 {
        match field {
            PriceField::Open => self.open,
            PriceField::High => self.high,
            PriceField::Low => self.low,
            PriceField::Close => self.close,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceField {
    Open,
    High,
    Low,
    #[default]
    Close,
}

/// A moving-average sample, dated at the last bar of its window.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SmaPoint {
    pub time: Timestamp,
    pub value: f64,
}

/// Time extent `(first, last)` of an ascending series.
pub fn time_extent(points: &[Ohlcv]) -> Option<(Timestamp, Timestamp)> {
    Some((points.first()?.time, points.last()?.time))
}

/// `(min low, max high)` over the given bars.
pub fn price_extent<'a>(points: impl IntoIterator<Item = &'a Ohlcv>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for p in points {
        min = min.min(p.low);
        max = max.max(p.high);
    }
    if min == f64::INFINITY || max == f64::NEG_INFINITY {
        None
    } else {
        Some((min, max))
    }
}
