use crate::data_types::{Ohlcv, PriceField, SmaPoint};

/// Simple moving average of `field` over a sliding window of `period` bars.
/// Each value is dated at the last bar of its window. Empty when `period` is
/// zero or the series is shorter than `period`.
pub fn calculate_sma(points: &[Ohlcv], period: usize, field: PriceField) -> Vec<SmaPoint> {
    if period == 0 || points.len() < period {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(points.len() - period + 1);
    let mut sum: f64 = points[..period].iter().map(|p| p.field(field)).sum();
    out.push(SmaPoint {
        time: points[period - 1].time,
        value: sum / period as f64,
    });

    for i in period..points.len() {
        sum += points[i].field(field) - points[i - period].field(field);
        out.push(SmaPoint {
            time: points[i].time,
            value: sum / period as f64,
        });
    }
    out
}
