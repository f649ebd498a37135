use crate::data_types::{AxisFormat, AxisRange, TimeUnit};
use crate::utils::date_formatter::{determine_date_format, format_timestamp};
use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Continuous linear mapping between a data domain and a pixel range,
/// backed by a d3 linear scale.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
}

impl std::fmt::Debug for ChartScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChartScale")
            .field("domain", &self.domain())
            .field("range", &self.range())
            .finish()
    }
}

impl PartialEq for ChartScale {
    fn eq(&self, other: &Self) -> bool {
        self.domain() == other.domain() && self.range() == other.range()
    }
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut scale = Self {
            inner: LinearScale::new().domain(0.0, 1.0).range(range.0, range.1),
        };
        scale.update_domain(domain.0, domain.1);
        scale
    }

    pub fn map(&self, value: f64) -> f64 {
        let s = &self.inner;
        let res = s.scale(value);
        if res.is_nan() || res.is_infinite() {
            self.range().0
        } else {
            res
        }
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let s = &self.inner;
        s.invert(pixel).filter(|v| v.is_finite()).unwrap_or(self.domain().0)
    }

    pub fn range(&self) -> (f64, f64) {
        let s = &self.inner;
        (s.range().0, s.range().1)
    }

    pub fn domain(&self) -> (f64, f64) {
        let s = &self.inner;
        (s.domain().0, s.domain().1)
    }

    pub fn domain_range(&self) -> AxisRange {
        AxisRange::from(self.domain())
    }

    /// Replaces the domain. Non-finite bounds are ignored and a zero-width
    /// domain is widened so the mapping stays invertible.
    pub fn update_domain(&mut self, min: f64, max: f64) {
        if !min.is_finite() || !max.is_finite() {
            return;
        }
        let mut d_min = min;
        let mut d_max = max;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let (r0, r1) = self.range();
        self.inner = LinearScale::new().domain(d_min, d_max).range(r0, r1);
    }

    /// Copy of this scale seen through a zoom `k` and pan `tx` (pixels),
    /// keeping the pixel range and moving the domain.
    pub fn rescale(&self, k: f64, tx: f64) -> Self {
        let (r0, r1) = self.range();
        let d0 = self.invert((r0 - tx) / k);
        let d1 = self.invert((r1 - tx) / k);
        Self::new_linear((d0, d1), (r0, r1))
    }

    /// Nice round-number ticks covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        if count == 0 {
            return vec![];
        }
        let s = &self.inner;
        s.ticks(count)
    }

    pub fn format_tick(&self, value: f64, format: &AxisFormat) -> String {
        match format {
            AxisFormat::Time(unit) => {
                let (d_min, d_max) = self.domain();
                let span = (d_max - d_min).abs();
                let span_sec = match unit {
                    TimeUnit::Seconds => span,
                    TimeUnit::Milliseconds => span / 1000.0,
                };
                let fmt = determine_date_format(span_sec);
                format_timestamp(value, fmt, *unit)
            }
            AxisFormat::Numeric => {
                if value.abs() < 0.001 && value.abs() > 0.0 {
                    format!("{:.4}", value)
                } else if value.abs() > 1000.0 {
                    format!("{:.0}", value)
                } else {
                    format!("{:.2}", value)
                }
            }
        }
    }
}
