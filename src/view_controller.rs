use crate::data_types::{AxisRange, OhlcvSeries, ZoomConfig, DAY_MS};
use crate::scales::ChartScale;
use crate::transform::PlotTransform;
use tracing::trace;

/// Zoom/pan state: screen = original_screen * k + x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0 };
}

/// ViewController handles the business logic of interactions (zoom, pan)
/// independently of the GPUI infrastructure to facilitate testing.
pub struct ViewController;

impl ViewController {
    /// Clamps the scale to the configured extent and the translation so the
    /// visible window stays within `[left, right]`.
    pub fn constrain(t: ZoomTransform, left: f64, right: f64, cfg: &ZoomConfig) -> ZoomTransform {
        let k = t.k.clamp(cfg.min_scale, cfg.max_scale);
        let min_x = right * (1.0 - k);
        let max_x = left * (1.0 - k);
        let x = if min_x <= max_x {
            t.x.clamp(min_x, max_x)
        } else {
            (min_x + max_x) / 2.0
        };
        ZoomTransform { k, x }
    }

    /// Zooms by `factor` keeping the data under `pivot_x` fixed on screen.
    pub fn zoom_at(
        t: ZoomTransform,
        pivot_x: f64,
        factor: f64,
        left: f64,
        right: f64,
        cfg: &ZoomConfig,
    ) -> ZoomTransform {
        let k = (t.k * factor).clamp(cfg.min_scale, cfg.max_scale);
        let original = (pivot_x - t.x) / t.k;
        let x = pivot_x - original * k;
        Self::constrain(ZoomTransform { k, x }, left, right, cfg)
    }

    pub fn pan_by(t: ZoomTransform, dx: f64, left: f64, right: f64, cfg: &ZoomConfig) -> ZoomTransform {
        Self::constrain(ZoomTransform { k: t.k, x: t.x + dx }, left, right, cfg)
    }

    /// Wheel delta to zoom factor, d3 convention: `2^(-dy * sensitivity)`.
    pub fn compute_zoom_factor(delta_y: f64, sensitivity: f64) -> f64 {
        (-delta_y * sensitivity).exp2()
    }

    /// Calculates the new bounds for an auto-fit with an optional margin.
    pub fn compute_auto_fit(min: f64, max: f64, margin_pct: f64) -> (f64, f64) {
        if min == f64::INFINITY || max == f64::NEG_INFINITY {
            return (0.0, 100.0);
        }

        let span = if (max - min).abs() < f64::EPSILON {
            1.0 // Avoids a zero span
        } else {
            max - min
        };

        (min - span * margin_pct, max + span * margin_pct)
    }

    /// Full time extent of the series, never empty.
    pub fn initial_time_domain(series: &OhlcvSeries) -> AxisRange {
        match series.time_extent() {
            Some((first, last)) if last > first => AxisRange::new(first as f64, last as f64),
            Some((t, _)) => {
                let half = (DAY_MS / 2) as f64;
                AxisRange::new(t as f64 - half, t as f64 + half)
            }
            None => AxisRange::new(0.0, DAY_MS as f64),
        }
    }

    /// Padded `(min low, max high)` over the whole series.
    pub fn initial_price_domain(series: &OhlcvSeries, padding_pct: f64) -> AxisRange {
        let (min, max) = series
            .price_range(f64::NEG_INFINITY, f64::INFINITY)
            .unwrap_or((f64::INFINITY, f64::NEG_INFINITY));
        AxisRange::from(Self::compute_auto_fit(min, max, padding_pct))
    }

    /// Padded price extent of the points visible in `time`. Keeps `previous`
    /// when fewer than two points are visible or their extent is flat.
    pub fn visible_price_domain(
        series: &OhlcvSeries,
        time: AxisRange,
        previous: AxisRange,
        padding_pct: f64,
    ) -> AxisRange {
        if series.iter_range(time.min, time.max).take(2).count() < 2 {
            return previous;
        }
        match series.price_range(time.min, time.max) {
            Some((min, max)) if max - min > f64::EPSILON => AxisRange::new(min, max).padded(padding_pct),
            _ => previous,
        }
    }
}

/// Phase of the zoom/pan gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransformPhase {
    #[default]
    Idle,
    Transforming,
}

/// Owns the zoom state and the pre-zoom time mapping, and derives the
/// current mappings from them.
#[derive(Clone, Debug)]
pub struct ViewTransformController {
    original_x: ChartScale,
    zoom: ZoomTransform,
    phase: TransformPhase,
    config: ZoomConfig,
    padding_pct: f64,
}

impl ViewTransformController {
    pub fn new(original_x: ChartScale, config: ZoomConfig, padding_pct: f64) -> Self {
        Self {
            original_x,
            zoom: ZoomTransform::IDENTITY,
            phase: TransformPhase::Idle,
            config,
            padding_pct,
        }
    }

    pub fn zoom(&self) -> ZoomTransform {
        self.zoom
    }

    pub fn phase(&self) -> TransformPhase {
        self.phase
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    pub fn begin_gesture(&mut self) {
        self.phase = TransformPhase::Transforming;
    }

    pub fn end_gesture(&mut self) {
        self.phase = TransformPhase::Idle;
    }

    pub fn zoom_at(&mut self, pivot_x: f64, factor: f64, series: &OhlcvSeries, transform: &mut PlotTransform) {
        let (left, right) = (transform.bounds.left, transform.bounds.right);
        let next = ViewController::zoom_at(self.zoom, pivot_x, factor, left, right, &self.config);
        self.apply(next, series, transform);
    }

    pub fn pan_by(&mut self, dx: f64, series: &OhlcvSeries, transform: &mut PlotTransform) {
        let (left, right) = (transform.bounds.left, transform.bounds.right);
        let next = ViewController::pan_by(self.zoom, dx, left, right, &self.config);
        self.apply(next, series, transform);
    }

    pub fn reset(&mut self, series: &OhlcvSeries, transform: &mut PlotTransform) {
        self.apply(ZoomTransform::IDENTITY, series, transform);
    }

    /// Rescales the time mapping from the pre-zoom one, then recomputes the
    /// price mapping from the points now visible.
    pub fn apply(&mut self, next: ZoomTransform, series: &OhlcvSeries, transform: &mut PlotTransform) {
        self.zoom = next;
        transform.x_scale = self.original_x.rescale(next.k, next.x);
        let time = transform.time_domain();
        let price = ViewController::visible_price_domain(
            series,
            time,
            transform.price_domain(),
            self.padding_pct,
        );
        transform.y_scale.update_domain(price.min, price.max);
        trace!(k = next.k, x = next.x, t_min = time.min, t_max = time.max, "view rescaled");
    }
}
