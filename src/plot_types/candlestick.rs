use super::PlotRenderer;
use crate::data_types::{OhlcvSeries, DAY_MS};
use crate::scene::{Primitive, Rect, Scene};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

const BODY_WIDTH_PCT: f64 = 0.7;
const MIN_BODY_WIDTH: f64 = 1.0;
const MAX_BODY_WIDTH: f64 = 30.0;

/// Candlestick plot type
pub struct CandlestickPlot<'a> {
    pub series: &'a OhlcvSeries,
}

impl<'a> CandlestickPlot<'a> {
    pub fn new(series: &'a OhlcvSeries) -> Self {
        Self { series }
    }

    /// Body width from the spacing of the first two bars, one day when there
    /// is a single bar.
    pub fn candle_width(&self, transform: &PlotTransform) -> f64 {
        let points = self.series.points();
        let (t0, t1) = match points {
            [a, b, ..] => (a.time, b.time),
            [a] => (a.time, a.time + DAY_MS),
            [] => return MIN_BODY_WIDTH,
        };
        let spacing = (transform.x_data_to_screen(t1 as f64) - transform.x_data_to_screen(t0 as f64)).abs();
        (spacing * BODY_WIDTH_PCT).clamp(MIN_BODY_WIDTH, MAX_BODY_WIDTH)
    }
}

impl PlotRenderer for CandlestickPlot<'_> {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        let domain = transform.time_domain();
        let body_w = self.candle_width(transform);

        for candle in self.series.visible_slice(domain.min, domain.max) {
            let color = if candle.is_up() {
                theme.candle_up
            } else {
                theme.candle_down
            };
            let center_x = transform.x_data_to_screen(candle.time as f64);
            let y_h = transform.y_data_to_screen(candle.high);
            let y_l = transform.y_data_to_screen(candle.low);
            let y_o = transform.y_data_to_screen(candle.open);
            let y_c = transform.y_data_to_screen(candle.close);

            // Wick
            scene.plot.push(Primitive::Line {
                from: (center_x, y_h),
                to: (center_x, y_l),
                color,
                width: 1.0,
                dash: None,
            });
            // Body
            let top = y_o.min(y_c);
            scene.plot.push(Primitive::Rect {
                rect: Rect::new(center_x - body_w / 2.0, top, body_w, (y_o - y_c).abs().max(1.0)),
                fill: color,
                stroke: None,
            });
        }
    }
}
