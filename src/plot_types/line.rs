use super::PlotRenderer;
use crate::data_types::OhlcvSeries;
use crate::scene::{Primitive, Scene};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

const CURRENT_PRICE_DASH: f64 = 4.0;

/// Close-price line plus a dashed guide at the last close.
pub struct LinePlot<'a> {
    pub series: &'a OhlcvSeries,
}

impl<'a> LinePlot<'a> {
    pub fn new(series: &'a OhlcvSeries) -> Self {
        Self { series }
    }
}

impl PlotRenderer for LinePlot<'_> {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        let domain = transform.time_domain();
        let mut points = Vec::new();
        let mut last_px = (f64::MIN, 0.0);

        for p in self.series.visible_slice(domain.min, domain.max) {
            let screen = transform.project(p.time as f64, p.close);
            // Skip points landing on the pixel just drawn.
            if (screen.0 - last_px.0).abs() < 0.5 && (screen.1 - last_px.1).abs() < 1.0 {
                continue;
            }
            points.push(screen);
            last_px = screen;
        }

        if points.len() >= 2 {
            scene.plot.push(Primitive::Polyline {
                points,
                color: theme.line,
                width: theme.line_width,
            });
        }

        if let Some(last) = self.series.last() {
            let y = transform.y_data_to_screen(last.close);
            let bounds = transform.bounds;
            scene.plot.push(Primitive::Line {
                from: (bounds.left, y),
                to: (bounds.right, y),
                color: theme.line.alpha(0.5),
                width: 1.0,
                dash: Some(CURRENT_PRICE_DASH),
            });
        }
    }
}
