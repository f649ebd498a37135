use crate::data_types::{ChartKind, Ohlcv, OhlcvSeries};
use crate::scene::{Primitive, Rect, Scene, TextAlign};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use crate::utils::date_formatter::{format_utc, format_volume};

const LINE_HEIGHT: f64 = 14.0;
const BOX_WIDTH: f64 = 170.0;
const PADDING: f64 = 4.0;

/// Hover readout for the bar nearest the pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub point: Ohlcv,
    /// x of the vertical guide, at the bar's date.
    pub guide_x: f64,
    /// Dot on the close, line charts only.
    pub dot: Option<(f64, f64)>,
    /// Top-left of the text box.
    pub anchor: (f64, f64),
    pub lines: Vec<String>,
}

impl Tooltip {
    /// Finds the bar nearest the pointer's date. `None` when the series is
    /// empty or the pointer is outside the plot.
    pub fn at(
        series: &OhlcvSeries,
        transform: &PlotTransform,
        kind: ChartKind,
        pointer: (f64, f64),
        left_margin: f64,
    ) -> Option<Self> {
        if !transform.bounds.contains(pointer.0, pointer.1) {
            return None;
        }
        let point = series.nearest(transform.x_scale.invert(pointer.0))?.clone();
        let guide_x = transform.x_data_to_screen(point.time as f64);
        let dot = match kind {
            ChartKind::Line => Some((guide_x, transform.y_data_to_screen(point.close))),
            ChartKind::Candlestick => None,
        };
        let lines = vec![
            format!("O {:.2}", point.open),
            format!("H {:.2}", point.high),
            format!("L {:.2}", point.low),
            format!("C {:.2}", point.close),
            format!("V {}", format_volume(point.volume)),
            format_utc(point.time),
        ];
        Some(Self {
            point,
            guide_x,
            dot,
            anchor: (pointer.0 - left_margin - 5.0, pointer.1),
            lines,
        })
    }

    pub fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        let bounds = transform.bounds;
        scene.plot.push(Primitive::Line {
            from: (self.guide_x, bounds.top),
            to: (self.guide_x, bounds.bottom),
            color: theme.crosshair_line,
            width: 1.0,
            dash: Some(3.0),
        });
        if let Some(center) = self.dot {
            scene.plot.push(Primitive::Circle {
                center,
                radius: 3.0,
                fill: theme.line,
                stroke: None,
            });
        }

        let height = self.lines.len() as f64 * LINE_HEIGHT + PADDING * 2.0;
        scene.overlay.push(Primitive::Rect {
            rect: Rect::new(self.anchor.0, self.anchor.1, BOX_WIDTH, height),
            fill: theme.tooltip_background,
            stroke: Some(theme.axis_line),
        });
        for (i, text) in self.lines.iter().enumerate() {
            scene.overlay.push(Primitive::Text {
                origin: (self.anchor.0 + PADDING, self.anchor.1 + PADDING + i as f64 * LINE_HEIGHT),
                text: text.clone(),
                color: theme.tooltip_text,
                size: 11.0,
                align: TextAlign::Left,
            });
        }
    }
}
