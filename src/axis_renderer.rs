use crate::data_types::{AxisEdge, AxisFormat, TimeUnit};
use crate::scales::ChartScale;
use crate::scene::{Primitive, Scene, TextAlign};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

const MIN_LABEL_SPACING: f64 = 10.0;
const TICK_LENGTH: f64 = 4.0;

pub struct AxisRenderer;

impl AxisRenderer {
    /// Tick count that fits the axis length for the given label kind.
    pub fn tick_count(length_px: f64, format: &AxisFormat) -> usize {
        let label_size_est = match format {
            AxisFormat::Time(_) => 80.0 + MIN_LABEL_SPACING,
            AxisFormat::Numeric => 30.0 + MIN_LABEL_SPACING,
        };
        ((length_px / label_size_est).floor() as usize).clamp(2, 20)
    }

    /// Axis lines, tick labels and the grid for both mappings.
    pub fn render(scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        Self::paint_axis(scene, &transform.y_scale, AxisEdge::Right, &AxisFormat::Numeric, transform, theme);
        Self::paint_axis(
            scene,
            &transform.x_scale,
            AxisEdge::Bottom,
            &AxisFormat::Time(TimeUnit::Milliseconds),
            transform,
            theme,
        );
    }

    fn paint_axis(
        scene: &mut Scene,
        scale: &ChartScale,
        edge: AxisEdge,
        format: &AxisFormat,
        transform: &PlotTransform,
        theme: &ChartTheme,
    ) {
        let bounds = transform.bounds;
        let is_vertical = matches!(edge, AxisEdge::Left | AxisEdge::Right);
        let length = if is_vertical {
            bounds.height()
        } else {
            bounds.width()
        };
        let ticks = scale.ticks(Self::tick_count(length, format));

        // 1. Axis border line
        let (from, to) = match edge {
            AxisEdge::Right => ((bounds.right, bounds.top), (bounds.right, bounds.bottom)),
            AxisEdge::Left => ((bounds.left, bounds.top), (bounds.left, bounds.bottom)),
            AxisEdge::Bottom => ((bounds.left, bounds.bottom), (bounds.right, bounds.bottom)),
            AxisEdge::Top => ((bounds.left, bounds.top), (bounds.right, bounds.top)),
        };
        scene.overlay.push(Primitive::Line {
            from,
            to,
            color: theme.axis_line,
            width: 1.0,
            dash: None,
        });

        // 2. Grid, tick marks and labels
        let font_size = theme.axis_label_size;
        for tick in ticks {
            let pos = scale.map(tick);
            let text = scale.format_tick(tick, format);
            if is_vertical {
                if pos < bounds.top || pos > bounds.bottom {
                    continue;
                }
                scene.plot.push(Primitive::Line {
                    from: (bounds.left, pos),
                    to: (bounds.right, pos),
                    color: theme.grid_line,
                    width: 1.0,
                    dash: None,
                });
                let (x, align) = match edge {
                    AxisEdge::Left => (bounds.left - TICK_LENGTH - 2.0, TextAlign::Right),
                    _ => (bounds.right + TICK_LENGTH + 2.0, TextAlign::Left),
                };
                let tick_x = if edge == AxisEdge::Left {
                    bounds.left - TICK_LENGTH
                } else {
                    bounds.right + TICK_LENGTH
                };
                scene.overlay.push(Primitive::Line {
                    from: (from.0, pos),
                    to: (tick_x, pos),
                    color: theme.axis_line,
                    width: 1.0,
                    dash: None,
                });
                scene.overlay.push(Primitive::Text {
                    origin: (x, pos - font_size / 2.0),
                    text,
                    color: theme.axis_label,
                    size: font_size,
                    align,
                });
            } else {
                if pos < bounds.left || pos > bounds.right {
                    continue;
                }
                scene.plot.push(Primitive::Line {
                    from: (pos, bounds.top),
                    to: (pos, bounds.bottom),
                    color: theme.grid_line,
                    width: 1.0,
                    dash: None,
                });
                let (tick_to, label_y) = match edge {
                    AxisEdge::Top => (bounds.top - TICK_LENGTH, bounds.top - TICK_LENGTH - font_size - 2.0),
                    _ => (bounds.bottom + TICK_LENGTH, bounds.bottom + TICK_LENGTH + 2.0),
                };
                scene.overlay.push(Primitive::Line {
                    from: (pos, from.1),
                    to: (pos, tick_to),
                    color: theme.axis_line,
                    width: 1.0,
                    dash: None,
                });
                scene.overlay.push(Primitive::Text {
                    origin: (pos, label_y),
                    text,
                    color: theme.axis_label,
                    size: font_size,
                    align: TextAlign::Center,
                });
            }
        }
    }
}
