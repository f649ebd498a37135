use super::PlotRenderer;
use crate::annotations::{handle_points, layout_highlights, line_segment};
use crate::data_types::{AnnotationId, TrendLine};
use crate::scene::{Primitive, Scene};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;
use chrono_tz::Tz;

/// Trend lines with their handles and axis tags.
pub struct AnnotationPlot<'a> {
    pub committed: &'a [TrendLine],
    pub pending: Option<&'a TrendLine>,
    pub selected: Option<&'a AnnotationId>,
    pub timezone: Tz,
}

impl<'a> AnnotationPlot<'a> {
    fn draw_line(&self, scene: &mut Scene, line: &TrendLine, transform: &PlotTransform, theme: &ChartTheme) {
        let (from, to) = line_segment(line, transform);
        scene.plot.push(Primitive::Line {
            from,
            to,
            color: theme.annotation,
            width: theme.annotation_width,
            dash: None,
        });
    }

    fn draw_handle(scene: &mut Scene, center: (f64, f64), theme: &ChartTheme) {
        scene.plot.push(Primitive::Circle {
            center,
            radius: theme.handle_radius,
            fill: theme.handle_fill,
            stroke: Some((theme.annotation, 1.5)),
        });
    }

    fn draw_tags(&self, scene: &mut Scene, line: &TrendLine, transform: &PlotTransform, theme: &ChartTheme) {
        layout_highlights(line, transform, self.timezone).to_primitives(theme, &mut scene.overlay);
    }
}

impl PlotRenderer for AnnotationPlot<'_> {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        for line in self.committed {
            self.draw_line(scene, line, transform, theme);
            if self.selected == Some(&line.id) {
                // A horizontal line is dragged by its body; no handles shown.
                if !line.is_horizontal() {
                    for (_, center) in handle_points(line, transform) {
                        Self::draw_handle(scene, center, theme);
                    }
                }
                self.draw_tags(scene, line, transform, theme);
            }
        }

        if let Some(line) = self.pending {
            self.draw_line(scene, line, transform, theme);
            let (start, _) = line_segment(line, transform);
            Self::draw_handle(scene, start, theme);
            self.draw_tags(scene, line, transform, theme);
        }
    }
}
