use super::PlotRenderer;
use crate::data_types::SmaPoint;
use crate::scene::{Primitive, Scene};
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

/// Moving-average overlay.
pub struct SmaPlot<'a> {
    pub values: &'a [SmaPoint],
}

impl<'a> SmaPlot<'a> {
    pub fn new(values: &'a [SmaPoint]) -> Self {
        Self { values }
    }
}

impl PlotRenderer for SmaPlot<'_> {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme) {
        let domain = transform.time_domain();
        let start = self
            .values
            .partition_point(|p| (p.time as f64) < domain.min)
            .saturating_sub(1);
        let end = (self.values.partition_point(|p| (p.time as f64) <= domain.max) + 1).min(self.values.len());
        if end < start + 2 {
            return;
        }

        let points = self.values[start..end]
            .iter()
            .map(|p| transform.project(p.time as f64, p.value))
            .collect();
        scene.plot.push(Primitive::Polyline {
            points,
            color: theme.sma,
            width: 1.5,
        });
    }
}
