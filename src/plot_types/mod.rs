// Plot types module

pub mod annotation;
pub mod candlestick;
pub mod line;
pub mod sma;

pub use annotation::AnnotationPlot;
pub use candlestick::CandlestickPlot;
pub use line::LinePlot;
pub use sma::SmaPlot;

use crate::scene::Scene;
use crate::theme::ChartTheme;
use crate::transform::PlotTransform;

/// Trait for rendering plot types into a scene
pub trait PlotRenderer {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform, theme: &ChartTheme);
}
