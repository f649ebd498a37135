//! gpui_trend_chart: an OHLCV chart engine with user-drawn trend lines, and a
//! GPUI view for it.

pub mod annotations;
pub mod axis_renderer;
#[cfg(feature = "gui")]
pub mod chart_view;
pub mod data_types;
pub mod indicators;
pub mod interaction;
pub mod plot_types;
pub mod scales;
pub mod scene;
pub mod session;
pub mod theme;
pub mod tooltip;
pub mod transform;
pub mod utils;
pub mod view_controller;

#[cfg(feature = "gui")]
pub use chart_view::{init, ChartView};
pub use annotations::{AnnotationModel, InteractionState, PlaceOutcome};
pub use data_types::{
    AnnotationId, ChartConfig, ChartKind, DataProvider, DrawMode, Endpoint, Interval, Ohlcv, OhlcvSeries,
    SeriesRequest, Timeframe, TrendLine, TrendLineKind,
};
pub use plot_types::PlotRenderer;
pub use scene::{HitTarget, Primitive, Scene};
pub use session::ChartSession;
pub use transform::{PlotRect, PlotTransform};
