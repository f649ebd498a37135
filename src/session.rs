//! The chart session: one surface, its data, mappings, annotations and
//! pointer state, driven by the surrounding UI.

use crate::annotations::{AnnotationModel, InteractionState};
use crate::axis_renderer::AxisRenderer;
use crate::data_types::{
    ChartConfig, ChartKind, DataProvider, DrawMode, Ohlcv, OhlcvSeries, PriceField, SeriesRequest, SmaPoint,
};
use crate::indicators::calculate_sma;
use crate::interaction::{Interaction, InteractionContext};
use crate::plot_types::{AnnotationPlot, CandlestickPlot, LinePlot, PlotRenderer, SmaPlot};
use crate::scales::ChartScale;
use crate::scene::Scene;
use crate::theme::ChartTheme;
use crate::tooltip::Tooltip;
use crate::transform::{PlotRect, PlotTransform};
use crate::view_controller::{ViewController, ViewTransformController, ZoomTransform};
use eyre::{ensure, Result, WrapErr};
use tracing::{debug, warn};

pub struct ChartSession {
    config: ChartConfig,
    theme: ChartTheme,
    series: OhlcvSeries,
    sma: Vec<SmaPoint>,
    transform: PlotTransform,
    view: ViewTransformController,
    model: AnnotationModel,
    interaction: Interaction,
}

/// Identity mappings for `series` on the plot described by `config`.
fn build_mappings(series: &OhlcvSeries, config: &ChartConfig) -> (PlotTransform, ViewTransformController) {
    let bounds = PlotRect::from_margins(config.width, config.height, &config.margins);
    let time = ViewController::initial_time_domain(series);
    let price = ViewController::initial_price_domain(series, config.price_padding_pct);
    let transform = PlotTransform::from_domains(time, price, bounds);
    let original_x = ChartScale::new_linear(time.as_tuple(), (bounds.left, bounds.right));
    let view = ViewTransformController::new(original_x, config.zoom, config.price_padding_pct);
    (transform, view)
}

fn sma_for(series: &OhlcvSeries, config: &ChartConfig) -> Vec<SmaPoint> {
    if config.sma.enabled {
        calculate_sma(series.points(), config.sma.period, PriceField::Close)
    } else {
        Vec::new()
    }
}

impl ChartSession {
    /// An empty surface with `config`.
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        let series = OhlcvSeries::default();
        let (transform, view) = build_mappings(&series, &config);
        Ok(Self {
            config,
            theme: ChartTheme::default(),
            series,
            sma: Vec::new(),
            transform,
            view,
            model: AnnotationModel::new(),
            interaction: Interaction::new(),
        })
    }

    /// Rebuilds the surface from `points`. The view returns to identity and
    /// any drawing in progress is dropped; committed lines are kept for
    /// [`Self::rehydrate_annotations`].
    pub fn initialize(&mut self, points: Vec<Ohlcv>, config: ChartConfig) -> Result<()> {
        if let Err(err) = config.validate() {
            warn!(%err, "rejected chart config");
            return Err(err);
        }
        let series = OhlcvSeries::new(points)?;
        self.install(series, config);
        Ok(())
    }

    fn install(&mut self, series: OhlcvSeries, config: ChartConfig) {
        let (transform, view) = build_mappings(&series, &config);
        self.sma = sma_for(&series, &config);
        self.series = series;
        self.config = config;
        self.transform = transform;
        self.view = view;
        self.model.reset_transient();
        self.interaction.reset();
        debug!(
            points = self.series.len(),
            kind = %self.config.chart_kind,
            "chart surface initialized"
        );
    }

    /// Fetches a new series and rebuilds the surface with it. On any failure
    /// the session is left exactly as it was.
    pub fn refresh(&mut self, provider: &dyn DataProvider, request: &SeriesRequest) -> Result<()> {
        let fetched = provider
            .fetch(request)
            .and_then(OhlcvSeries::new)
            .wrap_err_with(|| format!("failed to load {} ({})", request.symbol, request.timeframe.label()));
        let series = match fetched {
            Ok(series) => series,
            Err(err) => {
                warn!(symbol = %request.symbol, "refresh failed: {err:#}");
                return Err(err);
            }
        };
        self.install(series, self.config.clone());
        self.rehydrate_annotations();
        Ok(())
    }

    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        self.config.chart_kind = kind;
    }

    pub fn set_sma(&mut self, enabled: bool, period: usize) -> Result<()> {
        ensure!(!enabled || period > 0, "SMA period must be positive");
        self.config.sma.enabled = enabled;
        self.config.sma.period = period;
        self.sma = sma_for(&self.series, &self.config);
        Ok(())
    }

    /// Appends a bar and extends the time mapping to include it, keeping the
    /// current zoom. Annotations are untouched.
    pub fn append_point(&mut self, point: Ohlcv) -> Result<()> {
        self.series.push(point)?;
        self.sma = sma_for(&self.series, &self.config);
        let zoom = self.view.zoom();
        self.rebuild_mappings(zoom);
        Ok(())
    }

    /// Resizes the surface keeping the current zoom.
    pub fn set_size(&mut self, width: f64, height: f64) -> Result<()> {
        let mut config = self.config.clone();
        config.width = width;
        config.height = height;
        config.validate()?;
        self.config = config;
        let zoom = self.view.zoom();
        self.rebuild_mappings(zoom);
        Ok(())
    }

    fn rebuild_mappings(&mut self, zoom: ZoomTransform) {
        let (transform, view) = build_mappings(&self.series, &self.config);
        self.transform = transform;
        self.view = view;
        let bounds = self.transform.bounds;
        let zoom = ViewController::constrain(zoom, bounds.left, bounds.right, &self.config.zoom);
        self.view.apply(zoom, &self.series, &mut self.transform);
    }

    pub fn arm_free_line_drawing(&mut self, on_complete: impl FnOnce() + 'static) {
        self.model.begin_free();
        self.interaction.set_on_complete(Some(Box::new(on_complete)));
    }

    pub fn arm_horizontal_line_drawing(&mut self, on_complete: impl FnOnce() + 'static) {
        self.model.begin_horizontal();
        self.interaction.set_on_complete(Some(Box::new(on_complete)));
    }

    pub fn cancel_drawing(&mut self) {
        self.model.cancel();
        self.interaction.set_on_complete(None);
    }

    /// Re-derives every committed line against the current mapping after a
    /// surface rebuild. Horizontal lines re-pin to the new date extent.
    pub fn rehydrate_annotations(&mut self) {
        self.model.rehydrate(self.series.time_extent());
    }

    fn context(&mut self) -> (&mut Interaction, InteractionContext<'_>) {
        (
            &mut self.interaction,
            InteractionContext {
                model: &mut self.model,
                view: &mut self.view,
                transform: &mut self.transform,
                series: &self.series,
            },
        )
    }

    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let (interaction, mut ctx) = self.context();
        interaction.pointer_down(&mut ctx, x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let (interaction, mut ctx) = self.context();
        interaction.pointer_move(&mut ctx, x, y);
    }

    pub fn pointer_up(&mut self, x: f64, y: f64) {
        let (interaction, mut ctx) = self.context();
        interaction.pointer_up(&mut ctx, x, y);
    }

    /// Press and release at one spot.
    pub fn click(&mut self, x: f64, y: f64) {
        self.pointer_down(x, y);
        self.pointer_up(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// Wheel zoom around `x`. Ignored while a drawing tool is armed.
    pub fn scroll(&mut self, x: f64, delta_y: f64) {
        let factor = ViewController::compute_zoom_factor(delta_y, self.config.zoom.wheel_sensitivity);
        self.zoom_at(x, factor);
    }

    pub fn zoom_at(&mut self, x: f64, factor: f64) {
        if self.model.draw_mode().is_drawing() {
            return;
        }
        self.view.begin_gesture();
        self.view.zoom_at(x, factor, &self.series, &mut self.transform);
        self.view.end_gesture();
    }

    pub fn pan_by(&mut self, dx: f64) {
        if self.model.draw_mode().is_drawing() {
            return;
        }
        self.view.begin_gesture();
        self.view.pan_by(dx, &self.series, &mut self.transform);
        self.view.end_gesture();
    }

    pub fn reset_view(&mut self) {
        if self.model.draw_mode().is_drawing() {
            return;
        }
        self.view.reset(&self.series, &mut self.transform);
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn theme(&self) -> &ChartTheme {
        &self.theme
    }

    pub fn series(&self) -> &OhlcvSeries {
        &self.series
    }

    pub fn sma(&self) -> &[SmaPoint] {
        &self.sma
    }

    pub fn transform(&self) -> &PlotTransform {
        &self.transform
    }

    pub fn zoom(&self) -> ZoomTransform {
        self.view.zoom()
    }

    pub fn annotations(&self) -> &AnnotationModel {
        &self.model
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.model.draw_mode()
    }

    pub fn interaction_state(&self) -> InteractionState {
        self.model.interaction_state()
    }

    /// Hover readout, hidden while dragging or placing a horizontal line.
    pub fn tooltip(&self) -> Option<Tooltip> {
        if self.interaction.drag().is_some_and(|d| d.moved)
            || self.interaction_state() == InteractionState::DrawingHorizontal
        {
            return None;
        }
        let pointer = self.interaction.hover()?;
        Tooltip::at(
            &self.series,
            &self.transform,
            self.config.chart_kind,
            pointer,
            self.config.margins.left,
        )
    }

    /// Projects everything through the current mappings.
    pub fn scene(&self) -> Scene {
        let transform = &self.transform;
        let theme = &self.theme;
        let mut scene = Scene::new(transform.bounds);

        AxisRenderer::render(&mut scene, transform, theme);

        match self.config.chart_kind {
            ChartKind::Line => LinePlot::new(&self.series).render(&mut scene, transform, theme),
            ChartKind::Candlestick => CandlestickPlot::new(&self.series).render(&mut scene, transform, theme),
        }
        if self.config.sma.enabled {
            SmaPlot::new(&self.sma).render(&mut scene, transform, theme);
        }

        AnnotationPlot {
            committed: self.model.committed(),
            pending: self.model.pending(),
            selected: self.model.selected(),
            timezone: self.config.timezone,
        }
        .render(&mut scene, transform, theme);

        if let Some(tooltip) = self.tooltip() {
            tooltip.render(&mut scene, transform, theme);
        }
        scene
    }
}
