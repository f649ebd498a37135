use crate::data_types::ChartKind;
use crate::session::ChartSession;
use gpui::*;
use tracing::{debug, warn};

actions!(
    trend_chart,
    [
        ArmFreeLine,
        ArmHorizontalLine,
        CancelDrawing,
        ResetView,
        ToggleChartKind,
        ToggleSma,
        ZoomIn,
        ZoomOut
    ]
);

const KEY_ZOOM_FACTOR: f64 = 1.25;

#[derive(Clone)]
pub struct ChartActionHandler {
    pub chart: Entity<ChartSession>,
}

impl ChartActionHandler {
    pub fn new(chart: Entity<ChartSession>) -> Self {
        Self { chart }
    }

    fn update(&self, cx: &mut App, f: impl FnOnce(&mut ChartSession)) {
        self.chart.update(cx, |session, cx| {
            f(session);
            cx.notify();
        });
    }

    pub fn handle_arm_free_line(&self, _: &ArmFreeLine, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| s.arm_free_line_drawing(|| debug!("free line drawing completed")));
    }

    pub fn handle_arm_horizontal_line(&self, _: &ArmHorizontalLine, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| {
            s.arm_horizontal_line_drawing(|| debug!("horizontal line drawing completed"))
        });
    }

    pub fn handle_cancel_drawing(&self, _: &CancelDrawing, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| s.cancel_drawing());
    }

    pub fn handle_reset_view(&self, _: &ResetView, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| s.reset_view());
    }

    pub fn handle_toggle_chart_kind(&self, _: &ToggleChartKind, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| {
            let next = match s.config().chart_kind {
                ChartKind::Line => ChartKind::Candlestick,
                ChartKind::Candlestick => ChartKind::Line,
            };
            s.set_chart_kind(next);
        });
    }

    pub fn handle_toggle_sma(&self, _: &ToggleSma, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| {
            let sma = s.config().sma;
            if let Err(err) = s.set_sma(!sma.enabled, sma.period) {
                warn!("could not toggle SMA: {err}");
            }
        });
    }

    pub fn handle_zoom_in(&self, _: &ZoomIn, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| {
            let bounds = s.transform().bounds;
            s.zoom_at((bounds.left + bounds.right) / 2.0, KEY_ZOOM_FACTOR);
        });
    }

    pub fn handle_zoom_out(&self, _: &ZoomOut, _win: &mut Window, cx: &mut App) {
        self.update(cx, |s| {
            let bounds = s.transform().bounds;
            s.zoom_at((bounds.left + bounds.right) / 2.0, 1.0 / KEY_ZOOM_FACTOR);
        });
    }
}
