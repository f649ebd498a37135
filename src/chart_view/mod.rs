pub mod actions;
pub mod input;
pub mod renderer;

use crate::session::ChartSession;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

pub use actions::{
    ArmFreeLine, ArmHorizontalLine, CancelDrawing, ResetView, ToggleChartKind, ToggleSma, ZoomIn, ZoomOut,
};

use self::actions::ChartActionHandler;
use self::input::ChartInputHandler;
use self::renderer::ChartRenderer;

const KEY_CONTEXT: &str = "TrendChart";

/// Registers the chart's key bindings.
pub fn init(cx: &mut App) {
    cx.bind_keys([
        KeyBinding::new("t", ArmFreeLine, Some(KEY_CONTEXT)),
        KeyBinding::new("h", ArmHorizontalLine, Some(KEY_CONTEXT)),
        KeyBinding::new("escape", CancelDrawing, Some(KEY_CONTEXT)),
        KeyBinding::new("r", ResetView, Some(KEY_CONTEXT)),
        KeyBinding::new("c", ToggleChartKind, Some(KEY_CONTEXT)),
        KeyBinding::new("s", ToggleSma, Some(KEY_CONTEXT)),
        KeyBinding::new("=", ZoomIn, Some(KEY_CONTEXT)),
        KeyBinding::new("-", ZoomOut, Some(KEY_CONTEXT)),
    ]);
}

pub struct ChartView {
    pub chart: Entity<ChartSession>,

    // Components (Delegates)
    renderer: ChartRenderer,
    input: ChartInputHandler,
    actions: ChartActionHandler,

    focus_handle: FocusHandle,
}

impl Focusable for ChartView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl ChartView {
    pub fn new(chart: Entity<ChartSession>, cx: &mut Context<Self>) -> Self {
        cx.observe(&chart, |_, _, cx| cx.notify()).detach();

        let focus_handle = cx.focus_handle();
        let bounds = Rc::new(RefCell::new(Bounds::default()));

        Self {
            renderer: ChartRenderer::new(chart.clone(), bounds.clone()),
            input: ChartInputHandler::new(chart.clone(), focus_handle.clone(), bounds),
            actions: ChartActionHandler::new(chart.clone()),
            chart,
            focus_handle,
        }
    }
}

impl Render for ChartView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let element = self.renderer.render(window, cx);

        let input = self.input.clone();
        let actions = self.actions.clone();
        let entity_id = cx.entity_id();

        element
            .id(("chart-view", entity_id))
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_mouse_down(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_down(e, w, c)
            })
            .on_mouse_move({
                let input = input.clone();
                move |e, w, c| input.handle_mouse_move(e, w, c)
            })
            .on_mouse_up(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
            .on_mouse_up_out(MouseButton::Left, {
                let input = input.clone();
                move |e, w, c| input.handle_mouse_up(e, w, c)
            })
            .on_scroll_wheel({
                let input = input.clone();
                move |e, w, c| input.handle_scroll_wheel(e, w, c)
            })
            .on_hover({
                let input = input.clone();
                move |h, w, c| input.handle_hover(h, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_arm_free_line(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_arm_horizontal_line(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_cancel_drawing(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_reset_view(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_toggle_chart_kind(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_toggle_sma(a, w, c)
            })
            .on_action({
                let actions = actions.clone();
                move |a, w, c| actions.handle_zoom_in(a, w, c)
            })
            .on_action(move |a, w, c| actions.handle_zoom_out(a, w, c))
    }
}
