use crate::session::ChartSession;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Wheel line height for line-based scroll deltas.
const SCROLL_LINE_HEIGHT: f32 = 20.0;

#[derive(Clone)]
pub struct ChartInputHandler {
    pub chart: Entity<ChartSession>,
    pub focus_handle: FocusHandle,

    // Shared bounds
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartInputHandler {
    pub fn new(chart: Entity<ChartSession>, focus_handle: FocusHandle, bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        Self {
            chart,
            focus_handle,
            bounds,
        }
    }

    /// Window position to chart-local pixels.
    fn local(&self, position: Point<Pixels>) -> (f64, f64) {
        let origin = self.bounds.borrow().origin;
        (
            f32::from(position.x - origin.x) as f64,
            f32::from(position.y - origin.y) as f64,
        )
    }

    pub fn handle_mouse_down(&self, event: &MouseDownEvent, window: &mut Window, cx: &mut App) {
        window.focus(&self.focus_handle);
        let (x, y) = self.local(event.position);
        self.chart.update(cx, |session, cx| {
            session.pointer_down(x, y);
            cx.notify();
        });
    }

    pub fn handle_mouse_move(&self, event: &MouseMoveEvent, _window: &mut Window, cx: &mut App) {
        let (x, y) = self.local(event.position);
        self.chart.update(cx, |session, cx| {
            session.pointer_move(x, y);
            cx.notify();
        });
    }

    pub fn handle_mouse_up(&self, event: &MouseUpEvent, _window: &mut Window, cx: &mut App) {
        let (x, y) = self.local(event.position);
        self.chart.update(cx, |session, cx| {
            session.pointer_up(x, y);
            cx.notify();
        });
    }

    pub fn handle_scroll_wheel(&self, event: &ScrollWheelEvent, _window: &mut Window, cx: &mut App) {
        let (x, _) = self.local(event.position);
        let delta = event.delta.pixel_delta(px(SCROLL_LINE_HEIGHT));
        let dy = f32::from(delta.y) as f64;
        self.chart.update(cx, |session, cx| {
            session.scroll(x, dy);
            cx.notify();
        });
    }

    pub fn handle_hover(&self, hovered: &bool, _window: &mut Window, cx: &mut App) {
        if *hovered {
            return;
        }
        self.chart.update(cx, |session, cx| {
            session.pointer_leave();
            cx.notify();
        });
    }
}
