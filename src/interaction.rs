//! Pointer handling: drawing clicks, drags on trend lines, drag-to-pan and
//! selection. All pixel input is clamped to the plot before it reaches the
//! annotation model.

use crate::annotations::{handle_points, line_segment, AnnotationModel, InteractionState, PlaceOutcome};
use crate::data_types::{OhlcvSeries, Timestamp};
use crate::scene::HitTarget;
use crate::transform::PlotTransform;
use crate::view_controller::ViewTransformController;
use tracing::{debug, trace};

/// A release closer than this to the press is a click.
pub const CLICK_THRESHOLD: f64 = 3.0;
pub const HANDLE_HIT_RADIUS: f64 = 8.0;
pub const BODY_HIT_TOLERANCE: f64 = 5.0;

pub type CompletionCallback = Box<dyn FnOnce()>;

#[derive(Clone, Debug, PartialEq)]
pub enum DragKind {
    Target(HitTarget),
    Pan,
    /// Press with nothing to drag; only matters if it ends as a click.
    Press,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    pub kind: DragKind,
    pub origin: (f64, f64),
    pub last: (f64, f64),
    pub moved: bool,
}

/// Mutable pieces of a session a pointer event may touch.
pub struct InteractionContext<'a> {
    pub model: &'a mut AnnotationModel,
    pub view: &'a mut ViewTransformController,
    pub transform: &'a mut PlotTransform,
    pub series: &'a OhlcvSeries,
}

impl InteractionContext<'_> {
    /// Dates a horizontal line is pinned to.
    fn horizontal_span(&self) -> (Timestamp, Timestamp) {
        self.series.time_extent().unwrap_or_else(|| {
            let d = self.transform.time_domain();
            (d.min.round() as Timestamp, d.max.round() as Timestamp)
        })
    }
}

fn distance_to_segment(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq <= f64::EPSILON {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

/// Topmost committed handle under the pointer, else the topmost body.
/// Handles are hittable whether or not they are shown.
pub fn hit_test(model: &AnnotationModel, transform: &PlotTransform, x: f64, y: f64) -> Option<HitTarget> {
    let lines = model.committed();
    for line in lines.iter().rev() {
        for (which, (hx, hy)) in handle_points(line, transform) {
            if ((x - hx).powi(2) + (y - hy).powi(2)).sqrt() <= HANDLE_HIT_RADIUS {
                return Some(HitTarget::Handle(line.id.clone(), which));
            }
        }
    }
    lines
        .iter()
        .rev()
        .find(|line| {
            let (a, b) = line_segment(line, transform);
            distance_to_segment((x, y), a, b) <= BODY_HIT_TOLERANCE
        })
        .map(|line| HitTarget::Body(line.id.clone()))
}

#[derive(Default)]
pub struct Interaction {
    drag: Option<DragState>,
    hover: Option<(f64, f64)>,
    on_complete: Option<CompletionCallback>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn hover(&self) -> Option<(f64, f64)> {
        self.hover
    }

    /// Stores the callback of a newly armed tool, dropping any earlier one
    /// unfired.
    pub fn set_on_complete(&mut self, callback: Option<CompletionCallback>) {
        self.on_complete = callback;
    }

    /// Forgets the drag, the hover point and the armed tool's callback.
    pub fn reset(&mut self) {
        self.drag = None;
        self.hover = None;
        self.on_complete = None;
    }

    pub fn pointer_down(&mut self, ctx: &mut InteractionContext<'_>, x: f64, y: f64) {
        let kind = match hit_test(ctx.model, ctx.transform, x, y) {
            Some(target) => DragKind::Target(target),
            None if !ctx.model.draw_mode().is_drawing() && ctx.transform.bounds.contains(x, y) => {
                ctx.view.begin_gesture();
                DragKind::Pan
            }
            None => DragKind::Press,
        };
        self.drag = Some(DragState {
            kind,
            origin: (x, y),
            last: (x, y),
            moved: false,
        });
    }

    pub fn pointer_move(&mut self, ctx: &mut InteractionContext<'_>, x: f64, y: f64) {
        self.hover = Some((x, y));

        if ctx.model.interaction_state() == InteractionState::DrawingFreeEnd {
            ctx.model.update_pending_end(x, y, ctx.transform);
        }

        let Some(drag) = self.drag.as_mut() else {
            return;
        };
        if !drag.moved {
            let dist = ((x - drag.origin.0).powi(2) + (y - drag.origin.1).powi(2)).sqrt();
            if dist < CLICK_THRESHOLD {
                return;
            }
            drag.moved = true;
            if let DragKind::Target(target) = &drag.kind {
                let id = target.id();
                ctx.model.set_selected(Some(id));
                debug!(?target, "drag started");
            }
        }

        let (dx, dy) = (x - drag.last.0, y - drag.last.1);
        drag.last = (x, y);
        match &drag.kind {
            DragKind::Target(HitTarget::Handle(id, which)) => {
                ctx.model.update_endpoint(id, *which, x, y, ctx.transform);
            }
            DragKind::Target(HitTarget::Body(id)) => {
                ctx.model.translate(id, dx, dy, ctx.transform);
            }
            DragKind::Pan if !ctx.model.draw_mode().is_drawing() => {
                ctx.view.pan_by(dx, ctx.series, ctx.transform);
            }
            DragKind::Pan => {}
            DragKind::Press => {}
        }
        trace!(dx, dy, "pointer dragged");
    }

    /// Ends a drag. A release that never left the click threshold is a click.
    pub fn pointer_up(&mut self, ctx: &mut InteractionContext<'_>, x: f64, y: f64) {
        let Some(drag) = self.drag.take() else {
            return;
        };
        match drag.kind {
            DragKind::Pan => ctx.view.end_gesture(),
            DragKind::Target(ref target) if drag.moved => debug!(?target, "drag ended"),
            _ => {}
        }
        if !drag.moved {
            self.click(ctx, x, y);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.hover = None;
    }

    /// A click advances the drawing state machine, or toggles selection when
    /// no tool is armed.
    pub fn click(&mut self, ctx: &mut InteractionContext<'_>, x: f64, y: f64) {
        let outcome = match ctx.model.interaction_state() {
            InteractionState::DrawingFreeStart | InteractionState::DrawingFreeEnd => {
                ctx.model.place_free_point(x, y, ctx.transform)
            }
            InteractionState::DrawingHorizontal => {
                let span = ctx.horizontal_span();
                ctx.model.place_horizontal(y, ctx.transform, span)
            }
            InteractionState::Idle => {
                Self::toggle_selection(ctx, x, y);
                PlaceOutcome::Ignored
            }
        };

        if outcome.is_complete() {
            if let Some(callback) = self.on_complete.take() {
                callback();
            }
        }
    }

    fn toggle_selection(ctx: &mut InteractionContext<'_>, x: f64, y: f64) {
        match hit_test(ctx.model, ctx.transform, x, y) {
            Some(target) if !ctx.model.is_selected(target.id()) => {
                ctx.model.set_selected(Some(target.id()));
            }
            _ => ctx.model.set_selected(None),
        }
    }
}
