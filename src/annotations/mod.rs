//! In-memory store of committed and in-progress trend lines.
//!
//! Every coordinate kept here is in data space. Pixel input is clamped to the
//! plot and unprojected through the current [`PlotTransform`] on arrival.

pub mod highlight;

pub use highlight::{layout_highlights, AxisTags, HighlightLayout, TagBox};

use crate::data_types::{AnnotationId, DrawMode, Endpoint, Timestamp, TrendLine};
use crate::transform::PlotTransform;
use crate::utils::round_price;
use tracing::{debug, trace};

/// Where the drawing state machine currently is. Derived from the armed mode
/// and the pending slot, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    Idle,
    DrawingFreeStart,
    DrawingFreeEnd,
    DrawingHorizontal,
}

/// Result of a drawing click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    /// The click was not meaningful in the current mode.
    Ignored,
    /// First free-line click; the anchor is pending.
    Anchored,
    Committed(AnnotationId),
    /// Same id already committed; nothing was inserted.
    Duplicate(AnnotationId),
}

impl PlaceOutcome {
    /// Whether the click finished a drawing gesture.
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Committed(_) | Self::Duplicate(_))
    }
}

#[derive(Clone, Debug, Default)]
pub struct AnnotationModel {
    committed: Vec<TrendLine>,
    pending: Option<TrendLine>,
    draw_mode: DrawMode,
    selected: Option<AnnotationId>,
}

/// Unprojects a pointer clamped to the plot, rounding the price to cents.
fn data_point(transform: &PlotTransform, x: f64, y: f64) -> (Timestamp, f64) {
    let (date, price) = transform.clamped_unproject(x, y);
    (date, round_price(price))
}

impl AnnotationModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn committed(&self) -> &[TrendLine] {
        &self.committed
    }

    pub fn pending(&self) -> Option<&TrendLine> {
        self.pending.as_ref()
    }

    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    pub fn selected(&self) -> Option<&AnnotationId> {
        self.selected.as_ref()
    }

    pub fn get(&self, id: &AnnotationId) -> Option<&TrendLine> {
        self.committed.iter().find(|l| &l.id == id)
    }

    fn get_mut(&mut self, id: &AnnotationId) -> Option<&mut TrendLine> {
        self.committed.iter_mut().find(|l| &l.id == id)
    }

    pub fn contains(&self, id: &AnnotationId) -> bool {
        self.get(id).is_some()
    }

    pub fn interaction_state(&self) -> InteractionState {
        match (self.draw_mode, &self.pending) {
            (DrawMode::None, _) => InteractionState::Idle,
            (DrawMode::Free, None) => InteractionState::DrawingFreeStart,
            (DrawMode::Free, Some(_)) => InteractionState::DrawingFreeEnd,
            (DrawMode::Horizontal, _) => InteractionState::DrawingHorizontal,
        }
    }

    pub fn begin_free(&mut self) {
        self.arm(DrawMode::Free);
    }

    pub fn begin_horizontal(&mut self) {
        self.arm(DrawMode::Horizontal);
    }

    fn arm(&mut self, mode: DrawMode) {
        let discarded = self.pending.take().is_some();
        self.draw_mode = mode;
        debug!(?mode, discarded, "draw mode armed");
    }

    /// Drops the pending line and disarms. Committed lines are untouched.
    pub fn cancel(&mut self) {
        let discarded = self.pending.take().is_some();
        if self.draw_mode.is_drawing() || discarded {
            debug!(discarded, "drawing cancelled");
        }
        self.draw_mode = DrawMode::None;
    }

    /// First click anchors a degenerate segment, second click finishes and
    /// commits it. The mode resets after the second click either way.
    pub fn place_free_point(&mut self, x: f64, y: f64, transform: &PlotTransform) -> PlaceOutcome {
        if self.draw_mode != DrawMode::Free {
            return PlaceOutcome::Ignored;
        }
        let (date, price) = data_point(transform, x, y);

        let Some(mut line) = self.pending.take() else {
            debug!(date, price, "free line anchored");
            self.pending = Some(TrendLine::free_anchor(price, date));
            return PlaceOutcome::Anchored;
        };

        line.set_endpoint(Endpoint::End, date, price);
        line.id = line.derive_id();
        self.draw_mode = DrawMode::None;
        self.commit(line)
    }

    /// Moves the pending line's free end to follow the pointer.
    pub fn update_pending_end(&mut self, x: f64, y: f64, transform: &PlotTransform) -> bool {
        if self.draw_mode != DrawMode::Free {
            return false;
        }
        let Some(line) = self.pending.as_mut() else {
            return false;
        };
        let (date, price) = data_point(transform, x, y);
        line.set_endpoint(Endpoint::End, date, price);
        true
    }

    /// Commits a horizontal line at the price under `y`, spanning `span`.
    pub fn place_horizontal(
        &mut self,
        y: f64,
        transform: &PlotTransform,
        span: (Timestamp, Timestamp),
    ) -> PlaceOutcome {
        if self.draw_mode != DrawMode::Horizontal {
            return PlaceOutcome::Ignored;
        }
        let price = round_price(transform.price_at(transform.bounds.clamp_y(y)));
        self.draw_mode = DrawMode::None;
        self.commit(TrendLine::horizontal(price, span))
    }

    fn commit(&mut self, mut line: TrendLine) -> PlaceOutcome {
        if self.contains(&line.id) {
            debug!(id = %line.id, "duplicate trend line suppressed");
            return PlaceOutcome::Duplicate(line.id);
        }
        line.confirm();
        let id = line.id.clone();
        debug!(id = %id, kind = ?line.kind, "trend line committed");
        self.committed.push(line);
        self.selected = Some(id.clone());
        PlaceOutcome::Committed(id)
    }

    /// Moves one endpoint to a pointer position clamped to the plot. Both
    /// prices of a horizontal line follow; its dates stay pinned.
    pub fn update_endpoint(
        &mut self,
        id: &AnnotationId,
        which: Endpoint,
        x: f64,
        y: f64,
        transform: &PlotTransform,
    ) -> bool {
        let (date, price) = data_point(transform, x, y);
        let Some(line) = self.get_mut(id) else {
            return false;
        };
        if line.is_horizontal() {
            line.start_price = price;
            line.end_price = price;
        } else {
            line.set_endpoint(which, date, price);
        }
        trace!(id = %id, ?which, date, price, "endpoint moved");
        true
    }

    /// Shifts a whole line by a pixel delta. The delta is shortened so no
    /// endpoint leaves the plot and the segment keeps its shape.
    pub fn translate(&mut self, id: &AnnotationId, dx: f64, dy: f64, transform: &PlotTransform) -> bool {
        let bounds = transform.bounds;
        let Some(line) = self.get_mut(id) else {
            return false;
        };

        let (x1, y1) = transform.project(line.start_date as f64, line.start_price);
        let (x2, y2) = transform.project(line.end_date as f64, line.end_price);
        let dy = clamp_delta(dy, y1.min(y2), y1.max(y2), bounds.top, bounds.bottom);

        if line.is_horizontal() {
            let price = round_price(transform.price_at(y1 + dy));
            line.start_price = price;
            line.end_price = price;
        } else {
            let dx = clamp_delta(dx, x1.min(x2), x1.max(x2), bounds.left, bounds.right);
            let (sd, sp) = data_point(transform, x1 + dx, y1 + dy);
            let (ed, ep) = data_point(transform, x2 + dx, y2 + dy);
            line.set_endpoint(Endpoint::Start, sd, sp);
            line.set_endpoint(Endpoint::End, ed, ep);
        }
        trace!(id = %id, dx, dy, "trend line translated");
        true
    }

    /// Selects one committed line, or none. Unknown ids deselect.
    pub fn set_selected(&mut self, id: Option<&AnnotationId>) {
        let next = id.filter(|id| self.contains(id)).cloned();
        if next != self.selected {
            debug!(selected = ?next.as_ref().map(|id| id.as_str()), "selection changed");
        }
        self.selected = next;
    }

    pub fn is_selected(&self, id: &AnnotationId) -> bool {
        self.selected.as_ref() == Some(id)
    }

    /// Re-pins horizontal lines to the series date extent and deselects all.
    pub fn rehydrate(&mut self, span: Option<(Timestamp, Timestamp)>) {
        if let Some((first, last)) = span {
            for line in self.committed.iter_mut().filter(|l| l.is_horizontal()) {
                line.start_date = first;
                line.end_date = last;
            }
        }
        self.selected = None;
        debug!(count = self.committed.len(), "annotations rehydrated");
    }

    /// Drops the pending slot, the armed mode and the selection. Committed
    /// lines stay.
    pub fn reset_transient(&mut self) {
        self.pending = None;
        self.draw_mode = DrawMode::None;
        self.selected = None;
    }
}

/// On-screen segment of a line. A horizontal line spans the plot width.
pub fn line_segment(line: &TrendLine, transform: &PlotTransform) -> ((f64, f64), (f64, f64)) {
    if line.is_horizontal() {
        let y = transform.y_data_to_screen(line.start_price);
        let bounds = transform.bounds;
        ((bounds.left, y), (bounds.right, y))
    } else {
        (
            transform.project(line.start_date as f64, line.start_price),
            transform.project(line.end_date as f64, line.end_price),
        )
    }
}

/// Handle centres for both endpoints.
pub fn handle_points(line: &TrendLine, transform: &PlotTransform) -> [(Endpoint, (f64, f64)); 2] {
    let (a, b) = line_segment(line, transform);
    [(Endpoint::Start, a), (Endpoint::End, b)]
}

/// Shortens `delta` so `[lo, hi] + delta` stays inside `[min, max]`. A span
/// already outside the bounds may stay where it is.
fn clamp_delta(delta: f64, lo: f64, hi: f64, min: f64, max: f64) -> f64 {
    let floor = (min - lo).min(0.0);
    let ceil = (max - hi).max(0.0);
    delta.max(floor).min(ceil)
}
