//! Pixel-space drawing primitives produced by the engine and painted by a backend.

use crate::data_types::{AnnotationId, Endpoint};
use crate::theme::Color;
use crate::transform::PlotRect;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning two coordinates in either order.
    pub fn spanning(a: (f64, f64), b: (f64, f64)) -> Self {
        let x = a.0.min(b.0);
        let y = a.1.min(b.1);
        Self::new(x, y, (a.0 - b.0).abs(), (a.1 - b.1).abs())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line {
        from: (f64, f64),
        to: (f64, f64),
        color: Color,
        width: f64,
        /// Dash length; solid when `None`.
        dash: Option<f64>,
    },
    Polyline {
        points: Vec<(f64, f64)>,
        color: Color,
        width: f64,
    },
    Rect {
        rect: Rect,
        fill: Color,
        stroke: Option<Color>,
    },
    Circle {
        center: (f64, f64),
        radius: f64,
        fill: Color,
        stroke: Option<(Color, f64)>,
    },
    /// `origin.1` is the top of the line; `origin.0` is interpreted by `align`.
    Text {
        origin: (f64, f64),
        text: String,
        color: Color,
        size: f64,
        align: TextAlign,
    },
}

/// What a pointer can grab on the chart surface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Handle(AnnotationId, Endpoint),
    Body(AnnotationId),
}

impl HitTarget {
    pub fn id(&self) -> &AnnotationId {
        match self {
            Self::Handle(id, _) | Self::Body(id) => id,
        }
    }
}

/// One frame. `plot` is drawn clipped to `clip`, `overlay` on top unclipped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub clip: PlotRect,
    pub plot: Vec<Primitive>,
    pub overlay: Vec<Primitive>,
}

impl Scene {
    pub fn new(clip: PlotRect) -> Self {
        Self {
            clip,
            plot: Vec::new(),
            overlay: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plot.is_empty() && self.overlay.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.plot.iter().chain(&self.overlay).filter_map(|p| match p {
            Primitive::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}
