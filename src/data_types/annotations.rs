use crate::data_types::Timestamp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable key of a trend line, derived from its kind and coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AnnotationId(pub String);

impl AnnotationId {
    pub fn horizontal(price: f64) -> Self {
        Self(format!("hz_{price}"))
    }

    pub fn free(start_price: f64, start: Timestamp, end_price: f64, end: Timestamp) -> Self {
        Self(format!("free_from_{start_price}_{start}_to_{end_price}_{end}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AnnotationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendLineKind {
    Free,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

/// Fill state of a trend line's axis tags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TagAccent {
    #[default]
    Preview,
    Confirmed,
}

/// Per-axis highlight record. Only state lives here; tag geometry is
/// re-projected from the trend line's data-space values on every redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisHighlight {
    pub accent: TagAccent,
    /// Whether the tag has a separate end tag and cover band.
    pub has_end_tag: bool,
}

impl AxisHighlight {
    pub fn preview(has_end_tag: bool) -> Self {
        Self {
            accent: TagAccent::Preview,
            has_end_tag,
        }
    }

    pub fn confirm(&mut self) {
        self.accent = TagAccent::Confirmed;
    }
}

/// A user-drawn trend line in data space.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub id: AnnotationId,
    pub kind: TrendLineKind,
    pub start_price: f64,
    pub end_price: f64,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub price_highlight: AxisHighlight,
    pub date_highlight: AxisHighlight,
}

impl TrendLine {
    /// Degenerate free segment anchored at one point, as created by the first click.
    pub fn free_anchor(price: f64, date: Timestamp) -> Self {
        Self {
            id: AnnotationId(String::new()),
            kind: TrendLineKind::Free,
            start_price: price,
            end_price: price,
            start_date: date,
            end_date: date,
            price_highlight: AxisHighlight::preview(true),
            date_highlight: AxisHighlight::preview(true),
        }
    }

    /// Committed-on-creation horizontal line spanning `(first, last)` of the series.
    pub fn horizontal(price: f64, span: (Timestamp, Timestamp)) -> Self {
        let confirmed = AxisHighlight {
            accent: TagAccent::Confirmed,
            has_end_tag: false,
        };
        Self {
            id: AnnotationId::horizontal(price),
            kind: TrendLineKind::Horizontal,
            start_price: price,
            end_price: price,
            start_date: span.0,
            end_date: span.1,
            price_highlight: confirmed,
            date_highlight: confirmed,
        }
    }

    pub fn is_free(&self) -> bool {
        self.kind == TrendLineKind::Free
    }

    pub fn is_horizontal(&self) -> bool {
        self.kind == TrendLineKind::Horizontal
    }

    pub fn start(&self) -> (Timestamp, f64) {
        (self.start_date, self.start_price)
    }

    pub fn end(&self) -> (Timestamp, f64) {
        (self.end_date, self.end_price)
    }

    pub fn endpoint(&self, which: Endpoint) -> (Timestamp, f64) {
        match which {
            Endpoint::Start => self.start(),
            Endpoint::End => self.end(),
        }
    }

    pub fn set_endpoint(&mut self, which: Endpoint, date: Timestamp, price: f64) {
        match which {
            Endpoint::Start => {
                self.start_date = date;
                self.start_price = price;
            }
            Endpoint::End => {
                self.end_date = date;
                self.end_price = price;
            }
        }
    }

    /// Recomputes the id from the current coordinates.
    pub fn derive_id(&self) -> AnnotationId {
        match self.kind {
            TrendLineKind::Free => AnnotationId::free(
                self.start_price,
                self.start_date,
                self.end_price,
                self.end_date,
            ),
            TrendLineKind::Horizontal => AnnotationId::horizontal(self.start_price),
        }
    }

    pub fn confirm(&mut self) {
        self.price_highlight.confirm();
        self.date_highlight.confirm();
    }
}
