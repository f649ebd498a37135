//! Axis highlight tags for trend lines.
//!
//! Tag geometry is recomputed from data-space values and the current mapping
//! on every call; nothing here is cached between frames.

use crate::data_types::{TagAccent, Timestamp, TrendLine};
use crate::scene::{Primitive, Rect, TextAlign};
use crate::theme::{ChartTheme, Color};
use crate::transform::PlotTransform;
use crate::utils::date_formatter::{format_price, format_tag_date};
use chrono_tz::Tz;

pub const PRICE_TAG_WIDTH: f64 = 36.0;
pub const PRICE_TAG_HEIGHT: f64 = 12.0;
pub const DATE_TAG_WIDTH: f64 = 100.0;
pub const DATE_TAG_HEIGHT: f64 = 18.0;

#[derive(Clone, Debug, PartialEq)]
pub struct TagBox {
    pub rect: Rect,
    pub text: String,
    pub accent: TagAccent,
}

/// Tags of one axis: a start tag, an optional end tag and the cover band
/// between them.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTags {
    pub start: TagBox,
    pub end: Option<TagBox>,
    pub cover: Option<Rect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightLayout {
    pub price: AxisTags,
    pub date: AxisTags,
}

fn price_tag(y: f64, transform: &PlotTransform, price: f64, accent: TagAccent) -> TagBox {
    TagBox {
        rect: Rect::new(
            transform.bounds.right,
            y - PRICE_TAG_HEIGHT / 2.0,
            PRICE_TAG_WIDTH,
            PRICE_TAG_HEIGHT,
        ),
        text: format_price(price),
        accent,
    }
}

fn date_tag(x: f64, transform: &PlotTransform, date: Timestamp, tz: Tz, accent: TagAccent) -> TagBox {
    TagBox {
        rect: Rect::new(
            x - DATE_TAG_WIDTH / 2.0,
            transform.bounds.bottom,
            DATE_TAG_WIDTH,
            DATE_TAG_HEIGHT,
        ),
        text: format_tag_date(date, tz),
        accent,
    }
}

/// Lays out the price-axis and time-axis tags of `line`.
///
/// Positions are pinned to the plot edges so a line zoomed partly out of view
/// keeps its tags beside the plot; the tag text still shows the line's values.
pub fn layout_highlights(line: &TrendLine, transform: &PlotTransform, tz: Tz) -> HighlightLayout {
    let bounds = transform.bounds;
    let price_accent = line.price_highlight.accent;
    let date_accent = line.date_highlight.accent;

    let y1 = bounds.clamp_y(transform.y_data_to_screen(line.start_price));
    let price = if line.price_highlight.has_end_tag {
        let y2 = bounds.clamp_y(transform.y_data_to_screen(line.end_price));
        AxisTags {
            start: price_tag(y1, transform, line.start_price, price_accent),
            end: Some(price_tag(y2, transform, line.end_price, price_accent)),
            cover: Some(Rect::spanning((bounds.right, y1), (bounds.right + PRICE_TAG_WIDTH, y2))),
        }
    } else {
        AxisTags {
            start: price_tag(y1, transform, line.start_price, price_accent),
            end: None,
            cover: None,
        }
    };

    let x1 = bounds.clamp_x(transform.x_data_to_screen(line.start_date as f64));
    let date = if line.date_highlight.has_end_tag {
        let x2 = bounds.clamp_x(transform.x_data_to_screen(line.end_date as f64));
        AxisTags {
            start: date_tag(x1, transform, line.start_date, tz, date_accent),
            end: Some(date_tag(x2, transform, line.end_date, tz, date_accent)),
            cover: Some(Rect::spanning((x1, bounds.bottom), (x2, bounds.bottom + DATE_TAG_HEIGHT))),
        }
    } else {
        // A horizontal line is not time-bounded; its tag reads the date under it.
        let date = transform.time_at(x1);
        AxisTags {
            start: date_tag(x1, transform, date, tz, date_accent),
            end: None,
            cover: None,
        }
    };

    HighlightLayout { price, date }
}

fn accent_color(theme: &ChartTheme, accent: TagAccent) -> Color {
    match accent {
        TagAccent::Preview => theme.tag_preview,
        TagAccent::Confirmed => theme.tag_confirmed,
    }
}

fn push_tag(out: &mut Vec<Primitive>, tag: &TagBox, theme: &ChartTheme) {
    out.push(Primitive::Rect {
        rect: tag.rect,
        fill: accent_color(theme, tag.accent),
        stroke: None,
    });
    let (cx, cy) = tag.rect.center();
    out.push(Primitive::Text {
        origin: (cx, cy - theme.tag_text_size / 2.0),
        text: tag.text.clone(),
        color: theme.tag_text,
        size: theme.tag_text_size,
        align: TextAlign::Center,
    });
}

impl AxisTags {
    /// Cover band first so the tags paint over it.
    pub fn to_primitives(&self, theme: &ChartTheme, out: &mut Vec<Primitive>) {
        if let Some(cover) = self.cover {
            out.push(Primitive::Rect {
                rect: cover,
                fill: theme.cover,
                stroke: None,
            });
        }
        push_tag(out, &self.start, theme);
        if let Some(end) = &self.end {
            push_tag(out, end, theme);
        }
    }
}

impl HighlightLayout {
    pub fn to_primitives(&self, theme: &ChartTheme, out: &mut Vec<Primitive>) {
        self.price.to_primitives(theme, out);
        self.date.to_primitives(theme, out);
    }
}
