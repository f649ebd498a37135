//! Coordinate projection between data space `(date, price)` and pixel space.

use crate::data_types::{AxisRange, Margins, Timestamp};
use crate::scales::ChartScale;
use serde::{Deserialize, Serialize};

/// Drawable rectangle of the plot, in pixels from the chart's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl PlotRect {
    pub fn from_margins(width: f64, height: f64, margins: &Margins) -> Self {
        Self {
            left: margins.left,
            top: margins.top,
            right: width - margins.right,
            bottom: height - margins.bottom,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.left).min(self.right)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.max(self.top).min(self.bottom)
    }

    pub fn clamp(&self, x: f64, y: f64) -> (f64, f64) {
        (self.clamp_x(x), self.clamp_y(y))
    }
}

/// The pair of mappings (time -> x, price -> y) for the current view.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub x_scale: ChartScale,
    pub y_scale: ChartScale,
    pub bounds: PlotRect,
}

impl PlotTransform {
    pub fn new(x_scale: ChartScale, y_scale: ChartScale, bounds: PlotRect) -> Self {
        Self {
            x_scale,
            y_scale,
            bounds,
        }
    }

    /// Mappings spanning `bounds`, with price increasing upwards.
    pub fn from_domains(time: AxisRange, price: AxisRange, bounds: PlotRect) -> Self {
        Self {
            x_scale: ChartScale::new_linear(time.as_tuple(), (bounds.left, bounds.right)),
            y_scale: ChartScale::new_linear(price.as_tuple(), (bounds.bottom, bounds.top)),
            bounds,
        }
    }

    pub fn project(&self, date: f64, price: f64) -> (f64, f64) {
        (self.x_scale.map(date), self.y_scale.map(price))
    }

    pub fn unproject(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x_scale.invert(x), self.y_scale.invert(y))
    }

    pub fn x_data_to_screen(&self, date: f64) -> f64 {
        self.x_scale.map(date)
    }

    pub fn y_data_to_screen(&self, price: f64) -> f64 {
        self.y_scale.map(price)
    }

    pub fn time_at(&self, x: f64) -> Timestamp {
        self.x_scale.invert(x).round() as Timestamp
    }

    pub fn price_at(&self, y: f64) -> f64 {
        self.y_scale.invert(y)
    }

    /// Clamps a pointer to the plot and unprojects it to `(date, unrounded price)`.
    pub fn clamped_unproject(&self, x: f64, y: f64) -> (Timestamp, f64) {
        let (x, y) = self.bounds.clamp(x, y);
        (self.time_at(x), self.price_at(y))
    }

    pub fn time_domain(&self) -> AxisRange {
        self.x_scale.domain_range()
    }

    pub fn price_domain(&self) -> AxisRange {
        self.y_scale.domain_range()
    }
}
