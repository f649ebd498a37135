use crate::scene::{Primitive, Scene, TextAlign};
use crate::session::ChartSession;
use crate::theme::Color;
use gpui::prelude::*;
use gpui::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::warn;

pub fn to_hsla(color: Color) -> Hsla {
    Hsla::from(rgb(color.rgb)).alpha(color.alpha)
}

fn to_point(origin: Point<Pixels>, (x, y): (f64, f64)) -> Point<Pixels> {
    point(origin.x + px(x as f32), origin.y + px(y as f32))
}

pub struct ChartRenderer {
    pub chart: Entity<ChartSession>,

    // Bounds shared with InputHandler
    pub bounds: Rc<RefCell<Bounds<Pixels>>>,
}

impl ChartRenderer {
    pub fn new(chart: Entity<ChartSession>, bounds: Rc<RefCell<Bounds<Pixels>>>) -> Self {
        Self { chart, bounds }
    }

    pub fn render(&self, _window: &mut Window, cx: &mut App) -> Div {
        let background = to_hsla(self.chart.read(cx).theme().background);
        let chart = self.chart.clone();
        let shared_bounds = self.bounds.clone();

        div().size_full().bg(background).child(
            canvas(
                move |bounds, _window, cx| {
                    *shared_bounds.borrow_mut() = bounds;
                    chart.update(cx, |session, _cx| {
                        let width = f32::from(bounds.size.width) as f64;
                        let height = f32::from(bounds.size.height) as f64;
                        let config = session.config();
                        if (config.width - width).abs() > 0.5 || (config.height - height).abs() > 0.5 {
                            if let Err(err) = session.set_size(width, height) {
                                warn!("chart too small to lay out: {err}");
                            }
                        }
                        session.scene()
                    })
                },
                move |bounds, scene, window, cx| {
                    paint_scene(&scene, bounds.origin, window, cx);
                },
            )
            .size_full(),
        )
    }
}

/// Paints the plot layer clipped to the plot rectangle, then the overlay.
pub fn paint_scene(scene: &Scene, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    let clip = scene.clip;
    let clip_bounds = Bounds::new(
        to_point(origin, (clip.left, clip.top)),
        size(px(clip.width() as f32), px(clip.height() as f32)),
    );
    window.with_content_mask(Some(ContentMask { bounds: clip_bounds }), |window| {
        for primitive in &scene.plot {
            paint_primitive(primitive, origin, window, cx);
        }
    });
    for primitive in &scene.overlay {
        paint_primitive(primitive, origin, window, cx);
    }
}

fn paint_polyline(points: &[(f64, f64)], origin: Point<Pixels>, width: f64, dash: Option<f64>, color: Hsla, window: &mut Window) {
    let mut builder = PathBuilder::stroke(px(width as f32));
    if let Some(dash) = dash {
        builder = builder.dash_array(&[px(dash as f32), px(dash as f32)]);
    }
    let mut iter = points.iter();
    let Some(first) = iter.next() else {
        return;
    };
    builder.move_to(to_point(origin, *first));
    for p in iter {
        builder.line_to(to_point(origin, *p));
    }
    if let Ok(path) = builder.build() {
        window.paint_path(path, color);
    }
}

fn paint_primitive(primitive: &Primitive, origin: Point<Pixels>, window: &mut Window, cx: &mut App) {
    match primitive {
        Primitive::Line {
            from,
            to,
            color,
            width,
            dash,
        } => paint_polyline(&[*from, *to], origin, *width, *dash, to_hsla(*color), window),
        Primitive::Polyline { points, color, width } => {
            paint_polyline(points, origin, *width, None, to_hsla(*color), window)
        }
        Primitive::Rect { rect, fill: bg, stroke } => {
            let bounds = Bounds::new(
                to_point(origin, (rect.x, rect.y)),
                size(px(rect.width as f32), px(rect.height as f32)),
            );
            window.paint_quad(fill(bounds, to_hsla(*bg)));
            if let Some(stroke) = stroke {
                window.paint_quad(outline(bounds, to_hsla(*stroke), BorderStyle::default()));
            }
        }
        Primitive::Circle {
            center,
            radius,
            fill: bg,
            stroke,
        } => {
            let r = *radius as f32;
            let bounds = Bounds::new(
                to_point(origin, (center.0 - radius, center.1 - radius)),
                size(px(r * 2.0), px(r * 2.0)),
            );
            let (border_color, border_width) = match stroke {
                Some((color, width)) => (to_hsla(*color), px(*width as f32)),
                None => (transparent_black(), px(0.0)),
            };
            window.paint_quad(quad(
                bounds,
                px(r),
                to_hsla(*bg),
                border_width,
                border_color,
                BorderStyle::default(),
            ));
        }
        Primitive::Text {
            origin: at,
            text,
            color,
            size: font_size,
            align,
        } => {
            let font_size = px(*font_size as f32);
            let run = TextRun {
                len: text.len(),
                font: TextStyle::default().font(),
                color: to_hsla(*color),
                background_color: None,
                underline: None,
                strikethrough: None,
            };
            let line = window
                .text_system()
                .shape_line(text.clone().into(), font_size, &[run], None);
            let anchor = to_point(origin, *at);
            let x = match align {
                TextAlign::Left => anchor.x,
                TextAlign::Center => anchor.x - line.width / 2.0,
                TextAlign::Right => anchor.x - line.width,
            };
            let _ = line.paint(point(x, anchor.y), font_size, window, cx);
        }
    }
}
