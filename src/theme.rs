use serde::{Deserialize, Serialize};

/// Backend-neutral colour: `0xRRGGBB` plus opacity.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub rgb: u32,
    pub alpha: f32,
}

impl Color {
    pub const fn rgb(rgb: u32) -> Self {
        Self { rgb, alpha: 1.0 }
    }

    pub const fn alpha(self, alpha: f32) -> Self {
        Self {
            rgb: self.rgb,
            alpha,
        }
    }
}

/// The fixed palette.
pub struct Palette;

impl Palette {
    pub const POSITIVE: Color = Color::rgb(0x049981);
    pub const NEGATIVE: Color = Color::rgb(0xf23645);
    pub const ANNOTATION: Color = Color::rgb(0x2862ff);
    pub const TAG_PREVIEW: Color = Color::rgb(0x049981);
    pub const TAG_CONFIRMED: Color = Color::rgb(0x2862ff);
    pub const COVER: Color = Color::rgb(0xc9d8ff).alpha(0.5);
    pub const HANDLE_FILL: Color = Color::rgb(0xffffff);
    pub const SMA: Color = Color::rgb(0xff9800);
    pub const WHITE: Color = Color::rgb(0xffffff);
    pub const BLACK: Color = Color::rgb(0x000000);
}

#[derive(Clone, Debug)]
pub struct ChartTheme {
    pub background: Color,
    pub grid_line: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub axis_label_size: f64,
    pub crosshair_line: Color,
    pub tooltip_background: Color,
    pub tooltip_text: Color,
    pub tag_text: Color,
    pub tag_text_size: f64,
    pub line: Color,
    pub line_width: f64,
    pub candle_up: Color,
    pub candle_down: Color,
    pub sma: Color,
    pub annotation: Color,
    pub annotation_width: f64,
    pub handle_radius: f64,
    pub handle_fill: Color,
    pub tag_preview: Color,
    pub tag_confirmed: Color,
    pub cover: Color,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background: Palette::WHITE,
            grid_line: Palette::BLACK.alpha(0.06),
            axis_line: Palette::BLACK.alpha(0.3),
            axis_label: Palette::BLACK.alpha(0.7),
            axis_label_size: 10.0,
            crosshair_line: Palette::BLACK.alpha(0.3),
            tooltip_background: Palette::WHITE.alpha(0.9),
            tooltip_text: Palette::BLACK,
            tag_text: Palette::WHITE,
            tag_text_size: 9.0,
            line: Palette::POSITIVE,
            line_width: 1.5,
            candle_up: Palette::POSITIVE,
            candle_down: Palette::NEGATIVE,
            sma: Palette::SMA,
            annotation: Palette::ANNOTATION,
            annotation_width: 2.0,
            handle_radius: 5.0,
            handle_fill: Palette::HANDLE_FILL,
            tag_preview: Palette::TAG_PREVIEW,
            tag_confirmed: Palette::TAG_CONFIRMED,
            cover: Palette::COVER,
        }
    }
}
