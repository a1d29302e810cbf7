//! Color palettes for the widget themes
//!
//! The theme set is gradient-based in its visual design; egui paints solid
//! fills, so each theme maps to a fill color (first gradient stop) plus an
//! accent (second stop) used by swatches and the progress meter, with text
//! colors picked for contrast against the fill.

use egui::Color32;

use crate::config::WidgetTheme;

/// Resolved colors for one widget theme
#[derive(Debug, Clone, Copy)]
pub struct ThemePalette {
    /// Card background
    pub fill: Color32,
    /// Second gradient stop; swatch rim and decoration
    pub accent: Color32,
    /// Primary text on the card
    pub text: Color32,
    /// Secondary text on the card
    pub text_dim: Color32,
    /// Progress meter track
    pub meter_track: Color32,
    /// Progress meter fill and markers
    pub meter_fill: Color32,
}

/// Fixed card colors shared by all themes
pub const MILESTONE_CARD_FILL: Color32 = Color32::from_rgb(0xFC, 0xFB, 0xFB);
pub const MILESTONE_ACCENT: Color32 = Color32::from_rgb(0xF5, 0x42, 0x42);
pub const CONTACT_CARD_FILL: Color32 = Color32::BLACK;
pub const PILL_FILL: Color32 = Color32::from_rgb(0xE3, 0xF2, 0xFD);
pub const PILL_TEXT: Color32 = Color32::from_rgb(0x19, 0x76, 0xD2);

/// Look up the palette for a theme
pub fn palette(theme: WidgetTheme) -> ThemePalette {
    match theme {
        WidgetTheme::Cream => light(
            Color32::from_rgb(0xFC, 0xFB, 0xFB),
            Color32::from_rgb(0xFF, 0xFB, 0xEB),
        ),
        WidgetTheme::CoolOcean => dark(
            Color32::from_rgb(0x80, 0xCA, 0xFF),
            Color32::from_rgb(0x4D, 0x79, 0x99),
        ),
        WidgetTheme::Sandstorm => dark(
            Color32::from_rgb(0xFF, 0xB1, 0x80),
            Color32::from_rgb(0x99, 0x7B, 0x4D),
        ),
        WidgetTheme::Midnight => dark(
            Color32::from_rgb(0x1A, 0x1A, 0x1A),
            Color32::from_rgb(0x38, 0x02, 0x4C),
        ),
        WidgetTheme::Forest => dark(
            Color32::from_rgb(0x2D, 0x50, 0x16),
            Color32::from_rgb(0x1A, 0x30, 0x09),
        ),
        WidgetTheme::Sunset => dark(
            Color32::from_rgb(0xFF, 0x6B, 0x6B),
            Color32::from_rgb(0x8B, 0x2D, 0x5C),
        ),
    }
}

fn light(fill: Color32, accent: Color32) -> ThemePalette {
    ThemePalette {
        fill,
        accent,
        text: Color32::BLACK,
        text_dim: Color32::from_rgb(0x6B, 0x72, 0x80),
        meter_track: Color32::from_rgb(0xE5, 0xE7, 0xEB),
        meter_fill: MILESTONE_ACCENT,
    }
}

fn dark(fill: Color32, accent: Color32) -> ThemePalette {
    ThemePalette {
        fill,
        accent,
        text: Color32::WHITE,
        text_dim: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0xB4),
        meter_track: Color32::from_rgba_unmultiplied(0xFF, 0xFF, 0xFF, 0x33),
        meter_fill: Color32::WHITE,
    }
}
