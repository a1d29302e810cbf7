//! GUI-specific constants for layout, spacing and status colors

use egui::Color32;

/// Builder window dimensions
pub const WINDOW_WIDTH: f32 = 1080.0;
pub const WINDOW_HEIGHT: f32 = 760.0;
pub const WINDOW_MIN_WIDTH: f32 = 880.0;
pub const WINDOW_MIN_HEIGHT: f32 = 620.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Width of the controls side panel
pub const CONTROLS_PANEL_WIDTH: f32 = 340.0;

/// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(0, 200, 0);
pub const STATUS_PLACEHOLDER: Color32 = Color32::from_rgb(200, 200, 0);
