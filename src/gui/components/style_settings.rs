//! Theme selection grid

use eframe::egui;
use tracing::debug;

use crate::config::{ConfigUpdate, WidgetConfig, WidgetTheme};
use crate::gui::constants::ITEM_SPACING;
use crate::gui::theme;

/// Renders the style section and returns true if the theme changed
pub fn ui(ui: &mut egui::Ui, config: &mut WidgetConfig) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Select Style").strong());
        ui.add_space(ITEM_SPACING);

        egui::Grid::new("style_grid").num_columns(2).show(ui, |ui| {
            for (idx, theme) in WidgetTheme::ALL.into_iter().enumerate() {
                if swatch_button(ui, theme, config.theme == theme) {
                    config.apply(ConfigUpdate {
                        theme: Some(theme),
                        ..ConfigUpdate::default()
                    });
                    debug!(theme = theme.label(), "Selected theme");
                    changed = true;
                }
                if idx % 2 == 1 {
                    ui.end_row();
                }
            }
        });
    });

    changed
}

/// Color swatch plus label; returns true when clicked
fn swatch_button(ui: &mut egui::Ui, theme: WidgetTheme, selected: bool) -> bool {
    let palette = theme::palette(theme);
    let mut clicked = false;

    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, 16.0), egui::Sense::hover());
        ui.painter().circle_filled(rect.center(), 6.0, palette.fill);
        ui.painter()
            .circle_stroke(rect.center(), 6.0, egui::Stroke::new(1.0, palette.accent));

        if ui.selectable_label(selected, theme.label()).clicked() {
            clicked = true;
        }
    });

    clicked
}
