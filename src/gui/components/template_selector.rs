//! Template selection row
//!
//! Selecting a template applies its visible-data preset wholesale, overriding
//! any individually toggled fields. Clicking the active template re-applies
//! the preset, which resets manual toggles.

use eframe::egui;
use tracing::info;

use crate::config::{WidgetConfig, WidgetTemplate};
use crate::gui::constants::ITEM_SPACING;

/// Renders the template selector and returns true if a preset was applied
pub fn ui(ui: &mut egui::Ui, config: &mut WidgetConfig) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Template").strong());
        ui.add_space(ITEM_SPACING);

        ui.horizontal_wrapped(|ui| {
            for template in WidgetTemplate::ALL {
                if ui
                    .selectable_label(config.template == template, template.label())
                    .clicked()
                {
                    config.set_template(template);
                    info!(template = template.label(), "Applied template preset");
                    changed = true;
                }
            }
        });
    });

    changed
}
