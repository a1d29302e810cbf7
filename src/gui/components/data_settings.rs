//! Visible data toggles
//!
//! Toggles are store-level only: the user may enable more countable fields
//! than the current size admits, and the resolver trims the overflow at
//! render time.

use eframe::egui;
use tracing::debug;

use crate::config::{DataField, WidgetConfig};
use crate::gui::constants::ITEM_SPACING;
use crate::visibility::WidgetSize;

/// Renders the visible-data checklist and returns true if a flag was flipped
pub fn ui(ui: &mut egui::Ui, config: &mut WidgetConfig, size: WidgetSize) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Visible Data").strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.weak(format!(
                    "{}/{}",
                    config.visible_data.countable_enabled(),
                    DataField::COUNTABLE.len()
                ));
            });
        });
        ui.add_space(ITEM_SPACING);

        for field in DataField::COUNTABLE {
            let mut enabled = config.visible_data.is_enabled(field);
            if ui.checkbox(&mut enabled, field.label()).changed() {
                config.toggle_visible_data(field);
                debug!(field = field.label(), enabled, "Toggled visible data field");
                changed = true;
            }
        }

        ui.add_space(ITEM_SPACING);
        ui.label(egui::RichText::new("More blocks").small().weak());
        ui.horizontal_wrapped(|ui| {
            for field in DataField::PLACEHOLDER {
                let mut enabled = config.visible_data.is_enabled(field);
                if ui.checkbox(&mut enabled, field.label()).changed() {
                    config.toggle_visible_data(field);
                    debug!(field = field.label(), enabled, "Toggled placeholder field");
                    changed = true;
                }
            }
        });
        ui.label(
            egui::RichText::new("Not rendered by the status card layout")
                .small()
                .weak(),
        );

        ui.add_space(ITEM_SPACING / 2.0);
        ui.label(
            egui::RichText::new(format!(
                "Size {} shows up to {} data components",
                size.label(),
                size.max_components()
            ))
            .small()
            .italics(),
        );
    });

    changed
}
