//! Project selection and naming controls

use eframe::egui;
use tracing::debug;

use crate::config::{ConfigUpdate, WidgetConfig};
use crate::constants::projects::DEMO_PROJECTS;
use crate::gui::constants::ITEM_SPACING;

/// Renders the project section and returns true if the configuration changed
pub fn ui(ui: &mut egui::Ui, config: &mut WidgetConfig) -> bool {
    let mut changed = false;

    ui.group(|ui| {
        ui.label(egui::RichText::new("Select Project").strong());
        ui.add_space(ITEM_SPACING);

        egui::ComboBox::from_id_salt("project_selector")
            .selected_text(config.project_name.clone())
            .width(220.0)
            .show_ui(ui, |ui| {
                for project in DEMO_PROJECTS {
                    if ui
                        .selectable_label(config.project_name == project, project)
                        .clicked()
                    {
                        config.apply(ConfigUpdate {
                            project_name: Some(project.to_string()),
                            ..ConfigUpdate::default()
                        });
                        debug!(project, "Selected demo project");
                        changed = true;
                    }
                }
            });

        ui.label(
            egui::RichText::new("Sync Feed Milestones automatically in the Select Project button.")
                .small()
                .weak(),
        );

        ui.add_space(ITEM_SPACING);

        ui.horizontal(|ui| {
            ui.label("Project Name:");
            let mut project_name = config.project_name.clone();
            if ui.text_edit_singleline(&mut project_name).changed() {
                config.apply(ConfigUpdate {
                    project_name: Some(project_name),
                    ..ConfigUpdate::default()
                });
                changed = true;
            }
        });

        ui.horizontal(|ui| {
            ui.label("Client Name:");
            let mut client_name = config.client_name.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut client_name).hint_text("(optional)"))
                .changed()
            {
                config.apply(ConfigUpdate {
                    client_name: Some(client_name),
                    ..ConfigUpdate::default()
                });
                changed = true;
            }
        });
    });

    changed
}
