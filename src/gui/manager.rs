//! Builder window implemented with egui/eframe
//!
//! Owns the widget configuration and the selected size; the controls panel
//! mutates the configuration, the central panel renders the live preview.
//! Each interaction is a complete update-then-rerender cycle on the UI
//! thread.

use anyhow::{anyhow, Result};
use eframe::{egui, CreationContext, NativeOptions};
use tracing::{debug, info};

use super::components::{
    data_settings, project_settings, style_settings, template_selector, widget_preview,
};
use super::constants::*;
use crate::config::WidgetConfig;
use crate::visibility::WidgetSize;

struct StatusMessage {
    text: String,
    color: egui::Color32,
}

struct BuilderApp {
    config: WidgetConfig,
    size: WidgetSize,
    status_message: Option<StatusMessage>,
}

impl BuilderApp {
    fn new(_cc: &CreationContext<'_>, config: WidgetConfig, size: WidgetSize) -> Self {
        info!("Initializing builder window");
        Self {
            config,
            size,
            status_message: None,
        }
    }

    fn save_to_device(&mut self) {
        // Placeholder: widget configurations are not persisted
        info!(project = %self.config.project_name, "Save to Device requested (placeholder)");
        self.status_message = Some(StatusMessage {
            text: "Save to Device is not available in this preview - nothing was written"
                .to_string(),
            color: STATUS_PLACEHOLDER,
        });
    }

    fn sync_feed_milestones(&mut self) {
        // Placeholder: there is no feed to sync against
        info!("Sync Feed Milestones requested (placeholder)");
        self.status_message = Some(StatusMessage {
            text: "Milestone sync is not available in this preview".to_string(),
            color: STATUS_PLACEHOLDER,
        });
    }

    fn controls_panel(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(ITEM_SPACING);
            ui.heading("Widget Builder");
            ui.add_space(SECTION_SPACING);

            let mut changed = false;
            changed |= project_settings::ui(ui, &mut self.config);
            ui.add_space(SECTION_SPACING);

            let template_changed = template_selector::ui(ui, &mut self.config);
            ui.add_space(SECTION_SPACING);

            changed |= data_settings::ui(ui, &mut self.config, self.size);
            ui.add_space(SECTION_SPACING);

            changed |= style_settings::ui(ui, &mut self.config);

            if template_changed {
                self.status_message = Some(StatusMessage {
                    text: format!("Applied {} template preset", self.config.template.label()),
                    color: STATUS_OK,
                });
            } else if changed {
                debug!("Configuration updated");
                self.status_message = None;
            }
        });
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(SECTION_SPACING);
            ui.heading("Preview");
            ui.add_space(ITEM_SPACING);

            ui.horizontal(|ui| {
                ui.label("Size:");
                for size in WidgetSize::ALL {
                    if ui
                        .selectable_label(self.size == size, size.label())
                        .clicked()
                        && self.size != size
                    {
                        self.size = size;
                        info!(size = size.label(), "Selected widget size");
                    }
                }
            });

            ui.add_space(SECTION_SPACING);
            widget_preview::ui(ui, &self.config, self.size);
            ui.add_space(SECTION_SPACING);

            ui.horizontal(|ui| {
                if ui.button("\u{1F4BE} Save to Device").clicked() {
                    self.save_to_device();
                }
                if ui.button("\u{1F504} Sync Feed Milestones").clicked() {
                    self.sync_feed_milestones();
                }
            });

            if let Some(message) = &self.status_message {
                ui.add_space(ITEM_SPACING);
                ui.colored_label(message.color, &message.text);
            }
        });
    }
}

impl eframe::App for BuilderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .exact_width(CONTROLS_PANEL_WIDTH)
            .show(ctx, |ui| self.controls_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.preview_panel(ui));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        // Configuration is session-only and discarded here
        info!("Builder exiting");
    }
}

pub fn run_gui(config: WidgetConfig, size: WidgetSize) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Widget Studio"),
        ..Default::default()
    };

    eframe::run_native(
        "Widget Studio",
        options,
        Box::new(move |cc| Ok(Box::new(BuilderApp::new(cc, config, size)))),
    )
    .map_err(|err| anyhow!("Failed to launch builder window: {err}"))
}
