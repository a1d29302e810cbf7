//! Live widget preview card
//!
//! Renders exactly the sub-views the visibility resolver admits for the
//! current configuration and size. Resolution happens every frame; the card
//! holds no state of its own and only reads booleans to decide whether to
//! instantiate a sub-view.

use eframe::egui;
use egui::{Align2, Color32, CornerRadius, FontId, Rect, RichText, Stroke};

use crate::config::WidgetConfig;
use crate::constants::sample;
use crate::gui::constants::ITEM_SPACING;
use crate::gui::theme::{self, ThemePalette};
use crate::visibility::{resolve_visibility, WidgetSize};

/// Marker positions along the progress meter, in percent
const METER_MARKERS: [u8; 5] = [0, 25, 50, 75, 100];

/// Renders the preview card at the size's fixed footprint
pub fn ui(ui: &mut egui::Ui, config: &WidgetConfig, size: WidgetSize) {
    let visible = resolve_visibility(config, size);
    let palette = theme::palette(config.theme);
    let (width, height) = size.dimensions();

    let (card_rect, _) =
        ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
    ui.painter()
        .rect_filled(card_rect, CornerRadius::same(16), palette.fill);

    let content_rect = card_rect.shrink(card_padding(size));
    ui.scope_builder(egui::UiBuilder::new().max_rect(content_rect), |ui| {
        ui.set_clip_rect(card_rect);
        ui.spacing_mut().item_spacing.y = 6.0;

        header(ui);
        title_block(ui, config, &palette, size);

        if visible.progress {
            progress_meter(ui, &palette);
        }
        if visible.next_milestone {
            milestone_card(ui);
        }
        if visible.contact {
            contact_card(ui, config);
        }
        if visible.open_button {
            open_button(ui);
        }
        if visible.last_update {
            footer(ui, &palette);
        }
    });

    ui.add_space(ITEM_SPACING);
    ui.label(
        RichText::new(format!(
            "{}×{} px · up to {} data components",
            width as u32,
            height as u32,
            size.max_components()
        ))
        .small()
        .weak(),
    );
}

fn card_padding(size: WidgetSize) -> f32 {
    match size {
        WidgetSize::Small => 16.0,
        WidgetSize::Medium => 20.0,
        WidgetSize::Large | WidgetSize::ExtraLarge => 24.0,
    }
}

/// App badge and status pill
fn header(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(22.0, 22.0), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, CornerRadius::same(4), Color32::WHITE);
        ui.painter().text(
            rect.center(),
            Align2::CENTER_CENTER,
            "N",
            FontId::proportional(13.0),
            Color32::BLACK,
        );

        egui::Frame::new()
            .fill(theme::PILL_FILL)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(egui::Margin::symmetric(8, 2))
            .show(ui, |ui| {
                ui.label(
                    RichText::new(sample::STATUS_LABEL)
                        .size(10.0)
                        .color(theme::PILL_TEXT),
                );
            });
    });
}

fn title_block(ui: &mut egui::Ui, config: &WidgetConfig, palette: &ThemePalette, size: WidgetSize) {
    let title_size = if size == WidgetSize::Small { 16.0 } else { 22.0 };
    ui.label(
        RichText::new(&config.project_name)
            .size(title_size)
            .strong()
            .color(palette.text),
    );

    if size != WidgetSize::Small && !config.client_name.is_empty() {
        ui.label(
            RichText::new(format!("by {}", config.client_name))
                .size(12.0)
                .color(palette.text_dim),
        );
    }
}

/// Meter with sample progress and five milestone markers
fn progress_meter(ui: &mut egui::Ui, palette: &ThemePalette) {
    let percent = sample::PROGRESS_PERCENT;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Progress")
                .size(11.0)
                .color(palette.text_dim),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("{percent}%"))
                    .size(11.0)
                    .strong()
                    .color(palette.text),
            );
        });
    });

    let (rect, _) =
        ui.allocate_exact_size(egui::vec2(ui.available_width(), 10.0), egui::Sense::hover());
    let track = Rect::from_center_size(rect.center(), egui::vec2(rect.width(), 4.0));
    let painter = ui.painter();
    painter.rect_filled(track, CornerRadius::same(2), palette.meter_track);

    let fill_width = track.width() * f32::from(percent) / 100.0;
    let fill = Rect::from_min_size(track.min, egui::vec2(fill_width, track.height()));
    painter.rect_filled(fill, CornerRadius::same(2), palette.meter_fill);

    for marker in METER_MARKERS {
        let x = track.min.x + track.width() * f32::from(marker) / 100.0;
        let color = if marker <= percent {
            palette.meter_fill
        } else {
            palette.meter_track
        };
        painter.circle_filled(egui::pos2(x, track.center().y), 4.0, color);
    }
}

fn milestone_card(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(theme::MILESTONE_CARD_FILL)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .stroke(Stroke::new(1.0, Color32::from_gray(0xE5)))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(
                RichText::new("NEXT MILESTONE")
                    .size(9.0)
                    .strong()
                    .color(theme::MILESTONE_ACCENT),
            );
            ui.label(
                RichText::new(sample::NEXT_MILESTONE_TITLE)
                    .size(13.0)
                    .strong()
                    .color(Color32::BLACK),
            );
            ui.label(
                RichText::new(sample::NEXT_MILESTONE_DATE)
                    .size(10.0)
                    .color(Color32::from_gray(0x6B)),
            );
        });
}

fn contact_card(ui: &mut egui::Ui, config: &WidgetConfig) {
    let client = if config.client_name.is_empty() {
        "No client on file"
    } else {
        config.client_name.as_str()
    };

    egui::Frame::new()
        .fill(theme::CONTACT_CARD_FILL)
        .corner_radius(CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 2.0;
            ui.label(
                RichText::new("CONTACT")
                    .size(9.0)
                    .strong()
                    .color(Color32::WHITE),
            );
            ui.label(
                RichText::new(client)
                    .size(13.0)
                    .strong()
                    .color(Color32::WHITE),
            );
        });
}

fn open_button(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let label = RichText::new(format!("{} \u{2197}", sample::OPEN_BUTTON_LABEL))
            .size(12.0)
            .color(Color32::BLACK);
        // Decorative within the preview; clicks go nowhere
        let _ = ui.add(
            egui::Button::new(label)
                .fill(Color32::from_gray(0xF3))
                .corner_radius(CornerRadius::same(8)),
        );
    });
}

fn footer(ui: &mut egui::Ui, palette: &ThemePalette) {
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Last Update")
                .size(10.0)
                .color(palette.text_dim),
        );
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(sample::LAST_UPDATE_AGE)
                    .size(10.0)
                    .color(palette.text_dim),
            );
        });
    });
}
