//! Weather card: spinner while loading, an error box on failure, and the
//! reading otherwise.

use chrono::NaiveDate;
use egui::{self, Align, Layout, RichText, Vec2};
use factverse_core::weather::WeatherState;
use factverse_types::weather::WeatherReport;
use crate::theme::*;

const CARD_HEIGHT: f32 = 128.0;

/// Card date line, e.g. "Monday, Oct 19"
pub fn format_card_date(date: NaiveDate) -> String {
    date.format("%A, %b %-d").to_string()
}

pub fn format_degrees(value: i32) -> String {
    format!("{}°", value)
}

/// Render the weather card. Returns true when the user asked to retry a
/// failed fetch.
pub fn weather_card(ui: &mut egui::Ui, state: &WeatherState, today: NaiveDate) -> bool {
    match state {
        WeatherState::Loading => {
            loading(ui);
            false
        }
        WeatherState::Failed(message) => failed(ui, message),
        WeatherState::Ready(report) => {
            reading(ui, report, today);
            false
        }
    }
}

fn loading(ui: &mut egui::Ui) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.bg_panel)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_min_height(CARD_HEIGHT);
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        });
}

fn failed(ui: &mut egui::Ui, message: &str) -> bool {
    let palette = Palette::for_visuals(ui.visuals());
    let mut retry = false;
    egui::Frame::default()
        .fill(palette.error_bg)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.label(RichText::new(message).color(palette.error).small());
            if ui.small_button("Retry").clicked() {
                retry = true;
            }
        });
    retry
}

fn reading(ui: &mut egui::Ui, report: &WeatherReport, today: NaiveDate) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.weather_card)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(&report.location)
                            .color(TEXT_ON_ACCENT)
                            .size(17.0),
                    );
                    ui.label(
                        RichText::new(format_card_date(today))
                            .color(TEXT_ON_ACCENT_MUTED)
                            .small(),
                    );
                });
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new(report.icon.glyph()).size(36.0).color(TEXT_ON_ACCENT));
                });
            });

            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(format_degrees(report.temperature))
                        .color(TEXT_ON_ACCENT)
                        .size(34.0)
                        .strong(),
                );
                ui.label(RichText::new(&report.description).color(TEXT_ON_ACCENT_MUTED));
            });

            ui.add_space(8.0);
            ui.columns(3, |cols| {
                tile(&mut cols[0], "Feels Like", format_degrees(report.feels_like));
                tile(&mut cols[1], "Humidity", format!("{}%", report.humidity));
                tile(&mut cols[2], "Wind", format!("{} mph", report.wind_speed));
            });
        });
}

fn tile(ui: &mut egui::Ui, caption: &str, value: String) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.weather_tile)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(Vec2::new(6.0, 6.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(caption).color(TEXT_ON_ACCENT_MUTED).small());
                ui.label(RichText::new(value).color(TEXT_ON_ACCENT).strong());
            });
        });
}
