//! Chat assistant: floating launcher button plus the chat window with the
//! message log, typing indicator, suggested questions and input row.

use chrono::{DateTime, Local, TimeZone};
use egui::{self, Align, Align2, CornerRadius, Layout, RichText, ScrollArea, Stroke, Vec2};
use factverse_types::message::Message;
use factverse_types::suggestion::{suggested_questions, SuggestedQuestion};
use crate::state::UiState;
use crate::theme::*;

/// What the caller should do after rendering the chat widgets
#[derive(Debug, Clone, PartialEq)]
pub enum ChatAction {
    Open,
    Close,
    /// The input field was edited
    DraftEdited(String),
    /// Send was clicked or Enter was pressed
    Submit(String),
    /// A suggested question was picked
    Suggestion(SuggestedQuestion),
}

/// Hour and minute of a message timestamp, e.g. "09:05".
pub fn format_clock<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    timestamp.format("%H:%M").to_string()
}

/// Render the round launcher button while the chat is closed.
pub fn chat_launcher(ctx: &egui::Context, state: &UiState) -> Option<ChatAction> {
    if state.is_open {
        return None;
    }

    let mut action = None;
    egui::Area::new(egui::Id::new("chat_launcher"))
        .anchor(Align2::RIGHT_BOTTOM, CORNER_OFFSET)
        .show(ctx, |ui| {
            let button = egui::Button::new(
                RichText::new("💬 Ask FactVerse")
                    .color(TEXT_ON_ACCENT)
                    .strong(),
            )
            .fill(ACCENT)
            .corner_radius(CornerRadius::same(24))
            .min_size(Vec2::new(56.0, 48.0));

            if ui.add(button).on_hover_text("Open chat assistant").clicked() {
                action = Some(ChatAction::Open);
            }
        });
    action
}

/// Render the chat window while it is open. Returns the user's actions for
/// this frame, in the order they happened.
pub fn chat_window(ctx: &egui::Context, state: &mut UiState, title: &str) -> Vec<ChatAction> {
    let mut actions = Vec::new();
    if !state.is_open {
        return actions;
    }

    egui::Window::new(title)
        .id(egui::Id::new("chat_window"))
        .anchor(Align2::RIGHT_BOTTOM, CORNER_OFFSET)
        .fixed_size(CHAT_WINDOW_SIZE)
        .title_bar(false)
        .collapsible(false)
        .resizable(false)
        .frame(
            egui::Frame::window(&ctx.style())
                .inner_margin(0.0)
                .corner_radius(PANEL_ROUNDING),
        )
        .show(ctx, |ui| {
            header(ui, title, &mut actions);
            message_log(ui, state);
            if state.shows_suggestions() {
                suggestion_chips(ui, state, &mut actions);
            }
            input_row(ui, state, &mut actions);
        });

    actions
}

fn header(ui: &mut egui::Ui, title: &str, actions: &mut Vec<ChatAction>) {
    egui::Frame::default()
        .fill(ACCENT)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new(title).color(TEXT_ON_ACCENT).strong());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let close = egui::Button::new(RichText::new("×").color(TEXT_ON_ACCENT).size(18.0))
                        .frame(false);
                    if ui.add(close).on_hover_text("Close chat").clicked() {
                        actions.push(ChatAction::Close);
                    }
                });
            });
        });
}

fn message_log(ui: &mut egui::Ui, state: &UiState) {
    let palette = Palette::for_visuals(ui.visuals());
    // Leave room for the suggestion chips and the input row
    let reserved = if state.shows_suggestions() { 150.0 } else { 56.0 };
    let log_height = (ui.available_height() - reserved).max(80.0);

    egui::Frame::default()
        .fill(palette.bg_log)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ScrollArea::vertical()
                .max_height(log_height)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    for message in &state.messages {
                        render_message(ui, message);
                        ui.add_space(6.0);
                    }
                    if state.is_typing {
                        typing_indicator(ui);
                    }
                });
        });
}

fn render_message(ui: &mut egui::Ui, message: &Message) {
    let palette = Palette::for_visuals(ui.visuals());
    let from_user = message.is_from_user();
    let (fill, stroke, text_color, meta_color) = if from_user {
        (ACCENT, Stroke::NONE, TEXT_ON_ACCENT, TEXT_ON_ACCENT_MUTED)
    } else {
        (
            palette.bg_panel,
            Stroke::new(1.0, palette.border),
            palette.text_primary,
            palette.text_secondary,
        )
    };
    let layout = if from_user {
        Layout::right_to_left(Align::TOP)
    } else {
        Layout::left_to_right(Align::TOP)
    };
    let max_width = ui.available_width() * 0.8;
    let sent_at = format_clock(&message.timestamp().with_timezone(&Local));

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(fill)
            .stroke(stroke)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(max_width);
                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(message.sender().label())
                            .color(meta_color)
                            .small()
                            .strong(),
                    );
                    ui.label(RichText::new(message.text()).color(text_color));
                    ui.label(RichText::new(sent_at).color(meta_color).small());
                });
            });
    });
}

fn typing_indicator(ui: &mut egui::Ui) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.bg_panel)
        .stroke(Stroke::new(1.0, palette.border))
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Assistant is typing…").color(palette.text_secondary).small());
            });
        });
}

fn suggestion_chips(ui: &mut egui::Ui, state: &UiState, actions: &mut Vec<ChatAction>) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.bg_log)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Suggested questions:").color(palette.text_secondary).small());
            ui.horizontal_wrapped(|ui| {
                for question in suggested_questions() {
                    let chip = egui::Button::new(
                        RichText::new(question.text).color(palette.text_primary).small(),
                    )
                    .fill(palette.bg_chip)
                    .corner_radius(CHIP_ROUNDING);
                    if ui.add_enabled(!state.is_busy(), chip).clicked() {
                        actions.push(ChatAction::Suggestion(*question));
                    }
                }
            });
        });
}

fn input_row(ui: &mut egui::Ui, state: &mut UiState, actions: &mut Vec<ChatAction>) {
    let palette = Palette::for_visuals(ui.visuals());
    egui::Frame::default()
        .fill(palette.bg_panel)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                let busy = state.is_busy();
                let send_enabled = state.can_send();
                let input = egui::TextEdit::singleline(&mut state.input_text)
                    .hint_text("Ask about any news topic...")
                    .desired_width(ui.available_width() - 70.0)
                    .font(egui::FontId::proportional(14.0));
                let response = ui.add_enabled(!busy, input);

                if response.changed() {
                    actions.push(ChatAction::DraftEdited(state.input_text.clone()));
                }

                let send_clicked = if busy {
                    ui.add_sized([60.0, 20.0], egui::Spinner::new());
                    false
                } else {
                    ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_ON_ACCENT))
                            .fill(if send_enabled { ACCENT } else { palette.disabled })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    )
                    .clicked()
                };

                // Submit on Enter or button click
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if (enter_pressed && send_enabled) || send_clicked {
                    actions.push(ChatAction::Submit(state.input_text.clone()));
                    response.request_focus();
                }
            });
        });
}
