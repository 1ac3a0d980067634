#[cfg(test)]
mod tests {
    use crate::state::*;
    use crate::panels::chat::*;
    use crate::panels::weather::*;
    use crate::theme::*;
    use chrono::{NaiveDate, TimeZone, Utc};
    use factverse_core::weather::WeatherState;
    use factverse_types::event::ChatEvent;
    use factverse_types::message::*;
    use factverse_types::weather::*;

    fn appended(message: Message) -> ChatEvent {
        ChatEvent::MessageAppended { message }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new();
        assert!(!state.is_open);
        assert!(state.messages.is_empty());
        assert!(!state.is_typing);
        assert!(state.input_text.is_empty());
        assert!(state.shows_suggestions());
        assert!(!state.can_send());
        assert!(!state.is_busy());
    }

    #[test]
    fn test_ui_state_visibility() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::VisibilityChanged { is_open: true }]);
        assert!(state.is_open);
        state.process_events(vec![ChatEvent::VisibilityChanged { is_open: false }]);
        assert!(!state.is_open);
    }

    #[test]
    fn test_ui_state_messages_in_order() {
        let mut state = UiState::new();
        state.process_events(vec![
            appended(Message::bot("greeting")),
            appended(Message::user("question")),
            appended(Message::bot("answer")),
        ]);
        let texts: Vec<&str> = state.messages.iter().map(|m| m.text()).collect();
        assert_eq!(texts, vec!["greeting", "question", "answer"]);
    }

    #[test]
    fn test_ui_state_draft_sync() {
        let mut state = UiState::new();
        state.process_events(vec![ChatEvent::DraftChanged { text: "tech".to_string() }]);
        assert_eq!(state.input_text, "tech");
        assert!(state.can_send());

        state.process_events(vec![ChatEvent::DraftChanged { text: String::new() }]);
        assert!(state.input_text.is_empty());
    }

    #[test]
    fn test_ui_state_typing_blocks_send() {
        let mut state = UiState::new();
        state.input_text = "hello".to_string();
        state.process_events(vec![ChatEvent::TypingChanged { is_typing: true }]);
        assert!(state.is_busy());
        assert!(!state.can_send());

        state.process_events(vec![ChatEvent::TypingChanged { is_typing: false }]);
        assert!(state.can_send());
    }

    #[test]
    fn test_ui_state_whitespace_cannot_send() {
        let mut state = UiState::new();
        state.input_text = "   ".to_string();
        assert!(!state.can_send());
    }

    #[test]
    fn test_ui_state_suggestions_hide_after_first_exchange() {
        let mut state = UiState::new();
        state.process_events(vec![appended(Message::bot("greeting"))]);
        assert!(state.shows_suggestions());
        state.process_events(vec![appended(Message::user("question"))]);
        assert!(!state.shows_suggestions());
    }

    // ─── Formatting Tests ────────────────────────────────────

    #[test]
    fn test_format_clock() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 19, 9, 5, 0).unwrap();
        assert_eq!(format_clock(&ts), "09:05");
    }

    #[test]
    fn test_format_card_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(format_card_date(date), "Monday, Oct 19");

        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_card_date(date), "Thursday, Mar 5");
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(72), "72°");
        assert_eq!(format_degrees(-4), "-4°");
    }

    // ─── Headless Render Tests ───────────────────────────────

    fn sample_report() -> WeatherReport {
        WeatherReport {
            location: "New York, US".to_string(),
            temperature: 72,
            description: "Partly Cloudy".to_string(),
            icon: WeatherIcon::Cloudy,
            humidity: 65,
            wind_speed: 8,
            feels_like: 74,
        }
    }

    #[test]
    fn test_chat_widgets_render_without_input() {
        let ctx = egui::Context::default();
        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::VisibilityChanged { is_open: true },
            appended(Message::bot("greeting")),
            appended(Message::user("question")),
            ChatEvent::TypingChanged { is_typing: true },
        ]);

        let mut actions = Vec::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(chat_launcher(ctx, &state).is_none());
            actions.extend(chat_window(ctx, &mut state, "FactVerse Assistant"));
        });
        assert!(actions.is_empty());
    }

    #[test]
    fn test_closed_chat_renders_nothing() {
        let ctx = egui::Context::default();
        let mut state = UiState::new();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(chat_launcher(ctx, &state).is_none());
            assert!(chat_window(ctx, &mut state, "FactVerse Assistant").is_empty());
        });
    }

    #[test]
    fn test_weather_card_renders_every_state() {
        let ctx = egui::Context::default();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let states = [
            WeatherState::Loading,
            WeatherState::Failed("Weather unavailable: offline".to_string()),
            WeatherState::Ready(sample_report()),
        ];
        for weather in &states {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    assert!(!weather_card(ui, weather, today));
                });
            });
        }
    }

    // ─── Theme Tests ─────────────────────────────────────────

    #[test]
    fn test_palette_follows_dark_mode() {
        assert_eq!(Palette::for_visuals(&egui::Visuals::light()), &LIGHT);
        assert_eq!(Palette::for_visuals(&egui::Visuals::dark()), &DARK);
        assert_ne!(LIGHT.bg_panel, DARK.bg_panel);
        assert_ne!(LIGHT.text_primary, DARK.text_primary);
    }

    #[test]
    fn test_apply_theme_styles_both_themes() {
        let ctx = egui::Context::default();
        apply_theme(&ctx);

        let light = ctx.style_of(egui::Theme::Light);
        assert!(!light.visuals.dark_mode);
        assert_eq!(light.visuals.panel_fill, LIGHT.bg_page);
        assert_eq!(light.visuals.window_fill, LIGHT.bg_panel);

        let dark = ctx.style_of(egui::Theme::Dark);
        assert!(dark.visuals.dark_mode);
        assert_eq!(dark.visuals.panel_fill, DARK.bg_page);
        assert_eq!(dark.visuals.window_fill, DARK.bg_panel);
    }

    #[test]
    fn test_widgets_render_in_dark_mode() {
        let ctx = egui::Context::default();
        apply_theme(&ctx);
        ctx.set_theme(egui::Theme::Dark);

        let mut state = UiState::new();
        state.process_events(vec![
            ChatEvent::VisibilityChanged { is_open: true },
            appended(Message::bot("greeting")),
        ]);
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let failed = WeatherState::Failed("Weather unavailable: offline".to_string());

        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            assert!(ctx.style().visuals.dark_mode);
            assert!(chat_window(ctx, &mut state, "FactVerse Assistant").is_empty());
            egui::CentralPanel::default().show(ctx, |ui| {
                assert!(!weather_card(ui, &failed, today));
            });
        });
    }
}
