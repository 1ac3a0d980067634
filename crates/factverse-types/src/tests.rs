#[cfg(test)]
mod tests {
    use crate::message::*;
    use crate::event::*;
    use crate::suggestion::*;
    use crate::weather::*;
    use crate::config::*;
    use crate::error::*;

    // ─── Message Tests ───────────────────────────────────────

    #[test]
    fn test_message_user() {
        let msg = Message::user("Hello");
        assert_eq!(msg.sender(), Sender::User);
        assert_eq!(msg.text(), "Hello");
        assert!(msg.is_from_user());
    }

    #[test]
    fn test_message_bot() {
        let msg = Message::bot("Hi there");
        assert_eq!(msg.sender(), Sender::Bot);
        assert_eq!(msg.text(), "Hi there");
        assert!(!msg.is_from_user());
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::user("same");
        let b = Message::user("same");
        assert_ne!(a.id(), b.id());
        assert!(!a.id().as_str().is_empty());
    }

    #[test]
    fn test_message_timestamps_do_not_go_backwards() {
        let first = Message::user("one");
        let second = Message::bot("two");
        assert!(second.timestamp() >= first.timestamp());
    }

    #[test]
    fn test_message_text_is_kept_verbatim() {
        let msg = Message::user("  padded  ");
        assert_eq!(msg.text(), "  padded  ");
    }

    #[test]
    fn test_message_serialization_roundtrip() {
        let msg = Message::user("test input");
        let json = serde_json::to_string(&msg).unwrap();
        assert!(json.contains(r#""sender":"user""#));
        let deserialized: Message = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, msg);
    }

    #[test]
    fn test_sender_serialization() {
        assert_eq!(serde_json::to_string(&Sender::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Sender::Bot).unwrap(), r#""bot""#);
        let sender: Sender = serde_json::from_str(r#""bot""#).unwrap();
        assert_eq!(sender, Sender::Bot);
    }

    #[test]
    fn test_sender_labels() {
        assert_eq!(Sender::User.label(), "You");
        assert_eq!(Sender::Bot.label(), "Assistant");
    }

    // ─── Event Tests ─────────────────────────────────────────

    #[test]
    fn test_chat_event_message_appended() {
        let event = ChatEvent::MessageAppended {
            message: Message::bot("Hello world"),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("MessageAppended"));
        assert!(json.contains("Hello world"));
    }

    #[test]
    fn test_chat_event_typing() {
        let event = ChatEvent::TypingChanged { is_typing: true };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: ChatEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_task_handle_equality() {
        assert_eq!(TaskHandle(1), TaskHandle(1));
        assert_ne!(TaskHandle(1), TaskHandle(2));
    }

    // ─── Suggestion Tests ────────────────────────────────────

    #[test]
    fn test_suggestion_catalog() {
        let questions = suggested_questions();
        assert_eq!(questions.len(), 4);
        assert_eq!(questions[0].text, "What are the latest developments in politics?");
        assert_eq!(questions[2].text, "What's happening in technology news?");

        let ids: Vec<&str> = questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    // ─── Weather Tests ───────────────────────────────────────

    #[test]
    fn test_weather_icon_codes() {
        for icon in [
            WeatherIcon::Clear,
            WeatherIcon::Cloudy,
            WeatherIcon::Rainy,
            WeatherIcon::Snowy,
            WeatherIcon::Foggy,
            WeatherIcon::Windy,
            WeatherIcon::Stormy,
        ] {
            assert_eq!(WeatherIcon::from_code(icon.code()), icon);
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_weather_icon_unknown_falls_back_to_cloudy() {
        assert_eq!(WeatherIcon::from_code("hail"), WeatherIcon::Cloudy);
        assert_eq!(WeatherIcon::from_code(""), WeatherIcon::Cloudy);

        let icon: WeatherIcon = serde_json::from_str(r#""hail""#).unwrap();
        assert_eq!(icon, WeatherIcon::Cloudy);
    }

    #[test]
    fn test_weather_icon_decodes_known_codes() {
        let icon: WeatherIcon = serde_json::from_str(r#""rainy""#).unwrap();
        assert_eq!(icon, WeatherIcon::Rainy);
        let icon: WeatherIcon = serde_json::from_str(r#""Stormy""#).unwrap();
        assert_eq!(icon, WeatherIcon::Stormy);
        assert_eq!(serde_json::to_string(&WeatherIcon::Foggy).unwrap(), r#""foggy""#);

        let report: WeatherReport = serde_json::from_str(
            r#"{"location":"Oslo, NO","temperature":40,"description":"Sleet",
                "icon":"sleet","humidity":90,"wind_speed":12,"feels_like":33}"#,
        )
        .unwrap();
        assert_eq!(report.icon, WeatherIcon::Cloudy);
    }

    #[test]
    fn test_weather_report_serialization() {
        let report = WeatherReport {
            location: "New York, US".to_string(),
            temperature: 72,
            description: "Partly Cloudy".to_string(),
            icon: WeatherIcon::Cloudy,
            humidity: 65,
            wind_speed: 8,
            feels_like: 74,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains(r#""icon":"cloudy""#));
        let deserialized: WeatherReport = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, report);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_default_config() {
        let config = WidgetConfig::default();
        assert_eq!(config.chat.assistant_name, "FactVerse Assistant");
        assert_eq!(config.chat.greeting_delay_ms, 1000);
        assert_eq!(config.chat.response_delay_ms, 1500);
        assert!(config.weather.location.is_none());
        assert_eq!(config.weather.simulated_latency_ms, 1000);
    }

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let config = WidgetConfig::from_json(r#"{"chat":{"response_delay_ms":250}}"#).unwrap();
        assert_eq!(config.chat.response_delay_ms, 250);
        assert_eq!(config.chat.greeting_delay_ms, 1000);
        assert_eq!(config.weather, WeatherConfig::default());
    }

    #[test]
    fn test_config_empty_object() {
        let config = WidgetConfig::from_json("{}").unwrap();
        assert_eq!(config, WidgetConfig::default());
    }

    #[test]
    fn test_config_invalid_json() {
        let err = WidgetConfig::from_json("{{not json}}").unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
        assert!(err.to_string().starts_with("Configuration error: "));

        let err = WidgetConfig::from_json(r#"{"chat":{"response_delay_ms":"slow"}}"#).unwrap_err();
        assert!(matches!(err, WidgetError::Config(_)));
    }

    #[test]
    fn test_config_location_override() {
        let config = WidgetConfig::from_json(r#"{"weather":{"location":"Oslo, NO"}}"#).unwrap();
        assert_eq!(config.weather.location.as_deref(), Some("Oslo, NO"));
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = WidgetError::Weather("provider offline".to_string());
        assert_eq!(err.to_string(), "Weather unavailable: provider offline");

        let err = WidgetError::Config("bad delay".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad delay");

        let err = WidgetError::JsInterop("no canvas".to_string());
        assert_eq!(err.to_string(), "JS interop error: no canvas");
    }
}
