//! Main egui application: composes the weather card and the chat widgets
//! and forwards user actions to the conversation engine.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText};

use factverse_core::event_bus::EventBus;
use factverse_core::ports::{Scheduler, WeatherPort};
use factverse_core::weather::WeatherCard;
use factverse_core::ConversationEngine;
use factverse_platform::{SimulatedWeatherProvider, TimeoutScheduler};
use factverse_types::config::WidgetConfig;
use factverse_ui::panels::chat::{self, ChatAction};
use factverse_ui::panels::weather;
use factverse_ui::state::UiState;
use factverse_ui::theme;

const CARD_WIDTH: f32 = 320.0;

/// The main application state
pub struct FactVerseApp {
    ui_state: UiState,
    config: WidgetConfig,
    engine: ConversationEngine,
    event_bus: EventBus,
    weather: WeatherCard,
    weather_provider: Rc<dyn WeatherPort>,
    first_frame: bool,
}

impl FactVerseApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: WidgetConfig) -> Self {
        let event_bus = EventBus::new();

        // Timer callbacks fire outside of egui input, so wake the UI on every event
        let ctx = cc.egui_ctx.clone();
        event_bus.subscribe(move |_| ctx.request_repaint());

        let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler::new());
        let engine = ConversationEngine::new(config.chat.clone(), event_bus.clone(), scheduler);
        let weather_provider: Rc<dyn WeatherPort> =
            Rc::new(SimulatedWeatherProvider::from_config(&config.weather));

        let app = Self {
            ui_state: UiState::new(),
            config,
            engine,
            event_bus,
            weather: WeatherCard::new(),
            weather_provider,
            first_frame: true,
        };
        app.fetch_weather(&cc.egui_ctx, false);
        app
    }

    /// Spawn a weather fetch and repaint once it settles
    fn fetch_weather(&self, ctx: &egui::Context, retry: bool) {
        let provider = self.weather_provider.clone();
        let location = self.config.weather.location.clone();
        let task = if retry {
            self.weather.reload(provider, location)
        } else {
            self.weather.load(provider, location)
        };
        let ctx = ctx.clone();
        wasm_bindgen_futures::spawn_local(async move {
            task.await;
            ctx.request_repaint();
        });
    }

    fn apply_action(&self, action: ChatAction) {
        match action {
            ChatAction::Open => self.engine.open(),
            ChatAction::Close => self.engine.close(),
            ChatAction::DraftEdited(text) => self.engine.set_draft(text),
            ChatAction::Submit(text) => {
                let outcome = self.engine.submit(&text);
                log::debug!("Submit: {:?}", outcome);
            }
            ChatAction::Suggestion(question) => {
                let outcome = self.engine.submit_suggestion(&question);
                log::debug!("Suggestion {}: {:?}", question.id, outcome);
            }
        }
    }
}

impl eframe::App for FactVerseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain events from the conversation engine
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
        }

        // ── Page content ─────────────────────────────────────
        let mut retry_weather = false;
        CentralPanel::default().show(ctx, |ui| {
            ui.label(
                RichText::new("FactVerse")
                    .strong()
                    .color(theme::ACCENT)
                    .size(22.0),
            );
            ui.add_space(12.0);
            ui.allocate_ui(egui::Vec2::new(CARD_WIDTH, ui.available_height()), |ui| {
                let today = chrono::Local::now().date_naive();
                retry_weather = weather::weather_card(ui, &self.weather.state(), today);
            });
        });
        if retry_weather {
            self.fetch_weather(ctx, true);
        }

        // ── Chat widgets ─────────────────────────────────────
        let mut actions = Vec::new();
        if let Some(action) = chat::chat_launcher(ctx, &self.ui_state) {
            actions.push(action);
        }
        actions.extend(chat::chat_window(
            ctx,
            &mut self.ui_state,
            &self.config.chat.assistant_name,
        ));
        for action in actions {
            self.apply_action(action);
        }
    }
}
