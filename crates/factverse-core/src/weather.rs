//! Weather card state: loading until the provider answers, then either the
//! reading or a user-visible error message.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};
use factverse_types::weather::WeatherReport;
use crate::ports::WeatherPort;

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherState {
    Loading,
    Ready(WeatherReport),
    Failed(String),
}

impl WeatherState {
    pub fn is_loading(&self) -> bool {
        matches!(self, WeatherState::Loading)
    }
}

struct CardSlot {
    state: WeatherState,
    /// Bumped by every `load`; only the newest fetch may write its result
    generation: u64,
}

#[derive(Clone)]
pub struct WeatherCard {
    slot: Rc<RefCell<CardSlot>>,
}

impl WeatherCard {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(CardSlot {
                state: WeatherState::Loading,
                generation: 0,
            })),
        }
    }

    pub fn state(&self) -> WeatherState {
        self.slot.borrow().state.clone()
    }

    /// Build the fetch future. The caller spawns it (`spawn_local` in the
    /// browser). If every card handle is dropped before the provider
    /// answers, or a newer `load` has started since, the result is discarded.
    pub fn load(
        &self,
        provider: Rc<dyn WeatherPort>,
        location: Option<String>,
    ) -> LocalBoxFuture<'static, ()> {
        let generation = {
            let mut slot = self.slot.borrow_mut();
            slot.generation += 1;
            slot.generation
        };
        let slot = Rc::downgrade(&self.slot);
        async move {
            let result = provider.fetch_current_weather(location.as_deref()).await;
            let Some(slot) = slot.upgrade() else {
                log::debug!("Weather card dropped before fetch completed");
                return;
            };
            let mut slot = slot.borrow_mut();
            if slot.generation != generation {
                log::debug!("Discarding superseded weather fetch #{}", generation);
                return;
            }
            slot.state = match result {
                Ok(report) => {
                    log::info!(
                        "Weather loaded from {}: {}",
                        provider.provider_name(),
                        report.location
                    );
                    WeatherState::Ready(report)
                }
                Err(e) => {
                    log::warn!("Weather fetch failed: {}", e);
                    WeatherState::Failed(e.to_string())
                }
            };
        }
        .boxed_local()
    }

    /// Reset to `Loading` and fetch again. Any fetch still in flight is
    /// superseded.
    pub fn reload(
        &self,
        provider: Rc<dyn WeatherPort>,
        location: Option<String>,
    ) -> LocalBoxFuture<'static, ()> {
        self.slot.borrow_mut().state = WeatherState::Loading;
        self.load(provider, location)
    }
}

impl Default for WeatherCard {
    fn default() -> Self {
        Self::new()
    }
}
