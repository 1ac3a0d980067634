//! Simulated weather provider.
//!
//! There is no real weather source: after a fake network delay the provider
//! answers with a fixed reading. A provider built with `failing` answers
//! with an error instead, which the card shows as its error state.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use factverse_core::ports::WeatherPort;
use factverse_types::{
    WidgetError, Result,
    config::WeatherConfig,
    weather::{WeatherIcon, WeatherReport},
};

pub const DEFAULT_LOCATION: &str = "New York, US";

pub struct SimulatedWeatherProvider {
    latency_ms: u32,
    failure: Option<String>,
}

impl SimulatedWeatherProvider {
    pub fn new(latency_ms: u32) -> Self {
        Self {
            latency_ms,
            failure: None,
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.simulated_latency_ms)
    }

    /// A provider whose every fetch fails with `reason`.
    pub fn failing(latency_ms: u32, reason: impl Into<String>) -> Self {
        Self {
            latency_ms,
            failure: Some(reason.into()),
        }
    }
}

#[async_trait(?Send)]
impl WeatherPort for SimulatedWeatherProvider {
    async fn fetch_current_weather(&self, location: Option<&str>) -> Result<WeatherReport> {
        // Zero latency skips the JS timer entirely
        if self.latency_ms > 0 {
            TimeoutFuture::new(self.latency_ms).await;
        }

        if let Some(reason) = &self.failure {
            return Err(WidgetError::Weather(reason.clone()));
        }

        Ok(WeatherReport {
            location: location.unwrap_or(DEFAULT_LOCATION).to_string(),
            temperature: 72,
            description: "Partly Cloudy".to_string(),
            icon: WeatherIcon::Cloudy,
            humidity: 65,
            wind_speed: 8,
            feels_like: 74,
        })
    }

    fn provider_name(&self) -> &str {
        "simulated"
    }
}
