use serde::{Deserialize, Serialize};
use crate::{Result, WidgetError};

/// Top-level widget configuration.
///
/// Every section is `#[serde(default)]`, so a host page can pass a partial
/// JSON object and only override what it cares about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub chat: ChatConfig,
    pub weather: WeatherConfig,
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| WidgetError::Config(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Title shown in the chat window header
    pub assistant_name: String,
    /// Delay before the one-time greeting appears
    pub greeting_delay_ms: u32,
    /// Simulated "thinking" time before each reply
    pub response_delay_ms: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            assistant_name: "FactVerse Assistant".to_string(),
            greeting_delay_ms: 1000,
            response_delay_ms: 1500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Location to ask the provider for; `None` uses the provider default
    pub location: Option<String>,
    pub simulated_latency_ms: u32,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            location: None,
            simulated_latency_ms: 1000,
        }
    }
}
