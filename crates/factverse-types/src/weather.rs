use serde::{Deserialize, Serialize};

/// A single weather reading as shown on the weather card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    /// Degrees Fahrenheit
    pub temperature: i32,
    pub description: String,
    pub icon: WeatherIcon,
    /// Relative humidity, percent
    pub humidity: u8,
    /// Miles per hour
    pub wind_speed: u32,
    /// Degrees Fahrenheit
    pub feels_like: i32,
}

/// Condition icon. Decoding goes through `from_code`, so unknown codes fall
/// back to `Cloudy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WeatherIcon {
    Clear,
    Rainy,
    Snowy,
    Foggy,
    Windy,
    Stormy,
    Cloudy,
}

impl From<String> for WeatherIcon {
    fn from(code: String) -> Self {
        WeatherIcon::from_code(&code)
    }
}

impl WeatherIcon {
    pub fn from_code(code: &str) -> Self {
        match code.trim().to_ascii_lowercase().as_str() {
            "clear" => WeatherIcon::Clear,
            "rainy" => WeatherIcon::Rainy,
            "snowy" => WeatherIcon::Snowy,
            "foggy" => WeatherIcon::Foggy,
            "windy" => WeatherIcon::Windy,
            "stormy" => WeatherIcon::Stormy,
            _ => WeatherIcon::Cloudy,
        }
    }

    pub fn code(&self) -> &str {
        match self {
            WeatherIcon::Clear => "clear",
            WeatherIcon::Cloudy => "cloudy",
            WeatherIcon::Rainy => "rainy",
            WeatherIcon::Snowy => "snowy",
            WeatherIcon::Foggy => "foggy",
            WeatherIcon::Windy => "windy",
            WeatherIcon::Stormy => "stormy",
        }
    }

    /// Glyph used by the card renderer
    pub fn glyph(&self) -> &str {
        match self {
            WeatherIcon::Clear => "☀",
            WeatherIcon::Cloudy => "☁",
            WeatherIcon::Rainy => "🌧",
            WeatherIcon::Snowy => "❄",
            WeatherIcon::Foggy => "🌫",
            WeatherIcon::Windy => "💨",
            WeatherIcon::Stormy => "⛈",
        }
    }
}
