use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum WidgetError {
    #[error("Weather unavailable: {0}")]
    Weather(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),
}
