//! FactVerse App: WASM entry point.
//!
//! This crate is the composition root. It builds the browser scheduler and
//! the weather provider, hands them to the core and renders the egui panels.

#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
const CANVAS_ID: &str = "factverse_canvas";

/// WASM entry point, called from the host page
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("FactVerse widgets starting...");

    let (canvas, config) = match find_canvas() {
        Ok(found) => found,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();
    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |cc| Ok(Box::new(app::FactVerseApp::new(cc, config)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

/// Locate the host canvas and read its `data-config` attribute.
#[cfg(target_arch = "wasm32")]
fn find_canvas() -> factverse_types::Result<(
    web_sys::HtmlCanvasElement,
    factverse_types::config::WidgetConfig,
)> {
    use factverse_types::WidgetError;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| WidgetError::JsInterop("No browser document available".into()))?;
    let element = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| WidgetError::JsInterop(format!("No canvas element with id '{}'", CANVAS_ID)))?;

    let config = load_config(element.get_attribute("data-config").as_deref());
    let canvas = element
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| WidgetError::JsInterop(format!("Element '{}' is not a canvas", CANVAS_ID)))?;
    Ok((canvas, config))
}

/// Parse the host page's `data-config` JSON, falling back to defaults.
pub fn load_config(raw: Option<&str>) -> factverse_types::config::WidgetConfig {
    use factverse_types::config::WidgetConfig;

    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => WidgetConfig::default(),
        Some(json) => WidgetConfig::from_json(json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid widget config: {}", e);
            WidgetConfig::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::load_config;
    use factverse_types::config::WidgetConfig;

    #[test]
    fn test_load_config_missing_attribute() {
        assert_eq!(load_config(None), WidgetConfig::default());
        assert_eq!(load_config(Some("  ")), WidgetConfig::default());
    }

    #[test]
    fn test_load_config_partial_override() {
        let config = load_config(Some(r#"{"chat":{"response_delay_ms":200}}"#));
        assert_eq!(config.chat.response_delay_ms, 200);
        assert_eq!(config.chat.greeting_delay_ms, 1000);
        assert_eq!(config.weather, WidgetConfig::default().weather);
    }

    #[test]
    fn test_load_config_invalid_json_falls_back() {
        assert_eq!(load_config(Some("{not json")), WidgetConfig::default());
    }
}
