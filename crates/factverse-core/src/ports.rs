//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `factverse-core` (pure Rust).
//! Implementations live in `factverse-platform` (browser adapters), plus the
//! virtual-clock `ManualScheduler` in this crate.
//! The core never imports platform code; it only depends on these traits.

use async_trait::async_trait;
use factverse_types::{Result, event::TaskHandle, weather::WeatherReport};

// ─── Scheduler Port ──────────────────────────────────────────

/// Deferred one-shot callbacks on the single UI thread.
pub trait Scheduler {
    /// Run `task` once after `delay_ms`. The returned handle cancels it.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TaskHandle;

    /// Cancel a task that has not fired yet. Unknown or already-fired
    /// handles are ignored.
    fn cancel(&self, handle: TaskHandle);
}

// ─── Weather Port ────────────────────────────────────────────

#[async_trait(?Send)]
pub trait WeatherPort {
    /// Fetch the current reading. `None` means the provider's home location.
    async fn fetch_current_weather(&self, location: Option<&str>) -> Result<WeatherReport>;

    /// Name of this provider (for logging/debug)
    fn provider_name(&self) -> &str;
}
