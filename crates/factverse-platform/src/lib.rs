//! Browser adapters for the FactVerse core ports.

pub mod scheduler;
pub mod weather;


pub use scheduler::TimeoutScheduler;
pub use weather::SimulatedWeatherProvider;
