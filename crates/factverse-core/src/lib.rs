//! FactVerse core: the chat assistant's conversation engine and the weather
//! card state machine. Pure Rust; platform concerns come in through `ports`.

pub mod ports;
pub mod event_bus;
pub mod scheduler;
pub mod classifier;
pub mod session;
pub mod engine;
pub mod weather;


pub use engine::{ConversationEngine, SubmitOutcome};
pub use event_bus::{EventBus, SubscriptionId};
pub use session::SessionState;
