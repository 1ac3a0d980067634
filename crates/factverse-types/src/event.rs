use serde::{Deserialize, Serialize};
use crate::message::Message;

/// Events emitted by the conversation engine.
/// UI subscribes to these for reactive updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// The chat window was opened or closed
    VisibilityChanged { is_open: bool },

    /// A message was appended to the log
    MessageAppended { message: Message },

    /// The input draft was replaced (or cleared on dispatch)
    DraftChanged { text: String },

    /// The bot started or stopped "typing"
    TypingChanged { is_typing: bool },
}

/// Handle to a scheduled deferred task, used for cancellation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(pub u64);
