//! Session state for one chat widget instance.
//!
//! Plain data plus total mutators. Timing, the greeting and the submit guard
//! live in the engine; this type only knows how to hold a conversation.

use factverse_types::message::Message;

/// Suggested questions stay visible until the conversation has moved past
/// the greeting.
pub fn suggestions_visible(message_count: usize) -> bool {
    message_count <= 1
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    is_open: bool,
    messages: Vec<Message>,
    draft_input: String,
    is_awaiting_response: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft_input(&self) -> &str {
        &self.draft_input
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.is_awaiting_response
    }

    pub fn shows_suggestions(&self) -> bool {
        suggestions_visible(self.messages.len())
    }

    /// Returns true if the widget was closed before.
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.is_open, true)
    }

    /// Returns true if the widget was open before.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.is_open, false)
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_input = text.into();
    }

    pub fn clear_draft(&mut self) {
        self.draft_input.clear();
    }

    pub fn set_awaiting_response(&mut self, awaiting: bool) {
        self.is_awaiting_response = awaiting;
    }

    /// Append to the end of the log. No reordering, no deduplication.
    pub fn append_message(&mut self, message: Message) {
        self.messages.push(message);
    }
}
