//! UI-level state that drives rendering.
//! This is a read-only projection of the conversation engine's session,
//! updated each frame by draining the EventBus.

use factverse_core::session::suggestions_visible;
use factverse_types::event::ChatEvent;
use factverse_types::message::Message;

/// State visible to UI panels
pub struct UiState {
    /// Whether the chat window is shown
    pub is_open: bool,
    /// Displayed messages, oldest first
    pub messages: Vec<Message>,
    /// Typing indicator; also disables the input
    pub is_typing: bool,
    /// Input field content
    pub input_text: String,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            is_open: false,
            messages: Vec::new(),
            is_typing: false,
            input_text: String::new(),
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::VisibilityChanged { is_open } => {
                    self.is_open = is_open;
                }
                ChatEvent::MessageAppended { message } => {
                    self.messages.push(message);
                }
                ChatEvent::DraftChanged { text } => {
                    self.input_text = text;
                }
                ChatEvent::TypingChanged { is_typing } => {
                    self.is_typing = is_typing;
                }
            }
        }
    }

    pub fn shows_suggestions(&self) -> bool {
        suggestions_visible(self.messages.len())
    }

    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.is_typing
    }

    pub fn is_busy(&self) -> bool {
        self.is_typing
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
