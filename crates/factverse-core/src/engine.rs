//! Conversation engine: session state, message dispatcher and greeting.
//!
//! A submission goes through two phases:
//! 1. The user message is appended at once, the draft is cleared and the
//!    engine starts "typing".
//! 2. After the configured response delay the classifier's reply is appended
//!    as a bot message and typing stops.
//!
//! Deferred work runs through the `Scheduler` port. Scheduled callbacks only
//! hold a weak reference to the session, and dropping the engine cancels the
//! pending task, so nothing is written into a torn-down conversation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use factverse_types::{
    config::ChatConfig,
    event::{ChatEvent, TaskHandle},
    message::Message,
    suggestion::SuggestedQuestion,
};
use crate::classifier::{classify, classify_topic};
use crate::event_bus::EventBus;
use crate::ports::Scheduler;
use crate::session::SessionState;

pub const GREETING: &str = "Hello! I'm FactVerse AI Assistant. Ask me about any news topic, and I'll provide you with the latest, fact-checked information. How can I help you today?";

/// Result of a submission attempt. Rejections are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    /// Empty or whitespace-only text
    EmptyInput,
    /// A reply (or the greeting) is still pending
    Busy,
}

enum PendingReply {
    Greeting,
    Answer(String),
}

struct EngineInner {
    session: SessionState,
    pending: Option<TaskHandle>,
    greeting_scheduled: bool,
}

pub struct ConversationEngine {
    inner: Rc<RefCell<EngineInner>>,
    event_bus: EventBus,
    scheduler: Rc<dyn Scheduler>,
    config: ChatConfig,
}

impl ConversationEngine {
    pub fn new(config: ChatConfig, event_bus: EventBus, scheduler: Rc<dyn Scheduler>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(EngineInner {
                session: SessionState::new(),
                pending: None,
                greeting_scheduled: false,
            })),
            event_bus,
            scheduler,
            config,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    // ─── Read access ─────────────────────────────────────────

    pub fn is_open(&self) -> bool {
        self.inner.borrow().session.is_open()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.borrow().session.messages().to_vec()
    }

    pub fn message_count(&self) -> usize {
        self.inner.borrow().session.messages().len()
    }

    pub fn draft(&self) -> String {
        self.inner.borrow().session.draft_input().to_string()
    }

    pub fn is_awaiting_response(&self) -> bool {
        self.inner.borrow().session.is_awaiting_response()
    }

    pub fn shows_suggestions(&self) -> bool {
        self.inner.borrow().session.shows_suggestions()
    }

    pub fn has_pending_task(&self) -> bool {
        self.inner.borrow().pending.is_some()
    }

    /// Copy of the whole session, for views that render from a snapshot
    pub fn snapshot(&self) -> SessionState {
        self.inner.borrow().session.clone()
    }

    // ─── Mutators ────────────────────────────────────────────

    /// Show the widget. The first open with an empty log schedules the
    /// greeting; later opens never do.
    pub fn open(&self) {
        let (changed, greet) = {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.session.open();
            let greet = inner.session.messages().is_empty() && !inner.greeting_scheduled;
            if greet {
                inner.greeting_scheduled = true;
                inner.session.set_awaiting_response(true);
            }
            (changed, greet)
        };

        if changed {
            self.event_bus.emit(ChatEvent::VisibilityChanged { is_open: true });
        }
        if greet {
            log::info!("Scheduling greeting in {}ms", self.config.greeting_delay_ms);
            self.event_bus.emit(ChatEvent::TypingChanged { is_typing: true });
            self.schedule_reply(self.config.greeting_delay_ms, PendingReply::Greeting);
        }
    }

    pub fn close(&self) {
        let changed = self.inner.borrow_mut().session.close();
        if changed {
            self.event_bus.emit(ChatEvent::VisibilityChanged { is_open: false });
        }
    }

    pub fn set_draft(&self, text: impl Into<String>) {
        let text = text.into();
        self.inner.borrow_mut().session.set_draft(text.clone());
        self.event_bus.emit(ChatEvent::DraftChanged { text });
    }

    /// Submit the current draft.
    pub fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft)
    }

    /// Same as typing the suggestion's text and pressing send.
    pub fn submit_suggestion(&self, question: &SuggestedQuestion) -> SubmitOutcome {
        self.submit(question.text)
    }

    /// Dispatch `text` as a user message and schedule the bot's reply.
    pub fn submit(&self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            log::debug!("Ignoring empty submission");
            return SubmitOutcome::EmptyInput;
        }

        let message = {
            let mut inner = self.inner.borrow_mut();
            if inner.session.is_awaiting_response() {
                log::debug!("Ignoring submission while a reply is pending");
                return SubmitOutcome::Busy;
            }
            let message = Message::user(text);
            inner.session.append_message(message.clone());
            inner.session.clear_draft();
            inner.session.set_awaiting_response(true);
            message
        };

        log::debug!("Accepted question classified as {:?}", classify_topic(text));
        self.event_bus.emit(ChatEvent::MessageAppended { message });
        self.event_bus.emit(ChatEvent::DraftChanged { text: String::new() });
        self.event_bus.emit(ChatEvent::TypingChanged { is_typing: true });

        self.schedule_reply(
            self.config.response_delay_ms,
            PendingReply::Answer(text.to_string()),
        );
        SubmitOutcome::Accepted
    }

    fn schedule_reply(&self, delay_ms: u32, reply: PendingReply) {
        let session = Rc::downgrade(&self.inner);
        let event_bus = self.event_bus.clone();

        let handle = self.scheduler.schedule(
            delay_ms,
            Box::new(move || deliver_reply(&session, &event_bus, reply)),
        );

        let mut inner = self.inner.borrow_mut();
        if inner.session.is_awaiting_response() {
            inner.pending = Some(handle);
        }
    }
}

fn deliver_reply(session: &Weak<RefCell<EngineInner>>, event_bus: &EventBus, reply: PendingReply) {
    let Some(inner) = session.upgrade() else {
        log::debug!("Conversation torn down; dropping deferred reply");
        return;
    };

    let text = match &reply {
        PendingReply::Greeting => GREETING,
        PendingReply::Answer(question) => classify(question),
    };
    let message = Message::bot(text);
    {
        let mut inner = inner.borrow_mut();
        inner.session.append_message(message.clone());
        inner.session.set_awaiting_response(false);
        inner.pending = None;
    }

    event_bus.emit(ChatEvent::MessageAppended { message });
    event_bus.emit(ChatEvent::TypingChanged { is_typing: false });
}

impl Drop for ConversationEngine {
    fn drop(&mut self) {
        let pending = self.inner.borrow_mut().pending.take();
        if let Some(handle) = pending {
            log::debug!("Cancelling pending reply {:?}", handle);
            self.scheduler.cancel(handle);
        }
    }
}
