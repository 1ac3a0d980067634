/// A canned question offered before the conversation gets going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestedQuestion {
    pub id: &'static str,
    pub text: &'static str,
}

/// The fixed suggestion catalog, in display order.
pub const SUGGESTED_QUESTIONS: [SuggestedQuestion; 4] = [
    SuggestedQuestion {
        id: "1",
        text: "What are the latest developments in politics?",
    },
    SuggestedQuestion {
        id: "2",
        text: "Give me a summary of today's top stories",
    },
    SuggestedQuestion {
        id: "3",
        text: "What's happening in technology news?",
    },
    SuggestedQuestion {
        id: "4",
        text: "Tell me about recent scientific breakthroughs",
    },
];

pub fn suggested_questions() -> &'static [SuggestedQuestion] {
    &SUGGESTED_QUESTIONS
}
