//! Keyword classifier: maps free text to one of six canned replies.
//!
//! Rules are evaluated in declaration order and the first match wins, so
//! "politics and technology" gets the politics reply. Matching is plain
//! case-insensitive substring containment: "biotechnology" contains "tech"
//! and is answered as technology news.

/// What a question was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Politics,
    Technology,
    Science,
    Health,
    TopStories,
    General,
}

pub const POLITICS_REPLY: &str = "Recent political developments include ongoing debates about economic policies and international relations. According to reliable sources, the upcoming election is expected to focus on healthcare reform and climate initiatives.";

pub const TECHNOLOGY_REPLY: &str = "The technology sector is seeing significant advancements in artificial intelligence and quantum computing. Major tech companies have announced new initiatives to address privacy concerns and ethical AI development.";

pub const SCIENCE_REPLY: &str = "Recent scientific breakthroughs include promising results in cancer treatment research and renewable energy technologies. A peer-reviewed study published last week revealed new insights into climate change mitigation strategies.";

pub const HEALTH_REPLY: &str = "Health experts are reporting progress in vaccine development for several diseases. New public health guidelines emphasize preventative care and mental health awareness, based on extensive clinical research.";

pub const TOP_STORIES_REPLY: &str = "Today's top stories include diplomatic talks between major nations, breakthroughs in sustainable technology, and updates on global health initiatives. All information has been verified through multiple reliable sources.";

pub const FALLBACK_REPLY: &str = "That's an interesting topic. Based on verified sources, this area has seen significant developments recently. Would you like me to provide more specific information or focus on particular aspects of this subject?";

/// One (predicate, reply) pair. The predicate is "contains any keyword".
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `lowered` must already be lower-cased.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Priority order matters.
pub const RULES: &[Rule] = &[
    Rule {
        topic: Topic::Politics,
        keywords: &["politics", "election"],
        reply: POLITICS_REPLY,
    },
    Rule {
        topic: Topic::Technology,
        keywords: &["technology", "tech"],
        reply: TECHNOLOGY_REPLY,
    },
    Rule {
        topic: Topic::Science,
        keywords: &["science", "research"],
        reply: SCIENCE_REPLY,
    },
    Rule {
        topic: Topic::Health,
        keywords: &["health", "medical"],
        reply: HEALTH_REPLY,
    },
    Rule {
        topic: Topic::TopStories,
        keywords: &["today", "latest"],
        reply: TOP_STORIES_REPLY,
    },
];

fn first_match(input: &str) -> Option<&'static Rule> {
    let lowered = input.to_lowercase();
    RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Classify `input` and return its canned reply. Total over all strings.
pub fn classify(input: &str) -> &'static str {
    first_match(input).map_or(FALLBACK_REPLY, |rule| rule.reply)
}

pub fn classify_topic(input: &str) -> Topic {
    first_match(input).map_or(Topic::General, |rule| rule.topic)
}
