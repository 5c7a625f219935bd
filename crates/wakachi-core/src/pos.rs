use std::collections::HashSet;

/// Noun
pub const NOUN: &str = "名詞";
/// Verb
pub const VERB: &str = "動詞";
/// Adjective
pub const ADJECTIVE: &str = "形容詞";
/// Interjection
pub const INTERJECTION: &str = "感動詞";
/// Pre-noun adjectival (この, 大きな, ...)
pub const ADNOMINAL: &str = "連体詞";

/// The categories kept by [`PosFilter::content_words`]
pub const CONTENT_WORDS: [&str; 5] = [NOUN, VERB, ADJECTIVE, INTERJECTION, ADNOMINAL];

/// Part-of-speech allow-list, matched exactly against the category field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PosFilter {
    allowed: HashSet<String>,
}

impl PosFilter {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Nouns, verbs, adjectives, interjections and pre-noun adjectivals
    pub fn content_words() -> Self {
        Self::new(CONTENT_WORDS)
    }

    pub fn allows(&self, category: &str) -> bool {
        self.allowed.contains(category)
    }

    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

impl Default for PosFilter {
    fn default() -> Self {
        Self::content_words()
    }
}
