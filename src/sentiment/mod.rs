//! Lexicon-based headline sentiment.

mod lexicon;

pub use lexicon::Lexicon;

use std::sync::LazyLock;

use crate::core::Sentiment;

/// Scores strictly above this are `Positive`.
pub const POSITIVE_THRESHOLD: f64 = 0.15;
/// Scores strictly below this are `Negative`.
pub const NEGATIVE_THRESHOLD: f64 = -0.15;

static DEFAULT_CLASSIFIER: LazyLock<SentimentClassifier> =
    LazyLock::new(SentimentClassifier::default);

/// Classify `text` with the bundled lexicon.
pub fn classify(text: &str) -> Sentiment {
    DEFAULT_CLASSIFIER.classify(text)
}

/// Split on every character that is not a letter, digit or underscore.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Map an aggregate lexicon score onto a label. Both thresholds are exclusive.
pub fn label(score: f64) -> Sentiment {
    if score > POSITIVE_THRESHOLD {
        Sentiment::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[derive(Debug, Default)]
pub struct SentimentClassifier {
    lexicon: Lexicon,
}

impl SentimentClassifier {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Aggregate score of `text`; `0.0` when it has no tokens.
    pub fn score(&self, text: &str) -> f64 {
        self.lexicon.score(&tokenize(text))
    }

    pub fn classify(&self, text: &str) -> Sentiment {
        label(self.score(text))
    }
}
