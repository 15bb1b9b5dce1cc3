use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use rust_stemmers::{Algorithm, Stemmer};

use crate::core::SnapError;

const EMBEDDED_AFINN: &str = include_str!("../../data/afinn_165.tsv");
const EMBEDDED_MARKET_TERMS: &str = include_str!("../../data/market_terms_en.tsv");

/// Tokens that flip the sign of every scored token after them.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "nowhere", "cannot",
];

/// A word → signed weight table in AFINN format.
///
/// Scoring follows the AFINN analyzer convention the ±0.15 label thresholds
/// are calibrated to: negations are sticky, each token is looked up verbatim
/// and then by stem, and the sum is divided by the total token count (hits and
/// misses alike).
pub struct Lexicon {
    words: HashMap<String, i32>,
    stems: HashMap<String, i32>,
    stemmer: Stemmer,
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("entries", &self.words.len())
            .finish_non_exhaustive()
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::afinn()
    }
}

impl Lexicon {
    /// The complete AFINN-165 list bundled with the crate.
    pub fn afinn() -> Self {
        Self::parse(EMBEDDED_AFINN).expect("embedded AFINN lexicon")
    }

    /// Bundled market vocabulary that AFINN does not cover (`rally`, `plunge`, `layoffs`, ...).
    ///
    /// Not part of the default; combine with [`Lexicon::merge`].
    pub fn market_terms() -> Self {
        Self::parse(EMBEDDED_MARKET_TERMS).expect("embedded market terms")
    }

    /// Parse `word<TAB>score` lines. Blank lines and `#` comments are skipped.
    ///
    /// # Errors
    /// Returns `SnapError::Lexicon` for a line without a score or with a non-integer score.
    pub fn parse(text: &str) -> Result<Self, SnapError> {
        let mut pairs = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (word, score) = line
                .rsplit_once('\t')
                .or_else(|| line.rsplit_once(' '))
                .ok_or_else(|| SnapError::Lexicon {
                    line: idx + 1,
                    message: "expected `word<TAB>score`".into(),
                })?;
            let score: i32 = score.trim().parse().map_err(|_| SnapError::Lexicon {
                line: idx + 1,
                message: format!("score `{}` is not an integer", score.trim()),
            })?;
            pairs.push((word.trim().to_string(), score));
        }
        Ok(Self::from_pairs(pairs))
    }

    /// Load an AFINN-format file (e.g. the full AFINN-165 list).
    ///
    /// # Errors
    /// Returns `SnapError::Io` if the file cannot be read, `SnapError::Lexicon` if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapError> {
        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw)
    }

    /// Build from explicit pairs.
    ///
    /// Exact words always keep their own weight. For the stem fallback, later
    /// entries win when two words share a stem.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, i32)>,
        S: AsRef<str>,
    {
        let mut lexicon = Self {
            words: HashMap::new(),
            stems: HashMap::new(),
            stemmer: Stemmer::create(Algorithm::English),
        };
        for (word, score) in pairs {
            lexicon.insert(word.as_ref(), score);
        }
        lexicon
    }

    /// Layer `other` over `self`; its entries win on conflicts.
    pub fn merge(mut self, other: Lexicon) -> Self {
        self.words.extend(other.words);
        self.stems.extend(other.stems);
        self
    }

    fn insert(&mut self, word: &str, score: i32) {
        let word = word.to_lowercase();
        self.stems.insert(self.stemmer.stem(&word).into_owned(), score);
        self.words.insert(word, score);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Weight of a single token: verbatim (lowercased) first, then its stem.
    pub fn weight(&self, token: &str) -> Option<i32> {
        let lower = token.to_lowercase();
        if let Some(&w) = self.words.get(&lower) {
            return Some(w);
        }
        self.stems.get(self.stemmer.stem(&lower).as_ref()).copied()
    }

    /// Aggregate score of a token sequence; `0.0` for no tokens.
    pub fn score<S: AsRef<str>>(&self, tokens: &[S]) -> f64 {
        if tokens.is_empty() {
            return 0.0;
        }

        let mut negator = 1;
        let mut sum = 0i32;
        for token in tokens {
            let token = token.as_ref();
            if is_negation(token) {
                negator = -1;
            } else if let Some(w) = self.weight(token) {
                sum += negator * w;
            }
        }
        f64::from(sum) / tokens.len() as f64
    }
}

fn is_negation(token: &str) -> bool {
    NEGATIONS.iter().any(|n| n.eq_ignore_ascii_case(token))
}
