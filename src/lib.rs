//! ticker-snapshot: per-ticker market snapshots.
//!
//! Scrapes the past day's headlines and a short quote history for one symbol,
//! labels each headline with a lexicon sentiment, and annotates the closes with
//! an EMA and a Hurst-exponent estimate.

pub mod core;
pub mod extract;
pub mod indicators;
pub mod sentiment;
#[cfg(feature = "server")]
pub mod server;
pub mod snapshot;

pub use crate::core::{
    HttpSession, MarkupSource, NewsItem, PriceBar, PriceRow, Sentiment, SnapClient,
    SnapClientBuilder, SnapError, Snapshot,
};
pub use extract::{ExtractionRules, Extractor};
pub use sentiment::{Lexicon, SentimentClassifier};
pub use snapshot::{Assembler, build_snapshot};
