use serde::{Deserialize, Serialize};

/* ----- NEWS ----- */

/// Three-way headline polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// A scraped headline, optionally labelled by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// The symbol the search was run for.
    pub ticker: String,
    /// Headline text.
    pub title: String,
    /// Absolute link to the article.
    pub link: String,
    /// Publisher name, or `"News"` when it could not be located.
    pub source: String,
    /// Relative publish time as shown by the source (e.g. `"3 hours ago"`), or `"24h"`.
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<Sentiment>,
}

/* ----- PRICES ----- */

/// One row of the quote-history table before enrichment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    /// Date exactly as printed by the source.
    pub date: String,
    /// Closing price, thousands separators stripped.
    pub close: f64,
}

/// A price row enriched with indicators.
///
/// `hurst` is a series-level statistic repeated on every bar of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Date exactly as printed by the source.
    pub date: String,
    /// Closing price.
    pub close: f64,
    /// Exponential moving average of the closes up to this bar. `None` only for an empty series.
    pub ema: Option<f64>,
    /// Series-level Hurst exponent, `0.5` when it cannot be estimated.
    pub hurst: f64,
}

/* ----- SNAPSHOT ----- */

/// The per-ticker response: up to 10 headlines and up to 30 bars, oldest bar first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub news: Vec<NewsItem>,
    pub prices: Vec<PriceBar>,
}

impl Snapshot {
    /// `true` when neither source produced anything.
    pub fn is_empty(&self) -> bool {
        self.news.is_empty() && self.prices.is_empty()
    }
}
