//! Snapshot assembly: fetch both sources, extract, enrich, merge.

mod assemble;

use std::sync::Arc;

use url::Url;

use crate::core::{MarkupSource, SnapClient, SnapError, Snapshot};
use crate::extract::{ExtractionRules, Extractor};
use crate::indicators::DEFAULT_EMA_PERIOD;
use crate::sentiment::{Lexicon, SentimentClassifier};

/// Builds [`Snapshot`]s for one ticker at a time.
///
/// Cheap to clone; clones share the client, the compiled rules and the lexicon,
/// so one `Assembler` can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct Assembler {
    client: SnapClient,
    extractor: Arc<Extractor>,
    classifier: Arc<SentimentClassifier>,
    ema_period: usize,
}

impl Assembler {
    /// An assembler with the built-in extraction rules, the bundled lexicon
    /// and a 12-period EMA.
    pub fn new(client: &SnapClient) -> Self {
        Self {
            client: client.clone(),
            extractor: Arc::new(Extractor::default()),
            classifier: Arc::new(SentimentClassifier::default()),
            ema_period: DEFAULT_EMA_PERIOD,
        }
    }

    /// Replace the extraction rules.
    ///
    /// # Errors
    /// Returns the compile error if any selector is invalid.
    pub fn with_rules(mut self, rules: &ExtractionRules) -> Result<Self, SnapError> {
        self.extractor = Arc::new(Extractor::new(rules)?);
        Ok(self)
    }

    /// Replace the sentiment lexicon.
    #[must_use]
    pub fn with_lexicon(mut self, lexicon: Lexicon) -> Self {
        self.classifier = Arc::new(SentimentClassifier::new(lexicon));
        self
    }

    /// Set the EMA period. Values below 1 are treated as 1.
    #[must_use]
    pub fn ema_period(mut self, period: usize) -> Self {
        self.ema_period = period.max(1);
        self
    }

    /// Fetch and assemble the snapshot for `ticker`.
    ///
    /// Never fails: each source that cannot be fetched contributes an empty
    /// list, and if no fetch session can be acquired the whole snapshot is
    /// empty. The session is released before this returns, and also if the
    /// returned future is dropped mid-flight.
    #[tracing::instrument(skip_all, fields(ticker = %ticker))]
    pub async fn build_snapshot(&self, ticker: &str) -> Snapshot {
        let session = match self.client.session().await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!(error = %e, "no fetch session available; returning empty snapshot");
                return Snapshot::default();
            }
        };

        let snapshot = self.assemble_from(&session, ticker).await;
        session.close();
        snapshot
    }

    /// Run the pipeline against an arbitrary markup source.
    ///
    /// Sources are fetched sequentially, news first, exactly once each.
    pub async fn assemble_from(&self, source: &dyn MarkupSource, ticker: &str) -> Snapshot {
        let news = match fetch_page(source, self.client.news_url(ticker), "news").await {
            Some((url, html)) => self.extractor.extract_news(&html, Some(&url), ticker),
            None => Vec::new(),
        };

        let rows = match fetch_page(source, self.client.history_url(ticker), "prices").await {
            Some((_, html)) => self.extractor.extract_prices(&html),
            None => Vec::new(),
        };

        let prices = assemble::enrich_prices(rows, self.ema_period);
        let news = assemble::label_news(news, &self.classifier);

        tracing::debug!(news = news.len(), prices = prices.len(), "snapshot assembled");
        Snapshot { news, prices }
    }
}

async fn fetch_page(
    source: &dyn MarkupSource,
    url: Result<Url, SnapError>,
    what: &'static str,
) -> Option<(Url, String)> {
    let url = match url {
        Ok(u) => u,
        Err(e) => {
            tracing::warn!(source = what, error = %e, "could not build source URL");
            return None;
        }
    };

    match source.fetch(&url).await {
        Ok(html) => {
            tracing::debug!(source = what, url = %url, bytes = html.len(), "fetched page");
            Some((url, html))
        }
        Err(e) => {
            tracing::warn!(source = what, url = %url, error = %e, "source fetch failed");
            None
        }
    }
}

/// One-shot convenience: assemble a snapshot with default rules and lexicon.
pub async fn build_snapshot(client: &SnapClient, ticker: &str) -> Snapshot {
    Assembler::new(client).build_snapshot(ticker).await
}
