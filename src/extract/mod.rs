//! Field extraction from the two source pages.
//!
//! Extraction is total: pages that match nothing, rows with missing cells and
//! unparseable prices all shrink the output instead of producing an error.

mod helpers;
mod rules;

pub use rules::{ExtractionRules, NewsRules, PriceRules};

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::core::{NewsItem, PriceRow, SnapError};
use helpers::{element_text, parse_close, resolve_link};
use rules::{FieldRule, compile};

/// At most this many headlines are kept, in document order.
pub const NEWS_LIMIT: usize = 10;
/// At most this many history rows are read, in document order.
pub const PRICE_LIMIT: usize = 30;

static DEFAULT_EXTRACTOR: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// Extract headlines with the built-in rules. See [`Extractor::extract_news`].
pub fn extract_news(html: &str, page_url: Option<&Url>, ticker: &str) -> Vec<NewsItem> {
    DEFAULT_EXTRACTOR.extract_news(html, page_url, ticker)
}

/// Extract history rows with the built-in rules. See [`Extractor::extract_prices`].
pub fn extract_prices(html: &str) -> Vec<PriceRow> {
    DEFAULT_EXTRACTOR.extract_prices(html)
}

#[derive(Debug, Clone)]
struct CompiledNews {
    candidate: Selector,
    title: FieldRule,
    container: FieldRule,
    source: FieldRule,
    time: FieldRule,
    default_source: String,
    default_time: String,
}

#[derive(Debug, Clone)]
struct CompiledPrices {
    row: Selector,
    cell: Selector,
    min_columns: usize,
    date_column: usize,
    close_column: usize,
}

/// A compiled, reusable set of [`ExtractionRules`].
#[derive(Debug, Clone)]
pub struct Extractor {
    news: CompiledNews,
    prices: CompiledPrices,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(&ExtractionRules::default()).expect("built-in extraction rules")
    }
}

impl Extractor {
    /// Compile `rules`.
    ///
    /// # Errors
    /// Returns `SnapError::Selector` for any selector that does not parse, and
    /// `SnapError::Config` if the price columns do not fit within `min_columns`.
    pub fn new(rules: &ExtractionRules) -> Result<Self, SnapError> {
        let n = &rules.news;
        let news = CompiledNews {
            candidate: compile(&n.candidate)?,
            title: FieldRule::compile(&n.title)?,
            container: FieldRule::compile(&n.container)?,
            source: FieldRule::compile(&n.source)?,
            time: FieldRule::compile(&n.time)?,
            default_source: n.default_source.clone(),
            default_time: n.default_time.clone(),
        };

        let p = &rules.prices;
        if p.date_column >= p.min_columns || p.close_column >= p.min_columns {
            return Err(SnapError::Config(format!(
                "price columns {}/{} must be below min_columns {}",
                p.date_column, p.close_column, p.min_columns
            )));
        }
        let prices = CompiledPrices {
            row: compile(&p.row)?,
            cell: compile(&p.cell)?,
            min_columns: p.min_columns,
            date_column: p.date_column,
            close_column: p.close_column,
        };

        Ok(Self { news, prices })
    }

    /// Headline candidates from a news search-results page, first [`NEWS_LIMIT`] in document order.
    ///
    /// A candidate survives only with a non-empty title and a link that resolves
    /// (against `page_url`, when given) to an absolute `http(s)` URL. Source and
    /// time fall back to the rule set's sentinel strings. The returned items
    /// carry no sentiment yet.
    pub fn extract_news(&self, html: &str, page_url: Option<&Url>, ticker: &str) -> Vec<NewsItem> {
        let doc = Html::parse_document(html);
        let rules = &self.news;

        let items: Vec<NewsItem> = doc
            .select(&rules.candidate)
            .filter_map(|link| {
                let title = rules.title.first_text(link)?;
                let href = link.value().attr("href")?;
                let link_url = resolve_link(href, page_url)?;

                let container = self.container_of(link);
                let source = container
                    .and_then(|c| rules.source.first_text(c))
                    .unwrap_or_else(|| rules.default_source.clone());
                let time = container
                    .and_then(|c| rules.time.first_text(c))
                    .unwrap_or_else(|| rules.default_time.clone());

                Some(NewsItem {
                    ticker: ticker.to_string(),
                    title,
                    link: link_url.into(),
                    source,
                    time,
                    sentiment: None,
                })
            })
            .take(NEWS_LIMIT)
            .collect();

        tracing::debug!(
            ticker,
            items = items.len(),
            bytes = html.len(),
            "extracted news candidates"
        );
        items
    }

    /// History rows, oldest first.
    ///
    /// Reads the first [`PRICE_LIMIT`] rows in document order, drops rows that
    /// are too short or whose close does not parse, then reverses (sources list
    /// newest first). Duplicate rows pass through untouched.
    pub fn extract_prices(&self, html: &str) -> Vec<PriceRow> {
        let doc = Html::parse_document(html);

        let mut rows: Vec<PriceRow> = doc
            .select(&self.prices.row)
            .take(PRICE_LIMIT)
            .filter_map(|row| self.parse_row(row))
            .collect();
        rows.reverse();

        tracing::debug!(rows = rows.len(), bytes = html.len(), "extracted price rows");
        rows
    }

    fn container_of<'a>(&self, link: ElementRef<'a>) -> Option<ElementRef<'a>> {
        std::iter::once(link)
            .chain(link.ancestors().filter_map(ElementRef::wrap))
            .find(|el| self.news.container.matches(el))
    }

    fn parse_row(&self, row: ElementRef<'_>) -> Option<PriceRow> {
        let p = &self.prices;
        let cells: Vec<ElementRef<'_>> = row.select(&p.cell).collect();
        if cells.len() < p.min_columns {
            return None;
        }
        let close = parse_close(&element_text(cells[p.close_column]))?;
        Some(PriceRow {
            date: element_text(cells[p.date_column]),
            close,
        })
    }
}
