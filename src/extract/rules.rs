//! Extraction rules as data.
//!
//! Every field is an ordered list of CSS selectors; the first one that yields
//! non-empty text wins. Sources change their markup far more often than this
//! crate changes, so the lists can be replaced from a JSON file.

use std::path::Path;

use scraper::{ElementRef, Selector};
use serde::{Deserialize, Serialize};

use crate::core::SnapError;

use super::helpers::element_text;

/// Rules for the news search-results page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsRules {
    /// Nodes treated as headline candidates.
    pub candidate: String,
    /// Heading-like child carrying the headline text.
    pub title: Vec<String>,
    /// The nearest self-or-ancestor matching any of these scopes the source/time lookup.
    pub container: Vec<String>,
    pub source: Vec<String>,
    pub time: Vec<String>,
    pub default_source: String,
    pub default_time: String,
}

impl Default for NewsRules {
    fn default() -> Self {
        Self {
            candidate: "a".into(),
            title: vec![r#"[role="heading"]"#.into(), "h3".into()],
            container: vec!["div".into(), "g-card".into()],
            source: vec!["cite".into(), ".Mg7P1".into()],
            time: vec!["span".into(), ".OSrXXb".into()],
            default_source: "News".into(),
            default_time: "24h".into(),
        }
    }
}

/// Rules for the quote-history table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceRules {
    pub row: String,
    pub cell: String,
    /// Rows with fewer cells are dropped (header, dividend and split rows).
    pub min_columns: usize,
    pub date_column: usize,
    pub close_column: usize,
}

impl Default for PriceRules {
    fn default() -> Self {
        Self {
            row: "table tbody tr".into(),
            cell: "td".into(),
            min_columns: 6,
            date_column: 0,
            close_column: 4,
        }
    }
}

/// The complete rule set for both sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionRules {
    pub news: NewsRules,
    pub prices: PriceRules,
}

impl ExtractionRules {
    /// Parse rules from JSON. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `SnapError::Json` on malformed input.
    pub fn from_json(json: &str) -> Result<Self, SnapError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load rules from a JSON file.
    ///
    /// # Errors
    /// Returns `SnapError::Io` if the file cannot be read, `SnapError::Json` if it does not parse.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SnapError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

/* ----------------------- compiled form ----------------------- */

pub(crate) fn compile(selector: &str) -> Result<Selector, SnapError> {
    Selector::parse(selector).map_err(|e| SnapError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// An ordered fallback chain of selectors for one field.
#[derive(Debug, Clone)]
pub(crate) struct FieldRule(Vec<Selector>);

impl FieldRule {
    pub(crate) fn compile(selectors: &[String]) -> Result<Self, SnapError> {
        selectors
            .iter()
            .map(|s| compile(s))
            .collect::<Result<Vec<_>, _>>()
            .map(FieldRule)
    }

    /// Text of the first descendant of `scope` matched by the earliest rule that yields any.
    pub(crate) fn first_text(&self, scope: ElementRef<'_>) -> Option<String> {
        self.0.iter().find_map(|sel| {
            scope
                .select(sel)
                .next()
                .map(element_text)
                .filter(|t| !t.is_empty())
        })
    }

    pub(crate) fn matches(&self, el: &ElementRef<'_>) -> bool {
        self.0.iter().any(|sel| sel.matches(el))
    }
}
