use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
///
/// Snapshot assembly itself never surfaces these to its caller; they describe
/// why a single source came back empty, or why configuration was rejected.
#[derive(Debug, Error)]
pub enum SnapError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed or joined.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// An extraction rule is not a valid CSS selector.
    #[error("invalid selector `{selector}`: {message}")]
    Selector {
        /// The offending selector text.
        selector: String,
        /// Parser diagnostic.
        message: String,
    },

    /// A lexicon line could not be parsed as `word<TAB>score`.
    #[error("invalid lexicon entry on line {line}: {message}")]
    Lexicon {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// Reading a rules or lexicon file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A rules file was not valid JSON for `ExtractionRules`.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// No fetch session could be acquired (the session pool was shut down).
    #[error("fetch session unavailable")]
    SessionUnavailable,

    /// A configuration value was rejected.
    #[error("invalid configuration: {0}")]
    Config(String),
}
