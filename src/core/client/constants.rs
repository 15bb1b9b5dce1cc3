//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/120.0.0.0 Safari/537.36"
);

/// News search endpoint (source A). Query parameters are appended per request.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://www.google.com/search";

/// Yahoo quote HTML base (source B); `{symbol}/history` is appended.
pub(crate) const DEFAULT_BASE_QUOTE: &str = "https://finance.yahoo.com/quote/";

/// Concurrently open fetch sessions per client.
pub(crate) const DEFAULT_MAX_SESSIONS: usize = 4;
