//! Public client surface + builder.
//! Scoped fetch sessions live in `session`; default endpoints and UA in `constants`.

mod constants;
mod session;

pub use session::HttpSession;

use crate::core::SnapError;
use constants::{DEFAULT_BASE_NEWS, DEFAULT_BASE_QUOTE, DEFAULT_MAX_SESSIONS, USER_AGENT};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use url::Url;

/// Holds the pooled HTTP client, the two source base URLs and the session pool.
///
/// Cloning is cheap; clones share the connection pool and the session limit.
#[derive(Debug, Clone)]
pub struct SnapClient {
    http: Client,
    base_news: Url,
    base_quote: Url,
    sessions: Arc<Semaphore>,
}

impl Default for SnapClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SnapClient {
    /// Create a new builder.
    pub fn builder() -> SnapClientBuilder {
        SnapClientBuilder::default()
    }

    /// Acquire a fetch session, waiting while `max_sessions` are already open.
    ///
    /// The session releases its slot when dropped or closed.
    ///
    /// # Errors
    /// Returns `SnapError::SessionUnavailable` if the pool has been shut down.
    pub async fn session(&self) -> Result<HttpSession, SnapError> {
        let permit = self
            .sessions
            .clone()
            .acquire_owned()
            .await
            .map_err(|_| SnapError::SessionUnavailable)?;
        Ok(HttpSession::new(self.http.clone(), permit))
    }

    /// Stop handing out sessions. Open sessions finish normally.
    pub fn shutdown(&self) {
        self.sessions.close();
    }

    /// Search URL for the past day's news about `symbol`.
    ///
    /// # Errors
    /// Fails only if the configured base cannot carry query parameters.
    pub fn news_url(&self, symbol: &str) -> Result<Url, SnapError> {
        let mut url = self.base_news.clone();
        if url.cannot_be_a_base() {
            return Err(SnapError::Config(format!("news base `{url}` cannot take a query")));
        }
        url.query_pairs_mut()
            .append_pair("q", &format!("{symbol} stock news"))
            .append_pair("tbm", "nws")
            .append_pair("tbs", "qdr:d");
        Ok(url)
    }

    /// Quote-history page URL for `symbol`.
    ///
    /// The symbol is appended as a single percent-encoded path segment, so it
    /// can never change the host or leave the quote base path.
    ///
    /// # Errors
    /// Fails only if the configured base cannot carry path segments.
    pub fn history_url(&self, symbol: &str) -> Result<Url, SnapError> {
        let base = &self.base_quote;
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|()| SnapError::Config(format!("quote base `{base}` cannot take a path")))?
            .pop_if_empty()
            .push(symbol)
            .push("history");
        Ok(url)
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SnapClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    base_quote: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    max_sessions: Option<usize>,
}

impl SnapClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the news search endpoint (e.g., `https://www.google.com/search`).
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
        self
    }

    /// Override the quotes HTML base (e.g., `https://finance.yahoo.com/quote/`).
    pub fn base_quote(mut self, url: Url) -> Self {
        self.base_quote = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Cap the number of concurrently open fetch sessions. Default: 4.
    pub fn max_sessions(mut self, n: usize) -> Self {
        self.max_sessions = Some(n);
        self
    }

    pub fn build(self) -> Result<SnapClient, SnapError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };
        let base_quote = match self.base_quote {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUOTE)?,
        };

        let max_sessions = self.max_sessions.unwrap_or(DEFAULT_MAX_SESSIONS);
        if max_sessions == 0 {
            return Err(SnapError::Config("max_sessions must be at least 1".into()));
        }

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .cookie_store(true);

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SnapClient {
            http,
            base_news,
            base_quote,
            sessions: Arc::new(Semaphore::new(max_sessions)),
        })
    }
}
