use std::path::PathBuf;
use std::time::Duration;

use crate::core::{SnapClient, SnapError};
use crate::extract::ExtractionRules;
use crate::indicators::DEFAULT_EMA_PERIOD;
use crate::sentiment::Lexicon;
use crate::snapshot::Assembler;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Host to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Overall timeout for each upstream page fetch.
    pub fetch_timeout: Duration,
    /// Concurrently open fetch sessions.
    pub max_sessions: usize,
    pub ema_period: usize,
    /// Optional JSON file overriding the extraction rules.
    pub rules_path: Option<PathBuf>,
    /// Optional AFINN-format file replacing the bundled lexicon.
    pub lexicon_path: Option<PathBuf>,
    /// Layer the bundled market vocabulary over the lexicon.
    pub market_terms: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 5000,
            fetch_timeout: Duration::from_secs(30),
            max_sessions: 4,
            ema_period: DEFAULT_EMA_PERIOD,
            rules_path: None,
            lexicon_path: None,
            market_terms: false,
        }
    }
}

impl ServerConfig {
    /// Create config from `SNAP_*` environment variables, falling back to defaults.
    ///
    /// # Errors
    /// Returns `SnapError::Config` when a numeric or boolean variable is set but does not parse.
    pub fn from_env() -> Result<Self, SnapError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    ///
    /// # Errors
    /// Returns `SnapError::Config` when a numeric or boolean variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SnapError> {
        let defaults = Self::default();
        Ok(Self {
            host: lookup("SNAP_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "SNAP_PORT")?.unwrap_or(defaults.port),
            fetch_timeout: parse_var(&lookup, "SNAP_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.fetch_timeout),
            max_sessions: parse_var(&lookup, "SNAP_MAX_SESSIONS")?.unwrap_or(defaults.max_sessions),
            ema_period: parse_var(&lookup, "SNAP_EMA_PERIOD")?.unwrap_or(defaults.ema_period),
            rules_path: lookup("SNAP_RULES").map(PathBuf::from),
            lexicon_path: lookup("SNAP_LEXICON").map(PathBuf::from),
            market_terms: parse_var(&lookup, "SNAP_MARKET_TERMS")?
                .unwrap_or(defaults.market_terms),
        })
    }

    /// Get bind address.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the client and assembler this configuration describes.
    ///
    /// # Errors
    /// Fails if the client cannot be built or a rules/lexicon file cannot be loaded.
    pub fn assembler(&self) -> Result<Assembler, SnapError> {
        let client = SnapClient::builder()
            .timeout(self.fetch_timeout)
            .max_sessions(self.max_sessions)
            .build()?;

        let mut assembler = Assembler::new(&client).ema_period(self.ema_period);
        if let Some(path) = &self.rules_path {
            assembler = assembler.with_rules(&ExtractionRules::from_path(path)?)?;
        }
        if self.lexicon_path.is_some() || self.market_terms {
            let mut lexicon = match &self.lexicon_path {
                Some(path) => Lexicon::from_path(path)?,
                None => Lexicon::afinn(),
            };
            if self.market_terms {
                lexicon = lexicon.merge(Lexicon::market_terms());
            }
            assembler = assembler.with_lexicon(lexicon);
        }
        Ok(assembler)
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, SnapError> {
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| SnapError::Config(format!("{key}=`{raw}` is not a valid value"))),
    }
}
