use reqwest::Client;
use tokio::sync::OwnedSemaphorePermit;
use url::Url;

use crate::core::{MarkupSource, SnapError, net};

/// A scoped handle on the shared HTTP client.
///
/// Holding one occupies a slot in the client's session pool; the slot is given
/// back when the session is closed or dropped, including on early returns and
/// panics unwinding through the owner.
#[derive(Debug)]
pub struct HttpSession {
    http: Client,
    _permit: OwnedSemaphorePermit,
}

impl HttpSession {
    pub(crate) fn new(http: Client, permit: OwnedSemaphorePermit) -> Self {
        tracing::trace!("fetch session acquired");
        Self {
            http,
            _permit: permit,
        }
    }

    /// Release the session explicitly. Equivalent to dropping it.
    pub fn close(self) {}

    async fn get(&self, url: &Url) -> Result<String, SnapError> {
        let resp = self.http.get(url.clone()).send().await?;
        if !resp.status().is_success() {
            return Err(SnapError::Status {
                status: resp.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(net::get_text(resp, &fixture_name(url), "html").await?)
    }
}

/// `quote_AAPL_history` for a history page, `search_AAPL` for a news search.
fn fixture_name(url: &Url) -> String {
    let mut name = url.path().trim_matches('/').replace('/', "_");
    if let Some((_, q)) = url.query_pairs().find(|(k, _)| k == "q")
        && let Some(symbol) = q.split_whitespace().next()
    {
        name.push('_');
        name.push_str(symbol);
    }
    name
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        tracing::trace!("fetch session released");
    }
}

impl MarkupSource for HttpSession {
    fn fetch<'a>(
        &'a self,
        url: &'a Url,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String, SnapError>> + Send + 'a>>
    {
        Box::pin(self.get(url))
    }
}
