use url::Url;

use crate::core::SnapError;

/// A provider of raw page markup.
///
/// The snapshot pipeline only needs "give me the HTML behind this URL"; how the
/// page is obtained (plain HTTP, a headless browser, a recorded fixture) is up to
/// the implementor. It is implemented by [`HttpSession`](crate::core::HttpSession),
/// and tests substitute in-memory sources.
pub trait MarkupSource: Send + Sync {
    /// Fetches the markup at `url`.
    ///
    /// # Returns
    /// A `Future` resolving to the page body, or a `SnapError` if the source is
    /// unreachable or answers with a non-success status.
    fn fetch<'a>(
        &'a self,
        url: &'a Url,
    ) -> std::pin::Pin<Box<dyn std::future::Future<Output = Result<String, SnapError>> + Send + 'a>>;
}
