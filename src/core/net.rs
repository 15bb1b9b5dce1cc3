#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as text.
/// In `test-mode`, if `SNAP_RECORD=1`, the body is saved as a fixture named after `name`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _name: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("SNAP_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_name, _ext, &text)
        {
            tracing::warn!(name = _name, error = %e, "SNAP_RECORD: failed to write fixture");
        }
    }

    Ok(text)
}
