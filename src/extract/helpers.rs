use scraper::ElementRef;
use url::Url;

/// Rendered text of an element with runs of whitespace collapsed.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    let raw: String = el.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Resolve `href` against the page URL and keep it only if it is an absolute web address.
pub(crate) fn resolve_link(href: &str, page_url: Option<&Url>) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    let url = match page_url {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };
    matches!(url.scheme(), "http" | "https").then_some(url)
}

/// Parse a printed price such as `"1,234.56"`.
pub(crate) fn parse_close(text: &str) -> Option<f64> {
    text.replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
