use ticker_snapshot::{Assembler, SnapClient, SnapError};
use url::Url;

use crate::common::StaticSource;

const HOSTILE: &[&str] = &[
    "//evil.example",
    "http://127.0.0.1:8080/admin?",
    "../../etc",
    "..",
    "a/b",
    "AAPL#frag",
];

#[test]
fn history_url_is_the_quote_page() {
    let client = SnapClient::default();
    assert_eq!(
        client.history_url("AAPL").unwrap().as_str(),
        "https://finance.yahoo.com/quote/AAPL/history"
    );
    assert_eq!(
        client.history_url("BRK.B").unwrap().path(),
        "/quote/BRK.B/history"
    );
}

#[test]
fn hostile_tickers_stay_under_the_quote_base() {
    let client = SnapClient::default();
    for ticker in HOSTILE {
        let url = client.history_url(ticker).unwrap();
        assert_eq!(url.host_str(), Some("finance.yahoo.com"), "{ticker}: {url}");
        assert!(url.path().starts_with("/quote/"), "{ticker}: {url}");
        assert!(url.path().ends_with("/history"), "{ticker}: {url}");
        assert_eq!(url.query(), None, "{ticker}: {url}");
        assert_eq!(url.fragment(), None, "{ticker}: {url}");
    }
}

#[test]
fn slashes_in_a_ticker_are_encoded() {
    let url = SnapClient::default().history_url("../../etc").unwrap();
    assert_eq!(url.path(), "/quote/..%2F..%2Fetc/history");
}

#[test]
fn quote_base_without_trailing_slash_keeps_its_path() {
    let client = SnapClient::builder()
        .base_quote(Url::parse("https://quotes.example.com/quote").unwrap())
        .build()
        .unwrap();
    assert_eq!(
        client.history_url("MSFT").unwrap().as_str(),
        "https://quotes.example.com/quote/MSFT/history"
    );
}

#[test]
fn opaque_quote_base_is_a_config_error() {
    let client = SnapClient::builder()
        .base_quote(Url::parse("mailto:quotes@example.com").unwrap())
        .build()
        .unwrap();
    let err = client.history_url("AAPL").unwrap_err();
    assert!(matches!(err, SnapError::Config(_)), "{err:?}");
}

#[tokio::test]
async fn assembler_only_requests_the_configured_hosts() {
    let assembler = Assembler::new(&SnapClient::default());
    for ticker in HOSTILE {
        let source = StaticSource::new();
        let snap = assembler.assemble_from(&source, ticker).await;
        assert!(snap.prices.is_empty());

        let calls = source.calls();
        assert_eq!(calls.len(), 2, "{ticker}: {calls:?}");
        for call in &calls {
            let url = Url::parse(call).unwrap();
            let host = url.host_str().unwrap_or_default();
            assert!(
                host == "www.google.com" || host == "finance.yahoo.com",
                "{ticker} reached {call}"
            );
        }
        assert!(Url::parse(&calls[1]).unwrap().path().starts_with("/quote/"));
    }
}
