use ticker_snapshot::extract::{NEWS_LIMIT, extract_news};
use url::Url;

use crate::common::{Headline, news_page};

fn page_url() -> Url {
    Url::parse("https://news.example.com/search?q=DEMO").unwrap()
}

#[test]
fn page_without_candidates_is_empty_not_an_error() {
    let html = "<html><body><p>No results found.</p></body></html>";
    assert!(extract_news(html, Some(&page_url()), "DEMO").is_empty());
    assert!(extract_news("", None, "DEMO").is_empty());
}

#[test]
fn truncates_to_first_ten_in_document_order() {
    let titles: Vec<String> = (0..25).map(|i| format!("Headline {i}")).collect();
    let links: Vec<String> = (0..25)
        .map(|i| format!("https://news.example.com/{i}"))
        .collect();
    let items: Vec<Headline<'_>> = titles
        .iter()
        .zip(&links)
        .map(|(t, l)| Headline::new(t, l))
        .collect();

    let out = extract_news(&news_page(&items), Some(&page_url()), "DEMO");
    assert_eq!(out.len(), NEWS_LIMIT);
    assert_eq!(out[0].title, "Headline 0");
    assert_eq!(out[9].title, "Headline 9");
}

#[test]
fn duplicate_links_are_not_deduplicated() {
    let items = [
        Headline::new("Same story", "https://news.example.com/a").from("Wire", "1 hour ago"),
        Headline::new("Same story", "https://news.example.com/a").from("Wire", "1 hour ago"),
    ];
    let out = extract_news(&news_page(&items), Some(&page_url()), "DEMO");
    assert_eq!(out.len(), 2);
    assert_eq!(out[0], out[1]);
}

#[test]
fn source_and_time_come_from_the_enclosing_card() {
    let items = [
        Headline::new("With metadata", "https://news.example.com/a").from("Wire", "3 mins ago"),
        Headline::new("Without metadata", "https://news.example.com/b"),
    ];
    let out = extract_news(&news_page(&items), Some(&page_url()), "DEMO");
    assert_eq!(out.len(), 2);
    assert_eq!((out[0].source.as_str(), out[0].time.as_str()), ("Wire", "3 mins ago"));
    // the second card must not borrow the first card's metadata
    assert_eq!((out[1].source.as_str(), out[1].time.as_str()), ("News", "24h"));
}

#[test]
fn non_web_links_and_blank_titles_are_dropped() {
    let html = r#"<div>
        <a href="mailto:desk@example.com"><h3>Email the desk</h3></a>
        <a href="ftp://files.example.com/report"><h3>Raw report</h3></a>
        <a href="https://news.example.com/blank"><h3>   </h3></a>
        <a href="https://news.example.com/ok"><h3>Kept</h3></a>
    </div>"#;
    let out = extract_news(html, Some(&page_url()), "DEMO");
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].title, "Kept");
}

#[test]
fn heading_role_wins_over_h3() {
    let html = r#"<div><a href="https://news.example.com/x">
        <h3>Secondary</h3><span role="heading">Primary</span>
    </a></div>"#;
    let out = extract_news(html, None, "DEMO");
    assert_eq!(out[0].title, "Primary");
}
