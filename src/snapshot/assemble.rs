use crate::core::{NewsItem, PriceBar, PriceRow};
use crate::indicators::{ema, hurst};
use crate::sentiment::SentimentClassifier;

/// Zip the EMA series and the series-level Hurst value onto each row.
///
/// Every bar carries the same `hurst`; the response shape has no series-level field.
pub(crate) fn enrich_prices(rows: Vec<PriceRow>, ema_period: usize) -> Vec<PriceBar> {
    let closes: Vec<f64> = rows.iter().map(|r| r.close).collect();
    let ema_series = ema(&closes, ema_period);
    let h = hurst(&closes);

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| PriceBar {
            date: row.date,
            close: row.close,
            ema: ema_series.get(i).copied(),
            hurst: h,
        })
        .collect()
}

pub(crate) fn label_news(items: Vec<NewsItem>, classifier: &SentimentClassifier) -> Vec<NewsItem> {
    items
        .into_iter()
        .map(|mut item| {
            item.sentiment = Some(classifier.classify(&item.title));
            item
        })
        .collect()
}
