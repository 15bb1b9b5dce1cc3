//! Technical indicators computed over a closing-price series.

use statrs::statistics::Statistics;

/// Period used for the snapshot's EMA column unless overridden.
pub const DEFAULT_EMA_PERIOD: usize = 12;

/// Returned by [`hurst`] when the series is too short or the estimate degenerates.
pub const NEUTRAL_HURST: f64 = 0.5;

/// Fewer closes than this are not enough for a Hurst estimate.
pub const MIN_HURST_CLOSES: usize = 10;

/// Exponential moving average, one output per input.
///
/// Seeded with the first price rather than an SMA warm-up, so early values sit
/// close to the raw series. Multiplier `k = 2 / (period + 1)`.
pub fn ema(series: &[f64], period: usize) -> Vec<f64> {
    let Some(&first) = series.first() else {
        return Vec::new();
    };
    let k = 2.0 / (period as f64 + 1.0);

    let mut out = Vec::with_capacity(series.len());
    out.push(first);
    for &price in &series[1..] {
        let prev = out[out.len() - 1];
        out.push(price * k + prev * (1.0 - k));
    }
    out
}

/// Rescaled-range estimate of the Hurst exponent, rounded to 2 decimals.
///
/// Uses the single-window approximation `ln(R/S) / ln(n)` over the log-returns,
/// with `S` the sample standard deviation. `> 0.5` suggests trending,
/// `< 0.5` mean reversion. Short series and any non-finite intermediate
/// (flat returns, non-positive prices) give [`NEUTRAL_HURST`].
pub fn hurst(series: &[f64]) -> f64 {
    if series.len() < MIN_HURST_CLOSES {
        return NEUTRAL_HURST;
    }
    rescaled_range_exponent(series).unwrap_or(NEUTRAL_HURST)
}

fn rescaled_range_exponent(series: &[f64]) -> Option<f64> {
    let returns: Vec<f64> = series.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    if returns.iter().any(|r| !r.is_finite()) {
        return None;
    }

    let (lo, hi) = returns
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &r| {
            (lo.min(r), hi.max(r))
        });
    let range = hi - lo;
    let std_dev = Statistics::std_dev(returns.iter());

    let h = (range / std_dev).ln() / (returns.len() as f64).ln();
    h.is_finite().then(|| round2(h))
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
