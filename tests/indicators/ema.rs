use ticker_snapshot::indicators::{DEFAULT_EMA_PERIOD, ema};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn seeded_with_first_price() {
    let out = ema(&[100.0, 101.0, 102.0], DEFAULT_EMA_PERIOD);
    assert_eq!(out.len(), 3);
    assert_eq!(out[0], 100.0);
    // k = 2 / 13
    assert!(approx(out[1], 100.153_846_153_846_16), "got {}", out[1]);
}

#[test]
fn empty_and_single_inputs() {
    assert!(ema(&[], 12).is_empty());
    assert_eq!(ema(&[42.5], 12), vec![42.5]);
}

#[test]
fn constant_series_stays_constant() {
    let out = ema(&[7.25; 20], 5);
    assert!(out.iter().all(|v| approx(*v, 7.25)));
}

#[test]
fn period_one_tracks_the_price() {
    let series = [3.0, 9.0, 4.0, 11.0];
    assert_eq!(ema(&series, 1), series.to_vec());
}

#[test]
fn lags_a_rising_series() {
    let series: Vec<f64> = (0..30).map(|i| 100.0 + f64::from(i)).collect();
    let out = ema(&series, 12);
    for (price, avg) in series.iter().zip(&out).skip(1) {
        assert!(avg < price);
    }
    assert!(out.windows(2).all(|w| w[1] > w[0]));
}
