use fin_chart::core::tick_size;

#[test]
fn tick_size_picks_round_steps() {
    assert!((tick_size(-1.0, 11.0, 10) - 2.0).abs() <= 1e-12);
    assert!((tick_size(0.0, 996.0, 5) - 200.0).abs() <= 1e-9);
    assert!((tick_size(0.0, 1001.0, 5) - 500.0).abs() <= 1e-9);
    assert!((tick_size(0.0, 100.0, 10) - 10.0).abs() <= 1e-9);
    assert!((tick_size(0.0, 0.7, 5) - 0.2).abs() <= 1e-12);
}

#[test]
fn tick_size_is_nan_for_unusable_input() {
    assert!(tick_size(5.0, 5.0, 5).is_nan());
    assert!(tick_size(10.0, 0.0, 5).is_nan());
    assert!(tick_size(0.0, 10.0, 0).is_nan());
    assert!(tick_size(0.0, f64::INFINITY, 5).is_nan());
}
