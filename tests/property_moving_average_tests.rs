use fin_chart::core::{DataPoint, moving_average};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 1..64).prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(index, y)| DataPoint::new(index as f64 * 60.0, y))
            .collect()
    })
}

proptest! {
    #[test]
    fn period_one_returns_input(series in series_strategy()) {
        let averaged = moving_average(&series, 1, false);
        prop_assert_eq!(averaged.len(), series.len());
        for (out, input) in averaged.iter().zip(&series) {
            prop_assert!((out.y - input.y).abs() <= 1e-9);
            prop_assert_eq!(out.x, input.x);
        }
    }

    #[test]
    fn output_stays_within_trailing_window(
        series in series_strategy(),
        period in 1usize..12
    ) {
        let averaged = moving_average(&series, period, false);
        prop_assert_eq!(averaged.len(), series.len());

        for (index, out) in averaged.iter().enumerate() {
            let window = &series[(index + 1).saturating_sub(period)..=index];
            let low = window.iter().map(|point| point.y).fold(f64::INFINITY, f64::min);
            let high = window.iter().map(|point| point.y).fold(f64::NEG_INFINITY, f64::max);
            prop_assert!(out.y >= low - 1e-9 && out.y <= high + 1e-9);
        }
    }
}

fn irregular_series_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    prop::collection::vec((1u32..6, -1_000.0f64..1_000.0), 1..48).prop_map(|samples| {
        let mut x = 0.0;
        let mut points = vec![DataPoint::new(x, 0.0)];
        for (index, (gap, y)) in samples.into_iter().enumerate() {
            // The first interval sets the grid, so keep it at one step.
            let steps = if index == 0 { 1 } else { gap };
            x += f64::from(steps) * 60.0;
            points.push(DataPoint::new(x, y));
        }
        points
    })
}

proptest! {
    #[test]
    fn time_weighted_keeps_input_positions(
        series in irregular_series_strategy(),
        period in 1usize..12
    ) {
        let averaged = moving_average(&series, period, true);
        prop_assert_eq!(averaged.len(), series.len());
        for (out, input) in averaged.iter().zip(&series) {
            prop_assert_eq!(out.x, input.x);
            prop_assert!(out.y.is_finite());
        }
    }

    #[test]
    fn time_weighted_matches_plain_average_on_even_spacing(
        series in series_strategy(),
        period in 1usize..12
    ) {
        let weighted = moving_average(&series, period, true);
        let plain = moving_average(&series, period, false);
        prop_assert_eq!(weighted.len(), plain.len());
        for (left, right) in weighted.iter().zip(&plain) {
            prop_assert_eq!(left.x, right.x);
            prop_assert!((left.y - right.y).abs() <= 1e-9);
        }
    }
}
