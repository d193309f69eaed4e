use fin_chart::core::{DataPoint, reduce_stack};
use proptest::prelude::*;

proptest! {
    #[test]
    fn constant_layers_sum_to_layer_count_times_value(
        layers in 1usize..12,
        length in 0usize..48,
        value in -10_000.0f64..10_000.0
    ) {
        let layer: Vec<DataPoint> = (0..length)
            .map(|index| DataPoint::new(index as f64, value))
            .collect();
        let stack = vec![layer; layers];

        let reduced = reduce_stack(&stack);
        prop_assert_eq!(reduced.len(), length);
        let expected = layers as f64 * value;
        for point in reduced {
            prop_assert!((point.y - expected).abs() <= 1e-9 * expected.abs().max(1.0));
        }
    }
}
