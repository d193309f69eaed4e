use fin_chart::core::{DataPoint, Series, reduce_stack, stacked_series, stacked_y};

fn layer(values: &[f64]) -> Series {
    values
        .iter()
        .enumerate()
        .map(|(index, &y)| DataPoint::new(index as f64, y))
        .collect()
}

#[test]
fn reduce_sums_layers_per_index() {
    let stack = vec![layer(&[1.0, 2.0]), layer(&[3.0, 4.0])];
    assert_eq!(reduce_stack(&stack), layer(&[4.0, 6.0]));
}

#[test]
fn mismatched_layers_are_excluded_from_every_index() {
    let shorter = vec![layer(&[1.0, 2.0, 3.0]), layer(&[10.0, 10.0])];
    assert_eq!(reduce_stack(&shorter), layer(&[1.0, 2.0, 3.0]));

    let longer = vec![layer(&[1.0, 2.0]), layer(&[5.0, 5.0, 5.0]), layer(&[1.0, 1.0])];
    assert_eq!(reduce_stack(&longer), layer(&[2.0, 3.0]));
}

#[test]
fn reduced_stack_uses_first_layer_x_values() {
    let first = vec![DataPoint::new(100.0, 1.0), DataPoint::new(200.0, 1.0)];
    let second = vec![DataPoint::new(0.0, 2.0), DataPoint::new(1.0, 2.0)];
    let reduced = reduce_stack(&[first, second]);

    assert_eq!(reduced, vec![DataPoint::new(100.0, 3.0), DataPoint::new(200.0, 3.0)]);
}

#[test]
fn empty_stack_reduces_to_empty_series() {
    assert!(reduce_stack(&[]).is_empty());
    assert!(reduce_stack(&[Vec::new(), Vec::new()]).is_empty());
}

#[test]
fn series_is_lifted_by_stack_where_it_overlaps() {
    let series = layer(&[1.0, 1.0, 1.0]);
    let stack = vec![layer(&[1.0, 2.0]), layer(&[3.0, 4.0])];

    assert_eq!(stacked_y(&series, Some(stack.as_slice())), vec![5.0, 7.0, 1.0]);
    assert_eq!(stacked_y(&series, None), vec![1.0, 1.0, 1.0]);
    assert_eq!(stacked_series(&series, Some(stack.as_slice())), layer(&[5.0, 7.0, 1.0]));
}
