use crate::core::types::{DataPoint, Series, Stack};

/// Collapses a stack into one cumulative series on the first layer's x values.
///
/// Only layers with exactly as many points as the first layer take part in
/// the sum; shorter or longer layers are left out of every index, not only
/// their missing tail.
#[must_use]
pub fn reduce_stack(stack: &Stack) -> Series {
    let Some(first) = stack.first() else {
        return Vec::new();
    };
    let filled: Vec<&Series> = stack
        .iter()
        .filter(|layer| layer.len() == first.len())
        .collect();

    first
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let total = filled.iter().fold(0.0, |sum, layer| sum + layer[index].y);
            DataPoint::new(point.x, total)
        })
        .collect()
}

/// `y` of every point lifted by the reduced stack at the same index, or left
/// as is past the end of the stack.
#[must_use]
pub fn stacked_y(series: &[DataPoint], stack: Option<&Stack>) -> Vec<f64> {
    let Some(stack) = stack else {
        return series.iter().map(|point| point.y).collect();
    };
    let reduced = reduce_stack(stack);
    series
        .iter()
        .enumerate()
        .map(|(index, point)| point.y + reduced.get(index).map_or(0.0, |floor| floor.y))
        .collect()
}

/// The series drawn on top of the stack.
#[must_use]
pub fn stacked_series(series: &[DataPoint], stack: Option<&Stack>) -> Series {
    series
        .iter()
        .zip(stacked_y(series, stack))
        .map(|(point, y)| DataPoint::new(point.x, y))
        .collect()
}
