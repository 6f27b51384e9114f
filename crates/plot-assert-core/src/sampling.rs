// File: crates/plot-assert-core/src/sampling.rs
// Summary: Evenly spaced x sample points per column, clipped to the declared X domain.

use crate::scale::compute_value_bounds;
use crate::types::{AxisMarker, Value, ValueBounds};

/// Midpoints of `count` equal slices of `bounds`; a single sample is the center itself.
pub fn evenly_distributed_points(bounds: &ValueBounds, count: usize) -> Vec<Value> {
    if count == 1 {
        return vec![bounds.center];
    }
    let half_step = bounds.width() / count as Value * 0.5;
    (0..count)
        .map(|i| bounds.lower_bound + half_step + i as Value * half_step * 2.0)
        .collect()
}

/// Closed X range between the first and last marker centers.
pub fn x_domain(x_axis_markers: &[AxisMarker]) -> (Value, Value) {
    let center_at = |m: Option<&AxisMarker>| {
        m.map_or(Value::NAN, |m| compute_value_bounds(x_axis_markers, m.character_index).center)
    };
    (center_at(x_axis_markers.first()), center_at(x_axis_markers.last()))
}

/// Sample x values for the column at `x_index`, ascending.
///
/// Samples falling into the half-cell overhang outside the domain are dropped.
pub fn sample_column(x_axis_markers: &[AxisMarker], x_index: usize, samples_per_character: usize) -> Vec<Value> {
    let bounds = compute_value_bounds(x_axis_markers, x_index);
    let (min_x, max_x) = x_domain(x_axis_markers);
    evenly_distributed_points(&bounds, samples_per_character)
        .into_iter()
        .filter(|x| (min_x..=max_x).contains(x))
        .collect()
}
