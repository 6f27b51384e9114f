// File: crates/plot-assert-core/src/scale.rs
// Summary: Maps a character position along an axis to the value range that cell stands for.

use crate::types::{AxisMarker, Value, ValueBounds};

/// Bounds of the cell at `character_index`, linearly interpolated between the bracketing markers.
///
/// The cell is one character wide in value space: `center ± delta / 2`, where `delta` is the
/// value change per character on the bracketing segment. Works for both the descending Y axis
/// and the ascending X axis.
///
/// Contract: `markers` holds at least two entries with strictly increasing character indices
/// (guaranteed by [`crate::axis`]).
pub fn compute_value_bounds(markers: &[AxisMarker], character_index: usize) -> ValueBounds {
    let (a, b) = bracketing_segment(markers, character_index);
    let span = (b.character_index - a.character_index) as Value;
    let delta = (b.value - a.value) / span;
    let offset = character_index as Value - a.character_index as Value;
    ValueBounds::around(a.value + offset * delta, delta)
}

/// Segment `(markers[i], markers[i + 1])` with `markers[i] <= index < markers[i + 1]`.
/// Positions before the first marker use the first segment, positions at or past the last one
/// use the last segment.
fn bracketing_segment(markers: &[AxisMarker], character_index: usize) -> (AxisMarker, AxisMarker) {
    let last = markers.len() - 2;
    let i = markers
        .windows(2)
        .position(|w| character_index < w[1].character_index)
        .unwrap_or(last);
    (markers[i], markers[i + 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y_markers() -> Vec<AxisMarker> {
        vec![AxisMarker::new(5.0, 0), AxisMarker::new(1.0, 4)]
    }

    #[test]
    fn bounds_on_marker_rows() {
        let m = y_markers();
        assert_eq!(compute_value_bounds(&m, 0), ValueBounds { lower_bound: 4.5, upper_bound: 5.5, center: 5.0 });
        assert_eq!(compute_value_bounds(&m, 4), ValueBounds { lower_bound: 0.5, upper_bound: 1.5, center: 1.0 });
    }

    #[test]
    fn bounds_between_markers() {
        let m = y_markers();
        assert_eq!(compute_value_bounds(&m, 1), ValueBounds { lower_bound: 3.5, upper_bound: 4.5, center: 4.0 });
        assert_eq!(compute_value_bounds(&m, 3), ValueBounds { lower_bound: 1.5, upper_bound: 2.5, center: 2.0 });
    }

    #[test]
    fn uneven_segments_use_their_own_delta() {
        // 10 per char above row 2, 1 per char below it.
        let m = vec![AxisMarker::new(20.0, 0), AxisMarker::new(0.0, 2), AxisMarker::new(-4.0, 6)];
        assert_eq!(compute_value_bounds(&m, 1), ValueBounds { lower_bound: 5.0, upper_bound: 15.0, center: 10.0 });
        assert_eq!(compute_value_bounds(&m, 2), ValueBounds { lower_bound: -0.5, upper_bound: 0.5, center: 0.0 });
        assert_eq!(compute_value_bounds(&m, 6), ValueBounds { lower_bound: -4.5, upper_bound: -3.5, center: -4.0 });
    }

    #[test]
    fn ascending_axis() {
        let m = vec![AxisMarker::new(-1.0, 0), AxisMarker::new(1.0, 2)];
        assert_eq!(compute_value_bounds(&m, 0), ValueBounds { lower_bound: -1.5, upper_bound: -0.5, center: -1.0 });
        assert_eq!(compute_value_bounds(&m, 1), ValueBounds { lower_bound: -0.5, upper_bound: 0.5, center: 0.0 });
        assert_eq!(compute_value_bounds(&m, 2), ValueBounds { lower_bound: 0.5, upper_bound: 1.5, center: 1.0 });
    }

    #[test]
    fn outside_markers_extrapolates_edge_segment() {
        let m = vec![AxisMarker::new(0.0, 1), AxisMarker::new(2.0, 3)];
        assert_eq!(compute_value_bounds(&m, 0).center, -1.0);
        assert_eq!(compute_value_bounds(&m, 5).center, 4.0);
    }
}
