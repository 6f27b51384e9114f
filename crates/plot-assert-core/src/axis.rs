// File: crates/plot-assert-core/src/axis.rs
// Summary: Reads and validates axis markers (Y from row labels, X from the marker string + values).

use crate::error::{AxisKind, GridError};
use crate::types::{AxisMarker, RawVisualisation, Value, VisualisationRow, BLANK};

/// Returns Y axis markers top to bottom, so a row index maps straight onto them.
pub fn read_y_axis_markers(visualisation: &RawVisualisation) -> Result<Vec<AxisMarker>, GridError> {
    let rows = &visualisation.visualisation_rows;
    validate_y_axis(rows)?;

    Ok(rows
        .iter()
        .enumerate()
        .filter_map(|(index, row)| row.y_axis_marker_value.map(|value| AxisMarker::new(value, index)))
        .collect())
}

/// Returns X axis markers left to right, pairing each non-space marker glyph with the next value.
pub fn read_x_axis_markers(visualisation: &RawVisualisation) -> Result<Vec<AxisMarker>, GridError> {
    let axis = &visualisation.x_axis;
    let positions: Vec<usize> = axis
        .markers
        .chars()
        .enumerate()
        .filter_map(|(i, c)| (c != BLANK).then_some(i))
        .collect();

    if positions.len() != axis.values.len() {
        return Err(GridError::MarkerValueCountMismatch { markers: positions.len(), values: axis.values.len() });
    }
    if positions.len() < 2 {
        return Err(GridError::TooFewMarkers { axis: AxisKind::X, found: positions.len() });
    }
    let width = axis.width();
    if positions.first() != Some(&0) || positions.last() != Some(&(width - 1)) {
        return Err(GridError::MissingXBoundaryMarkers);
    }
    check_strictly_ordered(AxisKind::X, &axis.values, |a, b| b > a)?;

    Ok(positions
        .into_iter()
        .zip(axis.values.iter().copied())
        .map(|(index, value)| AxisMarker::new(value, index))
        .collect())
}

fn validate_y_axis(rows: &[VisualisationRow]) -> Result<(), GridError> {
    let values: Vec<Value> = rows.iter().filter_map(|r| r.y_axis_marker_value).collect();
    if values.len() < 2 {
        return Err(GridError::TooFewMarkers { axis: AxisKind::Y, found: values.len() });
    }
    let labeled = |row: Option<&VisualisationRow>| row.is_some_and(|r| r.y_axis_marker_value.is_some());
    if !labeled(rows.first()) || !labeled(rows.last()) {
        return Err(GridError::MissingYBoundaryMarkers);
    }
    // Visual "up" is the larger value.
    check_strictly_ordered(AxisKind::Y, &values, |a, b| a - b > 0.0)
}

fn check_strictly_ordered(
    axis: AxisKind,
    values: &[Value],
    in_order: impl Fn(Value, Value) -> bool,
) -> Result<(), GridError> {
    match values.windows(2).find(|w| !in_order(w[0], w[1])) {
        Some(w) => Err(GridError::NonMonotonicMarkers { axis, first: w[0], second: w[1] }),
        None => Ok(()),
    }
}
