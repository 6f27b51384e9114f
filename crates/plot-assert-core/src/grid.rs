// File: crates/plot-assert-core/src/grid.rs
// Summary: Grid shape check and row-major to column-major transpose.

use crate::error::GridError;
use crate::types::{RawVisualisation, VisualisationColumn};

/// Every row and the X axis marker string must be equally wide.
pub fn validate_same_width(visualisation: &RawVisualisation) -> Result<(), GridError> {
    let expected = visualisation.x_axis.width();
    if visualisation.visualisation_rows.iter().all(|r| r.width() == expected) {
        Ok(())
    } else {
        Err(GridError::LengthMismatch)
    }
}

/// Column `i` is the `i`-th glyph of every row, top to bottom.
pub fn columns(visualisation: &RawVisualisation) -> Vec<VisualisationColumn> {
    let rows: Vec<Vec<char>> = visualisation
        .visualisation_rows
        .iter()
        .map(|r| r.characters.chars().collect())
        .collect();
    let width = rows.first().map_or(0, Vec::len);
    (0..width)
        .map(|i| VisualisationColumn::new(rows.iter().filter_map(|r| r.get(i)).collect::<String>()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{RawXAxis, VisualisationRow};

    fn vis(rows: &[&str], markers: &str) -> RawVisualisation {
        RawVisualisation::new(
            rows.iter().map(|r| VisualisationRow::new(*r)).collect(),
            RawXAxis::new(markers, [0.0, 1.0]),
        )
    }

    #[test]
    fn transposes_rows() {
        let cols = columns(&vis(&["  I", " XI", "X  "], "| |"));
        let cols: Vec<&str> = cols.iter().map(|c| c.characters.as_str()).collect();
        assert_eq!(cols, vec!["  X", " X ", "II "]);
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        assert!(validate_same_width(&vis(&["·X·", "X··"], "| |")).is_ok());
    }

    #[test]
    fn rejects_unequal_rows_or_axis() {
        assert_eq!(validate_same_width(&vis(&[" ", " X", "X  "], "| |")), Err(GridError::LengthMismatch));
        assert_eq!(validate_same_width(&vis(&["  X", " X ", "X  "], "|    |")), Err(GridError::LengthMismatch));
    }
}
