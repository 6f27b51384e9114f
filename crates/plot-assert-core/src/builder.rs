// File: crates/plot-assert-core/src/builder.rs
// Summary: Builder for writing plots row by row in test code.

use crate::error::GridError;
use crate::types::{RawVisualisation, RawXAxis, Value, VisualisationRow};

/// Assembles a [`RawVisualisation`]:
///
/// ```
/// use plot_assert_core::PlotBuilder;
///
/// let plot = PlotBuilder::new()
///     .labeled_row(4.0, "  I")
///     .row(" XI")
///     .labeled_row(2.0, "X  ")
///     .x_axis("| |", [-1.0, 1.0])
///     .build()
///     .unwrap();
/// assert_eq!(plot.visualisation_rows.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PlotBuilder {
    rows: Vec<VisualisationRow>,
    x_axis: Option<RawXAxis>,
}

impl PlotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Row without a Y axis label.
    pub fn row(mut self, characters: impl Into<String>) -> Self {
        self.rows.push(VisualisationRow::new(characters));
        self
    }

    /// Row labeled with a Y axis value.
    pub fn labeled_row(mut self, y_value: Value, characters: impl Into<String>) -> Self {
        self.rows.push(VisualisationRow::labeled(y_value, characters));
        self
    }

    /// Sets the X axis; a later call replaces an earlier one.
    pub fn x_axis(mut self, markers: impl Into<String>, values: impl Into<Vec<Value>>) -> Self {
        self.x_axis = Some(RawXAxis::new(markers, values));
        self
    }

    /// Structure is only checked later, at conversion time; here only the X axis is required.
    pub fn build(self) -> Result<RawVisualisation, GridError> {
        let x_axis = self.x_axis.ok_or(GridError::MissingXAxis)?;
        Ok(RawVisualisation::new(self.rows, x_axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_rows_in_order() {
        let plot = PlotBuilder::new()
            .labeled_row(1.0, "XXXXX")
            .labeled_row(0.0, "     ")
            .x_axis("|   |", vec![1.0, 2.0])
            .build()
            .unwrap();
        assert_eq!(
            plot,
            RawVisualisation::new(
                vec![VisualisationRow::labeled(1.0, "XXXXX"), VisualisationRow::labeled(0.0, "     ")],
                RawXAxis::new("|   |", [1.0, 2.0]),
            )
        );
    }

    #[test]
    fn missing_x_axis() {
        assert_eq!(PlotBuilder::new().row("X").build(), Err(GridError::MissingXAxis));
    }
}
