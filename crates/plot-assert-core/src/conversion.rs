// File: crates/plot-assert-core/src/conversion.rs
// Summary: Raw plot to ordered constraint list: validation, axis reading, column dispatch and sampling.

use log::debug;

use crate::axis::{read_x_axis_markers, read_y_axis_markers};
use crate::constraint::Constraint;
use crate::error::GridError;
use crate::grid::{columns, validate_same_width};
use crate::options::AssertOptions;
use crate::registry::{map_column_to_constraint, ConstraintKind, DEFAULT_KINDS};
use crate::sampling::sample_column;
use crate::types::RawVisualisation;

impl RawVisualisation {
    /// Converts the plot into constraints, one per non-blank column, left to right.
    pub fn to_constraints(&self, samples_per_character: usize) -> Result<Vec<Constraint>, GridError> {
        self.to_constraints_with(&AssertOptions::new(samples_per_character), DEFAULT_KINDS)
    }

    /// Same as [`RawVisualisation::to_constraints`] with explicit options and constraint kinds.
    pub fn to_constraints_with(
        &self,
        options: &AssertOptions,
        kinds: &[&dyn ConstraintKind],
    ) -> Result<Vec<Constraint>, GridError> {
        options.validate()?;
        validate_same_width(self)?;
        let x_axis_markers = read_x_axis_markers(self)?;
        let y_axis_markers = read_y_axis_markers(self)?;

        let mut constraints = Vec::new();
        for (x_index, column) in columns(self).iter().enumerate() {
            let x_values = sample_column(&x_axis_markers, x_index, options.samples_per_character);
            if let Some(c) = map_column_to_constraint(x_values, column, &y_axis_markers, kinds)? {
                constraints.push(c);
            }
        }
        debug!(
            "converted {}x{} plot into {} constraint(s) ({} sample(s) per character)",
            self.x_axis.width(),
            self.visualisation_rows.len(),
            constraints.len(),
            options.samples_per_character
        );
        Ok(constraints)
    }
}
