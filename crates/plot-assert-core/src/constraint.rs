// File: crates/plot-assert-core/src/constraint.rs
// Summary: Constraint model (exact value, loose and strict vertical ranges) and its evaluation.

use log::trace;

use crate::error::{ConstraintViolation, MissingSides};
use crate::types::Value;

/// What the tested function's output must satisfy at every sampled x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConstraintRule {
    /// Exactly `y`; even a last-digit difference fails.
    ExactValue { y: Value },
    /// Within `[min_y, max_y]`.
    VerticalRangeLoose { min_y: Value, max_y: Value },
    /// Within `[min_y, max_y]`, and across the column some output lies above `inner_max_y`
    /// and some below `inner_min_y`.
    VerticalRangeStrict { min_y: Value, max_y: Value, inner_min_y: Value, inner_max_y: Value },
}

/// A rule anchored to the x values sampled from one column, ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub x_values: Vec<Value>,
    pub rule: ConstraintRule,
}

impl Constraint {
    pub fn exact_value(x_values: Vec<Value>, y: Value) -> Self {
        Self { x_values, rule: ConstraintRule::ExactValue { y } }
    }

    pub fn vertical_range_loose(x_values: Vec<Value>, min_y: Value, max_y: Value) -> Self {
        Self { x_values, rule: ConstraintRule::VerticalRangeLoose { min_y, max_y } }
    }

    pub fn vertical_range_strict(
        x_values: Vec<Value>,
        min_y: Value,
        max_y: Value,
        inner_min_y: Value,
        inner_max_y: Value,
    ) -> Self {
        Self { x_values, rule: ConstraintRule::VerticalRangeStrict { min_y, max_y, inner_min_y, inner_max_y } }
    }

    /// Evaluates `function` at every x in order and stops at the first mismatch.
    ///
    /// `function` is the intercepted tested function: its own failures already arrive as
    /// [`ConstraintViolation::FunctionFailed`] and are passed through unchanged.
    pub fn assert_matches<F>(&self, function: F) -> Result<(), ConstraintViolation>
    where
        F: Fn(Value) -> Result<Value, ConstraintViolation>,
    {
        match self.rule {
            ConstraintRule::ExactValue { y } => {
                for &x in &self.x_values {
                    let actual = function(x)?;
                    trace!("exact: f({x}) = {actual}, expected {y}");
                    if actual != y {
                        return Err(ConstraintViolation::NotEqual { x, actual, expected: y });
                    }
                }
                Ok(())
            }
            ConstraintRule::VerticalRangeLoose { min_y, max_y } => {
                self.sample_within(&function, min_y, max_y).map(|_| ())
            }
            ConstraintRule::VerticalRangeStrict { min_y, max_y, inner_min_y, inner_max_y } => {
                let outputs = self.sample_within(&function, min_y, max_y)?;
                let any_above = outputs.iter().any(|&y| y > inner_max_y);
                let any_below = outputs.iter().any(|&y| y < inner_min_y);
                let missing = match (any_above, any_below) {
                    (true, true) => return Ok(()),
                    (false, true) => MissingSides::Above,
                    (true, false) => MissingSides::Below,
                    (false, false) => MissingSides::AboveAndBelow,
                };
                Err(ConstraintViolation::InnerRangeNotSpanned {
                    first_x: self.x_values.first().copied().unwrap_or(Value::NAN),
                    last_x: self.x_values.last().copied().unwrap_or(Value::NAN),
                    min_y,
                    max_y,
                    missing,
                })
            }
        }
    }

    /// Outer-bound pass shared by both range kinds; returns the outputs for the envelope check.
    fn sample_within<F>(&self, function: &F, min_y: Value, max_y: Value) -> Result<Vec<Value>, ConstraintViolation>
    where
        F: Fn(Value) -> Result<Value, ConstraintViolation>,
    {
        let mut outputs = Vec::with_capacity(self.x_values.len());
        for &x in &self.x_values {
            let actual = function(x)?;
            trace!("range: f({x}) = {actual}, expected [{min_y}, {max_y}]");
            if !(min_y..=max_y).contains(&actual) {
                return Err(ConstraintViolation::OutOfRange { x, actual, min_y, max_y });
            }
            outputs.push(actual);
        }
        Ok(outputs)
    }
}
