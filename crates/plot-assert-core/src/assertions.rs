// File: crates/plot-assert-core/src/assertions.rs
// Summary: Public entry points: check a tested function against a plot, with failure interception.

use std::panic::{catch_unwind, AssertUnwindSafe};

use log::debug;

use crate::constraint::Constraint;
use crate::error::{BoxedCause, ConstraintViolation, FunctionPanic, PlotAssertError, Result};
use crate::options::AssertOptions;
use crate::registry::DEFAULT_KINDS;
use crate::types::{RawVisualisation, Value};

/// Wraps an infallible tested function so that a panic at `x` becomes
/// [`ConstraintViolation::FunctionFailed`] carrying the panic message as its source.
pub fn intercept_panics<F>(function: F) -> impl Fn(Value) -> std::result::Result<Value, ConstraintViolation>
where
    F: Fn(Value) -> Value,
{
    move |x| {
        catch_unwind(AssertUnwindSafe(|| function(x))).map_err(|payload| {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).to_string()
            } else if let Some(s) = payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "function panicked".to_string()
            };
            ConstraintViolation::FunctionFailed { x, source: Box::new(FunctionPanic { message }) }
        })
    }
}

/// Wraps a fallible tested function so that an `Err` at `x` becomes
/// [`ConstraintViolation::FunctionFailed`] with the original error as its source.
pub fn intercept_errors<F, E>(function: F) -> impl Fn(Value) -> std::result::Result<Value, ConstraintViolation>
where
    F: Fn(Value) -> std::result::Result<Value, E>,
    E: Into<BoxedCause>,
{
    move |x| function(x).map_err(|e| ConstraintViolation::FunctionFailed { x, source: e.into() })
}

/// Runs every constraint in order against an intercepted function, stopping at the first failure.
pub fn evaluate_constraints<F>(constraints: &[Constraint], function: F) -> std::result::Result<(), ConstraintViolation>
where
    F: Fn(Value) -> std::result::Result<Value, ConstraintViolation>,
{
    for constraint in constraints {
        constraint.assert_matches(&function)?;
    }
    Ok(())
}

/// Checks `function` against the plot; `Ok(())` when every column's constraint holds.
pub fn check_conforms_to<F>(function: F, samples_per_character: usize, visualisation: &RawVisualisation) -> Result<()>
where
    F: Fn(Value) -> Value,
{
    check_conforms_to_with(function, &AssertOptions::new(samples_per_character), visualisation)
}

/// [`check_conforms_to`] taking an options struct.
pub fn check_conforms_to_with<F>(function: F, options: &AssertOptions, visualisation: &RawVisualisation) -> Result<()>
where
    F: Fn(Value) -> Value,
{
    run(intercept_panics(function), options, visualisation)
}

/// [`check_conforms_to`] for tested functions that report failure through `Result`.
pub fn check_fallible_conforms_to<F, E>(function: F, samples_per_character: usize, visualisation: &RawVisualisation) -> Result<()>
where
    F: Fn(Value) -> std::result::Result<Value, E>,
    E: Into<BoxedCause>,
{
    run(intercept_errors(function), &AssertOptions::new(samples_per_character), visualisation)
}

/// Panicking form of [`check_conforms_to`] for use inside tests.
#[track_caller]
pub fn assert_conforms_to<F>(function: F, samples_per_character: usize, visualisation: &RawVisualisation)
where
    F: Fn(Value) -> Value,
{
    if let Err(e) = check_conforms_to(function, samples_per_character, visualisation) {
        panic!("{e}");
    }
}

fn run<F>(function: F, options: &AssertOptions, visualisation: &RawVisualisation) -> Result<()>
where
    F: Fn(Value) -> std::result::Result<Value, ConstraintViolation>,
{
    let constraints = visualisation.to_constraints_with(options, DEFAULT_KINDS)?;
    let samples: usize = constraints.iter().map(|c| c.x_values.len()).sum();
    debug!("evaluating {} constraint(s) over {} sample(s)", constraints.len(), samples);
    evaluate_constraints(&constraints, function).map_err(PlotAssertError::from)
}
