// File: crates/plot-assert-core/src/error.rs
// Summary: Typed errors for grid validation and constraint evaluation.

use std::fmt;

use thiserror::Error;

use crate::types::Value;

/// Boxed cause carried by a failing tested function.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

impl fmt::Display for AxisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisKind::X => f.write_str("X"),
            AxisKind::Y => f.write_str("Y"),
        }
    }
}

/// The picture itself is malformed; raised before the tested function is ever called.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("Visualisation rows and the X axis markers string must have the same length!")]
    LengthMismatch,

    #[error("{found} {axis} axis marker(s) found, and there should be at least two!")]
    TooFewMarkers { axis: AxisKind, found: usize },

    #[error("Y axis should have markers for first and last row!")]
    MissingYBoundaryMarkers,

    #[error("X axis should have markers for first and last character!")]
    MissingXBoundaryMarkers,

    #[error("X axis has {markers} marker(s) but {values} value(s)!")]
    MarkerValueCountMismatch { markers: usize, values: usize },

    #[error("Given {axis} axis markers should have {} values (found: {first}, {second})!", .axis.expected_order())]
    NonMonotonicMarkers { axis: AxisKind, first: Value, second: Value },

    #[error("No constraints match this visualisation column: {column}")]
    NoMatchingConstraint { column: String },

    #[error("Ambiguous constraint; more than 1 constraint type matches: [{}] (column: {column:?})", .kinds.join(", "))]
    AmbiguousConstraint { kinds: Vec<&'static str>, column: String },

    #[error("Samples per character must be at least 1 (got {0})!")]
    InvalidSamplesPerCharacter(usize),

    #[error("Visualisation has no X axis; call x_axis() before build()!")]
    MissingXAxis,
}

impl AxisKind {
    fn expected_order(self) -> &'static str {
        match self {
            AxisKind::X => "ascending",
            AxisKind::Y => "descending",
        }
    }
}

/// Which side(s) of a strict range's inner band were never reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingSides {
    Above,
    Below,
    AboveAndBelow,
}

impl fmt::Display for MissingSides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingSides::Above => f.write_str("above"),
            MissingSides::Below => f.write_str("below"),
            MissingSides::AboveAndBelow => f.write_str("above and below"),
        }
    }
}

/// The tested function disagrees with the picture.
#[derive(Debug, Error)]
pub enum ConstraintViolation {
    #[error("For x={x}: {actual} is not equal to {expected}!")]
    NotEqual { x: Value, actual: Value, expected: Value },

    #[error("For x={x}: {actual} is not between {min_y} and {max_y}!")]
    OutOfRange { x: Value, actual: Value, min_y: Value, max_y: Value },

    #[error(
        "For a column with X values in range {first_x} to {last_x}, with minY={min_y} and maxY={max_y}, \
         values {missing} the inner range are missing!"
    )]
    InnerRangeNotSpanned {
        first_x: Value,
        last_x: Value,
        min_y: Value,
        max_y: Value,
        missing: MissingSides,
    },

    #[error("For x={x}: the function throws an exception!")]
    FunctionFailed {
        x: Value,
        #[source]
        source: BoxedCause,
    },
}

impl ConstraintViolation {
    /// The x value that triggered the violation; `None` for column-wide envelope failures.
    pub fn x(&self) -> Option<Value> {
        match self {
            Self::NotEqual { x, .. } | Self::OutOfRange { x, .. } | Self::FunctionFailed { x, .. } => Some(*x),
            Self::InnerRangeNotSpanned { .. } => None,
        }
    }
}

/// Panic payload of a tested function, kept as an error so it can travel as a `source`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FunctionPanic {
    pub message: String,
}

/// Anything a conformance check can fail with.
#[derive(Debug, Error)]
pub enum PlotAssertError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Violation(#[from] ConstraintViolation),
}

pub type Result<T, E = PlotAssertError> = std::result::Result<T, E>;
