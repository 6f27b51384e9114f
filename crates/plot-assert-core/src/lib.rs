// File: crates/plot-assert-core/src/lib.rs
// Summary: Core library entry point; exports the plot-to-constraints pipeline and conformance checks.

pub mod assertions;
pub mod axis;
pub mod builder;
pub mod constraint;
pub mod conversion;
pub mod error;
pub mod grid;
pub mod options;
pub mod registry;
pub mod sampling;
pub mod scale;
pub mod types;

pub use assertions::{
    assert_conforms_to, check_conforms_to, check_conforms_to_with, check_fallible_conforms_to, intercept_errors,
    intercept_panics,
};
pub use builder::PlotBuilder;
pub use constraint::{Constraint, ConstraintRule};
pub use error::{ConstraintViolation, GridError, MissingSides, PlotAssertError};
pub use options::AssertOptions;
pub use registry::{ConstraintKind, DEFAULT_KINDS};
pub use types::{AxisMarker, RawVisualisation, RawXAxis, Value, ValueBounds, VisualisationColumn, VisualisationRow};
