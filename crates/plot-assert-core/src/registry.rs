// File: crates/plot-assert-core/src/registry.rs
// Summary: Constraint kinds (match predicate + builder), the default ordered registry, and column dispatch.

use log::trace;

use crate::constraint::Constraint;
use crate::error::GridError;
use crate::scale::compute_value_bounds;
use crate::types::{AxisMarker, Value, VisualisationColumn, EXACT_GLYPH, LOOSE_RANGE_GLYPH, STRICT_RANGE_GLYPH};

/// One way of reading a column. Implementations are stateless.
pub trait ConstraintKind {
    fn id(&self) -> &'static str;
    /// Whether `column` is written in this kind's glyphs.
    fn matches(&self, column: &VisualisationColumn) -> bool;
    /// Only called when [`ConstraintKind::matches`] returned true for `column`.
    fn build(&self, x_values: Vec<Value>, column: &VisualisationColumn, y_axis_markers: &[AxisMarker]) -> Constraint;
}

/// A single `X` among blanks.
pub struct ExactValueKind;

impl ConstraintKind for ExactValueKind {
    fn id(&self) -> &'static str { "exact_value" }

    fn matches(&self, column: &VisualisationColumn) -> bool {
        column.only_blank_and(EXACT_GLYPH) && column.count(EXACT_GLYPH) == 1
    }

    fn build(&self, x_values: Vec<Value>, column: &VisualisationColumn, y_axis_markers: &[AxisMarker]) -> Constraint {
        let row = column.positions_of(EXACT_GLYPH).first().copied().unwrap_or_default();
        Constraint::exact_value(x_values, compute_value_bounds(y_axis_markers, row).center)
    }
}

/// A gap-free run of `i` among blanks.
pub struct VerticalRangeLooseKind;

impl VerticalRangeLooseKind {
    fn build_from_run(x_values: Vec<Value>, top: usize, bottom: usize, y_axis_markers: &[AxisMarker]) -> Constraint {
        let min_y = compute_value_bounds(y_axis_markers, bottom).lower_bound;
        let max_y = compute_value_bounds(y_axis_markers, top).upper_bound;
        Constraint::vertical_range_loose(x_values, min_y, max_y)
    }
}

impl ConstraintKind for VerticalRangeLooseKind {
    fn id(&self) -> &'static str { "vertical_range_loose" }

    fn matches(&self, column: &VisualisationColumn) -> bool {
        column.only_blank_and(LOOSE_RANGE_GLYPH) && column.contiguous_run_of(LOOSE_RANGE_GLYPH).is_some()
    }

    fn build(&self, x_values: Vec<Value>, column: &VisualisationColumn, y_axis_markers: &[AxisMarker]) -> Constraint {
        let (top, bottom) = column.contiguous_run_of(LOOSE_RANGE_GLYPH).unwrap_or_default();
        Self::build_from_run(x_values, top, bottom, y_axis_markers)
    }
}

/// A gap-free run of `I` among blanks: a drawn line with real thickness.
pub struct VerticalRangeStrictKind;

/// Shortest `I` run that leaves a proper inner band between its outer rows.
pub const MIN_STRICT_RUN: usize = 3;

impl ConstraintKind for VerticalRangeStrictKind {
    fn id(&self) -> &'static str { "vertical_range_strict" }

    fn matches(&self, column: &VisualisationColumn) -> bool {
        column.only_blank_and(STRICT_RANGE_GLYPH) && column.contiguous_run_of(STRICT_RANGE_GLYPH).is_some()
    }

    fn build(&self, x_values: Vec<Value>, column: &VisualisationColumn, y_axis_markers: &[AxisMarker]) -> Constraint {
        let (top, bottom) = column.contiguous_run_of(STRICT_RANGE_GLYPH).unwrap_or_default();
        if bottom - top + 1 < MIN_STRICT_RUN {
            // Too thin to tell an inner band from the outer one.
            return VerticalRangeLooseKind::build_from_run(x_values, top, bottom, y_axis_markers);
        }
        Constraint::vertical_range_strict(
            x_values,
            compute_value_bounds(y_axis_markers, bottom).lower_bound,
            compute_value_bounds(y_axis_markers, top).upper_bound,
            compute_value_bounds(y_axis_markers, bottom - 1).lower_bound,
            compute_value_bounds(y_axis_markers, top + 1).upper_bound,
        )
    }
}

/// Registered kinds, in dispatch order.
pub const DEFAULT_KINDS: &[&dyn ConstraintKind] = &[&ExactValueKind, &VerticalRangeStrictKind, &VerticalRangeLooseKind];

/// Builds the constraint for one column; `Ok(None)` when the column is blank.
///
/// Exactly one kind in `kinds` has to accept the column: none is
/// [`GridError::NoMatchingConstraint`], several is [`GridError::AmbiguousConstraint`].
pub fn map_column_to_constraint(
    x_values: Vec<Value>,
    column: &VisualisationColumn,
    y_axis_markers: &[AxisMarker],
    kinds: &[&dyn ConstraintKind],
) -> Result<Option<Constraint>, GridError> {
    if column.is_blank() {
        return Ok(None);
    }
    let accepting: Vec<&dyn ConstraintKind> = kinds.iter().copied().filter(|k| k.matches(column)).collect();
    match accepting.as_slice() {
        [kind] => {
            trace!("column {:?} -> {}", column.characters, kind.id());
            Ok(Some(kind.build(x_values, column, y_axis_markers)))
        }
        [] => Err(GridError::NoMatchingConstraint { column: column.characters.clone() }),
        many => Err(GridError::AmbiguousConstraint {
            kinds: many.iter().map(|k| k.id()).collect(),
            column: column.characters.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::ConstraintRule;

    fn markers() -> Vec<AxisMarker> {
        vec![AxisMarker::new(5.0, 0), AxisMarker::new(1.0, 4)]
    }

    fn col(s: &str) -> VisualisationColumn {
        VisualisationColumn::new(s)
    }

    #[test]
    fn exact_value_matching() {
        assert!(ExactValueKind.matches(&col("   X ")));
        assert!(ExactValueKind.matches(&col("X    ")));
        assert!(!ExactValueKind.matches(&col(" XX  ")));
        assert!(!ExactValueKind.matches(&col(" X I ")));
        assert!(!ExactValueKind.matches(&col("     ")));
    }

    #[test]
    fn exact_value_build_uses_row_center() {
        let c = ExactValueKind.build(vec![1.23], &col(" X   "), &markers());
        assert_eq!(c, Constraint::exact_value(vec![1.23], 4.0));
    }

    #[test]
    fn loose_matching_and_build() {
        assert!(VerticalRangeLooseKind.matches(&col(" iii ")));
        assert!(VerticalRangeLooseKind.matches(&col("i    ")));
        assert!(!VerticalRangeLooseKind.matches(&col(" i ii")));
        assert!(!VerticalRangeLooseKind.matches(&col(" iI  ")));
        let c = VerticalRangeLooseKind.build(vec![1.23], &col(" ii  "), &markers());
        assert_eq!(c, Constraint::vertical_range_loose(vec![1.23], 2.5, 4.5));
    }

    #[test]
    fn strict_matching() {
        assert!(VerticalRangeStrictKind.matches(&col("   I ")));
        assert!(VerticalRangeStrictKind.matches(&col(" III ")));
        assert!(VerticalRangeStrictKind.matches(&col("IIIII")));
        assert!(!VerticalRangeStrictKind.matches(&col(" I II")));
        assert!(!VerticalRangeStrictKind.matches(&col(" IIX ")));
        assert!(!VerticalRangeStrictKind.matches(&col("   X ")));
    }

    #[test]
    fn strict_single_row_degrades_to_loose() {
        let c = VerticalRangeStrictKind.build(vec![1.23], &col("   I "), &markers());
        assert_eq!(c, Constraint::vertical_range_loose(vec![1.23], 1.5, 2.5));
        let loose = VerticalRangeLooseKind.build(vec![1.23], &col("   i "), &markers());
        assert_eq!(c, loose);
    }

    #[test]
    fn strict_two_rows_degrades_to_loose() {
        let c = VerticalRangeStrictKind.build(vec![1.0], &col(" II  "), &markers());
        assert!(matches!(c.rule, ConstraintRule::VerticalRangeLoose { .. }));
    }

    #[test]
    fn strict_build_uses_inner_rows() {
        let c = VerticalRangeStrictKind.build(vec![1.23], &col(" III "), &markers());
        assert_eq!(c, Constraint::vertical_range_strict(vec![1.23], 1.5, 4.5, 2.5, 3.5));
        let c = VerticalRangeStrictKind.build(vec![1.23], &col("IIIII"), &markers());
        assert_eq!(c, Constraint::vertical_range_strict(vec![1.23], 0.5, 5.5, 1.5, 4.5));
    }

    struct Mock {
        accepts: bool,
        id: &'static str,
    }

    impl ConstraintKind for Mock {
        fn id(&self) -> &'static str { self.id }
        fn matches(&self, _: &VisualisationColumn) -> bool { self.accepts }
        fn build(&self, x_values: Vec<Value>, _: &VisualisationColumn, _: &[AxisMarker]) -> Constraint {
            Constraint::exact_value(x_values, 42.0)
        }
    }

    #[test]
    fn dispatch_single_match() {
        let yes = Mock { accepts: true, id: "yes" };
        let no = Mock { accepts: false, id: "no" };
        let c = map_column_to_constraint(vec![4.0], &col("MOCK COLUMN"), &markers(), &[&yes, &no]).unwrap();
        assert_eq!(c, Some(Constraint::exact_value(vec![4.0], 42.0)));
    }

    #[test]
    fn dispatch_blank_column_is_skipped() {
        assert_eq!(map_column_to_constraint(vec![4.0], &col("     "), &markers(), DEFAULT_KINDS).unwrap(), None);
    }

    #[test]
    fn dispatch_no_match() {
        let no = Mock { accepts: false, id: "no" };
        let err = map_column_to_constraint(vec![4.0], &col("MOCK COLUMN"), &markers(), &[&no, &no]).unwrap_err();
        assert_eq!(err.to_string(), "No constraints match this visualisation column: MOCK COLUMN");
    }

    #[test]
    fn dispatch_ambiguous() {
        let a = Mock { accepts: true, id: "a" };
        let b = Mock { accepts: true, id: "b" };
        let err = map_column_to_constraint(vec![4.0], &col("MOCK COLUMN"), &markers(), &[&a, &b]).unwrap_err();
        assert_eq!(err, GridError::AmbiguousConstraint { kinds: vec!["a", "b"], column: "MOCK COLUMN".into() });
        assert!(err.to_string().starts_with("Ambiguous constraint; more than 1 constraint type matches:"));
    }

    #[test]
    fn default_kinds_never_overlap_on_real_glyphs() {
        for s in ["  X  ", " III ", " iii ", "I    ", "    i"] {
            let n = DEFAULT_KINDS.iter().filter(|k| k.matches(&col(s))).count();
            assert_eq!(n, 1, "column {s:?}");
        }
        let err = map_column_to_constraint(vec![0.0], &col(" Xi  "), &markers(), DEFAULT_KINDS).unwrap_err();
        assert!(matches!(err, GridError::NoMatchingConstraint { .. }));
    }
}
