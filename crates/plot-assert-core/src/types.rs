// File: crates/plot-assert-core/src/types.rs
// Summary: Shared value types (raw grid, axis markers, columns, value bounds) and glyph constants.

/// Numeric value on either axis.
pub type Value = f64;

/// Glyph for "nothing expected here".
pub const BLANK: char = ' ';
/// Glyph for an exact expected value.
pub const EXACT_GLYPH: char = 'X';
/// Glyph for a loose vertical range.
pub const LOOSE_RANGE_GLYPH: char = 'i';
/// Glyph for a strict vertical range.
pub const STRICT_RANGE_GLYPH: char = 'I';

/// One row of the plot, optionally labeled with a Y axis value.
#[derive(Clone, Debug, PartialEq)]
pub struct VisualisationRow {
    pub characters: String,
    pub y_axis_marker_value: Option<Value>,
}

impl VisualisationRow {
    pub fn new(characters: impl Into<String>) -> Self {
        Self { characters: characters.into(), y_axis_marker_value: None }
    }

    pub fn labeled(y_axis_marker_value: Value, characters: impl Into<String>) -> Self {
        Self { characters: characters.into(), y_axis_marker_value: Some(y_axis_marker_value) }
    }

    /// Length in glyphs, not bytes.
    pub fn width(&self) -> usize { self.characters.chars().count() }
}

/// Horizontal axis: non-space glyphs in `markers` are ticks, `values` holds one value per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RawXAxis {
    pub markers: String,
    pub values: Vec<Value>,
}

impl RawXAxis {
    pub fn new(markers: impl Into<String>, values: impl Into<Vec<Value>>) -> Self {
        Self { markers: markers.into(), values: values.into() }
    }

    pub fn width(&self) -> usize { self.markers.chars().count() }
}

/// The whole picture as written by the test author.
/// Contract: every row and the X axis marker string have the same width.
#[derive(Clone, Debug, PartialEq)]
pub struct RawVisualisation {
    pub visualisation_rows: Vec<VisualisationRow>,
    pub x_axis: RawXAxis,
}

impl RawVisualisation {
    pub fn new(visualisation_rows: Vec<VisualisationRow>, x_axis: RawXAxis) -> Self {
        Self { visualisation_rows, x_axis }
    }
}

/// A labeled tick: `value` sits at `character_index` along its axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisMarker {
    pub value: Value,
    pub character_index: usize,
}

impl AxisMarker {
    pub const fn new(value: Value, character_index: usize) -> Self {
        Self { value, character_index }
    }
}

/// Vertical slice of the grid at one x position, read top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisualisationColumn {
    pub characters: String,
}

impl VisualisationColumn {
    pub fn new(characters: impl Into<String>) -> Self {
        Self { characters: characters.into() }
    }

    /// True when the column holds nothing but blanks.
    pub fn is_blank(&self) -> bool { self.characters.chars().all(|c| c == BLANK) }

    /// True when every glyph is either blank or `glyph`.
    pub fn only_blank_and(&self, glyph: char) -> bool {
        self.characters.chars().all(|c| c == BLANK || c == glyph)
    }

    pub fn count(&self, glyph: char) -> usize {
        self.characters.chars().filter(|&c| c == glyph).count()
    }

    /// Row indices holding `glyph`, ascending.
    pub fn positions_of(&self, glyph: char) -> Vec<usize> {
        self.characters
            .chars()
            .enumerate()
            .filter_map(|(i, c)| (c == glyph).then_some(i))
            .collect()
    }

    /// First and last row holding `glyph`, when the glyph forms one gap-free run.
    pub fn contiguous_run_of(&self, glyph: char) -> Option<(usize, usize)> {
        let positions = self.positions_of(glyph);
        let (&first, &last) = (positions.first()?, positions.last()?);
        let no_gaps = positions.windows(2).all(|w| w[1] - w[0] == 1);
        no_gaps.then_some((first, last))
    }
}

/// Numeric sub-range a single character cell stands for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueBounds {
    pub lower_bound: Value,
    pub upper_bound: Value,
    pub center: Value,
}

impl ValueBounds {
    pub fn around(center: Value, width: Value) -> Self {
        let half = width.abs() * 0.5;
        Self { lower_bound: center - half, upper_bound: center + half, center }
    }

    pub fn width(&self) -> Value { self.upper_bound - self.lower_bound }

    pub fn contains(&self, v: Value) -> bool { v >= self.lower_bound && v <= self.upper_bound }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_run_detection() {
        assert_eq!(VisualisationColumn::new(" III ").contiguous_run_of('I'), Some((1, 3)));
        assert_eq!(VisualisationColumn::new("IIIII").contiguous_run_of('I'), Some((0, 4)));
        assert_eq!(VisualisationColumn::new(" I II").contiguous_run_of('I'), None);
        assert_eq!(VisualisationColumn::new("     ").contiguous_run_of('I'), None);
    }

    #[test]
    fn blank_column() {
        assert!(VisualisationColumn::new("   ").is_blank());
        assert!(!VisualisationColumn::new(" X ").is_blank());
    }

    #[test]
    fn bounds_around_center() {
        let b = ValueBounds::around(3.0, -1.0);
        assert_eq!(b, ValueBounds { lower_bound: 2.5, upper_bound: 3.5, center: 3.0 });
        assert_eq!(b.width(), 1.0);
        assert!(b.contains(2.5) && b.contains(3.5) && !b.contains(3.6));
    }
}
