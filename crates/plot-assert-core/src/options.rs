// File: crates/plot-assert-core/src/options.rs
// Summary: Options controlling how a plot is turned into constraints.

use crate::error::GridError;

/// Default number of x samples taken per plot column.
pub const DEFAULT_SAMPLES_PER_CHARACTER: usize = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AssertOptions {
    /// How many evenly spaced x values each column is sampled at.
    /// High-frequency functions need more than one to show their envelope.
    pub samples_per_character: usize,
}

impl AssertOptions {
    pub const fn new(samples_per_character: usize) -> Self {
        Self { samples_per_character }
    }

    pub const fn with_samples_per_character(mut self, samples_per_character: usize) -> Self {
        self.samples_per_character = samples_per_character;
        self
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.samples_per_character == 0 {
            return Err(GridError::InvalidSamplesPerCharacter(self.samples_per_character));
        }
        Ok(())
    }
}

impl Default for AssertOptions {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLES_PER_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_one_sample() {
        assert_eq!(AssertOptions::default().samples_per_character, 1);
        assert!(AssertOptions::default().validate().is_ok());
    }

    #[test]
    fn zero_samples_rejected() {
        let opts = AssertOptions::default().with_samples_per_character(0);
        assert_eq!(opts.validate(), Err(GridError::InvalidSamplesPerCharacter(0)));
    }
}
