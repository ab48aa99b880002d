//! The fixed sample set used for seeding and random adds.

use super::error::{BasketError, Result};

/// Entries the list is seeded with when no `samples` are configured.
pub const DEFAULT_SAMPLES: [&str; 3] = ["🍌 banana", "🍏 apple", "🍉 watermelon"];

/// A non-empty, ordered set of sample names.
///
/// Non-emptiness is what makes a uniform random pick always possible, so the
/// only way to build one from outside input is [`SampleSet::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    entries: Vec<String>,
}

impl SampleSet {
    /// Parses a comma-separated list, trimming entries and dropping blanks.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::Config`] when no non-blank entry remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use basket::domain::SampleSet;
    ///
    /// let set = SampleSet::parse("🍒 cherry, 🍑 peach").unwrap();
    /// assert_eq!(set.entries(), ["🍒 cherry", "🍑 peach"]);
    /// assert!(SampleSet::parse(" , ").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self> {
        let entries: Vec<String> = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();

        if entries.is_empty() {
            return Err(BasketError::Config(format!(
                "samples must contain at least one non-blank entry, got {raw:?}"
            )));
        }

        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of entries; always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index`, wrapping around so any index is valid.
    #[must_use]
    pub fn get_wrapped(&self, index: usize) -> &str {
        &self.entries[index % self.entries.len()]
    }
}

impl Default for SampleSet {
    fn default() -> Self {
        Self {
            entries: DEFAULT_SAMPLES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_the_three_fruits_in_order() {
        let set = SampleSet::default();
        assert_eq!(set.entries(), DEFAULT_SAMPLES);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn parse_rejects_blank_input() {
        let err = SampleSet::parse("").unwrap_err();
        assert!(matches!(err, BasketError::Config(_)));
    }

    #[test]
    fn get_wrapped_never_goes_out_of_bounds() {
        let set = SampleSet::default();
        assert_eq!(set.get_wrapped(4), "🍏 apple");
    }
}
