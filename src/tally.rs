//! Counts kept by the filter pass.

/// How many lines of the full list were written and how many were dropped
/// because the exclusion set contains them. Duplicates count each time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Lines written to the output
    pub kept: usize,
    /// Lines found in the exclusion set
    pub dropped: usize,
}

impl Tally {
    pub(crate) fn keep(&mut self) {
        self.kept += 1;
    }
    pub(crate) fn drop_line(&mut self) {
        self.dropped += 1;
    }
    /// Every line of the full list is either kept or dropped
    #[must_use]
    pub fn total(self) -> usize {
        self.kept + self.dropped
    }
}
