//! Provides the `ExclusionSet` structure, built from the lines of the
//! exclusion list.
use fxhash::FxHashSet;
use tracing::debug;

use crate::operands::LoadedSequence;

/// An `ExclusionSet` holds each distinct line of a `LoadedSequence` once.
/// * Members are slices borrowed from the sequence, so the set can't outlive,
///   own or change the sequence it indexes.
/// * Duplicate lines collapse to one member; no count is kept.
/// * Once built it only answers `contains`.
#[derive(Debug, Default)]
pub struct ExclusionSet<'data> {
    set: FxHashSet<&'data [u8]>,
}

impl<'data> ExclusionSet<'data> {
    /// Build the set from every line of `sequence`
    #[must_use]
    pub fn build(sequence: &'data LoadedSequence) -> ExclusionSet<'data> {
        let excluded: ExclusionSet = sequence.lines().collect();
        debug!(lines = sequence.len(), distinct = excluded.len(), "built exclusion set");
        excluded
    }

    /// Is `line` (terminator included) a member?
    #[must_use]
    pub fn contains(&self, line: &[u8]) -> bool {
        self.set.contains(line)
    }

    /// Number of distinct lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.set.len()
    }

    /// True if nothing is excluded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

impl<'data> FromIterator<&'data [u8]> for ExclusionSet<'data> {
    fn from_iter<I: IntoIterator<Item = &'data [u8]>>(lines: I) -> Self {
        ExclusionSet { set: lines.into_iter().collect() }
    }
}

#[allow(clippy::pedantic)]
#[cfg(test)]
mod test {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn duplicates_collapse_to_one_member() {
        let sequence = LoadedSequence::from_bytes(b"Noe\nNoe\nIris\nNoe\n".to_vec());
        let excluded = ExclusionSet::build(&sequence);
        assert_eq!(excluded.len(), 2);
        assert!(excluded.contains(b"Noe\n"));
        assert!(excluded.contains(b"Iris\n"));
    }

    #[test]
    fn membership_is_exact_byte_equality() {
        let sequence = LoadedSequence::from_bytes(b"Hugo\nAnna\r\nLina".to_vec());
        let excluded = ExclusionSet::build(&sequence);
        assert!(excluded.contains(b"Hugo\n"));
        assert!(!excluded.contains(b"Hugo"));
        assert!(!excluded.contains(b"hugo\n"));
        assert!(!excluded.contains(b"Hugo \n"));
        assert!(excluded.contains(b"Anna\r\n"));
        assert!(!excluded.contains(b"Anna\n"));
        assert!(excluded.contains(b"Lina"));
        assert!(!excluded.contains(b"Lina\n"));
    }

    #[test]
    fn an_empty_sequence_builds_an_empty_set() {
        let sequence = LoadedSequence::default();
        let excluded = ExclusionSet::build(&sequence);
        assert!(excluded.is_empty());
        assert!(!excluded.contains(b""));
        assert!(!excluded.contains(b"\n"));
    }

    #[test]
    fn insertion_order_does_not_change_membership() {
        let lines: Vec<&[u8]> = vec![b"a\n", b"b\n", b"a\n", b"c", b"\n"];
        let probes: Vec<&[u8]> = vec![b"a\n", b"b\n", b"c", b"c\n", b"\n", b"d\n", b""];
        let reference: ExclusionSet = lines.iter().copied().collect();
        for order in lines.iter().copied().permutations(lines.len()) {
            let excluded: ExclusionSet = order.into_iter().collect();
            assert_eq!(excluded.len(), reference.len());
            for probe in &probes {
                assert_eq!(excluded.contains(probe), reference.contains(probe), "for {probe:?}");
            }
        }
    }
}
