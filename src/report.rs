use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Tally of how many curves were replaced by splines of each segment count
/// during one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    counts: BTreeMap<usize, usize>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more spline with `segments` segments
    pub fn record(&mut self, segments: usize) {
        *self.counts.entry(segments).or_insert(0) += 1;
    }

    /// Number of splines with `segments` segments
    pub fn get(&self, segments: usize) -> usize {
        self.counts.get(&segments).copied().unwrap_or(0)
    }

    /// Total number of converted curves
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (segment count, occurrences) pairs in ascending segment count
    pub fn iter(&self) -> btree_map::Iter<'_, usize, usize> {
        self.counts.iter()
    }

    pub fn counts(&self) -> &BTreeMap<usize, usize> {
        &self.counts
    }

    pub fn merge(&mut self, other: &Report) {
        for (&segments, &count) in other.iter() {
            *self.counts.entry(segments).or_insert(0) += count;
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "New spline lengths:")?;
        for (segments, count) in self.iter() {
            write!(f, "\n{}: {}", segments, count)?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = (&'a usize, &'a usize);
    type IntoIter = btree_map::Iter<'a, usize, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
