//! Tabulation of sampled counts, ordered by value, with side-by-side alignment of two tabulations.

use std::collections::BTreeMap;

use serde::Serialize;

/// Number of occurrences of each distinct value, ordered ascending by value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Histogram {
    counts: BTreeMap<u32, usize>,
}
impl Histogram {
    pub fn tabulate(values: &[u32]) -> Self {
        values.iter().copied().collect()
    }

    pub fn get(&self, value: u32) -> usize {
        self.counts.get(&value).copied().unwrap_or_default()
    }

    /// Total number of tabulated samples.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or_default()
    }

    /// `(value, count)` pairs in ascending order of value.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.counts.iter().map(|(&value, &count)| (value, count))
    }
}

impl FromIterator<u32> for Histogram {
    fn from_iter<T: IntoIterator<Item = u32>>(iter: T) -> Self {
        let mut counts = BTreeMap::new();
        for value in iter {
            *counts.entry(value).or_default() += 1;
        }
        Self { counts }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AlignedRow {
    pub value: u32,
    pub left: usize,
    pub right: usize,
}

/// Pairs up two histograms over the union of their values, zero-filling a value absent on one side.
pub fn align(left: &Histogram, right: &Histogram) -> Vec<AlignedRow> {
    let mut rows: BTreeMap<u32, AlignedRow> = BTreeMap::new();
    for (value, count) in left.iter() {
        rows.entry(value)
            .or_insert(AlignedRow { value, left: 0, right: 0 })
            .left = count;
    }
    for (value, count) in right.iter() {
        rows.entry(value)
            .or_insert(AlignedRow { value, left: 0, right: 0 })
            .right = count;
    }
    rows.into_values().collect()
}
