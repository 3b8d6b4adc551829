//! Category Counter Module
//! Frequency counting of canonical labels, with top-N and fixed-order modes.

use std::collections::HashMap;

/// Counts are shown in thousands on every chart.
pub const DISPLAY_SCALE: f64 = 1000.0;

/// Ordered mapping from category label to occurrence count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountTable {
    entries: Vec<(String, u64)>,
}

impl CountTable {
    pub fn entries(&self) -> &[(String, u64)] {
        &self.entries
    }

    pub fn labels(&self) -> Vec<&str> {
        self.entries.iter().map(|(label, _)| label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Counts divided by [`DISPLAY_SCALE`], order preserved.
    pub fn scaled(&self) -> Vec<(String, f64)> {
        self.entries
            .iter()
            .map(|(label, count)| (label.clone(), *count as f64 / DISPLAY_SCALE))
            .collect()
    }
}

/// Builds [`CountTable`]s from sequences of labels.
pub struct CategoryCounter;

impl CategoryCounter {
    /// Count per label in first-encounter order.
    fn tally<I, S>(labels: I) -> Vec<(String, u64)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut entries: Vec<(String, u64)> = Vec::new();

        for label in labels {
            let label = label.as_ref();
            match index.get(label) {
                Some(&i) => entries[i].1 += 1,
                None => {
                    index.insert(label.to_string(), entries.len());
                    entries.push((label.to_string(), 1));
                }
            }
        }

        entries
    }

    /// Descending by count; equal counts keep first-encounter order.
    pub fn frequency<I, S>(labels: I) -> CountTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Self::tally(labels);
        // sort_by is stable
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.retain(|(_, count)| *count > 0);
        CountTable { entries }
    }

    /// [`Self::frequency`] truncated to the `n` most frequent labels.
    pub fn top_n<I, S>(labels: I, n: usize) -> CountTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::frequency(labels);
        table.entries.truncate(n);
        table
    }

    /// Counts reindexed to `order`: every listed category appears, zero-filled
    /// when absent. Labels not in `order` are dropped.
    pub fn fixed_order<I, S>(labels: I, order: &[&str]) -> CountTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let counts: HashMap<String, u64> = Self::tally(labels).into_iter().collect();
        let entries = order
            .iter()
            .map(|label| (label.to_string(), counts.get(*label).copied().unwrap_or(0)))
            .collect();
        CountTable { entries }
    }
}
