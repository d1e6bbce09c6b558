use super::views::FrequencyEntry;
use std::collections::HashMap;

/// Counts labels while remembering the order in which each label first appeared.
#[derive(Debug, Default)]
pub struct FrequencyTable {
    counts: Vec<(String, usize)>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, label: &str) {
        match self.index.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.index.insert(label.to_string(), self.counts.len());
                self.counts.push((label.to_string(), 1));
            }
        }
    }

    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Entries by descending count; ties keep first-seen order.
    pub fn into_entries(self) -> Vec<FrequencyEntry> {
        let mut counts = self.counts;
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
            .into_iter()
            .map(|(label, count)| FrequencyEntry { label, count })
            .collect()
    }
}

impl<'a> FromIterator<&'a str> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = &'a str>>(iter: T) -> Self {
        let mut table = Self::new();
        for label in iter {
            table.record(label);
        }
        table
    }
}
