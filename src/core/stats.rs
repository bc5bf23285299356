//! Frequency counting shared by the reports
//!
//! `mode` breaks ties by first appearance in table order; `mode_min` and
//! `mode_by_key` break them by the smallest value.

use std::collections::HashMap;
use std::hash::Hash;

/// Most frequent value and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Mode<T> {
    pub(crate) value: T,
    pub(crate) count: usize,
}

impl<T> Mode<T> {
    pub(crate) fn map<U>(self, f: impl FnOnce(T) -> U) -> Mode<U> {
        Mode {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Occurrence counts kept in first-appearance order
#[derive(Debug)]
pub(crate) struct Counter<K> {
    index: HashMap<K, usize>,
    entries: Vec<(K, usize)>,
}

impl<K: Copy + Eq + Hash> Counter<K> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, key: K) {
        match self.index.get(&key) {
            Some(&i) => self.entries[i].1 += 1,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, 1));
            }
        }
    }

    /// Most frequent value; ties go to the one seen first
    pub(crate) fn mode(&self) -> Option<Mode<K>> {
        let mut best: Option<Mode<K>> = None;
        for &(key, count) in &self.entries {
            // Strict comparison keeps the earliest value on ties
            if best.as_ref().is_none_or(|b| count > b.count) {
                best = Some(Mode { value: key, count });
            }
        }
        best
    }

    /// Most frequent value; ties go to the smallest `key(value)`
    pub(crate) fn mode_by_key<O: Ord>(&self, key: impl Fn(&K) -> O) -> Option<Mode<K>> {
        self.entries
            .iter()
            .copied()
            .max_by(|a, b| a.1.cmp(&b.1).then_with(|| key(&b.0).cmp(&key(&a.0))))
            .map(|(value, count)| Mode { value, count })
    }

    /// Most frequent value; ties go to the smallest value
    pub(crate) fn mode_min(&self) -> Option<Mode<K>>
    where
        K: Ord,
    {
        self.mode_by_key(|k| *k)
    }

    /// Counts ordered by frequency, most common first; ties keep first-appearance order
    pub(crate) fn into_ranked(self) -> Vec<(K, usize)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl<K: Copy + Eq + Hash> FromIterator<K> for Counter<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut counter = Counter::new();
        for key in iter {
            counter.add(key);
        }
        counter
    }
}
