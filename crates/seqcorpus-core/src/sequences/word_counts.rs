//! Occurrence counts per word id, kept apart from the dictionary itself.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use super::sequence::Sequence;
use crate::error::Result;
use crate::readers::source::{write_file, LineSource};

/// Word id → number of occurrences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: BTreeMap<usize, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `id`.
    pub fn record(&mut self, id: usize) {
        *self.counts.entry(id).or_insert(0) += 1;
    }

    /// Count every observation of `seq`.
    pub fn record_sequence(&mut self, seq: &Sequence) {
        for &id in seq.observations() {
            self.record(id);
        }
    }

    /// Occurrences of `id`; zero when never seen.
    pub fn get(&self, id: usize) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Number of distinct ids counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum over all ids.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `(id, count)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&id, &count)| (id, count))
    }

    /// Write `id<TAB>count` lines in id order.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, |out| {
            for (id, count) in self.iter() {
                writeln!(out, "{id}\t{count}")?;
            }
            Ok(())
        })
    }

    /// Read counts written by [`WordCounts::save`]. A repeated id keeps the last count.
    pub fn load(path: &Path) -> Result<Self> {
        let mut src = LineSource::open_utf8(path)?;
        let mut counts = BTreeMap::new();
        while let Some(line) = src.next_line()? {
            let (id, count) = line
                .split_once('\t')
                .ok_or_else(|| src.malformed("expected `id<TAB>count`"))?;
            let id: usize = id
                .trim()
                .parse()
                .map_err(|_| src.malformed(format!("invalid word id {id:?}")))?;
            let count: u64 = count
                .trim()
                .parse()
                .map_err(|_| src.malformed(format!("invalid count {count:?}")))?;
            counts.insert(id, count);
        }
        Ok(Self { counts })
    }
}
