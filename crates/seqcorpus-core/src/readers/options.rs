//! Sentence filtering thresholds for the corpus readers.

use serde::{Deserialize, Serialize};

/// Thresholds for the CoNLL-X reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConllOptions {
    /// Sentences must be strictly shorter than this.
    pub max_sent_len: usize,
    /// Stop reading once this many sentences were accepted.
    pub max_nr_sent: usize,
}

impl Default for ConllOptions {
    fn default() -> Self {
        Self {
            max_sent_len: 100,
            max_nr_sent: 100_000,
        }
    }
}

impl ConllOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_sent_len(mut self, max_sent_len: usize) -> Self {
        self.max_sent_len = max_sent_len;
        self
    }

    pub fn with_max_nr_sent(mut self, max_nr_sent: usize) -> Self {
        self.max_nr_sent = max_nr_sent;
        self
    }

    /// Whether a sentence of `len` tokens is kept.
    pub fn accepts(&self, len: usize) -> bool {
        len > 1 && len < self.max_sent_len
    }
}

/// Thresholds for the CoNLL-2002 reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conll2002Options {
    /// Minimum number of buffered lines, counting the blank line that ends
    /// the sentence. The default of 3 keeps sentences of two tokens or more.
    pub min_sent_len: usize,
    /// Sentences longer than this many tokens are dropped.
    pub max_sent_len: usize,
    /// Stop reading once this many sentences were accepted.
    pub max_nr_sent: usize,
}

impl Default for Conll2002Options {
    fn default() -> Self {
        Self {
            min_sent_len: 3,
            max_sent_len: 100_000,
            max_nr_sent: 100_000,
        }
    }
}

impl Conll2002Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_sent_len(mut self, min_sent_len: usize) -> Self {
        self.min_sent_len = min_sent_len;
        self
    }

    pub fn with_max_sent_len(mut self, max_sent_len: usize) -> Self {
        self.max_sent_len = max_sent_len;
        self
    }

    pub fn with_max_nr_sent(mut self, max_nr_sent: usize) -> Self {
        self.max_nr_sent = max_nr_sent;
        self
    }

    /// Whether a sentence of `len` tokens is kept. Empty sentences never are.
    pub fn accepts(&self, len: usize) -> bool {
        len > 0 && len + 1 >= self.min_sent_len && len <= self.max_sent_len
    }
}
