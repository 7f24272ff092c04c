//! # Label Dictionary
//!
//! Bidirectional mapping between labels (words or tags) and dense ids.
//! Ids are handed out in first-seen order starting at 0 and never change, so
//! downstream models can use them directly as array indices.
//!
//! On disk each label sits on its own `id<TAB>label` line; backslash, line
//! feed and carriage return inside a label are written as `\\`, `\n` and
//! `\r`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::error::{CorpusError, Result};
use crate::readers::source::{write_file, LineSource};

/// Insertion-ordered label ↔ id table. Grows monotonically; there is no removal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelDictionary {
    names: Vec<String>,
    ids: HashMap<String, usize>,
}

impl LabelDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a dictionary pre-seeded with `labels`, in order.
    ///
    /// Seeding `["noun"]` makes the default tag id 0.
    pub fn with_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dict = Self::new();
        for label in labels {
            dict.add(label.as_ref());
        }
        dict
    }

    /// Register `label` and return its id. Re-adding a known label is a no-op.
    pub fn add(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(label.to_string(), id);
        self.names.push(label.to_string());
        id
    }

    /// Whether `label` has been registered.
    pub fn contains(&self, label: &str) -> bool {
        self.ids.contains_key(label)
    }

    /// The id of `label`, if registered.
    pub fn get_label_id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    /// The label registered under `id`.
    ///
    /// # Errors
    ///
    /// `CorpusError::UnknownLabelId` if `id` was never assigned.
    pub fn get_label_name(&self, id: usize) -> Result<&str> {
        self.names
            .get(id)
            .map(String::as_str)
            .ok_or(CorpusError::UnknownLabelId {
                id,
                size: self.names.len(),
            })
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Same as [`LabelDictionary::len`].
    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// `(id, label)` pairs in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.names.iter().map(String::as_str).enumerate()
    }

    /// Write the dictionary as `id<TAB>label` lines, in id order.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, |out| {
            for (id, label) in self.iter() {
                writeln!(out, "{id}\t{}", escape_label(label))?;
            }
            Ok(())
        })
    }

    /// Read a dictionary written by [`LabelDictionary::save`].
    ///
    /// Lines are consumed in file order. Ids must run 0, 1, 2, … and labels
    /// must be distinct; anything else is reported as a malformed record.
    pub fn load(path: &Path) -> Result<Self> {
        let mut src = LineSource::open_utf8(path)?;
        let mut dict = Self::new();
        while let Some(line) = src.next_line()? {
            let (id, label) = line
                .split_once('\t')
                .ok_or_else(|| src.malformed("expected `id<TAB>label`"))?;
            let id: usize = id
                .trim()
                .parse()
                .map_err(|_| src.malformed(format!("invalid label id {id:?}")))?;
            if id != dict.len() {
                return Err(src.malformed(format!(
                    "label id {id} out of sequence, expected {}",
                    dict.len()
                )));
            }
            let label = unescape_label(label)
                .ok_or_else(|| src.malformed(format!("bad escape in label {label:?}")))?;
            if dict.contains(&label) {
                return Err(src.malformed(format!("duplicate label {label:?}")));
            }
            dict.add(&label);
        }
        Ok(dict)
    }
}

fn escape_label(label: &str) -> Cow<'_, str> {
    if !label.contains(['\\', '\n', '\r']) {
        return Cow::Borrowed(label);
    }
    let mut out = String::with_capacity(label.len() + 2);
    for c in label.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Inverse of `escape_label`; `None` on a dangling or unknown escape.
fn unescape_label(text: &str) -> Option<String> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next()? {
            '\\' => out.push('\\'),
            'n' => out.push('\n'),
            'r' => out.push('\r'),
            _ => return None,
        }
    }
    Some(out)
}
