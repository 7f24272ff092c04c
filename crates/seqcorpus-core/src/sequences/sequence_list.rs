//! # Sequence List
//!
//! Ordered collection of [`Sequence`]s interpreted through a shared word
//! dictionary and a shared tag dictionary. Adding a sequence registers any
//! unseen symbol first, so the dictionaries always cover every id stored in
//! the list.

use std::io::Write;
use std::ops::Index;
use std::path::Path;

use super::sequence::Sequence;
use super::shared::SharedDictionary;
use crate::error::{CorpusError, Result};
use crate::readers::source::{write_file, LineSource};

/// Sequences plus the dictionaries that give their ids meaning.
#[derive(Debug, Clone)]
pub struct SequenceList {
    word_dict: SharedDictionary,
    tag_dict: SharedDictionary,
    seq_list: Vec<Sequence>,
}

impl SequenceList {
    /// Create an empty list over the given dictionary handles.
    pub fn new(word_dict: SharedDictionary, tag_dict: SharedDictionary) -> Self {
        Self {
            word_dict,
            tag_dict,
            seq_list: Vec::new(),
        }
    }

    pub fn word_dict(&self) -> &SharedDictionary {
        &self.word_dict
    }

    pub fn tag_dict(&self) -> &SharedDictionary {
        &self.tag_dict
    }

    /// Register the tokens and tags of one sentence and append it.
    ///
    /// Unseen tokens and tags grow the shared dictionaries; the growth is
    /// visible to every other holder of the handles.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` or `EmptySequence`; nothing is registered in that case.
    pub fn add_sequence<S: AsRef<str>>(&mut self, x_tokens: &[S], y_tags: &[S]) -> Result<()> {
        if x_tokens.len() != y_tags.len() {
            return Err(CorpusError::LengthMismatch {
                observations: x_tokens.len(),
                labels: y_tags.len(),
            });
        }
        if x_tokens.is_empty() {
            return Err(CorpusError::EmptySequence);
        }

        let x_ids = x_tokens
            .iter()
            .map(|x| self.word_dict.add(x.as_ref()))
            .collect();
        let y_ids = y_tags
            .iter()
            .map(|y| self.tag_dict.add(y.as_ref()))
            .collect();
        self.seq_list.push(Sequence::new(x_ids, y_ids)?);
        Ok(())
    }

    /// Append an already id-encoded sentence.
    ///
    /// # Errors
    ///
    /// `UnknownLabelId` if any id is not assigned in the matching dictionary.
    pub fn add_encoded(&mut self, x_ids: Vec<usize>, y_ids: Vec<usize>) -> Result<()> {
        check_ids(&self.word_dict, &x_ids)?;
        check_ids(&self.tag_dict, &y_ids)?;
        self.seq_list.push(Sequence::new(x_ids, y_ids)?);
        Ok(())
    }

    /// Append an existing sequence, after checking its ids resolve here.
    pub fn push(&mut self, seq: Sequence) -> Result<()> {
        check_ids(&self.word_dict, seq.observations())?;
        check_ids(&self.tag_dict, seq.labels())?;
        self.seq_list.push(seq);
        Ok(())
    }

    /// Number of sequences.
    pub fn len(&self) -> usize {
        self.seq_list.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq_list.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sequence> {
        self.seq_list.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.seq_list.iter()
    }

    /// Total number of tokens across all sequences.
    pub fn num_tokens(&self) -> usize {
        self.seq_list.iter().map(Sequence::len).sum()
    }

    /// Write one line per sequence: `word_id:tag_id` pairs separated by tabs.
    pub fn save(&self, path: &Path) -> Result<()> {
        write_file(path, |out| {
            for seq in &self.seq_list {
                let line = seq
                    .pairs()
                    .map(|(x, y)| format!("{x}:{y}"))
                    .collect::<Vec<_>>()
                    .join("\t");
                writeln!(out, "{line}")?;
            }
            Ok(())
        })
    }

    /// Append the sequences stored by [`SequenceList::save`].
    ///
    /// The dictionaries must already hold the ids the file refers to, so load
    /// them first; a stale dictionary surfaces as `UnknownLabelId`.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let mut src = LineSource::open_utf8(path)?;
        while let Some(line) = src.next_line()? {
            let mut x_ids = Vec::new();
            let mut y_ids = Vec::new();
            for entry in line.split('\t') {
                let (x, y) = entry
                    .split_once(':')
                    .ok_or_else(|| src.malformed(format!("expected `word:tag`, found {entry:?}")))?;
                let parse = |s: &str| {
                    s.parse::<usize>()
                        .map_err(|_| src.malformed(format!("invalid id {s:?}")))
                };
                x_ids.push(parse(x)?);
                y_ids.push(parse(y)?);
            }
            self.add_encoded(x_ids, y_ids)?;
        }
        Ok(())
    }
}

fn check_ids(dict: &SharedDictionary, ids: &[usize]) -> Result<()> {
    let size = dict.len();
    match ids.iter().find(|&&id| id >= size) {
        Some(&id) => Err(CorpusError::UnknownLabelId { id, size }),
        None => Ok(()),
    }
}

impl Index<usize> for SequenceList {
    type Output = Sequence;

    fn index(&self, index: usize) -> &Sequence {
        &self.seq_list[index]
    }
}

impl<'a> IntoIterator for &'a SequenceList {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.seq_list.iter()
    }
}
