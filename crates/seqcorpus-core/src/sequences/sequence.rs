//! # Sequence
//!
//! One annotated sentence: parallel arrays of observation ids and label ids.
//! The observation array is reference counted so that hypothesis sequences
//! derived with [`Sequence::with_labels`] share it with the original.

use std::fmt;
use std::rc::Rc;

use super::sequence_list::SequenceList;
use crate::error::{CorpusError, Result};

/// How [`Sequence::to_words`] resolves ids back to names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Translation {
    /// Resolve both observations and labels through the dictionaries.
    #[default]
    Full,
    /// Resolve labels only; observations are printed as raw ids.
    TagsOnly,
}

/// An id-encoded sentence. `observations` and `labels` always have the same,
/// non-zero length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    observations: Rc<[usize]>,
    labels: Vec<usize>,
}

impl Sequence {
    /// Build a sequence from parallel arrays.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` when the arrays differ in length, `EmptySequence`
    /// when both are empty.
    pub fn new(observations: Vec<usize>, labels: Vec<usize>) -> Result<Self> {
        check_lengths(observations.len(), labels.len())?;
        if observations.is_empty() {
            return Err(CorpusError::EmptySequence);
        }
        Ok(Self {
            observations: Rc::from(observations),
            labels,
        })
    }

    /// Token count.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn size(&self) -> usize {
        self.len()
    }

    /// Always false for a constructed sequence; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn observations(&self) -> &[usize] {
        &self.observations
    }

    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// `(observation, label)` pairs in order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.observations
            .iter()
            .copied()
            .zip(self.labels.iter().copied())
    }

    /// Deep copy: the result shares no storage with `self`.
    pub fn copy(&self) -> Self {
        Self {
            observations: Rc::from(self.observations.to_vec()),
            labels: self.labels.clone(),
        }
    }

    /// A new sequence over the same observations with `new_labels` in place
    /// of the current labels.
    ///
    /// # Errors
    ///
    /// `LengthMismatch` if `new_labels` is not as long as the sequence.
    pub fn with_labels(&self, new_labels: Vec<usize>) -> Result<Self> {
        check_lengths(self.observations.len(), new_labels.len())?;
        Ok(Self {
            observations: Rc::clone(&self.observations),
            labels: new_labels,
        })
    }

    /// Whether `self` and `other` use the same observation storage.
    pub fn shares_observations(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.observations, &other.observations)
    }

    /// Render as `word/tag word/tag …`, resolving ids through the
    /// dictionaries of `list`.
    pub fn to_words(&self, list: &SequenceList, translation: Translation) -> Result<String> {
        let words = list.word_dict();
        let tags = list.tag_dict();
        let mut parts = Vec::with_capacity(self.len());
        for (x, y) in self.pairs() {
            let tag = tags.get_label_name(y)?;
            let word = match translation {
                Translation::Full => words.get_label_name(x)?,
                Translation::TagsOnly => x.to_string(),
            };
            parts.push(format!("{word}/{tag}"));
        }
        Ok(parts.join(" "))
    }
}

fn check_lengths(observations: usize, labels: usize) -> Result<()> {
    if observations != labels {
        return Err(CorpusError::LengthMismatch {
            observations,
            labels,
        });
    }
    Ok(())
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.pairs().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{x}/{y}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequences::SharedDictionary;

    #[test]
    fn rejects_length_mismatch() {
        match Sequence::new(vec![0, 1], vec![0]) {
            Err(CorpusError::LengthMismatch {
                observations,
                labels,
            }) => {
                assert_eq!(observations, 2);
                assert_eq!(labels, 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(
            Sequence::new(Vec::new(), Vec::new()),
            Err(CorpusError::EmptySequence)
        ));
    }

    #[test]
    fn copy_is_independent() {
        let original = Sequence::new(vec![3, 4], vec![0, 1]).unwrap();
        let mut copy = original.copy();
        assert_eq!(copy, original);
        assert!(!copy.shares_observations(&original));

        copy.labels[0] = 9;
        assert_eq!(original.labels(), &[0, 1]);
        assert_ne!(copy, original);
    }

    #[test]
    fn with_labels_shares_observations() {
        let original = Sequence::new(vec![3, 4, 5], vec![0, 1, 0]).unwrap();
        let hypothesis = original.with_labels(vec![1, 1, 1]).unwrap();
        assert!(hypothesis.shares_observations(&original));
        assert_eq!(hypothesis.observations(), original.observations());
        assert_eq!(hypothesis.labels(), &[1, 1, 1]);
        assert_eq!(original.labels(), &[0, 1, 0]);
    }

    #[test]
    fn with_labels_rejects_wrong_length() {
        let original = Sequence::new(vec![3, 4, 5], vec![0, 1, 0]).unwrap();
        assert!(matches!(
            original.with_labels(vec![1, 1]),
            Err(CorpusError::LengthMismatch {
                observations: 3,
                labels: 2
            })
        ));
        assert_eq!(original.observations(), &[3, 4, 5]);
    }

    #[test]
    fn display_uses_raw_ids() {
        let seq = Sequence::new(vec![3, 4], vec![0, 1]).unwrap();
        assert_eq!(seq.to_string(), "3/0 4/1");
    }

    #[test]
    fn to_words_resolves_names() {
        let words = SharedDictionary::default();
        let tags = SharedDictionary::default();
        let mut list = SequenceList::new(words, tags);
        list.add_sequence(&["The", "dog"], &["det", "noun"]).unwrap();
        let seq = &list[0];

        assert_eq!(
            seq.to_words(&list, Translation::Full).unwrap(),
            "The/det dog/noun"
        );
        assert_eq!(
            seq.to_words(&list, Translation::TagsOnly).unwrap(),
            "0/det 1/noun"
        );
    }

    #[test]
    fn to_words_fails_on_foreign_ids() {
        let list = SequenceList::new(SharedDictionary::default(), SharedDictionary::default());
        let seq = Sequence::new(vec![0], vec![0]).unwrap();
        assert!(matches!(
            seq.to_words(&list, Translation::Full),
            Err(CorpusError::UnknownLabelId { id: 0, size: 0 })
        ));
    }
}
