//! # seqcorpus core
//!
//! Ingestion side of sequence labeling: bidirectional label dictionaries,
//! id-encoded sentences, sequence lists sharing a growing vocabulary, and
//! readers for three tabular annotation formats (CoNLL-X, CoNLL-2002 and a
//! `token<TAB>tag` variant). Taggers that train on the produced sequence
//! lists live elsewhere.
//!
//! ## Quick Start
//!
//! ```rust
//! use seqcorpus_core::{SequenceList, SharedDictionary, Translation};
//!
//! let words = SharedDictionary::default();
//! let tags = SharedDictionary::default();
//! let mut list = SequenceList::new(words.clone(), tags.clone());
//!
//! list.add_sequence(&["The", "dog", "barks"], &["det", "noun", "verb"]).unwrap();
//!
//! assert_eq!(words.len(), 3);
//! assert_eq!(list[0].to_string(), "0/0 1/1 2/2");
//! assert_eq!(
//!     list[0].to_words(&list, Translation::Full).unwrap(),
//!     "The/det dog/noun barks/verb"
//! );
//! ```
pub mod corpus;
pub mod error;
pub mod readers;
pub mod sequences;

// Re-export primary API
pub use corpus::{ReadOutcome, TaggedCorpus};
pub use error::{CorpusError, Result};
pub use readers::{
    read_conll, read_conll2002, read_tsv, Conll2002Options, ConllOptions, ReadReport, TagMapping,
    FALLBACK_TAG,
};
pub use sequences::{
    LabelDictionary, Sequence, SequenceList, SharedDictionary, Translation, WordCounts,
};
