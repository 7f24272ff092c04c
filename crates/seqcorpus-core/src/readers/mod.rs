//! # Corpus Readers
//!
//! Parsers for three tabular annotation formats. Each one streams a file,
//! groups lines into sentences, filters them and appends the accepted ones
//! to a [`SequenceList`](crate::sequences::SequenceList).
//!
//! | Reader | Encoding | Token / tag | Sentence end |
//! |---|---|---|---|
//! | [`conll`] | UTF-8, optionally gzip | fields 1 / 4, whitespace split | line with < 2 fields |
//! | [`conll2002`] | Latin-1 | fields 0 / 2, whitespace split | empty line |
//! | [`tsv`] | Latin-1 | `token<TAB>tag` | line starting `.<TAB>O` (inclusive) |

pub mod conll;
pub mod conll2002;
pub mod mapping;
pub mod options;
pub mod source;
pub mod tsv;

use serde::{Deserialize, Serialize};

pub use conll::read_conll;
pub use conll2002::read_conll2002;
pub use mapping::{TagMapping, FALLBACK_TAG};
pub use options::{Conll2002Options, ConllOptions};
pub use source::{Encoding, LineSource};
pub use tsv::read_tsv;

/// What a reader saw while ingesting one file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadReport {
    /// Physical lines consumed; smaller than the file when the count cap hit.
    pub lines_read: usize,
    /// Sentences appended to the sequence list.
    pub sentences_accepted: usize,
    /// Non-empty sentences dropped by length filters or left unterminated.
    pub sentences_rejected: usize,
    /// Distinct unknown tags coalesced into the fallback tag during this read.
    pub unknown_tags_coalesced: usize,
}
