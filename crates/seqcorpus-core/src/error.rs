use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading, building or persisting a corpus.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A corpus, mapping or persistence file could not be opened or read.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line did not have the shape the active format requires.
    #[error("malformed record at {}:{line}: {reason}", path.display())]
    MalformedRecord {
        /// The file containing the record.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        reason: String,
    },

    /// A label id was never assigned by the dictionary it was looked up in.
    ///
    /// Usually means a sequence list is being interpreted against
    /// dictionaries saved at a different time.
    #[error("label id {id} is not assigned (dictionary holds {size} labels)")]
    UnknownLabelId {
        /// The requested id.
        id: usize,
        /// Number of labels in the dictionary at lookup time.
        size: usize,
    },

    /// Observation and label arrays of a sequence differ in length.
    #[error("sequence has {observations} observations but {labels} labels")]
    LengthMismatch {
        /// Number of observations.
        observations: usize,
        /// Number of labels.
        labels: usize,
    },

    /// A sequence must hold at least one token.
    #[error("sequence is empty")]
    EmptySequence,

    /// A sequence list built over other dictionaries was handed to a corpus.
    #[error("sequence list does not share the corpus dictionaries")]
    ForeignDictionaries,
}

impl CorpusError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CorpusError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(
        path: impl Into<PathBuf>,
        line: usize,
        reason: impl Into<String>,
    ) -> Self {
        CorpusError::MalformedRecord {
            path: path.into(),
            line,
            reason: reason.into(),
        }
    }
}

/// Result type alias for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = CorpusError::malformed("train.conll", 12, "expected at least 5 fields, found 3");
        assert_eq!(
            err.to_string(),
            "malformed record at train.conll:12: expected at least 5 fields, found 3"
        );

        let err = CorpusError::UnknownLabelId { id: 7, size: 3 };
        assert!(err.to_string().contains("label id 7"));

        let err = CorpusError::LengthMismatch {
            observations: 2,
            labels: 3,
        };
        assert!(err.to_string().contains("2 observations but 3 labels"));
    }

    #[test]
    fn io_error_keeps_source() {
        let err = CorpusError::io(
            "missing.map",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        match err {
            CorpusError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("missing.map"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CorpusError>();
    }
}
