//! Tag reduction table used by the CoNLL-X reader.
//!
//! Fine-grained treebank tags are rewritten to a reduced tag set. Tags with
//! no entry are coalesced into [`FALLBACK_TAG`]; the table remembers the
//! substitution so later occurrences resolve the same way without being
//! reported again.

use std::collections::HashMap;
use std::path::Path;

use tracing::warn;

use super::source::LineSource;
use crate::error::Result;

/// Tag assigned to anything the table does not know.
pub const FALLBACK_TAG: &str = "noun";

/// Lower-cased `source → reduced` tag table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagMapping {
    table: HashMap<String, String>,
    coalesced: Vec<String>,
}

impl TagMapping {
    /// A table with no entries: every tag falls back to [`FALLBACK_TAG`].
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table from `(source, reduced)` pairs. Both sides are lower-cased.
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let table = pairs
            .into_iter()
            .map(|(a, b)| (a.as_ref().to_lowercase(), b.as_ref().to_lowercase()))
            .collect();
        Self {
            table,
            coalesced: Vec::new(),
        }
    }

    /// Read a two-column `source<TAB>reduced` file.
    ///
    /// Blank lines are skipped; any other line must have exactly two
    /// tab-separated fields.
    ///
    /// # Errors
    ///
    /// `Io` when the file cannot be opened (including not found),
    /// `MalformedRecord` for a line of the wrong shape.
    pub fn load(path: &Path) -> Result<Self> {
        let mut src = LineSource::open_utf8(path)?;
        let mut table = HashMap::new();
        while let Some(line) = src.next_line()? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split('\t').collect();
            let [source, reduced] = fields.as_slice() else {
                return Err(src.malformed(format!(
                    "expected 2 tab-separated fields, found {}",
                    fields.len()
                )));
            };
            table.insert(source.to_lowercase(), reduced.to_lowercase());
        }
        Ok(Self {
            table,
            coalesced: Vec::new(),
        })
    }

    /// Reduce `raw` (case-insensitive).
    ///
    /// An unknown tag is mapped to [`FALLBACK_TAG`], recorded in the table and
    /// reported once.
    pub fn resolve(&mut self, raw: &str) -> String {
        let tag = raw.to_lowercase();
        if let Some(reduced) = self.table.get(&tag) {
            return reduced.clone();
        }
        warn!(tag = %tag, fallback = FALLBACK_TAG, "unknown tag coalesced");
        self.table.insert(tag.clone(), FALLBACK_TAG.to_string());
        self.coalesced.push(tag);
        FALLBACK_TAG.to_string()
    }

    /// The reduced tag for `tag`, without recording anything.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.table.get(tag).map(String::as_str)
    }

    /// Number of distinct tags coalesced so far.
    pub fn coalesced(&self) -> usize {
        self.coalesced.len()
    }

    /// Distinct coalesced tags, in the order they were first met.
    pub fn coalesced_tags(&self) -> &[String] {
        &self.coalesced
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorpusError;

    #[test]
    fn unknown_tag_is_coalesced_once() {
        let mut mapping = TagMapping::from_pairs([("nn", "noun")]);
        assert_eq!(mapping.resolve("NN"), "noun");
        assert_eq!(mapping.coalesced(), 0);

        assert_eq!(mapping.resolve("xx"), "noun");
        assert_eq!(mapping.get("xx"), Some("noun"));
        assert_eq!(mapping.coalesced(), 1);

        assert_eq!(mapping.resolve("XX"), "noun");
        assert_eq!(mapping.coalesced(), 1);
        assert_eq!(mapping.coalesced_tags(), &["xx".to_string()]);
    }

    #[test]
    fn load_lowercases_both_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("en-ptb.map");
        std::fs::write(&path, "NN\tNOUN\nVBZ\tVERB\n\n").unwrap();

        let mut mapping = TagMapping::load(&path).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.resolve("vbz"), "verb");
    }

    #[test]
    fn load_rejects_extra_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.map");
        std::fs::write(&path, "NN\tNOUN\nJJ\tADJ\textra\n").unwrap();
        assert!(matches!(
            TagMapping::load(&path),
            Err(CorpusError::MalformedRecord { line: 2, .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        match TagMapping::load(Path::new("/nonexistent/en-ptb.map")) {
            Err(CorpusError::Io { source, .. }) => {
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
