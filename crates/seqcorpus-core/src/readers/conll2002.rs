//! CoNLL-2002 named-entity reader.
//!
//! Latin-1 text, one token per line with whitespace-separated fields: word in
//! field 0, entity tag in field 2. An empty line ends the sentence.

use std::path::Path;

use tracing::{debug, info};

use super::options::Conll2002Options;
use super::source::LineSource;
use super::ReadReport;
use crate::error::Result;
use crate::sequences::SequenceList;

const WORD_FIELD: usize = 0;
const TAG_FIELD: usize = 2;

/// Read `path` into `list`.
///
/// Only accepted sentences register their words and tags. A trailing
/// sentence without an empty line after it is dropped.
///
/// # Errors
///
/// `Io` if the file cannot be read, `MalformedRecord` for a non-empty line
/// with fewer than three fields.
pub fn read_conll2002(
    path: &Path,
    list: &mut SequenceList,
    opts: &Conll2002Options,
) -> Result<ReadReport> {
    let mut src = LineSource::open_latin1(path)?;
    let mut report = ReadReport::default();

    let mut words: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();

    while let Some(line) = src.next_line()? {
        if line.is_empty() {
            if opts.accepts(words.len()) {
                list.add_sequence(words.as_slice(), tags.as_slice())?;
                report.sentences_accepted += 1;
            } else if !words.is_empty() {
                debug!(line = src.line_number(), len = words.len(), "sentence rejected by length");
                report.sentences_rejected += 1;
            }
            words.clear();
            tags.clear();
            if report.sentences_accepted >= opts.max_nr_sent {
                break;
            }
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() <= TAG_FIELD {
            return Err(src.malformed(format!(
                "expected at least {} fields, found {}",
                TAG_FIELD + 1,
                fields.len()
            )));
        }
        words.push(fields[WORD_FIELD].to_string());
        tags.push(fields[TAG_FIELD].to_string());
    }

    if !words.is_empty() {
        debug!(len = words.len(), "dropping sentence without trailing empty line");
        report.sentences_rejected += 1;
    }

    report.lines_read = src.line_number();
    info!(
        path = %path.display(),
        lines = report.lines_read,
        accepted = report.sentences_accepted,
        rejected = report.sentences_rejected,
        "read conll2002 corpus"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CorpusError;
    use crate::sequences::{SharedDictionary, Translation};

    fn new_list() -> SequenceList {
        SequenceList::new(SharedDictionary::default(), SharedDictionary::default())
    }

    fn write_latin1(dir: &Path, text: &str) -> std::path::PathBuf {
        let bytes: Vec<u8> = text
            .chars()
            .map(|c| u8::try_from(u32::from(c)).expect("latin-1 fixture"))
            .collect();
        let path = dir.join("esp.train");
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn reads_word_and_entity_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(
            dir.path(),
            "La DA O\nAcademia NC B-ORG\nEspañola AQ I-ORG\n\nEl DA O\nrío NC O\n\n",
        );
        let mut list = new_list();

        let report = read_conll2002(&path, &mut list, &Conll2002Options::default()).unwrap();

        assert_eq!(report.sentences_accepted, 2);
        assert_eq!(
            list[0].to_words(&list, Translation::Full).unwrap(),
            "La/O Academia/B-ORG Española/I-ORG"
        );
        assert_eq!(
            list[1].to_words(&list, Translation::Full).unwrap(),
            "El/O río/O"
        );
    }

    #[test]
    fn min_length_counts_the_blank_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(
            dir.path(),
            "Solo NC O\n\nDos NC O\npalabras NC O\n\nTres NC O\nmás RG O\naquí RG O\n\n",
        );

        let mut list = new_list();
        let report = read_conll2002(&path, &mut list, &Conll2002Options::default()).unwrap();
        assert_eq!(report.sentences_accepted, 2);
        assert_eq!(report.sentences_rejected, 1);
        // Rejected sentences leave the vocabulary untouched.
        assert!(!list.word_dict().contains("Solo"));

        let mut strict = new_list();
        let opts = Conll2002Options::new().with_min_sent_len(4);
        let report = read_conll2002(&path, &mut strict, &opts).unwrap();
        assert_eq!(report.sentences_accepted, 1);
        assert_eq!(strict[0].len(), 3);
    }

    #[test]
    fn number_of_sequences_matches_blank_line_groups() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(
            dir.path(),
            "a X O\nb X O\n\n\n\nc X O\nd X O\ne X O\n\nf X O\n\ng X O\nh X O\n\n",
        );
        let mut list = new_list();

        let report = read_conll2002(&path, &mut list, &Conll2002Options::default()).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(report.sentences_rejected, 1);
        assert_eq!(list.num_tokens(), 7);
    }

    #[test]
    fn stops_at_sentence_cap() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(dir.path(), &"a X O\nb X O\n\n".repeat(5));
        let mut list = new_list();
        let opts = Conll2002Options::new().with_max_nr_sent(2);

        let report = read_conll2002(&path, &mut list, &opts).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(report.lines_read, 6);
    }

    #[test]
    fn unterminated_tail_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(dir.path(), "a X O\nb X O\n\nc X O\nd X O\n");
        let mut list = new_list();

        let report = read_conll2002(&path, &mut list, &Conll2002Options::default()).unwrap();

        assert_eq!(list.len(), 1);
        assert_eq!(report.sentences_rejected, 1);
    }

    #[test]
    fn two_field_line_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_latin1(dir.path(), "a X O\nb X\n\n");
        let mut list = new_list();

        assert!(matches!(
            read_conll2002(&path, &mut list, &Conll2002Options::default()),
            Err(CorpusError::MalformedRecord { line: 2, .. })
        ));
    }
}
