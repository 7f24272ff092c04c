//! Reader for the bespoke `token<TAB>tag` corpus.
//!
//! Latin-1 text with exactly two tab-separated fields per line. There are no
//! blank-line separators: a line starting with `.`, TAB, `O` (a sentence-final
//! period tagged outside) closes the sentence and belongs to it.
//!
//! Unlike the CoNLL readers this one applies no length filter and no sentence
//! cap.

use std::path::Path;

use tracing::{debug, info};

use super::source::LineSource;
use super::ReadReport;
use crate::error::Result;
use crate::sequences::SequenceList;

/// Prefix of the line that terminates a sentence.
pub const SENTENCE_END: &str = ".\tO";

/// Read `path` into `list`.
///
/// Tokens after the last terminator line are dropped.
///
/// # Errors
///
/// `Io` if the file cannot be read, `MalformedRecord` for a line that does
/// not have exactly two tab-separated fields.
pub fn read_tsv(path: &Path, list: &mut SequenceList) -> Result<ReadReport> {
    let mut src = LineSource::open_latin1(path)?;
    let mut report = ReadReport::default();

    let mut words: Vec<String> = Vec::new();
    let mut tags: Vec<String> = Vec::new();

    while let Some(line) = src.next_line()? {
        let Some((word, tag)) = line.split_once('\t').filter(|(_, tag)| !tag.contains('\t'))
        else {
            return Err(src.malformed(format!(
                "expected `token<TAB>tag`, found {} fields",
                line.split('\t').count()
            )));
        };
        words.push(word.to_string());
        tags.push(tag.to_string());

        if line.starts_with(SENTENCE_END) {
            list.add_sequence(words.as_slice(), tags.as_slice())?;
            report.sentences_accepted += 1;
            words.clear();
            tags.clear();
        }
    }

    if !words.is_empty() {
        debug!(len = words.len(), "dropping tokens after the last sentence terminator");
        report.sentences_rejected += 1;
    }

    report.lines_read = src.line_number();
    info!(
        path = %path.display(),
        lines = report.lines_read,
        accepted = report.sentences_accepted,
        rejected = report.sentences_rejected,
        "read tsv corpus"
    );
    Ok(report)
}
