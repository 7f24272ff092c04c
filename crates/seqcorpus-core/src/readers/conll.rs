//! CoNLL-X style reader.
//!
//! One token per line, whitespace separated; the word is field 1 and the
//! fine-grained tag field 4. A line with fewer than two fields ends the
//! sentence. Tags are reduced through a [`TagMapping`].

use std::path::Path;

use tracing::{debug, info};

use super::mapping::TagMapping;
use super::options::ConllOptions;
use super::source::LineSource;
use super::ReadReport;
use crate::error::Result;
use crate::sequences::SequenceList;

const WORD_FIELD: usize = 1;
const TAG_FIELD: usize = 4;

/// Read `path` into `list`.
///
/// Words and reduced tags are registered in the list's dictionaries as they
/// are scanned, including those of sentences later dropped by the length
/// filter. Reading stops as soon as `opts.max_nr_sent` sentences have been
/// accepted. A final sentence not followed by a boundary line is dropped.
///
/// # Errors
///
/// `Io` if the file cannot be read, `MalformedRecord` for a token line with
/// fewer than five fields or invalid UTF-8.
pub fn read_conll(
    path: &Path,
    list: &mut SequenceList,
    mapping: &mut TagMapping,
    opts: &ConllOptions,
) -> Result<ReadReport> {
    let mut src = LineSource::open_utf8(path)?;
    let coalesced_before = mapping.coalesced();
    let mut report = ReadReport::default();

    let mut ex_x: Vec<String> = Vec::new();
    let mut ex_y: Vec<String> = Vec::new();

    while let Some(line) = src.next_line()? {
        let toks: Vec<&str> = line.split_whitespace().collect();
        if toks.len() < 2 {
            if opts.accepts(ex_x.len()) {
                list.add_sequence(ex_x.as_slice(), ex_y.as_slice())?;
                report.sentences_accepted += 1;
            } else if !ex_x.is_empty() {
                debug!(line = src.line_number(), len = ex_x.len(), "sentence rejected by length");
                report.sentences_rejected += 1;
            }
            if report.sentences_accepted >= opts.max_nr_sent {
                break;
            }
            ex_x.clear();
            ex_y.clear();
            continue;
        }

        if toks.len() <= TAG_FIELD {
            return Err(src.malformed(format!(
                "expected at least {} fields, found {}",
                TAG_FIELD + 1,
                toks.len()
            )));
        }
        let word = toks[WORD_FIELD];
        let pos = mapping.resolve(toks[TAG_FIELD]);
        list.word_dict().add(word);
        list.tag_dict().add(&pos);
        ex_x.push(word.to_string());
        ex_y.push(pos);
    }

    if !ex_x.is_empty() && report.sentences_accepted < opts.max_nr_sent {
        debug!(len = ex_x.len(), "dropping sentence without trailing boundary");
        report.sentences_rejected += 1;
    }

    report.lines_read = src.line_number();
    report.unknown_tags_coalesced = mapping.coalesced() - coalesced_before;
    info!(
        path = %path.display(),
        lines = report.lines_read,
        accepted = report.sentences_accepted,
        rejected = report.sentences_rejected,
        coalesced = report.unknown_tags_coalesced,
        "read conll corpus"
    );
    Ok(report)
}
