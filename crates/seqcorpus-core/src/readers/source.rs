//! Line sources for corpus and persistence files.
//!
//! Lines are handed out with their terminator (`\n` or `\r\n`) removed and
//! with a 1-based line counter so parse failures can point at the record.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::error::{CorpusError, Result};

/// Character encoding of a text source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// UTF-8; invalid sequences are reported as malformed records.
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

/// A line-oriented reader over one file.
///
/// Owns the underlying handle, so the file is closed whenever the source is
/// dropped, including when a reader stops early.
pub struct LineSource {
    reader: Box<dyn BufRead>,
    path: PathBuf,
    encoding: Encoding,
    line: usize,
    buf: Vec<u8>,
}

impl LineSource {
    /// Wrap an already opened reader.
    pub fn new(reader: Box<dyn BufRead>, path: impl Into<PathBuf>, encoding: Encoding) -> Self {
        Self {
            reader,
            path: path.into(),
            encoding,
            line: 0,
            buf: Vec::new(),
        }
    }

    /// Open a UTF-8 file. Paths ending in `gz` are read through a gzip decoder.
    pub fn open_utf8(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        let gzipped = path.to_string_lossy().ends_with("gz");
        let reader: Box<dyn BufRead> = if gzipped {
            Box::new(BufReader::new(GzDecoder::new(file)))
        } else {
            Box::new(BufReader::new(file))
        };
        Ok(Self::new(reader, path, Encoding::Utf8))
    }

    /// Open a Latin-1 encoded file.
    pub fn open_latin1(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| CorpusError::io(path, e))?;
        Ok(Self::new(Box::new(BufReader::new(file)), path, Encoding::Latin1))
    }

    /// Number of lines handed out so far; also the number of the last line.
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Read the next line, without its terminator. `None` at end of file.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        let n = self
            .reader
            .read_until(b'\n', &mut self.buf)
            .map_err(|e| CorpusError::io(&self.path, e))?;
        if n == 0 {
            return Ok(None);
        }
        self.line += 1;

        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
            if self.buf.last() == Some(&b'\r') {
                self.buf.pop();
            }
        }

        let text = match self.encoding {
            Encoding::Utf8 => String::from_utf8(std::mem::take(&mut self.buf))
                .map_err(|_| CorpusError::malformed(&self.path, self.line, "invalid UTF-8"))?,
            Encoding::Latin1 => self.buf.iter().map(|&b| char::from(b)).collect(),
        };
        Ok(Some(text))
    }

    /// Shorthand for a malformed-record error at the current line.
    pub fn malformed(&self, reason: impl Into<String>) -> CorpusError {
        CorpusError::malformed(&self.path, self.line, reason)
    }
}

/// Create (or truncate) `path` and fill it through a buffered writer.
pub(crate) fn write_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| CorpusError::io(path, e))?;
    let mut out = BufWriter::new(file);
    fill(&mut out)
        .and_then(|()| out.flush())
        .map_err(|e| CorpusError::io(path, e))
}
