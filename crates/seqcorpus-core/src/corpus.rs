//! # Tagged Corpus
//!
//! Long-lived owner of the word and tag dictionaries. Every read produces a
//! fresh [`SequenceList`] over the same dictionary handles, so several files
//! loaded one after another share one growing vocabulary. The corpus also
//! keeps a primary sequence list, with occurrence counts for the words it
//! holds, that can be saved to and restored from a directory.
//!
//! ```no_run
//! use std::path::Path;
//! use seqcorpus_core::{Conll2002Options, TaggedCorpus};
//!
//! # fn main() -> seqcorpus_core::Result<()> {
//! let mut corpus = TaggedCorpus::new();
//! let train = corpus.read_conll2002(Path::new("esp.train"), &Conll2002Options::default())?;
//! println!("{} sentences, {} words", train.sequences.len(), corpus.word_dict().len());
//! corpus.absorb(&train.sequences)?;
//! corpus.save(Path::new("out/"))?;
//! # Ok(()) }
//! ```

use std::path::Path;

use tracing::info;

use crate::error::{CorpusError, Result};
use crate::readers::{self, Conll2002Options, ConllOptions, ReadReport, TagMapping};
use crate::sequences::{LabelDictionary, SequenceList, SharedDictionary, WordCounts};

/// File names used by [`TaggedCorpus::save`] and [`TaggedCorpus::load`].
pub const WORD_DICT_FILE: &str = "word.dic";
pub const TAG_DICT_FILE: &str = "tag.dic";
pub const WORD_COUNT_FILE: &str = "word.count";
pub const SEQUENCE_LIST_FILE: &str = "sequence_list";

/// The sequences produced by one read, and what the reader saw.
#[derive(Debug, Clone)]
pub struct ReadOutcome {
    pub sequences: SequenceList,
    pub report: ReadReport,
}

/// Dictionaries, word counts and a primary sequence list.
#[derive(Debug)]
pub struct TaggedCorpus {
    word_dict: SharedDictionary,
    tag_dict: SharedDictionary,
    word_counts: WordCounts,
    sequence_list: SequenceList,
}

impl Default for TaggedCorpus {
    fn default() -> Self {
        Self::new()
    }
}

impl TaggedCorpus {
    /// An empty corpus.
    pub fn new() -> Self {
        Self::with_dictionaries(LabelDictionary::new(), LabelDictionary::new())
    }

    /// A corpus starting from existing dictionaries, e.g. a tag set seeded
    /// with a default tag at id 0.
    pub fn with_dictionaries(words: LabelDictionary, tags: LabelDictionary) -> Self {
        let word_dict = SharedDictionary::new(words);
        let tag_dict = SharedDictionary::new(tags);
        let sequence_list = SequenceList::new(word_dict.clone(), tag_dict.clone());
        Self {
            word_dict,
            tag_dict,
            word_counts: WordCounts::new(),
            sequence_list,
        }
    }

    pub fn word_dict(&self) -> &SharedDictionary {
        &self.word_dict
    }

    pub fn tag_dict(&self) -> &SharedDictionary {
        &self.tag_dict
    }

    pub fn word_counts(&self) -> &WordCounts {
        &self.word_counts
    }

    /// The primary list persisted by [`TaggedCorpus::save`].
    pub fn sequence_list(&self) -> &SequenceList {
        &self.sequence_list
    }

    /// An empty list over this corpus's dictionaries.
    pub fn new_sequence_list(&self) -> SequenceList {
        SequenceList::new(self.word_dict.clone(), self.tag_dict.clone())
    }

    /// Read a CoNLL-X file, reducing tags through `mapping`.
    pub fn read_conll(
        &mut self,
        path: &Path,
        mapping: &mut TagMapping,
        opts: &ConllOptions,
    ) -> Result<ReadOutcome> {
        let mut sequences = self.new_sequence_list();
        let report = readers::read_conll(path, &mut sequences, mapping, opts)?;
        Ok(ReadOutcome { sequences, report })
    }

    /// Read a CoNLL-X file, loading the tag mapping from `mapping_file`.
    /// Without a mapping file every tag falls back to the default tag.
    pub fn read_conll_with_mapping_file(
        &mut self,
        path: &Path,
        mapping_file: Option<&Path>,
        opts: &ConllOptions,
    ) -> Result<ReadOutcome> {
        let mut mapping = match mapping_file {
            Some(file) => TagMapping::load(file)?,
            None => TagMapping::empty(),
        };
        self.read_conll(path, &mut mapping, opts)
    }

    /// Read a CoNLL-2002 file.
    pub fn read_conll2002(&mut self, path: &Path, opts: &Conll2002Options) -> Result<ReadOutcome> {
        let mut sequences = self.new_sequence_list();
        let report = readers::read_conll2002(path, &mut sequences, opts)?;
        Ok(ReadOutcome { sequences, report })
    }

    /// Read a `token<TAB>tag` file.
    pub fn read_tsv(&mut self, path: &Path) -> Result<ReadOutcome> {
        let mut sequences = self.new_sequence_list();
        let report = readers::read_tsv(path, &mut sequences)?;
        Ok(ReadOutcome { sequences, report })
    }

    /// Append the sequences of `list` to the primary list and count their
    /// words.
    ///
    /// # Errors
    ///
    /// `ForeignDictionaries` unless `list` was built over this corpus's
    /// dictionary handles.
    pub fn absorb(&mut self, list: &SequenceList) -> Result<()> {
        if !list.word_dict().same_as(&self.word_dict) || !list.tag_dict().same_as(&self.tag_dict)
        {
            return Err(CorpusError::ForeignDictionaries);
        }
        for seq in list {
            self.sequence_list.push(seq.clone())?;
            self.word_counts.record_sequence(seq);
        }
        Ok(())
    }

    /// Write dictionaries, word counts and the primary list under `dir`,
    /// creating the directory if needed.
    pub fn save(&self, dir: &Path) -> Result<()> {
        std::fs::create_dir_all(dir).map_err(|e| CorpusError::io(dir, e))?;
        self.word_dict.with(|d| d.save(&dir.join(WORD_DICT_FILE)))?;
        self.tag_dict.with(|d| d.save(&dir.join(TAG_DICT_FILE)))?;
        self.word_counts.save(&dir.join(WORD_COUNT_FILE))?;
        self.sequence_list.save(&dir.join(SEQUENCE_LIST_FILE))?;
        info!(
            dir = %dir.display(),
            words = self.word_dict.len(),
            tags = self.tag_dict.len(),
            sequences = self.sequence_list.len(),
            "saved corpus"
        );
        Ok(())
    }

    /// Restore a corpus written by [`TaggedCorpus::save`].
    ///
    /// Dictionaries are read before the sequence list so its ids resolve.
    pub fn load(dir: &Path) -> Result<Self> {
        let words = LabelDictionary::load(&dir.join(WORD_DICT_FILE))?;
        let tags = LabelDictionary::load(&dir.join(TAG_DICT_FILE))?;
        let mut corpus = Self::with_dictionaries(words, tags);
        corpus.word_counts = WordCounts::load(&dir.join(WORD_COUNT_FILE))?;
        corpus.sequence_list.load(&dir.join(SEQUENCE_LIST_FILE))?;
        info!(
            dir = %dir.display(),
            words = corpus.word_dict.len(),
            tags = corpus.tag_dict.len(),
            sequences = corpus.sequence_list.len(),
            "loaded corpus"
        );
        Ok(corpus)
    }
}
