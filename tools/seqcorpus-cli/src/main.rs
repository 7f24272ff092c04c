//! seqcorpus command line tool
//!
//! Reads a tagged corpus in one of the supported formats and prints a JSON
//! summary, optionally saving the result; or loads a saved corpus and prints
//! its sentences as `word/tag` pairs.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use seqcorpus_core::{
    Conll2002Options, ConllOptions, ReadOutcome, ReadReport, TaggedCorpus, Translation,
};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "seqcorpus")]
#[command(about = "Read, summarize and persist tagged corpora")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log filter directive
    #[arg(long, env = "SEQCORPUS_LOG", default_value = "info", global = true)]
    log: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Read a corpus file and print a JSON summary
    Read {
        /// Input format
        #[arg(value_enum)]
        dialect: Dialect,

        /// Corpus file
        path: PathBuf,

        /// Tag reduction table (`source<TAB>reduced`), conll only
        #[arg(short, long)]
        mapping: Option<PathBuf>,

        /// Minimum buffered lines per sentence, conll2002 only
        #[arg(long)]
        min_sent_len: Option<usize>,

        /// Maximum sentence length
        #[arg(long)]
        max_sent_len: Option<usize>,

        /// Stop after this many accepted sentences
        #[arg(long)]
        max_nr_sent: Option<usize>,

        /// Save the corpus to this directory
        #[arg(short, long)]
        save: Option<PathBuf>,
    },
    /// Print the sentences of a saved corpus
    Show {
        /// Directory written by `read --save`
        dir: PathBuf,

        /// Print at most this many sentences
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Print word ids instead of words
        #[arg(long)]
        tags_only: bool,
    },
}

/// Supported corpus formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Dialect {
    /// CoNLL-X columns, word in field 1, tag in field 4 (UTF-8, .gz allowed)
    Conll,
    /// CoNLL-2002 columns, word in field 0, tag in field 2 (Latin-1)
    Conll2002,
    /// `token<TAB>tag` lines, sentences end at `.<TAB>O` (Latin-1)
    Tsv,
}

/// Reader thresholds as given on the command line.
#[derive(Debug, Clone, Copy, Default)]
struct Thresholds {
    min_sent_len: Option<usize>,
    max_sent_len: Option<usize>,
    max_nr_sent: Option<usize>,
}

impl Thresholds {
    fn conll(&self) -> ConllOptions {
        let mut opts = ConllOptions::new();
        if let Some(n) = self.max_sent_len {
            opts = opts.with_max_sent_len(n);
        }
        if let Some(n) = self.max_nr_sent {
            opts = opts.with_max_nr_sent(n);
        }
        opts
    }

    fn conll2002(&self) -> Conll2002Options {
        let mut opts = Conll2002Options::new();
        if let Some(n) = self.min_sent_len {
            opts = opts.with_min_sent_len(n);
        }
        if let Some(n) = self.max_sent_len {
            opts = opts.with_max_sent_len(n);
        }
        if let Some(n) = self.max_nr_sent {
            opts = opts.with_max_nr_sent(n);
        }
        opts
    }

    fn any(&self) -> bool {
        self.min_sent_len.is_some() || self.max_sent_len.is_some() || self.max_nr_sent.is_some()
    }
}

/// JSON summary printed by `read`.
#[derive(Debug, Serialize)]
struct Summary {
    dialect: Dialect,
    path: PathBuf,
    #[serde(flatten)]
    report: ReadReport,
    sequences: usize,
    tokens: usize,
    words: usize,
    tags: usize,
}

fn read_corpus(
    corpus: &mut TaggedCorpus,
    dialect: Dialect,
    path: &Path,
    mapping: Option<&Path>,
    thresholds: Thresholds,
) -> Result<ReadOutcome> {
    if dialect != Dialect::Conll && mapping.is_some() {
        warn!(?dialect, "--mapping only applies to conll, ignored");
    }
    if dialect != Dialect::Conll2002 && thresholds.min_sent_len.is_some() {
        warn!(?dialect, "--min-sent-len only applies to conll2002, ignored");
    }
    if dialect == Dialect::Tsv && thresholds.any() {
        warn!("tsv sentences are not filtered, thresholds ignored");
    }

    let outcome = match dialect {
        Dialect::Conll => {
            corpus.read_conll_with_mapping_file(path, mapping, &thresholds.conll())
        }
        Dialect::Conll2002 => corpus.read_conll2002(path, &thresholds.conll2002()),
        Dialect::Tsv => corpus.read_tsv(path),
    };
    outcome.with_context(|| {
        format!(
            "Failed to read {} corpus {}",
            dialect_name(dialect),
            path.display()
        )
    })
}

fn dialect_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Conll => "conll",
        Dialect::Conll2002 => "conll2002",
        Dialect::Tsv => "tsv",
    }
}

fn summarize(
    corpus: &TaggedCorpus,
    dialect: Dialect,
    path: &Path,
    outcome: &ReadOutcome,
) -> Summary {
    Summary {
        dialect,
        path: path.to_path_buf(),
        report: outcome.report.clone(),
        sequences: outcome.sequences.len(),
        tokens: outcome.sequences.num_tokens(),
        words: corpus.word_dict().len(),
        tags: corpus.tag_dict().len(),
    }
}

fn show(dir: &Path, limit: Option<usize>, tags_only: bool) -> Result<Vec<String>> {
    let corpus = TaggedCorpus::load(dir)
        .with_context(|| format!("Failed to load corpus from {}", dir.display()))?;
    let list = corpus.sequence_list();
    let translation = if tags_only {
        Translation::TagsOnly
    } else {
        Translation::Full
    };
    list.iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|seq| seq.to_words(list, translation).map_err(Into::into))
        .collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&cli.log))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Read {
            dialect,
            path,
            mapping,
            min_sent_len,
            max_sent_len,
            max_nr_sent,
            save,
        } => {
            let thresholds = Thresholds {
                min_sent_len,
                max_sent_len,
                max_nr_sent,
            };
            let mut corpus = TaggedCorpus::new();
            let outcome = read_corpus(&mut corpus, dialect, &path, mapping.as_deref(), thresholds)?;
            let summary = summarize(&corpus, dialect, &path, &outcome);

            if let Some(dir) = save {
                corpus.absorb(&outcome.sequences)?;
                corpus
                    .save(&dir)
                    .with_context(|| format!("Failed to save corpus to {}", dir.display()))?;
                info!(dir = %dir.display(), "corpus saved");
            }

            println!("{}", serde_json::to_string(&summary)?);
        }
        Commands::Show {
            dir,
            limit,
            tags_only,
        } => {
            for line in show(&dir, limit, tags_only)? {
                println!("{line}");
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_read_arguments() {
        let cli = Cli::try_parse_from([
            "seqcorpus",
            "read",
            "conll2002",
            "esp.train",
            "--min-sent-len",
            "1",
            "--save",
            "out",
        ])
        .unwrap();
        match cli.command {
            Commands::Read {
                dialect,
                min_sent_len,
                save,
                ..
            } => {
                assert_eq!(dialect, Dialect::Conll2002);
                assert_eq!(min_sent_len, Some(1));
                assert_eq!(save, Some(PathBuf::from("out")));
            }
            Commands::Show { .. } => panic!("expected read"),
        }
    }

    #[test]
    fn thresholds_override_defaults_only_when_given() {
        let t = Thresholds {
            max_nr_sent: Some(2),
            ..Default::default()
        };
        assert_eq!(t.conll(), ConllOptions::default().with_max_nr_sent(2));
        assert_eq!(t.conll2002().min_sent_len, 3);
        assert!(t.any());
        assert!(!Thresholds::default().any());
    }

    #[test]
    fn read_save_and_show() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("train-BR.tsv");
        std::fs::write(&input, "John\tB-PER\nplays\tO\n.\tO\nMary\tB-PER\n.\tO\n").unwrap();

        let mut corpus = TaggedCorpus::new();
        let outcome =
            read_corpus(&mut corpus, Dialect::Tsv, &input, None, Thresholds::default()).unwrap();
        let summary = summarize(&corpus, Dialect::Tsv, &input, &outcome);
        assert_eq!(summary.sequences, 2);
        assert_eq!(summary.tokens, 5);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["dialect"], "tsv");
        assert_eq!(json["sentences_accepted"], 2);

        let store = dir.path().join("saved");
        corpus.absorb(&outcome.sequences).unwrap();
        corpus.save(&store).unwrap();

        let lines = show(&store, Some(1), false).unwrap();
        assert_eq!(lines, ["John/B-PER plays/O ./O"]);
        let lines = show(&store, None, true).unwrap();
        assert_eq!(lines[1], "3/B-PER 2/O");
    }

    #[test]
    fn read_error_names_the_file() {
        let mut corpus = TaggedCorpus::new();
        let err = read_corpus(
            &mut corpus,
            Dialect::Conll,
            Path::new("/nonexistent/train.conll"),
            None,
            Thresholds::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/train.conll"));
    }
}
