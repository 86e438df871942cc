//! CLI commands and arguments.
//!
//! Two subcommands: `analyze` cleans a single text and prints its corpus
//! statistics; `docs` parses a tagged-line document corpus and prints
//! per-category summaries. Clap types stay in this module — the library
//! never sees them.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args, Parser, Subcommand};
use serde::Serialize;

use gutenstats::document::corpus::Corpus;
use gutenstats::nlp::Tokenizer;
use gutenstats::pipeline::NoopObserver;
use gutenstats::stats::FreqEntry;
use gutenstats::{PipelineBuilder, StatsOptions, TextSource};

/// Clean Gutenberg-style texts and report corpus statistics.
#[derive(Parser, Debug)]
#[command(name = "gutenstats", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// The two top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clean a text and print descriptive statistics
    Analyze(AnalyzeArgs),

    /// Parse a tagged-line document corpus and print summaries
    Docs(DocsArgs),
}

/// Arguments for the `analyze` command. Exactly one input source is
/// required.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["text", "file", "url"])))]
pub struct AnalyzeArgs {
    /// Literal text to analyze
    #[arg(long)]
    pub text: Option<String>,

    /// Path of a plain-text file to analyze
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// URL to download the text from, e.g.
    /// https://www.gutenberg.org/files/84/84-0.txt
    #[arg(long)]
    pub url: Option<String>,

    /// Stopword language (en, de, fr, es, it, pt, nl, ru)
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Rows shown in each frequency table
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Fit an n-gram model of this order and report its cross-entropy
    #[arg(long)]
    pub ngram: Option<usize>,

    /// Add-k smoothing constant for the n-gram model
    #[arg(long, default_value_t = 0.0)]
    pub smoothing: f64,

    /// Keep stopwords in the token stream
    #[arg(long)]
    pub keep_stopwords: bool,

    /// Skip the chapter-heading heuristics
    #[arg(long)]
    pub no_chapter_removal: bool,

    /// Emit the report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `docs` command.
#[derive(Args, Debug)]
pub struct DocsArgs {
    /// Path of the tagged-line corpus file
    #[arg(long)]
    pub file: PathBuf,

    /// Rows shown in the word frequency table
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Dispatch to the selected subcommand.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Analyze(args) => run_analyze(args),
            Commands::Docs(args) => run_docs(args),
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let source = if let Some(text) = args.text {
        TextSource::Inline(text)
    } else if let Some(path) = args.file {
        TextSource::File(path)
    } else if let Some(url) = args.url {
        TextSource::Url(url)
    } else {
        // clap's ArgGroup guarantees one source is present.
        unreachable!("clap enforces exactly one input source");
    };

    let mut builder = PipelineBuilder::new().language(&args.language).stats(StatsOptions {
        top: args.top,
        ngram: args.ngram.map(|order| (order, args.smoothing)),
    });
    if args.keep_stopwords {
        builder = builder.keep_stopwords();
    }
    if args.no_chapter_removal {
        builder = builder.skip_chapter_removal();
    }
    let pipeline = builder.build();

    let text = source.fetch()?;
    let report = pipeline.run(&text, &mut NoopObserver)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}

/// JSON shape of the `docs` summary.
#[derive(Debug, Serialize)]
struct DocsSummary {
    documents: usize,
    skipped: usize,
    subject_only: usize,
    word_total: usize,
    /// (category, document count), most populous first.
    categories: Vec<(String, usize)>,
    top_words: Vec<FreqEntry>,
}

fn run_docs(args: DocsArgs) -> Result<()> {
    let corpus = Corpus::load(&args.file, &Tokenizer::new())?;

    let mut categories: Vec<(String, usize)> = corpus.category_counts().into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let summary = DocsSummary {
        documents: corpus.len(),
        skipped: corpus.skipped,
        subject_only: corpus
            .documents
            .iter()
            .filter(|d| d.has_only_subject())
            .count(),
        word_total: corpus.word_total(),
        categories,
        top_words: corpus
            .word_freq()
            .most_common(args.top)
            .into_iter()
            .map(|(word, count)| FreqEntry {
                sample: word.clone(),
                count,
            })
            .collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Documents:    {}", summary.documents);
    println!("Skipped:      {}", summary.skipped);
    println!("Subject-only: {}", summary.subject_only);
    println!("Words:        {}", summary.word_total);
    println!("Categories:");
    for (category, count) in &summary.categories {
        println!("  {category:<20} {count}");
    }
    println!("Top words:");
    for entry in &summary.top_words {
        println!("  {:<20} {}", entry.sample, entry.count);
    }
    Ok(())
}
