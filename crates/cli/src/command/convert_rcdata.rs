use crate::{init_logging, LogArgs};
use anyhow::{Context, Result};
use clap::Parser;
use rcsum_corpus::{partition, ConvertConfig, CorpusBuilder, DatasetWriter};
use rcsum_text::TreebankTokenizer;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "convert_rcdata")]
#[command(
    about = "Convert a reading-comprehension corpus into a query-focused summarization dataset",
    long_about = None
)]
#[command(version)]
pub struct ConvertArgs {
    /// Directory of `<sha1(url)>.story` files
    pub stories_dir: PathBuf,

    /// Directory searched recursively for `*.question` files
    pub questions_dir: PathBuf,

    /// Output directory (wiped before writing)
    pub output_dir: PathBuf,

    /// Fraction of documents assigned to each of the validation and test splits
    #[arg(long = "validation_test_fraction", default_value_t = 0.015)]
    pub validation_test_fraction: f64,

    /// Also write first_query_sentences/<d>.<q>.txt
    #[arg(long = "save_first_query_sentences")]
    pub save_first_query_sentences: bool,

    /// Also write input_lengths.txt per split
    #[arg(long = "save_document_lengths")]
    pub save_document_lengths: bool,

    /// Also write synthetic_references/A.<d>.<q>.txt
    #[arg(long = "save_synthetic_references")]
    pub save_synthetic_references: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

impl ConvertArgs {
    pub fn config(&self) -> ConvertConfig {
        ConvertConfig {
            validation_test_fraction: self.validation_test_fraction,
            save_first_query_sentences: self.save_first_query_sentences,
            save_document_lengths: self.save_document_lengths,
            save_synthetic_references: self.save_synthetic_references,
        }
    }
}

pub fn main_entry() -> Result<()> {
    let args = ConvertArgs::parse();
    init_logging(args.log);
    run(&args)
}

pub fn run(args: &ConvertArgs) -> Result<()> {
    // Reject a bad fraction before reading the corpus.
    let writer = DatasetWriter::new(args.config()).context("Invalid conversion options")?;

    log::info!("Extracting summarization data...");
    let corpus = CorpusBuilder::new(TreebankTokenizer::new(), &args.stories_dir)
        .build(&args.questions_dir)
        .with_context(|| {
            format!(
                "Failed to extract summaries from {}",
                args.questions_dir.display()
            )
        })?;
    log::info!("Done");

    let splits = partition(corpus.articles, writer.config().validation_test_fraction);

    log::info!("Saving to output directory...");
    let stats = writer
        .write(&splits, &args.output_dir)
        .with_context(|| format!("Failed to write dataset to {}", args.output_dir.display()))?;
    log::info!(
        "Done: {} validation, {} test, {} training documents ({} references)",
        stats.validation.documents,
        stats.test.documents,
        stats.training.documents,
        stats.total_references()
    );
    Ok(())
}
