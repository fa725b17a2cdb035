use crate::{init_logging, LogArgs};
use anyhow::{Context, Result};
use clap::Parser;
use rcsum_vocab::Vocabularies;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "build_vocabularies")]
#[command(about = "Count document and summary vocabularies of a dataset split", long_about = None)]
#[command(version)]
pub struct VocabArgs {
    /// Split directory containing documents/ and references/
    pub input_dir: PathBuf,

    /// Where the *_vocabulary.txt files are written
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

pub fn main_entry() -> Result<()> {
    let args = VocabArgs::parse();
    init_logging(args.log);

    let vocabularies = Vocabularies::extract(&args.input_dir)
        .with_context(|| format!("Failed to read {}", args.input_dir.display()))?;
    log::info!(
        "{} document tokens, {} summary tokens, {} total",
        vocabularies.document.len(),
        vocabularies.summary.len(),
        vocabularies.full.len()
    );
    vocabularies
        .write(&args.output_dir)
        .with_context(|| format!("Failed to write {}", args.output_dir.display()))?;
    Ok(())
}
