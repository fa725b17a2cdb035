use crate::{init_logging, LogArgs};
use anyhow::{Context, Result};
use clap::Parser;
use rcsum_corpus::{offset_query_files, DEFAULT_OFFSET_DIR};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "query_offset_files")]
#[command(
    about = "Copy <doc>.<q>.<rest> files with each query id rotated to the next query of the same document",
    long_about = None
)]
#[command(version)]
pub struct OffsetArgs {
    /// Directory of <doc>.<q>.<rest> files
    pub source_dir: PathBuf,

    #[arg(long = "out_dir", default_value = DEFAULT_OFFSET_DIR)]
    pub out_dir: PathBuf,

    #[command(flatten)]
    pub log: LogArgs,
}

pub fn main_entry() -> Result<()> {
    let args = OffsetArgs::parse();
    init_logging(args.log);

    offset_query_files(&args.source_dir, &args.out_dir).with_context(|| {
        format!(
            "Failed to offset {} into {}",
            args.source_dir.display(),
            args.out_dir.display()
        )
    })?;
    Ok(())
}
