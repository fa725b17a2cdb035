use crate::{init_logging, print_stdout, LogArgs};
use anyhow::{Context, Result};
use clap::Parser;
use rcsum_rouge::{parse_report, RougeConfig, RougeEvaluator};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compute_rouge")]
#[command(about = "Score system summaries against references with ROUGE-1.5.5", long_about = None)]
#[command(version)]
pub struct RougeArgs {
    /// Directory of system summaries named <doc>.<q>.txt
    pub system_dir: PathBuf,

    /// Directory of references named <L>.<doc>.<q>.txt
    pub reference_dir: PathBuf,

    /// ROUGE-1.5.5 installation (contains ROUGE-1.5.5.pl and data/)
    pub rouge_dir: PathBuf,

    /// Print the parsed scores as JSON instead of the raw report
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub log: LogArgs,
}

pub fn main_entry() -> Result<()> {
    let args = RougeArgs::parse();
    init_logging(args.log);

    let evaluator = RougeEvaluator::new(RougeConfig::new(&args.rouge_dir));
    let report = evaluator
        .evaluate(&args.system_dir, &args.reference_dir)
        .context("ROUGE evaluation failed")?;

    if args.json {
        let scores = parse_report(&report);
        let json = serde_json::to_string_pretty(&scores).context("Failed to encode scores")?;
        print_stdout(&json)
    } else {
        print_stdout(report.trim_end())
    }
}
