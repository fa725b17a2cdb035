//! Command-line entry points for rcsum.
//!
//! Each tool is its own binary (`convert_rcdata`, `build_vocabularies`,
//! `query_offset_files`, `compute_rouge`); they share the logging flags below.

use clap::Args;

pub mod command;

/// Logging flags accepted by every binary
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Initialize `env_logger` on stderr; `RUST_LOG` applies unless a flag overrides it.
pub fn init_logging(args: LogArgs) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if args.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if args.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

/// Write `text` plus a newline to stdout; a closed pipe is not an error.
pub fn print_stdout(text: &str) -> anyhow::Result<()> {
    use std::io::{self, Write};

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}
