//! # rcsum Rouge
//!
//! Drives the ROUGE-1.5.5 perl script over a directory of system summaries and a
//! directory of reference summaries.
//!
//! ```text
//! system_dir/*.txt ──┐
//!                    ├─> SEE html (scratch dir) ─> rouge_conf.xml ─> perl ROUGE-1.5.5.pl
//! reference_dir/*.txt┘
//! ```
//!
//! References for system summary `<id>.txt` are the files named `[A-Z].<id>.txt`.

mod config;
mod error;
mod eval_config;
mod evaluator;
mod report;
mod see;

pub use config::{RougeConfig, MODEL_FILENAME_PATTERN, ROUGE_SCRIPT, SYSTEM_FILENAME_PATTERN};
pub use error::{Result, RougeError};
pub use eval_config::{match_tasks, render_eval_config, EvalTask};
pub use evaluator::RougeEvaluator;
pub use report::parse_report;
pub use see::{convert_dir, to_see_html};
