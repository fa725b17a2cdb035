use std::path::{Path, PathBuf};

/// Name of the evaluator script inside the ROUGE directory
pub const ROUGE_SCRIPT: &str = "ROUGE-1.5.5.pl";

/// System summaries are named `<doc>.<query>.txt`
pub const SYSTEM_FILENAME_PATTERN: &str = r"(\d+.\d+).txt";

/// References are named `<letter>.<doc>.<query>.txt`; `#ID#` is the system id
pub const MODEL_FILENAME_PATTERN: &str = "[A-Z].#ID#.txt";

/// How to invoke ROUGE-1.5.5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RougeConfig {
    /// Directory containing `ROUGE-1.5.5.pl` and its `data/` folder
    pub rouge_dir: PathBuf,

    /// Perl interpreter
    pub perl: PathBuf,

    /// Evaluator flags (the config file path is appended last)
    pub args: Vec<String>,

    /// Regex over system file names; group 1 is the summary id
    pub system_filename_pattern: String,

    /// Regex over reference file names with `#ID#` standing for the summary id
    pub model_filename_pattern: String,
}

impl RougeConfig {
    /// ROUGE-1..4, ROUGE-L, ROUGE-W-1.2 and ROUGE-SU4 with 95% confidence intervals,
    /// stemming on, stopwords kept.
    pub fn new(rouge_dir: impl AsRef<Path>) -> Self {
        let rouge_dir = rouge_dir.as_ref().to_path_buf();
        let data_dir = rouge_dir.join("data");
        let mut args = vec!["-e".to_string(), data_dir.to_string_lossy().into_owned()];
        args.extend(
            ["-c", "95", "-2", "4", "-U", "-n", "4", "-w", "1.2", "-a"]
                .iter()
                .map(|arg| arg.to_string()),
        );

        Self {
            rouge_dir,
            perl: PathBuf::from("perl"),
            args,
            system_filename_pattern: SYSTEM_FILENAME_PATTERN.to_string(),
            model_filename_pattern: MODEL_FILENAME_PATTERN.to_string(),
        }
    }

    pub fn script_path(&self) -> PathBuf {
        self.rouge_dir.join(ROUGE_SCRIPT)
    }
}
