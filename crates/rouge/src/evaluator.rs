use crate::config::RougeConfig;
use crate::error::{Result, RougeError};
use crate::eval_config::{match_tasks, render_eval_config};
use crate::see::convert_dir;
use std::fs;
use std::path::Path;
use std::process::Command;

fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    let entries = fs::read_dir(dir).map_err(|err| RougeError::io(dir, err))?;
    for entry in entries {
        let entry = entry.map_err(|err| RougeError::io(dir, err))?;
        if entry.path().is_file() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    Ok(names)
}

/// Runs ROUGE-1.5.5 over a directory of system summaries and a directory of references
pub struct RougeEvaluator {
    config: RougeConfig,
}

impl RougeEvaluator {
    pub fn new(config: RougeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RougeConfig {
        &self.config
    }

    /// Convert both directories to SEE format in a scratch directory, write the eval
    /// config, run the script and return its report.
    pub fn evaluate(&self, system_dir: &Path, reference_dir: &Path) -> Result<String> {
        let script = self.config.script_path();
        if !script.is_file() {
            return Err(RougeError::ScriptNotFound(script));
        }

        let scratch = tempfile::Builder::new()
            .prefix("rcsum-rouge")
            .tempdir()
            .map_err(|err| RougeError::io(std::env::temp_dir(), err))?;
        let system_root = scratch.path().join("system");
        let model_root = scratch.path().join("model");
        let systems = convert_dir(system_dir, &system_root)?;
        let models = convert_dir(reference_dir, &model_root)?;
        log::info!("Evaluating {systems} system summaries against {models} references");

        let tasks = match_tasks(
            &list_files(&system_root)?,
            &list_files(&model_root)?,
            &self.config.system_filename_pattern,
            &self.config.model_filename_pattern,
        )?;
        let config_path = scratch.path().join("rouge_conf.xml");
        fs::write(
            &config_path,
            render_eval_config(&system_root, &model_root, &tasks),
        )
        .map_err(|err| RougeError::io(&config_path, err))?;

        let mut command = Command::new(&self.config.perl);
        command
            .arg(&script)
            .args(&self.config.args)
            .arg(&config_path);
        log::debug!("Running {command:?}");

        let output = command
            .output()
            .map_err(|err| RougeError::io(&self.config.perl, err))?;
        if !output.status.success() {
            return Err(RougeError::Failed {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
