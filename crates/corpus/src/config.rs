use serde::{Deserialize, Serialize};

/// Options for writing the converted dataset
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConvertConfig {
    /// Fraction of articles placed in each of validation and test (rounded up)
    pub validation_test_fraction: f64,

    /// Also write `first_query_sentences/<doc>.<query>.txt`
    pub save_first_query_sentences: bool,

    /// Also write `input_lengths.txt` per split
    pub save_document_lengths: bool,

    /// Also write `synthetic_references/A.<doc>.<query>.txt`
    pub save_synthetic_references: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            validation_test_fraction: 0.015,
            save_first_query_sentences: false,
            save_document_lengths: false,
            save_synthetic_references: false,
        }
    }
}

impl ConvertConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        let fraction = self.validation_test_fraction;
        if !(fraction > 0.0 && fraction < 0.5) {
            return Err(format!(
                "validation_test_fraction ({fraction}) must be in the open interval (0, 0.5)"
            ));
        }
        Ok(())
    }
}
