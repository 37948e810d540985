//! Decoder configuration: the construction-time contract with the caller.

use crate::column::OutputColumn;
use crate::{DecodeError, DecodeResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result file PROCESS writes into each run directory.
pub const DEFAULT_TARGET_FILENAME: &str = "MFILE.DAT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DecoderConfig {
    /// File the decoder looks for inside a run directory.
    #[serde(default = "default_target_filename")]
    pub target_filename: String,
    /// Outputs the caller wants back, in response order.
    pub output_columns: Vec<OutputColumn>,
}

fn default_target_filename() -> String {
    DEFAULT_TARGET_FILENAME.to_string()
}

impl DecoderConfig {
    pub fn new(target_filename: impl Into<String>, output_columns: Vec<OutputColumn>) -> Self {
        Self {
            target_filename: target_filename.into(),
            output_columns,
        }
    }

    /// Reject configurations the decoder cannot honor.
    pub fn validate(&self) -> DecodeResult<()> {
        if self.output_columns.is_empty() {
            return Err(DecodeError::EmptyColumns);
        }
        let has_empty_path = self
            .output_columns
            .iter()
            .any(|column| matches!(column, OutputColumn::Path(segments) if segments.is_empty()));
        if has_empty_path {
            return Err(DecodeError::EmptyColumnPath);
        }
        Ok(())
    }
}

pub fn load_yaml(path: &Path) -> DecodeResult<DecoderConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: DecoderConfig = serde_yaml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_json(path: &Path) -> DecodeResult<DecoderConfig> {
    let content = std::fs::read_to_string(path)?;
    let config: DecoderConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
