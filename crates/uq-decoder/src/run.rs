//! Per-run metadata handed over by the campaign framework.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where one simulation run lives and, optionally, what the framework calls
/// it. Only the run directory takes part in path resolution; the id shows
/// up in diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunInfo {
    pub run_dir: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
}

impl RunInfo {
    pub fn new(run_dir: impl Into<PathBuf>) -> Self {
        Self {
            run_dir: run_dir.into(),
            run_id: None,
        }
    }

    pub fn with_run_id(mut self, run_id: impl Into<String>) -> Self {
        self.run_id = Some(run_id.into());
        self
    }
}

impl Default for RunInfo {
    /// The current working directory, for frameworks that execute each run
    /// in place.
    fn default() -> Self {
        Self::new(".")
    }
}
