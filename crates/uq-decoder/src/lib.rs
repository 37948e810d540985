//! uq-decoder: extracts UQ responses from PROCESS mfiles.
//!
//! A campaign framework executes the simulation once per sample and hands
//! each run's directory to a decoder, which turns the run's result file into
//! a flat mapping of the outputs the campaign asked for. [`MfileDecoder`] is
//! that decoder for PROCESS mfile output; [`Decode`] is the seam the
//! framework drives.
//!
//! The pipeline is strictly linear: resolve the result-file path inside the
//! run directory, load every variable at its last scan point, keep the fixed
//! objective fields, then re-key the result onto the requested output
//! columns.

pub mod column;
pub mod config;
pub mod decoder;
pub mod run;

pub use column::OutputColumn;
pub use config::{DEFAULT_TARGET_FILENAME, DecoderConfig, load_json, load_yaml};
pub use decoder::{Decode, MfileDecoder, OutputMap, PROCESSED_FIELDS};
pub use run::RunInfo;

use std::path::PathBuf;

pub type DecodeResult<T> = Result<T, DecodeError>;

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read result file {}: {source}", .path.display())]
    UnreadableFile {
        path: PathBuf,
        source: uq_mfile::MfileError,
    },

    #[error("Run directory does not exist: {}", .path.display())]
    RunDirMissing { path: PathBuf },

    #[error("Required field '{field}' missing from mfile output")]
    MissingField { field: &'static str },

    #[error("No such field: {column} in this mfile")]
    FieldNotFound { column: String },

    #[error("Output columns cannot be empty")]
    EmptyColumns,

    #[error("Output column path cannot be empty")]
    EmptyColumnPath,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
