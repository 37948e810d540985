//! The decode pipeline: load raw outputs, select objectives, project columns.

use crate::column::OutputColumn;
use crate::config::DecoderConfig;
use crate::run::RunInfo;
use crate::{DecodeError, DecodeResult};
use indexmap::IndexMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uq_mfile::Mfile;

/// Flat, insertion-ordered mapping of output fields to values. The same
/// shape serves every pipeline stage: raw (all mfile variables at their last
/// scan), processed (the fixed objective fields), and the response handed
/// back to the framework (keyed and ordered by the requested columns).
pub type OutputMap = IndexMap<String, Value>;

/// Objective fields every decode extracts from the raw outputs: the
/// constructed cost and the plant direct cost.
pub const PROCESSED_FIELDS: [&str; 2] = ["concost", "cdirt"];

/// Result-file decoder driven by the campaign framework, one call per run.
pub trait Decode {
    fn decode(&self, run: &RunInfo) -> DecodeResult<OutputMap>;
}

/// Decoder for PROCESS mfile output.
///
/// Immutable after construction, so one decoder can serve many runs,
/// concurrently if the caller wishes; each decode reads one file and shares
/// nothing with other calls.
#[derive(Debug, Clone)]
pub struct MfileDecoder {
    target_filename: String,
    output_columns: Vec<OutputColumn>,
}

impl MfileDecoder {
    /// Build a decoder. Fails when the requested columns are unusable.
    pub fn new(
        target_filename: impl Into<String>,
        output_columns: Vec<OutputColumn>,
    ) -> DecodeResult<Self> {
        Self::from_config(DecoderConfig::new(target_filename, output_columns))
    }

    pub fn from_config(config: DecoderConfig) -> DecodeResult<Self> {
        config.validate()?;
        Ok(Self {
            target_filename: config.target_filename,
            output_columns: config.output_columns,
        })
    }

    pub fn target_filename(&self) -> &str {
        &self.target_filename
    }

    pub fn output_columns(&self) -> &[OutputColumn] {
        &self.output_columns
    }

    /// Resolve the result file inside a run directory.
    fn output_path(&self, run: &RunInfo) -> DecodeResult<PathBuf> {
        if !run.run_dir.is_dir() {
            return Err(DecodeError::RunDirMissing {
                path: run.run_dir.clone(),
            });
        }
        Ok(run.run_dir.join(&self.target_filename))
    }

    /// Parse the mfile at `path` and reduce every variable to its most
    /// recent scan value.
    pub fn load_raw(&self, path: &Path) -> DecodeResult<OutputMap> {
        let mfile = Mfile::from_path(path).map_err(|source| DecodeError::UnreadableFile {
            path: path.to_path_buf(),
            source,
        })?;

        let mut raw = OutputMap::with_capacity(mfile.len());
        for variable in mfile.variables() {
            raw.insert(variable.name().to_string(), last_scan_value(variable));
        }
        Ok(raw)
    }

    /// Keep only the objective fields, values copied unchanged. Every field
    /// must be present in the raw outputs.
    pub fn select_processed(&self, raw: &OutputMap) -> DecodeResult<OutputMap> {
        let mut processed = OutputMap::with_capacity(PROCESSED_FIELDS.len());
        for field in PROCESSED_FIELDS {
            let value = raw
                .get(field)
                .ok_or(DecodeError::MissingField { field })?;
            processed.insert(field.to_string(), value.clone());
        }
        Ok(processed)
    }

    /// Re-key the processed outputs onto the requested columns, in column
    /// order. Fails on the first unresolvable column; no partial response.
    pub fn project(&self, processed: &OutputMap) -> DecodeResult<OutputMap> {
        let mut response = OutputMap::with_capacity(self.output_columns.len());
        for column in &self.output_columns {
            let value = match column {
                OutputColumn::Name(name) => processed.get(name).cloned(),
                OutputColumn::Path(segments) => lookup_path(processed, segments),
            };
            let value = value.ok_or_else(|| DecodeError::FieldNotFound {
                column: column.to_string(),
            })?;
            response.insert(column.key(), value);
        }
        Ok(response)
    }

    /// Full pipeline for one run: resolve the output path, then
    /// load, select, project.
    pub fn decode(&self, run: &RunInfo) -> DecodeResult<OutputMap> {
        let path = self.output_path(run)?;
        debug!(
            path = %path.display(),
            run_id = ?run.run_id,
            "decoding run output"
        );
        let raw = self.load_raw(&path)?;
        let processed = self.select_processed(&raw)?;
        self.project(&processed)
    }
}

impl Decode for MfileDecoder {
    fn decode(&self, run: &RunInfo) -> DecodeResult<OutputMap> {
        MfileDecoder::decode(self, run)
    }
}

/// Descend one segment at a time; every intermediate value must itself be a
/// mapping.
fn lookup_path(map: &OutputMap, segments: &[String]) -> Option<Value> {
    let (first, rest) = segments.split_first()?;
    let mut current = map.get(first)?;
    for segment in rest {
        current = current.as_object()?.get(segment)?;
    }
    Some(current.clone())
}

/// Last scan value as a JSON value. Non-finite numbers have no JSON
/// representation and become null.
fn last_scan_value(variable: &uq_mfile::Variable) -> Value {
    match variable.last() {
        uq_mfile::Value::Number(x) => match serde_json::Number::from_f64(*x) {
            Some(number) => Value::Number(number),
            None => {
                warn!(
                    name = variable.name(),
                    value = *x,
                    "non-finite value in mfile, recording null"
                );
                Value::Null
            }
        },
        uq_mfile::Value::Text(text) => Value::String(text.clone()),
    }
}
