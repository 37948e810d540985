//! uq-mfile: reader for PROCESS mfile result files.
//!
//! An mfile records every output of a PROCESS run as one line of
//! `description (name) value [flag]`, with spaces inside the description
//! replaced by underscore padding. Scan runs append one block per scan
//! point, so a variable may carry several values; callers usually want the
//! most recent one.

pub mod reader;
pub mod value;
pub mod variable;

pub use reader::Mfile;
pub use value::Value;
pub use variable::Variable;

pub type MfileResult<T> = Result<T, MfileError>;

#[derive(thiserror::Error, Debug)]
pub enum MfileError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed mfile line {line}: {content}")]
    Malformed { line: usize, content: String },
}
