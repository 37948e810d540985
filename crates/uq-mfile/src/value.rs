//! Scalar values recorded in an mfile.

use core::fmt;

/// One recorded scalar: numeric for physics and cost outputs, text for
/// program metadata such as file names and version tags.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Number(f64),
    Text(String),
}

impl Value {
    /// Interpret a raw value token. Quoted tokens are always text with the
    /// quotes stripped; bare tokens are numeric whenever they parse as a
    /// float.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if let Some(stripped) = strip_quotes(token) {
            return Value::Text(stripped.to_string());
        }
        match token.parse::<f64>() {
            Ok(x) => Value::Number(x),
            Err(_) => Value::Text(token.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(x) => Some(*x),
            Value::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Number(_) => None,
            Value::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

fn strip_quotes(token: &str) -> Option<&str> {
    token.strip_prefix('"')?.strip_suffix('"')
}
