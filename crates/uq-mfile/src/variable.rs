//! Parsed mfile variables.

use crate::value::Value;

/// One output variable and the values it took across scan points.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    name: String,
    description: String,
    unit: Option<String>,
    flag: Option<String>,
    scans: Vec<Value>,
}

impl Variable {
    pub(crate) fn new(
        name: String,
        description: String,
        unit: Option<String>,
        flag: Option<String>,
        first: Value,
    ) -> Self {
        Self {
            name,
            description,
            unit,
            flag,
            scans: vec![first],
        }
    }

    pub(crate) fn push_scan(&mut self, value: Value) {
        self.scans.push(value);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description with the underscore padding undone.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Unit extracted from a trailing `(...)` group in the description.
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Trailing marker such as `OP` or `ITV`, verbatim.
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }

    /// Recorded values in scan order. Never empty.
    pub fn scans(&self) -> &[Value] {
        &self.scans
    }

    /// Value at a given scan index.
    pub fn scan(&self, index: usize) -> Option<&Value> {
        self.scans.get(index)
    }

    /// Value at the most recent scan point.
    pub fn last(&self) -> &Value {
        self.scans.last().expect("variable records at least one scan")
    }
}

/// A description ending in `(unit)` names the variable's unit.
pub(crate) fn extract_unit(description: &str) -> Option<&str> {
    let last = description.rsplit(' ').next()?;
    let inner = last.strip_prefix('(')?.strip_suffix(')')?;
    if inner.is_empty() { None } else { Some(inner) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_accumulate_in_order() {
        let mut var = Variable::new(
            "rmajor".to_string(),
            "Major radius (m)".to_string(),
            Some("m".to_string()),
            None,
            Value::Number(8.0),
        );
        var.push_scan(Value::Number(8.5));
        var.push_scan(Value::Number(9.0));

        assert_eq!(var.scans().len(), 3);
        assert_eq!(var.scan(0), Some(&Value::Number(8.0)));
        assert_eq!(var.scan(1), Some(&Value::Number(8.5)));
        assert_eq!(var.last(), &Value::Number(9.0));
        assert_eq!(var.scan(3), None);
    }

    #[test]
    fn single_scan_last_is_first() {
        let var = Variable::new(
            "aspect".to_string(),
            "Aspect ratio".to_string(),
            None,
            None,
            Value::Number(3.1),
        );
        assert_eq!(var.last(), &Value::Number(3.1));
    }

    #[test]
    fn unit_extraction() {
        assert_eq!(extract_unit("Major radius (m)"), Some("m"));
        assert_eq!(extract_unit("Fusion power (MW)"), Some("MW"));
        assert_eq!(extract_unit("Aspect ratio"), None);
        assert_eq!(extract_unit("Figure of merit ()"), None);
        assert_eq!(extract_unit(""), None);
    }
}
