//! Mfile parsing.

use crate::value::Value;
use crate::variable::{Variable, extract_unit};
use crate::{MfileError, MfileResult};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Data lines: underscore-padded description, parenthesized name, bare or
/// quoted value, optional trailing flag.
static DATA_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^\s*(?P<desc>\S+?)_*\s+\((?P<name>\S+?)\)_*\s+(?P<value>"[^"]*"|\S+)(?:\s+(?P<flag>\S+))?\s*$"#,
    )
    .expect("data line pattern compiles")
});

/// In-memory mfile: every variable of a run, in file order.
///
/// Re-declaring a variable name appends the new value as the next scan
/// point, which is how scan runs record one value per design point.
#[derive(Debug, Clone, PartialEq)]
pub struct Mfile {
    data: IndexMap<String, Variable>,
}

impl Mfile {
    /// Read and parse the mfile at `path`.
    pub fn from_path(path: &Path) -> MfileResult<Self> {
        let content = fs::read_to_string(path)?;
        let mfile = Self::parse(&content)?;
        debug!(
            path = %path.display(),
            variables = mfile.len(),
            "parsed mfile"
        );
        Ok(mfile)
    }

    /// Parse mfile text. Blank lines and `#`/`*` header lines are skipped;
    /// anything else must be a data line.
    pub fn parse(content: &str) -> MfileResult<Self> {
        let mut data: IndexMap<String, Variable> = IndexMap::new();

        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('*') {
                continue;
            }

            let caps = DATA_LINE
                .captures(line)
                .ok_or_else(|| MfileError::Malformed {
                    line: idx + 1,
                    content: trimmed.to_string(),
                })?;

            let name = &caps["name"];
            let value = Value::parse(&caps["value"]);

            if let Some(existing) = data.get_mut(name) {
                existing.push_scan(value);
            } else {
                let description = clean_description(&caps["desc"]);
                let unit = extract_unit(&description).map(str::to_string);
                let flag = caps.name("flag").map(|m| m.as_str().to_string());
                data.insert(
                    name.to_string(),
                    Variable::new(name.to_string(), description, unit, flag, value),
                );
            }
        }

        Ok(Self { data })
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.data.get(name)
    }

    /// Variables in file order.
    pub fn variables(&self) -> impl Iterator<Item = &Variable> {
        self.data.values()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Strip the underscore padding and restore the spaces it replaced.
fn clean_description(raw: &str) -> String {
    raw.trim_end_matches('_').replace('_', " ")
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// However many scan points a variable records, `last()` is the
        /// value from the final data line that declared it.
        #[test]
        fn last_scan_wins(values in prop::collection::vec(-1.0e6_f64..1.0e6, 1..8)) {
            let tokens: Vec<String> = values.iter().map(|v| format!("{v:.6E}")).collect();

            let mut text = String::from("# scan fixture\n");
            for token in &tokens {
                text.push_str(&format!(" Major_radius_(m)_____ (rmajor)_____  {token}\n"));
            }

            let mfile = Mfile::parse(&text).unwrap();
            let rmajor = mfile.get("rmajor").unwrap();
            prop_assert_eq!(rmajor.scans().len(), tokens.len());

            let expected: f64 = tokens.last().unwrap().parse().unwrap();
            prop_assert_eq!(rmajor.last(), &Value::Number(expected));
        }
    }
}
