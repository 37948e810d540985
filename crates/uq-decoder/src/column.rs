//! Requested output column specifiers.

use core::fmt;
use serde::{Deserialize, Serialize};

/// One requested output: either a flat field name or a path into nested
/// structure. In campaign configuration a column is written as a bare
/// string or as a list of strings, so the two cases are decided when the
/// configuration is loaded, not re-inspected at decode time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OutputColumn {
    Name(String),
    Path(Vec<String>),
}

impl OutputColumn {
    pub fn name(name: impl Into<String>) -> Self {
        OutputColumn::Name(name.into())
    }

    pub fn path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        OutputColumn::Path(segments.into_iter().map(Into::into).collect())
    }

    /// Key under which the resolved value appears in the response: the name
    /// itself, or the path segments joined by `.`.
    pub fn key(&self) -> String {
        match self {
            OutputColumn::Name(name) => name.clone(),
            OutputColumn::Path(segments) => segments.join("."),
        }
    }
}

impl fmt::Display for OutputColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_for_name_is_the_name() {
        assert_eq!(OutputColumn::name("concost").key(), "concost");
    }

    #[test]
    fn key_for_path_joins_segments() {
        assert_eq!(OutputColumn::path(["costs", "concost"]).key(), "costs.concost");
    }

    #[test]
    fn displays_as_its_key() {
        assert_eq!(OutputColumn::name("concost").to_string(), "concost");
        assert_eq!(
            OutputColumn::path(["costs", "cdirt"]).to_string(),
            "costs.cdirt"
        );
    }

    #[test]
    fn yaml_string_becomes_name() {
        let column: OutputColumn = serde_yaml::from_str("concost").unwrap();
        assert_eq!(column, OutputColumn::name("concost"));
    }

    #[test]
    fn yaml_list_becomes_path() {
        let column: OutputColumn = serde_yaml::from_str("[costs, concost]").unwrap();
        assert_eq!(column, OutputColumn::path(["costs", "concost"]));
    }

    #[test]
    fn json_round_trip() {
        let columns = vec![
            OutputColumn::name("concost"),
            OutputColumn::path(["costs", "cdirt"]),
        ];
        let json = serde_json::to_string(&columns).unwrap();
        assert_eq!(json, r#"["concost",["costs","cdirt"]]"#);
        let back: Vec<OutputColumn> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, columns);
    }
}
