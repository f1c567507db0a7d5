use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Variable name -> value. Keys are case-sensitive and kept in sorted order.
pub type VariableSet = BTreeMap<String, String>;

/// A stored one-liner: a line pattern plus the placeholders it uses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    #[serde(default)]
    pub line: String,

    /// Placeholder token -> variable name
    #[serde(default)]
    pub variables: BTreeMap<String, String>,

    /// Variable name -> value used when nothing else supplies one
    #[serde(default)]
    pub defaults: BTreeMap<String, String>,
}

impl Template {
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            ..Self::default()
        }
    }

    pub fn with_placeholder(
        mut self,
        token: impl Into<String>,
        variable: impl Into<String>,
    ) -> Self {
        self.variables.insert(token.into(), variable.into());
        self
    }

    pub fn with_default(mut self, variable: impl Into<String>, value: impl Into<String>) -> Self {
        self.defaults.insert(variable.into(), value.into());
        self
    }
}

/// What to do when a placeholder's variable has no value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingPolicy {
    /// Substitute the empty string
    #[default]
    Empty,
    /// Leave the placeholder token in the output
    Literal,
    /// Fail the resolution
    Error,
}

impl fmt::Display for MissingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MissingPolicy::Empty => "empty",
            MissingPolicy::Literal => "literal",
            MissingPolicy::Error => "error",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for MissingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(MissingPolicy::Empty),
            "literal" => Ok(MissingPolicy::Literal),
            "error" => Ok(MissingPolicy::Error),
            other => Err(format!(
                "Unknown missing-value policy '{}' (expected empty, literal or error)",
                other
            )),
        }
    }
}

/// Per-invocation state: the validated active profile and the merged variables.
///
/// Built once by [`crate::api::BlineApi::context`] and passed explicitly to
/// every operation that needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    pub profile: String,
    pub variables: VariableSet,
    pub on_missing: MissingPolicy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_missing_fields_default_to_empty() {
        let tpl: Template = serde_json::from_str(r#"{"line": "ls"}"#).unwrap();
        assert_eq!(tpl.line, "ls");
        assert!(tpl.variables.is_empty());
        assert!(tpl.defaults.is_empty());
    }

    #[test]
    fn missing_policy_parses_lowercase_names() {
        assert_eq!("literal".parse::<MissingPolicy>(), Ok(MissingPolicy::Literal));
        assert!("LITERAL".parse::<MissingPolicy>().is_err());
    }

    #[test]
    fn missing_policy_serializes_lowercase() {
        let json = serde_json::to_string(&MissingPolicy::Error).unwrap();
        assert_eq!(json, "\"error\"");
    }
}
