use crate::error::{BlineError, Result};
use crate::model::VariableSet;

/// Split a `key=value` override on the first `=`.
pub fn parse_override(raw: &str) -> Result<(String, String)> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(BlineError::Config(format!(
            "Error processing variable setting '{}'. Use format 'var=value'",
            raw
        ))),
    }
}

/// Layer command-line overrides on top of the persisted variables.
///
/// Every override is validated before anything is merged, and later
/// overrides of the same key replace earlier ones.
pub fn merge<I: AsRef<str>>(persisted: &VariableSet, overrides: &[I]) -> Result<VariableSet> {
    let parsed = overrides
        .iter()
        .map(|raw| parse_override(raw.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let mut merged = persisted.clone();
    merged.extend(parsed);
    Ok(merged)
}
