use crate::error::{BlineError, Result};

/// Profile and template names become path components, so they must be a
/// single plain component. Dot-prefixed names are hidden from listings and
/// are rejected too.
pub fn validate_name(kind: &str, name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(BlineError::Config(format!("{} name cannot be empty", kind)));
    }
    if name.starts_with('.') || name.contains(['/', '\\']) {
        return Err(BlineError::Config(format!(
            "Invalid {} name '{}'",
            kind.to_lowercase(),
            name
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_pass() {
        assert!(validate_name("Profile", "work").is_ok());
        assert!(validate_name("Template", "ping-v6.fast").is_ok());
    }

    #[test]
    fn path_like_names_fail() {
        for bad in ["", "  ", ".", "..", ".git", "a/b", "a\\b", "../etc"] {
            assert!(
                matches!(validate_name("Profile", bad), Err(BlineError::Config(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
