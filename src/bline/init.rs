use crate::api::BlineApi;
use crate::error::{BlineError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

/// Environment variable overriding the configuration root.
pub const HOME_ENV: &str = "BLINE_HOME";

/// Locate the configuration root.
///
/// `$BLINE_HOME` when set and non-empty, otherwise the platform config
/// directory (`~/.config/bline` on Linux).
pub fn config_root() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("", "", "bline")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| BlineError::Config("Could not determine config directory".to_string()))
}

/// Build the API over the file store and make sure a profile exists.
///
/// # Arguments
///
/// * `root` - Configuration root holding one directory per profile
/// * `config_file` - Optional path replacing `<root>/config.json` (the `--config` flag)
pub fn initialize(root: PathBuf, config_file: Option<PathBuf>) -> Result<BlineApi<FileStore>> {
    std::fs::create_dir_all(&root).map_err(BlineError::Io)?;

    let mut store = FileStore::new(root);
    if let Some(path) = config_file {
        store = store.with_config_file(path);
    }
    debug!(
        "configuration root {}, record {}",
        store.root().display(),
        store.config_file().display()
    );

    let mut api = BlineApi::new(store);
    api.bootstrap()?;
    Ok(api)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ContextOptions;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn initialize_creates_root_and_default_profile() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("bline");

        initialize(root.clone(), None).unwrap();
        assert!(root.join("default").is_dir());
    }

    #[test]
    fn initialize_keeps_existing_profiles() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("work")).unwrap();
        fs::write(temp.path().join("config.json"), r#"{"profile": "work"}"#).unwrap();

        let api = initialize(temp.path().to_path_buf(), None).unwrap();
        assert!(!temp.path().join("default").exists());
        let ctx = api.context(&ContextOptions::default()).unwrap();
        assert_eq!(ctx.profile, "work");
    }

    #[test]
    fn config_file_override_is_used() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom.json");
        fs::write(&custom, r#"{"variables": {"Host": "x"}}"#).unwrap();

        let api = initialize(temp.path().join("root"), Some(custom)).unwrap();
        let ctx = api.context(&ContextOptions::default()).unwrap();
        assert_eq!(ctx.variables["Host"], "x");
    }
}
