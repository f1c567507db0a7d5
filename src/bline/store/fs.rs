use super::DataStore;
use crate::error::{BlineError, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const CONFIG_FILENAME: &str = "config.json";
const TEMPLATE_EXT: &str = "json";

pub struct FileStore {
    root: PathBuf,
    config_file: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        let config_file = root.join(CONFIG_FILENAME);
        Self { root, config_file }
    }

    /// Use a configuration record outside the root (the `--config` flag).
    pub fn with_config_file(mut self, path: PathBuf) -> Self {
        self.config_file = path;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    fn profile_dir(&self, profile: &str) -> PathBuf {
        self.root.join(profile)
    }

    fn template_file(&self, profile: &str, name: &str) -> PathBuf {
        self.profile_dir(profile)
            .join(format!("{}.{}", name, TEMPLATE_EXT))
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(BlineError::Io)?;
        }
        Ok(())
    }

    /// Write to a sibling temp file, then rename over the target.
    fn write_atomic(&self, target: &Path, data: &[u8]) -> Result<()> {
        let dir = target
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        self.ensure_dir(&dir)?;

        let file_name = target
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("record");
        let tmp_file = dir.join(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_file, data).map_err(BlineError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(BlineError::Io(e));
        }
        debug!("wrote {}", target.display());
        Ok(())
    }

    fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
        if !path.exists() {
            return Ok(None);
        }
        fs::read(path).map(Some).map_err(BlineError::Io)
    }
}

impl DataStore for FileStore {
    fn list_profiles(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut profiles = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(BlineError::Io)? {
            let entry = entry.map_err(BlineError::Io)?;
            if !entry.file_type().map_err(BlineError::Io)?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with('.') {
                    profiles.push(name.to_string());
                }
            }
        }
        profiles.sort();
        Ok(profiles)
    }

    fn create_profile(&mut self, profile: &str) -> Result<()> {
        let dir = self.profile_dir(profile);
        fs::create_dir_all(&dir).map_err(BlineError::Io)?;
        debug!("created profile directory {}", dir.display());
        Ok(())
    }

    fn remove_profile(&mut self, profile: &str) -> Result<()> {
        let dir = self.profile_dir(profile);
        fs::remove_dir_all(&dir).map_err(BlineError::Io)?;
        debug!("removed profile directory {}", dir.display());
        Ok(())
    }

    fn list_templates(&self, profile: &str) -> Result<Vec<String>> {
        let dir = self.profile_dir(profile);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut templates = Vec::new();
        for entry in fs::read_dir(&dir).map_err(BlineError::Io)? {
            let path = entry.map_err(BlineError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXT) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                if !stem.starts_with('.') {
                    templates.push(stem.to_string());
                }
            }
        }
        templates.sort();
        Ok(templates)
    }

    fn read_template(&self, profile: &str, name: &str) -> Result<Option<Vec<u8>>> {
        let path = self.template_file(profile, name);
        debug!("reading template {}", path.display());
        Self::read_optional(&path)
    }

    fn write_template(&mut self, profile: &str, name: &str, data: &[u8]) -> Result<()> {
        let path = self.template_file(profile, name);
        self.write_atomic(&path, data)
    }

    fn remove_template(&mut self, profile: &str, name: &str) -> Result<()> {
        let path = self.template_file(profile, name);
        fs::remove_file(&path).map_err(BlineError::Io)?;
        debug!("removed template {}", path.display());
        Ok(())
    }

    fn template_path(&self, profile: &str, name: &str) -> PathBuf {
        self.template_file(profile, name)
    }

    fn read_config(&self) -> Result<Option<Vec<u8>>> {
        debug!("reading configuration {}", self.config_file.display());
        Self::read_optional(&self.config_file)
    }

    fn write_config(&mut self, data: &[u8]) -> Result<()> {
        let path = self.config_file.clone();
        self.write_atomic(&path, data)
    }

    fn is_reserved(&self, profile: &str) -> bool {
        profile == CONFIG_FILENAME || self.profile_dir(profile) == self.config_file
    }
}
