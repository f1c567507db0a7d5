use super::DataStore;
use crate::error::{BlineError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    profiles: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
    config: Option<Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn missing_profile(profile: &str) -> BlineError {
        BlineError::Store(format!("No profile directory for {}", profile))
    }
}

impl DataStore for InMemoryStore {
    fn list_profiles(&self) -> Result<Vec<String>> {
        Ok(self.profiles.keys().cloned().collect())
    }

    fn create_profile(&mut self, profile: &str) -> Result<()> {
        self.profiles.entry(profile.to_string()).or_default();
        Ok(())
    }

    fn remove_profile(&mut self, profile: &str) -> Result<()> {
        self.profiles
            .remove(profile)
            .map(|_| ())
            .ok_or_else(|| Self::missing_profile(profile))
    }

    fn list_templates(&self, profile: &str) -> Result<Vec<String>> {
        Ok(self
            .profiles
            .get(profile)
            .map(|t| t.keys().cloned().collect())
            .unwrap_or_default())
    }

    fn read_template(&self, profile: &str, name: &str) -> Result<Option<Vec<u8>>> {
        Ok(self
            .profiles
            .get(profile)
            .and_then(|t| t.get(name))
            .cloned())
    }

    fn write_template(&mut self, profile: &str, name: &str, data: &[u8]) -> Result<()> {
        self.profiles
            .entry(profile.to_string())
            .or_default()
            .insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn remove_template(&mut self, profile: &str, name: &str) -> Result<()> {
        let templates = self
            .profiles
            .get_mut(profile)
            .ok_or_else(|| Self::missing_profile(profile))?;
        templates
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| BlineError::TemplateNotFound(name.to_string()))
    }

    fn template_path(&self, profile: &str, name: &str) -> PathBuf {
        PathBuf::from(format!("memory://{}/{}.json", profile, name))
    }

    fn read_config(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.config.clone())
    }

    fn write_config(&mut self, data: &[u8]) -> Result<()> {
        self.config = Some(data.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Template;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_profile(mut self, profile: &str) -> Self {
            self.store.create_profile(profile).unwrap();
            self
        }

        pub fn with_template(mut self, profile: &str, name: &str, template: &Template) -> Self {
            let data = serde_json::to_vec_pretty(template).unwrap();
            self.store.write_template(profile, name, &data).unwrap();
            self
        }

        pub fn with_raw_template(mut self, profile: &str, name: &str, raw: &str) -> Self {
            self.store
                .write_template(profile, name, raw.as_bytes())
                .unwrap();
            self
        }

        pub fn with_config(mut self, raw: &str) -> Self {
            self.store.write_config(raw.as_bytes()).unwrap();
            self
        }
    }
}
