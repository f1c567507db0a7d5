use crate::error::{BlineError, Result};
use crate::model::{MissingPolicy, VariableSet};
use crate::store::DataStore;
use log::warn;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFILE: &str = "default";

/// The persisted configuration record (`config.json`).
///
/// Keys in `variables` are stored exactly as the user typed them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlineConfig {
    /// Name of the active profile
    #[serde(default = "default_profile")]
    pub profile: String,

    /// Persisted variable values
    #[serde(default)]
    pub variables: VariableSet,

    /// Missing-value policy used when the command line does not pick one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_missing: Option<MissingPolicy>,
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

impl Default for BlineConfig {
    fn default() -> Self {
        Self {
            profile: default_profile(),
            variables: VariableSet::new(),
            on_missing: None,
        }
    }
}

impl BlineConfig {
    /// Load the record, degrading to defaults when it is missing or unreadable.
    ///
    /// Never fails: a broken record means "no variables known", not an abort.
    pub fn load<S: DataStore>(store: &S) -> Self {
        let raw = match store.read_config() {
            Ok(Some(raw)) => raw,
            Ok(None) => return Self::default(),
            Err(e) => {
                warn!("could not read configuration, using defaults: {}", e);
                return Self::default();
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(config) => config,
            Err(e) => {
                warn!("configuration is not valid JSON, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Persist the full record, replacing the previous one.
    pub fn save<S: DataStore>(&self, store: &mut S) -> Result<()> {
        let mut content = serde_json::to_vec_pretty(self).map_err(BlineError::Serialization)?;
        content.push(b'\n');
        store.write_config(&content)
    }

    pub fn missing_policy(&self) -> MissingPolicy {
        self.on_missing.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn missing_record_loads_defaults() {
        let store = InMemoryStore::new();
        let config = BlineConfig::load(&store);
        assert_eq!(config, BlineConfig::default());
        assert_eq!(config.profile, "default");
    }

    #[test]
    fn garbage_record_loads_defaults() {
        let fixture = StoreFixture::new().with_config("{not json");
        let config = BlineConfig::load(&fixture.store);
        assert!(config.variables.is_empty());
    }

    #[test]
    fn partial_record_fills_defaults() {
        let fixture = StoreFixture::new().with_config(r#"{"variables": {"Host": "a"}}"#);
        let config = BlineConfig::load(&fixture.store);
        assert_eq!(config.profile, "default");
        assert_eq!(config.variables.get("Host").map(String::as_str), Some("a"));
        assert_eq!(config.missing_policy(), MissingPolicy::Empty);
    }

    #[test]
    fn save_and_load_keep_key_case() {
        let mut store = InMemoryStore::new();
        let mut config = BlineConfig::default();
        config.variables.insert("HOST".into(), "a".into());
        config.variables.insert("host".into(), "b".into());
        config.save(&mut store).unwrap();

        let loaded = BlineConfig::load(&store);
        assert_eq!(loaded, config);
        assert_eq!(loaded.variables.len(), 2);
    }

    #[test]
    fn policy_omitted_when_unset() {
        let json = serde_json::to_string(&BlineConfig::default()).unwrap();
        assert!(!json.contains("on_missing"));
    }
}
