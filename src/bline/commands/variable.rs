use crate::commands::{CmdMessage, CmdResult};
use crate::config::BlineConfig;
use crate::error::{BlineError, Result};
use crate::model::VariableSet;
use crate::store::DataStore;

/// Persisted variables; empty when the record is missing or unreadable.
pub fn load<S: DataStore>(store: &S) -> VariableSet {
    BlineConfig::load(store).variables
}

/// Replace the persisted variables, keeping the rest of the record.
pub fn save<S: DataStore>(store: &mut S, variables: &VariableSet) -> Result<()> {
    let mut config = BlineConfig::load(store);
    config.variables = variables.clone();
    config.save(store)
}

fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(BlineError::Config("Variable name cannot be empty".to_string()));
    }
    if key.contains('=') {
        return Err(BlineError::Config(format!(
            "Variable name '{}' cannot contain '='",
            key
        )));
    }
    Ok(())
}

pub fn set<S: DataStore>(store: &mut S, key: &str, value: &str) -> Result<CmdResult> {
    validate_key(key)?;
    let mut variables = load(store);
    variables.insert(key.to_string(), value.to_string());
    save(store, &variables)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("{} set to {}", key, value)));
    Ok(result)
}

pub fn unset<S: DataStore>(store: &mut S, key: &str) -> Result<CmdResult> {
    let mut variables = load(store);
    let mut result = CmdResult::default();

    if variables.remove(key).is_none() {
        result.add_message(CmdMessage::warning(format!("Variable {} is not set", key)));
        return Ok(result);
    }
    save(store, &variables)?;
    result.add_message(CmdMessage::success(format!("{} unset", key)));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_variables(load(store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn save_load_roundtrip_is_stable() {
        let mut store = InMemoryStore::new();
        let mut vars = VariableSet::new();
        vars.insert("Host".into(), "example.com".into());
        vars.insert("host".into(), "other".into());
        vars.insert("API_KEY".into(), "s3cr=t".into());
        save(&mut store, &vars).unwrap();

        let first = load(&store);
        save(&mut store, &first).unwrap();
        let second = load(&store);
        assert_eq!(first, vars);
        assert_eq!(second, vars);
    }

    #[test]
    fn unreadable_record_loads_empty() {
        let store = StoreFixture::new().with_config("[1, 2").store;
        assert!(load(&store).is_empty());
    }

    #[test]
    fn set_preserves_case_and_profile() {
        let mut store = StoreFixture::new()
            .with_config(r#"{"profile": "work", "variables": {}}"#)
            .store;
        set(&mut store, "TargetHost", "10.0.0.1").unwrap();

        let config = BlineConfig::load(&store);
        assert_eq!(config.profile, "work");
        assert_eq!(config.variables["TargetHost"], "10.0.0.1");
        assert!(!config.variables.contains_key("targethost"));
    }

    #[test]
    fn set_rejects_bad_keys() {
        let mut store = InMemoryStore::new();
        assert!(matches!(set(&mut store, "", "x"), Err(BlineError::Config(_))));
        assert!(matches!(set(&mut store, "a=b", "x"), Err(BlineError::Config(_))));
        assert!(store.read_config().unwrap().is_none());
    }

    #[test]
    fn unset_removes_key() {
        let mut store = InMemoryStore::new();
        set(&mut store, "host", "a").unwrap();
        set(&mut store, "port", "22").unwrap();
        unset(&mut store, "host").unwrap();

        let vars = load(&store);
        assert!(!vars.contains_key("host"));
        assert_eq!(vars["port"], "22");
    }

    #[test]
    fn unset_unknown_key_only_warns() {
        let mut store = InMemoryStore::new();
        let result = unset(&mut store, "ghost").unwrap();
        assert_eq!(
            result.messages[0].level,
            crate::commands::MessageLevel::Warning
        );
        assert!(store.read_config().unwrap().is_none());
    }

    #[test]
    fn list_returns_sorted_variables() {
        let mut store = InMemoryStore::new();
        set(&mut store, "b", "2").unwrap();
        set(&mut store, "a", "1").unwrap();
        let result = list(&store).unwrap();
        let keys: Vec<_> = result.variables.keys().cloned().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}
