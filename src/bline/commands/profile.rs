use crate::commands::helpers::validate_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::config::{BlineConfig, DEFAULT_PROFILE};
use crate::error::{BlineError, Result};
use crate::store::DataStore;

fn exists<S: DataStore>(store: &S, name: &str) -> Result<bool> {
    Ok(store.list_profiles()?.iter().any(|p| p == name))
}

/// Make sure there is at least one profile to work with.
pub fn ensure_default<S: DataStore>(store: &mut S) -> Result<()> {
    if store.list_profiles()?.is_empty() {
        store.create_profile(DEFAULT_PROFILE)?;
    }
    Ok(())
}

/// The profile this invocation works in.
///
/// `requested` (the `--profile` flag) wins over the persisted name. Either way
/// the name must be one of the existing profiles.
pub fn active<S: DataStore>(store: &S, requested: Option<&str>) -> Result<String> {
    let name = match requested {
        Some(name) => name.to_string(),
        None => BlineConfig::load(store).profile,
    };
    if !exists(store, &name)? {
        return Err(BlineError::Config(format!("Unknown profile: {}", name)));
    }
    Ok(name)
}

pub fn show<S: DataStore>(store: &S, requested: Option<&str>) -> Result<CmdResult> {
    let name = active(store, requested)?;
    Ok(CmdResult::default().with_profile(name))
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let profiles = store.list_profiles()?;
    let mut result = CmdResult::default().with_listed_names(profiles);
    result.profile = Some(BlineConfig::load(store).profile);
    Ok(result)
}

pub fn add<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    validate_name("Profile", name)?;
    if store.is_reserved(name) {
        return Err(BlineError::Config(format!("Profile name '{}' is reserved", name)));
    }
    if exists(store, name)? {
        return Err(BlineError::AlreadyExists {
            kind: "Profile",
            name: name.to_string(),
        });
    }
    store.create_profile(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Profile created: {}", name)));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    validate_name("Profile", name)?;
    if !exists(store, name)? {
        return Err(BlineError::ProfileNotFound(name.to_string()));
    }
    store.remove_profile(name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Profile removed: {}", name)));
    if BlineConfig::load(store).profile == name {
        result.add_message(CmdMessage::warning(format!(
            "{} was the active profile; select another with `bline profile use <name>`",
            name
        )));
    }
    Ok(result)
}

/// Persist a new active profile. Nothing is written unless it exists.
pub fn use_profile<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    if !exists(store, name)? {
        return Err(BlineError::ProfileNotFound(name.to_string()));
    }

    let mut config = BlineConfig::load(store);
    config.profile = name.to_string();
    config.save(store)?;

    let mut result = CmdResult::default().with_profile(name.to_string());
    result.add_message(CmdMessage::success(format!("Active profile: {}", name)));
    Ok(result)
}
