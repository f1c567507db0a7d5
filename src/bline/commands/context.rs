use crate::commands::{merge, profile};
use crate::config::BlineConfig;
use crate::error::Result;
use crate::model::{Context, MissingPolicy};
use crate::store::DataStore;

/// Inputs the command line contributes to a [`Context`].
#[derive(Debug, Clone, Default)]
pub struct ContextOptions {
    /// `--profile`: use this profile for one invocation only
    pub profile: Option<String>,
    /// `--set key=value` entries, in the order given
    pub overrides: Vec<String>,
    /// `--on-missing`
    pub on_missing: Option<MissingPolicy>,
}

/// Validate the active profile and merge the variables for this invocation.
///
/// Nothing is written: overrides stay transient.
pub fn build<S: DataStore>(store: &S, options: &ContextOptions) -> Result<Context> {
    let config = BlineConfig::load(store);
    let requested = options.profile.as_deref().unwrap_or(&config.profile);
    let profile = profile::active(store, Some(requested))?;
    let variables = merge::merge(&config.variables, &options.overrides)?;
    let on_missing = options
        .on_missing
        .unwrap_or_else(|| config.missing_policy());

    Ok(Context {
        profile,
        variables,
        on_missing,
    })
}
