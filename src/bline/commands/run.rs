use crate::commands::resolve::resolve;
use crate::commands::{template, CmdResult};
use crate::error::Result;
use crate::model::Context;
use crate::store::DataStore;
use log::debug;

/// Load a template from the active profile and fill it in.
pub fn run<S: DataStore>(store: &S, ctx: &Context, name: &str) -> Result<CmdResult> {
    let template = template::load(store, &ctx.profile, name)?;
    debug!(
        "resolving {}/{} with {} variable(s), missing values -> {}",
        ctx.profile,
        name,
        ctx.variables.len(),
        ctx.on_missing
    );
    let line = resolve(&template, &ctx.variables, ctx.on_missing)?;
    Ok(CmdResult::default().with_output(line))
}
