use crate::commands::helpers::validate_name;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BlineError, Result};
use crate::model::{Context, Template};
use crate::store::DataStore;

/// Load and parse a template from a profile.
pub fn load<S: DataStore>(store: &S, profile: &str, name: &str) -> Result<Template> {
    validate_name("Template", name)?;
    let raw = store
        .read_template(profile, name)?
        .ok_or_else(|| BlineError::TemplateNotFound(name.to_string()))?;
    serde_json::from_slice(&raw).map_err(|source| BlineError::Parse {
        template: name.to_string(),
        source,
    })
}

pub fn list<S: DataStore>(store: &S, ctx: &Context) -> Result<CmdResult> {
    let templates = store.list_templates(&ctx.profile)?;
    Ok(CmdResult::default()
        .with_listed_names(templates)
        .with_profile(ctx.profile.clone()))
}

pub fn show<S: DataStore>(store: &S, ctx: &Context, name: &str) -> Result<CmdResult> {
    let template = load(store, &ctx.profile, name)?;
    Ok(CmdResult::default().with_template(template))
}

/// Create an empty template. Fails without writing if the name is taken.
pub fn create<S: DataStore>(store: &mut S, ctx: &Context, name: &str) -> Result<CmdResult> {
    validate_name("Template", name)?;
    if store.read_template(&ctx.profile, name)?.is_some() {
        return Err(BlineError::AlreadyExists {
            kind: "Template",
            name: name.to_string(),
        });
    }

    let mut content = serde_json::to_vec_pretty(&Template::default())?;
    content.push(b'\n');
    store.write_template(&ctx.profile, name, &content)?;

    let path = store.template_path(&ctx.profile, name);
    let mut result = CmdResult::default().with_paths(vec![path.clone()]);
    result.add_message(CmdMessage::success(format!(
        "Created new template {} in {}",
        name,
        path.display()
    )));
    Ok(result)
}

pub fn remove<S: DataStore>(store: &mut S, ctx: &Context, name: &str) -> Result<CmdResult> {
    validate_name("Template", name)?;
    if store.read_template(&ctx.profile, name)?.is_none() {
        return Err(BlineError::TemplateNotFound(name.to_string()));
    }
    store.remove_template(&ctx.profile, name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Template removed: {}", name)));
    Ok(result)
}

/// Path of an existing template, for handing to an editor.
pub fn path<S: DataStore>(store: &S, ctx: &Context, name: &str) -> Result<CmdResult> {
    validate_name("Template", name)?;
    if store.read_template(&ctx.profile, name)?.is_none() {
        return Err(BlineError::TemplateNotFound(name.to_string()));
    }
    Ok(CmdResult::default().with_paths(vec![store.template_path(&ctx.profile, name)]))
}
