use bline::api::{BlineApi, CmdMessage, ContextOptions, MessageLevel};
use bline::clipboard::copy_to_clipboard;
use bline::editor::open_in_editor;
use bline::error::Result;
use bline::init::{config_root, initialize};
use bline::model::{Context, Template, VariableSet};
use bline::store::fs::FileStore;
use clap::Parser;
use colored::*;
use log::LevelFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, ProfileCommands, TemplateCommands, VariableCommands};

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

struct AppContext {
    api: BlineApi<FileStore>,
    profile: Option<String>,
}

impl AppContext {
    /// Validated per-invocation context for commands that work inside a profile.
    fn context(&self, options: ContextOptions) -> Result<Context> {
        self.api.context(&ContextOptions {
            profile: self.profile.clone(),
            ..options
        })
    }
}

fn run(cli: Cli) -> Result<()> {
    let root = config_root()?;
    let api = initialize(root, cli.config.clone())?;
    if cli.needs_valid_profile() {
        api.current_profile(cli.profile.as_deref())?;
    }
    let mut ctx = AppContext {
        api,
        profile: cli.profile,
    };

    match cli.command {
        Commands::Run {
            template,
            set,
            copy,
            on_missing,
        } => handle_run(
            &ctx,
            &template,
            ContextOptions {
                overrides: set,
                on_missing: on_missing.map(Into::into),
                ..Default::default()
            },
            copy,
        ),
        Commands::Profile { command } => match command {
            None | Some(ProfileCommands::Show) => handle_profile_show(&ctx),
            Some(ProfileCommands::List) => handle_profile_list(&ctx),
            Some(ProfileCommands::Add { name }) => {
                let result = ctx.api.add_profile(&name)?;
                print_messages(&result.messages);
                Ok(())
            }
            Some(ProfileCommands::Remove { name }) => {
                let result = ctx.api.remove_profile(&name)?;
                print_messages(&result.messages);
                Ok(())
            }
            Some(ProfileCommands::Use { name }) => {
                let result = ctx.api.use_profile(&name)?;
                print_messages(&result.messages);
                Ok(())
            }
        },
        Commands::Template { command } => match command {
            TemplateCommands::List => handle_template_list(&ctx),
            TemplateCommands::New { name, edit } => handle_template_new(&mut ctx, &name, edit),
            TemplateCommands::Edit { name } => handle_template_edit(&ctx, &name),
            TemplateCommands::Remove { name } => {
                let template_ctx = ctx.context(ContextOptions::default())?;
                let result = ctx.api.remove_template(&template_ctx, &name)?;
                print_messages(&result.messages);
                Ok(())
            }
            TemplateCommands::Show { name } => handle_template_show(&ctx, &name),
        },
        Commands::Variable { command } => match command {
            VariableCommands::Set { key, value } => {
                let result = ctx.api.set_variable(&key, &value)?;
                print_messages(&result.messages);
                Ok(())
            }
            VariableCommands::Unset { key } => {
                let result = ctx.api.unset_variable(&key)?;
                print_messages(&result.messages);
                Ok(())
            }
            VariableCommands::List => {
                let result = ctx.api.list_variables()?;
                print_variables(&result.variables);
                Ok(())
            }
        },
    }
}

fn handle_run(ctx: &AppContext, template: &str, options: ContextOptions, copy: bool) -> Result<()> {
    let run_ctx = ctx.context(options)?;
    let result = ctx.api.run(&run_ctx, template)?;

    if let Some(line) = &result.output {
        println!("{}", line);
        if copy {
            if let Err(e) = copy_to_clipboard(line) {
                eprintln!("{}", format!("Warning: Failed to copy to clipboard: {}", e).yellow());
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_profile_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.current_profile(ctx.profile.as_deref())?;
    if let Some(profile) = &result.profile {
        println!("{}", profile);
    }
    Ok(())
}

fn handle_profile_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_profiles()?;
    let active = result.profile.as_deref();
    for name in &result.listed_names {
        let marker = if Some(name.as_str()) == active { "*" } else { " " };
        println!("{} {}", marker, name);
    }
    Ok(())
}

fn handle_template_list(ctx: &AppContext) -> Result<()> {
    let template_ctx = ctx.context(ContextOptions::default())?;
    let result = ctx.api.list_templates(&template_ctx)?;
    if result.listed_names.is_empty() {
        println!(
            "{}",
            format!("No templates in profile {}.", template_ctx.profile).dimmed()
        );
    }
    for name in &result.listed_names {
        println!("{}", name);
    }
    Ok(())
}

fn handle_template_new(ctx: &mut AppContext, name: &str, edit: bool) -> Result<()> {
    let template_ctx = ctx.context(ContextOptions::default())?;
    let result = ctx.api.new_template(&template_ctx, name)?;
    print_messages(&result.messages);

    if edit {
        if let Some(path) = result.paths.first() {
            open_in_editor(path)?;
        }
    }
    Ok(())
}

fn handle_template_edit(ctx: &AppContext, name: &str) -> Result<()> {
    let template_ctx = ctx.context(ContextOptions::default())?;
    let result = ctx.api.template_path(&template_ctx, name)?;
    if let Some(path) = result.paths.first() {
        open_in_editor(path)?;
    }
    Ok(())
}

fn handle_template_show(ctx: &AppContext, name: &str) -> Result<()> {
    let template_ctx = ctx.context(ContextOptions::default())?;
    let result = ctx.api.show_template(&template_ctx, name)?;
    if let Some(template) = &result.template {
        print_template(template);
    }
    Ok(())
}

fn print_template(template: &Template) {
    println!("{}", template.line);
    if template.variables.is_empty() {
        return;
    }
    println!();
    let width = template
        .variables
        .keys()
        .map(|token| token.width())
        .max()
        .unwrap_or(0);
    for (token, variable) in &template.variables {
        let padding = " ".repeat(width.saturating_sub(token.width()));
        match template.defaults.get(variable) {
            Some(default) => println!(
                "{}{} -> {} {}",
                token,
                padding,
                variable,
                format!("(default: {})", default).dimmed()
            ),
            None => println!("{}{} -> {}", token, padding, variable),
        }
    }
}

fn print_variables(variables: &VariableSet) {
    if variables.is_empty() {
        println!("{}", "No variables set.".dimmed());
        return;
    }
    let width = variables.keys().map(|k| k.width()).max().unwrap_or(0);
    for (key, value) in variables {
        let padding = " ".repeat(width.saturating_sub(key.width()));
        println!("{}{} = {}", key, padding, value);
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}
