use bline::model::MissingPolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bline", version)]
#[command(about = "Generate one-liners from templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default is <config dir>/bline/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Use this profile for this invocation only
    #[arg(short, long, global = true, value_name = "NAME")]
    pub profile: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OnMissing {
    /// Substitute an empty string
    Empty,
    /// Keep the placeholder as written
    Literal,
    /// Fail without printing anything
    Error,
}

impl From<OnMissing> for MissingPolicy {
    fn from(value: OnMissing) -> Self {
        match value {
            OnMissing::Empty => MissingPolicy::Empty,
            OnMissing::Literal => MissingPolicy::Literal,
            OnMissing::Error => MissingPolicy::Error,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fill in a template and print the result
    #[command(alias = "r")]
    Run {
        /// Template name
        template: String,

        /// Set a variable using varname=value (can be specified multiple times)
        #[arg(short, long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,

        /// Copy the result to the clipboard
        #[arg(short, long)]
        copy: bool,

        /// What to do with placeholders that have no value
        #[arg(long, value_enum, value_name = "POLICY")]
        on_missing: Option<OnMissing>,
    },

    /// Show or manage profiles (prints the active profile when no subcommand is given)
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },

    /// Manage templates in the active profile
    #[command(alias = "t")]
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },

    /// Manage persisted variables
    #[command(alias = "var")]
    Variable {
        #[command(subcommand)]
        command: VariableCommands,
    },
}

impl Cli {
    /// Whether the active profile has to be valid before dispatch.
    ///
    /// `profile add` and `profile use` are how a stale active profile gets
    /// repaired, so they skip the check unless `--profile` was given.
    pub fn needs_valid_profile(&self) -> bool {
        let repairs = matches!(
            self.command,
            Commands::Profile {
                command: Some(ProfileCommands::Add { .. } | ProfileCommands::Use { .. })
            }
        );
        self.profile.is_some() || !repairs
    }
}

#[derive(Subcommand, Debug)]
pub enum ProfileCommands {
    /// Print the active profile
    Show,

    /// List all profiles
    #[command(alias = "ls")]
    List,

    /// Add a new profile
    Add { name: String },

    /// Remove a profile and its templates
    #[command(alias = "rm")]
    Remove { name: String },

    /// Set the profile to use
    Use { name: String },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Show all templates in the active profile
    #[command(alias = "ls")]
    List,

    /// Add a new, empty template
    New {
        name: String,

        /// Open the template in an editor
        #[arg(short, long)]
        edit: bool,
    },

    /// Edit a template in the editor
    #[command(alias = "e")]
    Edit { name: String },

    /// Remove a template
    #[command(alias = "rm")]
    Remove { name: String },

    /// Print a template's line and placeholders
    Show { name: String },
}

#[derive(Subcommand, Debug)]
pub enum VariableCommands {
    /// Persist a variable value
    Set { key: String, value: String },

    /// Remove a persisted variable
    Unset { key: String },

    /// List all persisted variables
    #[command(alias = "ls")]
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_collects_repeated_sets() {
        let cli = Cli::parse_from([
            "bline", "run", "ping", "-s", "count=4", "--set", "host=a", "--copy",
        ]);
        match cli.command {
            Commands::Run {
                template,
                set,
                copy,
                on_missing,
            } => {
                assert_eq!(template, "ping");
                assert_eq!(set, vec!["count=4", "host=a"]);
                assert!(copy);
                assert!(on_missing.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn profile_flag_is_global() {
        let cli = Cli::parse_from(["bline", "template", "list", "--profile", "work"]);
        assert_eq!(cli.profile.as_deref(), Some("work"));
    }

    #[test]
    fn bare_profile_has_no_subcommand() {
        let cli = Cli::parse_from(["bline", "profile"]);
        assert!(matches!(cli.command, Commands::Profile { command: None }));
    }

    #[test]
    fn only_add_and_use_skip_profile_check() {
        let parse = |args: &[&str]| Cli::parse_from(args);
        assert!(!parse(&["bline", "profile", "use", "work"]).needs_valid_profile());
        assert!(!parse(&["bline", "profile", "add", "work"]).needs_valid_profile());
        assert!(parse(&["bline", "profile", "list"]).needs_valid_profile());
        assert!(parse(&["bline", "profile", "remove", "work"]).needs_valid_profile());
        assert!(parse(&["bline", "variable", "set", "a", "b"]).needs_valid_profile());
        assert!(parse(&["bline", "--profile", "x", "profile", "use", "w"]).needs_valid_profile());
    }

    #[test]
    fn on_missing_parses() {
        let cli = Cli::parse_from(["bline", "run", "x", "--on-missing", "literal"]);
        match cli.command {
            Commands::Run { on_missing, .. } => {
                assert!(matches!(on_missing, Some(OnMissing::Literal)));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
