use crate::model::{Template, VariableSet};
use std::path::PathBuf;

pub mod context;
pub mod helpers;
pub mod merge;
pub mod profile;
pub mod resolve;
pub mod run;
pub mod template;
pub mod variable;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// A resolved one-liner, ready to print or copy
    pub output: Option<String>,
    /// Profile or template names
    pub listed_names: Vec<String>,
    pub variables: VariableSet,
    pub template: Option<Template>,
    pub paths: Vec<PathBuf>,
    pub profile: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: String) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_listed_names(mut self, names: Vec<String>) -> Self {
        self.listed_names = names;
        self
    }

    pub fn with_variables(mut self, variables: VariableSet) -> Self {
        self.variables = variables;
        self
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = Some(template);
        self
    }

    pub fn with_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.paths = paths;
        self
    }

    pub fn with_profile(mut self, profile: String) -> Self {
        self.profile = Some(profile);
        self
    }
}
