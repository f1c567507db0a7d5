use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlineError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("{kind} already exists: {name}")]
    AlreadyExists { kind: &'static str, name: String },

    #[error("Template {template} is not well-formed: {source}")]
    Parse {
        template: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No value for variable '{variable}' (placeholder {placeholder})")]
    MissingVariable {
        placeholder: String,
        variable: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl BlineError {
    /// Process exit code the CLI uses for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            BlineError::Config(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlineError>;
