//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every bline operation, whatever the UI.
//!
//! It dispatches to `commands/*.rs` and returns structured `Result<CmdResult>`
//! values. It never prints, never exits and never formats.
//!
//! ## Generic Over DataStore
//!
//! `BlineApi<S: DataStore>` is generic over the storage backend:
//! - Production: `BlineApi<FileStore>`
//! - Testing: `BlineApi<InMemoryStore>`
//!
//! Operations that work inside a profile take a [`Context`], built once per
//! invocation with [`BlineApi::context`].

use crate::commands;
use crate::error::Result;
use crate::model::Context;
use crate::store::DataStore;

pub struct BlineApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> BlineApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Create the `default` profile if there are no profiles at all.
    pub fn bootstrap(&mut self) -> Result<()> {
        commands::profile::ensure_default(&mut self.store)
    }

    pub fn context(&self, options: &ContextOptions) -> Result<Context> {
        commands::context::build(&self.store, options)
    }

    pub fn run(&self, ctx: &Context, template: &str) -> Result<CmdResult> {
        commands::run::run(&self.store, ctx, template)
    }

    // --- Profiles ---

    pub fn current_profile(&self, requested: Option<&str>) -> Result<CmdResult> {
        commands::profile::show(&self.store, requested)
    }

    pub fn list_profiles(&self) -> Result<CmdResult> {
        commands::profile::list(&self.store)
    }

    pub fn add_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::add(&mut self.store, name)
    }

    pub fn remove_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::remove(&mut self.store, name)
    }

    pub fn use_profile(&mut self, name: &str) -> Result<CmdResult> {
        commands::profile::use_profile(&mut self.store, name)
    }

    // --- Templates ---

    pub fn list_templates(&self, ctx: &Context) -> Result<CmdResult> {
        commands::template::list(&self.store, ctx)
    }

    pub fn show_template(&self, ctx: &Context, name: &str) -> Result<CmdResult> {
        commands::template::show(&self.store, ctx, name)
    }

    pub fn new_template(&mut self, ctx: &Context, name: &str) -> Result<CmdResult> {
        commands::template::create(&mut self.store, ctx, name)
    }

    pub fn remove_template(&mut self, ctx: &Context, name: &str) -> Result<CmdResult> {
        commands::template::remove(&mut self.store, ctx, name)
    }

    pub fn template_path(&self, ctx: &Context, name: &str) -> Result<CmdResult> {
        commands::template::path(&self.store, ctx, name)
    }

    // --- Variables ---

    pub fn set_variable(&mut self, key: &str, value: &str) -> Result<CmdResult> {
        commands::variable::set(&mut self.store, key, value)
    }

    pub fn unset_variable(&mut self, key: &str) -> Result<CmdResult> {
        commands::variable::unset(&mut self.store, key)
    }

    pub fn list_variables(&self) -> Result<CmdResult> {
        commands::variable::list(&self.store)
    }
}

pub use commands::context::ContextOptions;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
