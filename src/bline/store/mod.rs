//! # Storage Layer
//!
//! The [`DataStore`] trait is the only place that knows where profiles,
//! templates and the configuration record live. It deals in names and raw
//! bytes; parsing and every existence rule belong to the command layer.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage rooted at the configuration directory
//! - [`memory::InMemoryStore`]: no persistence, used by the command tests
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! ~/.config/bline/
//! ├── config.json         # Active profile + persisted variables
//! ├── default/            # One directory per profile
//! │   ├── ping.json       # One file per template
//! │   └── scan.json
//! └── work/
//!     └── ping.json       # Same name, different profile, different template
//! ```

use crate::error::Result;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Raw access to profiles, templates and the configuration record.
pub trait DataStore {
    /// Names of all profiles, sorted
    fn list_profiles(&self) -> Result<Vec<String>>;

    /// Create an empty profile
    fn create_profile(&mut self, profile: &str) -> Result<()>;

    /// Remove a profile and every template in it
    fn remove_profile(&mut self, profile: &str) -> Result<()>;

    /// Names of the templates in a profile, sorted
    fn list_templates(&self, profile: &str) -> Result<Vec<String>>;

    /// Raw template record, or `None` if the template does not exist
    fn read_template(&self, profile: &str, name: &str) -> Result<Option<Vec<u8>>>;

    /// Write a template record, replacing any previous content.
    /// MUST be atomic: a reader never sees a partial record.
    fn write_template(&mut self, profile: &str, name: &str, data: &[u8]) -> Result<()>;

    /// Delete a template record
    fn remove_template(&mut self, profile: &str, name: &str) -> Result<()>;

    /// Location of a template record (virtual for non-file stores)
    fn template_path(&self, profile: &str, name: &str) -> PathBuf;

    /// Raw configuration record, or `None` if it was never written
    fn read_config(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the configuration record. Same atomicity rule as templates.
    fn write_config(&mut self, data: &[u8]) -> Result<()>;

    /// Whether a profile of this name would collide with the store's own files
    fn is_reserved(&self, _profile: &str) -> bool {
        false
    }
}
