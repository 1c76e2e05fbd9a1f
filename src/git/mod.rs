//! Version-control collaborator.
//!
//! Everything the planner's output needs from git goes through
//! [`VersionControl`], with the repository root passed explicitly to every
//! call. [`GitCli`] shells out to the `git` binary; tests substitute a fake.

pub mod command;
pub mod error;
pub mod executor;

use chrono::NaiveDateTime;
use std::path::Path;

pub use command::GitCli;
pub use error::GitError;
pub use executor::{execute_plan, init_repository, resolve_identity, Identity};

pub trait VersionControl {
    /// `git --version` output.
    fn version(&self) -> Result<String, GitError>;

    fn init(&self, root: &Path) -> Result<(), GitError>;

    /// Read a value from the user's global config. Unset keys are `Ok(None)`.
    fn global_config(&self, key: &str) -> Result<Option<String>, GitError>;

    /// Write a value into the repository's local config.
    fn config_set(&self, root: &Path, key: &str, value: &str) -> Result<(), GitError>;

    /// Stage `file` (relative to `root`) and commit it.
    fn commit_file(&self, root: &Path, file: &Path, message: &str) -> Result<(), GitError>;

    fn rename_branch(&self, root: &Path, name: &str) -> Result<(), GitError>;

    /// Create an empty commit authored at `when`.
    fn commit_empty(&self, root: &Path, when: NaiveDateTime, message: &str)
        -> Result<(), GitError>;
}
