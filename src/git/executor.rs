use super::VersionControl;
use crate::config::Settings;
use crate::error::{GraphError, Result};
use crate::pattern::Plan;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, info};

pub const DEFAULT_BRANCH: &str = "main";
pub const SEED_FILE: &str = "README.md";

/// Author written into the new repository's local config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub email: String,
}

impl Identity {
    /// Loose sanity check: an `@` and more than five characters.
    pub fn email_looks_valid(&self) -> bool {
        self.email.contains('@') && self.email.len() > 5
    }
}

/// Resolve the commit author: settings override first, then global git config.
///
/// Fails with [`GraphError::MissingIdentity`] before anything is written.
pub fn resolve_identity(vcs: &dyn VersionControl, settings: &Settings) -> Result<Identity> {
    let name = match &settings.author_name {
        Some(name) => Some(name.clone()),
        None => vcs.global_config("user.name")?,
    };
    let email = match &settings.author_email {
        Some(email) => Some(email.clone()),
        None => vcs.global_config("user.email")?,
    };

    match (name, email) {
        (Some(name), Some(email)) => {
            debug!(%name, %email, "resolved author identity");
            Ok(Identity { name, email })
        }
        (None, _) => Err(GraphError::MissingIdentity(
            "user.name is not set; run `git config --global user.name \"Your Name\"` or set GRAPHWORD_AUTHOR_NAME".to_string(),
        )),
        (_, None) => Err(GraphError::MissingIdentity(
            "user.email is not set; run `git config --global user.email \"you@example.com\"` or set GRAPHWORD_AUTHOR_EMAIL".to_string(),
        )),
    }
}

/// Only fresh targets are accepted: a missing path or an empty directory.
pub fn ensure_clean_target(root: &Path) -> Result<()> {
    if !root.exists() {
        return Ok(());
    }
    if !root.is_dir() {
        return Err(GraphError::InvalidInput(format!(
            "{} exists and is not a directory",
            root.display()
        )));
    }
    if fs::read_dir(root)?.next().is_some() {
        return Err(GraphError::InvalidInput(format!(
            "{} is not empty; choose a new directory for the pattern repository",
            root.display()
        )));
    }
    Ok(())
}

/// Create the repository with identity, default branch and one seed commit.
pub fn init_repository(
    vcs: &dyn VersionControl,
    root: &Path,
    word: &str,
    identity: &Identity,
) -> Result<()> {
    ensure_clean_target(root)?;
    fs::create_dir_all(root)?;
    info!(root = %root.display(), "initializing repository");

    vcs.init(root)?;
    vcs.config_set(root, "user.name", &identity.name)?;
    vcs.config_set(root, "user.email", &identity.email)?;
    vcs.config_set(root, "init.defaultBranch", DEFAULT_BRANCH)?;

    fs::write(
        root.join(SEED_FILE),
        format!(
            "# {} Contribution Pattern\n\nGenerated with graphword\n",
            word
        ),
    )?;
    vcs.commit_file(root, Path::new(SEED_FILE), "Initial commit")?;
    vcs.rename_branch(root, DEFAULT_BRANCH)?;

    Ok(())
}

/// Create every planned commit in order.
///
/// Stops at the first failure or once `interrupted` is set; commits already
/// made stay in the history. `on_progress` receives (done, total) after each
/// commit.
pub fn execute_plan(
    vcs: &dyn VersionControl,
    root: &Path,
    plan: &Plan,
    interrupted: &AtomicBool,
    mut on_progress: impl FnMut(usize, usize),
) -> Result<usize> {
    let total = plan.total();
    info!(total, word = %plan.word, "creating commits");

    for (completed, descriptor) in plan.descriptors.iter().enumerate() {
        if interrupted.load(Ordering::SeqCst) {
            return Err(GraphError::Interrupted { completed, total });
        }

        vcs.commit_empty(root, descriptor.timestamp(), &descriptor.label)
            .map_err(|source| GraphError::ExternalOperation {
                completed,
                total,
                source,
            })?;

        on_progress(completed + 1, total);
    }

    Ok(total)
}
