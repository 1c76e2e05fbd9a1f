use crate::config::Settings;
use crate::error::{GraphError, Result};
use crate::git::{GitCli, Identity, VersionControl};
use crate::pattern::next_anchor_weekday as next_sunday;
use chrono::Local;

pub fn next_anchor_weekday() -> Result<()> {
    let next = next_sunday(Local::now().date_naive());
    println!("Next Sunday: {} ({})", next, next.format("%a %b %d %Y"));
    Ok(())
}

/// Outcome of inspecting git before creating commits.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConfigReport {
    pub version: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl ConfigReport {
    pub fn is_ready(&self) -> bool {
        match (&self.name, &self.email) {
            (Some(name), Some(email)) => Identity {
                name: name.clone(),
                email: email.clone(),
            }
            .email_looks_valid(),
            _ => false,
        }
    }
}

pub fn inspect(vcs: &dyn VersionControl, settings: &Settings) -> ConfigReport {
    let version = match vcs.version() {
        Ok(version) => version,
        Err(_) => return ConfigReport::default(),
    };
    let read = |key: &str| vcs.global_config(key).ok().flatten();

    ConfigReport {
        version: Some(version),
        name: settings.author_name.clone().or_else(|| read("user.name")),
        email: settings.author_email.clone().or_else(|| read("user.email")),
    }
}

pub fn check_config(settings: &Settings) -> Result<()> {
    println!("Checking git configuration...\n");
    let git = GitCli::new(settings.git_program.clone());
    report_config(&git, settings)
}

fn report_config(vcs: &dyn VersionControl, settings: &Settings) -> Result<()> {
    if let Err(e) = vcs.version() {
        println!("[missing] git is not installed or not in PATH");
        return Err(GraphError::Git(e));
    }
    let report = inspect(vcs, settings);

    if let Some(version) = &report.version {
        println!("[ok] {}", version);
    }
    match &report.name {
        Some(name) => println!("[ok] user.name: \"{}\"", name),
        None => println!("[missing] user.name is not set"),
    }
    match &report.email {
        Some(email) if report.is_ready() => println!("[ok] user.email: \"{}\"", email),
        Some(email) => println!("[warn] user.email \"{}\" does not look like an email address", email),
        None => println!("[missing] user.email is not set"),
    }
    println!();

    if report.is_ready() {
        println!("Git is ready. Make sure this email is registered with your GitHub account.");
        Ok(())
    } else {
        println!("Configure git before creating patterns:");
        println!("  git config --global user.name \"Your Name\"");
        println!("  git config --global user.email \"you@example.com\"");
        Err(GraphError::MissingIdentity(
            "git author identity is incomplete".to_string(),
        ))
    }
}
