//! Runtime settings read from the environment.

use crate::error::{GraphError, Result};

/// Settings shared by every command.
#[derive(Clone, Debug)]
pub struct Settings {
    /// Log filter (e.g. "info", "graphword=debug"). `None` means "warn".
    pub log_level: Option<String>,
    /// Author name used instead of the global git config
    pub author_name: Option<String>,
    /// Author email used instead of the global git config
    pub author_email: Option<String>,
    /// Seed for commit counts and times; `None` draws from entropy
    pub seed: Option<u64>,
    /// Git executable
    pub git_program: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: None,
            author_name: None,
            author_email: None,
            seed: None,
            git_program: "git".to_string(),
        }
    }
}

impl Settings {
    /// Build settings from environment variables.
    ///
    /// Reads:
    /// - `GRAPHWORD_LOG` or `RUST_LOG` → log_level
    /// - `GRAPHWORD_AUTHOR_NAME` / `GRAPHWORD_AUTHOR_EMAIL` → identity override
    /// - `GRAPHWORD_SEED` → seed (must be an unsigned integer)
    /// - `GRAPHWORD_GIT` → git_program
    pub fn from_env() -> Result<Self> {
        let log_level = std::env::var("GRAPHWORD_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok();

        let seed = match non_empty_var("GRAPHWORD_SEED") {
            Some(raw) => Some(raw.parse::<u64>().map_err(|_| {
                GraphError::InvalidInput(format!("GRAPHWORD_SEED must be an unsigned integer, got '{}'", raw))
            })?),
            None => None,
        };

        Ok(Self {
            log_level,
            author_name: non_empty_var("GRAPHWORD_AUTHOR_NAME"),
            author_email: non_empty_var("GRAPHWORD_AUTHOR_EMAIL"),
            seed,
            git_program: non_empty_var("GRAPHWORD_GIT").unwrap_or_else(|| "git".to_string()),
        })
    }

    pub fn with_author(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self.author_email = Some(email.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_git_program(mut self, program: impl Into<String>) -> Self {
        self.git_program = program.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
