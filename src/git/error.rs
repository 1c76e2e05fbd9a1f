use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitError {
    #[error("Failed to run `{command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` failed with exit code {code}: {stderr}")]
    CommandFailed {
        command: String,
        code: i32,
        stderr: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl GitError {
    /// Command line of the failing git invocation, if any.
    pub fn command(&self) -> Option<&str> {
        match self {
            GitError::SpawnFailed { command, .. } | GitError::CommandFailed { command, .. } => {
                Some(command)
            }
            GitError::IoError(_) => None,
        }
    }
}
