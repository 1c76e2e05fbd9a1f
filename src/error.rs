//! Error types for graphword.

use crate::git::GitError;
use thiserror::Error;

/// Everything that can stop a dry run or a repository build.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed word, date, path or numeric argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Character without a glyph in the font table
    #[error("Letter '{0}' is not defined in the font")]
    UnknownGlyph(char),

    /// Rendered word is wider than the contribution graph
    #[error("Word is too long for the contribution graph. Required width: {required}, maximum allowed: {max}")]
    WidthExceeded { required: usize, max: usize },

    /// No author name/email could be resolved before committing
    #[error("Missing git identity: {0}")]
    MissingIdentity(String),

    /// Repository initialization step rejected by git
    #[error("Failed to initialize repository: {0}")]
    Git(#[from] GitError),

    /// A planned commit was rejected by git; earlier commits are kept
    #[error("{source} ({completed} of {total} commits created)")]
    ExternalOperation {
        completed: usize,
        total: usize,
        #[source]
        source: GitError,
    },

    /// Ctrl+C arrived while commits were being created
    #[error("Interrupted after {completed} of {total} commits")]
    Interrupted { completed: usize, total: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for graphword operations.
pub type Result<T> = std::result::Result<T, GraphError>;
