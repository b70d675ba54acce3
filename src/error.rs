//! Error types for the Mizzen core engine

use serde::Serialize;
use thiserror::Error;

/// Rejection kinds from rewrite-selection validation.
///
/// Each variant names exactly one violated precondition and carries the
/// context the UI needs to explain the rejection without re-deriving it.
/// Validation is stateless, so retrying with the same selection cannot
/// succeed; callers must change the selection (or the tree state) first.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RewriteSelectionError {
    #[error("working tree has uncommitted changes; commit or stash them first")]
    DirtyWorkingTree,

    #[error("no commits selected")]
    EmptySelection,

    #[error("HEAD could not be resolved; the repository may have no commits")]
    HeadUnresolved,

    #[error("selection must include the current HEAD commit {head}")]
    SelectionMustIncludeHead { head: String },

    #[error("selection is not a contiguous run of commits below HEAD ({} left over)", .unreached.len())]
    NonContiguousSelection { unreached: Vec<String> },

    #[error("cannot rewrite the root commit {root}; it has no parent to reset to")]
    CannotRewriteRootCommit { root: String },

    #[error("squash needs at least two commits, got {selected}")]
    SquashRequiresMultipleCommits { selected: usize },
}

impl RewriteSelectionError {
    fn code(&self) -> &'static str {
        match self {
            RewriteSelectionError::DirtyWorkingTree => "DIRTY_WORKING_TREE",
            RewriteSelectionError::EmptySelection => "EMPTY_SELECTION",
            RewriteSelectionError::HeadUnresolved => "HEAD_UNRESOLVED",
            RewriteSelectionError::SelectionMustIncludeHead { .. } => {
                "SELECTION_MUST_INCLUDE_HEAD"
            }
            RewriteSelectionError::NonContiguousSelection { .. } => "NON_CONTIGUOUS_SELECTION",
            RewriteSelectionError::CannotRewriteRootCommit { .. } => "CANNOT_REWRITE_ROOT_COMMIT",
            RewriteSelectionError::SquashRequiresMultipleCommits { .. } => {
                "SQUASH_REQUIRES_MULTIPLE_COMMITS"
            }
        }
    }

    fn details(&self) -> Option<String> {
        match self {
            RewriteSelectionError::SelectionMustIncludeHead { head } => Some(head.clone()),
            RewriteSelectionError::NonContiguousSelection { unreached } => {
                Some(unreached.join(", "))
            }
            RewriteSelectionError::CannotRewriteRootCommit { root } => Some(root.clone()),
            RewriteSelectionError::SquashRequiresMultipleCommits { selected } => {
                Some(selected.to_string())
            }
            _ => None,
        }
    }
}

/// Engine error types
#[derive(Error, Debug)]
pub enum MizzenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("git command failed: {0}")]
    GitCommand(String),

    #[error("git produced output that was not valid UTF-8")]
    InvalidOutput,

    #[error("repository not found: {0}")]
    RepositoryNotFound(String),

    #[error(transparent)]
    Rewrite(#[from] RewriteSelectionError),
}

impl MizzenError {
    fn code(&self) -> &'static str {
        match self {
            MizzenError::Io(_) => "IO_ERROR",
            MizzenError::GitCommand(_) => "GIT_COMMAND_FAILED",
            MizzenError::InvalidOutput => "INVALID_GIT_OUTPUT",
            MizzenError::RepositoryNotFound(_) => "REPO_NOT_FOUND",
            MizzenError::Rewrite(e) => e.code(),
        }
    }
}

/// Serializable error response for IPC
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl From<&MizzenError> for ErrorResponse {
    fn from(error: &MizzenError) -> Self {
        let details = match error {
            MizzenError::Rewrite(e) => e.details(),
            _ => None,
        };
        ErrorResponse {
            code: error.code().to_string(),
            message: error.to_string(),
            details,
        }
    }
}

// The frontend switches on `code`, so errors cross the IPC boundary as an
// ErrorResponse rather than a bare message string.
impl Serialize for MizzenError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse::from(self).serialize(serializer)
    }
}

impl Serialize for RewriteSelectionError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
        .serialize(serializer)
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, MizzenError>;
