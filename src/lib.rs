//! Mizzen core - commit history graph engine
//!
//! The engine behind the Mizzen Git client: parses raw `git for-each-ref`
//! and `git log` output into a renderable commit graph with stable
//! per-branch lanes and colors, and validates multi-commit selections for
//! squash/drop rewrites. All git execution is isolated behind the
//! [`git::GitBackend`] trait; the engine itself performs no I/O.

pub mod error;
pub mod git;
pub mod graph;
pub mod models;
pub mod rewrite;
pub mod session;

#[cfg(test)]
mod test_utils;

pub use error::{MizzenError, Result, RewriteSelectionError};
pub use git::{GitBackend, GitCli};
pub use models::{
    BranchInfo, BranchKind, CommitNode, CommitRecord, GraphEdge, GraphSnapshot, RewriteMode,
    RewriteSelection, WORKING_DIRECTORY_HASH,
};
pub use session::RepoSession;
