//! Git execution layer

pub mod cli;

pub use cli::GitCli;

use crate::error::Result;
use crate::models::RewriteSelection;

/// The narrow surface the engine needs from a git implementation.
///
/// Read methods return raw porcelain lines; the engine owns all parsing.
/// The `Option` returns are best-effort queries where failure degrades a
/// feature instead of aborting a build.
pub trait GitBackend {
    /// Per-ref records sorted by descending commit date, covering local
    /// and remote branches.
    fn list_refs(&self) -> Result<Vec<String>>;

    /// Short name of the checked-out branch; None when detached or unborn.
    fn current_branch(&self) -> Option<String>;

    /// Per-commit records, topologically ordered newest first.
    fn log_commits(&self, limit: usize) -> Result<Vec<String>>;

    /// Hash HEAD resolves to; None when unborn.
    fn current_head(&self) -> Option<String>;

    /// Whether the working tree has no pending changes; None when status
    /// cannot be determined.
    fn working_tree_clean(&self) -> Option<bool>;

    /// First parent of `hash`; None for a root commit.
    fn first_parent(&self, hash: &str) -> Option<String>;

    /// Collapse a validated selection into one commit carrying `message`.
    /// Returns the new HEAD hash.
    fn squash(&self, selection: &RewriteSelection, message: &str) -> Result<String>;

    /// Discard a validated selection entirely. Returns the new HEAD hash.
    fn drop_commits(&self, selection: &RewriteSelection) -> Result<String>;
}
