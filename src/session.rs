//! Per-repository engine session

use crate::error::{Result, RewriteSelectionError};
use crate::git::GitBackend;
use crate::graph::{build_snapshot, catalog_branches, parse_commits, BranchColorCache};
use crate::models::{BranchInfo, GraphSnapshot, RewriteMode, RewriteSelection};
use crate::rewrite::validate_selection;

/// One open repository: a backend plus the branch color cache that keeps
/// colors stable across refreshes.
///
/// Graph-building methods take `&mut self`, so the borrow checker
/// serializes refreshes of the same session. Opening another repository
/// means constructing a new session.
pub struct RepoSession<G: GitBackend> {
    git: G,
    colors: BranchColorCache,
}

impl<G: GitBackend> RepoSession<G> {
    pub fn new(git: G) -> Self {
        RepoSession {
            git,
            colors: BranchColorCache::new(),
        }
    }

    /// Rebuild the renderable graph over the newest `limit` commits.
    pub fn build_graph(&mut self, limit: usize) -> Result<GraphSnapshot> {
        let branches = self.catalog()?;
        let raw_log = self.git.log_commits(limit)?;
        let records = parse_commits(&raw_log);
        let head = self.git.current_head();
        // Unknown status degrades to a plain graph without the synthetic node.
        let clean = self.git.working_tree_clean().unwrap_or(true);
        Ok(build_snapshot(records, &branches, head, clean))
    }

    /// Current branch catalog, most recently committed first.
    pub fn list_branches(&mut self) -> Result<Vec<BranchInfo>> {
        self.catalog()
    }

    fn catalog(&mut self) -> Result<Vec<BranchInfo>> {
        let raw_refs = self.git.list_refs()?;
        let current = self.git.current_branch();
        Ok(catalog_branches(
            &raw_refs,
            current.as_deref(),
            &mut self.colors,
        ))
    }

    /// Check a raw selection against the live repository state.
    ///
    /// Unknown working-tree status refuses the rewrite here, the opposite
    /// of the build-time policy: degrading a drawing is fine, degrading a
    /// history rewrite is not.
    pub fn validate_rewrite_selection(
        &self,
        selected: &[String],
        mode: RewriteMode,
    ) -> std::result::Result<RewriteSelection, RewriteSelectionError> {
        let head = self.git.current_head();
        let clean = self.git.working_tree_clean().unwrap_or(false);
        validate_selection(selected, head.as_deref(), clean, mode, |hash| {
            self.git.first_parent(hash)
        })
    }

    /// Validate and squash in one step; the backend never sees a selection
    /// that did not pass validation. Returns the new HEAD hash.
    pub fn squash_selected(&mut self, selected: &[String], message: &str) -> Result<String> {
        let selection = self.validate_rewrite_selection(selected, RewriteMode::Squash)?;
        tracing::debug!(
            "squashing {} commits onto {}",
            selection.ordered_hashes.len(),
            selection.base_hash
        );
        self.git.squash(&selection, message)
    }

    /// Validate and drop in one step. Returns the new HEAD hash.
    pub fn drop_selected(&mut self, selected: &[String]) -> Result<String> {
        let selection = self.validate_rewrite_selection(selected, RewriteMode::Drop)?;
        tracing::debug!(
            "dropping {} commits, resetting to {}",
            selection.ordered_hashes.len(),
            selection.base_hash
        );
        self.git.drop_commits(&selection)
    }

    /// Forget cached colors, for callers that reuse a session against
    /// rewritten or unrelated history.
    pub fn reset_colors(&mut self) {
        self.colors.reset();
    }
}
