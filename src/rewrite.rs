//! Rewrite selection validation
//!
//! Squash and drop replace the branch tip, so a selection is only safe
//! when it is exactly a contiguous first-parent run starting at HEAD.
//! Anything else would need a rebase of descendants, which these
//! operations deliberately do not attempt. Validation is pure; executing
//! the rewrite is the backend's job.

use std::collections::HashSet;

use crate::error::RewriteSelectionError;
use crate::models::{RewriteMode, RewriteSelection, WORKING_DIRECTORY_HASH};

/// Check a raw selection and normalize it into an ordered rewrite plan.
///
/// `selected` may arrive in any order and may include the synthetic
/// working-directory hash, which is ignored. `first_parent` is consulted
/// only for hashes on the walk from HEAD.
pub fn validate_selection(
    selected: &[String],
    head: Option<&str>,
    working_tree_clean: bool,
    mode: RewriteMode,
    mut first_parent: impl FnMut(&str) -> Option<String>,
) -> Result<RewriteSelection, RewriteSelectionError> {
    if !working_tree_clean {
        return Err(RewriteSelectionError::DirtyWorkingTree);
    }

    let mut remaining: HashSet<&str> = selected
        .iter()
        .map(String::as_str)
        .filter(|hash| *hash != WORKING_DIRECTORY_HASH)
        .collect();
    if remaining.is_empty() {
        return Err(RewriteSelectionError::EmptySelection);
    }

    let head = head.ok_or(RewriteSelectionError::HeadUnresolved)?;
    if !remaining.contains(head) {
        return Err(RewriteSelectionError::SelectionMustIncludeHead {
            head: head.to_string(),
        });
    }

    // Walk first parents from HEAD for as long as they stay selected.
    let mut ordered = Vec::with_capacity(remaining.len());
    let mut current = head.to_string();
    let base = loop {
        remaining.remove(current.as_str());
        ordered.push(current.clone());
        match first_parent(&current) {
            Some(parent) if remaining.contains(parent.as_str()) => current = parent,
            parent => break parent,
        }
    };

    if !remaining.is_empty() {
        let mut unreached: Vec<String> = remaining.iter().map(|hash| hash.to_string()).collect();
        unreached.sort();
        return Err(RewriteSelectionError::NonContiguousSelection { unreached });
    }

    let base_hash = base.ok_or_else(|| RewriteSelectionError::CannotRewriteRootCommit {
        root: ordered.last().cloned().unwrap_or_default(),
    })?;

    if mode == RewriteMode::Squash && ordered.len() < 2 {
        return Err(RewriteSelectionError::SquashRequiresMultipleCommits {
            selected: ordered.len(),
        });
    }

    Ok(RewriteSelection {
        ordered_hashes: ordered,
        base_hash,
    })
}
