//! Rewrite operation models

use serde::{Deserialize, Serialize};

/// Which history rewrite the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RewriteMode {
    /// Collapse the selected commits into one
    Squash,
    /// Discard the selected commits entirely
    Drop,
}

/// A validated selection, proven safe to hand to the rewrite commands.
///
/// Only the validator constructs these, so holding one is the proof that
/// every precondition passed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteSelection {
    /// Selected hashes ordered newest first, starting at HEAD
    pub ordered_hashes: Vec<String>,
    /// First parent of the oldest selected commit; the reset target
    pub base_hash: String,
}

impl RewriteSelection {
    /// The oldest commit in the selection.
    pub fn oldest(&self) -> &str {
        self.ordered_hashes
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }
}
