//! Branch models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Whether a branch lives under refs/heads or refs/remotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BranchKind {
    Local,
    Remote,
}

/// One entry in the ref catalog, ordered most-recently-committed first.
///
/// The catalog position of a branch seeds its graph lane, and `color` is
/// the same value later stamped on every commit drawn in that lane.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchInfo {
    /// Short name as shown in the UI, e.g. `main` or `origin/main`
    pub name: String,
    /// Fully qualified ref, e.g. `refs/heads/main`
    pub full_ref_name: String,
    pub kind: BranchKind,
    pub is_current: bool,
    /// Subject line of the branch tip commit
    pub latest_subject: String,
    pub author: String,
    pub updated_at: DateTime<FixedOffset>,
    /// Hex color shared with the branch's lane in the graph
    pub color: String,
}

impl BranchInfo {
    pub fn is_remote(&self) -> bool {
        self.kind == BranchKind::Remote
    }
}
