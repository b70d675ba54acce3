//! Graph snapshot models

use serde::{Deserialize, Serialize};

use super::CommitNode;

/// Hash of the synthetic node representing uncommitted changes.
pub const WORKING_DIRECTORY_HASH: &str = "working-directory";

/// A parent link between two nodes, colored like its child.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    /// Child commit hash
    pub source: String,
    /// Parent commit hash
    pub target: String,
    pub color: String,
}

/// Everything the renderer needs for one frame of history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphSnapshot {
    /// Nodes in display order, newest first
    pub nodes: Vec<CommitNode>,
    pub edges: Vec<GraphEdge>,
    /// Hash of the commit HEAD points at, if any
    pub head: Option<String>,
}

impl GraphSnapshot {
    pub fn node(&self, hash: &str) -> Option<&CommitNode> {
        self.nodes.iter().find(|n| n.hash == hash)
    }

    /// Highest lane index in use, for sizing the lane gutter.
    pub fn max_lane(&self) -> usize {
        self.nodes.iter().map(|n| n.lane).max().unwrap_or(0)
    }
}
