//! Commit models

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A commit as parsed from `git log`, before lane assignment.
///
/// Records carry no lane or color on purpose: those exist only on
/// [`CommitNode`], so a commit cannot reach the renderer half-placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub hash: String,
    /// Parent hashes in order; first entry is the first parent
    pub parent_hashes: Vec<String>,
    pub author: String,
    pub date: DateTime<FixedOffset>,
    pub subject: String,
    /// Short ref names decorating this commit, e.g. `main`, `origin/main`
    pub decorations: Vec<String>,
}

/// A fully placed commit, ready to render.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitNode {
    pub hash: String,
    pub parent_hashes: Vec<String>,
    pub author: String,
    pub date: DateTime<FixedOffset>,
    pub message: String,
    /// Branch names whose tips sit on this commit
    pub branches: Vec<String>,
    /// Horizontal track index, 0 = leftmost
    pub lane: usize,
    pub color: String,
}

impl CommitRecord {
    /// Consume the record into a node once its lane and color are known.
    pub fn into_node(self, lane: usize, color: String) -> CommitNode {
        CommitNode {
            hash: self.hash,
            parent_hashes: self.parent_hashes,
            author: self.author,
            date: self.date,
            message: self.subject,
            branches: self.decorations,
            lane,
            color,
        }
    }
}
