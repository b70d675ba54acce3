//! Graph snapshot assembly

use chrono::DateTime;

use crate::models::{
    BranchInfo, CommitNode, CommitRecord, GraphEdge, GraphSnapshot, WORKING_DIRECTORY_HASH,
};

use super::colors::WORKING_DIRECTORY_COLOR;
use super::lanes::assign_lanes;

/// Assemble the final snapshot from parsed records and the branch catalog.
///
/// Edges take the child commit's color. A dirty working tree adds a
/// synthetic node on top of HEAD; without a resolvable HEAD (unborn
/// repository) the node is omitted rather than failing the build.
pub fn build_snapshot(
    records: Vec<CommitRecord>,
    branches: &[BranchInfo],
    head: Option<String>,
    working_tree_clean: bool,
) -> GraphSnapshot {
    let mut nodes = assign_lanes(records, branches);

    let mut edges: Vec<GraphEdge> = nodes
        .iter()
        .flat_map(|node| {
            node.parent_hashes.iter().map(|parent| GraphEdge {
                source: node.hash.clone(),
                target: parent.clone(),
                color: node.color.clone(),
            })
        })
        .collect();

    if !working_tree_clean {
        if let Some(head_hash) = head.as_deref() {
            let node = working_directory_node(head_hash, nodes.first());
            edges.insert(
                0,
                GraphEdge {
                    source: WORKING_DIRECTORY_HASH.to_string(),
                    target: head_hash.to_string(),
                    color: WORKING_DIRECTORY_COLOR.to_string(),
                },
            );
            nodes.insert(0, node);
        }
    }

    GraphSnapshot { nodes, edges, head }
}

/// The synthetic node for uncommitted changes, drawn above HEAD on the
/// newest commit's lane.
fn working_directory_node(head: &str, newest: Option<&CommitNode>) -> CommitNode {
    CommitNode {
        hash: WORKING_DIRECTORY_HASH.to_string(),
        parent_hashes: vec![head.to_string()],
        author: String::new(),
        date: newest
            .map(|n| n.date)
            .unwrap_or_else(|| DateTime::UNIX_EPOCH.fixed_offset()),
        message: "Uncommitted changes".to_string(),
        branches: Vec::new(),
        lane: newest.map(|n| n.lane).unwrap_or(0),
        color: WORKING_DIRECTORY_COLOR.to_string(),
    }
}
