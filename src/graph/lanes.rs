//! Lane and color assignment
//!
//! Commits arrive newest-first in topological order, so every commit is
//! processed before its parents. Branch tips anchor lanes (seeded from the
//! ref catalog by position) and each commit hands its lane and color down
//! to parents that have none yet. First writer wins, which keeps a branch
//! on one visual rail even through merges.

use std::collections::HashMap;

use crate::models::{BranchInfo, CommitNode, CommitRecord};

use super::colors::palette_color;

/// Place every record on a lane with a color, consuming the records.
pub fn assign_lanes(records: Vec<CommitRecord>, branches: &[BranchInfo]) -> Vec<CommitNode> {
    let mut branch_lanes: HashMap<String, usize> = branches
        .iter()
        .enumerate()
        .map(|(lane, branch)| (branch.name.clone(), lane))
        .collect();
    let branch_colors: HashMap<&str, &str> = branches
        .iter()
        .map(|branch| (branch.name.as_str(), branch.color.as_str()))
        .collect();

    let mut commit_lanes: HashMap<String, usize> = HashMap::new();
    let mut commit_colors: HashMap<String, String> = HashMap::new();
    let mut next_lane = branches.len();

    let mut nodes = Vec::with_capacity(records.len());
    for record in records {
        let lane = match commit_lanes.get(&record.hash).copied() {
            Some(lane) => lane,
            None => match record
                .decorations
                .iter()
                .find_map(|name| branch_lanes.get(name).copied())
            {
                Some(lane) => lane,
                None => {
                    // Unseen tip or detached history: open a fresh rail and
                    // register the first decorating ref on it, if any.
                    let lane = next_lane;
                    next_lane += 1;
                    if let Some(name) = record.decorations.first() {
                        branch_lanes.insert(name.clone(), lane);
                    }
                    lane
                }
            },
        };

        let color = match commit_colors.get(&record.hash).cloned() {
            Some(color) => color,
            None => record
                .decorations
                .iter()
                .find_map(|name| branch_colors.get(name.as_str()).map(|c| c.to_string()))
                .unwrap_or_else(|| palette_color(lane).to_string()),
        };

        for parent in &record.parent_hashes {
            commit_lanes.entry(parent.clone()).or_insert(lane);
            commit_colors
                .entry(parent.clone())
                .or_insert_with(|| color.clone());
        }

        nodes.push(record.into_node(lane, color));
    }

    nodes
}
