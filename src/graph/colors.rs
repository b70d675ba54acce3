//! Branch color palette and the per-session color cache

use std::collections::HashMap;

/// Colors handed out to branches in catalog order, cycled when exhausted.
/// Mirrored by the frontend theme.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", // blue
    "#10b981", // emerald
    "#f59e0b", // amber
    "#ef4444", // red
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#14b8a6", // teal
    "#f97316", // orange
    "#06b6d4", // cyan
    "#84cc16", // lime
];

/// Color of the synthetic working-directory node.
pub const WORKING_DIRECTORY_COLOR: &str = "#8b949e";

/// Palette color for a lane or catalog index.
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Remembers the color each branch name received so refreshes keep a
/// branch on its color even when its catalog position shifts.
#[derive(Debug, Default)]
pub struct BranchColorCache {
    assigned: HashMap<String, &'static str>,
}

impl BranchColorCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Color for `name`, assigning `PALETTE[index % len]` on first sight.
    pub fn color_for(&mut self, name: &str, index: usize) -> &'static str {
        if let Some(color) = self.assigned.get(name).copied() {
            return color;
        }
        let color = palette_color(index);
        self.assigned.insert(name.to_string(), color);
        color
    }

    /// Forget every assignment, for reuse against different history.
    pub fn reset(&mut self) {
        self.assigned.clear();
    }
}
