//! Commit history graph construction
//!
//! Raw `for-each-ref` and `git log` records go in; a renderable
//! [`GraphSnapshot`](crate::models::GraphSnapshot) with stable per-branch
//! lanes and colors comes out. Everything here is pure computation over
//! already-fetched text.

pub mod builder;
pub mod colors;
pub mod lanes;
pub mod parser;
pub mod refs;

pub use builder::build_snapshot;
pub use colors::{BranchColorCache, PALETTE, WORKING_DIRECTORY_COLOR};
pub use lanes::assign_lanes;
pub use parser::parse_commits;
pub use refs::catalog_branches;
