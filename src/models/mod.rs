//! Data models for Mizzen

pub mod branch;
pub mod commit;
pub mod graph;
pub mod rewrite;

pub use branch::*;
pub use commit::*;
pub use graph::*;
pub use rewrite::*;
