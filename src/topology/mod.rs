//! Occlusion topology: which playfield cards physically block which.
//!
//! ## Key Types
//!
//! - `Aabb`: Card bounding box derived from position, size and anchor
//! - `OcclusionTopology`: Incrementally maintained blocking graph
//! - `CoverEntry`: Per-card blocked-by count and blocks list

pub mod geometry;
pub mod occlusion;

pub use geometry::Aabb;
pub use occlusion::{CoverEntry, OcclusionTopology};
