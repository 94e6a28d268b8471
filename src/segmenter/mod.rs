//! Split-and-merge segmentation
//!
//! The two halves of the algorithm:
//! - Quadtree splitting (recursive decomposition by the homogeneity test,
//!   deterministic leaf collection)
//! - Region merging (first-fit clustering of adjacent homogeneous leaves,
//!   in-place flattening to group representative values)

/// Quadtree construction and leaf collection
pub mod quadtree;
/// First-fit clustering of adjacent leaves and write-back
pub mod merge;
