//! First-fit merging of adjacent homogeneous leaves
//!
//! Leaves are processed in collection order and clustered into an ordered
//! list of ordered groups. The scan order is part of the algorithm's output
//! contract: a leaf joins the first group, in creation order, whose earliest
//! accepting member it reaches, so the grouping must not be replaced by a
//! faster equivalent with a different tie-break.

use crate::models::{GrayMatrix, Rect};
use crate::segmenter::quadtree::RegionNode;
use crate::utils::stats::quantize;
use log::debug;

/// Coordinate adjacency test between two regions
///
/// Two regions are neighbours when one's bound equals the other's opposite
/// bound on any axis. This compares single coordinate values, not boundary
/// segments, so regions that only share a coordinate value without touching
/// also count as neighbours. The over-approximation is intentional and part
/// of the output contract; see DESIGN.md.
pub fn is_neighbour(a: &Rect, b: &Rect) -> bool {
    a.left == b.right || a.bottom == b.top || a.right == b.left || a.top == b.bottom
}

/// True when two leaves may share a group: both homogeneous under the
/// threshold and coordinate-adjacent
fn can_merge(a: &RegionNode, b: &RegionNode, stddev_max: f64) -> bool {
    a.stddev <= stddev_max && b.stddev <= stddev_max && is_neighbour(&a.rect, &b.rect)
}

/// Cluster leaves into merge-groups and flatten each group in place
///
/// Every input leaf's region is rewritten with its group's representative
/// value: the unweighted arithmetic mean of the member leaf means, rounded
/// once. Small and large regions contribute equally.
pub fn merge_leaves(image: &mut GrayMatrix, leaves: &[&RegionNode], stddev_max: f64) {
    let mut groups: Vec<Vec<usize>> = Vec::new();

    for (i, leaf) in leaves.iter().enumerate() {
        let mut placed = false;
        'groups: for group in groups.iter_mut() {
            for &member in group.iter() {
                if can_merge(leaves[member], leaf, stddev_max) {
                    // first-fit: stop at the first accepting member
                    group.push(i);
                    placed = true;
                    break 'groups;
                }
            }
        }
        if !placed {
            groups.push(vec![i]);
        }
    }

    debug!("merged {} leaves into {} groups", leaves.len(), groups.len());

    for group in &groups {
        let sum: f64 = group.iter().map(|&i| leaves[i].mean).sum();
        let value = quantize(sum / group.len() as f64);
        for &i in group {
            image.fill_rect(leaves[i].rect, value);
        }
    }
}
