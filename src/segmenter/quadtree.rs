//! Recursive quadtree splitting and leaf collection
//!
//! `split` decomposes a region until every terminal node passes the
//! homogeneity test (or is too small to subdivide), flattening each leaf to
//! its rounded mean in place. `RegionNode::leaves` then yields the terminal
//! regions in the fixed traversal order the merger depends on.

use crate::models::{GrayMatrix, Rect};
use crate::utils::stats::{quantize, region_mean_stddev};

/// One node of the quadtree built over the shared intensity buffer
///
/// The node stores the statistics of its region's original samples, captured
/// before the leaf fill, together with the region's absolute bounds. A split
/// node owns exactly four children that partition its rectangle in the fixed
/// order top-left, top-right, bottom-left, bottom-right.
#[derive(Debug, Clone)]
pub struct RegionNode {
    /// Absolute bounds of the region in the image
    pub rect: Rect,
    /// Mean of the region's samples at split time
    pub mean: f64,
    /// Population standard deviation of the region's samples at split time
    pub stddev: f64,
    children: Option<Box<[RegionNode; 4]>>,
}

impl RegionNode {
    /// Construct a standalone leaf node from precomputed statistics
    pub fn leaf(rect: Rect, mean: f64, stddev: f64) -> Self {
        Self {
            rect,
            mean,
            stddev,
            children: None,
        }
    }

    /// True if the node was not subdivided
    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// The four children of a split node
    pub fn children(&self) -> Option<&[RegionNode; 4]> {
        self.children.as_deref()
    }

    /// Terminal regions in pre-order, children visited in quadrant order
    ///
    /// This order is observable: it decides which group a leaf is offered to
    /// first during merging, so it must stay exactly reproducible.
    pub fn leaves(&self) -> Vec<&RegionNode> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a RegionNode>) {
        match &self.children {
            None => out.push(self),
            Some(children) => {
                for child in children.iter() {
                    child.collect_leaves(out);
                }
            }
        }
    }
}

/// Recursively split a region by the homogeneity test
///
/// A region becomes a leaf when its standard deviation is at most
/// `stddev_max`, or when its width or height drops below 2 and it cannot be
/// subdivided further. Leaves are flattened in place to their rounded mean;
/// recursion depth is bounded by log2 of the smaller image dimension.
pub fn split(image: &mut GrayMatrix, rect: Rect, stddev_max: f64) -> RegionNode {
    let (mean, stddev) = region_mean_stddev(image, rect);

    if stddev <= stddev_max || rect.width() < 2 || rect.height() < 2 {
        image.fill_rect(rect, quantize(mean));
        return RegionNode::leaf(rect, mean, stddev);
    }

    let children = rect.quadrants().map(|q| split(image, q, stddev_max));
    RegionNode {
        rect,
        mean,
        stddev,
        children: Some(Box::new(children)),
    }
}
