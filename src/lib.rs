//! QuadSeg - Split-and-merge image segmentation
//!
//! A pure Rust implementation of region-based segmentation: a recursive
//! quadtree decomposition driven by a homogeneity test, followed by a
//! first-fit merging pass over adjacent leaf regions. Each region of the
//! image is flattened to its representative intensity, in place, with no
//! training data or external models.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Error types for input validation
pub mod error;
/// Core data structures (GrayMatrix, Rect)
pub mod models;
/// Splitting and merging passes
pub mod segmenter;
/// Region statistics helpers
pub mod utils;

pub use error::{Result, SegmentError};
pub use models::{GrayMatrix, Rect};
pub use segmenter::quadtree::RegionNode;

use log::debug;
use rayon::prelude::*;
use segmenter::{merge, quadtree};

/// Segment a grayscale image in place
///
/// Splits the image into a quadtree of regions whose standard deviation is
/// at most `stddev_max`, then merges adjacent homogeneous leaves and
/// rewrites every region with its group's representative intensity. The
/// input buffer is mutated; dimensions and sample type are unchanged.
///
/// # Arguments
/// * `image` - Grayscale intensity buffer, modified in place
/// * `stddev_max` - Homogeneity threshold (maximum standard deviation for a
///   region to count as uniform); must be finite and non-negative
///
/// # Errors
/// [`SegmentError::EmptyImage`] for a zero-area image,
/// [`SegmentError::InvalidThreshold`] for a negative or non-finite threshold.
/// Validation happens before any recursion.
///
/// # Example
/// ```
/// use quadseg::GrayMatrix;
///
/// let mut image = GrayMatrix::from_raw(2, 2, vec![0, 1, 2, 3]).unwrap();
/// quadseg::segment(&mut image, 10.0).unwrap();
/// assert_eq!(image.as_bytes(), &[2, 2, 2, 2]);
/// ```
pub fn segment(image: &mut GrayMatrix, stddev_max: f64) -> Result<()> {
    if image.width() == 0 || image.height() == 0 {
        return Err(SegmentError::EmptyImage {
            width: image.width(),
            height: image.height(),
        });
    }
    if !stddev_max.is_finite() || stddev_max < 0.0 {
        return Err(SegmentError::InvalidThreshold(stddev_max));
    }

    // Step 1: recursive quadtree split, flattening leaves to their means
    let full = Rect::full(image.width(), image.height());
    let tree = quadtree::split(image, full, stddev_max);

    // Step 2: deterministic pre-order leaf collection
    let leaves = tree.leaves();
    debug!(
        "split {}x{} image into {} leaves",
        image.width(),
        image.height(),
        leaves.len()
    );

    // Step 3: first-fit merge of adjacent homogeneous leaves
    merge::merge_leaves(image, &leaves, stddev_max);

    Ok(())
}

/// Segment independent images in parallel
///
/// Each buffer is segmented exactly as by [`segment`]; calls share no state,
/// so they run concurrently on the rayon thread pool. The per-image
/// algorithm stays single-threaded and deterministic.
pub fn segment_batch(images: &mut [GrayMatrix], stddev_max: f64) -> Result<()> {
    images
        .par_iter_mut()
        .try_for_each(|image| segment(image, stddev_max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_image() {
        let mut m = GrayMatrix::new(0, 5);
        assert_eq!(
            segment(&mut m, 1.0),
            Err(SegmentError::EmptyImage {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn test_rejects_bad_threshold() {
        let mut m = GrayMatrix::new(2, 2);
        assert_eq!(
            segment(&mut m, -1.0),
            Err(SegmentError::InvalidThreshold(-1.0))
        );
        assert!(segment(&mut m, f64::NAN).is_err());
        assert!(segment(&mut m, f64::INFINITY).is_err());
        assert!(segment(&mut m, 0.0).is_ok());
    }

    #[test]
    fn test_segment_batch_matches_sequential() {
        let a = GrayMatrix::from_raw(2, 2, vec![0, 1, 2, 3]).unwrap();
        let b = GrayMatrix::from_raw(3, 3, (0..9).collect()).unwrap();

        let mut batch = [a.clone(), b.clone()];
        segment_batch(&mut batch, 10.0).unwrap();

        let (mut sa, mut sb) = (a, b);
        segment(&mut sa, 10.0).unwrap();
        segment(&mut sb, 10.0).unwrap();
        assert_eq!(batch[0], sa);
        assert_eq!(batch[1], sb);
    }

    #[test]
    fn test_segment_batch_propagates_errors() {
        let mut batch = [GrayMatrix::new(2, 2), GrayMatrix::new(0, 0)];
        assert!(segment_batch(&mut batch, 1.0).is_err());
    }
}
