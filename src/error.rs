use thiserror::Error;

/// Result type for segmentation operations
pub type Result<T> = std::result::Result<T, SegmentError>;

/// Errors reported before any segmentation work starts
///
/// Both variants are raised by input validation; once splitting begins the
/// algorithm cannot fail (the size guard keeps every sub-rectangle in
/// bounds).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SegmentError {
    /// The image has no pixels to segment
    #[error("image has zero area: {width}x{height}")]
    EmptyImage {
        /// Image width in pixels
        width: usize,
        /// Image height in pixels
        height: usize,
    },

    /// The homogeneity threshold is negative or not a finite number
    #[error("invalid stddev threshold: {0} (must be finite and non-negative)")]
    InvalidThreshold(f64),
}
