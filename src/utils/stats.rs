//! Region statistics over the shared intensity buffer
//!
//! Sums are accumulated as integers in row-major order, so the mean and
//! standard deviation of a region are exact and bit-identical across runs
//! and platforms.

use crate::models::{GrayMatrix, Rect};

/// Mean and population standard deviation of a region's samples
///
/// The rectangle must be non-empty and lie inside the matrix.
pub fn region_mean_stddev(image: &GrayMatrix, rect: Rect) -> (f64, f64) {
    let mut sum = 0u64;
    let mut sum_sq = 0u64;
    for y in rect.bottom..rect.top {
        for &v in &image.row(y)[rect.left..rect.right] {
            let v = v as u64;
            sum += v;
            sum_sq += v * v;
        }
    }

    let n = rect.area() as f64;
    let mean = sum as f64 / n;
    let variance = sum_sq as f64 / n - mean * mean;
    // tiny negative variance can fall out of the subtraction
    (mean, variance.max(0.0).sqrt())
}

/// Round a mean to the nearest representable intensity, ties to even
pub fn quantize(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_stddev_known_values() {
        let m = GrayMatrix::from_raw(2, 2, vec![0, 1, 2, 3]).unwrap();
        let (mean, stddev) = region_mean_stddev(&m, Rect::full(2, 2));
        assert_eq!(mean, 1.5);
        assert_eq!(stddev, 1.25f64.sqrt());
    }

    #[test]
    fn test_constant_region_has_zero_stddev() {
        let m = GrayMatrix::from_raw(3, 1, vec![77, 77, 77]).unwrap();
        let (mean, stddev) = region_mean_stddev(&m, Rect::full(3, 1));
        assert_eq!(mean, 77.0);
        assert_eq!(stddev, 0.0);
    }

    #[test]
    fn test_single_pixel() {
        let m = GrayMatrix::from_raw(2, 2, vec![9, 8, 7, 6]).unwrap();
        let (mean, stddev) = region_mean_stddev(&m, Rect::new(1, 2, 1, 2));
        assert_eq!(mean, 6.0);
        assert_eq!(stddev, 0.0);
    }

    #[test]
    fn test_sub_rectangle() {
        // 3x3, statistics over the right 2x2 block {4,5,7,8}
        let m = GrayMatrix::from_raw(3, 3, (0..9).collect()).unwrap();
        let (mean, stddev) = region_mean_stddev(&m, Rect::new(1, 3, 1, 3));
        assert_eq!(mean, 6.0);
        assert_eq!(stddev, 2.5f64.sqrt());
    }

    #[test]
    fn test_quantize_ties_to_even() {
        assert_eq!(quantize(1.5), 2);
        assert_eq!(quantize(2.5), 2);
        assert_eq!(quantize(4.5), 4);
        assert_eq!(quantize(4.51), 5);
        assert_eq!(quantize(-0.4), 0);
        assert_eq!(quantize(255.9), 255);
    }
}
