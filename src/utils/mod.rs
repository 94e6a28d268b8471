//! Utility functions for the segmentation pipeline
//!
//! - Region statistics (mean / standard deviation over a rectangle)
//! - Intensity quantization (mean to representable pixel value)

pub mod stats;
