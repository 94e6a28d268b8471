//! Core data structures
//!
//! - `GrayMatrix`: the shared grayscale intensity buffer everything operates on
//! - `Rect`: half-open rectangular coordinate ranges addressing regions of it

pub mod matrix;
pub mod rect;

pub use matrix::GrayMatrix;
pub use rect::Rect;
