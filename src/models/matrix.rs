use crate::models::Rect;
use image::GrayImage;

/// Row-major grayscale intensity buffer
///
/// All segmentation operations read and write this one shared storage;
/// regions are addressed with [`Rect`] coordinate ranges rather than copies,
/// so a region write is immediately visible through the owning matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayMatrix {
    /// Create a zero-filled matrix with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height],
        }
    }

    /// Create a matrix from raw row-major bytes
    ///
    /// Returns `None` if `data.len() != width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Create a matrix from an 8-bit grayscale `image` buffer
    pub fn from_luma8(image: &GrayImage) -> Self {
        Self {
            width: image.width() as usize,
            height: image.height() as usize,
            data: image.as_raw().clone(),
        }
    }

    /// Convert into an 8-bit grayscale `image` buffer
    pub fn into_luma8(self) -> GrayImage {
        GrayImage::from_raw(self.width as u32, self.height as u32, self.data)
            .expect("GrayMatrix holds width * height bytes")
    }

    /// Matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get intensity at (x, y); 0 when out of bounds
    pub fn get(&self, x: usize, y: usize) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y * self.width + x]
    }

    /// Set intensity at (x, y); ignored when out of bounds
    pub fn set(&mut self, x: usize, y: usize, value: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Row `y` as a slice
    pub fn row(&self, y: usize) -> &[u8] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Row `y` as a mutable slice
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        &mut self.data[y * self.width..(y + 1) * self.width]
    }

    /// Fill a rectangular region in place with a constant intensity
    ///
    /// The rectangle is clipped to the matrix bounds.
    pub fn fill_rect(&mut self, rect: Rect, value: u8) {
        let right = rect.right.min(self.width);
        let left = rect.left.min(right);
        let top = rect.top.min(self.height);
        for y in rect.bottom..top {
            self.row_mut(y)[left..right].fill(value);
        }
    }

    /// Raw bytes in row-major order
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the matrix and return its raw bytes
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
