/// Half-open rectangular region in image coordinates
///
/// Columns span `left..right`, rows span `bottom..top`; rows grow downward,
/// so `bottom` is the first row and `top` is one past the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// First column
    pub left: usize,
    /// One past the last column
    pub right: usize,
    /// First row
    pub bottom: usize,
    /// One past the last row
    pub top: usize,
}

impl Rect {
    /// Create a new rectangle from column and row bounds
    pub fn new(left: usize, right: usize, bottom: usize, top: usize) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Rectangle covering a full `width` x `height` image
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, width, 0, height)
    }

    /// Width in pixels
    pub fn width(&self) -> usize {
        self.right.saturating_sub(self.left)
    }

    /// Height in pixels
    pub fn height(&self) -> usize {
        self.top.saturating_sub(self.bottom)
    }

    /// Number of pixels covered
    pub fn area(&self) -> usize {
        self.width() * self.height()
    }

    /// True if the rectangle covers no pixels
    pub fn is_empty(&self) -> bool {
        self.area() == 0
    }

    /// Subdivide into four quadrants: top-left, top-right, bottom-left,
    /// bottom-right. Dimensions are halved with integer division, so for odd
    /// sizes the extra row/column lands in the second half along that axis.
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid_x = self.left + self.width() / 2;
        let mid_y = self.bottom + self.height() / 2;
        [
            Rect::new(self.left, mid_x, self.bottom, mid_y),
            Rect::new(mid_x, self.right, self.bottom, mid_y),
            Rect::new(self.left, mid_x, mid_y, self.top),
            Rect::new(mid_x, self.right, mid_y, self.top),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(1, 4, 2, 3);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 1);
        assert_eq!(r.area(), 3);
        assert!(!r.is_empty());
        assert!(Rect::new(2, 2, 0, 5).is_empty());
    }

    #[test]
    fn test_quadrants_even() {
        let [tl, tr, bl, br] = Rect::full(4, 4).quadrants();
        assert_eq!(tl, Rect::new(0, 2, 0, 2));
        assert_eq!(tr, Rect::new(2, 4, 0, 2));
        assert_eq!(bl, Rect::new(0, 2, 2, 4));
        assert_eq!(br, Rect::new(2, 4, 2, 4));
    }

    #[test]
    fn test_quadrants_odd_remainder_in_second_half() {
        let [tl, tr, bl, br] = Rect::full(3, 5).quadrants();
        assert_eq!(tl, Rect::new(0, 1, 0, 2));
        assert_eq!(tr, Rect::new(1, 3, 0, 2));
        assert_eq!(bl, Rect::new(0, 1, 2, 5));
        assert_eq!(br, Rect::new(1, 3, 2, 5));
        // quadrants exactly partition the parent
        let total: usize = [tl, tr, bl, br].iter().map(|q| q.area()).sum();
        assert_eq!(total, 15);
    }

    #[test]
    fn test_quadrants_offset_parent() {
        let [tl, _, _, br] = Rect::new(2, 6, 4, 8).quadrants();
        assert_eq!(tl, Rect::new(2, 4, 4, 6));
        assert_eq!(br, Rect::new(4, 6, 6, 8));
    }
}
