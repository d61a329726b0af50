//! Pixel-space geometry: read windows and sample-grid sizes.

use serde::{Deserialize, Serialize};

/// A rectangular window in source-pixel coordinates.
///
/// The origin may be negative while a candidate window is being classified
/// against the dataset bounds; a window handed to a dataset reader is always
/// clipped to non-negative coordinates first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i64,
    pub y: i64,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: i64, y: i64, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// True if the window covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i64 {
        self.x + self.width as i64
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i64 {
        self.y + self.height as i64
    }

    /// The size of this window as a sample-grid size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Clip this window to `[0, width) x [0, height)`.
    ///
    /// Returns `None` when nothing remains inside the bounds.
    pub fn clip_to(&self, width: usize, height: usize) -> Option<Rect> {
        let x0 = self.x.max(0);
        let y0 = self.y.max(0);
        let x1 = self.right().min(width as i64);
        let y1 = self.bottom().min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(Rect::new(
            x0,
            y0,
            (x1 - x0) as usize,
            (y1 - y0) as usize,
        ))
    }

    /// True if the window lies entirely within `[0, width) x [0, height)`.
    pub fn within(&self, width: usize, height: usize) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.right() <= width as i64
            && self.bottom() <= height as i64
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Dimensions of a sample grid or tile, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// A square size, used for tiles.
    pub fn square(side: usize) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Number of pixels covered.
    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_right_edge() {
        // Window straddling the right edge of a 1000x1000 raster.
        let window = Rect::new(600, 0, 600, 600);
        let clipped = window.clip_to(1000, 1000).unwrap();
        assert_eq!(clipped, Rect::new(600, 0, 400, 600));
    }

    #[test]
    fn clip_negative_origin() {
        let window = Rect::new(-200, -100, 600, 600);
        let clipped = window.clip_to(1000, 1000).unwrap();
        assert_eq!(clipped, Rect::new(0, 0, 400, 500));
    }

    #[test]
    fn clip_window_larger_than_raster() {
        // Both edges clip on the same axis; the result never exceeds bounds.
        let window = Rect::new(-100, -100, 1200, 1200);
        let clipped = window.clip_to(1000, 1000).unwrap();
        assert_eq!(clipped, Rect::new(0, 0, 1000, 1000));
    }

    #[test]
    fn clip_no_overlap_is_none() {
        assert!(Rect::new(-600, 0, 600, 600).clip_to(1000, 1000).is_none());
        assert!(Rect::new(1000, 0, 600, 600).clip_to(1000, 1000).is_none());
    }

    #[test]
    fn within_bounds() {
        assert!(Rect::new(0, 0, 1000, 1000).within(1000, 1000));
        assert!(!Rect::new(600, 0, 600, 600).within(1000, 1000));
        assert!(!Rect::new(-1, 0, 10, 10).within(1000, 1000));
    }
}
