//! Viewport management for scrolling.
//!
//! The [`Viewport`] struct tracks the visible window of the document and
//! scrolls just enough to keep the caret line on screen.

use std::ops::Range;

/// Manages the visible portion of a document.
///
/// The viewport tracks:
/// - Terminal dimensions (width, height)
/// - Current scroll offset (in lines)
/// - Total document length
///
/// # Example
///
/// ```
/// use caretpad::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(80, 24, 100);
/// assert_eq!(vp.visible_range(), 0..24);
///
/// vp.reveal(30);
/// assert_eq!(vp.visible_range(), 7..31);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    width: u16,
    height: u16,
    offset: usize,
    total_lines: usize,
}

impl Viewport {
    /// Create a new viewport.
    ///
    /// # Arguments
    ///
    /// * `width` - Terminal width in columns
    /// * `height` - Terminal height in lines (for document area)
    /// * `total_lines` - Total lines in the document
    pub const fn new(width: u16, height: u16, total_lines: usize) -> Self {
        Self {
            width,
            height,
            offset: 0,
            total_lines,
        }
    }

    /// Get the current scroll offset.
    pub const fn offset(&self) -> usize {
        self.offset
    }

    /// Get the viewport width.
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the viewport height.
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the total number of lines in the document.
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Get the range of visible lines.
    ///
    /// Returns a range from the current offset to offset + height,
    /// clamped to the document bounds.
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.offset;
        let end = (self.offset + self.height as usize).min(self.total_lines);
        start..end
    }

    /// Scroll the minimum amount needed for `line` to be visible.
    pub fn reveal(&mut self, line: usize) {
        let height = (self.height as usize).max(1);
        if line < self.offset {
            self.offset = line;
        } else if line >= self.offset + height {
            self.offset = line + 1 - height;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Resize the viewport.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        // Clamp offset if document is now shorter than viewport
        self.offset = self.offset.min(self.max_offset());
    }

    /// Update the total number of lines (e.g., after an edit).
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.offset = self.offset.min(self.max_offset());
    }

    /// Calculate the maximum valid offset.
    pub const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_viewport_starts_at_top() {
        let vp = Viewport::new(80, 24, 100);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_visible_range_with_short_document() {
        let vp = Viewport::new(80, 24, 10);
        assert_eq!(vp.visible_range(), 0..10);
    }

    #[test]
    fn test_reveal_visible_line_does_not_scroll() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.reveal(23);
        assert_eq!(vp.offset(), 0);
    }

    #[test]
    fn test_reveal_below_scrolls_line_to_bottom() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.reveal(24);
        assert_eq!(vp.offset(), 1);
        assert_eq!(vp.visible_range(), 1..25);
    }

    #[test]
    fn test_reveal_above_scrolls_line_to_top() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.reveal(60);
        vp.reveal(10);
        assert_eq!(vp.offset(), 10);
    }

    #[test]
    fn test_reveal_with_zero_height() {
        let mut vp = Viewport::new(80, 0, 5);
        vp.reveal(3);
        assert_eq!(vp.offset(), 3);
    }

    #[test]
    fn test_set_total_lines_adjusts_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.reveal(99);
        vp.set_total_lines(50);
        assert_eq!(vp.offset(), 26); // max_offset is now 26
    }

    #[test]
    fn test_resize_keeps_valid_offset() {
        let mut vp = Viewport::new(80, 24, 100);
        vp.reveal(73);
        vp.resize(80, 60);
        assert_eq!(vp.offset(), 40); // max_offset is now 40
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn reveal_makes_line_visible(
                total_lines in 1..10000usize,
                height in 1..100u16,
                start in 0..10000usize,
                target in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                vp.reveal(start % total_lines);
                let line = target % total_lines;
                vp.reveal(line);

                prop_assert!(vp.visible_range().contains(&line));
                prop_assert!(vp.offset() <= vp.max_offset());
            }

            #[test]
            fn visible_range_within_bounds(
                total_lines in 0..10000usize,
                height in 1..100u16,
                line in 0..10000usize,
            ) {
                let mut vp = Viewport::new(80, height, total_lines);
                vp.reveal(line);

                let range = vp.visible_range();
                prop_assert!(range.start <= range.end);
                prop_assert!(range.end <= total_lines);
            }
        }
    }
}
