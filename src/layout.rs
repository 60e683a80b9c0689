//! Fixed-column layout rule.
//!
//! Elements are laid out left to right, each taking its declared column
//! width and the full allotted height. Applied identically to the header
//! line and every body line, which is what keeps the columns aligned.

use ratatui::layout::Rect;

/// Positions a line of elements against a fixed sequence of column widths.
#[derive(Debug, Clone, Copy)]
pub struct FixedColumnLayout<'a> {
    widths: &'a [u16],
}

impl<'a> FixedColumnLayout<'a> {
    pub fn new(widths: &'a [u16]) -> Self {
        Self { widths }
    }

    /// Assigns element *i* the width `widths[i]`, the given height, and an
    /// x offset equal to the sum of all preceding widths. Elements beyond
    /// the declared width count are not positioned; the returned vector is
    /// simply shorter than `element_count`.
    pub fn positions(&self, origin: Rect, element_count: usize) -> Vec<Rect> {
        let mut x = origin.x;
        let mut rects = Vec::with_capacity(element_count.min(self.widths.len()));
        for &width in self.widths.iter().take(element_count) {
            rects.push(Rect {
                x,
                y: origin.y,
                width,
                height: origin.height,
            });
            x = x.saturating_add(width);
        }
        rects
    }

    /// Minimum size of the whole line: the sum of the declared widths that
    /// are actually consumed, by the tallest positioned element.
    pub fn min_size(&self, element_min_heights: &[u16]) -> (u16, u16) {
        let mut total_width: u16 = 0;
        let mut max_height: u16 = 0;
        for (&width, &height) in self.widths.iter().zip(element_min_heights) {
            total_width = total_width.saturating_add(width);
            max_height = max_height.max(height);
        }
        (total_width, max_height)
    }
}
