use crate::geometry::PageGeometry;

/// Mutable layout position as a value type: column, row, and 1-based page.
///
/// Row 0 is the topmost visual row; pages fill row-major, left to right,
/// top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub col: u32,
    pub row: u32,
    pub page: u32,
}

impl Cursor {
    pub fn start() -> Self {
        Self {
            col: 0,
            row: 0,
            page: 1,
        }
    }

    /// The successor state after placing one image at `self`.
    #[must_use]
    pub fn advance(self, geometry: &PageGeometry) -> Self {
        let mut next = self;
        next.col += 1;
        if next.col >= geometry.cols {
            next.col = 0;
            next.row += 1;
        }
        if next.row >= geometry.rows {
            next.row = 0;
            next.page += 1;
        }
        next
    }
}
