use crate::LayoutError;
use crate::config::{LayoutConfig, Placement};
use crate::cursor::Cursor;
use log::debug;
use proxyprint_types::{Rect, Size};

/// Immutable page geometry, computed once per run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub scaled: Size,
    pub cols: u32,
    pub rows: u32,
    /// Left edge of column 0.
    pub offset_x: f32,
    /// Distance from the top page edge to the top of row 0.
    pub offset_y: f32,
    pub page: Size,
}

impl PageGeometry {
    pub fn compute(config: &LayoutConfig) -> Result<Self, LayoutError> {
        if !(config.scale > 0.0 && config.scale <= 1.0) {
            return Err(LayoutError::InvalidScale(config.scale));
        }
        if config.margin < 0.0 {
            return Err(LayoutError::NegativeMargin(config.margin));
        }

        let scaled = Size::new(
            config.card.width * config.scale,
            config.card.height * config.scale,
        );

        let (cols, rows, offset_x, offset_y) = match config.placement {
            Placement::MarginAnchored => {
                let cols = grid_count(config.page.width - 2.0 * config.margin, scaled.width);
                let rows = grid_count(config.page.height - 2.0 * config.margin, scaled.height);
                (cols, rows, config.margin, config.margin)
            }
            Placement::Centered => {
                // The grid spans the full page; the leftover is split evenly
                // and must still clear the margin on both axes.
                let cols = grid_count(config.page.width, scaled.width);
                let rows = grid_count(config.page.height, scaled.height);
                let offset_x = (config.page.width - scaled.width * cols as f32) / 2.0;
                let offset_y = (config.page.height - scaled.height * rows as f32) / 2.0;
                if offset_x < config.margin {
                    return Err(LayoutError::CenteringOverflow {
                        axis: "horizontal",
                        offset: offset_x,
                        margin: config.margin,
                    });
                }
                if offset_y < config.margin {
                    return Err(LayoutError::CenteringOverflow {
                        axis: "vertical",
                        offset: offset_y,
                        margin: config.margin,
                    });
                }
                (cols, rows, offset_x, offset_y)
            }
        };

        if cols == 0 {
            return Err(LayoutError::NoCellsFit {
                axis: "horizontal",
                scaled: scaled.width,
                available: config.page.width - 2.0 * config.margin,
            });
        }
        if rows == 0 {
            return Err(LayoutError::NoCellsFit {
                axis: "vertical",
                scaled: scaled.height,
                available: config.page.height - 2.0 * config.margin,
            });
        }

        debug!(
            "page geometry: {cols}x{rows} cells of {:.1}x{:.1}pt, offsets ({offset_x:.1}, {offset_y:.1})pt",
            scaled.width, scaled.height
        );

        Ok(Self {
            scaled,
            cols,
            rows,
            offset_x,
            offset_y,
            page: config.page,
        })
    }

    pub fn cells_per_page(&self) -> u32 {
        self.cols * self.rows
    }

    /// The cell rectangle under `cursor`, in bottom-left PDF coordinates.
    /// Row 0 is the topmost visual row, hence the `(row + 1)` flip.
    pub fn cell_rect(&self, cursor: Cursor) -> Rect {
        Rect::new(
            self.offset_x + cursor.col as f32 * self.scaled.width,
            self.page.height - self.offset_y - (cursor.row + 1) as f32 * self.scaled.height,
            self.scaled.width,
            self.scaled.height,
        )
    }
}

fn grid_count(available: f32, cell: f32) -> u32 {
    // Saturates at zero for negative spans (margin wider than the page).
    (available / cell).floor() as u32
}
