//! Grid layout of card images onto fixed-size pages.
//!
//! The engine is pure: it computes cell rectangles and drives a
//! [`PageSurface`] implementation, never touching PDF primitives itself.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error(
        "no {axis} cells fit: scaled card {scaled:.2}pt does not fit a {available:.2}pt page span"
    )]
    NoCellsFit {
        axis: &'static str,
        scaled: f32,
        available: f32,
    },
    #[error(
        "centering offset {offset:.2}pt on the {axis} axis is smaller than the margin {margin:.2}pt"
    )]
    CenteringOverflow {
        axis: &'static str,
        offset: f32,
        margin: f32,
    },
    #[error("scale factor {0:.2} is outside (0, 1]")]
    InvalidScale(f32),
    #[error("margin {0:.2}pt is negative")]
    NegativeMargin(f32),
}

pub mod config;
mod cursor;
mod engine;
mod geometry;

pub use config::{LayoutConfig, Placement};
pub use cursor::Cursor;
pub use engine::{LayoutEngine, LayoutSummary, PageSurface, ResolvedCard};
pub use geometry::PageGeometry;
