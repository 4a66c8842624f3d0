pub mod diag;
pub mod geometry;

pub use diag::Diagnostic;
pub use geometry::{Rect, Size};

/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;
