use proxyprint_types::{POINTS_PER_INCH, Size};

/// Nominal trading-card face, 2.5in x 3.5in.
pub const CARD_SIZE: Size = Size {
    width: 2.5 * POINTS_PER_INCH,
    height: 3.5 * POINTS_PER_INCH,
};

/// US Letter, 8.5in x 11in.
pub const PAGE_SIZE: Size = Size {
    width: 8.5 * POINTS_PER_INCH,
    height: 11.0 * POINTS_PER_INCH,
};

/// How the filled grid is anchored on the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Placement {
    /// Cells start at the configured margin; any slack accumulates on the
    /// far edges.
    #[default]
    MarginAnchored,
    /// The grid spans the full page and is centered; the resulting offset
    /// must still clear the configured margin.
    Centered,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Uniform shrink applied to each card to leave cut tolerance.
    ///
    /// Defaults to `0.95`; printed cards come out 5% under size so a
    /// slightly misaligned cut still stays inside the image.
    pub scale: f32,
    /// Minimum unprintable border on every page edge, in points.
    ///
    /// Defaults to half an inch, a safe bound for consumer printers.
    pub margin: f32,
    pub placement: Placement,
    pub page: Size,
    pub card: Size,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            scale: 0.95,
            margin: 0.5 * POINTS_PER_INCH,
            placement: Placement::MarginAnchored,
            page: PAGE_SIZE,
            card: CARD_SIZE,
        }
    }
}
