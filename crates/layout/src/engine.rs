use crate::LayoutError;
use crate::config::LayoutConfig;
use crate::cursor::Cursor;
use crate::geometry::PageGeometry;
use log::{debug, warn};
use proxyprint_types::{Diagnostic, Rect};

/// A card request together with its resolved face payloads, in lookup
/// order. Zero faces means the resolver found nothing; two or more means a
/// multi-faced card, each face taking its own cell.
#[derive(Debug, Clone)]
pub struct ResolvedCard<F> {
    pub name: String,
    pub faces: Vec<F>,
}

/// The drawing surface the engine paginates onto.
///
/// Implementations own the output document. The engine guarantees `place`
/// calls arrive in strict input order and `break_page` is only issued
/// between two placements, so a surface never ends on a blank page.
pub trait PageSurface<F> {
    type Error: std::error::Error + Send + Sync + 'static;

    fn place(&mut self, face: &F, cell: Rect) -> Result<(), Self::Error>;
    fn break_page(&mut self) -> Result<(), Self::Error>;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Faces placed; equals the total resolved images, not requested names.
    pub placed: u32,
    /// Requests skipped because nothing resolved.
    pub skipped: u32,
    /// Pages with at least one placement (1 even for an empty run).
    pub pages: u32,
}

pub struct LayoutEngine {
    geometry: PageGeometry,
}

impl LayoutEngine {
    /// Fails fast on configurations that would clip or overlap cells.
    pub fn new(config: &LayoutConfig) -> Result<Self, LayoutError> {
        Ok(Self {
            geometry: PageGeometry::compute(config)?,
        })
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    /// Paginates the resolved sequence onto `surface`, row-major.
    ///
    /// Unresolved cards consume no cell and emit a diagnostic. Page breaks
    /// are issued lazily, so an exactly-full final page is not followed by
    /// a blank one; flushing the last partial page is the surface's
    /// responsibility when it finalizes the document.
    pub fn paginate<F, S: PageSurface<F>>(
        &self,
        cards: &[ResolvedCard<F>],
        surface: &mut S,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<LayoutSummary, S::Error> {
        let mut cursor = Cursor::start();
        let mut open_page = 1;
        let mut summary = LayoutSummary {
            pages: 1,
            ..LayoutSummary::default()
        };

        for card in cards {
            if card.faces.is_empty() {
                warn!("no image for '{}', skipping", card.name);
                diagnostics.push(Diagnostic::CardNotFound {
                    name: card.name.clone(),
                });
                summary.skipped += 1;
                continue;
            }
            for face in &card.faces {
                if cursor.page > open_page {
                    surface.break_page()?;
                    open_page = cursor.page;
                    summary.pages = open_page;
                }
                let cell = self.geometry.cell_rect(cursor);
                debug!(
                    "placing '{}' at page {} cell ({}, {})",
                    card.name, cursor.page, cursor.col, cursor.row
                );
                surface.place(face, cell)?;
                summary.placed += 1;
                cursor = cursor.advance(&self.geometry);
            }
        }

        Ok(summary)
    }
}
