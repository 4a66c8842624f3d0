//! proxyprint: decklist text in, print-ready proxy-card PDF out.
//!
//! The pipeline runs in strictly ordered phases: parse the decklist,
//! resolve every card name to face-image bytes, decode the images, then a
//! pure layout pass places them onto the PDF surface. Resolution is the
//! only phase that touches the network and may run in parallel (feature
//! `parallel-fetch`); results are collected back in input order so
//! placement stays deterministic.

pub mod error;

pub use error::PipelineError;
pub use proxyprint_decklist::parse_decklist;
pub use proxyprint_layout::{LayoutConfig, LayoutEngine, Placement, ResolvedCard};
pub use proxyprint_render_lopdf::{CardImage, PdfSurface};
pub use proxyprint_scryfall::{CardResolver, ResolveError, ScryfallClient};
pub use proxyprint_types::{Diagnostic, POINTS_PER_INCH};

use log::{info, warn};
use std::path::Path;

/// Consecutive hard lookup failures tolerated before the run aborts.
const LOOKUP_STORM_THRESHOLD: u32 = 5;

#[derive(Debug, Clone, Default)]
pub struct PipelineConfig {
    pub layout: LayoutConfig,
    /// Abort on the first hard lookup failure instead of skipping the card.
    pub strict_lookup: bool,
}

/// What a run did, returned alongside the written document.
#[derive(Debug)]
pub struct RunReport {
    /// Names requested by the decklist (counts expanded).
    pub requested: usize,
    /// Face images placed; can exceed `requested` with multi-faced cards.
    pub placed: u32,
    /// Requests that put nothing on a page.
    pub skipped: u32,
    pub pages: u32,
    pub diagnostics: Vec<Diagnostic>,
}

struct ResolvedSet {
    cards: Vec<ResolvedCard<CardImage>>,
    /// Requests dropped by hard lookup failures (lenient mode).
    lookup_skipped: u32,
}

pub struct ProxyPipeline {
    config: PipelineConfig,
}

impl ProxyPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Runs the full pipeline and writes the document to `output`.
    ///
    /// Unresolved cards are skipped with diagnostics, never fatal. If
    /// layout or rendering fails mid-run the partially written document is
    /// still finalized before the error is returned, so the file on disk
    /// stays viewer-readable.
    pub fn generate_to_file<R: CardResolver>(
        &self,
        decklist: &str,
        resolver: &R,
        output: &Path,
    ) -> Result<RunReport, PipelineError> {
        // Geometry problems surface before any network traffic.
        let engine = LayoutEngine::new(&self.config.layout)?;

        let parsed = parse_decklist(decklist);
        if parsed.is_empty() {
            warn!("decklist contains no card entries");
        }
        let mut diagnostics = parsed.diagnostics;
        let requested = parsed.cards.len();
        info!("decklist expands to {requested} card requests");

        let resolved = self.resolve_all(&parsed.cards, resolver, &mut diagnostics)?;

        let mut surface = PdfSurface::new(self.config.layout.page);
        match engine.paginate(&resolved.cards, &mut surface, &mut diagnostics) {
            Ok(summary) => {
                surface.finish_to_file(output)?;
                info!(
                    "wrote {} ({} images on {} pages)",
                    output.display(),
                    summary.placed,
                    summary.pages
                );
                Ok(RunReport {
                    requested,
                    placed: summary.placed,
                    skipped: summary.skipped + resolved.lookup_skipped,
                    pages: summary.pages,
                    diagnostics,
                })
            }
            Err(err) => {
                // Never leave a half-written file unreadable.
                if let Err(save_err) = surface.finish_to_file(output) {
                    warn!("could not finalize partial document: {save_err}");
                }
                Err(err.into())
            }
        }
    }

    fn resolve_all<R: CardResolver>(
        &self,
        names: &[String],
        resolver: &R,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<ResolvedSet, PipelineError> {
        #[cfg(feature = "parallel-fetch")]
        let outcomes: Vec<(String, Result<Vec<Vec<u8>>, ResolveError>)> = {
            use rayon::prelude::*;
            names
                .par_iter()
                .map(|name| (name.clone(), resolver.resolve(name)))
                .collect()
        };
        #[cfg(not(feature = "parallel-fetch"))]
        let outcomes = names
            .iter()
            .map(|name| (name.clone(), resolver.resolve(name)));

        let mut cards = Vec::with_capacity(names.len());
        let mut lookup_skipped = 0u32;
        let mut consecutive_failures = 0u32;

        for (name, outcome) in outcomes {
            match outcome {
                Ok(face_bytes) => {
                    consecutive_failures = 0;
                    let mut faces = Vec::with_capacity(face_bytes.len());
                    for bytes in &face_bytes {
                        match CardImage::decode(bytes) {
                            Ok(image) => faces.push(image),
                            Err(err) => {
                                warn!("undecodable face for '{name}': {err}");
                                diagnostics.push(Diagnostic::FaceUndecodable {
                                    name: name.clone(),
                                    reason: err.to_string(),
                                });
                            }
                        }
                    }
                    cards.push(ResolvedCard { name, faces });
                }
                Err(err) => {
                    if self.config.strict_lookup {
                        return Err(err.into());
                    }
                    warn!("lookup failed for '{name}': {err}");
                    consecutive_failures += 1;
                    if consecutive_failures >= LOOKUP_STORM_THRESHOLD {
                        return Err(PipelineError::LookupStorm {
                            count: consecutive_failures,
                            last: err.to_string(),
                        });
                    }
                    diagnostics.push(Diagnostic::LookupFailed {
                        name,
                        reason: err.to_string(),
                    });
                    lookup_skipped += 1;
                }
            }
        }

        Ok(ResolvedSet {
            cards,
            lookup_skipped,
        })
    }
}
