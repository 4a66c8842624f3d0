//! The unified error type for a full decklist-to-PDF run.

use proxyprint_layout::LayoutError;
use proxyprint_render_lopdf::RenderError;
use proxyprint_scryfall::ResolveError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("rendering error: {0}")]
    Render(#[from] RenderError),
    #[error("lookup error: {0}")]
    Resolve(#[from] ResolveError),
    #[error(
        "{count} consecutive lookup failures, aborting so a dead network does not produce an empty document (last: {last})"
    )]
    LookupStorm { count: u32, last: String },
}
