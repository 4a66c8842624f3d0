//! PDF output: decoded card faces embedded as image XObjects on a grid of
//! fixed-size pages, assembled with `lopdf`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image decode failed: {0}")]
    ImageDecode(String),
    #[error("PDF generation error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

mod image_data;
mod writer;

pub use image_data::CardImage;
pub use writer::PdfSurface;
