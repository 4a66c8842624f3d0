//! Structured diagnostics emitted by the parse, resolve, and layout phases.
//!
//! Diagnostics are data, not errors: they describe cards or lines the run
//! skipped while still producing a document. The pipeline collects them into
//! the final report and leaves display policy to the caller.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A trailing `(SET) 123` export annotation was removed from a line.
    AnnotationStripped { line: usize, annotation: String },
    /// A non-blank line did not match the decklist grammar.
    LineIgnored { line: usize, content: String },
    /// The resolver answered "no such card"; no cell was consumed.
    CardNotFound { name: String },
    /// The lookup service failed outright (lenient mode only).
    LookupFailed { name: String, reason: String },
    /// One face of a resolved card could not be decoded as an image.
    FaceUndecodable { name: String, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::AnnotationStripped { line, annotation } => {
                write!(f, "line {line}: stripped trailing annotation '{annotation}'")
            }
            Diagnostic::LineIgnored { line, content } => {
                write!(f, "line {line}: ignored unrecognized line '{content}'")
            }
            Diagnostic::CardNotFound { name } => {
                write!(f, "no image found for '{name}', card skipped")
            }
            Diagnostic::LookupFailed { name, reason } => {
                write!(f, "lookup failed for '{name}' ({reason}), card skipped")
            }
            Diagnostic::FaceUndecodable { name, reason } => {
                write!(f, "undecodable image for '{name}' ({reason}), face skipped")
            }
        }
    }
}
