//! Card image lookup against the Scryfall API.
//!
//! The [`CardResolver`] trait is the boundary the pipeline consumes: a
//! fuzzy name in, the raw bytes of zero or more face images out. An empty
//! result is the legitimate "no such card" outcome; transport problems and
//! non-success HTTP statuses are hard errors, kept distinct so callers can
//! choose their own leniency policy.

use thiserror::Error;

pub use reqwest::StatusCode;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("lookup service unreachable: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("lookup service answered HTTP {status} for '{name}'")]
    Http {
        name: String,
        status: reqwest::StatusCode,
    },
    #[error("malformed lookup response: {0}")]
    Decode(#[source] reqwest::Error),
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

/// Resolves a card name to the raw bytes of its face images, front first.
///
/// `Ok(vec![])` means the name matched nothing; callers must treat that as
/// skip-and-continue, never as an abort.
pub trait CardResolver: Send + Sync {
    fn resolve(&self, name: &str) -> Result<Vec<Vec<u8>>, ResolveError>;
}

mod api;
mod client;

pub use api::{ApiCard, CardFace, ImageUris};
pub use client::ScryfallClient;
