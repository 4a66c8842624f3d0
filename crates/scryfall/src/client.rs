use crate::api::ApiCard;
use crate::{CardResolver, ResolveError};
use log::{debug, info};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.scryfall.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Blocking Scryfall client using the fuzzy-name endpoint.
pub struct ScryfallClient {
    http: Client,
    base_url: String,
}

impl ScryfallClient {
    pub fn new() -> Result<Self, ResolveError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// The base URL is injectable so tests can point at a local stub.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ResolveError> {
        let http = Client::builder()
            .user_agent(concat!("proxyprint/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ResolveError::Client)?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn fetch_face(&self, name: &str, url: &str) -> Result<Vec<u8>, ResolveError> {
        debug!("downloading face image {url}");
        let response = self
            .http
            .get(url)
            .send()
            .map_err(ResolveError::Transport)?;
        if !response.status().is_success() {
            return Err(ResolveError::Http {
                name: name.to_string(),
                status: response.status(),
            });
        }
        let bytes = response.bytes().map_err(ResolveError::Transport)?;
        Ok(bytes.to_vec())
    }
}

impl CardResolver for ScryfallClient {
    fn resolve(&self, name: &str) -> Result<Vec<Vec<u8>>, ResolveError> {
        info!("fetching card image for '{name}'");
        let response = self
            .http
            .get(format!("{}/cards/named", self.base_url))
            .query(&[("fuzzy", name)])
            .send()
            .map_err(ResolveError::Transport)?;

        // The fuzzy endpoint answers 404 when nothing matches; that is a
        // soft miss, not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            debug!("no fuzzy match for '{name}'");
            return Ok(Vec::new());
        }
        if !response.status().is_success() {
            return Err(ResolveError::Http {
                name: name.to_string(),
                status: response.status(),
            });
        }

        let card: ApiCard = response.json().map_err(ResolveError::Decode)?;
        card.face_urls()
            .into_iter()
            .map(|url| self.fetch_face(name, url))
            .collect()
    }
}
