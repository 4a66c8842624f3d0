//! The slice of the Scryfall card object this tool reads.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCard {
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageUris {
    #[serde(default)]
    pub border_crop: Option<String>,
    #[serde(default)]
    pub normal: Option<String>,
}

impl ImageUris {
    /// The border crop prints cleanest; fall back to the normal scan.
    pub fn best(&self) -> Option<&str> {
        self.border_crop.as_deref().or(self.normal.as_deref())
    }
}

impl ApiCard {
    /// Face image URLs in print order: the card-level image for
    /// single-faced cards, otherwise one per face as the API lists them
    /// (front first).
    pub fn face_urls(&self) -> Vec<&str> {
        if let Some(uris) = &self.image_uris
            && let Some(url) = uris.best()
        {
            return vec![url];
        }
        self.card_faces
            .iter()
            .flatten()
            .filter_map(|face| face.image_uris.as_ref().and_then(ImageUris::best))
            .collect()
    }
}
