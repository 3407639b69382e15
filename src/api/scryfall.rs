//! Scryfall API client for card metadata and images

use std::time::Duration;

use serde::Deserialize;

use super::{CardSource, USER_AGENT};
use crate::error::{CacheError, Result};

pub const SCRYFALL_API_URL: &str = "https://api.scryfall.com";

/// Scryfall card response
#[derive(Debug, Deserialize, Clone)]
pub struct ScryfallCard {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// False while Scryfall only has a low-quality scan
    #[serde(default)]
    pub highres_image: bool,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
    /// For double-faced cards, images are in card_faces
    #[serde(default)]
    pub card_faces: Option<Vec<CardFace>>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ImageUris {
    pub png: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CardFace {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image_uris: Option<ImageUris>,
}

impl ScryfallCard {
    /// Full-size PNG of the card, or of its front face for double-faced cards.
    pub fn png_url(&self) -> Result<&str> {
        let uris = match (&self.image_uris, &self.card_faces) {
            (Some(uris), _) => Some(uris),
            (None, Some(faces)) => faces.first().and_then(|face| face.image_uris.as_ref()),
            (None, None) => None,
        };

        uris.and_then(|uris| uris.png.as_deref())
            .ok_or_else(|| CacheError::UnexpectedCardShape(self.describe()))
    }

    fn describe(&self) -> String {
        if self.name.is_empty() {
            self.id.clone()
        } else {
            format!("{} ({})", self.name, self.id)
        }
    }
}

/// Blocking Scryfall client
pub struct ScryfallClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl ScryfallClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(SCRYFALL_API_URL)
    }

    /// Client against another host (for testing with mock servers).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(60))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetch a card by its Scryfall id
    pub fn fetch_card(&self, card_id: &str) -> Result<ScryfallCard> {
        let url = format!(
            "{}/cards/{}",
            self.base_url,
            urlencoding::encode(card_id)
        );

        log::debug!("Fetching card from Scryfall: {}", url);

        let response = self.http.get(&url).send()?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json::<ScryfallCard>()?)
        } else {
            Err(CacheError::RemoteService { url, status })
        }
    }

    /// Fetch image bytes from an absolute URL
    pub fn fetch_image(&self, url: &str) -> Result<Vec<u8>> {
        log::debug!("Fetching image: {}", url);

        let response = self.http.get(url).send()?;
        let status = response.status();

        if status.is_success() {
            Ok(response.bytes()?.to_vec())
        } else {
            Err(CacheError::RemoteService {
                url: url.to_string(),
                status,
            })
        }
    }
}

impl CardSource for ScryfallClient {
    fn card(&self, card_id: &str) -> Result<ScryfallCard> {
        self.fetch_card(card_id)
    }

    fn image(&self, url: &str) -> Result<Vec<u8>> {
        self.fetch_image(url)
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
