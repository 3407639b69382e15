//! Moxfield API client for listing a user's decks and reading their mainboards

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Deserialize;

use super::{DeckSource, USER_AGENT};
use crate::error::{CacheError, Result};

pub const MOXFIELD_API_URL: &str = "https://api2.moxfield.com";

/// Only the first page is ever requested.
pub const PAGE_SIZE: u32 = 12;

/// One page of `/v2/users/{username}/decks`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckPage {
    #[serde(default)]
    pub total_results: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub data: Vec<DeckSummary>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeckSummary {
    pub public_id: String,
    #[serde(default)]
    pub name: String,
}

/// `/v2/decks/all/{publicId}`; boards other than the mainboard are ignored
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Deck {
    /// Keyed by Moxfield's entry key (usually the card name)
    #[serde(default)]
    pub mainboard: BTreeMap<String, BoardEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BoardEntry {
    #[serde(default)]
    pub quantity: u32,
    pub card: DeckCard,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeckCard {
    pub scryfall_id: String,
    pub name: String,
}

/// Blocking Moxfield client
pub struct MoxfieldClient {
    base_url: String,
    http: reqwest::blocking::Client,
}

impl MoxfieldClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(MOXFIELD_API_URL)
    }

    /// Client against another host (for testing with mock servers).
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Fetch the first page of a user's decks.
    pub fn fetch_deck_page(&self, username: &str) -> Result<DeckPage> {
        let url = format!(
            "{}/v2/users/{}/decks?pageNumber=1&pageSize={}",
            self.base_url,
            urlencoding::encode(username),
            PAGE_SIZE
        );

        log::debug!("Fetching deck list: {}", url);

        let response = self.http.get(&url).send()?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CacheError::UserNotFound(username.to_string()));
        }
        if !status.is_success() {
            return Err(CacheError::RemoteService { url, status });
        }

        Ok(response.json::<DeckPage>()?)
    }

    /// Fetch a full deck by its public id.
    pub fn fetch_deck(&self, public_id: &str) -> Result<Deck> {
        let url = format!(
            "{}/v2/decks/all/{}",
            self.base_url,
            urlencoding::encode(public_id)
        );

        log::debug!("Fetching deck: {}", url);

        let response = self.http.get(&url).send()?;
        let status = response.status();

        if !status.is_success() {
            return Err(CacheError::RemoteService { url, status });
        }

        Ok(response.json::<Deck>()?)
    }
}

impl DeckSource for MoxfieldClient {
    fn user_decks(&self, username: &str) -> Result<Vec<DeckSummary>> {
        let page = self.fetch_deck_page(username)?;

        if page.total_pages > 1 {
            let ignored = page.total_results.saturating_sub(page.data.len() as u32);
            log::warn!(
                "User {} has {} decks across {} pages; only the first {} are cached, {} ignored",
                username,
                page.total_results,
                page.total_pages,
                page.data.len(),
                ignored
            );
        }

        Ok(page.data)
    }

    fn deck(&self, public_id: &str) -> Result<Deck> {
        self.fetch_deck(public_id)
    }
}

#[cfg(test)]
#[path = "moxfield_tests.rs"]
mod tests;
