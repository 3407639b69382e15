//! API clients for external services (Moxfield, Scryfall)

pub mod moxfield;
pub mod scryfall;

use crate::error::Result;

pub use moxfield::{BoardEntry, Deck, DeckCard, DeckSummary, MoxfieldClient};
pub use scryfall::{CardFace, ImageUris, ScryfallCard, ScryfallClient};

/// User-Agent sent with every request
pub const USER_AGENT: &str = "D2D-Automations-DeckArtCache/1.0";

/// Source of a user's decks (Moxfield in production)
pub trait DeckSource {
    /// First page of the user's public decks
    fn user_decks(&self, username: &str) -> Result<Vec<DeckSummary>>;

    /// Full deck including its mainboard
    fn deck(&self, public_id: &str) -> Result<Deck>;
}

/// Source of card metadata and image bytes (Scryfall in production)
pub trait CardSource {
    fn card(&self, card_id: &str) -> Result<ScryfallCard>;

    fn image(&self, url: &str) -> Result<Vec<u8>>;
}
