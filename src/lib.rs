//! Deck Art Cache - MTG card images for a user's Moxfield decks
//!
//! Mirrors every card in a user's deck mainboards into a local directory as a
//! Scryfall scan with its transparent corners filled in a chosen colour.
//! Files no longer referenced by any deck are removed on each run.

pub mod aggregate;
pub mod api;
pub mod cache;
pub mod color;
pub mod compose;
pub mod config;
pub mod error;
pub mod models;
pub mod pipeline;
pub mod throttle;

pub use aggregate::aggregate;
pub use api::{CardSource, DeckSource, MoxfieldClient, ScryfallClient};
pub use cache::{reconcile, MaterializeReport, Materializer, ReconcileReport};
pub use color::ColorSpec;
pub use config::Config;
pub use error::{CacheError, Result};
pub use models::DesiredSet;
pub use pipeline::{Pipeline, RunSummary};
pub use throttle::{RateLimits, Throttle};
