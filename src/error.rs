//! Error types for deck_art_cache

use thiserror::Error;

/// Unified error type for deck_art_cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    /// Colour name is not part of the known palette
    #[error("Unknown colour name: {0}")]
    InvalidColor(String),
    /// Moxfield reports no such user
    #[error("User not found on Moxfield: {0}")]
    UserNotFound(String),
    /// Upstream service answered with a non-success status
    #[error("Remote service error: {url} returned {status}")]
    RemoteService {
        url: String,
        status: reqwest::StatusCode,
    },
    /// Scryfall card has neither `image_uris` nor usable `card_faces`
    #[error("Unexpected card shape for {0}: no image URIs on card or first face")]
    UnexpectedCardShape(String),
    /// Cache file name does not follow `<name> &<id>.jpg`
    #[error("Malformed cache entry: {0}")]
    MalformedCacheEntry(String),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Failed to parse JSON response
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result alias for deck_art_cache operations
pub type Result<T> = std::result::Result<T, CacheError>;
