//! File naming for cached card images.
//!
//! Version 1 of the scheme, which is also the only on-disk state:
//!
//! ```text
//! <sanitized display name> &<scryfall id>.jpg
//! ```
//!
//! The identifier is everything after the *last* `&` and before the `.jpg`
//! suffix. Scryfall ids never contain `&`, so display names may.

use crate::error::{CacheError, Result};

/// Separates the display name from the card id
pub const DELIMITER: char = '&';

/// Extension of every cached image
pub const EXTENSION: &str = ".jpg";

/// Appended to a cache file name while its JPEG is being written
pub const PARTIAL_SUFFIX: &str = ".part";

/// Characters that are illegal in a file name on at least one platform
const ILLEGAL_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replace every character that is illegal in a file name with `-`.
pub fn sanitize(display_name: &str) -> String {
    display_name
        .chars()
        .map(|c| {
            if c.is_control() || ILLEGAL_CHARS.contains(&c) {
                '-'
            } else {
                c
            }
        })
        .collect()
}

/// Whether `card_id` can be embedded in a file name and read back unchanged:
/// non-empty, no whitespace, no delimiter and nothing `sanitize` would replace.
pub fn is_valid_card_id(card_id: &str) -> bool {
    !card_id.is_empty()
        && !card_id.chars().any(|c| {
            c.is_whitespace() || c.is_control() || c == DELIMITER || ILLEGAL_CHARS.contains(&c)
        })
}

/// File name for a card: `<sanitized name> &<id>.jpg`
pub fn build_filename(display_name: &str, card_id: &str) -> Result<String> {
    if !is_valid_card_id(card_id) {
        return Err(CacheError::MalformedCacheEntry(format!(
            "card id {:?} cannot be stored in a file name",
            card_id
        )));
    }

    Ok(format!(
        "{} {}{}{}",
        sanitize(display_name),
        DELIMITER,
        card_id,
        EXTENSION
    ))
}

/// Extract the card id embedded in a cached file name.
pub fn parse_card_id(file_name: &str) -> Result<&str> {
    let malformed = || CacheError::MalformedCacheEntry(file_name.to_string());

    let stem = file_name.strip_suffix(EXTENSION).ok_or_else(malformed)?;
    let (_, card_id) = stem.rsplit_once(DELIMITER).ok_or_else(malformed)?;

    if !is_valid_card_id(card_id) {
        return Err(malformed());
    }

    Ok(card_id)
}
