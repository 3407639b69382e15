use std::path::PathBuf;

use crate::api::moxfield::MOXFIELD_API_URL;
use crate::api::scryfall::SCRYFALL_API_URL;
use crate::cache::default_scratch_dir;
use crate::color::DEFAULT_COLOR;
use crate::throttle::RateLimits;

/// Settings for one run
#[derive(Debug, Clone)]
pub struct Config {
    pub username: String,
    pub output_dir: PathBuf,
    /// Colour name, resolved when the pipeline is built
    pub color: String,
    pub moxfield_url: String,
    pub scryfall_url: String,
    pub scratch_dir: PathBuf,
    pub rate_limits: RateLimits,
}

impl Config {
    /// Production defaults for everything but the user and output directory
    pub fn new(username: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            username: username.into(),
            output_dir: output_dir.into(),
            color: DEFAULT_COLOR.to_string(),
            moxfield_url: MOXFIELD_API_URL.to_string(),
            scryfall_url: SCRYFALL_API_URL.to_string(),
            scratch_dir: default_scratch_dir(),
            rate_limits: RateLimits::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("alice", "/tmp/art");
        assert_eq!(config.username, "alice");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/art"));
        assert_eq!(config.color, "Black");
        assert_eq!(config.moxfield_url, "https://api2.moxfield.com");
        assert_eq!(config.scryfall_url, "https://api.scryfall.com");
        assert!(config.scratch_dir.ends_with("deck_art_cache"));
        assert_eq!(config.rate_limits, RateLimits::default());
    }
}
