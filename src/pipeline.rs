//! Runs aggregation, reconciliation and materialization in order.

use std::path::PathBuf;

use crate::aggregate::aggregate;
use crate::api::{CardSource, DeckSource, MoxfieldClient, ScryfallClient};
use crate::cache::{reconcile, Materializer};
use crate::color::ColorSpec;
use crate::config::Config;
use crate::error::Result;
use crate::throttle::RateLimits;

/// Counts from one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub desired: usize,
    pub already_cached: usize,
    pub purged: usize,
    pub malformed: usize,
    pub written: usize,
    pub skipped_low_res: usize,
}

pub struct Pipeline<D: DeckSource, C: CardSource> {
    pub decks: D,
    pub cards: C,
    pub cache_dir: PathBuf,
    pub scratch_dir: PathBuf,
    pub color: ColorSpec,
    pub rate_limits: RateLimits,
}

impl Pipeline<MoxfieldClient, ScryfallClient> {
    /// Build the production pipeline. The colour is resolved first, so an
    /// unknown colour fails before any request is made.
    pub fn from_config(config: &Config) -> Result<Self> {
        let color = ColorSpec::resolve(&config.color)?;

        Ok(Self {
            decks: MoxfieldClient::with_base_url(&config.moxfield_url)?,
            cards: ScryfallClient::with_base_url(&config.scryfall_url)?,
            cache_dir: config.output_dir.clone(),
            scratch_dir: config.scratch_dir.clone(),
            color,
            rate_limits: config.rate_limits,
        })
    }
}

impl<D: DeckSource, C: CardSource> Pipeline<D, C> {
    /// Bring the cache directory in line with `username`'s current decks.
    pub fn run(&self, username: &str) -> Result<RunSummary> {
        log::info!(
            "Caching deck art for {} into {} (border: {})",
            username,
            self.cache_dir.display(),
            self.color
        );

        let desired = aggregate(&self.decks, username, &self.rate_limits.deck_api)?;
        let desired_count = desired.len();

        let (pending, reconciled) = reconcile(desired, &self.cache_dir)?;

        let materializer = Materializer {
            cards: &self.cards,
            cache_dir: &self.cache_dir,
            scratch_dir: &self.scratch_dir,
            color: &self.color,
            throttle: self.rate_limits.card_api,
        };
        let materialized = materializer.materialize(&pending)?;

        Ok(RunSummary {
            desired: desired_count,
            already_cached: reconciled.already_cached,
            purged: reconciled.purged.len(),
            malformed: reconciled.malformed.len(),
            written: materialized.written.len(),
            skipped_low_res: materialized.skipped_low_res.len(),
        })
    }
}
