//! Downloads, tints and writes the cards missing from the cache.

use std::path::{Path, PathBuf};

use super::naming::{build_filename, sanitize};
use crate::api::CardSource;
use crate::color::ColorSpec;
use crate::compose::{tint_background, write_jpeg};
use crate::error::Result;
use crate::models::DesiredSet;
use crate::throttle::Throttle;

/// Directory name used under the system temp dir for raw downloads
pub const SCRATCH_DIR_NAME: &str = "deck_art_cache";

/// Default location for raw downloads
pub fn default_scratch_dir() -> PathBuf {
    std::env::temp_dir().join(SCRATCH_DIR_NAME)
}

/// Raw downloaded image on disk, removed when dropped
pub struct RawImageAsset {
    path: PathBuf,
}

impl RawImageAsset {
    /// Write `bytes` to `<scratch_dir>/<card_id>.download`
    pub fn create(scratch_dir: &Path, card_id: &str, bytes: &[u8]) -> Result<Self> {
        std::fs::create_dir_all(scratch_dir)?;
        let path = scratch_dir.join(format!("{}.download", sanitize(card_id)));
        std::fs::write(&path, bytes)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        Ok(std::fs::read(&self.path)?)
    }
}

impl Drop for RawImageAsset {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            log::warn!(
                "Failed to remove temporary download {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

/// Outcome of a materialize pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub written: Vec<PathBuf>,
    /// Card ids skipped because Scryfall has no high-resolution scan yet
    pub skipped_low_res: Vec<String>,
}

/// Where and how cards are written
pub struct Materializer<'a, C: CardSource + ?Sized> {
    pub cards: &'a C,
    pub cache_dir: &'a Path,
    pub scratch_dir: &'a Path,
    pub color: &'a ColorSpec,
    pub throttle: Throttle,
}

impl<C: CardSource + ?Sized> Materializer<'_, C> {
    /// Write one tinted JPEG per card in `pending`, skipping cards without a
    /// high-resolution scan. Stops at the first error.
    pub fn materialize(&self, pending: &DesiredSet) -> Result<MaterializeReport> {
        let mut report = MaterializeReport::default();
        let total = pending.len();

        for (index, (card_id, display_name)) in pending.iter().enumerate() {
            log::info!("[{}/{}] {}", index + 1, total, display_name);

            match self.materialize_card(card_id, display_name)? {
                Some(path) => report.written.push(path),
                None => report.skipped_low_res.push(card_id.to_string()),
            }
        }

        Ok(report)
    }

    /// Fetch, tint and write a single card. `None` when the card was skipped.
    pub fn materialize_card(&self, card_id: &str, display_name: &str) -> Result<Option<PathBuf>> {
        self.throttle.wait();
        let card = self.cards.card(card_id)?;

        if !card.highres_image {
            log::warn!(
                "Skipping {} ({}): no high-resolution image yet",
                display_name,
                card_id
            );
            return Ok(None);
        }

        let url = card.png_url()?;

        self.throttle.wait();
        let bytes = self.cards.image(url)?;
        let raw = RawImageAsset::create(self.scratch_dir, card_id, &bytes)?;

        let tinted = tint_background(&raw.read()?, self.color)?;
        let path = self.cache_dir.join(build_filename(display_name, card_id)?);
        write_jpeg(&tinted, &path)?;

        log::debug!("Wrote {}", path.display());
        Ok(Some(path))
    }
}
