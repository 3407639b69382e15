//! Diffs the desired set against the cache directory.

use std::path::{Path, PathBuf};

use super::naming::{parse_card_id, PARTIAL_SUFFIX};
use crate::error::Result;
use crate::models::DesiredSet;

/// What reconciliation found and did
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Files kept because their card is still wanted
    pub already_cached: usize,
    /// Files deleted because no deck references their card any more
    pub purged: Vec<PathBuf>,
    /// Files left alone because their name does not carry a card id
    pub malformed: Vec<PathBuf>,
}

/// Delete cached images whose card is no longer desired and drop already
/// cached cards from `desired`. The returned set holds exactly the cards
/// that still have to be fetched.
pub fn reconcile(
    mut desired: DesiredSet,
    cache_dir: &Path,
) -> Result<(DesiredSet, ReconcileReport)> {
    std::fs::create_dir_all(cache_dir)?;

    let mut report = ReconcileReport::default();

    for entry in std::fs::read_dir(cache_dir)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            log::debug!("Skipping non-file cache entry: {}", path.display());
            continue;
        }

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::warn!("Ignoring cache entry with non UTF-8 name: {}", path.display());
            report.malformed.push(path);
            continue;
        };

        if file_name.ends_with(PARTIAL_SUFFIX) {
            log::info!("Removing interrupted write {}", file_name);
            std::fs::remove_file(&path)?;
            report.purged.push(path);
            continue;
        }

        let card_id = match parse_card_id(file_name) {
            Ok(card_id) => card_id,
            Err(e) => {
                log::warn!("Ignoring cache entry: {}", e);
                report.malformed.push(path);
                continue;
            }
        };

        if desired.remove(card_id).is_some() {
            report.already_cached += 1;
        } else {
            log::info!("Removing {} (no longer in any deck)", file_name);
            std::fs::remove_file(&path)?;
            report.purged.push(path);
        }
    }

    log::info!(
        "Cache: {} already cached, {} purged, {} to fetch",
        report.already_cached,
        report.purged.len(),
        desired.len()
    );

    Ok((desired, report))
}
