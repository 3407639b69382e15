//! Deck Art Cache - keeps a folder of tinted card images in sync with a
//! user's Moxfield decks.

use clap::Parser;
use deck_art_cache::{Config, Pipeline, RateLimits, Throttle};
use std::path::PathBuf;
use std::time::Duration;

/// Mirror the cards of a Moxfield user's decks as tinted Scryfall images
#[derive(Parser, Debug)]
#[command(name = "deck_art_cache")]
#[command(version, about, long_about = None)]
struct Args {
    /// Moxfield username whose decks are mirrored
    #[arg(short, long)]
    username: String,

    /// Directory holding the cached images
    #[arg(short, long)]
    output: PathBuf,

    /// Border colour, any CSS colour name (e.g. Black, DarkSlateGray)
    #[arg(short, long, default_value = deck_art_cache::color::DEFAULT_COLOR)]
    color: String,

    /// Moxfield API base URL
    #[arg(long, default_value = deck_art_cache::api::moxfield::MOXFIELD_API_URL)]
    moxfield_url: String,

    /// Scryfall API base URL
    #[arg(long, default_value = deck_art_cache::api::scryfall::SCRYFALL_API_URL)]
    scryfall_url: String,

    /// Pause before each Moxfield request, in milliseconds
    #[arg(long, default_value_t = 500)]
    deck_delay_ms: u64,

    /// Pause before each Scryfall request, in milliseconds
    #[arg(long, default_value_t = 200)]
    card_delay_ms: u64,

    /// Directory for raw downloads (default: system temp dir)
    #[arg(long)]
    scratch_dir: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.username, self.output);
        config.color = self.color;
        config.moxfield_url = self.moxfield_url;
        config.scryfall_url = self.scryfall_url;
        config.rate_limits = RateLimits {
            deck_api: Throttle::new(Duration::from_millis(self.deck_delay_ms)),
            card_api: Throttle::new(Duration::from_millis(self.card_delay_ms)),
        };
        if let Some(dir) = self.scratch_dir {
            config.scratch_dir = dir;
        }
        config
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=deck_art_cache=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Args::parse().into_config();
    log::info!("Starting deck_art_cache...");

    let result =
        Pipeline::from_config(&config).and_then(|pipeline| pipeline.run(&config.username));

    match result {
        Ok(summary) => {
            log::info!(
                "Done: {} cards in decks, {} already cached, {} written, {} skipped (low resolution), {} purged",
                summary.desired,
                summary.already_cached,
                summary.written,
                summary.skipped_low_res,
                summary.purged
            );
            if summary.malformed > 0 {
                log::warn!(
                    "{} files in {} do not follow the cache naming scheme and were left alone",
                    summary.malformed,
                    config.output_dir.display()
                );
            }
        }
        Err(e) => {
            log::error!("Run halted: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
