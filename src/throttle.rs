//! Request pacing for the Moxfield and Scryfall APIs.

use std::time::Duration;

/// Pause inserted before every Moxfield request.
pub const DECK_API_INTERVAL: Duration = Duration::from_millis(500);

/// Pause inserted before every Scryfall request (their documented 50-100ms
/// guideline, doubled).
pub const CARD_API_INTERVAL: Duration = Duration::from_millis(200);

/// Fixed-interval sleep before each request to one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    interval: Duration,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    /// A throttle that never sleeps.
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Block the current thread for the configured interval.
    pub fn wait(&self) {
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }
}

/// Per-service request pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimits {
    pub deck_api: Throttle,
    pub card_api: Throttle,
}

impl Default for RateLimits {
    fn default() -> Self {
        Self {
            deck_api: Throttle::new(DECK_API_INTERVAL),
            card_api: Throttle::new(CARD_API_INTERVAL),
        }
    }
}

impl RateLimits {
    /// No pacing at all, for tests and local mock servers.
    pub fn unthrottled() -> Self {
        Self {
            deck_api: Throttle::none(),
            card_api: Throttle::none(),
        }
    }
}
