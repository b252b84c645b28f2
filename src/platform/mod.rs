//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Storage (LocalStorage on web, a JSON file natively)
//! - Time (`Date.now()` on web, `SystemTime` natively)
//! - Notifications (JS callbacks on web, the log natively)

#[cfg(target_arch = "wasm32")]
pub mod web;

use crate::clock::Clock;
use crate::notify::Notifier;
use crate::persistence::PersistentStore;

#[cfg(not(target_arch = "wasm32"))]
use crate::consts::{DEFAULT_SAVE_PATH, SAVE_PATH_ENV};

/// Default store for this platform
#[cfg(not(target_arch = "wasm32"))]
pub fn default_store(_storage_key: &str) -> Box<dyn PersistentStore> {
    let path = std::env::var_os(SAVE_PATH_ENV)
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| std::path::PathBuf::from(DEFAULT_SAVE_PATH));
    log::info!("Saving progress to {}", path.display());
    Box::new(crate::persistence::FileStore::new(path))
}

#[cfg(target_arch = "wasm32")]
pub fn default_store(storage_key: &str) -> Box<dyn PersistentStore> {
    Box::new(web::LocalStorageStore::new(storage_key))
}

/// Default clock for this platform
#[cfg(not(target_arch = "wasm32"))]
pub fn default_clock() -> Box<dyn Clock> {
    Box::new(crate::clock::SystemClock)
}

#[cfg(target_arch = "wasm32")]
pub fn default_clock() -> Box<dyn Clock> {
    Box::new(web::JsClock)
}

/// Largest integer a JS number holds exactly
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Whole, non-negative amount from a JS number, or None for negative,
/// fractional, non-finite or imprecise values
pub fn whole_amount(value: f64) -> Option<u64> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= MAX_SAFE_INTEGER {
        Some(value as u64)
    } else {
        None
    }
}

/// Notifier that only logs (used when the host supplies no display layer)
pub fn default_notifier() -> Box<dyn Notifier> {
    Box::new(crate::notify::LogNotifier)
}
