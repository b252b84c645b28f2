//! Lexora - progression engine for a gamified reader
//!
//! Core modules:
//! - `engine`: Player state and every rule that changes it (coins, XP,
//!   books, daily gift, wheel of luck)
//! - `persistence`: Save/load backends for the serialized state
//! - `notify`: Notification port toward the display layer
//! - `clock`: Wall-clock sources for cooldowns
//! - `catalog`, `treasury`, `reading`: Book shop, coin bundles and page rewards
//! - `session`: Host-side engine slot with an explicit lifecycle
//! - `platform`: Browser bindings (LocalStorage, `Date.now()`, JS callbacks)
//! - `settings`: Data-driven economy tuning

pub mod catalog;
pub mod clock;
pub mod engine;
pub mod notify;
pub mod persistence;
pub mod platform;
pub mod reading;
pub mod session;
pub mod settings;
pub mod treasury;

pub use clock::{Clock, ManualClock, SystemClock};
pub use engine::{BookId, Collaborators, GameState, ProgressionEngine, SpinOutcome};
pub use notify::{LogNotifier, NotificationKind, Notifier, RecordingNotifier};
pub use persistence::{FileStore, MemoryStore, PersistentStore, StoreError};
pub use session::Session;
pub use settings::Settings;

/// Economy constants
pub mod consts {
    /// Demo profile every new reader starts with
    pub const DEFAULT_COINS: u64 = 1420;
    pub const DEFAULT_XP: u64 = 1420;
    pub const DEFAULT_LEVEL: u32 = 42;

    /// Level L levels up at L * XP_PER_LEVEL total XP
    pub const XP_PER_LEVEL: u64 = 1000;

    /// Daily gift payout and its sliding cooldown (24h)
    pub const DAILY_GIFT_REWARD: u64 = 50;
    pub const DAILY_GIFT_COOLDOWN_MS: u64 = 24 * 60 * 60 * 1000;

    /// Wheel rolls are drawn uniformly from [0, WHEEL_ROLL_RANGE)
    pub const WHEEL_ROLL_RANGE: f64 = 100.0;

    /// Reading rewards: every 5th page pays 25 XP and 10 silent coins
    pub const READING_REWARD_EVERY_PAGES: u32 = 5;
    pub const READING_REWARD_XP: u64 = 25;
    pub const READING_REWARD_COINS: u64 = 10;

    /// Storage keys (LocalStorage on web)
    pub const GAME_STATE_KEY: &str = "lexora_game_state";
    pub const SETTINGS_KEY: &str = "lexora_settings";

    /// Native environment overrides
    pub const SAVE_PATH_ENV: &str = "LEXORA_SAVE";
    pub const SETTINGS_ENV: &str = "LEXORA_SETTINGS";
    pub const DEFAULT_SAVE_PATH: &str = "lexora_game_state.json";
}

/// Fresh seed for the wheel RNG (OS entropy; `crypto.getRandomValues` on web)
pub fn entropy_seed() -> u64 {
    rand::random()
}
