//! Economy settings
//!
//! Tunable numbers of the progression economy. Persisted separately from
//! the player's save (LocalStorage on web, a JSON file on native).

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::persistence::{PersistentStore, StoreError};

/// Reading reward cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadingRewards {
    /// Every Nth page grants a reward (page 1 never does)
    pub every_pages: u32,
    /// XP granted per rewarded page
    pub xp: u64,
    /// Coins granted per rewarded page (credited silently)
    pub coins: u64,
}

impl Default for ReadingRewards {
    fn default() -> Self {
        Self {
            every_pages: READING_REWARD_EVERY_PAGES,
            xp: READING_REWARD_XP,
            coins: READING_REWARD_COINS,
        }
    }
}

/// Progression settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Leveling ===
    /// Level L levels up once xp reaches L * xp_per_level
    pub xp_per_level: u64,

    // === Daily gift ===
    /// Coins credited by a successful claim
    pub daily_gift_reward: u64,
    /// Sliding cooldown after a claim (ms)
    pub daily_gift_cooldown_ms: u64,

    // === Reading ===
    pub reading: ReadingRewards,

    // === Storage ===
    /// Key the game state is saved under
    pub storage_key: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            xp_per_level: XP_PER_LEVEL,
            daily_gift_reward: DAILY_GIFT_REWARD,
            daily_gift_cooldown_ms: DAILY_GIFT_COOLDOWN_MS,
            reading: ReadingRewards::default(),
            storage_key: GAME_STATE_KEY.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    /// Clamp values that would break the economy
    pub fn sanitized(mut self) -> Self {
        if self.xp_per_level == 0 {
            log::warn!("xp_per_level must be positive, using {}", XP_PER_LEVEL);
            self.xp_per_level = XP_PER_LEVEL;
        }
        if self.reading.every_pages == 0 {
            log::warn!(
                "reading.every_pages must be positive, using {}",
                READING_REWARD_EVERY_PAGES
            );
            self.reading.every_pages = READING_REWARD_EVERY_PAGES;
        }
        if self.storage_key.is_empty() {
            self.storage_key = GAME_STATE_KEY.to_string();
        }
        self
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let store = crate::platform::web::LocalStorageStore::new(SETTINGS_KEY);
        Self::load_from(&store)
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) -> Result<(), StoreError> {
        let mut store = crate::platform::web::LocalStorageStore::new(SETTINGS_KEY);
        self.save_to(&mut store)
    }

    /// Read settings out of a store, falling back to defaults
    pub fn load_from(store: &dyn PersistentStore) -> Self {
        if let Some(json) = store.load() {
            match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded saved settings");
                    return settings;
                }
                Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
            }
        }
        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings into a store
    pub fn save_to(&self, store: &mut dyn PersistentStore) -> Result<(), StoreError> {
        let json = serde_json::to_string(self)?;
        store.save(&json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Load settings from the file named by `LEXORA_SETTINGS`, if set
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => Self::load_from_path(std::path::Path::new(&path)),
            None => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), StoreError> {
        self.save_to(&mut crate::persistence::FileStore::new(path))
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_defaults_match_economy() {
        let settings = Settings::default();
        assert_eq!(settings.xp_per_level, 1000);
        assert_eq!(settings.daily_gift_reward, 50);
        assert_eq!(settings.daily_gift_cooldown_ms, 24 * 60 * 60 * 1000);
        assert_eq!(settings.reading.every_pages, 5);
        assert_eq!(settings.storage_key, "lexora_game_state");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"daily_gift_reward":75}"#).unwrap();
        assert_eq!(settings.daily_gift_reward, 75);
        assert_eq!(settings.xp_per_level, 1000);
        assert_eq!(settings.reading, ReadingRewards::default());
    }

    #[test]
    fn test_sanitize_rejects_zero_divisors() {
        let settings =
            Settings::from_json(r#"{"xp_per_level":0,"reading":{"every_pages":0}}"#).unwrap();
        assert_eq!(settings.xp_per_level, 1000);
        assert_eq!(settings.reading.every_pages, 5);
    }

    #[test]
    fn test_load_from_missing_path_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from_path(&dir.path().join("nope.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"reading":{"every_pages":10,"xp":40,"coins":5}}"#).unwrap();

        let settings = Settings::load_from_path(&path);
        assert_eq!(settings.reading.every_pages, 10);
        assert_eq!(settings.reading.xp, 40);
    }

    #[test]
    fn test_save_then_load_through_store() {
        let mut store = MemoryStore::new();
        let settings = Settings {
            daily_gift_reward: 80,
            ..Settings::default()
        };
        settings.save_to(&mut store).unwrap();
        assert_eq!(Settings::load_from(&store), settings);
    }

    #[test]
    fn test_load_from_empty_or_corrupt_store_defaults() {
        assert_eq!(Settings::load_from(&MemoryStore::new()), Settings::default());
        let store = MemoryStore::with_payload("{not json");
        assert_eq!(Settings::load_from(&store), Settings::default());
    }

    #[test]
    fn test_save_to_path_reports_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();
        // Parent "directory" is a plain file
        let err = Settings::default()
            .save_to_path(&blocker.join("settings.json"))
            .unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));

        let path = dir.path().join("nested").join("settings.json");
        Settings::default().save_to_path(&path).unwrap();
        assert_eq!(Settings::load_from_path(&path), Settings::default());
    }
}
