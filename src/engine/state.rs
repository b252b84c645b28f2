//! Persisted player state
//!
//! Everything the reader keeps between sessions lives in [`GameState`].
//! The JSON shape matches what the web client has always written to
//! LocalStorage, so existing saves keep loading.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Identifier of a book in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BookId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BookId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Complete player progression state (serializable)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameState {
    /// Spendable currency
    pub coins: u64,
    /// Lifetime experience, never decreases
    pub xp: u64,
    /// Scholar level, starts at 1 or above
    pub level: u32,
    /// Owned books in acquisition order, no duplicates
    pub owned_books: Vec<BookId>,
    /// Unix timestamp (ms) of the last successful daily gift claim
    pub last_daily_claim: Option<u64>,
}

impl Default for GameState {
    /// The seeded demo profile every new reader starts with
    fn default() -> Self {
        Self {
            coins: DEFAULT_COINS,
            xp: DEFAULT_XP,
            level: DEFAULT_LEVEL,
            owned_books: Vec::new(),
            last_daily_claim: None,
        }
    }
}

impl GameState {
    /// Parse a saved payload and repair what the invariants forbid
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut state: GameState = serde_json::from_str(json)?;
        state.normalize();
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Drop duplicate book ids (first one wins) and clamp level to >= 1
    pub fn normalize(&mut self) {
        let mut seen = std::collections::HashSet::new();
        self.owned_books.retain(|id| seen.insert(id.clone()));
        self.level = self.level.max(1);
    }

    pub fn owns(&self, id: &BookId) -> bool {
        self.owned_books.contains(id)
    }

    /// XP total that triggers the next level-up
    pub fn next_level_threshold(&self, xp_per_level: u64) -> u64 {
        (self.level as u64).saturating_mul(xp_per_level)
    }

    /// Remaining XP before the next level-up (0 if already past it)
    pub fn xp_to_next_level(&self, xp_per_level: u64) -> u64 {
        self.next_level_threshold(xp_per_level).saturating_sub(self.xp)
    }
}
