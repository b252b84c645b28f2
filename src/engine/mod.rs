//! Progression engine
//!
//! Owns the player's [`GameState`] and is the only thing allowed to change
//! it. Every public operation is a single transaction:
//! - guard fails: nothing changes, an error is surfaced, `false` comes back
//! - guard passes: the whole new state is committed, saved, then announced
//!
//! Operations are grouped by concern:
//! - `ledger`: coin credit/debit
//! - `leveling`: XP, levels and scholar titles
//! - `wheel`: the wheel of luck
//! - `gift`: the daily gift cooldown
//! - `books`: book ownership

pub mod books;
pub mod gift;
pub mod ledger;
pub mod leveling;
pub mod state;
pub mod wheel;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::clock::Clock;
use crate::notify::Notifier;
use crate::persistence::{PersistentStore, StoreError};
use crate::settings::Settings;

pub use books::PurchaseResult;
pub use leveling::{SCHOLAR_TITLES, scholar_title};
pub use state::{BookId, GameState};
pub use wheel::{SEGMENTS, Segment, SpinOutcome, Tier, select_segment};

/// External collaborators the engine talks to
pub struct Collaborators {
    pub store: Box<dyn PersistentStore>,
    pub notifier: Box<dyn Notifier>,
    pub clock: Box<dyn Clock>,
}

impl Collaborators {
    pub fn new(
        store: impl PersistentStore + 'static,
        notifier: impl Notifier + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            store: Box::new(store),
            notifier: Box::new(notifier),
            clock: Box::new(clock),
        }
    }
}

/// The player's progression: coins, XP/levels, books, gifts and spins
pub struct ProgressionEngine {
    state: GameState,
    settings: Settings,
    /// Wheel draws
    rng: Pcg32,
    io: Collaborators,
}

impl ProgressionEngine {
    /// Load the saved state (or the default profile) and take ownership of
    /// the collaborators. `seed` drives the wheel of luck.
    pub fn initialize(io: Collaborators, settings: Settings, seed: u64) -> Self {
        let state = match io.store.load() {
            Some(json) => match GameState::from_json(&json) {
                Ok(state) => {
                    log::info!(
                        "Loaded progress: level {}, {} coins, {} books",
                        state.level,
                        state.coins,
                        state.owned_books.len()
                    );
                    state
                }
                Err(e) => {
                    log::warn!("Saved progress unreadable ({}), using default profile", e);
                    GameState::default()
                }
            },
            None => {
                log::info!("No saved progress found, using default profile");
                GameState::default()
            }
        };

        let mut engine = Self {
            state,
            settings: settings.sanitized(),
            rng: Pcg32::seed_from_u64(seed),
            io,
        };
        engine.persist();
        engine
    }

    /// Save one last time and hand the collaborators back to the host
    pub fn teardown(mut self) -> Collaborators {
        self.persist();
        log::info!("Progression engine shut down at level {}", self.state.level);
        self.io
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn coins(&self) -> u64 {
        self.state.coins
    }

    pub fn xp(&self) -> u64 {
        self.state.xp
    }

    pub fn level(&self) -> u32 {
        self.state.level
    }

    pub fn owned_books(&self) -> &[BookId] {
        &self.state.owned_books
    }

    pub fn last_daily_claim(&self) -> Option<u64> {
        self.state.last_daily_claim
    }

    /// Apply `change` to a copy of the state, then swap it in and save
    fn transact(&mut self, change: impl FnOnce(&mut GameState)) {
        let mut next = self.state.clone();
        change(&mut next);
        self.state = next;
        self.persist();
    }

    fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            log::error!("Failed to save progress: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), StoreError> {
        let json = self.state.to_json()?;
        self.io.store.save(&json)?;
        log::debug!("Progress saved ({} bytes)", json.len());
        Ok(())
    }

    fn notifier(&mut self) -> &mut dyn Notifier {
        self.io.notifier.as_mut()
    }
}
