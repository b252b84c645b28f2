//! Host-side engine slot
//!
//! UI shells that create the engine lazily keep it in a [`Session`].
//! Reaching for the engine before `initialize()` (or after `teardown()`)
//! is a host bug with no sensible fallback, so it panics.

use crate::engine::{Collaborators, ProgressionEngine};
use crate::settings::Settings;

#[derive(Default)]
pub struct Session {
    engine: Option<ProgressionEngine>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the engine. A running engine is torn down first.
    pub fn initialize(
        &mut self,
        io: Collaborators,
        settings: Settings,
        seed: u64,
    ) -> &mut ProgressionEngine {
        if self.teardown().is_some() {
            log::warn!("Session re-initialized, previous engine torn down");
        }
        self.engine
            .insert(ProgressionEngine::initialize(io, settings, seed))
    }

    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    pub fn engine(&self) -> &ProgressionEngine {
        match &self.engine {
            Some(engine) => engine,
            None => panic!("progression engine used before initialize()"),
        }
    }

    pub fn engine_mut(&mut self) -> &mut ProgressionEngine {
        match &mut self.engine {
            Some(engine) => engine,
            None => panic!("progression engine used before initialize()"),
        }
    }

    /// Save and release the engine, returning its collaborators
    pub fn teardown(&mut self) -> Option<Collaborators> {
        self.engine.take().map(ProgressionEngine::teardown)
    }
}
