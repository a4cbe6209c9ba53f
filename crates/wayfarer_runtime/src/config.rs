//! Session configuration.

use std::path::PathBuf;

use wayfarer_engine::CombatTuning;
use wayfarer_engine::narrative::DEFAULT_FALLBACK;
use wayfarer_engine::persistence::DEFAULT_SAVE_FILE;

/// Everything a [`GameSession`](crate::GameSession) is configured with.
///
/// There is no global state; two sessions with different configurations can
/// run side by side.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    /// Verbose logging when no `RUST_LOG` filter is set.
    pub debug: bool,
    /// Base seed for combat randomness.
    pub seed: u64,
    /// Top intents below this confidence are treated as not understood.
    pub min_confidence: f64,
    /// File used by SAVE and LOAD when the player names none.
    pub save_path: PathBuf,
    /// Line used when narration fails.
    pub fallback_message: String,
    /// Combat numbers.
    pub combat: CombatTuning,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            debug: false,
            seed: 0,
            min_confidence: 0.3,
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            fallback_message: DEFAULT_FALLBACK.to_string(),
            combat: CombatTuning::default(),
        }
    }
}

impl SessionConfig {
    /// Creates a configuration for development with debug logging.
    #[must_use]
    pub fn development() -> Self {
        Self {
            debug: true,
            ..Self::default()
        }
    }

    /// Creates a reproducible configuration for tests: fixed seed, and flee
    /// attempts that always succeed.
    #[must_use]
    pub fn deterministic(seed: u64) -> Self {
        Self {
            seed,
            combat: CombatTuning::default().with_flee(1.0, 0.0, 1.0, 1.0),
            ..Self::default()
        }
    }

    /// Builder method to set debug logging.
    #[must_use]
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Builder method to set the combat seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Builder method to set the confidence floor.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Builder method to set the default save file.
    #[must_use]
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Builder method to set the narration fallback line.
    #[must_use]
    pub fn with_fallback_message(mut self, message: impl Into<String>) -> Self {
        self.fallback_message = message.into();
        self
    }

    /// Builder method to set combat tuning.
    #[must_use]
    pub fn with_combat(mut self, combat: CombatTuning) -> Self {
        self.combat = combat;
        self
    }
}
