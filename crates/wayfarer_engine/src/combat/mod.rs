//! Turn-based combat.
//!
//! - [`CombatEncounter`] - the per-fight state machine
//! - [`CombatEntity`] - a participant, built from the world or an NPC profile
//! - [`Armory`] - weapon, armor, and consumable classification
//! - [`CombatTuning`] - every number the rules read
//! - [`apply_outcome`] - writes rewards back into the world

pub mod armory;
pub mod combatant;
pub mod encounter;
pub mod log;
pub mod progression;
pub mod status;
pub mod tuning;

pub use armory::{ArmorSpec, Armory, Consumable, StatusTarget, WeaponSpec};
pub use combatant::{CombatEntity, CombatRole};
pub use encounter::{CombatEncounter, CombatOutcome, CombatStatus, PlayerAction, TurnReport};
pub use log::{CombatLog, LogEntry};
pub use progression::{apply_outcome, gain_experience};
pub use status::{ActiveStatus, StatusEffect};
pub use tuning::CombatTuning;
