//! Command execution for Wayfarer: handlers, dispatch, deferred effects,
//! combat, and feedback.
//!
//! This crate provides:
//! - [`CommandRegistry`] - Category-ordered handler dispatch
//! - [`CommandHandler`] - The handler capability, with built-ins in [`handlers`]
//! - [`CommandQueue`] - Priority and delay scheduling of deferred effects
//! - [`CombatEncounter`] - The turn-based combat state machine
//! - [`FeedbackGenerator`] - Effects and alternatives for command results
//! - [`NarrativeGenerator`] / [`Persistence`] - Collaborator seams

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combat;
pub mod feedback;
pub mod handler;
pub mod handlers;
pub mod narrative;
pub mod persistence;
pub mod queue;
pub mod registry;

pub use combat::{
    Armory, CombatEncounter, CombatEntity, CombatOutcome, CombatStatus, CombatTuning, PlayerAction,
    StatusEffect, TurnReport,
};
pub use feedback::{CommandResult, Effect, FeedbackGenerator};
pub use handler::{
    CommandCategory, CommandHandler, Handler, HandlerContext, HandlerResult, SessionControl,
};
pub use narrative::{Narration, NarrativeGenerator, NarrativeQuery, TemplateNarrator};
pub use persistence::{DEFAULT_SAVE_FILE, Persistence};
pub use queue::{CommandPriority, CommandQueue, QueuedCommand};
pub use registry::{CommandRegistry, HandlerServices};
