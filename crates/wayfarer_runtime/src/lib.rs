//! Game sessions for Wayfarer.
//!
//! This crate ties the parser and engine together:
//! - [`GameSession`] - One player's game: submit commands, drain effects
//! - [`SessionConfig`] - Seed, confidence floor, save file, combat tuning
//! - [`FilePersistence`] - `MessagePack` save files written atomically
//! - [`logging`] - `tracing` subscriber setup

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod logging;
pub mod persistence;
pub mod session;

pub use config::SessionConfig;
pub use persistence::FilePersistence;
pub use session::{DEFAULT_DELAYED_MESSAGE, GameSession};
