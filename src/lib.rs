//! Wayfarer - Command understanding and execution for text adventures
//!
//! This crate re-exports all layers of the Wayfarer system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: wayfarer_runtime    — GameSession, configuration, save files, logging
//! Layer 3: wayfarer_engine     — Handlers, dispatch, command queue, combat, feedback
//! Layer 2: wayfarer_parser     — Intent recognition, command context, pronouns
//! Layer 1: wayfarer_world      — World state and read-only world queries
//! Layer 0: wayfarer_foundation — Core types (Error, EntityRef, Clock)
//! ```

pub use wayfarer_engine as engine;
pub use wayfarer_foundation as foundation;
pub use wayfarer_parser as parser;
pub use wayfarer_runtime as runtime;
pub use wayfarer_world as world;
