//! Integration tests for the wayfarer_engine crate.
//!
//! Tests for command execution:
//! - Deferred command queue ordering, readiness, and eviction
//! - Combat resolution against world-derived combatants
//! - Handler dispatch through the registry

mod combat_tests;
mod dispatch_tests;
mod queue_tests;
