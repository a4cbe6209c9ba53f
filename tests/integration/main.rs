//! Cross-layer integration tests for Wayfarer
//!
//! Tests that drive whole game sessions through text commands.

mod persistence;
mod sessions;
mod walkthrough;
