//! Integration tests for the wayfarer_parser crate.
//!
//! Tests for the command understanding front end:
//! - Intent recognition (patterns, keywords, fallback)
//! - Reference resolution and pronouns
//! - Interaction memory bounds

mod context_tests;
mod recognition_tests;
