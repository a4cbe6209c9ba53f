//! Core types, errors, entity references, and clocks for Wayfarer.
//!
//! This crate provides:
//! - [`Error`] - Rich error types with context
//! - [`EntityRef`] - `(entity_type, entity_id)` references to world entities
//! - [`Clock`] - Time sources for delayed effects ([`SystemClock`], [`ManualClock`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod time;

pub use entity::{EntityKind, EntityRef};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use time::{Clock, ManualClock, SystemClock};
