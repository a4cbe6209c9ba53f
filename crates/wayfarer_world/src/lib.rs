//! Persistent world state for Wayfarer.
//!
//! This crate provides:
//! - [`World`] - Game state with structural sharing (O(1) clone)
//! - [`Location`], [`Feature`], [`Item`], [`Npc`] - What the world is made of
//! - [`PlayerStats`] - The player's persistent combat statistics
//! - [`WorldView`] - Read-only location queries used by the parser and feedback

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod item;
pub mod location;
pub mod npc;
pub mod player;
pub mod view;
pub mod world;

pub use item::Item;
pub use location::{Feature, Location};
pub use npc::{EnemyProfile, Gender, Npc};
pub use player::PlayerStats;
pub use view::{EntitySummary, WorldView};
pub use world::World;
