//! Saving and loading game state.

use std::fmt;
use std::path::Path;

use wayfarer_foundation::Result;
use wayfarer_world::World;

/// Default save file name.
pub const DEFAULT_SAVE_FILE: &str = "save.dat";

/// A store for whole-world snapshots.
///
/// Both operations are all-or-nothing: a failed save leaves any previous
/// file intact, and a failed load returns an error without a partial world.
pub trait Persistence: fmt::Debug + Send + Sync {
    /// Writes `world` to `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error if the world could not be written.
    fn save_game(&self, path: &Path, world: &World) -> Result<()>;

    /// Reads a world from `path`.
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error if no complete world could be read.
    fn load_game(&self, path: &Path) -> Result<World>;
}
