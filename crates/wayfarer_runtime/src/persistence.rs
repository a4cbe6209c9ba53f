//! Save files in `MessagePack`.
//!
//! Saves go to a temporary sibling file that is renamed over the target
//! once fully written, so a failed save never leaves a truncated file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wayfarer_engine::Persistence;
use wayfarer_foundation::{Error, ErrorContext, Result};
use wayfarer_world::World;

/// Serializes a world to bytes.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(world: &World) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(world).map_err(|e| Error::serialization(e.to_string()))
}

/// Deserializes a world from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a complete world.
pub fn from_bytes(bytes: &[u8]) -> Result<World> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::serialization(e.to_string()))
}

/// Reads and writes save files, optionally relative to a base directory.
#[derive(Clone, Debug, Default)]
pub struct FilePersistence {
    root: Option<PathBuf>,
}

impl FilePersistence {
    /// Resolves paths against the working directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves relative paths against `root`.
    #[must_use]
    pub fn in_dir(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

fn io_error(action: &str, path: &Path, error: &std::io::Error) -> Error {
    Error::io(format!("failed to {action} '{}': {error}", path.display()))
        .with_context(ErrorContext::new().with_source("FilePersistence"))
}

impl Persistence for FilePersistence {
    fn save_game(&self, path: &Path, world: &World) -> Result<()> {
        let target = self.resolve(path);
        let bytes = to_bytes(world)?;

        let mut temp = target.clone().into_os_string();
        temp.push(".tmp");
        let temp = PathBuf::from(temp);

        let written = fs::File::create(&temp)
            .and_then(|mut file| {
                file.write_all(&bytes)?;
                file.sync_all()
            })
            .map_err(|e| io_error("write", &temp, &e));
        if let Err(error) = written {
            let _ = fs::remove_file(&temp);
            return Err(error);
        }

        fs::rename(&temp, &target).map_err(|e| {
            let _ = fs::remove_file(&temp);
            io_error("replace", &target, &e)
        })?;
        info!(path = %target.display(), bytes = bytes.len(), "world saved");
        Ok(())
    }

    fn load_game(&self, path: &Path) -> Result<World> {
        let target = self.resolve(path);
        let bytes = fs::read(&target).map_err(|e| io_error("read", &target, &e))?;
        let world = from_bytes(&bytes)?;
        debug!(path = %target.display(), "world loaded");
        Ok(world)
    }
}
