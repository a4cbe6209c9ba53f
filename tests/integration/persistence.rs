//! Saving and loading through the SAVE and LOAD commands.

use std::path::Path;
use std::sync::Arc;

use wayfarer_engine::Persistence;
use wayfarer_runtime::{FilePersistence, GameSession, SessionConfig};
use wayfarer_world::WorldView;

use crate::walkthrough::hamlet;

fn session_in(dir: &Path) -> GameSession {
    let config = SessionConfig::deterministic(5).with_save_path("adventure.sav");
    let store: Arc<dyn Persistence> = Arc::new(FilePersistence::in_dir(dir));
    let services = GameSession::services(&config, Some(store));
    GameSession::with_services(hamlet(), config, &services)
}

#[test]
fn save_then_load_restores_progress() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = session_in(dir.path());

    game.submit_command("take bread");
    let saved = game.submit_command("save");
    assert!(saved.success, "{}", saved.message);
    assert_eq!(saved.message, "Game saved to adventure.sav.");
    assert!(dir.path().join("adventure.sav").exists());

    game.submit_command("go to smithy");
    game.submit_command("take sword");
    assert_eq!(game.world().player_location(), "smithy");

    let loaded = game.submit_command("load");
    assert!(loaded.success, "{}", loaded.message);
    assert_eq!(game.world().player_location(), "green");
    assert!(game.world().is_carried("bread"));
    assert!(!game.world().is_carried("iron_sword"));
    assert!(game.context().current_focus().is_none());
}

#[test]
fn named_save_slots() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = session_in(dir.path());

    assert!(game.submit_command("save game to morning").success);
    game.submit_command("go to woods");
    assert!(game.submit_command("save evening").success);

    assert!(game.submit_command("load game from morning").success);
    assert_eq!(game.world().player_location(), "green");
    assert!(game.submit_command("restore evening").success);
    assert_eq!(game.world().player_location(), "woods");
}

#[test]
fn loading_a_missing_file_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let mut game = session_in(dir.path());
    game.submit_command("take bread");

    let result = game.submit_command("load nowhere");

    assert!(!result.success);
    assert_eq!(result.message, "Failed to load game from nowhere.");
    assert!(game.world().is_carried("bread"));
}

#[test]
fn corrupt_save_leaves_world_alone() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken"), [0xc1, 0x00, 0xff]).unwrap();
    let mut game = session_in(dir.path());
    game.submit_command("take bread");

    assert!(!game.submit_command("load broken").success);
    assert!(game.world().is_carried("bread"));
}

#[test]
fn direct_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let store = FilePersistence::in_dir(dir.path());
    let mut game = session_in(dir.path());

    game.submit_command("go to smithy");
    game.save_to(&store, Path::new("direct.sav")).unwrap();
    game.submit_command("go to green");

    game.load_from(&store, Path::new("direct.sav")).unwrap();
    assert_eq!(game.world().player_location(), "smithy");
}

#[test]
fn saving_without_a_store_fails() {
    let mut game = crate::walkthrough::session();
    let result = game.submit_command("save");
    assert!(!result.success);
}
