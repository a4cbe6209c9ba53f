//! Session lifecycle: isolation, deferred effects, extension, and shutdown.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use wayfarer_engine::{CommandPriority, CommandResult};
use wayfarer_foundation::ManualClock;
use wayfarer_runtime::{GameSession, SessionConfig, logging};
use wayfarer_world::{EnemyProfile, Npc, WorldView};

use crate::walkthrough::{hamlet, session};

#[test]
fn sessions_share_nothing() {
    let handles: Vec<_> = ["smithy", "woods"]
        .into_iter()
        .map(|place| {
            thread::spawn(move || {
                let mut game = session();
                game.submit_command(&format!("go to {place}"));
                game.world().player_location().to_string()
            })
        })
        .collect();

    let places: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(places, ["smithy", "woods"]);
}

#[test]
fn quitting_ends_the_loop() {
    let mut game = session();
    let result = game.submit_command("quit");

    assert!(result.success);
    assert_eq!(result.message, "Thanks for playing! The game will now exit.");
    assert!(!game.is_running());
}

#[test]
fn defeat_ends_the_loop() {
    let config = SessionConfig::deterministic(9);
    let services = GameSession::services(&config, None);
    let world = hamlet().with_npc(
        Npc::new("troll", "Cave Troll")
            .at("green")
            .hostile(EnemyProfile::new("giant", 500, 300, 50)),
    );
    let mut game = GameSession::with_services(world, config, &services);

    game.submit_command("attack troll");
    let result = game.submit_command("attack");

    assert!(result.success);
    assert_eq!(game.world().player().health, 0);
    assert!(!game.is_running());
}

#[test]
fn scheduled_effects_surface_when_drained() {
    let clock = ManualClock::new();
    let mut game = session().with_clock(Arc::new(clock.clone()));
    game.submit_command("take bread");

    let turn = game.world().turn();
    game.schedule(
        "weather",
        || {
            Ok(CommandResult {
                success: true,
                message: "Rain begins to fall.".to_string(),
                action_type: "weather".to_string(),
                effects: Vec::new(),
                alternatives: Vec::new(),
            })
        },
        CommandPriority::Low,
        Duration::from_secs(2),
    );

    assert!(game.drain_queue().is_empty());
    clock.advance(Duration::from_secs(2));
    let drained = game.drain_queue();
    assert_eq!(drained.len(), 1);
    assert_eq!(drained[0].message, "Rain begins to fall.");
    assert_eq!(game.world().turn(), turn);
}

#[test]
fn logging_can_be_installed_twice() {
    logging::init(true);
    assert!(!logging::init(false));
}
