//! A short adventure played end to end through `submit_command`.

use wayfarer_runtime::{GameSession, SessionConfig};
use wayfarer_world::{EnemyProfile, Feature, Gender, Item, Location, Npc, World, WorldView};

pub fn hamlet() -> World {
    World::new("green")
        .with_location(
            Location::new("green", "Village Green")
                .with_description("Sheep graze between the cottages.")
                .with_connection("smithy")
                .with_connection("woods")
                .with_feature(Feature::new("well", "Stone Well", "The rope is frayed.")),
        )
        .with_location(
            Location::new("smithy", "Smithy")
                .with_description("The forge glows orange.")
                .with_connection("green"),
        )
        .with_location(
            Location::new("woods", "Whispering Woods")
                .with_description("Branches creak overhead.")
                .with_connection("green"),
        )
        .with_item(Item::new("bread", "Loaf of Bread").at("green"))
        .with_item(Item::new("iron_sword", "Iron Sword").at("smithy"))
        .with_item(Item::new("wolf_pelt", "Wolf Pelt"))
        .with_npc(
            Npc::new("smith", "Gruff Smith")
                .at("smithy")
                .with_gender(Gender::Male)
                .with_greeting("Mind the sparks."),
        )
        .with_npc(
            Npc::new("wolf", "Grey Wolf").at("woods").hostile(
                EnemyProfile::new("beast", 12, 9, 1)
                    .with_loot("wolf_pelt")
                    .with_experience(40),
            ),
        )
        .with_carried(Item::new("potion", "Healing Potion"))
}

pub fn session() -> GameSession {
    let config = SessionConfig::deterministic(3);
    let services = GameSession::services(&config, None);
    GameSession::with_services(hamlet(), config, &services)
}

#[test]
fn look_around_describes_the_green() {
    let mut game = session();
    let result = game.submit_command("look around");

    assert!(result.success);
    assert!(result.message.contains("Village Green"));
    assert!(result.message.contains("Loaf of Bread"));
}

#[test]
fn pick_up_then_refer_back() {
    let mut game = session();

    assert!(game.submit_command("pick up the bread").success);
    let examined = game.submit_command("examine it");

    assert!(examined.success);
    assert!(game.world().is_carried("bread"));
    assert_eq!(game.world().turn(), 2);
}

#[test]
fn arm_up_and_win_a_fight() {
    let mut game = session();

    assert!(game.submit_command("go to smithy").success);
    assert!(game.submit_command("talk to the smith").success);
    assert!(game.submit_command("take sword").success);
    let equipped = game.submit_command("wield sword");
    assert!(equipped.success, "{}", equipped.message);
    assert_eq!(game.world().player().weapon.as_deref(), Some("iron_sword"));

    assert!(game.submit_command("go to green").success);
    assert!(game.submit_command("go to woods").success);

    let engaged = game.submit_command("attack wolf");
    assert!(engaged.success, "{}", engaged.message);
    assert!(game.encounter().is_some());

    // Iron sword: 10 + 5 attack against defense 1 fells a 12 health wolf.
    let blow = game.submit_command("attack");
    assert!(blow.success);
    assert!(game.encounter().is_none());
    assert!(game.world().npc("wolf").is_none());
    assert!(game.world().is_carried("wolf_pelt"));
    assert_eq!(game.world().player().experience, 40);
    assert!(blow.effects.iter().any(|e| e.entity_id.as_deref() == Some("wolf_pelt")));
}

#[test]
fn arriving_introduces_the_locals() {
    let mut game = session();
    let moved = game.submit_command("go to smithy");

    assert!(moved.success);
    assert!(game.world().npc("smith").is_some_and(|n| n.met));
    assert!(moved.effects.iter().any(|e| {
        e.entity_id.as_deref() == Some("smith") && e.property.as_deref() == Some("met")
    }));
}

#[test]
fn finishing_blow_from_an_item_reports_loot() {
    let world = hamlet().with_carried(Item::new("poison_vial", "Poison Vial"));
    let config = SessionConfig::deterministic(3);
    let services = GameSession::services(&config, None);
    let mut game = GameSession::with_services(world, config, &services);

    game.submit_command("go to woods");
    assert!(game.submit_command("attack wolf").success);
    assert!(game.submit_command("attack").success);

    // 9 damage leaves the wolf on 3; poison ticks for 3 at the end of the turn.
    let finish = game.submit_command("use poison vial");
    assert!(finish.success, "{}", finish.message);
    assert!(game.encounter().is_none());
    assert!(game.world().is_carried("wolf_pelt"));
    assert!(!game.world().is_carried("poison_vial"));
    assert!(finish.effects.iter().any(|e| {
        e.entity_id.as_deref() == Some("wolf_pelt") && e.new_value.as_deref() == Some("wolf_pelt")
    }));
}

#[test]
fn cannot_walk_away_from_a_fight() {
    let mut game = session();
    game.submit_command("go to woods");
    game.submit_command("attack the wolf");

    let escape = game.submit_command("go to green");
    assert!(!escape.success);
    assert_eq!(game.world().player_location(), "woods");

    let fled = game.submit_command("flee");
    assert!(fled.success);
    assert!(game.encounter().is_none());
    assert!(game.world().npc("wolf").is_some());
}

#[test]
fn healing_outside_combat_consumes_potion() {
    let mut game = session();
    game.submit_command("go to woods");
    game.submit_command("attack wolf");
    game.submit_command("attack");
    game.submit_command("flee");
    let wounded = game.world().player().health;
    assert!(wounded < 100);

    let healed = game.submit_command("use potion");
    assert!(healed.success, "{}", healed.message);
    assert!(!game.world().is_carried("potion"));
    assert!(game.world().player().health > wounded);
}

#[test]
fn gibberish_offers_basic_commands() {
    let mut game = session();
    let result = game.submit_command("frobnicate the gostak");

    assert!(!result.success);
    assert_eq!(result.action_type, "unknown");
    assert!(!result.alternatives.is_empty());
    assert_eq!(game.world().turn(), 0);
}
