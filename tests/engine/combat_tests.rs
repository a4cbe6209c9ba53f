//! Combat tests.
//!
//! Tests for encounters built from world state and for writing their outcome
//! back into the world.

use proptest::prelude::*;
use wayfarer_engine::combat::{Consumable, StatusTarget, apply_outcome};
use wayfarer_engine::{
    Armory, CombatEncounter, CombatEntity, CombatStatus, CombatTuning, PlayerAction, StatusEffect,
};
use wayfarer_world::{EnemyProfile, Item, Npc, World};

fn arena() -> World {
    World::new("arena").with_carried(Item::new("short_sword", "Short Sword"))
}

fn fight(world: &World, profile: &EnemyProfile, tuning: CombatTuning) -> CombatEncounter {
    let npc = Npc::new("foe", "Training Dummy").at("arena").hostile(profile.clone());
    let player = CombatEntity::player(world, &Armory::standard());
    let enemy = CombatEntity::enemy(&npc, profile);
    CombatEncounter::new(player, enemy, tuning, 11)
}

#[test]
fn attack_ten_against_defense_five() {
    let world = arena();
    let mut encounter = fight(&world, &EnemyProfile::new("dummy", 40, 0, 5), CombatTuning::default());

    let report = encounter.resolve_turn(PlayerAction::Attack).unwrap();

    assert_eq!(report.enemy_health, 35);
    assert_eq!(encounter.enemy().health, 35);
}

#[test]
fn wielded_weapon_adds_attack() {
    let mut world = arena();
    world.player_mut().weapon = Some("short_sword".to_string());
    let mut encounter = fight(&world, &EnemyProfile::new("dummy", 40, 0, 5), CombatTuning::default());

    // Sword bonus 5: (10 + 5) - 5.
    let report = encounter.resolve_turn(PlayerAction::Attack).unwrap();
    assert_eq!(report.enemy_health, 30);
}

#[test]
fn poison_ticks_at_end_of_turn() {
    let world = arena();
    let mut encounter = fight(&world, &EnemyProfile::new("dummy", 40, 0, 99), CombatTuning::default());

    let report = encounter
        .resolve_turn(PlayerAction::UseItem {
            name: "Vial of Poison".to_string(),
            consumable: Consumable::Status {
                effect: StatusEffect::Poisoned,
                target: StatusTarget::Enemy,
            },
        })
        .unwrap();

    assert_eq!(report.enemy_health, 37);
    assert!(encounter.enemy().has_status(StatusEffect::Poisoned));
}

#[test]
fn victory_rewards_flow_into_world() {
    let mut world = arena()
        .with_item(Item::new("fang", "Wolf Fang"))
        .with_npc(Npc::new("foe", "Training Dummy").at("arena"));
    world.player_mut().experience = 90;
    let profile = EnemyProfile::new("dummy", 5, 0, 0)
        .with_loot("fang")
        .with_experience(30);
    let mut encounter = fight(&world, &profile, CombatTuning::default());

    encounter.resolve_turn(PlayerAction::Attack).unwrap();
    assert_eq!(encounter.status(), CombatStatus::PlayerVictory);

    let outcome = encounter.finalize().unwrap();
    let messages = apply_outcome(&mut world, &outcome, &CombatTuning::default());

    assert!(world.npc("foe").is_none());
    assert!(world.is_carried("fang"));
    assert_eq!(world.player().level, 2);
    assert_eq!(world.player().experience, 20);
    assert!(messages.contains(&"You find Wolf Fang.".to_string()));
    assert!(messages.contains(&"You reached level 2!".to_string()));
}

#[test]
fn defeat_writes_zero_health() {
    let mut world = arena();
    let mut encounter = fight(&world, &EnemyProfile::new("ogre", 500, 500, 50), CombatTuning::default());

    encounter.resolve_turn(PlayerAction::Block).unwrap();
    assert_eq!(encounter.status(), CombatStatus::PlayerDefeated);

    let outcome = encounter.finalize().unwrap();
    apply_outcome(&mut world, &outcome, &CombatTuning::default());
    assert_eq!(world.player().health, 0);
    assert_eq!(world.player().experience, 0);
}

// =============================================================================
// Properties
// =============================================================================

fn action() -> impl Strategy<Value = PlayerAction> {
    prop_oneof![
        Just(PlayerAction::Attack),
        Just(PlayerAction::Block),
        Just(PlayerAction::Dodge),
        Just(PlayerAction::Flee),
    ]
}

proptest! {
    #[test]
    fn terminal_encounters_stay_put(
        health in 1i32..60,
        attack in 0i32..40,
        defense in 0i32..15,
        actions in prop::collection::vec(action(), 1..40),
    ) {
        let world = arena();
        let profile = EnemyProfile::new("brute", health, attack, defense);
        let mut encounter = fight(&world, &profile, CombatTuning::default());

        for action in actions {
            if !encounter.is_active() {
                break;
            }
            encounter.resolve_turn(action).unwrap();
        }
        prop_assume!(!encounter.is_active());

        let status = encounter.status();
        let health = (encounter.player().health, encounter.enemy().health);
        let err = encounter.resolve_turn(PlayerAction::Attack).unwrap_err();

        prop_assert!(err.is_encounter_terminal());
        prop_assert_eq!(encounter.status(), status);
        prop_assert_eq!((encounter.player().health, encounter.enemy().health), health);
    }
}
