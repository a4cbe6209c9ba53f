//! Command context tests.
//!
//! Tests for reference resolution, pronoun binding, and interaction memory.

use proptest::prelude::*;
use wayfarer_foundation::{EntityKind, EntityRef};
use wayfarer_parser::context::MAX_RECENT_INTERACTIONS;
use wayfarer_parser::{CommandContext, IntentType};
use wayfarer_world::{Feature, Gender, Item, Location, Npc, World};

fn armory() -> World {
    World::new("armory")
        .with_location(
            Location::new("armory", "Armory")
                .with_connection("yard")
                .with_feature(Feature::new("rack", "Weapon Rack", "Empty hooks line it.")),
        )
        .with_location(Location::new("yard", "Training Yard").with_connection("armory"))
        .with_item(Item::new("sword", "Sword").at("armory"))
        .with_item(Item::new("shield", "Dented Shield").at("armory"))
        .with_item(Item::new("bow", "Longbow").at("yard"))
        .with_npc(Npc::new("smith", "Old Smith").at("armory").with_gender(Gender::Male))
        .with_npc(Npc::new("ada", "Ada the Archer").at("yard").with_gender(Gender::Female))
        .with_carried(Item::new("whetstone", "Whetstone"))
}

#[test]
fn examine_sword_then_it() {
    let world = armory();
    let mut ctx = CommandContext::new();

    ctx.add_interaction(IntentType::Examine, EntityRef::item("sword"), &world);

    assert_eq!(ctx.resolve_reference("it", &world), Some(EntityRef::item("sword")));
}

#[test]
fn pronouns_follow_gender() {
    let world = armory();
    let mut ctx = CommandContext::new();

    ctx.add_interaction(IntentType::Talk, EntityRef::npc("smith"), &world);
    ctx.add_interaction(IntentType::Examine, EntityRef::item("shield"), &world);

    assert_eq!(ctx.resolve_reference("him", &world), Some(EntityRef::npc("smith")));
    assert_eq!(ctx.resolve_reference("it", &world), Some(EntityRef::item("shield")));
    assert_eq!(ctx.current_focus(), Some(&EntityRef::item("shield")));
}

#[test]
fn this_and_that_alias_it() {
    let world = armory();
    let mut ctx = CommandContext::new();
    ctx.add_interaction(IntentType::Examine, EntityRef::item("sword"), &world);

    assert_eq!(ctx.resolve_reference("this", &world), Some(EntityRef::item("sword")));
    assert_eq!(ctx.resolve_reference("that", &world), Some(EntityRef::item("sword")));
}

#[test]
fn resolution_scans_visible_then_inventory() {
    let world = armory();
    let ctx = CommandContext::new();

    assert_eq!(ctx.resolve_reference("the dented shield", &world), Some(EntityRef::item("shield")));
    assert_eq!(ctx.resolve_reference("smith", &world), Some(EntityRef::npc("smith")));
    assert_eq!(
        ctx.resolve_reference("rack", &world),
        Some(EntityRef::new(EntityKind::Features, "rack"))
    );
    assert_eq!(
        ctx.resolve_reference("training yard", &world),
        Some(EntityRef::new(EntityKind::Exits, "yard"))
    );
    assert_eq!(ctx.resolve_reference("whetstone", &world), Some(EntityRef::inventory("whetstone")));
}

#[test]
fn entities_elsewhere_do_not_resolve() {
    let world = armory();
    let ctx = CommandContext::new();

    assert_eq!(ctx.resolve_reference("longbow", &world), None);
    assert_eq!(ctx.resolve_reference("ada", &world), None);
}

#[test]
fn visibility_is_recomputed_after_moving() {
    let mut world = armory();
    let ctx = CommandContext::new();
    world.move_player("yard").unwrap();

    assert_eq!(ctx.resolve_reference("longbow", &world), Some(EntityRef::item("bow")));
    assert_eq!(ctx.resolve_reference("sword", &world), None);
}

#[test]
fn clear_forgets_everything() {
    let world = armory();
    let mut ctx = CommandContext::new();
    ctx.add_interaction(IntentType::Examine, EntityRef::item("sword"), &world);

    ctx.clear();

    assert_eq!(ctx.recent_interactions().len(), 0);
    assert!(ctx.current_focus().is_none());
    assert!(ctx.last_referenced("it").is_none());
}

// =============================================================================
// Properties
// =============================================================================

fn target() -> impl Strategy<Value = EntityRef> {
    prop_oneof![
        Just(EntityRef::item("sword")),
        Just(EntityRef::item("shield")),
        Just(EntityRef::npc("smith")),
        Just(EntityRef::new(EntityKind::Features, "rack")),
        Just(EntityRef::inventory("whetstone")),
    ]
}

fn phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("it".to_string()),
        Just("him".to_string()),
        Just("the sword".to_string()),
        Just("shield".to_string()),
        Just("old".to_string()),
        "[a-z ]{0,12}",
    ]
}

proptest! {
    #[test]
    fn recent_interactions_are_bounded_fifo(targets in prop::collection::vec(target(), 0..20)) {
        let world = armory();
        let mut ctx = CommandContext::new();
        for target in &targets {
            ctx.add_interaction(IntentType::Examine, target.clone(), &world);
        }

        let kept: Vec<_> = ctx.recent_interactions().map(|i| i.target.clone()).collect();
        let expected_len = targets.len().min(MAX_RECENT_INTERACTIONS);
        prop_assert_eq!(kept.len(), expected_len);
        prop_assert_eq!(&kept[..], &targets[targets.len() - expected_len..]);
        prop_assert_eq!(ctx.current_focus(), targets.last());
    }

    #[test]
    fn resolution_is_idempotent(
        targets in prop::collection::vec(target(), 0..6),
        text in phrase(),
    ) {
        let world = armory();
        let mut ctx = CommandContext::new();
        for target in targets {
            ctx.add_interaction(IntentType::Examine, target, &world);
        }

        let first = ctx.resolve_reference(&text, &world);
        let second = ctx.resolve_reference(&text, &world);
        prop_assert_eq!(first, second);
    }
}
