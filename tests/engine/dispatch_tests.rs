//! Dispatch tests.
//!
//! Tests for recognized intents flowing through the registry into the
//! built-in handlers, and for feedback built from the resulting world diff.

use wayfarer_engine::{
    CombatEncounter, CommandCategory, CommandHandler, CommandRegistry, CommandResult,
    FeedbackGenerator, Handler, HandlerContext, HandlerResult, HandlerServices, SessionControl,
};
use wayfarer_foundation::EntityRef;
use wayfarer_parser::{CommandContext, Intent, IntentRecognizer, IntentType};
use wayfarer_world::{Gender, Item, Location, Npc, World, WorldView};

struct Harness {
    recognizer: IntentRecognizer,
    registry: CommandRegistry,
    world: World,
    context: CommandContext,
    encounter: Option<CombatEncounter>,
    control: SessionControl,
}

impl Harness {
    fn new() -> Self {
        Self {
            recognizer: IntentRecognizer::standard(),
            registry: CommandRegistry::with_builtins(&HandlerServices::default()),
            world: library(),
            context: CommandContext::new(),
            encounter: None,
            control: SessionControl::new(),
        }
    }

    fn run(&mut self, text: &str) -> CommandResult {
        let intent = self.recognizer.recognize(text).remove(0);
        let handler = self.registry.get_handler_for_intent(&intent).unwrap();
        let before = self.world.clone();
        let outcome = handler.handle(
            &intent,
            &mut HandlerContext::new(
                &mut self.world,
                &mut self.context,
                &mut self.encounter,
                &mut self.control,
            ),
        );
        FeedbackGenerator::new().generate_feedback(text, &intent, outcome, &before, &self.world)
    }
}

fn library() -> World {
    World::new("reading_room")
        .with_location(
            Location::new("reading_room", "Reading Room")
                .with_description("Dust hangs in the lamplight.")
                .with_connection("stacks"),
        )
        .with_location(Location::new("stacks", "The Stacks").with_connection("reading_room"))
        .with_item(Item::new("tome", "Leather Tome").at("reading_room"))
        .with_item(Item::new("desk", "Oak Desk").at("reading_room").fixed())
        .with_npc(
            Npc::new("librarian", "Head Librarian")
                .at("stacks")
                .with_gender(Gender::Female)
                .with_greeting("Quiet, please."),
        )
}

#[test]
fn take_absent_item_fails_without_mutation() {
    let mut harness = Harness::new();
    let before = harness.world.inventory_ids().clone();

    let result = harness.run("take scroll");

    assert!(!result.success);
    assert_eq!(harness.world.inventory_ids(), &before);
    assert!(result.effects.is_empty());
    assert!(result.alternatives.contains(&"take Leather Tome".to_string()));
}

#[test]
fn take_fixed_item_fails() {
    let mut harness = Harness::new();
    let result = harness.run("take the desk");

    assert!(!result.success);
    assert!(!harness.world.is_carried("desk"));
}

#[test]
fn take_reports_inventory_effect_and_binds_it() {
    let mut harness = Harness::new();

    let result = harness.run("take tome");

    assert!(result.success);
    assert!(harness.world.is_carried("tome"));
    let effect = result
        .effects
        .iter()
        .find(|e| e.entity_type.as_deref() == Some("inventory"))
        .unwrap();
    assert_eq!(effect.new_value.as_deref(), Some("tome"));
    assert_eq!(
        harness.context.resolve_reference("it", &harness.world),
        Some(EntityRef::inventory("tome"))
    );
}

#[test]
fn move_then_talk_to_her() {
    let mut harness = Harness::new();

    let moved = harness.run("go to the stacks");
    assert!(moved.success, "{}", moved.message);
    assert_eq!(harness.world.player_location(), "stacks");
    assert!(moved.effects.iter().any(|e| e.property.as_deref() == Some("location")));

    let talked = harness.run("talk to librarian");
    assert!(talked.success);
    assert!(talked.message.contains("Quiet, please."));

    let again = harness.run("talk to her");
    assert!(again.success, "{}", again.message);
}

#[test]
fn blocked_exit_suggests_real_ones() {
    let mut harness = Harness::new();
    let result = harness.run("go west");

    assert!(!result.success);
    assert_eq!(harness.world.player_location(), "reading_room");
    assert!(result.alternatives.iter().any(|a| a.contains("The Stacks")));
}

#[test]
fn combat_intents_outside_a_fight() {
    let mut harness = Harness::new();
    let result = harness.run("block");

    assert!(!result.success);
    assert_eq!(result.action_type, "combat");
}

#[test]
fn unknown_intent_has_no_builtin_handler() {
    let harness = Harness::new();
    let intent = Intent::unknown("dance wildly");
    assert!(harness.registry.get_handler_for_intent(&intent).is_none());
}

#[derive(Debug)]
struct Dance;

impl CommandHandler for Dance {
    fn category(&self) -> CommandCategory {
        CommandCategory::Custom
    }

    fn supported_intents(&self) -> &[IntentType] {
        &[IntentType::Unknown, IntentType::Inventory]
    }

    fn handle(&self, _intent: &Intent, _cx: &mut HandlerContext<'_>) -> HandlerResult {
        HandlerResult::success("You dance a little jig.", "custom")
    }
}

#[test]
fn custom_handlers_come_after_builtins() {
    let mut harness = Harness::new();
    harness.registry.register_custom(Box::new(Dance));

    let unknown = harness
        .registry
        .get_handler_for_intent(&Intent::unknown("dance"))
        .unwrap();
    assert!(matches!(unknown, Handler::Custom(_)));

    // The built-in inventory handler is found first.
    let result = harness.run("inventory");
    assert_eq!(result.action_type, "inventory");
    assert_eq!(harness.registry.handlers(CommandCategory::Custom).len(), 1);
}
