//! Turning handler results into player-facing command results.
//!
//! The generator trusts the handler's success flag and message, then looks at
//! the world before and after the command to report what actually changed.
//! Failed commands never changed anything, so they get suggestions instead.

use std::collections::BTreeSet;
use std::time::Duration;

use tracing::trace;
use wayfarer_parser::{Intent, IntentType};
use wayfarer_world::{World, WorldView};

use crate::handler::HandlerResult;

/// Message for input nothing could handle.
pub const NOT_UNDERSTOOD: &str = "I don't understand that command.";

/// Suggestions offered when nothing was understood.
const BASIC_COMMANDS: [&str; 3] = ["look around", "inventory", "help"];

/// One observable consequence of a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Effect {
    /// What sort of effect this is, e.g. `state_change`.
    pub kind: String,
    /// Category of the affected entity (`player`, `inventory`, `npcs`, ...).
    pub entity_type: Option<String>,
    /// Id of the affected entity.
    pub entity_id: Option<String>,
    /// Property that changed.
    pub property: Option<String>,
    /// Value before the change.
    pub old_value: Option<String>,
    /// Value after the change.
    pub new_value: Option<String>,
    /// Human-readable summary.
    pub description: Option<String>,
    /// How long after the command the effect should be announced.
    pub delay: Duration,
}

impl Effect {
    /// Creates an effect of the given kind.
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// A `state_change` on `entity_type.property`.
    #[must_use]
    pub fn state_change(entity_type: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new("state_change")
            .with_entity_type(entity_type)
            .with_property(property)
    }

    /// Sets the entity type.
    #[must_use]
    pub fn with_entity_type(mut self, entity_type: impl Into<String>) -> Self {
        self.entity_type = Some(entity_type.into());
        self
    }

    /// Sets the entity id.
    #[must_use]
    pub fn with_entity_id(mut self, entity_id: impl Into<String>) -> Self {
        self.entity_id = Some(entity_id.into());
        self
    }

    /// Sets the property.
    #[must_use]
    pub fn with_property(mut self, property: impl Into<String>) -> Self {
        self.property = Some(property.into());
        self
    }

    /// Sets the old value.
    #[must_use]
    pub fn with_old_value(mut self, value: impl Into<String>) -> Self {
        self.old_value = Some(value.into());
        self
    }

    /// Sets the new value.
    #[must_use]
    pub fn with_new_value(mut self, value: impl Into<String>) -> Self {
        self.new_value = Some(value.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// The full result of one submitted command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command did what was asked.
    pub success: bool,
    /// Text shown to the player.
    pub message: String,
    /// Category of action (`movement`, `combat`, `unknown`, ...).
    pub action_type: String,
    /// What changed.
    pub effects: Vec<Effect>,
    /// Commands the player might try instead.
    pub alternatives: Vec<String>,
}

impl CommandResult {
    /// Returns true if any effect is scheduled for later.
    #[must_use]
    pub fn has_delayed_effects(&self) -> bool {
        self.effects.iter().any(|e| !e.delay.is_zero())
    }
}

/// Builds [`CommandResult`]s.
#[derive(Copy, Clone, Debug, Default)]
pub struct FeedbackGenerator;

impl FeedbackGenerator {
    /// Creates a generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Wraps a handler result, adding diff effects on success and
    /// alternatives on failure.
    #[must_use]
    pub fn generate_feedback(
        &self,
        raw_text: &str,
        intent: &Intent,
        result: HandlerResult,
        before: &World,
        after: &World,
    ) -> CommandResult {
        let HandlerResult {
            success,
            message,
            action_type,
            mut effects,
        } = result;

        let alternatives = if success {
            effects.extend(diff_effects(intent.kind, before, after));
            Vec::new()
        } else {
            alternatives(intent.kind, after)
        };

        trace!(raw_text, kind = %intent.kind, success, effects = effects.len(), "feedback generated");
        CommandResult {
            success,
            message,
            action_type,
            effects,
            alternatives,
        }
    }

    /// The result for input that no handler could take.
    #[must_use]
    pub fn not_understood(&self, raw_text: &str, intent: &Intent) -> CommandResult {
        trace!(raw_text, kind = %intent.kind, "not understood");
        CommandResult {
            success: false,
            message: NOT_UNDERSTOOD.to_string(),
            action_type: "unknown".to_string(),
            effects: Vec::new(),
            alternatives: BASIC_COMMANDS.map(String::from).to_vec(),
        }
    }
}

// =============================================================================
// Diffs
// =============================================================================

fn diff_effects(kind: IntentType, before: &World, after: &World) -> Vec<Effect> {
    let mut effects = Vec::new();
    match kind {
        IntentType::Move => {
            location_diff(before, after, &mut effects);
            met_diff(before, after, &mut effects);
        }
        IntentType::Load => location_diff(before, after, &mut effects),
        IntentType::Take => inventory_added(before, after, &mut effects),
        // A usable item can end a fight, which may hand over loot.
        IntentType::Use => {
            inventory_removed(before, after, &mut effects);
            stat_diff(before, after, &mut effects);
            inventory_added(before, after, &mut effects);
        }
        IntentType::Talk => met_diff(before, after, &mut effects),
        IntentType::Equip => equipment_diff(before, after, &mut effects),
        IntentType::Attack | IntentType::Block | IntentType::Dodge | IntentType::Flee => {
            stat_diff(before, after, &mut effects);
            inventory_added(before, after, &mut effects);
        }
        _ => {}
    }
    effects
}

fn location_diff(before: &World, after: &World, effects: &mut Vec<Effect>) {
    let (old, new) = (before.player_location(), after.player_location());
    if old == new {
        return;
    }
    let old_name = before.location_name(old).unwrap_or_else(|| old.to_string());
    let new_name = after.location_name(new).unwrap_or_else(|| new.to_string());
    effects.push(
        Effect::state_change("player", "location")
            .with_old_value(old)
            .with_new_value(new)
            .with_description(format!("You moved from {old_name} to {new_name}.")),
    );
}

fn inventory_added(before: &World, after: &World, effects: &mut Vec<Effect>) {
    let had: BTreeSet<&String> = before.inventory_ids().iter().collect();
    for id in after.inventory_ids().iter().filter(|id| !had.contains(id)) {
        let name = after.item(id).map_or_else(|| id.clone(), |i| i.name.clone());
        effects.push(
            Effect::state_change("inventory", "items")
                .with_entity_id(id.clone())
                .with_new_value(id.clone())
                .with_description(format!("Added {name} to your inventory.")),
        );
    }
}

fn inventory_removed(before: &World, after: &World, effects: &mut Vec<Effect>) {
    let has: BTreeSet<&String> = after.inventory_ids().iter().collect();
    for id in before.inventory_ids().iter().filter(|id| !has.contains(id)) {
        let name = before.item(id).map_or_else(|| id.clone(), |i| i.name.clone());
        effects.push(
            Effect::state_change("inventory", "items")
                .with_entity_id(id.clone())
                .with_old_value(id.clone())
                .with_description(format!("Removed {name} from your inventory.")),
        );
    }
}

fn met_diff(before: &World, after: &World, effects: &mut Vec<Effect>) {
    for npc in after.npcs().filter(|n| n.met) {
        if before.npc(&npc.id).is_some_and(|n| n.met) {
            continue;
        }
        effects.push(
            Effect::state_change("npcs", "met")
                .with_entity_id(npc.id.clone())
                .with_old_value("false")
                .with_new_value("true")
                .with_description(format!("You've now met {}.", npc.name)),
        );
    }
}

fn equipment_diff(before: &World, after: &World, effects: &mut Vec<Effect>) {
    let slots = [
        ("weapon", &before.player().weapon, &after.player().weapon),
        ("armor", &before.player().armor, &after.player().armor),
    ];
    for (slot, old, new) in slots {
        if old == new {
            continue;
        }
        let mut effect = Effect::state_change("equipment", slot);
        if let Some(old) = old {
            effect = effect.with_old_value(old.clone());
        }
        if let Some(new) = new {
            let name = after.item(new).map_or_else(|| new.clone(), |i| i.name.clone());
            effect = effect
                .with_new_value(new.clone())
                .with_description(format!("Equipped {name} as your {slot}."));
        }
        effects.push(effect);
    }
}

fn stat_diff(before: &World, after: &World, effects: &mut Vec<Effect>) {
    let (old, new) = (before.player(), after.player());
    if old.health != new.health {
        effects.push(
            Effect::state_change("player", "health")
                .with_old_value(old.health.to_string())
                .with_new_value(new.health.to_string())
                .with_description(format!("Health: {} -> {}", old.health, new.health)),
        );
    }
    if old.level != new.level {
        effects.push(
            Effect::state_change("player", "level")
                .with_old_value(old.level.to_string())
                .with_new_value(new.level.to_string())
                .with_description(format!("You are now level {}.", new.level)),
        );
    }
    if old.experience != new.experience || old.level != new.level {
        effects.push(
            Effect::state_change("player", "experience")
                .with_old_value(old.experience.to_string())
                .with_new_value(new.experience.to_string()),
        );
    }
}

// =============================================================================
// Alternatives
// =============================================================================

fn alternatives(kind: IntentType, world: &World) -> Vec<String> {
    let here = world.player_location();
    let names = |entities: Vec<wayfarer_world::EntitySummary>, verb: &str| {
        entities
            .into_iter()
            .map(|e| format!("{verb} {}", e.name))
            .collect::<Vec<_>>()
    };
    match kind {
        IntentType::Move => names(world.exits_at(here), "go to"),
        IntentType::Take => names(world.items_at(here), "take"),
        IntentType::Use => names(world.inventory(), "use"),
        IntentType::Equip => names(world.inventory(), "equip"),
        IntentType::Talk => names(world.npcs_at(here), "talk to"),
        IntentType::Attack => names(
            world.npcs_at(here).into_iter().filter(|n| n.hostile).collect(),
            "attack",
        ),
        IntentType::Block | IntentType::Dodge | IntentType::Flee => {
            ["attack", "block", "dodge", "flee"].map(String::from).to_vec()
        }
        IntentType::Examine => vec!["look around".to_string()],
        IntentType::Unknown => BASIC_COMMANDS.map(String::from).to_vec(),
        _ => Vec::new(),
    }
}
