//! USE.

use std::sync::Arc;

use tracing::info;
use wayfarer_foundation::EntityRef;
use wayfarer_parser::{Intent, IntentType};

use super::carried_item;
use super::combat::play_turn;
use crate::combat::{Armory, CombatTuning, Consumable, PlayerAction};
use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};
use crate::narrative::{Narration, NarrativeQuery};

const INTENTS: &[IntentType] = &[IntentType::Use];
const ACTION: &str = "interaction";

/// Uses a carried item.
///
/// In a fight a consumable becomes the turn's action and is used up only if
/// the encounter accepts it. Outside a fight healing items heal, and
/// anything else is described by the narrator.
#[derive(Clone, Debug)]
pub struct UseHandler {
    narration: Narration,
    armory: Arc<Armory>,
    tuning: Arc<CombatTuning>,
}

impl Default for UseHandler {
    fn default() -> Self {
        Self::new(
            Narration::default(),
            Arc::new(Armory::standard()),
            Arc::new(CombatTuning::default()),
        )
    }
}

impl UseHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new(narration: Narration, armory: Arc<Armory>, tuning: Arc<CombatTuning>) -> Self {
        Self {
            narration,
            armory,
            tuning,
        }
    }

    fn use_in_combat(&self, cx: &mut HandlerContext<'_>, item_id: &str, name: String) -> HandlerResult {
        let consumable = cx.world.item(item_id).and_then(|item| self.armory.consumable(item));
        let Some(consumable) = consumable else {
            return HandlerResult::failure(format!("You can't use {name} in combat."), "combat");
        };

        let result = play_turn(cx, PlayerAction::UseItem { name, consumable }, &self.tuning);
        if result.success {
            cx.world.remove_from_inventory(item_id);
        }
        result
    }
}

impl CommandHandler for UseHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Interaction
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(wanted) = intent.parameter("item").filter(|i| !i.trim().is_empty()) else {
            return HandlerResult::failure("What do you want to use?", ACTION);
        };
        let Some(item_id) = carried_item(cx, wanted) else {
            return HandlerResult::failure(format!("You don't have {wanted} in your inventory."), ACTION);
        };
        let Some(item) = cx.world.item(&item_id) else {
            return HandlerResult::failure(format!("You don't have {wanted} in your inventory."), ACTION);
        };
        let name = item.name.clone();
        let consumable = self.armory.consumable(item);

        if cx.in_combat() {
            return self.use_in_combat(cx, &item_id, name);
        }

        let message = if let Some(Consumable::Heal(amount)) = consumable {
            let healed = cx.world.player_mut().heal(amount);
            cx.world.remove_from_inventory(&item_id);
            info!(item = %item_id, healed, "consumable used");
            format!("You use the {name} and recover {healed} health.")
        } else {
            let query = NarrativeQuery::Use {
                item: item_id.clone(),
                target: intent.parameter("target").map(str::to_string),
            };
            let text = self.narration.narrate(&query, cx.world);
            cx.context
                .add_interaction(IntentType::Use, EntityRef::inventory(item_id), &*cx.world);
            text
        };
        HandlerResult::success(message, ACTION)
    }
}
