//! EQUIP.

use std::sync::Arc;

use tracing::info;
use wayfarer_parser::{Intent, IntentType};

use super::carried_item;
use crate::combat::Armory;
use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};

const INTENTS: &[IntentType] = &[IntentType::Equip];
const ACTION: &str = "inventory";

/// Puts a carried weapon or armor into its slot.
///
/// Refused mid-fight: combatants are snapshotted when an encounter starts,
/// so a swap would not reach the fight in progress.
#[derive(Clone, Debug)]
pub struct EquipHandler {
    armory: Arc<Armory>,
}

impl Default for EquipHandler {
    fn default() -> Self {
        Self::new(Arc::new(Armory::standard()))
    }
}

impl EquipHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new(armory: Arc<Armory>) -> Self {
        Self { armory }
    }
}

impl CommandHandler for EquipHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Inventory
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(wanted) = intent.parameter("item").filter(|i| !i.trim().is_empty()) else {
            return HandlerResult::failure("What do you want to equip?", ACTION);
        };
        if cx.in_combat() {
            return HandlerResult::failure("There's no time to change gear in the middle of a fight.", ACTION);
        }
        let not_carried = || HandlerResult::failure(format!("You don't have {wanted} in your inventory."), ACTION);
        let Some(item_id) = carried_item(cx, wanted) else {
            return not_carried();
        };
        let Some(item) = cx.world.item(&item_id) else {
            return not_carried();
        };

        let name = item.name.clone();
        let is_weapon = self.armory.weapon(item).is_some();
        let is_armor = !is_weapon && self.armory.armor(item).is_some();
        let player = cx.world.player_mut();
        if is_weapon {
            player.weapon = Some(item_id.clone());
        } else if is_armor {
            player.armor = Some(item_id.clone());
        } else {
            return HandlerResult::failure(format!("You can't equip {name}."), ACTION);
        }

        info!(item = %item_id, slot = if is_weapon { "weapon" } else { "armor" }, "item equipped");
        HandlerResult::success(format!("You equip the {name}."), ACTION)
    }
}
