//! INVENTORY.

use wayfarer_parser::{Intent, IntentType};
use wayfarer_world::WorldView;

use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};

const INTENTS: &[IntentType] = &[IntentType::Inventory];

/// Lists carried items.
#[derive(Clone, Debug, Default)]
pub struct InventoryHandler;

impl InventoryHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandHandler for InventoryHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Inventory
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, _intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let items = cx.world.inventory();
        if items.is_empty() {
            return HandlerResult::success("Your inventory is empty.", "inventory");
        }
        let names = items.into_iter().map(|e| e.name).collect::<Vec<_>>().join(", ");
        HandlerResult::success(format!("Inventory: {names}"), "inventory")
    }
}
