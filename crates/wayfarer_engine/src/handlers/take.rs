//! TAKE.

use tracing::info;
use wayfarer_foundation::{EntityKind, EntityRef};
use wayfarer_parser::{Intent, IntentType};
use wayfarer_world::WorldView;

use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};

const INTENTS: &[IntentType] = &[IntentType::Take];
const ACTION: &str = "interaction";

/// Picks up a portable item lying at the player's location.
#[derive(Clone, Debug, Default)]
pub struct TakeHandler;

impl TakeHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CommandHandler for TakeHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Interaction
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(wanted) = intent.parameter("item").filter(|i| !i.trim().is_empty()) else {
            return HandlerResult::failure("What do you want to take?", ACTION);
        };
        let unavailable = || HandlerResult::failure(format!("There's no {wanted} here that you can take."), ACTION);

        let Some(reference) = cx.context.resolve_reference(wanted, &*cx.world) else {
            return unavailable();
        };
        if reference.kind == EntityKind::Inventory {
            let name = cx.world.item(&reference.id).map_or(wanted, |i| i.name.as_str());
            return HandlerResult::failure(format!("You already have the {name}."), ACTION);
        }
        if reference.kind != EntityKind::Items {
            return unavailable();
        }

        let here = cx.world.player_location().to_string();
        let Some(item) = cx.world.item(&reference.id) else {
            return unavailable();
        };
        if item.location.as_deref() != Some(here.as_str()) || !item.portable {
            return unavailable();
        }
        let name = item.name.clone();

        if cx.world.take_item(&reference.id).is_err() {
            return unavailable();
        }
        info!(item = %reference.id, "item taken");
        cx.context
            .add_interaction(IntentType::Take, EntityRef::inventory(reference.id), &*cx.world);
        HandlerResult::success(format!("You take the {name} and add it to your inventory."), ACTION)
    }
}
