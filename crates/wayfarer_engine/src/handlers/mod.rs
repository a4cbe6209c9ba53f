//! Built-in command handlers.

mod combat;
mod equip;
mod examine;
mod inventory;
mod movement;
mod system;
mod take;
mod talk;
mod use_item;

pub use combat::CombatHandler;
pub use equip::EquipHandler;
pub use examine::ExamineHandler;
pub use inventory::InventoryHandler;
pub use movement::MovementHandler;
pub use system::{HELP_TEXT, SystemHandler};
pub use take::TakeHandler;
pub use talk::TalkHandler;
pub use use_item::UseHandler;

use wayfarer_foundation::EntityKind;
use wayfarer_world::WorldView;

use crate::handler::HandlerContext;

/// Finds a carried item by the player's words: pronoun or resolved
/// reference first, then exact and partial name or id matches against the
/// inventory.
pub(crate) fn carried_item(cx: &HandlerContext<'_>, text: &str) -> Option<String> {
    if let Some(reference) = cx.context.resolve_reference(text, &*cx.world) {
        let is_item = matches!(reference.kind, EntityKind::Items | EntityKind::Inventory);
        if is_item && cx.world.is_carried(&reference.id) {
            return Some(reference.id);
        }
    }

    let wanted = normalize(text);
    let inventory = cx.world.inventory();
    let id_matches = |id: &str| normalize(&id.replace('_', " ")) == wanted;
    inventory
        .iter()
        .find(|e| normalize(&e.name) == wanted || id_matches(e.id()))
        .or_else(|| inventory.iter().find(|e| normalize(&e.name).contains(&wanted)))
        .map(|e| e.id().to_string())
}

/// Finds an NPC at the player's location: a resolved reference first, then
/// a partial name match.
pub(crate) fn npc_here(cx: &HandlerContext<'_>, text: &str) -> Option<String> {
    let here = cx.world.player_location();
    let present = cx.world.npcs_at(here);

    if let Some(reference) = cx.context.resolve_reference(text, &*cx.world) {
        if reference.kind == EntityKind::Npcs && present.iter().any(|n| n.reference == reference) {
            return Some(reference.id);
        }
    }

    let wanted = normalize(text);
    let wanted = wanted.strip_prefix("the ").unwrap_or(&wanted);
    present
        .iter()
        .find(|n| normalize(&n.name).contains(wanted))
        .map(|n| n.id().to_string())
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}
