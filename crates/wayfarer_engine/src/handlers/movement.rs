//! MOVE.

use tracing::{debug, info};
use wayfarer_parser::{Intent, IntentType};
use wayfarer_world::{EntitySummary, WorldView};

use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};

const INTENTS: &[IntentType] = &[IntentType::Move];
const ACTION: &str = "movement";

/// Direction words the player may use, mapped onto the word looked for in
/// exit names.
const CARDINALS: &[(&str, &str)] = &[
    ("north", "north"),
    ("n", "north"),
    ("south", "south"),
    ("s", "south"),
    ("east", "east"),
    ("e", "east"),
    ("west", "west"),
    ("w", "west"),
    ("up", "up"),
    ("u", "up"),
    ("down", "down"),
    ("d", "down"),
];

/// Moves the player along a connection.
///
/// The destination is found by matching the player's words against exit
/// names (and ids) as a case-insensitive substring, then by reading them as
/// a compass direction and looking for that word in exit names.
#[derive(Clone, Debug, Default)]
pub struct MovementHandler;

impl MovementHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn go(cx: &mut HandlerContext<'_>, exit: &EntitySummary, message: String) -> HandlerResult {
        let from = cx.world.player_location().to_string();
        if cx.world.move_player(exit.id()).is_err() {
            return HandlerResult::failure(format!("You can't go to {} from here.", exit.name), ACTION);
        }

        let met: Vec<String> = cx
            .world
            .npcs_at(exit.id())
            .into_iter()
            .map(|npc| npc.id().to_string())
            .collect();
        for npc in &met {
            // Listed by the world a moment ago; cannot be missing.
            let _ = cx.world.mark_met(npc);
        }

        info!(from = %from, to = %exit.id(), "player moved");
        HandlerResult::success(message, ACTION)
    }
}

fn names_match(exit: &EntitySummary, needle: &str) -> bool {
    exit.name.to_lowercase().contains(needle) || exit.id().replace('_', " ").to_lowercase().contains(needle)
}

impl CommandHandler for MovementHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Movement
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(direction) = intent.parameter("direction").filter(|d| !d.trim().is_empty()) else {
            return HandlerResult::failure("Which direction do you want to go?", ACTION);
        };
        if cx.in_combat() {
            return HandlerResult::failure("You can't leave while you're in combat!", ACTION);
        }

        let wanted = direction.trim().to_lowercase();
        let exits = cx.world.exits_at(cx.world.player_location());
        debug!(direction = %wanted, exits = exits.len(), "resolving movement");

        if let Some(exit) = exits.iter().find(|e| names_match(e, &wanted)) {
            let message = format!("You go to {}.", exit.name);
            return Self::go(cx, exit, message);
        }

        let cardinal = CARDINALS.iter().find(|(word, _)| *word == wanted).map(|(_, c)| *c);
        if let Some(cardinal) = cardinal {
            if let Some(exit) = exits.iter().find(|e| names_match(e, cardinal)) {
                let message = format!("You go {cardinal} to {}.", exit.name);
                return Self::go(cx, exit, message);
            }
        }

        HandlerResult::failure(format!("You can't go {direction} from here."), ACTION)
    }
}
