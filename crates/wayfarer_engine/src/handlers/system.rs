//! HELP, SAVE, LOAD, MAP, QUIT.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};
use wayfarer_parser::{Intent, IntentType};
use wayfarer_world::WorldView;

use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};
use crate::persistence::{DEFAULT_SAVE_FILE, Persistence};

const INTENTS: &[IntentType] = &[
    IntentType::Help,
    IntentType::Save,
    IntentType::Load,
    IntentType::Map,
    IntentType::Quit,
];
const ACTION: &str = "system";

/// The command summary shown by HELP.
pub const HELP_TEXT: &str = "\
Available Commands:
------------------
Movement: go [location], go north, n/s/e/w/u/d
Look: look, look around, examine [object/person]
Interaction: talk to [character], take [item], use [item], use [item] on [target]
Inventory: inventory, equip [item]
Combat: attack [enemy], block, dodge, flee
System: save [filename], load [filename], help, map, local map, quit";

/// Session-level commands with no gameplay effect of their own.
#[derive(Clone, Debug)]
pub struct SystemHandler {
    persistence: Option<Arc<dyn Persistence>>,
    default_file: String,
}

impl Default for SystemHandler {
    fn default() -> Self {
        Self::new(None)
    }
}

impl SystemHandler {
    /// Creates the handler. Without persistence, SAVE and LOAD always fail.
    #[must_use]
    pub fn new(persistence: Option<Arc<dyn Persistence>>) -> Self {
        Self {
            persistence,
            default_file: DEFAULT_SAVE_FILE.to_string(),
        }
    }

    /// Sets the file used when SAVE or LOAD names none.
    #[must_use]
    pub fn with_default_file(mut self, file: impl Into<String>) -> Self {
        self.default_file = file.into();
        self
    }

    fn file<'i>(&'i self, intent: &'i Intent) -> &'i str {
        intent
            .parameter("filename")
            .filter(|f| !f.trim().is_empty())
            .unwrap_or(&self.default_file)
    }

    fn save(&self, intent: &Intent, cx: &HandlerContext<'_>) -> HandlerResult {
        let file = self.file(intent);
        let saved = match &self.persistence {
            Some(store) => store.save_game(Path::new(file), &*cx.world),
            None => {
                warn!(file, "save requested with no persistence configured");
                return HandlerResult::failure(format!("Failed to save game to {file}."), ACTION);
            }
        };
        match saved {
            Ok(()) => {
                info!(file, "game saved");
                HandlerResult::success(format!("Game saved to {file}."), ACTION)
            }
            Err(error) => {
                warn!(file, %error, "save failed");
                HandlerResult::failure(format!("Failed to save game to {file}."), ACTION)
            }
        }
    }

    fn load(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let file = self.file(intent);
        if cx.in_combat() {
            return HandlerResult::failure("You can't load a game in the middle of a fight.", ACTION);
        }
        let Some(store) = &self.persistence else {
            warn!(file, "load requested with no persistence configured");
            return HandlerResult::failure(format!("Failed to load game from {file}."), ACTION);
        };
        match store.load_game(Path::new(file)) {
            Ok(world) => {
                *cx.world = world;
                cx.context.clear();
                *cx.encounter = None;
                cx.control.mark_world_replaced();
                info!(file, "game loaded");
                HandlerResult::success(format!("Game loaded from {file}."), ACTION)
            }
            Err(error) => {
                warn!(file, %error, "load failed");
                HandlerResult::failure(format!("Failed to load game from {file}."), ACTION)
            }
        }
    }
}

impl CommandHandler for SystemHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::System
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        match intent.kind {
            IntentType::Help => HandlerResult::success(HELP_TEXT, ACTION),
            IntentType::Save => self.save(intent, cx),
            IntentType::Load => self.load(intent, cx),
            IntentType::Map => {
                let local = intent
                    .parameter("target")
                    .is_some_and(|t| t.eq_ignore_ascii_case("local"));
                if local {
                    let here = cx.world.player_location();
                    let name = cx.world.location_name(here).unwrap_or_else(|| here.to_string());
                    HandlerResult::success(format!("Displaying local map of {name}..."), ACTION)
                } else {
                    HandlerResult::success("Displaying world map...", ACTION)
                }
            }
            IntentType::Quit => {
                cx.control.stop();
                info!("quit requested");
                HandlerResult::success("Thanks for playing! The game will now exit.", ACTION)
            }
            _ => HandlerResult::failure("Unknown system command. Try 'help' for a list of commands.", ACTION),
        }
    }
}
