//! TALK.

use tracing::debug;
use wayfarer_foundation::EntityRef;
use wayfarer_parser::{Intent, IntentType};

use super::npc_here;
use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};
use crate::narrative::{Narration, NarrativeQuery};

const INTENTS: &[IntentType] = &[IntentType::Talk];
const ACTION: &str = "interaction";

/// Starts a conversation with an NPC at the player's location.
#[derive(Clone, Debug, Default)]
pub struct TalkHandler {
    narration: Narration,
}

impl TalkHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new(narration: Narration) -> Self {
        Self { narration }
    }
}

impl CommandHandler for TalkHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Interaction
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(character) = intent.parameter("character").filter(|c| !c.trim().is_empty()) else {
            return HandlerResult::failure("Who do you want to talk to?", ACTION);
        };
        let Some(npc_id) = npc_here(cx, character) else {
            return HandlerResult::failure(format!("There's no one named {character} here."), ACTION);
        };
        if cx.world.mark_met(&npc_id).is_err() {
            return HandlerResult::failure(format!("You can't talk to {character} right now."), ACTION);
        }

        let text = self
            .narration
            .narrate(&NarrativeQuery::Talk { npc: npc_id.clone() }, cx.world);
        debug!(npc = %npc_id, "conversation started");
        cx.context
            .add_interaction(IntentType::Talk, EntityRef::npc(npc_id), &*cx.world);
        HandlerResult::success(text, ACTION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{Fixture, intent};

    #[test]
    fn talks_and_binds_pronoun() {
        let mut fx = Fixture::new();
        let result = fx.run(&TalkHandler::default(), &intent(IntentType::Talk, &[("character", "elder")]));
        assert!(result.success);
        assert_eq!(result.message, "Village Elder says: \"Welcome, traveller.\"");
        assert!(fx.world.npc("elder").unwrap().met);
        assert_eq!(fx.context.last_referenced("her"), Some(&EntityRef::npc("elder")));

        let again = fx.run(&TalkHandler::default(), &intent(IntentType::Talk, &[("character", "her")]));
        assert!(again.success);
    }

    #[test]
    fn nobody_here() {
        let mut fx = Fixture::new();
        let result = fx.run(&TalkHandler::default(), &intent(IntentType::Talk, &[("character", "barkeep")]));
        assert!(!result.success);
        assert_eq!(result.message, "There's no one named barkeep here.");
        assert!(!fx.world.npc("barkeep").unwrap().met);
    }
}
