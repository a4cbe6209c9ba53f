//! EXAMINE.

use wayfarer_parser::{Intent, IntentType};

use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};
use crate::narrative::{Narration, NarrativeQuery};

const INTENTS: &[IntentType] = &[IntentType::Examine];
const ACTION: &str = "interaction";

/// Targets that mean "look around".
const SURROUNDINGS: &[&str] = &["surroundings", "around", "room", "area", "here"];

/// Describes the surroundings or a particular thing.
#[derive(Clone, Debug, Default)]
pub struct ExamineHandler {
    narration: Narration,
}

impl ExamineHandler {
    /// Creates the handler.
    #[must_use]
    pub fn new(narration: Narration) -> Self {
        Self { narration }
    }
}

impl CommandHandler for ExamineHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Interaction
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let target = intent.parameter("target").unwrap_or("surroundings").trim();
        if target.is_empty() || SURROUNDINGS.contains(&target.to_lowercase().as_str()) {
            let text = self.narration.narrate(&NarrativeQuery::LookAround, cx.world);
            return HandlerResult::success(text, ACTION);
        }

        let entity = cx.context.resolve_reference(target, &*cx.world);
        let query = NarrativeQuery::Examine {
            target: target.to_string(),
            entity: entity.clone(),
        };
        let text = self.narration.narrate(&query, cx.world);
        if let Some(entity) = entity {
            cx.context.add_interaction(IntentType::Examine, entity, &*cx.world);
        }
        HandlerResult::success(text, ACTION)
    }
}
