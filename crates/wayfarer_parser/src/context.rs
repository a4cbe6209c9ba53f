//! Session memory of recent interactions.
//!
//! The context remembers the last few things the player did something to, so
//! that "take it" or "talk to her" can be resolved. It never holds the world;
//! every query takes a read-only [`WorldView`] and recomputes visibility on
//! the spot.

use std::collections::VecDeque;

use tracing::debug;
use wayfarer_foundation::{EntityKind, EntityRef};
use wayfarer_world::{EntitySummary, WorldView};

use crate::intent::IntentType;
use crate::pronouns::PronounState;

/// Maximum number of remembered interactions.
pub const MAX_RECENT_INTERACTIONS: usize = 5;

/// One remembered interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interaction {
    /// What the player did.
    pub intent: IntentType,
    /// What they did it to.
    pub target: EntityRef,
}

/// Per-session command context.
#[derive(Clone, Debug, Default)]
pub struct CommandContext {
    recent_interactions: VecDeque<Interaction>,
    current_focus: Option<EntityRef>,
    pronouns: PronounState,
}

impl CommandContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an interaction, focuses on its target, and binds a pronoun.
    ///
    /// The pronoun is chosen from the target's observable attributes: "it"
    /// by default, "him" or "her" for gendered NPCs.
    pub fn add_interaction(&mut self, intent: IntentType, target: EntityRef, world: &dyn WorldView) {
        self.recent_interactions.push_back(Interaction {
            intent,
            target: target.clone(),
        });
        while self.recent_interactions.len() > MAX_RECENT_INTERACTIONS {
            self.recent_interactions.pop_front();
        }

        let pronoun = PronounState::pronoun_for(world.entity(&target).as_ref());
        debug!(%intent, %target, pronoun, "recorded interaction");
        self.pronouns.bind(pronoun, target.clone());
        self.current_focus = Some(target);
    }

    /// Recent interactions, oldest first.
    pub fn recent_interactions(&self) -> impl ExactSizeIterator<Item = &Interaction> {
        self.recent_interactions.iter()
    }

    /// The entity most recently interacted with.
    #[must_use]
    pub fn current_focus(&self) -> Option<&EntityRef> {
        self.current_focus.as_ref()
    }

    /// What a pronoun currently refers to.
    #[must_use]
    pub fn last_referenced(&self, pronoun: &str) -> Option<&EntityRef> {
        self.pronouns.resolve(pronoun)
    }

    /// Entities visible at the player's location, by category in scan order.
    #[must_use]
    pub fn get_visible_entities(&self, world: &dyn WorldView) -> Vec<(EntityKind, Vec<EntitySummary>)> {
        world.visible_entities()
    }

    /// Resolves free text to an entity.
    ///
    /// Tries, in order: a bound pronoun; an exact name among visible
    /// entities; a substring of a visible entity's name; an exact name, then
    /// a substring, among carried items. Matching is case-insensitive and a
    /// leading "the " is ignored.
    #[must_use]
    pub fn resolve_reference(&self, text: &str, world: &dyn WorldView) -> Option<EntityRef> {
        let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
        if normalized.is_empty() {
            return None;
        }

        if PronounState::is_pronoun(&normalized) {
            if let Some(entity) = self.pronouns.resolve(&normalized) {
                return Some(entity.clone());
            }
        }

        let reference = normalized.strip_prefix("the ").unwrap_or(&normalized);
        if reference.is_empty() {
            return None;
        }

        let visible = self.get_visible_entities(world);
        let candidates = || visible.iter().flat_map(|(_, entities)| entities);

        if let Some(found) = candidates().find(|e| e.name.to_lowercase() == reference) {
            return Some(found.reference.clone());
        }
        if let Some(found) = candidates().find(|e| e.name.to_lowercase().contains(reference)) {
            return Some(found.reference.clone());
        }

        let inventory = world.inventory();
        inventory
            .iter()
            .find(|e| e.name.to_lowercase() == reference)
            .or_else(|| inventory.iter().find(|e| e.name.to_lowercase().contains(reference)))
            .map(|e| EntityRef::inventory(e.id()))
    }

    /// Forgets everything.
    pub fn clear(&mut self) {
        self.recent_interactions.clear();
        self.current_focus = None;
        self.pronouns.clear();
    }
}
