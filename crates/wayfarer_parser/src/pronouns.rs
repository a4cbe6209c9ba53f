//! Pronoun tracking state.
//!
//! Tracks referents for pronouns like "it", "him", "her", "them". "This" and
//! "that" share the "it" slot.

use wayfarer_foundation::{EntityKind, EntityRef};
use wayfarer_world::{EntitySummary, Gender};

/// Words treated as pronouns during reference resolution.
pub const PRONOUNS: [&str; 6] = ["it", "him", "her", "them", "this", "that"];

/// State for pronoun resolution.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PronounState {
    /// "it" referent (also "this" and "that")
    it: Option<EntityRef>,
    /// "him" referent
    him: Option<EntityRef>,
    /// "her" referent
    her: Option<EntityRef>,
    /// "them" referent
    them: Option<EntityRef>,
}

impl PronounState {
    /// Creates a new pronoun state with no referents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `word` is a recognized pronoun.
    #[must_use]
    pub fn is_pronoun(word: &str) -> bool {
        PRONOUNS.contains(&word)
    }

    /// Picks the pronoun for an entity from what can be observed about it.
    ///
    /// Gendered NPCs get "him" or "her"; everything else, including entities
    /// that cannot be looked up, is "it".
    #[must_use]
    pub fn pronoun_for(entity: Option<&EntitySummary>) -> &'static str {
        match entity {
            Some(e) if e.kind() == EntityKind::Npcs => match e.gender {
                Some(Gender::Female) => "her",
                Some(Gender::Male) => "him",
                None => "it",
            },
            _ => "it",
        }
    }

    /// Binds `pronoun` to `entity`. Unrecognized pronouns are ignored.
    pub fn bind(&mut self, pronoun: &str, entity: EntityRef) {
        if let Some(slot) = self.slot_mut(pronoun) {
            *slot = Some(entity);
        }
    }

    /// Resolves a pronoun to its referent.
    ///
    /// Returns `None` if the word is not a pronoun or has no referent set.
    #[must_use]
    pub fn resolve(&self, pronoun: &str) -> Option<&EntityRef> {
        match pronoun {
            "it" | "this" | "that" => self.it.as_ref(),
            "him" => self.him.as_ref(),
            "her" => self.her.as_ref(),
            "them" => self.them.as_ref(),
            _ => None,
        }
    }

    /// Clears all pronoun referents.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, pronoun: &str) -> Option<&mut Option<EntityRef>> {
        match pronoun {
            "it" | "this" | "that" => Some(&mut self.it),
            "him" => Some(&mut self.him),
            "her" => Some(&mut self.her),
            "them" => Some(&mut self.them),
            _ => None,
        }
    }
}
