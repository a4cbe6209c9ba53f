//! Prose generation for handlers.
//!
//! Handlers never build descriptive text themselves; they describe what they
//! need as a [`NarrativeQuery`] and hand it to a [`NarrativeGenerator`]. A
//! generator may be slow or fail outright, so handlers go through
//! [`Narration`], which logs the failure and substitutes a fallback line.

use std::fmt;
use std::sync::Arc;

use tracing::warn;
use wayfarer_foundation::{EntityKind, EntityRef, Error, Result};
use wayfarer_world::{World, WorldView};

/// Line used when the generator fails and no other fallback is configured.
pub const DEFAULT_FALLBACK: &str = "Nothing much seems to happen.";

/// What a handler wants described.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NarrativeQuery {
    /// The player's surroundings.
    LookAround,
    /// A specific thing, as the player named it.
    Examine {
        /// The player's words.
        target: String,
        /// What those words resolved to, if anything.
        entity: Option<EntityRef>,
    },
    /// Using a carried item, optionally on something.
    Use {
        /// Item id.
        item: String,
        /// The player's words for the target.
        target: Option<String>,
    },
    /// Talking to an NPC.
    Talk {
        /// NPC id.
        npc: String,
    },
}

impl fmt::Display for NarrativeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LookAround => f.write_str("look around"),
            Self::Examine { target, .. } => write!(f, "examine {target}"),
            Self::Use { item, target: None } => write!(f, "use {item}"),
            Self::Use {
                item,
                target: Some(target),
            } => write!(f, "use {item} on {target}"),
            Self::Talk { npc } => write!(f, "talk to {npc}"),
        }
    }
}

/// Something that can turn a query and the current world into prose.
pub trait NarrativeGenerator: fmt::Debug + Send + Sync {
    /// Describes the query.
    ///
    /// # Errors
    ///
    /// Returns a `Narrative` error on failure or timeout.
    fn generate_response(&self, query: &NarrativeQuery, world: &World) -> Result<String>;
}

/// A generator plus the line to fall back on when it fails.
#[derive(Clone, Debug)]
pub struct Narration {
    generator: Arc<dyn NarrativeGenerator>,
    fallback: String,
}

impl Default for Narration {
    fn default() -> Self {
        Self::new(Arc::new(TemplateNarrator))
    }
}

impl Narration {
    /// Wraps a generator with the default fallback line.
    #[must_use]
    pub fn new(generator: Arc<dyn NarrativeGenerator>) -> Self {
        Self {
            generator,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Sets the fallback line.
    #[must_use]
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// The fallback line.
    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// Describes the query, never failing.
    #[must_use]
    pub fn narrate(&self, query: &NarrativeQuery, world: &World) -> String {
        match self.generator.generate_response(query, world) {
            Ok(text) => text,
            Err(error) => {
                warn!(%query, %error, "narrative generation degraded to fallback");
                self.fallback.clone()
            }
        }
    }
}

/// A rule-based generator that describes the world from its own data.
#[derive(Copy, Clone, Debug, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    fn look_around(world: &World) -> String {
        let here = world.player_location();
        let mut text = match world.current_location() {
            Some(location) if location.description.is_empty() => format!("You are in {}.", location.name),
            Some(location) => format!("You are in {}. {}", location.name, location.description),
            None => "You are somewhere unfamiliar.".to_string(),
        };

        let names = |entities: Vec<wayfarer_world::EntitySummary>| {
            entities.into_iter().map(|e| e.name).collect::<Vec<_>>().join(", ")
        };
        let npcs = names(world.npcs_at(here));
        if !npcs.is_empty() {
            text.push_str(&format!(" You see {npcs}."));
        }
        let items = names(world.items_at(here));
        if items.is_empty() {
            text.push_str(" You don't see any notable items.");
        } else {
            text.push_str(&format!(" There are several items here: {items}."));
        }
        let exits = names(world.exits_at(here));
        if !exits.is_empty() {
            text.push_str(&format!(" Paths lead to {exits}."));
        }
        text
    }

    fn examine(world: &World, target: &str, entity: Option<&EntityRef>) -> String {
        let Some(entity) = entity else {
            return format!("You don't see any {target} here.");
        };
        let described = match entity.kind {
            EntityKind::Items | EntityKind::Inventory => world
                .item(&entity.id)
                .map(|i| (i.name.clone(), i.description.clone())),
            EntityKind::Npcs => world
                .npc(&entity.id)
                .map(|n| (n.name.clone(), n.description.clone())),
            EntityKind::Features => world.current_location().and_then(|l| {
                l.features
                    .iter()
                    .find(|f| f.id == entity.id)
                    .map(|f| (f.name.clone(), f.description.clone()))
            }),
            EntityKind::Exits => world
                .location(&entity.id)
                .map(|l| (l.name.clone(), format!("A way leads to {}.", l.name))),
        };
        match described {
            Some((name, description)) if description.is_empty() => {
                format!("You see nothing special about the {name}.")
            }
            Some((_, description)) => description,
            None => format!("You don't see any {target} here."),
        }
    }
}

impl NarrativeGenerator for TemplateNarrator {
    fn generate_response(&self, query: &NarrativeQuery, world: &World) -> Result<String> {
        Ok(match query {
            NarrativeQuery::LookAround => Self::look_around(world),
            NarrativeQuery::Examine { target, entity } => Self::examine(world, target, entity.as_ref()),
            NarrativeQuery::Use { item, target } => {
                let name = world.item(item).map_or_else(|| item.clone(), |i| i.name.clone());
                match target {
                    Some(target) => format!("You use the {name} on the {target}. Nothing obvious happens."),
                    None => format!("You use the {name}. Nothing particularly interesting happens."),
                }
            }
            NarrativeQuery::Talk { npc } => {
                let npc = world
                    .npc(npc)
                    .ok_or_else(|| Error::entity_not_found(EntityRef::npc(npc.clone())))?;
                match &npc.greeting {
                    Some(greeting) => format!("{} says: \"{greeting}\"", npc.name),
                    None => format!(
                        "You approach {} and begin a conversation. They respond cautiously but seem willing to talk.",
                        npc.name
                    ),
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_world::{Item, Location, Npc};

    #[derive(Debug)]
    struct Broken;

    impl NarrativeGenerator for Broken {
        fn generate_response(&self, _query: &NarrativeQuery, _world: &World) -> Result<String> {
            Err(Error::narrative("model timed out"))
        }
    }

    fn world() -> World {
        World::new("hall")
            .with_location(
                Location::new("hall", "Great Hall")
                    .with_description("Banners hang from the rafters.")
                    .with_connection("yard"),
            )
            .with_location(Location::new("yard", "Courtyard"))
            .with_item(Item::new("lamp", "Brass Lamp").with_description("A dented lamp.").at("hall"))
            .with_npc(Npc::new("steward", "Steward").at("hall").with_greeting("Welcome."))
    }

    #[test]
    fn look_around_lists_contents() {
        let text = Narration::default().narrate(&NarrativeQuery::LookAround, &world());
        assert!(text.starts_with("You are in Great Hall. Banners"));
        assert!(text.contains("Steward"));
        assert!(text.contains("Brass Lamp"));
        assert!(text.contains("Courtyard"));
    }

    #[test]
    fn examine_uses_description() {
        let query = NarrativeQuery::Examine {
            target: "lamp".into(),
            entity: Some(EntityRef::item("lamp")),
        };
        assert_eq!(Narration::default().narrate(&query, &world()), "A dented lamp.");

        let missing = NarrativeQuery::Examine {
            target: "dragon".into(),
            entity: None,
        };
        assert_eq!(
            Narration::default().narrate(&missing, &world()),
            "You don't see any dragon here."
        );
    }

    #[test]
    fn talk_uses_greeting() {
        let query = NarrativeQuery::Talk { npc: "steward".into() };
        assert_eq!(Narration::default().narrate(&query, &world()), "Steward says: \"Welcome.\"");
    }

    #[test]
    fn failure_degrades_to_fallback() {
        let narration = Narration::new(Arc::new(Broken)).with_fallback("The world is quiet.");
        assert_eq!(
            narration.narrate(&NarrativeQuery::LookAround, &world()),
            "The world is quiet."
        );
    }
}
