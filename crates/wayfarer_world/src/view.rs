//! Read-only world queries.
//!
//! The parser's reference resolution and the feedback generator only ever
//! look at the world; they take a `&dyn WorldView` so they cannot mutate it
//! and can be tested against any stand-in.

use wayfarer_foundation::{EntityKind, EntityRef};

use crate::npc::Gender;

/// What an observer can tell about an entity without touching it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntitySummary {
    /// Category and id.
    pub reference: EntityRef,
    /// Display name.
    pub name: String,
    /// Gender, for NPCs that have one.
    pub gender: Option<Gender>,
    /// True for NPCs that can be attacked.
    pub hostile: bool,
}

impl EntitySummary {
    /// Creates a summary with no gender and no hostility.
    #[must_use]
    pub fn new(reference: EntityRef, name: impl Into<String>) -> Self {
        Self {
            reference,
            name: name.into(),
            gender: None,
            hostile: false,
        }
    }

    /// The entity's category.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        self.reference.kind
    }

    /// The entity's id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.reference.id
    }
}

/// Read-only queries over world state.
///
/// Every method is recomputed on each call; results reflect the world at the
/// time of the call. Lists come back in a stable order.
pub trait WorldView {
    /// The location id the player is standing in.
    fn player_location(&self) -> &str;

    /// Display name of a location, if it exists.
    fn location_name(&self, location: &str) -> Option<String>;

    /// Ids of locations reachable from `location`.
    fn connected_locations(&self, location: &str) -> Vec<String>;

    /// Items lying at `location`.
    fn items_at(&self, location: &str) -> Vec<EntitySummary>;

    /// NPCs present at `location`.
    fn npcs_at(&self, location: &str) -> Vec<EntitySummary>;

    /// Scenery at `location`.
    fn features_at(&self, location: &str) -> Vec<EntitySummary>;

    /// Exits out of `location`, named after their destinations.
    fn exits_at(&self, location: &str) -> Vec<EntitySummary>;

    /// Items the player is carrying.
    fn inventory(&self) -> Vec<EntitySummary>;

    /// Looks up any entity by reference.
    fn entity(&self, reference: &EntityRef) -> Option<EntitySummary>;

    /// Entities visible at the player's location, keyed by category in scan
    /// order (items, npcs, features, exits).
    fn visible_entities(&self) -> Vec<(EntityKind, Vec<EntitySummary>)> {
        let here = self.player_location().to_string();
        EntityKind::VISIBLE
            .iter()
            .map(|&kind| {
                let entities = match kind {
                    EntityKind::Items => self.items_at(&here),
                    EntityKind::Npcs => self.npcs_at(&here),
                    EntityKind::Features => self.features_at(&here),
                    EntityKind::Exits => self.exits_at(&here),
                    EntityKind::Inventory => self.inventory(),
                };
                (kind, entities)
            })
            .collect()
    }
}
