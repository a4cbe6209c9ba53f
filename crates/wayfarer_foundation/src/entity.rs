//! References to world entities.
//!
//! The world stores entities in a handful of categories; a reference names the
//! category and the entity's id within it, e.g. `("items", "sword")`.

use std::fmt;

/// The category an entity is found in.
///
/// Ordering follows the scan order used for reference resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    /// Loose items lying at a location.
    Items,
    /// Non-player characters.
    Npcs,
    /// Fixed scenery (doors, altars, statues).
    Features,
    /// Ways out of a location.
    Exits,
    /// Items carried by the player.
    Inventory,
}

impl EntityKind {
    /// Kinds visible at a location, in resolution order.
    pub const VISIBLE: [EntityKind; 4] = [Self::Items, Self::Npcs, Self::Features, Self::Exits];

    /// Returns the category name used in results and effects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Items => "items",
            Self::Npcs => "npcs",
            Self::Features => "features",
            Self::Exits => "exits",
            Self::Inventory => "inventory",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reference to a concrete entity: `(entity_type, entity_id)`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EntityRef {
    /// Category the entity lives in.
    pub kind: EntityKind,
    /// Identifier within the category.
    pub id: String,
}

impl EntityRef {
    /// Creates a new reference.
    #[must_use]
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    /// Shorthand for an item at a location.
    #[must_use]
    pub fn item(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Items, id)
    }

    /// Shorthand for an NPC.
    #[must_use]
    pub fn npc(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Npcs, id)
    }

    /// Shorthand for an inventory item.
    #[must_use]
    pub fn inventory(id: impl Into<String>) -> Self {
        Self::new(EntityKind::Inventory, id)
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}
