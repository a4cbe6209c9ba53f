//! Items that can lie around or be carried.

/// An item in the world.
///
/// An item is either at a location, carried by the player, or nowhere (used
/// up or not yet placed). The player's inventory is tracked by the
/// [`World`](crate::World); `location` is `None` while carried.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Unique identifier.
    pub id: String,
    /// Display name, matched against player text.
    pub name: String,
    /// Prose shown when examined.
    pub description: String,
    /// Location id when lying on the ground.
    pub location: Option<String>,
    /// Whether the player can pick it up.
    pub portable: bool,
}

impl Item {
    /// Creates a portable item that is not placed anywhere yet.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            location: None,
            portable: true,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Places the item at a location.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Marks the item as too heavy or fixed to pick up.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.portable = false;
        self
    }
}
