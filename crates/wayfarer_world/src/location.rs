//! Locations and the fixed scenery inside them.

use im::Vector;

/// A place the player can stand in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Unique identifier.
    pub id: String,
    /// Display name, matched against player text.
    pub name: String,
    /// Prose shown when the player looks around.
    pub description: String,
    /// Ids of locations reachable from here, in declaration order.
    pub connections: Vector<String>,
    /// Scenery that can be examined but not taken.
    pub features: Vector<Feature>,
}

impl Location {
    /// Creates a location with no connections or features.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            connections: Vector::new(),
            features: Vector::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a one-way connection to another location.
    #[must_use]
    pub fn with_connection(mut self, to: impl Into<String>) -> Self {
        self.connections.push_back(to.into());
        self
    }

    /// Adds a feature.
    #[must_use]
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push_back(feature);
        self
    }

    /// Returns true if `to` is directly reachable from here.
    #[must_use]
    pub fn connects_to(&self, to: &str) -> bool {
        self.connections.iter().any(|c| c == to)
    }
}

/// Fixed scenery (an altar, a door, a statue).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Feature {
    /// Identifier, unique within its location.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Prose shown when examined.
    pub description: String,
}

impl Feature {
    /// Creates a feature.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}
