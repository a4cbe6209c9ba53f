//! Non-player characters.

use im::Vector;

/// Grammatical gender, used to pick a pronoun for an NPC.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    /// Referred to as "her".
    Female,
    /// Referred to as "him".
    Male,
}

/// Combat statistics for an NPC that can be fought.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyProfile {
    /// Enemy type ("beast", "undead", ...).
    pub kind: String,
    /// Starting health.
    pub health: i32,
    /// Base attack.
    pub attack: i32,
    /// Base defense.
    pub defense: i32,
    /// Evasion, compared against the player's when fleeing.
    pub agility: i32,
    /// Named abilities, e.g. `enrage`.
    pub abilities: Vector<String>,
    /// Item ids dropped on defeat.
    pub loot: Vector<String>,
    /// Experience awarded on defeat.
    pub experience: u32,
}

impl EnemyProfile {
    /// Creates a profile with no abilities or loot.
    #[must_use]
    pub fn new(kind: impl Into<String>, health: i32, attack: i32, defense: i32) -> Self {
        Self {
            kind: kind.into(),
            health,
            attack,
            defense,
            agility: 10,
            abilities: Vector::new(),
            loot: Vector::new(),
            experience: 0,
        }
    }

    /// Sets agility.
    #[must_use]
    pub fn with_agility(mut self, agility: i32) -> Self {
        self.agility = agility;
        self
    }

    /// Adds an ability.
    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.abilities.push_back(ability.into());
        self
    }

    /// Adds a loot drop.
    #[must_use]
    pub fn with_loot(mut self, item_id: impl Into<String>) -> Self {
        self.loot.push_back(item_id.into());
        self
    }

    /// Sets the experience reward.
    #[must_use]
    pub fn with_experience(mut self, experience: u32) -> Self {
        self.experience = experience;
        self
    }

    /// Returns true if the enemy has the named ability.
    #[must_use]
    pub fn has_ability(&self, ability: &str) -> bool {
        self.abilities.iter().any(|a| a == ability)
    }
}

/// A non-player character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Npc {
    /// Unique identifier.
    pub id: String,
    /// Display name, matched against player text.
    pub name: String,
    /// Prose shown when examined.
    pub description: String,
    /// Current location id, `None` once gone from the world.
    pub location: Option<String>,
    /// Gender, if the NPC should not be called "it".
    pub gender: Option<Gender>,
    /// Whether the player has met this character.
    pub met: bool,
    /// Line spoken when the player talks to them.
    pub greeting: Option<String>,
    /// Combat profile; `Some` means the NPC can be attacked.
    pub enemy: Option<EnemyProfile>,
}

impl Npc {
    /// Creates an unplaced, peaceful NPC.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            location: None,
            gender: None,
            met: false,
            greeting: None,
            enemy: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Places the NPC at a location.
    #[must_use]
    pub fn at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the gender.
    #[must_use]
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Sets the greeting.
    #[must_use]
    pub fn with_greeting(mut self, greeting: impl Into<String>) -> Self {
        self.greeting = Some(greeting.into());
        self
    }

    /// Makes the NPC hostile with the given profile.
    #[must_use]
    pub fn hostile(mut self, profile: EnemyProfile) -> Self {
        self.enemy = Some(profile);
        self
    }

    /// Returns true if the NPC can be fought.
    #[must_use]
    pub fn is_hostile(&self) -> bool {
        self.enemy.is_some()
    }
}
