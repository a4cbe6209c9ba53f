//! The player's persistent statistics.

/// Player statistics carried between encounters.
///
/// Equipment bonuses are not folded in here; combat derives effective attack
/// and defense from the equipped items each time an encounter starts.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerStats {
    /// Current health.
    pub health: i32,
    /// Health cap.
    pub max_health: i32,
    /// Base attack.
    pub attack: i32,
    /// Base defense.
    pub defense: i32,
    /// Evasion, compared against an enemy's when fleeing.
    pub agility: i32,
    /// Current level, starting at 1.
    pub level: u32,
    /// Experience accumulated toward the next level.
    pub experience: u32,
    /// Item id in the weapon slot.
    pub weapon: Option<String>,
    /// Item id in the armor slot.
    pub armor: Option<String>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            health: 100,
            max_health: 100,
            attack: 10,
            defense: 5,
            agility: 10,
            level: 1,
            experience: 0,
            weapon: None,
            armor: None,
        }
    }
}

impl PlayerStats {
    /// Sets attack.
    #[must_use]
    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = attack;
        self
    }

    /// Sets defense.
    #[must_use]
    pub fn with_defense(mut self, defense: i32) -> Self {
        self.defense = defense;
        self
    }

    /// Sets agility.
    #[must_use]
    pub fn with_agility(mut self, agility: i32) -> Self {
        self.agility = agility;
        self
    }

    /// Sets current and maximum health.
    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self.max_health = health;
        self
    }

    /// Returns true while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Restores health, capped at `max_health`. Returns the amount restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }
}
