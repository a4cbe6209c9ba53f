//! Tunable combat numbers.

/// Every constant the combat rules read.
///
/// The defaults are a balanced starting point; scenarios and tests override
/// individual fields with the `with_*` builders.
#[derive(Clone, Debug, PartialEq)]
pub struct CombatTuning {
    /// Flee chance with equal agility.
    pub flee_base: f64,
    /// Flee chance gained per point of agility over the enemy.
    pub flee_per_agility: f64,
    /// Floor on the flee chance.
    pub flee_min: f64,
    /// Ceiling on the flee chance.
    pub flee_max: f64,
    /// Health lost per turn while poisoned.
    pub poison_damage: i32,
    /// Attack lost while weakened.
    pub weakened_penalty: i32,
    /// Attack gained while enraged.
    pub enraged_bonus: i32,
    /// Defense gained while protected.
    pub protected_bonus: i32,
    /// Fraction of max health below which an enemy with `enrage` enrages.
    pub enrage_threshold: f64,
    /// Turns an enrage lasts.
    pub enrage_duration: u32,
    /// Turns a status applied by an item lasts.
    pub item_status_duration: u32,
    /// Turns a stun lasts.
    pub stun_duration: u32,
    /// Maximum combat log entries kept.
    pub log_capacity: usize,
    /// Experience curve scale: level `n` needs `xp_per_level * n^2`.
    pub xp_per_level: u32,
    /// Max health gained per level.
    pub level_health: i32,
    /// Attack gained per level.
    pub level_attack: i32,
    /// Defense gained per level.
    pub level_defense: i32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            flee_base: 0.5,
            flee_per_agility: 0.05,
            flee_min: 0.1,
            flee_max: 0.9,
            poison_damage: 3,
            weakened_penalty: 3,
            enraged_bonus: 4,
            protected_bonus: 5,
            enrage_threshold: 0.3,
            enrage_duration: 3,
            item_status_duration: 3,
            stun_duration: 1,
            log_capacity: 50,
            xp_per_level: 100,
            level_health: 10,
            level_attack: 2,
            level_defense: 1,
        }
    }
}

impl CombatTuning {
    /// Sets the flee formula.
    #[must_use]
    pub fn with_flee(mut self, base: f64, per_agility: f64, min: f64, max: f64) -> Self {
        self.flee_base = base;
        self.flee_per_agility = per_agility;
        self.flee_min = min;
        self.flee_max = max;
        self
    }

    /// Sets the poison damage per turn.
    #[must_use]
    pub fn with_poison_damage(mut self, damage: i32) -> Self {
        self.poison_damage = damage;
        self
    }

    /// Sets the enrage threshold as a fraction of max health.
    #[must_use]
    pub fn with_enrage_threshold(mut self, threshold: f64) -> Self {
        self.enrage_threshold = threshold;
        self
    }

    /// Sets the combat log capacity.
    #[must_use]
    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    /// Sets the experience curve scale.
    #[must_use]
    pub fn with_xp_per_level(mut self, xp: u32) -> Self {
        self.xp_per_level = xp;
        self
    }

    /// Chance of a successful flee given both agility scores.
    #[must_use]
    pub fn flee_chance(&self, player_agility: i32, enemy_agility: i32) -> f64 {
        let chance = self.flee_base + f64::from(player_agility - enemy_agility) * self.flee_per_agility;
        chance.clamp(self.flee_min, self.flee_max)
    }

    /// Experience needed to advance past `level`.
    #[must_use]
    pub fn experience_for_level(&self, level: u32) -> u32 {
        self.xp_per_level.saturating_mul(level.saturating_mul(level))
    }
}
