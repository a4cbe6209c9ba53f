//! Participants in an encounter.

use wayfarer_world::{EnemyProfile, Npc, World};

use super::armory::Armory;
use super::status::{ActiveStatus, StatusEffect};
use super::tuning::CombatTuning;

/// Which side a combatant fights on, with the data that side needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CombatRole {
    /// The player.
    Player,
    /// An NPC opponent.
    Enemy {
        /// The NPC's id in the world.
        npc_id: String,
        /// Enemy type.
        kind: String,
        /// Named abilities.
        abilities: Vec<String>,
        /// Item ids dropped on defeat.
        loot: Vec<String>,
        /// Experience awarded on defeat.
        experience: u32,
    },
}

/// A combatant's in-fight statistics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatEntity {
    /// Display name.
    pub name: String,
    /// Current health.
    pub health: i32,
    /// Health cap.
    pub max_health: i32,
    /// Attack including equipment.
    pub attack: i32,
    /// Defense including equipment.
    pub defense: i32,
    /// Evasion.
    pub agility: i32,
    /// Active status effects, at most one of each kind.
    pub statuses: Vec<ActiveStatus>,
    /// Side and side-specific data.
    pub role: CombatRole,
}

impl CombatEntity {
    /// Builds the player's side from world state, folding in the weapon and
    /// armor slots.
    #[must_use]
    pub fn player(world: &World, armory: &Armory) -> Self {
        let stats = world.player();
        let weapon_bonus = stats
            .weapon
            .as_deref()
            .and_then(|id| world.item(id))
            .and_then(|item| armory.weapon(item))
            .map_or(0, |w| w.attack_bonus);
        let armor_bonus = stats
            .armor
            .as_deref()
            .and_then(|id| world.item(id))
            .and_then(|item| armory.armor(item))
            .map_or(0, |a| a.defense_bonus);

        Self {
            name: "You".to_string(),
            health: stats.health,
            max_health: stats.max_health,
            attack: stats.attack + weapon_bonus,
            defense: stats.defense + armor_bonus,
            agility: stats.agility,
            statuses: Vec::new(),
            role: CombatRole::Player,
        }
    }

    /// Builds an opponent from an NPC's enemy profile.
    #[must_use]
    pub fn enemy(npc: &Npc, profile: &EnemyProfile) -> Self {
        Self {
            name: npc.name.clone(),
            health: profile.health,
            max_health: profile.health,
            attack: profile.attack,
            defense: profile.defense,
            agility: profile.agility,
            statuses: Vec::new(),
            role: CombatRole::Enemy {
                npc_id: npc.id.clone(),
                kind: profile.kind.clone(),
                abilities: profile.abilities.iter().cloned().collect(),
                loot: profile.loot.iter().cloned().collect(),
                experience: profile.experience,
            },
        }
    }

    /// The NPC id behind an enemy. `None` for the player.
    #[must_use]
    pub fn npc_id(&self) -> Option<&str> {
        match &self.role {
            CombatRole::Enemy { npc_id, .. } => Some(npc_id),
            CombatRole::Player => None,
        }
    }

    /// Returns true while health is above zero.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Returns true if the given status is active.
    #[must_use]
    pub fn has_status(&self, effect: StatusEffect) -> bool {
        self.statuses.iter().any(|s| s.effect == effect)
    }

    /// Returns true if this enemy has the named ability. Always false for
    /// the player.
    #[must_use]
    pub fn has_ability(&self, ability: &str) -> bool {
        match &self.role {
            CombatRole::Enemy { abilities, .. } => abilities.iter().any(|a| a == ability),
            CombatRole::Player => false,
        }
    }

    /// Attack after status modifiers.
    #[must_use]
    pub fn effective_attack(&self, tuning: &CombatTuning) -> i32 {
        let mut attack = self.attack;
        if self.has_status(StatusEffect::Weakened) {
            attack -= tuning.weakened_penalty;
        }
        if self.has_status(StatusEffect::Enraged) {
            attack += tuning.enraged_bonus;
        }
        attack.max(0)
    }

    /// Defense after status modifiers.
    #[must_use]
    pub fn effective_defense(&self, tuning: &CombatTuning) -> i32 {
        let mut defense = self.defense;
        if self.has_status(StatusEffect::Protected) {
            defense += tuning.protected_bonus;
        }
        defense
    }

    /// Applies a status, refreshing the duration if it is already active.
    pub fn apply_status(&mut self, effect: StatusEffect, turns: u32) {
        match self.statuses.iter_mut().find(|s| s.effect == effect) {
            Some(active) => active.remaining = active.remaining.max(turns),
            None => self.statuses.push(ActiveStatus::new(effect, turns)),
        }
    }

    /// Heals up to max health; returns the amount actually restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.health;
        self.health = (self.health + amount.max(0)).min(self.max_health);
        self.health - before
    }

    /// Counts every status down by one turn and drops the expired ones.
    /// Returns the effects that expired.
    pub fn tick_statuses(&mut self) -> Vec<StatusEffect> {
        for status in &mut self.statuses {
            status.remaining = status.remaining.saturating_sub(1);
        }
        let expired = self
            .statuses
            .iter()
            .filter(|s| s.remaining == 0)
            .map(|s| s.effect)
            .collect();
        self.statuses.retain(|s| s.remaining > 0);
        expired
    }
}
