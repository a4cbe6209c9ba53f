//! The combat state machine.
//!
//! ```text
//!             resolve_turn / surrender
//!   ACTIVE ──────────────────────────────┬──► PLAYER_VICTORY
//!     │  ▲                               ├──► PLAYER_DEFEATED
//!     └──┘ (still fighting)              ├──► PLAYER_FLED
//!                                        └──► ENDED
//! ```
//!
//! Each turn resolves one player action and, if the fight is still on, one
//! enemy action. Status effects tick once at the end of the turn. Terminal
//! states are final: further mutation returns an `EncounterTerminal` error.

use std::fmt;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use wayfarer_foundation::{Error, ErrorKind, Result};

use super::armory::{Consumable, StatusTarget};
use super::combatant::{CombatEntity, CombatRole};
use super::log::CombatLog;
use super::status::StatusEffect;
use super::tuning::CombatTuning;

// =============================================================================
// Status and actions
// =============================================================================

/// Where an encounter stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CombatStatus {
    /// The fight is on.
    Active,
    /// The enemy fell.
    PlayerVictory,
    /// The player fell.
    PlayerDefeated,
    /// The player got away.
    PlayerFled,
    /// Ended without a health resolution.
    Ended,
}

impl CombatStatus {
    /// Returns true for every state except `Active`.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Snake-case name used in errors and effects.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::PlayerVictory => "player_victory",
            Self::PlayerDefeated => "player_defeated",
            Self::PlayerFled => "player_fled",
            Self::Ended => "ended",
        }
    }
}

impl fmt::Display for CombatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the player does on their turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlayerAction {
    /// Strike the enemy.
    Attack,
    /// Raise defense for this turn.
    Block,
    /// Halve incoming damage for this turn.
    Dodge,
    /// Try to escape.
    Flee,
    /// Use a consumable.
    UseItem {
        /// Display name for the log.
        name: String,
        /// What it does.
        consumable: Consumable,
    },
}

/// What happened during one turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    /// Turn number, starting at 1.
    pub turn: u32,
    /// Lines describing the turn, in order.
    pub messages: Vec<String>,
    /// Status after the turn.
    pub status: CombatStatus,
    /// Player health after the turn.
    pub player_health: i32,
    /// Enemy health after the turn.
    pub enemy_health: i32,
}

impl TurnReport {
    /// All lines joined into one paragraph.
    #[must_use]
    pub fn narration(&self) -> String {
        self.messages.join(" ")
    }
}

/// Rewards and consequences computed when an encounter is finalized.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatOutcome {
    /// Terminal status.
    pub status: CombatStatus,
    /// Id of the NPC fought.
    pub npc_id: String,
    /// The NPC's display name.
    pub enemy_name: String,
    /// Experience awarded; zero unless victorious.
    pub experience: u32,
    /// Item ids dropped; empty unless victorious.
    pub loot: Vec<String>,
    /// Player health when the fight ended.
    pub player_health: i32,
}

// =============================================================================
// Encounter
// =============================================================================

/// A single fight between the player and one enemy.
#[derive(Clone, Debug)]
pub struct CombatEncounter {
    player: CombatEntity,
    enemy: CombatEntity,
    status: CombatStatus,
    turn: u32,
    enraged: bool,
    finalized: bool,
    log: CombatLog,
    tuning: CombatTuning,
    rng: ChaCha8Rng,
}

impl CombatEncounter {
    /// Starts an encounter. `seed` drives flee rolls.
    #[must_use]
    pub fn new(player: CombatEntity, enemy: CombatEntity, tuning: CombatTuning, seed: u64) -> Self {
        let mut log = CombatLog::new(tuning.log_capacity);
        log.push(0, format!("You engage in combat with {}!", enemy.name));
        debug!(enemy = %enemy.name, seed, "combat started");
        Self {
            player,
            enemy,
            status: CombatStatus::Active,
            turn: 0,
            enraged: false,
            finalized: false,
            log,
            tuning,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> CombatStatus {
        self.status
    }

    /// Returns true while the fight is on.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == CombatStatus::Active
    }

    /// Turns resolved so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The player's side.
    #[must_use]
    pub fn player(&self) -> &CombatEntity {
        &self.player
    }

    /// The enemy's side.
    #[must_use]
    pub fn enemy(&self) -> &CombatEntity {
        &self.enemy
    }

    /// The combat log.
    #[must_use]
    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    /// Returns true once [`finalize`](Self::finalize) has succeeded.
    #[must_use]
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Resolves one turn: the player's action, then the enemy's if the
    /// fight is still on, then end-of-turn status effects.
    ///
    /// # Errors
    ///
    /// Returns an `EncounterTerminal` error if the encounter has already
    /// ended. Nothing changes in that case.
    pub fn resolve_turn(&mut self, action: PlayerAction) -> Result<TurnReport> {
        self.ensure_active()?;
        self.turn += 1;
        let mut messages = Vec::new();

        self.player_acts(&action, &mut messages);
        self.check_health(&mut messages);

        if self.is_active() {
            self.enemy_acts(&mut messages);
            self.check_health(&mut messages);
        }

        if self.is_active() {
            self.end_of_turn(&mut messages);
            self.check_health(&mut messages);
        }

        for message in &messages {
            self.log.push(self.turn, message.clone());
        }
        debug!(
            turn = self.turn,
            ?action,
            player_health = self.player.health,
            enemy_health = self.enemy.health,
            status = %self.status,
            "combat turn resolved"
        );
        if self.status.is_terminal() {
            info!(enemy = %self.enemy.name, status = %self.status, turns = self.turn, "combat ended");
        }

        Ok(TurnReport {
            turn: self.turn,
            messages,
            status: self.status,
            player_health: self.player.health,
            enemy_health: self.enemy.health,
        })
    }

    /// Ends the fight without a health resolution.
    ///
    /// # Errors
    ///
    /// Returns an `EncounterTerminal` error if the encounter has already
    /// ended.
    pub fn surrender(&mut self) -> Result<()> {
        self.ensure_active()?;
        self.status = CombatStatus::Ended;
        self.log.push(self.turn, "The fight is over.");
        info!(enemy = %self.enemy.name, "combat ended by surrender");
        Ok(())
    }

    /// Computes rewards. Succeeds exactly once, after the fight has ended.
    ///
    /// # Errors
    ///
    /// Returns `EncounterActive` while the fight is on and
    /// `AlreadyFinalized` on a second call.
    pub fn finalize(&mut self) -> Result<CombatOutcome> {
        if self.is_active() {
            return Err(Error::new(ErrorKind::EncounterActive));
        }
        if self.finalized {
            return Err(Error::new(ErrorKind::AlreadyFinalized));
        }
        self.finalized = true;

        let (npc_id, loot, experience) = match &self.enemy.role {
            CombatRole::Enemy {
                npc_id,
                loot,
                experience,
                ..
            } => (npc_id.clone(), loot.clone(), *experience),
            CombatRole::Player => (String::new(), Vec::new(), 0),
        };
        let victory = self.status == CombatStatus::PlayerVictory;

        Ok(CombatOutcome {
            status: self.status,
            npc_id,
            enemy_name: self.enemy.name.clone(),
            experience: if victory { experience } else { 0 },
            loot: if victory { loot } else { Vec::new() },
            player_health: self.player.health,
        })
    }

    fn ensure_active(&self) -> Result<()> {
        if self.status.is_terminal() {
            return Err(Error::encounter_terminal(self.status.as_str()));
        }
        Ok(())
    }

    fn player_acts(&mut self, action: &PlayerAction, messages: &mut Vec<String>) {
        match action {
            PlayerAction::Attack => {
                let dealt = damage(&self.player, &self.enemy, &self.tuning);
                self.enemy.health -= dealt;
                messages.push(format!("You hit the {} for {dealt} damage.", self.enemy.name));
            }
            PlayerAction::Block => {
                self.player.apply_status(StatusEffect::Protected, 1);
                messages.push("You raise your guard.".to_string());
            }
            PlayerAction::Dodge => {
                self.player.apply_status(StatusEffect::Evasive, 1);
                messages.push("You get ready to dodge.".to_string());
            }
            PlayerAction::Flee => {
                let chance = self.tuning.flee_chance(self.player.agility, self.enemy.agility);
                let roll: f64 = self.rng.r#gen();
                if roll < chance {
                    self.status = CombatStatus::PlayerFled;
                    messages.push(format!("You escape from the {}!", self.enemy.name));
                } else {
                    messages.push("You try to flee but can't get away!".to_string());
                }
            }
            PlayerAction::UseItem { name, consumable } => match *consumable {
                Consumable::Heal(amount) => {
                    let healed = self.player.heal(amount);
                    messages.push(format!("You use the {name} and recover {healed} health."));
                }
                Consumable::Status { effect, target } => {
                    let turns = if effect == StatusEffect::Stunned {
                        self.tuning.stun_duration
                    } else {
                        self.tuning.item_status_duration
                    };
                    match target {
                        StatusTarget::Player => {
                            self.player.apply_status(effect, turns);
                            messages.push(format!("You use the {name}. You are {effect}."));
                        }
                        StatusTarget::Enemy => {
                            self.enemy.apply_status(effect, turns);
                            messages.push(format!(
                                "You use the {name}. The {} is {effect}.",
                                self.enemy.name
                            ));
                        }
                    }
                }
            },
        }
    }

    fn enemy_acts(&mut self, messages: &mut Vec<String>) {
        if self.enemy.has_status(StatusEffect::Stunned) {
            messages.push(format!("The {} is stunned and cannot act.", self.enemy.name));
            return;
        }

        let threshold = f64::from(self.enemy.max_health) * self.tuning.enrage_threshold;
        if !self.enraged && self.enemy.has_ability("enrage") && f64::from(self.enemy.health) < threshold {
            self.enraged = true;
            self.enemy
                .apply_status(StatusEffect::Enraged, self.tuning.enrage_duration);
            messages.push(format!("The {} flies into a rage!", self.enemy.name));
            return;
        }

        let dealt = damage(&self.enemy, &self.player, &self.tuning);
        self.player.health -= dealt;
        messages.push(format!("The {} hits you for {dealt} damage.", self.enemy.name));
    }

    fn end_of_turn(&mut self, messages: &mut Vec<String>) {
        let poison = self.tuning.poison_damage;
        if self.player.has_status(StatusEffect::Poisoned) {
            self.player.health -= poison;
            messages.push(format!("Poison burns through you for {poison} damage."));
        }
        if self.enemy.has_status(StatusEffect::Poisoned) {
            self.enemy.health -= poison;
            messages.push(format!("The {} suffers {poison} poison damage.", self.enemy.name));
        }
        self.player.tick_statuses();
        self.enemy.tick_statuses();
    }

    fn check_health(&mut self, messages: &mut Vec<String>) {
        if self.status.is_terminal() {
            return;
        }
        if !self.enemy.is_alive() {
            self.status = CombatStatus::PlayerVictory;
            messages.push(format!("You defeated the {}!", self.enemy.name));
        } else if !self.player.is_alive() {
            self.status = CombatStatus::PlayerDefeated;
            messages.push("You have been defeated...".to_string());
        }
    }
}

/// `max(0, attack - defense)`, halved when the defender is evasive.
fn damage(attacker: &CombatEntity, defender: &CombatEntity, tuning: &CombatTuning) -> i32 {
    let raw = (attacker.effective_attack(tuning) - defender.effective_defense(tuning)).max(0);
    if defender.has_status(StatusEffect::Evasive) {
        raw / 2
    } else {
        raw
    }
}
