//! Timed status effects.

use std::fmt;

/// A condition on a combatant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StatusEffect {
    /// Loses health at the end of every turn.
    Poisoned,
    /// Skips its next action.
    Stunned,
    /// Attack lowered.
    Weakened,
    /// Defense raised.
    Protected,
    /// Attack raised.
    Enraged,
    /// Incoming damage halved.
    Evasive,
}

impl StatusEffect {
    /// Lower-case name used in the combat log.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Poisoned => "poisoned",
            Self::Stunned => "stunned",
            Self::Weakened => "weakened",
            Self::Protected => "protected",
            Self::Enraged => "enraged",
            Self::Evasive => "evasive",
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A status effect with turns left to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActiveStatus {
    /// The effect.
    pub effect: StatusEffect,
    /// Turns remaining; removed when it reaches zero.
    pub remaining: u32,
}

impl ActiveStatus {
    /// Creates an active status.
    #[must_use]
    pub fn new(effect: StatusEffect, remaining: u32) -> Self {
        Self { effect, remaining }
    }
}
