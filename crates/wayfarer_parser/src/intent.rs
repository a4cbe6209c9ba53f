//! Recognized player intents.

use std::collections::BTreeMap;
use std::fmt;

/// Confidence for a structured pattern match.
pub const PATTERN_CONFIDENCE: f64 = 0.9;
/// Confidence for a bare keyword match.
pub const KEYWORD_CONFIDENCE: f64 = 0.6;
/// Confidence of the fallback UNKNOWN intent.
pub const UNKNOWN_CONFIDENCE: f64 = 0.1;

/// The kind of action the player is trying to take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntentType {
    /// Go somewhere.
    Move,
    /// Look at something, or around.
    Examine,
    /// Pick something up.
    Take,
    /// Use an item, optionally on a target.
    Use,
    /// Talk to a character.
    Talk,
    /// Attack a character, or press an attack in combat.
    Attack,
    /// Raise a guard in combat.
    Block,
    /// Try to evade in combat.
    Dodge,
    /// Try to escape combat.
    Flee,
    /// List carried items.
    Inventory,
    /// Put on armor or wield a weapon.
    Equip,
    /// Show available commands.
    Help,
    /// Leave the game.
    Quit,
    /// Save the game.
    Save,
    /// Load a saved game.
    Load,
    /// Show the map.
    Map,
    /// Nothing recognizable.
    Unknown,
}

impl IntentType {
    /// Every intent type, in declaration order.
    pub const ALL: [IntentType; 17] = [
        Self::Move,
        Self::Examine,
        Self::Take,
        Self::Use,
        Self::Talk,
        Self::Attack,
        Self::Block,
        Self::Dodge,
        Self::Flee,
        Self::Inventory,
        Self::Equip,
        Self::Help,
        Self::Quit,
        Self::Save,
        Self::Load,
        Self::Map,
        Self::Unknown,
    ];

    /// Upper-case name, as used in results and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "MOVE",
            Self::Examine => "EXAMINE",
            Self::Take => "TAKE",
            Self::Use => "USE",
            Self::Talk => "TALK",
            Self::Attack => "ATTACK",
            Self::Block => "BLOCK",
            Self::Dodge => "DODGE",
            Self::Flee => "FLEE",
            Self::Inventory => "INVENTORY",
            Self::Equip => "EQUIP",
            Self::Help => "HELP",
            Self::Quit => "QUIT",
            Self::Save => "SAVE",
            Self::Load => "LOAD",
            Self::Map => "MAP",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// The parameter that carries this intent's main argument, if any.
    #[must_use]
    pub const fn primary_parameter(self) -> Option<&'static str> {
        match self {
            Self::Move => Some("direction"),
            Self::Examine | Self::Attack | Self::Map => Some("target"),
            Self::Take | Self::Use | Self::Equip => Some("item"),
            Self::Talk => Some("character"),
            Self::Save | Self::Load => Some("filename"),
            Self::Block
            | Self::Dodge
            | Self::Flee
            | Self::Inventory
            | Self::Help
            | Self::Quit
            | Self::Unknown => None,
        }
    }

    /// Returns true for the actions that only make sense inside combat.
    #[must_use]
    pub const fn is_combat_action(self) -> bool {
        matches!(self, Self::Block | Self::Dodge | Self::Flee)
    }
}

impl fmt::Display for IntentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate reading of the player's input.
///
/// Intents are produced by the recognizer and not changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Intent {
    /// What the player wants to do.
    pub kind: IntentType,
    /// How sure the recognizer is, in `[0, 1]`.
    pub confidence: f64,
    /// Named arguments (`direction`, `target`, `item`, `character`, `filename`).
    pub parameters: BTreeMap<String, String>,
    /// The raw input this was recognized from.
    pub original_text: String,
}

impl Intent {
    /// Creates an intent with no parameters.
    #[must_use]
    pub fn new(kind: IntentType, confidence: f64, original_text: impl Into<String>) -> Self {
        Self {
            kind,
            confidence: confidence.clamp(0.0, 1.0),
            parameters: BTreeMap::new(),
            original_text: original_text.into(),
        }
    }

    /// The fallback intent for unrecognizable input.
    #[must_use]
    pub fn unknown(original_text: impl Into<String>) -> Self {
        Self::new(IntentType::Unknown, UNKNOWN_CONFIDENCE, original_text)
    }

    /// Adds a parameter.
    #[must_use]
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Returns a parameter value.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns the intent's main argument, if it has one and it is set.
    #[must_use]
    pub fn primary(&self) -> Option<&str> {
        self.kind.primary_parameter().and_then(|key| self.parameter(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_has_low_confidence() {
        let intent = Intent::unknown("xyzzy");
        assert_eq!(intent.kind, IntentType::Unknown);
        assert!((intent.confidence - 0.1).abs() < f64::EPSILON);
        assert!(intent.parameters.is_empty());
    }

    #[test]
    fn primary_parameter_lookup() {
        let intent = Intent::new(IntentType::Talk, 0.9, "talk to elder")
            .with_parameter("character", "elder");
        assert_eq!(intent.primary(), Some("elder"));

        let quit = Intent::new(IntentType::Quit, 0.9, "quit");
        assert_eq!(quit.primary(), None);
    }

    #[test]
    fn confidence_is_clamped() {
        let intent = Intent::new(IntentType::Help, 1.5, "help");
        assert!((intent.confidence - 1.0).abs() < f64::EPSILON);
    }
}
