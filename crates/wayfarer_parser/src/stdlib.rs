//! Standard library for adventure games.
//!
//! Contains the default vocabulary, patterns, and keywords. Pattern order is
//! significant: among equally long matches, the earlier pattern wins.

use crate::intent::IntentType;
use crate::pattern::Pattern;
use crate::vocabulary::{Direction, Verb, Vocabulary};

/// Standard directions: (name, synonyms, opposite).
pub const DIRECTIONS: &[(&str, &[&str], &str)] = &[
    // Cardinal directions
    ("north", &["n"], "south"),
    ("south", &["s"], "north"),
    ("east", &["e"], "west"),
    ("west", &["w"], "east"),
    // Vertical directions
    ("up", &["u"], "down"),
    ("down", &["d"], "up"),
    // Diagonal directions
    ("northeast", &["ne"], "southwest"),
    ("northwest", &["nw"], "southeast"),
    ("southeast", &["se"], "northwest"),
    ("southwest", &["sw"], "northeast"),
    // Special directions
    ("in", &["inside"], "out"),
    ("out", &["outside"], "in"),
];

/// Standard verbs: (name, synonyms).
pub const VERBS: &[(&str, &[&str])] = &[
    // Movement
    ("go", &["walk", "move", "run", "travel", "head"]),
    // Looking
    ("look", &["l", "examine", "x", "inspect", "check"]),
    // Manipulation
    ("take", &["get", "grab", "pick", "pick up"]),
    ("use", &["activate", "apply"]),
    ("equip", &["wear", "wield"]),
    // Social
    ("talk", &["speak", "chat", "converse"]),
    // Combat
    ("attack", &["kill", "fight", "hit", "strike"]),
    ("block", &["parry", "guard", "defend"]),
    ("dodge", &["evade", "duck", "sidestep"]),
    ("flee", &["escape", "retreat", "run away"]),
    // Inventory
    ("inventory", &["i", "inv", "items"]),
    // Meta
    ("help", &["commands", "?"]),
    ("quit", &["q", "exit", "bye"]),
    ("save", &[]),
    ("load", &["restore"]),
    ("map", &[]),
];

/// Words dropped from the start of noun phrases.
pub const ARTICLES: &[&str] = &["the", "a", "an"];

/// Keywords for the fallback tier, per intent type, in priority order.
pub const KEYWORDS: &[(IntentType, &[&str])] = &[
    (
        IntentType::Move,
        &["go", "move", "walk", "travel", "north", "south", "east", "west"],
    ),
    (IntentType::Examine, &["look", "examine", "inspect", "check", "see"]),
    (IntentType::Take, &["take", "get", "grab", "pick"]),
    (IntentType::Use, &["use", "activate", "apply"]),
    (IntentType::Talk, &["talk", "speak", "chat", "converse"]),
    (IntentType::Attack, &["attack", "fight", "hit", "strike"]),
    (IntentType::Block, &["block", "parry"]),
    (IntentType::Dodge, &["dodge", "evade"]),
    (IntentType::Flee, &["flee", "escape"]),
    (IntentType::Inventory, &["inventory", "items", "i"]),
    (IntentType::Equip, &["equip", "wear", "wield"]),
    (IntentType::Help, &["help", "commands", "?"]),
    (IntentType::Quit, &["quit", "exit", "bye"]),
    (IntentType::Save, &["save"]),
    (IntentType::Load, &["load"]),
    (IntentType::Map, &["map"]),
];

/// Builds the standard vocabulary.
#[must_use]
pub fn standard_vocabulary() -> Vocabulary {
    let mut vocab = Vocabulary::new();
    for (name, synonyms, opposite) in DIRECTIONS {
        vocab.register_direction(Direction::new(name, synonyms, Some(opposite)));
    }
    for (name, synonyms) in VERBS {
        vocab.register_verb(Verb::new(name, synonyms));
    }
    for article in ARTICLES {
        vocab.register_article(article);
    }
    vocab
}

/// Builds the standard patterns, in declaration order.
#[must_use]
pub fn standard_patterns() -> Vec<Pattern> {
    use IntentType as I;

    vec![
        // Movement
        Pattern::new(I::Move).verb("go").direction("direction"),
        Pattern::new(I::Move)
            .verb("go")
            .optional("to")
            .phrase("direction"),
        Pattern::new(I::Move).direction("direction"),
        // Looking
        Pattern::new(I::Examine)
            .verb("look")
            .literal("around")
            .bind("target", "surroundings"),
        Pattern::new(I::Examine)
            .verb("look")
            .optional("at")
            .phrase("target"),
        Pattern::new(I::Examine)
            .verb("look")
            .bind("target", "surroundings"),
        // Manipulation
        Pattern::new(I::Take).verb("take").phrase("item"),
        Pattern::new(I::Use)
            .verb("use")
            .phrase("item")
            .literal("on")
            .phrase("target"),
        Pattern::new(I::Use).verb("use").phrase("item"),
        Pattern::new(I::Equip).verb("equip").phrase("item"),
        // Social
        Pattern::new(I::Talk)
            .verb("talk")
            .optional("to")
            .phrase("character"),
        Pattern::new(I::Talk)
            .verb("talk")
            .literal("with")
            .phrase("character"),
        // Combat
        Pattern::new(I::Attack).verb("attack").phrase("target"),
        Pattern::new(I::Attack).verb("attack"),
        Pattern::new(I::Block).verb("block"),
        Pattern::new(I::Dodge).verb("dodge"),
        Pattern::new(I::Flee).verb("flee"),
        // Inventory
        Pattern::new(I::Inventory).verb("inventory"),
        // Meta
        Pattern::new(I::Help).verb("help"),
        Pattern::new(I::Quit).verb("quit"),
        Pattern::new(I::Save)
            .verb("save")
            .optional("game")
            .optional("to")
            .optional_phrase("filename"),
        Pattern::new(I::Load)
            .verb("load")
            .optional("game")
            .optional("from")
            .optional_phrase("filename"),
        Pattern::new(I::Map).verb("map").bind("target", "world"),
        Pattern::new(I::Map)
            .literal("world")
            .optional("map")
            .bind("target", "world"),
        Pattern::new(I::Map)
            .literal("local")
            .optional("map")
            .bind("target", "local"),
    ]
}
