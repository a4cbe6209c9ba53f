//! Intent recognition tests.
//!
//! Tests for turning raw player input into ranked intents.

use wayfarer_parser::intent::{KEYWORD_CONFIDENCE, PATTERN_CONFIDENCE, UNKNOWN_CONFIDENCE};
use wayfarer_parser::{Intent, IntentRecognizer, IntentType, Pattern};

fn top(input: &str) -> Intent {
    IntentRecognizer::standard()
        .recognize(input)
        .into_iter()
        .next()
        .unwrap()
}

#[test]
fn go_to_castle() {
    let intent = top("go to castle");

    assert_eq!(intent.kind, IntentType::Move);
    assert_eq!(intent.parameter("direction"), Some("castle"));
    assert_eq!(intent.original_text, "go to castle");
}

#[test]
fn candidates_are_ranked_by_confidence() {
    let recognizer = IntentRecognizer::standard();
    for input in ["run away", "take the lamp", "please grab it", "look", "xyzzy"] {
        let intents = recognizer.recognize(input);
        assert!(!intents.is_empty(), "no candidates for {input:?}");
        assert!(
            intents
                .windows(2)
                .all(|pair| pair[0].confidence >= pair[1].confidence),
            "unordered candidates for {input:?}"
        );
    }
}

#[test]
fn pattern_and_keyword_tiers() {
    assert!((top("take lamp").confidence - PATTERN_CONFIDENCE).abs() < f64::EPSILON);
    assert!((top("please take the lamp").confidence - KEYWORD_CONFIDENCE).abs() < f64::EPSILON);
    assert!((top("hum a tune").confidence - UNKNOWN_CONFIDENCE).abs() < f64::EPSILON);
}

#[test]
fn synonyms_map_to_canonical_verbs() {
    assert_eq!(top("grab lamp").kind, IntentType::Take);
    assert_eq!(top("walk north").kind, IntentType::Move);
    assert_eq!(top("x statue").kind, IntentType::Examine);
    assert_eq!(top("speak to the elder").kind, IntentType::Talk);
    assert_eq!(top("kill rat").kind, IntentType::Attack);
    assert_eq!(top("parry").kind, IntentType::Block);
    assert_eq!(top("evade").kind, IntentType::Dodge);
    assert_eq!(top("wield sword").kind, IntentType::Equip);
    assert_eq!(top("restore").kind, IntentType::Load);
}

#[test]
fn case_and_punctuation_are_ignored() {
    let intent = top("TAKE THE LAMP!");
    assert_eq!(intent.kind, IntentType::Take);
    assert_eq!(intent.parameter("item"), Some("lamp"));
}

#[test]
fn talk_binds_character() {
    let intent = top("talk to the village elder");
    assert_eq!(intent.kind, IntentType::Talk);
    assert_eq!(intent.parameter("character"), Some("village elder"));
}

#[test]
fn use_on_binds_both_sides() {
    let intent = top("use rusty key on the iron door");
    assert_eq!(intent.kind, IntentType::Use);
    assert_eq!(intent.parameter("item"), Some("rusty key"));
    assert_eq!(intent.parameter("target"), Some("iron door"));
}

#[test]
fn save_and_load_filenames() {
    assert_eq!(top("save game to slot1").parameter("filename"), Some("slot1"));
    assert_eq!(top("load").kind, IntentType::Load);
    assert_eq!(top("load").parameter("filename"), None);
}

#[test]
fn empty_input_is_unknown() {
    let intents = IntentRecognizer::standard().recognize("   ");
    assert_eq!(intents.len(), 1);
    assert_eq!(intents[0].kind, IntentType::Unknown);
}

#[test]
fn registered_patterns_extend_recognition() {
    let mut recognizer = IntentRecognizer::standard();
    recognizer
        .vocabulary_mut()
        .register_verb(wayfarer_parser::vocabulary::Verb::new("greet", &["hail"]));
    recognizer.register_pattern(Pattern::new(IntentType::Talk).verb("greet").phrase("character"));

    let intent = recognizer.recognize("hail the guard").remove(0);
    assert_eq!(intent.kind, IntentType::Talk);
    assert_eq!(intent.parameter("character"), Some("guard"));
}
