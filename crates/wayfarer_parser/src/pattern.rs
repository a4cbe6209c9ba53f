//! Structured verb+argument patterns.
//!
//! A pattern is a sequence of elements matched left to right against the
//! token stream. Phrase slots are greedy up to the next literal the pattern
//! still expects, and a pattern only matches if it consumes every token.

use std::collections::BTreeMap;

use crate::intent::IntentType;
use crate::tokenizer::Token;
use crate::vocabulary::Vocabulary;

/// One element of a pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PatternElement {
    /// A verb from the vocabulary, by canonical name.
    Verb(String),
    /// A word that must appear.
    Literal(String),
    /// A word that may appear.
    OptionalLiteral(String),
    /// A direction word, bound to its canonical name under the given key.
    Direction(String),
    /// A non-empty noun phrase bound under the given key.
    Phrase(String),
    /// A noun phrase that may be absent.
    OptionalPhrase(String),
}

impl PatternElement {
    fn literal_word(&self) -> Option<&str> {
        match self {
            Self::Literal(w) | Self::OptionalLiteral(w) => Some(w),
            _ => None,
        }
    }
}

/// A structured pattern producing one intent type.
#[derive(Clone, Debug)]
pub struct Pattern {
    /// Intent produced on a match.
    pub intent: IntentType,
    /// Elements, matched in order.
    pub elements: Vec<PatternElement>,
    /// Parameters set on every match, before slot bindings.
    pub fixed: Vec<(String, String)>,
}

/// A successful pattern match.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternMatch {
    /// Bound parameters.
    pub parameters: BTreeMap<String, String>,
    /// Tokens consumed by verb and literal elements.
    pub span: usize,
}

impl Pattern {
    /// Starts a pattern for the given intent.
    #[must_use]
    pub fn new(intent: IntentType) -> Self {
        Self {
            intent,
            elements: Vec::new(),
            fixed: Vec::new(),
        }
    }

    /// Appends a verb element.
    #[must_use]
    pub fn verb(mut self, name: &str) -> Self {
        self.elements.push(PatternElement::Verb(name.to_string()));
        self
    }

    /// Appends a required literal.
    #[must_use]
    pub fn literal(mut self, word: &str) -> Self {
        self.elements.push(PatternElement::Literal(word.to_string()));
        self
    }

    /// Appends an optional literal.
    #[must_use]
    pub fn optional(mut self, word: &str) -> Self {
        self.elements
            .push(PatternElement::OptionalLiteral(word.to_string()));
        self
    }

    /// Appends a direction slot.
    #[must_use]
    pub fn direction(mut self, key: &str) -> Self {
        self.elements.push(PatternElement::Direction(key.to_string()));
        self
    }

    /// Appends a required phrase slot.
    #[must_use]
    pub fn phrase(mut self, key: &str) -> Self {
        self.elements.push(PatternElement::Phrase(key.to_string()));
        self
    }

    /// Appends an optional phrase slot.
    #[must_use]
    pub fn optional_phrase(mut self, key: &str) -> Self {
        self.elements
            .push(PatternElement::OptionalPhrase(key.to_string()));
        self
    }

    /// Sets a parameter on every match.
    #[must_use]
    pub fn bind(mut self, key: &str, value: &str) -> Self {
        self.fixed.push((key.to_string(), value.to_string()));
        self
    }

    /// Attempts to match the whole token stream.
    #[must_use]
    pub fn try_match(&self, tokens: &[Token], vocab: &Vocabulary) -> Option<PatternMatch> {
        let mut idx = 0;
        let mut span = 0;
        let mut parameters: BTreeMap<String, String> = self.fixed.iter().cloned().collect();

        for (position, element) in self.elements.iter().enumerate() {
            match element {
                PatternElement::Verb(name) => {
                    let consumed = vocab.verb(name)?.match_at(tokens, idx)?;
                    idx += consumed;
                    span += consumed;
                }
                PatternElement::Literal(word) => {
                    if !tokens.get(idx)?.is_word(word) {
                        return None;
                    }
                    idx += 1;
                    span += 1;
                }
                PatternElement::OptionalLiteral(word) => {
                    if tokens.get(idx).is_some_and(|t| t.is_word(word)) {
                        idx += 1;
                        span += 1;
                    }
                }
                PatternElement::Direction(key) => {
                    let Token::Word(word) = tokens.get(idx)? else {
                        return None;
                    };
                    let direction = vocab.lookup_direction(word)?;
                    parameters.insert(key.clone(), direction.name.clone());
                    idx += 1;
                }
                PatternElement::Phrase(key) | PatternElement::OptionalPhrase(key) => {
                    let stop = self.elements[position + 1..]
                        .iter()
                        .find_map(PatternElement::literal_word);
                    match collect_phrase(tokens, idx, stop, vocab) {
                        Some((text, consumed)) => {
                            parameters.insert(key.clone(), text);
                            idx += consumed;
                        }
                        None if matches!(element, PatternElement::OptionalPhrase(_)) => {}
                        None => return None,
                    }
                }
            }
        }

        (idx == tokens.len()).then_some(PatternMatch { parameters, span })
    }
}

/// Collects a noun phrase starting at `start`, dropping one leading article
/// and stopping before `stop` or at the end of input.
///
/// Returns the phrase text and the number of tokens consumed, or `None` if
/// the phrase would be empty.
#[must_use]
pub fn collect_phrase(
    tokens: &[Token],
    start: usize,
    stop: Option<&str>,
    vocab: &Vocabulary,
) -> Option<(String, usize)> {
    let mut idx = start;
    if matches!(tokens.get(idx), Some(Token::Word(w)) if vocab.is_article(w)) {
        idx += 1;
    }

    let mut words = Vec::new();
    while let Some(token) = tokens.get(idx) {
        if stop.is_some_and(|s| token.is_word(s)) {
            break;
        }
        words.push(token.text());
        idx += 1;
    }

    if words.is_empty() {
        return None;
    }
    Some((words.join(" "), idx - start))
}
