//! Two-tier intent recognition.
//!
//! Tier (a) tries every structured pattern; tier (b) falls back to keyword
//! containment only when no pattern matched. Recognition never fails: with
//! nothing recognizable it returns a single UNKNOWN intent.

use tracing::debug;

use crate::intent::{Intent, IntentType, KEYWORD_CONFIDENCE, PATTERN_CONFIDENCE};
use crate::pattern::{Pattern, collect_phrase};
use crate::stdlib;
use crate::tokenizer::{InputTokenizer, Token};
use crate::vocabulary::Vocabulary;

/// Converts raw text into ranked intents.
#[derive(Clone, Debug)]
pub struct IntentRecognizer {
    vocabulary: Vocabulary,
    patterns: Vec<Pattern>,
    keywords: Vec<(IntentType, Vec<String>)>,
}

/// A tier (a) candidate with its ranking keys.
struct Candidate {
    intent: Intent,
    span: usize,
    order: usize,
}

impl Default for IntentRecognizer {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntentRecognizer {
    /// Creates a recognizer with a vocabulary and no patterns or keywords.
    #[must_use]
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self {
            vocabulary,
            patterns: Vec::new(),
            keywords: Vec::new(),
        }
    }

    /// Creates a recognizer loaded with the standard library.
    #[must_use]
    pub fn standard() -> Self {
        let mut recognizer = Self::new(stdlib::standard_vocabulary());
        for pattern in stdlib::standard_patterns() {
            recognizer.register_pattern(pattern);
        }
        for (kind, words) in stdlib::KEYWORDS {
            recognizer.register_keywords(*kind, words);
        }
        recognizer
    }

    /// The vocabulary patterns are matched against.
    #[must_use]
    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Mutable access to the vocabulary, for adding verbs or directions.
    pub fn vocabulary_mut(&mut self) -> &mut Vocabulary {
        &mut self.vocabulary
    }

    /// Appends a pattern. Later patterns lose ties against earlier ones.
    pub fn register_pattern(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    /// Appends fallback keywords for an intent type.
    pub fn register_keywords(&mut self, kind: IntentType, words: &[&str]) {
        let words = words.iter().map(|w| w.to_lowercase());
        match self.keywords.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, existing)) => existing.extend(words),
            None => self.keywords.push((kind, words.collect())),
        }
    }

    /// Recognizes intents in `text`, best first. Never empty.
    #[must_use]
    pub fn recognize(&self, text: &str) -> Vec<Intent> {
        let tokens = InputTokenizer::tokenize(text);

        let mut intents = self.match_patterns(&tokens, text);
        if intents.is_empty() {
            intents = self.match_keywords(&tokens, text);
        }
        if intents.is_empty() {
            intents.push(Intent::unknown(text));
        }

        if let Some(top) = intents.first() {
            debug!(
                input = text,
                intent = %top.kind,
                confidence = top.confidence,
                candidates = intents.len(),
                "recognized intent"
            );
        }
        intents
    }

    /// Tier (a): structured patterns, best match per intent type.
    fn match_patterns(&self, tokens: &[Token], text: &str) -> Vec<Intent> {
        let mut best: Vec<Candidate> = Vec::new();

        for (order, pattern) in self.patterns.iter().enumerate() {
            let Some(found) = pattern.try_match(tokens, &self.vocabulary) else {
                continue;
            };
            let mut intent = Intent::new(pattern.intent, PATTERN_CONFIDENCE, text);
            intent.parameters = found.parameters;
            let candidate = Candidate {
                intent,
                span: found.span,
                order,
            };

            match best.iter_mut().find(|c| c.intent.kind == pattern.intent) {
                // Patterns arrive in declaration order, so only a strictly
                // longer span displaces the earlier match.
                Some(existing) if candidate.span > existing.span => *existing = candidate,
                Some(_) => {}
                None => best.push(candidate),
            }
        }

        best.sort_by(|a, b| {
            b.intent
                .confidence
                .total_cmp(&a.intent.confidence)
                .then_with(|| b.span.cmp(&a.span))
                .then_with(|| a.order.cmp(&b.order))
        });
        best.into_iter().map(|c| c.intent).collect()
    }

    /// Tier (b): the first keyword per intent type binds the rest of the
    /// input as that type's primary parameter.
    fn match_keywords(&self, tokens: &[Token], text: &str) -> Vec<Intent> {
        let mut intents = Vec::new();

        for (kind, words) in &self.keywords {
            let Some((keyword, position)) = words.iter().find_map(|word| {
                tokens
                    .iter()
                    .position(|t| t.is_word(word))
                    .map(|pos| (word.as_str(), pos))
            }) else {
                continue;
            };

            let mut intent = Intent::new(*kind, KEYWORD_CONFIDENCE, text);
            let rest = collect_phrase(tokens, position + 1, None, &self.vocabulary)
                .map(|(phrase, _)| phrase);

            match kind {
                IntentType::Move => {
                    if let Some(direction) = self.vocabulary.lookup_direction(keyword) {
                        intent = intent.with_parameter("direction", direction.name.clone());
                    } else if let Some(rest) = rest {
                        intent = intent.with_parameter("direction", rest);
                    }
                }
                IntentType::Use => {
                    if let Some(rest) = rest {
                        match rest.split_once(" on ") {
                            Some((item, target)) => {
                                intent = intent
                                    .with_parameter("item", item)
                                    .with_parameter("target", target);
                            }
                            None => intent = intent.with_parameter("item", rest),
                        }
                    }
                }
                _ => {
                    if let (Some(key), Some(rest)) = (kind.primary_parameter(), rest) {
                        intent = intent.with_parameter(key, rest);
                    }
                }
            }
            intents.push(intent);
        }

        intents
    }
}
