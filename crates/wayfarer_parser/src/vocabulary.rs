//! Vocabulary: verbs, directions, and articles.
//!
//! Words are stored as plain lowercase strings. A verb synonym may span
//! several words ("pick up"), which is why verbs are matched against a token
//! slice rather than a single word.

use crate::tokenizer::Token;

/// A registered verb with its canonical name and synonyms.
#[derive(Clone, Debug)]
pub struct Verb {
    /// Canonical verb name.
    pub name: String,
    /// Every phrasing that counts as this verb, including the name itself.
    pub synonyms: Vec<Vec<String>>,
}

impl Verb {
    /// Creates a verb from its canonical name and synonyms. Multi-word
    /// synonyms are written with spaces.
    #[must_use]
    pub fn new(name: &str, synonyms: &[&str]) -> Self {
        let mut phrasings: Vec<Vec<String>> = std::iter::once(name)
            .chain(synonyms.iter().copied())
            .map(|s| s.split_whitespace().map(str::to_lowercase).collect())
            .collect();
        // Longest phrasing first, so "pick up" wins over "pick".
        phrasings.sort_by(|a, b| b.len().cmp(&a.len()));
        Self {
            name: name.to_lowercase(),
            synonyms: phrasings,
        }
    }

    /// Returns the number of tokens this verb consumes at `tokens[start..]`,
    /// preferring the longest phrasing.
    #[must_use]
    pub fn match_at(&self, tokens: &[Token], start: usize) -> Option<usize> {
        self.synonyms.iter().find_map(|phrase| {
            let end = start + phrase.len();
            let window = tokens.get(start..end)?;
            window
                .iter()
                .zip(phrase)
                .all(|(token, word)| token.is_word(word))
                .then_some(phrase.len())
        })
    }
}

/// A registered direction.
#[derive(Clone, Debug)]
pub struct Direction {
    /// Canonical direction name.
    pub name: String,
    /// Synonym words.
    pub synonyms: Vec<String>,
    /// Opposite direction.
    pub opposite: Option<String>,
}

impl Direction {
    /// Creates a direction.
    #[must_use]
    pub fn new(name: &str, synonyms: &[&str], opposite: Option<&str>) -> Self {
        Self {
            name: name.to_string(),
            synonyms: synonyms.iter().map(ToString::to_string).collect(),
            opposite: opposite.map(ToString::to_string),
        }
    }

    fn answers_to(&self, word: &str) -> bool {
        self.name == word || self.synonyms.iter().any(|s| s == word)
    }
}

/// Runtime storage for vocabulary definitions.
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    verbs: Vec<Verb>,
    directions: Vec<Direction>,
    articles: Vec<String>,
}

impl Vocabulary {
    /// Creates an empty vocabulary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a verb, replacing any verb with the same name.
    pub fn register_verb(&mut self, verb: Verb) {
        self.verbs.retain(|v| v.name != verb.name);
        self.verbs.push(verb);
    }

    /// Looks up a verb by canonical name.
    #[must_use]
    pub fn verb(&self, name: &str) -> Option<&Verb> {
        self.verbs.iter().find(|v| v.name == name)
    }

    /// Registers a direction.
    pub fn register_direction(&mut self, direction: Direction) {
        self.directions.retain(|d| d.name != direction.name);
        self.directions.push(direction);
    }

    /// Looks up a direction by word (canonical or synonym).
    #[must_use]
    pub fn lookup_direction(&self, word: &str) -> Option<&Direction> {
        self.directions.iter().find(|d| d.answers_to(word))
    }

    /// All registered directions.
    #[must_use]
    pub fn directions(&self) -> &[Direction] {
        &self.directions
    }

    /// Registers an article that is dropped from the start of noun phrases.
    pub fn register_article(&mut self, article: &str) {
        if !self.is_article(article) {
            self.articles.push(article.to_lowercase());
        }
    }

    /// Checks if a word is an article.
    #[must_use]
    pub fn is_article(&self, word: &str) -> bool {
        self.articles.iter().any(|a| a == word)
    }
}
