//! Input tokenization.
//!
//! Converts raw player input into a stream of tokens.

/// A token from player input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A lowercase word with punctuation removed.
    Word(String),
    /// A quoted string, kept whole and with its case.
    Quoted(String),
}

impl Token {
    /// The token's text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Word(w) | Self::Quoted(w) => w,
        }
    }

    /// Returns true if this is the given word (quoted strings never are).
    #[must_use]
    pub fn is_word(&self, word: &str) -> bool {
        matches!(self, Self::Word(w) if w == word)
    }
}

/// Tokenizes player input.
pub struct InputTokenizer;

impl InputTokenizer {
    /// Tokenizes a raw input string.
    ///
    /// - Converts words to lowercase
    /// - Strips punctuation, except a lone `?` (a request for help)
    /// - Preserves quoted strings as atomic units
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut chars = input.chars().peekable();
        let mut word = String::new();
        let mut stripped = String::new();

        let flush = |word: &mut String, stripped: &mut String, tokens: &mut Vec<Token>| {
            if !word.is_empty() {
                tokens.push(Token::Word(word.to_lowercase()));
            } else if stripped == "?" {
                tokens.push(Token::Word("?".to_string()));
            }
            word.clear();
            stripped.clear();
        };

        while let Some(ch) = chars.next() {
            match ch {
                '"' => {
                    flush(&mut word, &mut stripped, &mut tokens);
                    let mut quoted = String::new();
                    for c in chars.by_ref() {
                        if c == '"' {
                            break;
                        }
                        quoted.push(c);
                    }
                    if !quoted.trim().is_empty() {
                        tokens.push(Token::Quoted(quoted));
                    }
                }
                c if c.is_whitespace() => flush(&mut word, &mut stripped, &mut tokens),
                '.' | ',' | '!' | '?' | ';' | ':' | '\'' => stripped.push(ch),
                _ => word.push(ch),
            }
        }
        flush(&mut word, &mut stripped, &mut tokens);

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &str) -> Vec<String> {
        InputTokenizer::tokenize(input)
            .iter()
            .map(|t| t.text().to_string())
            .collect()
    }

    #[test]
    fn test_tokenize_simple() {
        assert_eq!(words("take sword"), vec!["take", "sword"]);
    }

    #[test]
    fn test_tokenize_lowercase_and_whitespace() {
        assert_eq!(words("  Take \t SWORD "), vec!["take", "sword"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(words("take the elder's sword!"), vec!["take", "the", "elders", "sword"]);
    }

    #[test]
    fn test_tokenize_lone_question_mark() {
        assert_eq!(words("?"), vec!["?"]);
        assert_eq!(words("help?"), vec!["help"]);
    }

    #[test]
    fn test_tokenize_quoted_string() {
        let tokens = InputTokenizer::tokenize("save \"My Game\"");
        assert_eq!(
            tokens,
            vec![Token::Word("save".to_string()), Token::Quoted("My Game".to_string())]
        );
        assert!(tokens[0].is_word("save"));
        assert!(!tokens[1].is_word("my game"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(InputTokenizer::tokenize("").is_empty());
        assert!(InputTokenizer::tokenize("...").is_empty());
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn words_are_lowercase_and_bare(input in "[a-zA-Z .,!?;:']{0,40}") {
                for token in InputTokenizer::tokenize(&input) {
                    let text = token.text();
                    prop_assert!(!text.is_empty());
                    if text != "?" {
                        prop_assert!(text.chars().all(|c| c.is_ascii_lowercase()));
                    }
                }
            }
        }
    }
}
