//! Intent recognition and command context for text adventure games.
//!
//! This crate turns player input like "go to castle" or "use key on door"
//! into ranked [`Intent`]s, and remembers enough about recent interactions to
//! resolve "it" or "the rusty one" back to a concrete entity.
//!
//! # Architecture
//!
//! ```text
//! "Pick up the lamp!"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → ["pick", "up", "the", "lamp"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ PATTERNS        │  → TAKE {item: "lamp"} @ 0.9
//! │ (tier a)        │
//! └─────────────────┘
//!          │ nothing matched
//!          ▼
//! ┌─────────────────┐
//! │ KEYWORDS        │  → TAKE {item: ...} @ 0.6
//! │ (tier b)        │
//! └─────────────────┘
//!          │ nothing matched
//!          ▼
//!     UNKNOWN @ 0.1
//! ```
//!
//! Recognition is pure: it knows vocabulary, not world content. Turning a
//! parameter into an entity is the job of [`CommandContext`].
//!
//! # Modules
//!
//! - [`intent`] - Intent types and parameters
//! - [`tokenizer`] - Convert raw input to a token stream
//! - [`vocabulary`] - Verbs, directions, and articles
//! - [`pattern`] - Structured verb+argument patterns
//! - [`recognizer`] - Two-tier intent recognition
//! - [`pronouns`] - Pronoun bindings
//! - [`context`] - Session memory and reference resolution
//! - [`stdlib`] - Standard vocabulary and patterns

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod context;
pub mod intent;
pub mod pattern;
pub mod pronouns;
pub mod recognizer;
pub mod stdlib;
pub mod tokenizer;
pub mod vocabulary;

// Re-export main types for convenience
pub use context::{CommandContext, Interaction};
pub use intent::{Intent, IntentType};
pub use pattern::{Pattern, PatternElement};
pub use pronouns::PronounState;
pub use recognizer::IntentRecognizer;
pub use tokenizer::{InputTokenizer, Token};
pub use vocabulary::Vocabulary;
