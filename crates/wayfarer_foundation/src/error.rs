//! Error types for the Wayfarer system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Most player-facing failures are not errors at all: an unmatched reference or
//! a failed precondition becomes a failure `CommandResult`. The kinds here cover
//! orchestration mistakes (driving a finished combat encounter) and
//! collaborator faults (narration, persistence, queued effects), which callers
//! either degrade or log.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityRef;

/// The main error type for Wayfarer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a mutating call on a combat encounter that already ended.
    #[must_use]
    pub fn encounter_terminal(status: impl Into<String>) -> Self {
        Self::new(ErrorKind::EncounterTerminal {
            status: status.into(),
        })
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(entity: EntityRef) -> Self {
        Self::new(ErrorKind::EntityNotFound(entity))
    }

    /// Creates a narrative generator failure.
    #[must_use]
    pub fn narrative(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Narrative(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a serialization error.
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Serialization(message.into()))
    }

    /// Creates a queued command fault.
    #[must_use]
    pub fn queued_command(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::QueuedCommand(message.into()))
    }

    /// Returns true if this error signals misuse of a finished encounter.
    #[must_use]
    pub fn is_encounter_terminal(&self) -> bool {
        matches!(self.kind, ErrorKind::EncounterTerminal { .. })
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A turn, surrender, or other mutation was attempted on a finished encounter.
    #[error("combat encounter already ended ({status})")]
    EncounterTerminal {
        /// The terminal status the encounter is in.
        status: String,
    },

    /// The encounter is still active and cannot be finalized yet.
    #[error("combat encounter is still active")]
    EncounterActive,

    /// The encounter was already finalized.
    #[error("combat encounter already finalized")]
    AlreadyFinalized,

    /// A combat action was requested with no encounter in progress.
    #[error("no active combat encounter")]
    NoActiveEncounter,

    /// A referenced entity does not exist in the world.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityRef),

    /// The narrative generator failed or timed out.
    #[error("narrative generation failed: {0}")]
    Narrative(String),

    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(String),

    /// Encoding or decoding failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A deferred effect failed while the queue was draining.
    #[error("queued command failed: {0}")]
    QueuedCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Component or command that produced the error.
    pub source: Option<String>,
    /// Chain of operations leading to the error, outermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}

/// Result type alias for Wayfarer operations.
pub type Result<T> = std::result::Result<T, Error>;
