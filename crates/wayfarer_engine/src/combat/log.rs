//! Bounded combat log.

use std::collections::VecDeque;

/// One line of the combat log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Turn the line was written on, starting at 1.
    pub turn: u32,
    /// What happened.
    pub message: String,
}

/// A ring buffer of the most recent combat lines.
///
/// Holds at most `max_size` entries, discarding the oldest first.
#[derive(Clone, Debug)]
pub struct CombatLog {
    entries: VecDeque<LogEntry>,
    max_size: usize,
}

impl CombatLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_size.min(256)),
            max_size,
        }
    }

    /// Appends a line, evicting the oldest if over capacity.
    pub fn push(&mut self, turn: u32, message: impl Into<String>) {
        self.entries.push_back(LogEntry {
            turn,
            message: message.into(),
        });
        while self.entries.len() > self.max_size {
            self.entries.pop_front();
        }
    }

    /// Number of lines held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// Lines written on a given turn.
    #[must_use]
    pub fn for_turn(&self, turn: u32) -> Vec<&LogEntry> {
        self.entries.iter().filter(|e| e.turn == turn).collect()
    }

    /// The most recent `count` lines, oldest first.
    #[must_use]
    pub fn recent(&self, count: usize) -> Vec<&LogEntry> {
        let skip = self.entries.len().saturating_sub(count);
        self.entries.iter().skip(skip).collect()
    }
}
