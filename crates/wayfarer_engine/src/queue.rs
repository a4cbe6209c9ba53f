//! Priority and delay scheduling for deferred effects.
//!
//! Commands are kept sorted by (priority descending, execution time
//! ascending). Readiness, not position, decides what runs: a CRITICAL
//! command that is not due yet never blocks a LOW command that is.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};
use wayfarer_foundation::{Clock, Result, SystemClock};

/// Scheduling priority, lowest first.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandPriority {
    /// Background effects.
    Low = 0,
    /// Ordinary follow-ups.
    #[default]
    Normal = 1,
    /// Effects that should run ahead of ordinary ones.
    High = 2,
    /// Urgent events.
    Critical = 3,
}

/// The deferred work itself. Arguments are captured by the closure.
pub type Effect<T> = Box<dyn FnOnce() -> Result<T> + Send>;

/// A command waiting in the queue.
pub struct QueuedCommand<T> {
    kind: String,
    effect: Effect<T>,
    priority: CommandPriority,
    delay: Duration,
    creation_time: Duration,
}

impl<T> QueuedCommand<T> {
    /// Creates a command stamped with an explicit creation time.
    pub fn new<F>(
        kind: impl Into<String>,
        effect: F,
        priority: CommandPriority,
        delay: Duration,
        creation_time: Duration,
    ) -> Self
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        Self {
            kind: kind.into(),
            effect: Box::new(effect),
            priority,
            delay,
            creation_time,
        }
    }

    /// Tag used by [`CommandQueue::clear_by_type`].
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Scheduling priority.
    #[must_use]
    pub fn priority(&self) -> CommandPriority {
        self.priority
    }

    /// Delay after creation before the command may run.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// When the command was created, on the queue's clock.
    #[must_use]
    pub fn creation_time(&self) -> Duration {
        self.creation_time
    }

    /// `creation_time + delay`.
    #[must_use]
    pub fn execution_time(&self) -> Duration {
        self.creation_time.saturating_add(self.delay)
    }

    /// Returns true once `now` has reached the execution time.
    #[must_use]
    pub fn is_ready(&self, now: Duration) -> bool {
        now >= self.execution_time()
    }

    /// Runs the effect, consuming the command.
    ///
    /// # Errors
    ///
    /// Returns whatever error the effect produced.
    pub fn execute(self) -> Result<T> {
        (self.effect)()
    }
}

impl<T> fmt::Debug for QueuedCommand<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueuedCommand")
            .field("kind", &self.kind)
            .field("priority", &self.priority)
            .field("delay", &self.delay)
            .field("creation_time", &self.creation_time)
            .finish_non_exhaustive()
    }
}

/// A priority queue of deferred commands.
pub struct CommandQueue<T> {
    commands: Vec<QueuedCommand<T>>,
    clock: Arc<dyn Clock>,
}

impl<T> Default for CommandQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for CommandQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandQueue")
            .field("commands", &self.commands)
            .field("clock", &self.clock)
            .finish()
    }
}

impl<T> CommandQueue<T> {
    /// Creates an empty queue on the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock::new()))
    }

    /// Creates an empty queue reading time from `clock`.
    #[must_use]
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            commands: Vec::new(),
            clock,
        }
    }

    /// The current time on the queue's clock.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Builds a command stamped with the current time, without queueing it.
    /// Used with [`interrupt`](Self::interrupt).
    pub fn command<F>(
        &self,
        kind: impl Into<String>,
        effect: F,
        priority: CommandPriority,
        delay: Duration,
    ) -> QueuedCommand<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        QueuedCommand::new(kind, effect, priority, delay, self.now())
    }

    /// Adds a command and re-sorts the queue.
    pub fn enqueue<F>(
        &mut self,
        kind: impl Into<String>,
        effect: F,
        priority: CommandPriority,
        delay: Duration,
    ) where
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let command = self.command(kind, effect, priority, delay);
        self.push(command);
    }

    /// Adds an already-built command and re-sorts the queue.
    pub fn push(&mut self, command: QueuedCommand<T>) {
        self.commands.push(command);
        self.sort();
    }

    /// Removes and returns the first ready command in queue order.
    pub fn get_next_command(&mut self) -> Option<QueuedCommand<T>> {
        let now = self.now();
        let index = self.commands.iter().position(|c| c.is_ready(now))?;
        Some(self.commands.remove(index))
    }

    /// Runs every command that is ready now, in queue order, and returns
    /// their results.
    ///
    /// The ready set is fixed when the pass starts. A command that fails or
    /// panics is logged and skipped; the rest still run.
    pub fn process_queue(&mut self) -> Vec<T> {
        let now = self.now();
        let (ready, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.commands)
            .into_iter()
            .partition(|c| c.is_ready(now));
        self.commands = waiting;

        if !ready.is_empty() {
            debug!(ready = ready.len(), waiting = self.commands.len(), "draining command queue");
        }

        let mut results = Vec::with_capacity(ready.len());
        for command in ready {
            let kind = command.kind.clone();
            match panic::catch_unwind(AssertUnwindSafe(|| command.execute())) {
                Ok(Ok(result)) => results.push(result),
                Ok(Err(error)) => warn!(kind = %kind, %error, "queued command failed"),
                Err(payload) => {
                    warn!(kind = %kind, panic = panic_message(&*payload), "queued command panicked");
                }
            }
        }
        results
    }

    /// Drops every command with lower priority than `command`, then adds it.
    pub fn interrupt(&mut self, command: QueuedCommand<T>) {
        let before = self.commands.len();
        self.commands.retain(|c| c.priority >= command.priority);
        debug!(
            priority = ?command.priority,
            evicted = before - self.commands.len(),
            "queue interrupted"
        );
        self.push(command);
    }

    /// Removes every command.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Removes every command with the given kind tag.
    pub fn clear_by_type(&mut self, kind: &str) {
        self.commands.retain(|c| c.kind != kind);
    }

    /// Number of queued commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Queued commands in dequeue order (ignoring readiness).
    pub fn iter(&self) -> impl Iterator<Item = &QueuedCommand<T>> {
        self.commands.iter()
    }

    fn sort(&mut self) {
        // Stable: equal keys keep insertion order.
        self.commands.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.execution_time().cmp(&b.execution_time()))
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
