//! A single player's game session.
//!
//! The session owns everything one game needs: the world, interaction
//! memory, the fight in progress, the deferred effect queue, and the handler
//! table. Each call to [`GameSession::submit_command`] runs the whole
//! pipeline synchronously:
//!
//! ```text
//! text ─► recognize ─► dispatch ─► handler mutates world ─► feedback
//!                                                   │
//!                                     delayed effects ─► queue
//! ```
//!
//! Sessions share nothing mutable, so any number can run side by side.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};
use wayfarer_engine::{
    CombatEncounter, CommandHandler, CommandPriority, CommandQueue, CommandRegistry, CommandResult,
    Effect, FeedbackGenerator, HandlerContext, HandlerServices, Narration, Persistence,
    SessionControl,
};
use wayfarer_foundation::{Clock, Result};
use wayfarer_parser::{CommandContext, Intent, IntentRecognizer, IntentType};
use wayfarer_world::{World, WorldView};

use crate::config::SessionConfig;
use crate::persistence::FilePersistence;

/// Message for a delayed effect that carries no description of its own.
pub const DEFAULT_DELAYED_MESSAGE: &str = "Something changes in the world.";

/// One player's game.
#[derive(Debug)]
pub struct GameSession {
    world: World,
    context: CommandContext,
    encounter: Option<CombatEncounter>,
    control: SessionControl,
    recognizer: IntentRecognizer,
    registry: CommandRegistry,
    feedback: FeedbackGenerator,
    queue: CommandQueue<CommandResult>,
    config: SessionConfig,
}

impl GameSession {
    /// Creates a session that saves to files in the working directory.
    #[must_use]
    pub fn new(world: World, config: SessionConfig) -> Self {
        let services = Self::services(&config, Some(Arc::new(FilePersistence::new())));
        Self::with_services(world, config, &services)
    }

    /// Creates a session whose built-in handlers use the given collaborators.
    #[must_use]
    pub fn with_services(world: World, config: SessionConfig, services: &HandlerServices) -> Self {
        let registry = CommandRegistry::with_builtins(services);
        info!(
            start = world.player_location(),
            handlers = registry.len(),
            seed = config.seed,
            "session started"
        );
        Self {
            world,
            context: CommandContext::new(),
            encounter: None,
            control: SessionControl::new(),
            recognizer: IntentRecognizer::standard(),
            registry,
            feedback: FeedbackGenerator::new(),
            queue: CommandQueue::new(),
            config,
        }
    }

    /// The handler collaborators a configuration implies, with the given
    /// save-file store. Replace fields (such as the narrator) before passing
    /// the result to [`with_services`](Self::with_services).
    #[must_use]
    pub fn services(
        config: &SessionConfig,
        persistence: Option<Arc<dyn Persistence>>,
    ) -> HandlerServices {
        let defaults = HandlerServices::default();
        HandlerServices {
            narration: Narration::default().with_fallback(config.fallback_message.clone()),
            tuning: Arc::new(config.combat.clone()),
            persistence,
            save_file: config.save_path.to_string_lossy().into_owned(),
            seed: config.seed,
            ..defaults
        }
    }

    /// Builder method to time the effect queue with a different clock.
    ///
    /// Anything already queued is dropped.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.queue = CommandQueue::with_clock(clock);
        self
    }

    /// Builder method to replace the intent recognizer.
    #[must_use]
    pub fn with_recognizer(mut self, recognizer: IntentRecognizer) -> Self {
        self.recognizer = recognizer;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The current world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Interaction memory.
    #[must_use]
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// The fight in progress, if any.
    #[must_use]
    pub fn encounter(&self) -> Option<&CombatEncounter> {
        self.encounter.as_ref()
    }

    /// The configuration the session was built with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns false once the player quits or is defeated.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.control.is_running()
    }

    /// The handler table, for registering custom handlers.
    pub fn registry_mut(&mut self) -> &mut CommandRegistry {
        &mut self.registry
    }

    /// The intent recognizer, for adding vocabulary or patterns.
    pub fn recognizer_mut(&mut self) -> &mut IntentRecognizer {
        &mut self.recognizer
    }

    /// Number of deferred effects waiting in the queue.
    #[must_use]
    pub fn pending_effects(&self) -> usize {
        self.queue.len()
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    /// Runs one line of player input through the pipeline.
    ///
    /// Input that is not recognized, falls below the confidence floor, or
    /// that no handler accepts produces a failure result with action type
    /// `unknown`. The turn counter advances only when a handler succeeds.
    pub fn submit_command(&mut self, text: &str) -> CommandResult {
        let intent = self
            .recognizer
            .recognize(text)
            .into_iter()
            .next()
            .unwrap_or_else(|| Intent::unknown(text));

        if intent.kind == IntentType::Unknown || intent.confidence < self.config.min_confidence {
            debug!(
                input = text,
                kind = %intent.kind,
                confidence = intent.confidence,
                "not understood"
            );
            return self.feedback.not_understood(text, &intent);
        }

        let Some(handler) = self.registry.get_handler_for_intent(&intent) else {
            return self.feedback.not_understood(text, &intent);
        };

        let before = self.world.clone();
        let outcome = {
            let mut cx = HandlerContext::new(
                &mut self.world,
                &mut self.context,
                &mut self.encounter,
                &mut self.control,
            );
            handler.handle(&intent, &mut cx)
        };

        let result = self
            .feedback
            .generate_feedback(text, &intent, outcome, &before, &self.world);

        if self.control.take_world_replaced() {
            self.queue.clear();
        }
        if result.success {
            self.world.advance_turn();
            self.schedule_delayed(&result);
        }
        debug!(
            input = text,
            kind = %intent.kind,
            success = result.success,
            turn = self.world.turn(),
            "command processed"
        );
        result
    }

    fn schedule_delayed(&mut self, result: &CommandResult) {
        for effect in result.effects.iter().filter(|e| !e.delay.is_zero()) {
            let delay = effect.delay;
            let kind = effect.kind.clone();
            let delayed = delayed_result(effect.clone());
            self.queue
                .enqueue(kind, move || Ok(delayed), CommandPriority::Normal, delay);
        }
    }

    /// Runs every deferred effect whose time has come, in priority order,
    /// and returns what they report. Faulting effects are logged and
    /// skipped.
    pub fn drain_queue(&mut self) -> Vec<CommandResult> {
        self.queue.process_queue()
    }

    /// Queues a caller-defined effect.
    pub fn schedule<F>(
        &mut self,
        kind: impl Into<String>,
        effect: F,
        priority: CommandPriority,
        delay: Duration,
    ) where
        F: FnOnce() -> Result<CommandResult> + Send + 'static,
    {
        self.queue.enqueue(kind, effect, priority, delay);
    }

    /// Queues an effect after evicting everything of lower priority.
    pub fn interrupt<F>(
        &mut self,
        kind: impl Into<String>,
        effect: F,
        priority: CommandPriority,
        delay: Duration,
    ) where
        F: FnOnce() -> Result<CommandResult> + Send + 'static,
    {
        let command = self.queue.command(kind, effect, priority, delay);
        self.queue.interrupt(command);
    }

    /// Drops every queued effect of the given kind.
    pub fn cancel(&mut self, kind: &str) {
        self.queue.clear_by_type(kind);
    }

    // =========================================================================
    // Saving
    // =========================================================================

    /// Writes the world to `path` with the given store.
    ///
    /// # Errors
    ///
    /// Returns the store's error; the session is unchanged either way.
    pub fn save_to(&self, store: &dyn Persistence, path: &Path) -> Result<()> {
        store.save_game(path, &self.world)
    }

    /// Replaces the world with the one stored at `path`.
    ///
    /// Interaction memory, the fight in progress, and queued effects are
    /// discarded along with the old world. On error nothing changes.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the file cannot be read or decoded.
    pub fn load_from(&mut self, store: &dyn Persistence, path: &Path) -> Result<()> {
        let world = store.load_game(path)?;
        self.world = world;
        self.context.clear();
        self.encounter = None;
        self.queue.clear();
        info!(path = %path.display(), turn = self.world.turn(), "session restored");
        Ok(())
    }
}

fn delayed_result(effect: Effect) -> CommandResult {
    let message = effect
        .description
        .clone()
        .filter(|d| !d.is_empty())
        .unwrap_or_else(|| DEFAULT_DELAYED_MESSAGE.to_string());
    CommandResult {
        success: true,
        message,
        action_type: effect.kind.clone(),
        effects: vec![effect],
        alternatives: Vec::new(),
    }
}
