//! Handler registration and dispatch.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;
use wayfarer_parser::Intent;

use crate::combat::{Armory, CombatTuning};
use crate::handler::{CommandCategory, CommandHandler, Handler};
use crate::handlers::{
    CombatHandler, EquipHandler, ExamineHandler, InventoryHandler, MovementHandler, SystemHandler,
    TakeHandler, TalkHandler, UseHandler,
};
use crate::narrative::Narration;
use crate::persistence::{DEFAULT_SAVE_FILE, Persistence};

/// Shared collaborators handed to the built-in handlers.
#[derive(Clone, Debug)]
pub struct HandlerServices {
    /// Prose generation.
    pub narration: Narration,
    /// Item classification.
    pub armory: Arc<Armory>,
    /// Combat numbers.
    pub tuning: Arc<CombatTuning>,
    /// Save-file store, if saving is supported.
    pub persistence: Option<Arc<dyn Persistence>>,
    /// File used when SAVE or LOAD names none.
    pub save_file: String,
    /// Base seed for combat randomness.
    pub seed: u64,
}

impl Default for HandlerServices {
    fn default() -> Self {
        Self {
            narration: Narration::default(),
            armory: Arc::new(Armory::standard()),
            tuning: Arc::new(CombatTuning::default()),
            persistence: None,
            save_file: DEFAULT_SAVE_FILE.to_string(),
            seed: 0,
        }
    }
}

/// Handlers grouped by category.
///
/// Lookup scans categories in [`CommandCategory`] order and handlers within a
/// category in registration order; the first that accepts the intent wins.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    handlers: BTreeMap<CommandCategory, Vec<Handler>>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding every built-in handler.
    #[must_use]
    pub fn with_builtins(services: &HandlerServices) -> Self {
        let mut registry = Self::new();
        registry.register(Handler::Movement(MovementHandler::new()));
        registry.register(Handler::Examine(ExamineHandler::new(services.narration.clone())));
        registry.register(Handler::Take(TakeHandler::new()));
        registry.register(Handler::Use(UseHandler::new(
            services.narration.clone(),
            Arc::clone(&services.armory),
            Arc::clone(&services.tuning),
        )));
        registry.register(Handler::Talk(TalkHandler::new(services.narration.clone())));
        registry.register(Handler::Inventory(InventoryHandler::new()));
        registry.register(Handler::Equip(EquipHandler::new(Arc::clone(&services.armory))));
        registry.register(Handler::Combat(CombatHandler::new(
            Arc::clone(&services.armory),
            Arc::clone(&services.tuning),
            services.seed,
        )));
        registry.register(Handler::System(
            SystemHandler::new(services.persistence.clone()).with_default_file(services.save_file.clone()),
        ));
        registry
    }

    /// Adds a handler under its declared category.
    pub fn register(&mut self, handler: Handler) {
        let category = handler.category();
        debug!(?category, intents = ?handler.supported_intents(), "handler registered");
        self.handlers.entry(category).or_default().push(handler);
    }

    /// Adds a caller-defined handler.
    pub fn register_custom(&mut self, handler: Box<dyn CommandHandler>) {
        self.register(Handler::Custom(handler));
    }

    /// Finds the handler for an intent, or `None` if nothing accepts it.
    #[must_use]
    pub fn get_handler_for_intent(&self, intent: &Intent) -> Option<&Handler> {
        let found = self
            .handlers
            .values()
            .flat_map(|handlers| handlers.iter())
            .find(|handler| handler.can_handle(intent));
        debug!(
            kind = %intent.kind,
            category = ?found.map(CommandHandler::category),
            "dispatch"
        );
        found
    }

    /// Handlers registered under a category, in registration order.
    #[must_use]
    pub fn handlers(&self, category: CommandCategory) -> &[Handler] {
        self.handlers.get(&category).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
