//! The handler capability and the state it is lent.
//!
//! A handler is a stateless-per-call object: its collaborators (narrator,
//! armory, persistence) are owned shared handles, while the session's mutable
//! state arrives through a [`HandlerContext`] for the duration of one call.
//! The contract every handler keeps: a failed result leaves that state
//! untouched.

use std::fmt;

use wayfarer_parser::{CommandContext, Intent, IntentType};
use wayfarer_world::World;

use crate::combat::CombatEncounter;
use crate::feedback::Effect;
use crate::handlers::{
    CombatHandler, EquipHandler, ExamineHandler, InventoryHandler, MovementHandler, SystemHandler,
    TakeHandler, TalkHandler, UseHandler,
};

// =============================================================================
// Categories
// =============================================================================

/// Handler categories, in dispatch scan order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CommandCategory {
    /// Moving around.
    Movement,
    /// Examining, taking, using, talking.
    Interaction,
    /// Inventory and equipment.
    Inventory,
    /// Fighting.
    Combat,
    /// Help, save, load, map, quit.
    System,
    /// Caller-registered handlers.
    Custom,
}

impl CommandCategory {
    /// All categories in scan order.
    pub const ALL: [CommandCategory; 6] = [
        Self::Movement,
        Self::Interaction,
        Self::Inventory,
        Self::Combat,
        Self::System,
        Self::Custom,
    ];
}

// =============================================================================
// Handler context
// =============================================================================

/// Requests a handler makes of the session that owns it: stop the loop, or
/// drop state tied to a world that was just replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionControl {
    running: bool,
    world_replaced: bool,
}

impl Default for SessionControl {
    fn default() -> Self {
        Self {
            running: true,
            world_replaced: false,
        }
    }
}

impl SessionControl {
    /// A running session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true until [`stop`](Self::stop) is called.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Asks the session loop to stop after this command.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Records that the world was swapped out wholesale, so anything queued
    /// against the old one must go.
    pub fn mark_world_replaced(&mut self) {
        self.world_replaced = true;
    }

    /// Returns whether the world was replaced since the last call, and
    /// resets the flag.
    pub fn take_world_replaced(&mut self) -> bool {
        std::mem::take(&mut self.world_replaced)
    }
}

/// Mutable session state lent to a handler for one call.
#[derive(Debug)]
pub struct HandlerContext<'a> {
    /// The game world.
    pub world: &'a mut World,
    /// Interaction memory.
    pub context: &'a mut CommandContext,
    /// The fight in progress, if any.
    pub encounter: &'a mut Option<CombatEncounter>,
    /// Session loop control.
    pub control: &'a mut SessionControl,
}

impl<'a> HandlerContext<'a> {
    /// Bundles the pieces of session state.
    pub fn new(
        world: &'a mut World,
        context: &'a mut CommandContext,
        encounter: &'a mut Option<CombatEncounter>,
        control: &'a mut SessionControl,
    ) -> Self {
        Self {
            world,
            context,
            encounter,
            control,
        }
    }

    /// Returns true while a fight is on.
    #[must_use]
    pub fn in_combat(&self) -> bool {
        self.encounter.as_ref().is_some_and(CombatEncounter::is_active)
    }
}

// =============================================================================
// Results
// =============================================================================

/// What a handler reports back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandlerResult {
    /// Whether the command did what was asked.
    pub success: bool,
    /// Text shown to the player.
    pub message: String,
    /// Category of action (`movement`, `interaction`, ...).
    pub action_type: String,
    /// Effects only the handler knows about, e.g. enemy health.
    pub effects: Vec<Effect>,
}

impl HandlerResult {
    /// A successful result.
    #[must_use]
    pub fn success(message: impl Into<String>, action_type: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            action_type: action_type.into(),
            effects: Vec::new(),
        }
    }

    /// A failed result.
    #[must_use]
    pub fn failure(message: impl Into<String>, action_type: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(message, action_type)
        }
    }

    /// Adds a handler-supplied effect.
    #[must_use]
    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

// =============================================================================
// Capability
// =============================================================================

/// Something that can carry out intents.
pub trait CommandHandler: fmt::Debug + Send + Sync {
    /// Which category the handler is registered under.
    fn category(&self) -> CommandCategory;

    /// Intent types this handler accepts.
    fn supported_intents(&self) -> &[IntentType];

    /// Returns true if the handler accepts this intent.
    fn can_handle(&self, intent: &Intent) -> bool {
        self.supported_intents().contains(&intent.kind)
    }

    /// Carries out the intent.
    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult;
}

/// The built-in handlers plus an escape hatch for custom ones.
#[derive(Debug)]
pub enum Handler {
    /// MOVE.
    Movement(MovementHandler),
    /// EXAMINE.
    Examine(ExamineHandler),
    /// TAKE.
    Take(TakeHandler),
    /// USE.
    Use(UseHandler),
    /// TALK.
    Talk(TalkHandler),
    /// INVENTORY.
    Inventory(InventoryHandler),
    /// EQUIP.
    Equip(EquipHandler),
    /// ATTACK, BLOCK, DODGE, FLEE.
    Combat(CombatHandler),
    /// HELP, SAVE, LOAD, MAP, QUIT.
    System(SystemHandler),
    /// Anything else.
    Custom(Box<dyn CommandHandler>),
}

impl Handler {
    fn inner(&self) -> &dyn CommandHandler {
        match self {
            Self::Movement(h) => h,
            Self::Examine(h) => h,
            Self::Take(h) => h,
            Self::Use(h) => h,
            Self::Talk(h) => h,
            Self::Inventory(h) => h,
            Self::Equip(h) => h,
            Self::Combat(h) => h,
            Self::System(h) => h,
            Self::Custom(h) => h.as_ref(),
        }
    }
}

impl CommandHandler for Handler {
    fn category(&self) -> CommandCategory {
        self.inner().category()
    }

    fn supported_intents(&self) -> &[IntentType] {
        self.inner().supported_intents()
    }

    fn can_handle(&self, intent: &Intent) -> bool {
        self.inner().can_handle(intent)
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        self.inner().handle(intent, cx)
    }
}
