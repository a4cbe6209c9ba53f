//! ATTACK, BLOCK, DODGE, FLEE.

use std::sync::Arc;

use tracing::{info, warn};
use wayfarer_foundation::EntityRef;
use wayfarer_parser::{Intent, IntentType};

use super::npc_here;
use crate::combat::{
    Armory, CombatEncounter, CombatEntity, CombatStatus, CombatTuning, PlayerAction, apply_outcome,
};
use crate::feedback::Effect;
use crate::handler::{CommandCategory, CommandHandler, HandlerContext, HandlerResult};

const INTENTS: &[IntentType] = &[
    IntentType::Attack,
    IntentType::Block,
    IntentType::Dodge,
    IntentType::Flee,
];
const ACTION: &str = "combat";

/// Starts fights and resolves combat turns.
#[derive(Clone, Debug)]
pub struct CombatHandler {
    armory: Arc<Armory>,
    tuning: Arc<CombatTuning>,
    seed: u64,
}

impl Default for CombatHandler {
    fn default() -> Self {
        Self::new(Arc::new(Armory::standard()), Arc::new(CombatTuning::default()), 0)
    }
}

impl CombatHandler {
    /// Creates the handler. Each encounter's RNG is seeded from `seed` and
    /// the turn it starts on.
    #[must_use]
    pub fn new(armory: Arc<Armory>, tuning: Arc<CombatTuning>, seed: u64) -> Self {
        Self { armory, tuning, seed }
    }

    fn start(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let Some(target) = intent.parameter("target").filter(|t| !t.trim().is_empty()) else {
            return HandlerResult::failure("What do you want to attack?", ACTION);
        };
        let refuse = || HandlerResult::failure(format!("You can't attack {target}."), ACTION);

        let Some(npc_id) = npc_here(cx, target) else {
            return refuse();
        };
        let Some(npc) = cx.world.npc(&npc_id) else {
            return refuse();
        };
        let Some(profile) = npc.enemy.as_ref() else {
            return refuse();
        };

        let player = CombatEntity::player(cx.world, &self.armory);
        let enemy = CombatEntity::enemy(npc, profile);
        let name = enemy.name.clone();
        let seed = self.seed ^ cx.world.turn();
        *cx.encounter = Some(CombatEncounter::new(player, enemy, (*self.tuning).clone(), seed));

        info!(enemy = %npc_id, "combat started");
        cx.context
            .add_interaction(IntentType::Attack, EntityRef::npc(npc_id), &*cx.world);
        HandlerResult::success(format!("You engage in combat with {name}!"), ACTION)
    }
}

impl CommandHandler for CombatHandler {
    fn category(&self) -> CommandCategory {
        CommandCategory::Combat
    }

    fn supported_intents(&self) -> &[IntentType] {
        INTENTS
    }

    fn handle(&self, intent: &Intent, cx: &mut HandlerContext<'_>) -> HandlerResult {
        let action = match intent.kind {
            IntentType::Attack if !cx.in_combat() => return self.start(intent, cx),
            IntentType::Attack => PlayerAction::Attack,
            IntentType::Block => PlayerAction::Block,
            IntentType::Dodge => PlayerAction::Dodge,
            IntentType::Flee => PlayerAction::Flee,
            _ => return HandlerResult::failure("That isn't a combat action.", ACTION),
        };
        play_turn(cx, action, &self.tuning)
    }
}

/// Resolves one turn of the active encounter and writes the results into the
/// world. When the fight ends the encounter is finalized, its outcome applied,
/// and the encounter discarded. A defeat stops the session.
pub(crate) fn play_turn(cx: &mut HandlerContext<'_>, action: PlayerAction, tuning: &CombatTuning) -> HandlerResult {
    let Some(encounter) = cx.encounter.as_mut().filter(|e| e.is_active()) else {
        return HandlerResult::failure("You're not in combat.", ACTION);
    };

    let report = match encounter.resolve_turn(action) {
        Ok(report) => report,
        Err(error) => {
            warn!(%error, "combat turn rejected");
            return HandlerResult::failure("The fight is already over.", ACTION);
        }
    };
    cx.world.player_mut().health = report.player_health.max(0);

    let enemy_name = encounter.enemy().name.clone();
    let npc_id = encounter.enemy().npc_id().unwrap_or_default().to_string();
    let mut lines = report.messages.clone();
    let mut effects = vec![
        Effect::state_change("enemy", "health")
            .with_entity_id(npc_id)
            .with_new_value(report.enemy_health.to_string())
            .with_description(format!("{enemy_name} health: {}", report.enemy_health.max(0))),
    ];

    if report.status.is_terminal() {
        match encounter.finalize() {
            Ok(outcome) => lines.extend(apply_outcome(cx.world, &outcome, tuning)),
            Err(error) => warn!(%error, "combat outcome could not be finalized"),
        }
        *cx.encounter = None;
        effects.push(
            Effect::state_change("combat", "active")
                .with_old_value("true")
                .with_new_value("false")
                .with_description(format!("Combat ended: {}", report.status)),
        );
        if report.status == CombatStatus::PlayerDefeated {
            cx.control.stop();
        }
    }

    effects
        .into_iter()
        .fold(HandlerResult::success(lines.join(" "), ACTION), HandlerResult::with_effect)
}
