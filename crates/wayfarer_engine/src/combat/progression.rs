//! Writing a finished fight back into the world.

use tracing::info;
use wayfarer_world::World;

use super::encounter::{CombatOutcome, CombatStatus};
use super::tuning::CombatTuning;

/// Applies an outcome to the world and returns lines describing what changed.
///
/// Health is always written back. On victory the enemy leaves the world,
/// its loot goes into the inventory, and experience is added, levelling the
/// player up as many times as it covers.
pub fn apply_outcome(world: &mut World, outcome: &CombatOutcome, tuning: &CombatTuning) -> Vec<String> {
    let mut messages = Vec::new();
    world.player_mut().health = outcome.player_health.max(0);

    if outcome.status != CombatStatus::PlayerVictory {
        return messages;
    }

    // Already gone is fine; the outcome still stands.
    let _ = world.remove_npc(&outcome.npc_id);

    for item in &outcome.loot {
        world.add_to_inventory(item.clone());
        let name = world.item(item).map_or_else(|| item.clone(), |i| i.name.clone());
        messages.push(format!("You find {name}."));
    }

    if outcome.experience > 0 {
        messages.push(format!("You gain {} experience.", outcome.experience));
        messages.extend(gain_experience(world, outcome.experience, tuning));
    }
    messages
}

/// Adds experience and applies any level-ups.
pub fn gain_experience(world: &mut World, amount: u32, tuning: &CombatTuning) -> Vec<String> {
    let mut messages = Vec::new();
    let player = world.player_mut();
    player.experience = player.experience.saturating_add(amount);

    loop {
        let needed = tuning.experience_for_level(player.level);
        if needed == 0 || player.experience < needed {
            break;
        }
        player.experience -= needed;
        player.level += 1;
        player.max_health += tuning.level_health;
        player.health += tuning.level_health;
        player.attack += tuning.level_attack;
        player.defense += tuning.level_defense;
        info!(level = player.level, "player levelled up");
        messages.push(format!("You reached level {}!", player.level));
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use wayfarer_world::{EnemyProfile, Npc};

    fn outcome(status: CombatStatus) -> CombatOutcome {
        CombatOutcome {
            status,
            npc_id: "bandit".into(),
            enemy_name: "Bandit".into(),
            experience: 150,
            loot: vec!["coin_purse".into()],
            player_health: 60,
        }
    }

    fn world() -> World {
        World::new("road").with_npc(
            Npc::new("bandit", "Bandit")
                .at("road")
                .hostile(EnemyProfile::new("human", 20, 5, 1)),
        )
    }

    #[test]
    fn victory_rewards() {
        let mut world = world();
        let lines = apply_outcome(&mut world, &outcome(CombatStatus::PlayerVictory), &CombatTuning::default());

        assert_eq!(world.player().health, 70); // 60 + level bonus
        assert_eq!(world.player().level, 2);
        assert_eq!(world.player().experience, 50);
        assert_eq!(world.player().attack, 12);
        assert!(world.is_carried("coin_purse"));
        assert!(world.npc("bandit").is_none());
        assert!(lines.iter().any(|l| l.contains("level 2")));
    }

    #[test]
    fn fled_keeps_enemy_and_gives_nothing() {
        let mut world = world();
        let mut fled = outcome(CombatStatus::PlayerFled);
        fled.experience = 0;
        fled.loot.clear();
        apply_outcome(&mut world, &fled, &CombatTuning::default());

        assert_eq!(world.player().health, 60);
        assert_eq!(world.player().experience, 0);
        assert!(!world.is_carried("coin_purse"));
        assert_eq!(world.npc("bandit").and_then(|n| n.location.as_deref()), Some("road"));
    }

    #[test]
    fn defeat_floors_health_at_zero() {
        let mut world = world();
        let mut lost = outcome(CombatStatus::PlayerDefeated);
        lost.player_health = -12;
        apply_outcome(&mut world, &lost, &CombatTuning::default());
        assert_eq!(world.player().health, 0);
    }

    #[test]
    fn multiple_level_ups() {
        let mut world = World::new("x");
        gain_experience(&mut world, 500, &CombatTuning::default());
        // 100 for level 1, 400 for level 2.
        assert_eq!(world.player().level, 3);
        assert_eq!(world.player().experience, 0);
    }
}
