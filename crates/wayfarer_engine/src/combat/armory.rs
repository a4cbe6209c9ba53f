//! Weapon, armor, and consumable databases.
//!
//! Items are classified by keyword: an exact id match wins, otherwise the
//! longest keyword found in the item's id or lower-cased name. "Rusty Sword"
//! is a sword; "Plate Armor" is plate rather than generic armor.

use wayfarer_world::Item;

use super::status::StatusEffect;

/// Attack bonus granted by a wielded weapon.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WeaponSpec {
    /// Added to the player's attack.
    pub attack_bonus: i32,
}

/// Defense bonus granted by worn armor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArmorSpec {
    /// Added to the player's defense.
    pub defense_bonus: i32,
}

/// Who a consumable's status effect lands on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StatusTarget {
    /// The user.
    Player,
    /// The opponent.
    Enemy,
}

/// What using a consumable does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Consumable {
    /// Restores health, capped at max health.
    Heal(i32),
    /// Applies a status effect.
    Status {
        /// The effect applied.
        effect: StatusEffect,
        /// Who receives it.
        target: StatusTarget,
    },
}

/// Keyword tables for item classification.
#[derive(Clone, Debug, Default)]
pub struct Armory {
    weapons: Vec<(String, WeaponSpec)>,
    armor: Vec<(String, ArmorSpec)>,
    consumables: Vec<(String, Consumable)>,
}

impl Armory {
    /// Creates an empty armory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut armory = Self::new();
        for (keyword, bonus) in [
            ("sword", 5),
            ("axe", 6),
            ("bow", 4),
            ("staff", 3),
            ("wand", 3),
            ("dagger", 3),
            ("mace", 5),
            ("spear", 5),
            ("knife", 2),
            ("hammer", 6),
            ("blade", 4),
        ] {
            armory = armory.with_weapon(keyword, bonus);
        }
        for (keyword, bonus) in [
            ("armor", 4),
            ("shield", 3),
            ("helmet", 2),
            ("gauntlet", 1),
            ("glove", 1),
            ("boot", 1),
            ("robe", 1),
            ("cloak", 1),
            ("plate", 6),
            ("chain", 4),
            ("leather", 2),
        ] {
            armory = armory.with_armor(keyword, bonus);
        }
        armory
            .with_consumable("potion", Consumable::Heal(30))
            .with_consumable("heal", Consumable::Heal(30))
            .with_consumable("bandage", Consumable::Heal(15))
            .with_consumable("elixir", Consumable::Heal(60))
            .with_consumable(
                "poison",
                Consumable::Status {
                    effect: StatusEffect::Poisoned,
                    target: StatusTarget::Enemy,
                },
            )
            .with_consumable(
                "flash powder",
                Consumable::Status {
                    effect: StatusEffect::Stunned,
                    target: StatusTarget::Enemy,
                },
            )
            .with_consumable(
                "tonic",
                Consumable::Status {
                    effect: StatusEffect::Enraged,
                    target: StatusTarget::Player,
                },
            )
    }

    /// Registers a weapon keyword.
    #[must_use]
    pub fn with_weapon(mut self, keyword: impl Into<String>, attack_bonus: i32) -> Self {
        self.weapons.push((keyword.into(), WeaponSpec { attack_bonus }));
        self
    }

    /// Registers an armor keyword.
    #[must_use]
    pub fn with_armor(mut self, keyword: impl Into<String>, defense_bonus: i32) -> Self {
        self.armor.push((keyword.into(), ArmorSpec { defense_bonus }));
        self
    }

    /// Registers a consumable keyword.
    #[must_use]
    pub fn with_consumable(mut self, keyword: impl Into<String>, consumable: Consumable) -> Self {
        self.consumables.push((keyword.into(), consumable));
        self
    }

    /// Classifies an item as a weapon.
    #[must_use]
    pub fn weapon(&self, item: &Item) -> Option<WeaponSpec> {
        classify(&self.weapons, &item.id, &item.name)
    }

    /// Classifies an item as armor.
    #[must_use]
    pub fn armor(&self, item: &Item) -> Option<ArmorSpec> {
        classify(&self.armor, &item.id, &item.name)
    }

    /// Classifies an item as a consumable.
    #[must_use]
    pub fn consumable(&self, item: &Item) -> Option<Consumable> {
        classify(&self.consumables, &item.id, &item.name)
    }
}

fn classify<T: Copy>(table: &[(String, T)], id: &str, name: &str) -> Option<T> {
    if let Some((_, spec)) = table.iter().find(|(keyword, _)| keyword == id) {
        return Some(*spec);
    }
    let id = id.replace('_', " ").to_lowercase();
    let name = name.to_lowercase();
    table
        .iter()
        .filter(|(keyword, _)| name.contains(keyword.as_str()) || id.contains(keyword.as_str()))
        .max_by_key(|(keyword, _)| keyword.len())
        .map(|(_, spec)| *spec)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword() {
        let armory = Armory::standard();
        let sword = Item::new("rusty_sword", "Rusty Sword");
        assert_eq!(armory.weapon(&sword), Some(WeaponSpec { attack_bonus: 5 }));
        assert_eq!(armory.armor(&sword), None);
    }

    #[test]
    fn longest_keyword_wins() {
        let armory = Armory::standard();
        let plate = Item::new("plate_armor", "Plate Armor");
        assert_eq!(armory.armor(&plate), Some(ArmorSpec { defense_bonus: 6 }));
    }

    #[test]
    fn consumables() {
        let armory = Armory::standard();
        let potion = Item::new("healing_potion", "Healing Potion");
        assert_eq!(armory.consumable(&potion), Some(Consumable::Heal(30)));

        let powder = Item::new("powder", "Flash Powder");
        assert!(matches!(
            armory.consumable(&powder),
            Some(Consumable::Status {
                effect: StatusEffect::Stunned,
                target: StatusTarget::Enemy
            })
        ));

        let rock = Item::new("rock", "Smooth Rock");
        assert_eq!(armory.consumable(&rock), None);
        assert_eq!(armory.weapon(&rock), None);
    }
}
