//! World state with cheap snapshots.
//!
//! The `World` holds every piece of persistent game state. It is built on
//! persistent collections, so cloning is O(1) and a snapshot taken before a
//! command shares almost all of its memory with the world after it.

use im::{OrdMap, OrdSet, Vector};
use wayfarer_foundation::{EntityKind, EntityRef, Error, Result};

use crate::item::Item;
use crate::location::Location;
use crate::npc::Npc;
use crate::player::PlayerStats;
use crate::view::{EntitySummary, WorldView};

/// Persistent game state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    player_location: String,
    locations: OrdMap<String, Location>,
    items: OrdMap<String, Item>,
    npcs: OrdMap<String, Npc>,
    inventory: Vector<String>,
    player: PlayerStats,
    visited: OrdSet<String>,
    turn: u64,
}

impl World {
    /// Creates an empty world with the player standing at `start`.
    #[must_use]
    pub fn new(start: impl Into<String>) -> Self {
        let start = start.into();
        let mut visited = OrdSet::new();
        visited.insert(start.clone());
        Self {
            player_location: start,
            locations: OrdMap::new(),
            items: OrdMap::new(),
            npcs: OrdMap::new(),
            inventory: Vector::new(),
            player: PlayerStats::default(),
            visited,
            turn: 0,
        }
    }

    // =========================================================================
    // Construction
    // =========================================================================

    /// Adds or replaces a location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.insert_location(location);
        self
    }

    /// Adds or replaces an item.
    #[must_use]
    pub fn with_item(mut self, item: Item) -> Self {
        self.insert_item(item);
        self
    }

    /// Adds an item straight into the player's inventory.
    #[must_use]
    pub fn with_carried(mut self, mut item: Item) -> Self {
        item.location = None;
        let id = item.id.clone();
        self.insert_item(item);
        self.add_to_inventory(id);
        self
    }

    /// Adds or replaces an NPC.
    #[must_use]
    pub fn with_npc(mut self, npc: Npc) -> Self {
        self.insert_npc(npc);
        self
    }

    /// Replaces the player's statistics.
    #[must_use]
    pub fn with_player(mut self, player: PlayerStats) -> Self {
        self.player = player;
        self
    }

    /// Adds or replaces a location.
    pub fn insert_location(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    /// Adds or replaces an item.
    pub fn insert_item(&mut self, item: Item) {
        self.items.insert(item.id.clone(), item);
    }

    /// Adds or replaces an NPC.
    pub fn insert_npc(&mut self, npc: Npc) {
        self.npcs.insert(npc.id.clone(), npc);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a location by id.
    #[must_use]
    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Returns the location the player is in.
    #[must_use]
    pub fn current_location(&self) -> Option<&Location> {
        self.locations.get(&self.player_location)
    }

    /// Iterates over all locations in id order.
    pub fn locations(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Returns an item by id.
    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Returns an NPC by id.
    #[must_use]
    pub fn npc(&self, id: &str) -> Option<&Npc> {
        self.npcs.get(id)
    }

    /// Iterates over all NPCs in id order.
    pub fn npcs(&self) -> impl Iterator<Item = &Npc> {
        self.npcs.values()
    }

    /// Ids of carried items, in pickup order.
    #[must_use]
    pub fn inventory_ids(&self) -> &Vector<String> {
        &self.inventory
    }

    /// Returns true if the player carries the item.
    #[must_use]
    pub fn is_carried(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|id| id == item_id)
    }

    /// The player's statistics.
    #[must_use]
    pub fn player(&self) -> &PlayerStats {
        &self.player
    }

    /// Mutable access to the player's statistics.
    pub fn player_mut(&mut self) -> &mut PlayerStats {
        &mut self.player
    }

    /// Returns true if the player has been to the location.
    #[must_use]
    pub fn has_visited(&self, location: &str) -> bool {
        self.visited.contains(location)
    }

    /// Number of completed turns.
    #[must_use]
    pub fn turn(&self) -> u64 {
        self.turn
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Moves the player and marks the destination visited.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination does not exist.
    pub fn move_player(&mut self, to: &str) -> Result<()> {
        if !self.locations.contains_key(to) {
            return Err(Error::entity_not_found(EntityRef::new(EntityKind::Exits, to)));
        }
        self.player_location = to.to_string();
        self.visited.insert(to.to_string());
        Ok(())
    }

    /// Moves an item from the player's location into the inventory.
    ///
    /// # Errors
    ///
    /// Returns an error if the item is not lying here.
    pub fn take_item(&mut self, item_id: &str) -> Result<()> {
        let here = self.player_location.clone();
        match self.items.get_mut(item_id) {
            Some(item) if item.location.as_deref() == Some(here.as_str()) => {
                item.location = None;
            }
            _ => return Err(Error::entity_not_found(EntityRef::item(item_id))),
        }
        self.add_to_inventory(item_id);
        Ok(())
    }

    /// Puts an item into the inventory, creating a bare item record if the
    /// id is unknown. Carrying the same id twice is a no-op.
    pub fn add_to_inventory(&mut self, item_id: impl Into<String>) {
        let item_id = item_id.into();
        if !self.items.contains_key(&item_id) {
            self.items
                .insert(item_id.clone(), Item::new(item_id.clone(), item_id.replace('_', " ")));
        }
        if let Some(item) = self.items.get_mut(&item_id) {
            item.location = None;
        }
        if !self.is_carried(&item_id) {
            self.inventory.push_back(item_id);
        }
    }

    /// Removes an item from the inventory (consumed or dropped). Returns
    /// false if it was not carried.
    pub fn remove_from_inventory(&mut self, item_id: &str) -> bool {
        let Some(index) = self.inventory.iter().position(|id| id == item_id) else {
            return false;
        };
        self.inventory.remove(index);
        if self.player.weapon.as_deref() == Some(item_id) {
            self.player.weapon = None;
        }
        if self.player.armor.as_deref() == Some(item_id) {
            self.player.armor = None;
        }
        true
    }

    /// Marks an NPC as met.
    ///
    /// # Errors
    ///
    /// Returns an error if the NPC does not exist.
    pub fn mark_met(&mut self, npc_id: &str) -> Result<()> {
        let npc = self
            .npcs
            .get_mut(npc_id)
            .ok_or_else(|| Error::entity_not_found(EntityRef::npc(npc_id)))?;
        npc.met = true;
        Ok(())
    }

    /// Takes an NPC out of the world (defeated or departed). The record is
    /// dropped, so later lookups by id return `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the NPC does not exist.
    pub fn remove_npc(&mut self, npc_id: &str) -> Result<()> {
        self.npcs
            .remove(npc_id)
            .map(|_| ())
            .ok_or_else(|| Error::entity_not_found(EntityRef::npc(npc_id)))
    }

    /// Advances the turn counter.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
    }

    fn summarize_npc(npc: &Npc) -> EntitySummary {
        EntitySummary {
            reference: EntityRef::npc(npc.id.clone()),
            name: npc.name.clone(),
            gender: npc.gender,
            hostile: npc.is_hostile(),
        }
    }
}

impl WorldView for World {
    fn player_location(&self) -> &str {
        &self.player_location
    }

    fn location_name(&self, location: &str) -> Option<String> {
        self.locations.get(location).map(|l| l.name.clone())
    }

    fn connected_locations(&self, location: &str) -> Vec<String> {
        self.locations
            .get(location)
            .map(|l| l.connections.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn items_at(&self, location: &str) -> Vec<EntitySummary> {
        self.items
            .values()
            .filter(|item| item.location.as_deref() == Some(location))
            .map(|item| EntitySummary::new(EntityRef::item(item.id.clone()), item.name.clone()))
            .collect()
    }

    fn npcs_at(&self, location: &str) -> Vec<EntitySummary> {
        self.npcs
            .values()
            .filter(|npc| npc.location.as_deref() == Some(location))
            .map(Self::summarize_npc)
            .collect()
    }

    fn features_at(&self, location: &str) -> Vec<EntitySummary> {
        self.locations
            .get(location)
            .map(|l| {
                l.features
                    .iter()
                    .map(|f| {
                        EntitySummary::new(
                            EntityRef::new(EntityKind::Features, f.id.clone()),
                            f.name.clone(),
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn exits_at(&self, location: &str) -> Vec<EntitySummary> {
        self.connected_locations(location)
            .into_iter()
            .map(|to| {
                let name = self.location_name(&to).unwrap_or_else(|| to.clone());
                EntitySummary::new(EntityRef::new(EntityKind::Exits, to), name)
            })
            .collect()
    }

    fn inventory(&self) -> Vec<EntitySummary> {
        self.inventory
            .iter()
            .map(|id| {
                let name = self.items.get(id).map_or_else(|| id.clone(), |i| i.name.clone());
                EntitySummary::new(EntityRef::inventory(id.clone()), name)
            })
            .collect()
    }

    fn entity(&self, reference: &EntityRef) -> Option<EntitySummary> {
        match reference.kind {
            EntityKind::Items => self
                .items
                .get(&reference.id)
                .map(|i| EntitySummary::new(reference.clone(), i.name.clone())),
            EntityKind::Inventory => self
                .is_carried(&reference.id)
                .then(|| self.items.get(&reference.id))
                .flatten()
                .map(|i| EntitySummary::new(reference.clone(), i.name.clone())),
            EntityKind::Npcs => self.npcs.get(&reference.id).map(Self::summarize_npc),
            EntityKind::Features => self.locations.values().find_map(|l| {
                l.features
                    .iter()
                    .find(|f| f.id == reference.id)
                    .map(|f| EntitySummary::new(reference.clone(), f.name.clone()))
            }),
            EntityKind::Exits => self
                .location_name(&reference.id)
                .map(|name| EntitySummary::new(reference.clone(), name)),
        }
    }
}
