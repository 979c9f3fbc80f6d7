//! Utilities for *entities* in ECS.

use std::collections::HashSet;
use std::fmt;

use uuid::Uuid;

/// Unique identifier of the *entity* of ECS.
///
/// Entity carries no data: it is just a random 128-bit key,
/// so identifiers issued by different registries never collide.
///
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Entity(Uuid);

impl Entity {
    /// Creates new unique entity identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID of this entity.
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for Entity {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Entity> for Uuid {
    fn from(entity: Entity) -> Self {
        entity.0
    }
}

/// Storage for all live entities of ECS, in order of their creation.
#[derive(Debug, Default)]
pub struct EntityStorage {
    order: Vec<Entity>,
    live: HashSet<Entity>,
}

impl EntityStorage {
    /// Creates an empty entity storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new entity and stores it.
    pub fn create(&mut self) -> Entity {
        let entity = Entity::new();
        self.order.push(entity);
        self.live.insert(entity);
        entity
    }

    /// Removes the entity from the storage.
    ///
    /// Returns `true` if the entity was alive.
    ///
    pub fn remove(&mut self, entity: Entity) -> bool {
        if !self.live.remove(&entity) {
            return false;
        }
        self.order.retain(|&other| other != entity);
        true
    }

    /// Returns `true` if the entity was created by this storage and is still alive.
    pub fn contains(&self, entity: Entity) -> bool {
        self.live.contains(&entity)
    }

    /// Returns iterator over all live entities in order of their creation.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
