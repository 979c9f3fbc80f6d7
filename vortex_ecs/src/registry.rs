//! Utilities for storage of ECS.

use std::any::TypeId;

use super::component::{ComponentManager, ComponentStorage};
use super::entity::EntityStorage;
use super::query::Signature;
use super::{Component, Entity};

/// Storage for entities and their components.
///
/// Registry does not check that entity passed to it was created by it:
/// components can be attached to any entity. Such components can be retrieved
/// with [`get_component`](Registry::get_component), but queries enumerate
/// only entities created by this registry, so they never match foreign ones.
///
#[derive(Default)]
pub struct Registry {
    /// Storage for all live entities.
    entities: EntityStorage,
    /// Map with typeid of components and their storages.
    component_manager: ComponentManager,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates new entity and records it as alive.
    pub fn create_entity(&mut self) -> Entity {
        let entity = self.entities.create();
        log::trace!("created entity {}", entity);
        entity
    }

    /// Removes the entity and all of its components.
    ///
    /// Returns `true` if the entity was alive.
    ///
    pub fn remove_entity(&mut self, entity: Entity) -> bool {
        let removed = self.component_manager.remove_all(entity);
        let alive = self.entities.remove(entity);
        log::trace!(
            "removed entity {} (alive: {}, components: {})",
            entity,
            alive,
            removed,
        );
        alive
    }

    /// Returns `true` if the entity was created by this registry and was not removed.
    pub fn contains(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    /// Returns iterator over all live entities in order of their creation.
    pub fn entities(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entities.iter()
    }

    /// Count of live entities.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Attaches component to the entity.
    /// If component of the same type was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn add_component<T>(&mut self, entity: Entity, component: T) -> Option<T>
    where
        T: Component,
    {
        self.component_manager.insert(entity, component)
    }

    /// Detaches component of type `T` from the entity.
    pub fn remove_component<T>(&mut self, entity: Entity) -> Option<T>
    where
        T: Component,
    {
        self.component_manager.remove(entity)
    }

    /// Returns `true` if component of type `T` is attached to the entity.
    pub fn has_component<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.component_manager.attached::<T>(entity)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get_component<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Component,
    {
        self.component_manager.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_component_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Component,
    {
        self.component_manager.get_mut(entity)
    }

    /// Retrieves storage of all components of type `T`.
    pub fn storage<T>(&self) -> Option<&ComponentStorage<T>>
    where
        T: Component,
    {
        self.component_manager.storage()
    }

    /// Returns all live entities which have components of every type in signature `S`,
    /// in order of their creation.
    ///
    /// Empty signature matches nothing.
    ///
    pub fn query<S>(&self) -> Vec<Entity>
    where
        S: Signature,
    {
        self.query_type_ids(&S::type_ids())
    }

    /// Returns all live entities which have components of every given type,
    /// in order of their creation.
    ///
    /// Empty set of types matches nothing.
    ///
    pub fn query_type_ids(&self, type_ids: &[TypeId]) -> Vec<Entity> {
        if type_ids.is_empty() {
            return Vec::new();
        }
        let matched: Vec<_> = self
            .entities
            .iter()
            .filter(|&entity| {
                type_ids
                    .iter()
                    .all(|&type_id| self.component_manager.attached_by_id(type_id, entity))
            })
            .collect();
        log::trace!(
            "query over {} component types matched {} entities",
            type_ids.len(),
            matched.len(),
        );
        matched
    }
}
