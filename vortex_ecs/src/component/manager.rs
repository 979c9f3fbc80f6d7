//! Utilities for managing component storages.

use std::any::TypeId;
use std::collections::HashMap;

use super::{super::Entity, storage::ErasedStorage, Component, ComponentStorage};

/// Manager of all components of ECS.
///
/// Holds one [`ComponentStorage`] per component type, keyed by its [`TypeId`].
///
#[derive(Default)]
#[repr(transparent)]
pub struct ComponentManager {
    storages: HashMap<TypeId, Box<dyn ErasedStorage>>,
}

impl ComponentManager {
    /// Creates new component manager.
    pub fn new() -> Self {
        Self {
            storages: HashMap::new(),
        }
    }

    /// Inserts component of type `T` and attaches it to the entity.
    /// If component was already attached, it will be replaced by value.
    ///
    /// Returns previously attached component, if any.
    ///
    pub fn insert<T>(&mut self, entity: Entity, component: T) -> Option<T>
    where
        T: Component,
    {
        self.storage_or_create::<T>().insert(entity, component)
    }

    /// Removes component of type `T` and detaches it from the entity.
    ///
    /// Returns component that was previously attached to the entity.
    ///
    pub fn remove<T>(&mut self, entity: Entity) -> Option<T>
    where
        T: Component,
    {
        let storage = self.storage_mut::<T>()?;
        storage.remove(entity)
    }

    /// Detaches components of all types from the entity.
    ///
    /// Returns count of detached components.
    ///
    pub fn remove_all(&mut self, entity: Entity) -> usize {
        self.storages
            .values_mut()
            .map(|storage| storage.detach(entity))
            .filter(|&detached| detached)
            .count()
    }

    /// Returns `true` if component of type `T` was already attached to the entity.
    pub fn attached<T>(&self, entity: Entity) -> bool
    where
        T: Component,
    {
        self.attached_by_id(TypeId::of::<T>(), entity)
    }

    /// Returns `true` if component with given type id was already attached to the entity.
    ///
    /// Unknown type ids are never attached.
    ///
    pub fn attached_by_id(&self, type_id: TypeId, entity: Entity) -> bool {
        self.storages
            .get(&type_id)
            .map(|storage| storage.attached(entity))
            .unwrap_or(false)
    }

    /// Retrieves an immutable reference to component of type `T` attached to the entity.
    pub fn get<T>(&self, entity: Entity) -> Option<&T>
    where
        T: Component,
    {
        let storage = self.storage::<T>()?;
        storage.get(entity)
    }

    /// Retrieves a mutable reference to component of type `T` attached to the entity.
    pub fn get_mut<T>(&mut self, entity: Entity) -> Option<&mut T>
    where
        T: Component,
    {
        let storage = self.storage_mut::<T>()?;
        storage.get_mut(entity)
    }

    /// Retrieves storage of components of type `T`, if any component of this type was inserted.
    pub fn storage<T>(&self) -> Option<&ComponentStorage<T>>
    where
        T: Component,
    {
        let boxed = self.storages.get(&TypeId::of::<T>())?;
        boxed.as_any().downcast_ref()
    }

    pub fn storage_mut<T>(&mut self) -> Option<&mut ComponentStorage<T>>
    where
        T: Component,
    {
        let boxed = self.storages.get_mut(&TypeId::of::<T>())?;
        boxed.as_any_mut().downcast_mut()
    }

    fn storage_or_create<T>(&mut self) -> &mut ComponentStorage<T>
    where
        T: Component,
    {
        let boxed = self.storages.entry(TypeId::of::<T>()).or_insert_with(|| {
            log::trace!(
                "created storage for components of type {}",
                std::any::type_name::<T>(),
            );
            let storage: Box<dyn ErasedStorage> = Box::new(ComponentStorage::<T>::new());
            storage
        });
        boxed
            .as_any_mut()
            .downcast_mut()
            .expect("storage was registered with another type id")
    }
}
