#![cfg(test)]

use super::{super::entity::EntityStorage, *};

#[test]
fn test_insertion() {
    let mut entities = EntityStorage::new();
    let mut storage = ComponentStorage::new();

    let entity = entities.create();
    let component = "foo";

    assert_eq!(storage.insert(entity, component), None);
    assert!(storage.attached(entity));
    assert_eq!(storage[entity], "foo");

    storage.remove(entity);
    assert!(!storage.attached(entity));
    assert_eq!(storage.get(entity), None);
}

#[test]
fn test_insertion_overwrites() {
    let mut entities = EntityStorage::new();
    let mut storage = ComponentStorage::new();

    let entity = entities.create();
    assert_eq!(storage.insert(entity, 123), None);
    assert_eq!(storage.insert(entity, 456), Some(123));
    assert_eq!(storage.len(), 1);
    assert_eq!(storage.remove(entity), Some(456));
    assert_eq!(storage.remove(entity), None);
    assert!(storage.is_empty());
}

#[test]
#[should_panic]
fn test_index() {
    let mut entities = EntityStorage::new();
    let mut storage = ComponentStorage::new();

    let entity = entities.create();
    storage.insert(entity, 1);
    storage[entity] = 0;
    assert_eq!(storage[entity], 0);

    let entity = entities.create();
    let _component = storage[entity];
}

#[test]
fn test_iterator() {
    let mut entities = EntityStorage::new();
    let mut storage = ComponentStorage::new();

    let created: Vec<_> = (0..100)
        .map(|int| {
            let entity = entities.create();
            storage.insert(entity, int);
            entity
        })
        .collect();

    for (_, component) in storage.iter_mut() {
        *component += 10;
    }
    for ((entity, component), value) in storage.iter().zip(10..110) {
        assert_eq!(*component, value);
        assert_eq!(entity, created[(value - 10) as usize]);
    }
    let mut components: Vec<_> = storage.components().copied().collect();
    components.sort_unstable();
    assert_eq!(components, (10..110).collect::<Vec<_>>());
    assert_eq!(storage.entities().count(), 100);
}

#[test]
fn test_manager() {
    let mut entities = EntityStorage::new();
    let mut manager = ComponentManager::new();

    let entity = entities.create();
    assert!(!manager.attached::<u32>(entity));
    assert_eq!(manager.get::<u32>(entity), None);

    assert_eq!(manager.insert(entity, 42_u32), None);
    assert_eq!(manager.insert(entity, "name"), None);
    assert!(manager.attached::<u32>(entity));
    assert!(!manager.attached::<i32>(entity));

    *manager.get_mut::<u32>(entity).unwrap() += 1;
    assert_eq!(manager.get::<u32>(entity), Some(&43));

    assert_eq!(manager.remove_all(entity), 2);
    assert!(!manager.attached::<u32>(entity));
    assert!(!manager.attached::<&str>(entity));
    assert_eq!(manager.remove::<u32>(entity), None);
}
