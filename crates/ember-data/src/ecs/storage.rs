// Copyright 2025 the Ember authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Per-kind columnar component storage.

use std::any::Any;
use std::collections::HashMap;

use ember_core::ecs::Entity;

/// The type-erased face of a [`ComponentStorage<T>`].
///
/// The [`ComponentManager`](super::ComponentManager) holds its storages
/// behind this trait so it can sweep all kinds for one entity
/// (`detach_all`) without knowing any component type. The `as_any` pair
/// recovers the concrete storage for typed access.
pub trait AnyStorage {
    /// Returns `true` if a component is attached to `entity`.
    fn has(&self, entity: Entity) -> bool;

    /// Detaches `entity`'s component if one is attached; otherwise a no-op.
    fn detach_any(&mut self, entity: Entity);

    /// Casts to `&dyn Any` for downcasting to the concrete storage.
    fn as_any(&self) -> &dyn Any;

    /// Casts to `&mut dyn Any` for downcasting to the concrete storage.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// A dense column of one component kind.
///
/// Values live contiguously in a `Vec`, with a pair of mutually inverse
/// maps translating entities to dense indices and back. Removal is
/// swap-and-pop: the trailing value overwrites the removed slot, so the
/// column never has gaps and removal is O(1), at the price of unstable
/// iteration order.
///
/// References returned by [`get`](ComponentStorage::get) and
/// [`attach`](ComponentStorage::attach) are valid only until the next
/// `attach` or `detach` on the same storage. That is a documented contract,
/// not a runtime check: iterate first, mutate after.
pub struct ComponentStorage<T> {
    values: Vec<T>,
    entity_to_index: HashMap<Entity, usize>,
    index_to_entity: HashMap<usize, Entity>,
}

impl<T> Default for ComponentStorage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ComponentStorage<T> {
    /// Creates an empty storage.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            entity_to_index: HashMap::new(),
            index_to_entity: HashMap::new(),
        }
    }

    /// Attaches `value` to `entity` and returns a reference to the stored
    /// value.
    ///
    /// Invalidates previously returned references into this storage (the
    /// dense array may reallocate).
    ///
    /// # Panics
    ///
    /// Panics if `entity` already has a component of this kind.
    pub fn attach(&mut self, entity: Entity, value: T) -> &mut T {
        assert!(
            !self.entity_to_index.contains_key(&entity),
            "component already attached to {entity}"
        );

        let index = self.values.len();
        self.entity_to_index.insert(entity, index);
        self.index_to_entity.insert(index, entity);
        self.values.push(value);

        // Just pushed; the slot exists.
        &mut self.values[index]
    }

    /// Detaches and returns `entity`'s component, or `None` if it has none.
    ///
    /// Swap-and-pop: the value of the entity occupying the last dense slot
    /// moves into the vacated slot, so the reference previously handed out
    /// for that entity (and for `entity` itself) is invalidated.
    pub fn detach(&mut self, entity: Entity) -> Option<T> {
        let removed_index = self.entity_to_index.remove(&entity)?;
        let last_index = self.values.len() - 1;

        // swap_remove moves the trailing value into the hole; the maps have
        // to follow it, unless the hole *was* the trailing slot.
        let removed = self.values.swap_remove(removed_index);
        self.index_to_entity.remove(&removed_index);
        if removed_index != last_index {
            let moved_entity = self.index_to_entity.remove(&last_index).unwrap_or_else(|| {
                panic!("index map out of sync at slot {last_index}");
            });
            self.entity_to_index.insert(moved_entity, removed_index);
            self.index_to_entity.insert(removed_index, moved_entity);
        }

        Some(removed)
    }

    /// Returns a reference to `entity`'s component.
    ///
    /// Valid until the next `attach` or `detach` on this storage.
    ///
    /// # Panics
    ///
    /// Panics if `entity` has no component of this kind.
    pub fn get(&self, entity: Entity) -> &T {
        let index = self.index_of(entity);
        &self.values[index]
    }

    /// Returns a mutable reference to `entity`'s component.
    ///
    /// Valid until the next `attach` or `detach` on this storage.
    ///
    /// # Panics
    ///
    /// Panics if `entity` has no component of this kind.
    pub fn get_mut(&mut self, entity: Entity) -> &mut T {
        let index = self.index_of(entity);
        &mut self.values[index]
    }

    /// Returns `true` if a component is attached to `entity`.
    pub fn has(&self, entity: Entity) -> bool {
        self.entity_to_index.contains_key(&entity)
    }

    /// The number of components in this storage.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the storage holds no components.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over `(entity, value)` pairs in dense order.
    ///
    /// The order is unstable across mutations; do not attach or detach on
    /// this storage while iterating.
    pub fn iter(&self) -> impl Iterator<Item = (Entity, &T)> {
        self.values.iter().enumerate().map(|(index, value)| {
            let entity = self.index_to_entity[&index];
            (entity, value)
        })
    }

    /// Iterates over `(entity, value)` pairs in dense order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Entity, &mut T)> {
        let index_to_entity = &self.index_to_entity;
        self.values.iter_mut().enumerate().map(move |(index, value)| {
            let entity = index_to_entity[&index];
            (entity, value)
        })
    }

    fn index_of(&self, entity: Entity) -> usize {
        match self.entity_to_index.get(&entity) {
            Some(&index) => index,
            None => panic!("component was never attached to {entity}"),
        }
    }
}

impl<T: 'static> AnyStorage for ComponentStorage<T> {
    fn has(&self, entity: Entity) -> bool {
        ComponentStorage::has(self, entity)
    }

    fn detach_any(&mut self, entity: Entity) {
        let _ = self.detach(entity);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
