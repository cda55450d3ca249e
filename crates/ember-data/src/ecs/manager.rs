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

//! Component kind registration and typed storage routing.

use std::any::{type_name, TypeId};
use std::collections::HashMap;

use ember_core::ecs::Entity;

use super::storage::{AnyStorage, ComponentStorage};
use super::{Component, ComponentKind, Signature};

/// The cap on registered component kinds, tied to [`Signature::WIDTH`].
pub const MAX_COMPONENT_KINDS: usize = Signature::WIDTH;

/// Owns one [`ComponentStorage`] per registered component kind and routes
/// typed operations to the right column.
///
/// Registration assigns each kind a dense [`ComponentKind`] id in call
/// order; the id doubles as the kind's signature bit. The manager knows
/// nothing about signatures beyond that correspondence — composing
/// attach/detach with
/// [`EntityManager::set_signature`](super::EntityManager::set_signature) is
/// the embedder's responsibility.
#[derive(Default)]
pub struct ComponentManager {
    storages: Vec<Box<dyn AnyStorage>>,
    kinds: HashMap<TypeId, ComponentKind>,
}

impl ComponentManager {
    /// Creates a manager with no registered kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` as a component kind and returns its dense id.
    ///
    /// # Panics
    ///
    /// Panics if `T` is already registered or the kind cap
    /// ([`MAX_COMPONENT_KINDS`]) is reached.
    pub fn register<T: Component>(&mut self) -> ComponentKind {
        let type_id = TypeId::of::<T>();
        assert!(
            !self.kinds.contains_key(&type_id),
            "component kind {} registered twice",
            type_name::<T>()
        );
        assert!(
            self.storages.len() < MAX_COMPONENT_KINDS,
            "component kind cap ({MAX_COMPONENT_KINDS}) reached"
        );

        let kind = ComponentKind(self.storages.len() as u8);
        self.storages.push(Box::new(ComponentStorage::<T>::new()));
        self.kinds.insert(type_id, kind);

        log::debug!("registered component kind {} as {kind}", type_name::<T>());
        kind
    }

    /// Returns the id assigned to `T` at registration.
    ///
    /// # Panics
    ///
    /// Panics if `T` was never registered.
    pub fn kind_of<T: Component>(&self) -> ComponentKind {
        match self.kinds.get(&TypeId::of::<T>()) {
            Some(&kind) => kind,
            None => panic!("component kind {} was never registered", type_name::<T>()),
        }
    }

    /// The number of registered kinds.
    pub fn kind_count(&self) -> usize {
        self.storages.len()
    }

    /// Attaches `value` to `entity`, returning a reference to the stored
    /// value (valid until the next mutation of this kind's storage).
    ///
    /// # Panics
    ///
    /// Panics if `T` is unregistered or `entity` already has a `T`.
    pub fn attach<T: Component>(&mut self, entity: Entity, value: T) -> &mut T {
        self.storage_mut::<T>().attach(entity, value)
    }

    /// Detaches `entity`'s `T` component.
    ///
    /// # Panics
    ///
    /// Panics if `T` is unregistered or `entity` has no `T` attached.
    pub fn detach<T: Component>(&mut self, entity: Entity) {
        let detached = self.storage_mut::<T>().detach(entity);
        assert!(
            detached.is_some(),
            "component {} was never attached to {entity}",
            type_name::<T>()
        );
    }

    /// Detaches every component of `entity`, sweeping the storages in
    /// registration order. Kinds the entity lacks are skipped.
    pub fn detach_all(&mut self, entity: Entity) {
        for storage in &mut self.storages {
            if storage.has(entity) {
                storage.detach_any(entity);
            }
        }
    }

    /// Returns a reference to `entity`'s `T` component (valid until the
    /// next mutation of this kind's storage).
    ///
    /// # Panics
    ///
    /// Panics if `T` is unregistered or `entity` has no `T` attached.
    pub fn get<T: Component>(&self, entity: Entity) -> &T {
        self.storage::<T>().get(entity)
    }

    /// Returns a mutable reference to `entity`'s `T` component (valid
    /// until the next mutation of this kind's storage).
    ///
    /// # Panics
    ///
    /// Panics if `T` is unregistered or `entity` has no `T` attached.
    pub fn get_mut<T: Component>(&mut self, entity: Entity) -> &mut T {
        self.storage_mut::<T>().get_mut(entity)
    }

    /// Returns `true` if `entity` has a `T` attached.
    ///
    /// # Panics
    ///
    /// Panics if `T` was never registered.
    pub fn has<T: Component>(&self, entity: Entity) -> bool {
        self.storage::<T>().has(entity)
    }

    /// Returns the typed storage for `T`, for iteration.
    ///
    /// # Panics
    ///
    /// Panics if `T` was never registered.
    pub fn storage<T: Component>(&self) -> &ComponentStorage<T> {
        let kind = self.kind_of::<T>();
        self.storages[kind.index()]
            .as_any()
            .downcast_ref::<ComponentStorage<T>>()
            .expect("storage column type diverged from its registration")
    }

    /// Returns the typed storage for `T`, mutably.
    ///
    /// # Panics
    ///
    /// Panics if `T` was never registered.
    pub fn storage_mut<T: Component>(&mut self) -> &mut ComponentStorage<T> {
        let kind = self.kind_of::<T>();
        self.storages[kind.index()]
            .as_any_mut()
            .downcast_mut::<ComponentStorage<T>>()
            .expect("storage column type diverged from its registration")
    }
}
