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

//! Entity allocation, signature bookkeeping, and lifecycle notification.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use ember_core::ecs::Entity;

use super::Signature;

/// The cap on simultaneously live entities.
pub const MAX_ENTITIES: usize = 5120;

/// An observer of entity lifecycle events.
///
/// All callbacks default to no-ops; implementations override the subset
/// they care about. Callbacks run synchronously on the thread that mutated
/// the manager, in listener registration order. A callback must not mutate
/// the manager that invoked it; re-entrancy is not supported.
pub trait EntityListener {
    /// Called after `entity` has been created.
    fn on_created(&mut self, entity: Entity) {
        let _ = entity;
    }

    /// Called after `entity` has been destroyed.
    fn on_destroyed(&mut self, entity: Entity) {
        let _ = entity;
    }

    /// Called after `entity`'s signature has been replaced by `signature`.
    fn on_signature_change(&mut self, entity: Entity, signature: Signature) {
        let _ = (entity, signature);
    }
}

/// Manages the creation and destruction of entities.
///
/// Handles are recycled through a FIFO queue: the oldest freed index is the
/// next one reused. Each live entity carries a [`Signature`]; a freshly
/// created (or recycled) entity's signature is empty.
///
/// Listeners are held as weak back-references — the manager never owns
/// them. A listener dropped by its owner is silently pruned at the next
/// notification sweep.
#[derive(Default)]
pub struct EntityManager {
    listeners: Vec<Weak<RefCell<dyn EntityListener>>>,
    signatures: Vec<Signature>,
    alive: Vec<bool>,
    freed: VecDeque<Entity>,
    live: usize,
}

impl EntityManager {
    /// Creates an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new entity with an empty signature.
    ///
    /// Freed indices are reused in FIFO order before a fresh index is
    /// allocated. Registered listeners observe `on_created`.
    ///
    /// # Panics
    ///
    /// Panics if [`MAX_ENTITIES`] entities are already live.
    pub fn create(&mut self) -> Entity {
        assert!(
            self.live < MAX_ENTITIES,
            "too many entities in existence (cap {MAX_ENTITIES})"
        );

        let entity = if let Some(recycled) = self.freed.pop_front() {
            self.alive[recycled.as_usize()] = true;
            recycled
        } else {
            let fresh = Entity::from_index(self.signatures.len() as u32);
            self.signatures.push(Signature::EMPTY);
            self.alive.push(true);
            fresh
        };
        self.live += 1;

        log::trace!("created {entity}");
        self.for_each_listener(|listener| listener.on_created(entity));

        entity
    }

    /// Destroys `entity`, clearing its signature and queueing its index for
    /// reuse. Registered listeners observe `on_destroyed`.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is not live (never created, or destroyed twice).
    pub fn destroy(&mut self, entity: Entity) {
        self.assert_live(entity);

        self.signatures[entity.as_usize()].clear_all();
        self.alive[entity.as_usize()] = false;
        self.freed.push_back(entity);
        self.live -= 1;

        log::trace!("destroyed {entity}");
        self.for_each_listener(|listener| listener.on_destroyed(entity));
    }

    /// Replaces the signature of `entity`. Registered listeners observe
    /// `on_signature_change`.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is not live.
    pub fn set_signature(&mut self, entity: Entity, signature: Signature) {
        self.assert_live(entity);

        self.signatures[entity.as_usize()] = signature;
        self.for_each_listener(|listener| listener.on_signature_change(entity, signature));
    }

    /// Returns the signature of `entity`. Read-only; no listener fires.
    ///
    /// # Panics
    ///
    /// Panics if `entity` is not live.
    pub fn get_signature(&self, entity: Entity) -> Signature {
        self.assert_live(entity);
        self.signatures[entity.as_usize()]
    }

    /// The number of live entities.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if no entities are live.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Registers `listener` to observe lifecycle events.
    ///
    /// The manager keeps only a weak handle; the caller retains ownership
    /// and keeps the `Rc` alive for as long as it wants callbacks.
    /// Listeners are notified in registration order.
    pub fn register_listener(&mut self, listener: &Rc<RefCell<dyn EntityListener>>) {
        self.listeners.push(Rc::downgrade(listener));
    }

    /// Unregisters a previously registered `listener`.
    ///
    /// # Panics
    ///
    /// Panics if `listener` was never registered (or was already pruned).
    pub fn unregister_listener(&mut self, listener: &Rc<RefCell<dyn EntityListener>>) {
        let target = Rc::downgrade(listener);
        let position = self
            .listeners
            .iter()
            .position(|registered| registered.ptr_eq(&target));
        match position {
            Some(index) => {
                self.listeners.remove(index);
            }
            None => panic!("listener was never registered"),
        }
    }

    /// Invokes `f` on every live listener in registration order, pruning
    /// listeners whose owners have dropped them.
    fn for_each_listener(&mut self, mut f: impl FnMut(&mut dyn EntityListener)) {
        self.listeners.retain(|weak| match weak.upgrade() {
            Some(listener) => {
                f(&mut *listener.borrow_mut());
                true
            }
            None => false,
        });
    }

    fn assert_live(&self, entity: Entity) {
        assert!(
            entity.as_usize() < self.signatures.len(),
            "{entity} was never created"
        );
        assert!(self.alive[entity.as_usize()], "{entity} is not live");
    }
}
