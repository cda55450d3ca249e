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

//! A signature-based entity-component-system.
//!
//! Three cooperating pieces, composed rather than fused:
//!
//! * [`EntityManager`] hands out and recycles [`Entity`] handles, tracks a
//!   [`Signature`] per entity, and notifies registered
//!   [`EntityListener`]s of lifecycle events.
//! * [`ComponentStorage<T>`] keeps one kind of component in a dense column
//!   with swap-and-pop removal, so iteration touches contiguous memory.
//! * [`ComponentManager`] owns one storage per registered kind and routes
//!   typed attach/detach/get calls to the right column.
//!
//! The component manager does not track signatures; keeping bit `k` of an
//! entity's signature in sync with whether the `k`-th storage holds a value
//! for it is the embedder's job, typically in a thin facade over both
//! managers.
//!
//! Nothing here is internally synchronized. Precondition violations —
//! double-destroy, `get` without `has`, a second attach of the same kind —
//! are programmer errors and panic.

mod component;
mod entity_manager;
mod manager;
mod signature;
mod storage;

pub use component::{Component, ComponentKind};
pub use entity_manager::{EntityListener, EntityManager, MAX_ENTITIES};
pub use manager::{ComponentManager, MAX_COMPONENT_KINDS};
pub use signature::Signature;
pub use storage::{AnyStorage, ComponentStorage};

pub use ember_core::ecs::Entity;
