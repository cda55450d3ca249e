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

//! Defines the opaque entity handle.

/// A handle identifying a logical game object.
///
/// Entities carry no behavior and no data of their own; they are keys into
/// the per-kind component storages of the data layer. A live entity's index
/// is unique across its manager at any instant, but indices of destroyed
/// entities are recycled in FIFO order, so a handle must not be used after
/// the entity it names has been destroyed.
///
/// Handles are only meaningfully obtained from an entity manager; building
/// one by hand is possible but names nothing until the manager hands out
/// the same index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Entity {
    /// The slot index of this entity inside its manager.
    pub index: u32,
}

impl Entity {
    /// Creates a handle wrapping a raw slot index.
    pub const fn from_index(index: u32) -> Self {
        Self { index }
    }

    /// Returns the raw slot index as a `usize`, for container addressing.
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entity#{}", self.index)
    }
}
