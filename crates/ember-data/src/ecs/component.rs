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

/// A marker trait for types attachable to entities as components.
///
/// Components are plain data aggregates. The `'static` bound rules out
/// borrowed data, and `Send + Sync` lets whole storages move across thread
/// boundaries even though no storage is internally synchronized.
pub trait Component: 'static + Send + Sync {}

/// The dense id a component kind receives when registered.
///
/// Ids are assigned in registration order starting at zero, are never
/// reused for the manager's lifetime, and double as bit positions in a
/// [`Signature`](super::Signature). The id space is bounded by
/// [`Signature::WIDTH`](super::Signature::WIDTH).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentKind(pub(crate) u8);

impl ComponentKind {
    /// The dense id as an index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The signature bit for this kind.
    #[inline]
    pub(crate) fn bit(self) -> u32 {
        1 << self.0
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "kind#{}", self.0)
    }
}
