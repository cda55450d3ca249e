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

//! The fixed-width component bitmask.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

use super::ComponentKind;

/// A bitmask recording which component kinds are attached to an entity.
///
/// Bit `k` set means the entity has a value of the kind with id `k`. The
/// width is fixed at compile time and bounds how many component kinds a
/// [`ComponentManager`](super::ComponentManager) can register; widening it
/// to `u64` (and raising the entity cap) is the designated scaling path.
///
/// Signatures are the predicate of system queries: a system runs over the
/// entities whose signature [`contains`](Signature::contains) its required
/// mask. All operations are constant-time bit arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signature(u32);

impl Signature {
    /// The number of distinct component kinds a signature can record.
    pub const WIDTH: usize = u32::BITS as usize;

    /// The signature with no bits set.
    pub const EMPTY: Signature = Signature(0);

    /// Sets the bit for `kind`.
    #[inline]
    pub fn set(&mut self, kind: ComponentKind) {
        self.0 |= kind.bit();
    }

    /// Clears the bit for `kind`.
    #[inline]
    pub fn clear(&mut self, kind: ComponentKind) {
        self.0 &= !kind.bit();
    }

    /// Clears every bit.
    #[inline]
    pub fn clear_all(&mut self) {
        self.0 = 0;
    }

    /// Returns `true` if the bit for `kind` is set.
    #[inline]
    pub fn test(self, kind: ComponentKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Returns `true` if every bit of `required` is also set in `self`.
    #[inline]
    pub fn contains(self, required: Signature) -> bool {
        self.0 & required.0 == required.0
    }

    /// Returns `true` if no bit is set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Builds a signature from a set of kinds.
    pub fn from_kinds(kinds: &[ComponentKind]) -> Self {
        let mut signature = Signature::EMPTY;
        for &kind in kinds {
            signature.set(kind);
        }
        signature
    }
}

impl BitOr for Signature {
    type Output = Signature;

    /// The union of two signatures.
    fn bitor(self, rhs: Signature) -> Signature {
        Signature(self.0 | rhs.0)
    }
}

impl BitOrAssign for Signature {
    fn bitor_assign(&mut self, rhs: Signature) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Signature {
    type Output = Signature;

    /// The intersection of two signatures.
    fn bitand(self, rhs: Signature) -> Signature {
        Signature(self.0 & rhs.0)
    }
}

impl BitAndAssign for Signature {
    fn bitand_assign(&mut self, rhs: Signature) {
        self.0 &= rhs.0;
    }
}
