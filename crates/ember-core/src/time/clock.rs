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

use std::time::Instant;

/// A monotonic time source read by the game loops.
///
/// `now` returns seconds elapsed since an arbitrary but fixed epoch, as an
/// `f64`. Successive calls must never go backwards. The receiver is `&mut`
/// so scripted test clocks can advance internal state on every read.
pub trait FrameClock {
    /// Returns the current time in seconds since the clock's epoch.
    fn now(&mut self) -> f64;
}

/// A [`FrameClock`] backed by [`std::time::Instant`].
///
/// The epoch is the moment of construction, so early readings are small
/// and `f64` precision is not a concern over any realistic session length.
#[derive(Debug, Clone)]
pub struct SteadyClock {
    epoch: Instant,
}

impl SteadyClock {
    /// Creates a clock whose epoch is now.
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SteadyClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SteadyClock {
    fn now(&mut self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }
}
