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

//! Time sources for the engine.
//!
//! The game loops never talk to `std::time` directly; they read a
//! [`FrameClock`], which keeps the loops deterministic under test (a
//! scripted clock) and steady in production ([`SteadyClock`]).

mod clock;
mod stopwatch;

pub use clock::{FrameClock, SteadyClock};
pub use stopwatch::Stopwatch;
