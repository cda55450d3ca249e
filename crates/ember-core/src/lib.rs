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

//! # Ember Core
//!
//! Foundational crate containing traits, core types, and interface contracts
//! that define the engine's architecture.
//!
//! Nothing in this crate owns game data. The ECS data layer lives in
//! `ember-data`; this crate holds the pieces the rest of the engine is built
//! against: the entity handle, clocks, the fixed-timestep game loops, and
//! the render-state contracts.

#![warn(missing_docs)]

pub mod ecs;
pub mod game_loop;
pub mod renderer;
pub mod time;

pub use ecs::Entity;
pub use time::Stopwatch;
