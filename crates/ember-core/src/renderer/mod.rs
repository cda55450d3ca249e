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

//! Render-state contracts and the state cache.
//!
//! The engine does not own a graphics device. Instead, the embedder
//! implements [`RenderStateBackend`] over whatever API owns the GPU, and
//! routes all pipeline-state changes through a [`RenderStateCache`], which
//! elides writes that would not change anything.

mod backend;
mod enums;
mod state_cache;

pub use backend::RenderStateBackend;
pub use enums::{BlendFactor, BlendOperation, CompareFunction, CullFace, Face, PolygonMode};
pub use state_cache::{BlendState, CullState, DepthState, PolygonState, RenderStateCache};
