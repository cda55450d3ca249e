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

use super::enums::{BlendFactor, BlendOperation, CompareFunction, Face, PolygonMode};

/// The raw pipeline-state primitives of the underlying graphics API.
///
/// Each method is expected to be a thin wrapper over a single device call
/// (for OpenGL: `glEnable`/`glDisable`, `glDepthFunc`, `glBlendFunc`,
/// `glBlendEquation`, `glCullFace`, `glPolygonMode`), translating the enum
/// argument into the API's constant. Implementations perform no caching or
/// filtering of their own; that is the
/// [`RenderStateCache`](super::RenderStateCache)'s job, and double caching
/// would hide nothing and confuse everything.
///
/// All methods must be called only from the thread that owns the device
/// context.
pub trait RenderStateBackend {
    /// Enables or disables the depth test.
    fn set_depth_test_enabled(&mut self, enabled: bool);

    /// Sets the depth-test comparison function.
    fn set_depth_compare(&mut self, compare: CompareFunction);

    /// Enables or disables blending.
    fn set_blend_enabled(&mut self, enabled: bool);

    /// Sets the blend source and destination factors.
    fn set_blend_function(&mut self, source: BlendFactor, destination: BlendFactor);

    /// Sets the blend equation.
    fn set_blend_equation(&mut self, equation: BlendOperation);

    /// Enables or disables face culling.
    fn set_cull_enabled(&mut self, enabled: bool);

    /// Sets which faces are culled.
    fn set_cull_face(&mut self, face: Face);

    /// Sets the polygon rasterization mode.
    fn set_polygon_mode(&mut self, mode: PolygonMode);
}
