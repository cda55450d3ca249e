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

use super::backend::RenderStateBackend;
use super::enums::{BlendFactor, BlendOperation, CompareFunction, CullFace, Face, PolygonMode};

/// The cached blend configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlendState {
    /// Whether blending is enabled.
    pub enabled: bool,
    /// The source factor.
    pub source: BlendFactor,
    /// The destination factor.
    pub destination: BlendFactor,
    /// The blend equation.
    pub equation: BlendOperation,
}

impl Default for BlendState {
    fn default() -> Self {
        Self {
            enabled: false,
            source: BlendFactor::One,
            destination: BlendFactor::Zero,
            equation: BlendOperation::Add,
        }
    }
}

/// The cached depth-test configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthState {
    /// Whether the depth test is enabled.
    pub enabled: bool,
    /// The comparison function.
    pub compare: CompareFunction,
}

impl Default for DepthState {
    fn default() -> Self {
        Self {
            enabled: false,
            compare: CompareFunction::Less,
        }
    }
}

/// The cached face-culling configuration.
///
/// The selector keeps its last value while culling is disabled, mirroring
/// the device, which retains its cull-face setting across
/// enable/disable transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CullState {
    /// Whether face culling is enabled.
    pub enabled: bool,
    /// Which faces are culled while enabled.
    pub face: Face,
}

impl Default for CullState {
    fn default() -> Self {
        Self {
            enabled: false,
            face: Face::Back,
        }
    }
}

/// The cached polygon rasterization configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolygonState {
    /// How polygons are rasterized.
    pub mode: PolygonMode,
}

impl Default for PolygonState {
    fn default() -> Self {
        Self {
            mode: PolygonMode::Fill,
        }
    }
}

/// A write-through cache over a [`RenderStateBackend`] that elides
/// redundant state changes.
///
/// Every setter compares the request against the cached value and returns
/// without touching the device when nothing would change; otherwise the
/// cache is updated and exactly the corresponding primitives are issued.
/// The cache never reads state back from the device: it is authoritative by
/// construction, which holds only as long as *every* state change goes
/// through it. Mutating device state behind the cache's back is forbidden.
///
/// The initial cached values are the device's documented defaults, so the
/// cache must be created before any state has been changed. One cache per
/// device context; use it only from the thread that owns that context.
pub struct RenderStateCache<B: RenderStateBackend> {
    backend: B,
    blend: BlendState,
    depth: DepthState,
    cull: CullState,
    polygon: PolygonState,
}

impl<B: RenderStateBackend> RenderStateCache<B> {
    /// Wraps `backend`, assuming the device is in its default state.
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            blend: BlendState::default(),
            depth: DepthState::default(),
            cull: CullState::default(),
            polygon: PolygonState::default(),
        }
    }

    // --- DEPTH ---

    /// Enables or disables the depth test.
    pub fn enable_depth_test(&mut self, enabled: bool) {
        if self.depth.enabled == enabled {
            return;
        }
        self.depth.enabled = enabled;
        self.backend.set_depth_test_enabled(enabled);
    }

    /// Sets the depth comparison function.
    pub fn set_depth_compare(&mut self, compare: CompareFunction) {
        if self.depth.compare == compare {
            return;
        }
        self.depth.compare = compare;
        self.backend.set_depth_compare(compare);
    }

    // --- BLEND ---

    /// Enables or disables blending.
    pub fn enable_blend(&mut self, enabled: bool) {
        if self.blend.enabled == enabled {
            return;
        }
        self.blend.enabled = enabled;
        self.backend.set_blend_enabled(enabled);
    }

    /// Sets the blend source and destination factors.
    ///
    /// The pair is cached as a unit: the device call is elided only when
    /// both factors already match.
    pub fn set_blend_function(&mut self, source: BlendFactor, destination: BlendFactor) {
        if self.blend.source == source && self.blend.destination == destination {
            return;
        }
        self.blend.source = source;
        self.blend.destination = destination;
        self.backend.set_blend_function(source, destination);
    }

    /// Sets the blend equation.
    pub fn set_blend_equation(&mut self, equation: BlendOperation) {
        if self.blend.equation == equation {
            return;
        }
        self.blend.equation = equation;
        self.backend.set_blend_equation(equation);
    }

    // --- CULL ---

    /// Enables or disables face culling.
    pub fn enable_cull_face(&mut self, enabled: bool) {
        if self.cull.enabled == enabled {
            return;
        }
        self.cull.enabled = enabled;
        self.backend.set_cull_enabled(enabled);
    }

    /// Sets which faces are culled.
    ///
    /// [`CullFace::None`] disables culling and leaves the device's selector
    /// untouched; any other variant ensures culling is enabled and then
    /// writes the selector if it changed.
    pub fn set_cull_face(&mut self, cull: CullFace) {
        let face = cull.face();
        self.enable_cull_face(face.is_some());

        let Some(face) = face else { return };
        if self.cull.face == face {
            return;
        }
        self.cull.face = face;
        self.backend.set_cull_face(face);
    }

    // --- POLYGON ---

    /// Sets the polygon rasterization mode.
    pub fn set_polygon_mode(&mut self, mode: PolygonMode) {
        if self.polygon.mode == mode {
            return;
        }
        self.polygon.mode = mode;
        self.backend.set_polygon_mode(mode);
    }

    // --- ACCESSORS ---

    /// The cached blend configuration.
    pub fn blend_state(&self) -> BlendState {
        self.blend
    }

    /// The cached depth configuration.
    pub fn depth_state(&self) -> DepthState {
        self.depth
    }

    /// The cached cull configuration.
    pub fn cull_state(&self) -> CullState {
        self.cull
    }

    /// The cached polygon configuration.
    pub fn polygon_state(&self) -> PolygonState {
        self.polygon
    }

    /// Consumes the cache, returning the backend.
    ///
    /// Any state changed afterwards is no longer tracked; build a new cache
    /// only once the device is back in its default state.
    pub fn into_backend(self) -> B {
        self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every device call a backend can receive, recorded verbatim.
    #[derive(Debug, Clone, Copy, PartialEq)]
    enum DeviceCall {
        DepthEnabled(bool),
        DepthCompare(CompareFunction),
        BlendEnabled(bool),
        BlendFunction(BlendFactor, BlendFactor),
        BlendEquation(BlendOperation),
        CullEnabled(bool),
        CullFaceSel(Face),
        PolygonMode(PolygonMode),
    }

    /// A backend that records every primitive issued to it.
    #[derive(Default)]
    struct RecordingBackend {
        calls: Vec<DeviceCall>,
    }

    impl RenderStateBackend for RecordingBackend {
        fn set_depth_test_enabled(&mut self, enabled: bool) {
            self.calls.push(DeviceCall::DepthEnabled(enabled));
        }
        fn set_depth_compare(&mut self, compare: CompareFunction) {
            self.calls.push(DeviceCall::DepthCompare(compare));
        }
        fn set_blend_enabled(&mut self, enabled: bool) {
            self.calls.push(DeviceCall::BlendEnabled(enabled));
        }
        fn set_blend_function(&mut self, source: BlendFactor, destination: BlendFactor) {
            self.calls.push(DeviceCall::BlendFunction(source, destination));
        }
        fn set_blend_equation(&mut self, equation: BlendOperation) {
            self.calls.push(DeviceCall::BlendEquation(equation));
        }
        fn set_cull_enabled(&mut self, enabled: bool) {
            self.calls.push(DeviceCall::CullEnabled(enabled));
        }
        fn set_cull_face(&mut self, face: Face) {
            self.calls.push(DeviceCall::CullFaceSel(face));
        }
        fn set_polygon_mode(&mut self, mode: PolygonMode) {
            self.calls.push(DeviceCall::PolygonMode(mode));
        }
    }

    fn cache() -> RenderStateCache<RecordingBackend> {
        RenderStateCache::new(RecordingBackend::default())
    }

    #[test]
    fn construction_issues_no_device_calls() {
        let cache = cache();
        assert!(cache.into_backend().calls.is_empty());
    }

    #[test]
    fn redundant_depth_changes_are_elided() {
        // From defaults: enable-depth(true), set-depth(Less),
        // enable-depth(true), set-depth(Less). Only the first call changes
        // anything (Less is already the default compare).
        let mut cache = cache();
        cache.enable_depth_test(true);
        cache.set_depth_compare(CompareFunction::Less);
        cache.enable_depth_test(true);
        cache.set_depth_compare(CompareFunction::Less);

        assert!(cache.depth_state().enabled);
        assert_eq!(cache.depth_state().compare, CompareFunction::Less);
        assert_eq!(
            cache.into_backend().calls,
            vec![DeviceCall::DepthEnabled(true)],
            "only the state-changing call may reach the device"
        );
    }

    #[test]
    fn blend_factors_are_cached_as_a_pair() {
        let mut cache = cache();
        cache.set_blend_function(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        // Same pair again: elided.
        cache.set_blend_function(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        // One half changes: a full write goes out.
        cache.set_blend_function(BlendFactor::SrcAlpha, BlendFactor::One);

        assert_eq!(
            cache.into_backend().calls,
            vec![
                DeviceCall::BlendFunction(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha),
                DeviceCall::BlendFunction(BlendFactor::SrcAlpha, BlendFactor::One),
            ]
        );
    }

    #[test]
    fn cache_state_tracks_last_request() {
        let mut cache = cache();
        cache.enable_blend(true);
        cache.set_blend_equation(BlendOperation::ReverseSubtract);
        cache.set_depth_compare(CompareFunction::LessEqual);
        cache.set_polygon_mode(PolygonMode::Line);
        cache.set_polygon_mode(PolygonMode::Fill);

        assert!(cache.blend_state().enabled);
        assert_eq!(cache.blend_state().equation, BlendOperation::ReverseSubtract);
        assert_eq!(cache.depth_state().compare, CompareFunction::LessEqual);
        assert_eq!(cache.polygon_state().mode, PolygonMode::Fill);
        // Five setter calls, five state changes, five device calls.
        assert_eq!(cache.into_backend().calls.len(), 5);
    }

    #[test]
    fn cull_none_disables_culling() {
        let mut cache = cache();
        cache.set_cull_face(CullFace::Back);
        assert!(cache.cull_state().enabled, "a real face enables culling");
        assert_eq!(cache.cull_state().face, Face::Back);

        cache.set_cull_face(CullFace::None);
        assert!(!cache.cull_state().enabled, "none disables culling");
        assert_eq!(
            cache.cull_state().face,
            Face::Back,
            "the selector survives a disable, as on the device"
        );

        cache.set_cull_face(CullFace::Back);
        assert!(cache.cull_state().enabled, "a real face re-enables culling");

        assert_eq!(
            cache.into_backend().calls,
            vec![
                // Back is the default selector, so the first request only
                // has to enable culling.
                DeviceCall::CullEnabled(true),
                DeviceCall::CullEnabled(false),
                DeviceCall::CullEnabled(true),
            ]
        );
    }

    #[test]
    fn cull_selector_changes_are_written_once() {
        let mut cache = cache();
        cache.set_cull_face(CullFace::Front);
        cache.set_cull_face(CullFace::Front);
        cache.set_cull_face(CullFace::FrontAndBack);

        assert_eq!(
            cache.into_backend().calls,
            vec![
                DeviceCall::CullEnabled(true),
                DeviceCall::CullFaceSel(Face::Front),
                DeviceCall::CullFaceSel(Face::FrontAndBack),
            ]
        );
    }

    #[test]
    fn defaults_match_the_device_spec() {
        let cache = cache();
        assert_eq!(
            cache.blend_state(),
            BlendState {
                enabled: false,
                source: BlendFactor::One,
                destination: BlendFactor::Zero,
                equation: BlendOperation::Add,
            }
        );
        assert_eq!(
            cache.depth_state(),
            DepthState {
                enabled: false,
                compare: CompareFunction::Less,
            }
        );
        assert_eq!(
            cache.cull_state(),
            CullState {
                enabled: false,
                face: Face::Back,
            }
        );
        assert_eq!(cache.polygon_state(), PolygonState {
            mode: PolygonMode::Fill
        });
    }
}
