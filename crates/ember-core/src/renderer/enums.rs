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

//! Enumerations for the cacheable slice of pipeline state.
//!
//! Each variant maps one-to-one onto a constant of the underlying graphics
//! API; the [`RenderStateBackend`](super::RenderStateBackend) implementation
//! owns that mapping.

/// The comparison function used for depth testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareFunction {
    /// The test never passes.
    Never,
    /// The test passes if the new depth is less than the stored depth.
    Less,
    /// The test passes if the new depth is equal to the stored depth.
    Equal,
    /// The test passes if the new depth is less than or equal to the stored depth.
    LessEqual,
    /// The test passes if the new depth is greater than the stored depth.
    Greater,
    /// The test passes if the new depth is not equal to the stored depth.
    NotEqual,
    /// The test passes if the new depth is greater than or equal to the stored depth.
    GreaterEqual,
    /// The test always passes.
    Always,
}

/// A factor in a blend equation, scaling the source or destination color's
/// contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendFactor {
    /// The factor is `0.0`.
    Zero,
    /// The factor is `1.0`.
    One,
    /// The factor is the source color.
    SrcColor,
    /// The factor is `1.0 - src` per channel.
    OneMinusSrcColor,
    /// The factor is the destination color.
    DstColor,
    /// The factor is `1.0 - dst` per channel.
    OneMinusDstColor,
    /// The factor is the source alpha component (`src.a`).
    SrcAlpha,
    /// The factor is `1.0 - src.a`.
    OneMinusSrcAlpha,
    /// The factor is the destination alpha component (`dst.a`).
    DstAlpha,
    /// The factor is `1.0 - dst.a`.
    OneMinusDstAlpha,
    /// The factor is `min(src.a, 1.0 - dst.a)` on color channels, `1.0` on alpha.
    SrcAlphaSaturate,
}

/// The operation combining the scaled source and destination colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendOperation {
    /// The result is `source + destination`.
    Add,
    /// The result is `source - destination`.
    Subtract,
    /// The result is `destination - source`.
    ReverseSubtract,
    /// The result is `min(source, destination)`.
    Min,
    /// The result is `max(source, destination)`.
    Max,
}

/// A concrete face selector, as written to the device.
///
/// This is the type the backend receives; "cull nothing" is expressed by
/// disabling culling, not by a selector variant, because graphics APIs have
/// no "none" face constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    /// Front-facing triangles.
    Front,
    /// Back-facing triangles.
    Back,
    /// Both front- and back-facing triangles.
    FrontAndBack,
}

/// The face-culling request as seen by callers of the state cache.
///
/// Unlike [`Face`], this carries a [`None`](CullFace::None) variant:
/// requesting it disables face culling altogether.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CullFace {
    /// Cull nothing; face culling is disabled.
    None,
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    Back,
    /// Cull every triangle.
    FrontAndBack,
}

impl CullFace {
    /// The device-facing selector for this request, or `None` for
    /// [`CullFace::None`].
    pub fn face(self) -> Option<Face> {
        match self {
            CullFace::None => None,
            CullFace::Front => Some(Face::Front),
            CullFace::Back => Some(Face::Back),
            CullFace::FrontAndBack => Some(Face::FrontAndBack),
        }
    }
}

/// Defines how polygons are rasterized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolygonMode {
    /// Polygon vertices are rendered as points.
    Point,
    /// Polygons are rendered as outlines (wireframe).
    Line,
    /// Polygons are filled. This is the normal rendering mode.
    Fill,
}
