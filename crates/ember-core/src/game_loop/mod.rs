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

//! Frame-paced game loops.
//!
//! Two variants of the "fix your timestep" pattern
//! (<https://gafferongames.com/post/fix_your_timestep/>):
//!
//! * [`FixedGameLoop`] — integrates in exact multiples of a fixed step and
//!   hands the renderer an interpolation factor `alpha` in `[0, 1)` so it
//!   can smooth between the last two simulated states. Integration is
//!   deterministic: two runs fed the same input produce identical state.
//! * [`SemiFixedGameLoop`] — drains each frame in sub-steps no larger than
//!   the configured step and renders without interpolation. For stages
//!   that cannot blend between states.
//!
//! Both clamp the measured frame time to [`LoopConfig::max_frame`] so that a
//! long stall (debugger pause, swap stall) makes the simulation fall behind
//! real time instead of spiralling into an unbounded burst of integration
//! steps. Both are single-threaded with respect to their callbacks and stop
//! cooperatively through a [`LoopHandle`], checked once per outer iteration;
//! in-flight callbacks always run to completion.

mod fixed;
mod semi_fixed;

pub use fixed::FixedGameLoop;
pub use semi_fixed::SemiFixedGameLoop;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The callback surface driven by a [`FixedGameLoop`].
///
/// The loop calls these in a fixed order every outer iteration:
/// `update_input` once, `integrate` zero or more times, `render` once.
/// None of the callbacks may panic across the loop boundary; the loop makes
/// no attempt to trap failures.
pub trait GameStage {
    /// Polls and buffers input for the coming integration steps.
    fn update_input(&mut self);

    /// Advances the simulation by exactly `step` seconds.
    ///
    /// `elapsed` is the total simulated time before this step, i.e. the
    /// k-th call observes `elapsed == (k - 1) * step`.
    fn integrate(&mut self, elapsed: f64, step: f64);

    /// Draws the current state.
    ///
    /// `alpha` in `[0, 1)` is the fraction of a step left unsimulated in
    /// the accumulator; interpolate between the previous and the current
    /// simulated state by this amount to hide the step quantum.
    fn render(&mut self, alpha: f64);
}

/// The callback surface driven by a [`SemiFixedGameLoop`].
///
/// Identical to [`GameStage`] except that `integrate` may receive a final
/// partial step and `render` takes no interpolation factor.
pub trait SemiFixedStage {
    /// Polls and buffers input for the coming integration steps.
    fn update_input(&mut self);

    /// Advances the simulation by `delta` seconds, where
    /// `0 < delta <= step`.
    fn integrate(&mut self, elapsed: f64, delta: f64);

    /// Draws the current state.
    fn render(&mut self);
}

/// Timing configuration shared by both loop variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopConfig {
    /// The simulation timestep, in seconds.
    pub step: f64,
    /// The most real time a single outer iteration is allowed to consume,
    /// in seconds. Longer frames are clamped to this value.
    pub max_frame: f64,
}

impl LoopConfig {
    /// Creates a configuration with the given step and frame clamp.
    ///
    /// # Panics
    ///
    /// Panics unless `0 < step <= max_frame`.
    pub fn new(step: f64, max_frame: f64) -> Self {
        assert!(step > 0.0, "loop step must be positive, got {step}");
        assert!(
            step <= max_frame,
            "max_frame ({max_frame}) must be at least one step ({step})"
        );
        Self { step, max_frame }
    }
}

impl Default for LoopConfig {
    /// 60 simulation steps per second, clamped at a quarter second of real
    /// time per frame.
    fn default() -> Self {
        Self::new(1.0 / 60.0, 0.25)
    }
}

/// A cloneable handle for stopping a running game loop.
///
/// The handle may be held by the stage itself, another thread, or a signal
/// handler. [`stop`](LoopHandle::stop) takes effect at the top of the next
/// outer iteration.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    running: Arc<AtomicBool>,
}

impl LoopHandle {
    pub(crate) fn new(running: Arc<AtomicBool>) -> Self {
        Self { running }
    }

    /// Requests that the loop exit after the current iteration completes.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    /// Returns `true` while the loop has not been asked to stop.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests;
