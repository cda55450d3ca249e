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

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::time::FrameClock;

use super::{GameStage, LoopConfig, LoopHandle};

/// The interpolated fixed-timestep loop.
///
/// Real elapsed time is gathered into an accumulator; whole steps are
/// integrated out of it, and whatever fraction of a step remains is handed
/// to [`GameStage::render`] as the interpolation factor. Between outer
/// iterations the accumulator always holds less than one step.
pub struct FixedGameLoop<C: FrameClock> {
    clock: C,
    config: LoopConfig,
    running: Arc<AtomicBool>,
}

impl<C: FrameClock> FixedGameLoop<C> {
    /// Creates a loop reading time from `clock` with the given pacing.
    pub fn new(clock: C, config: LoopConfig) -> Self {
        Self {
            clock,
            config,
            running: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Returns a handle that can stop this loop, from any thread.
    pub fn handle(&self) -> LoopHandle {
        LoopHandle::new(Arc::clone(&self.running))
    }

    /// Returns the timing configuration this loop was built with.
    pub fn config(&self) -> LoopConfig {
        self.config
    }

    /// Drives `stage` until the loop is stopped through a [`LoopHandle`].
    ///
    /// Each outer iteration: sample the clock, clamp the frame delta, add
    /// it to the accumulator, poll input, integrate whole steps out of the
    /// accumulator, then render with the leftover fraction.
    pub fn run<S: GameStage>(&mut self, stage: &mut S) {
        let LoopConfig { step, max_frame } = self.config;

        self.running.store(true, Ordering::SeqCst);
        log::info!("fixed game loop started (step {step}s, clamp {max_frame}s)");

        let mut elapsed = 0.0_f64;
        let mut accumulator = 0.0_f64;
        let mut previous = self.clock.now();

        while self.running.load(Ordering::SeqCst) {
            let current = self.clock.now();
            let mut frame = current - previous;
            previous = current;

            if frame > max_frame {
                log::trace!("frame of {frame}s clamped to {max_frame}s");
                frame = max_frame;
            }
            accumulator += frame;

            stage.update_input();

            while accumulator >= step {
                stage.integrate(elapsed, step);
                elapsed += step;
                accumulator -= step;
            }

            // The leftover fraction of a step; always in [0, 1).
            stage.render(accumulator / step);
        }

        log::info!("fixed game loop stopped after {elapsed}s of simulated time");
    }
}
