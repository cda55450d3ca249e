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

use std::collections::VecDeque;

use approx::assert_relative_eq;

use super::*;
use crate::time::FrameClock;

/// A clock that advances by a scripted sequence of deltas, one per reading.
///
/// Once the script is exhausted the clock freezes, so subsequent frames
/// measure zero elapsed time.
struct ScriptedClock {
    now: f64,
    deltas: VecDeque<f64>,
}

impl ScriptedClock {
    /// The first reading consumes the first delta, so scripts conventionally
    /// start with `0.0` to anchor the loop's initial timestamp.
    fn new(deltas: &[f64]) -> Self {
        Self {
            now: 0.0,
            deltas: deltas.iter().copied().collect(),
        }
    }
}

impl FrameClock for ScriptedClock {
    fn now(&mut self) -> f64 {
        self.now += self.deltas.pop_front().unwrap_or(0.0);
        self.now
    }
}

/// Which callback fired, for order-of-invocation assertions.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    Input,
    Integrate,
    Render,
}

/// Records every callback invocation and stops the loop through its handle
/// after a fixed number of renders.
struct RecorderStage {
    handle: LoopHandle,
    stop_after_renders: usize,
    calls: Vec<Call>,
    /// `(elapsed, step)` for every integrate call.
    integrates: Vec<(f64, f64)>,
    /// Integrate calls per outer iteration.
    integrates_per_iter: Vec<usize>,
    iter_integrates: usize,
    alphas: Vec<f64>,
    running_seen_during_render: bool,
}

impl RecorderStage {
    fn new(handle: LoopHandle, stop_after_renders: usize) -> Self {
        Self {
            handle,
            stop_after_renders,
            calls: Vec::new(),
            integrates: Vec::new(),
            integrates_per_iter: Vec::new(),
            iter_integrates: 0,
            alphas: Vec::new(),
            running_seen_during_render: false,
        }
    }

    fn on_render(&mut self) {
        self.integrates_per_iter.push(self.iter_integrates);
        self.iter_integrates = 0;
        self.running_seen_during_render |= self.handle.is_running();
        if self.integrates_per_iter.len() >= self.stop_after_renders {
            self.handle.stop();
        }
    }
}

impl GameStage for RecorderStage {
    fn update_input(&mut self) {
        self.calls.push(Call::Input);
    }

    fn integrate(&mut self, elapsed: f64, step: f64) {
        self.calls.push(Call::Integrate);
        self.integrates.push((elapsed, step));
        self.iter_integrates += 1;
    }

    fn render(&mut self, alpha: f64) {
        self.calls.push(Call::Render);
        self.alphas.push(alpha);
        self.on_render();
    }
}

impl SemiFixedStage for RecorderStage {
    fn update_input(&mut self) {
        self.calls.push(Call::Input);
    }

    fn integrate(&mut self, elapsed: f64, delta: f64) {
        self.calls.push(Call::Integrate);
        self.integrates.push((elapsed, delta));
        self.iter_integrates += 1;
    }

    fn render(&mut self) {
        self.calls.push(Call::Render);
        self.on_render();
    }
}

// --- FIXED LOOP ---

#[test]
fn fixed_loop_matches_scripted_schedule() {
    // Scenario: step 1/60 s, clamp 0.25 s, frames of 20, 30, 16 and 500 ms.
    // The last frame is clamped to 250 ms, so the total simulated budget is
    // 0.316 s = 18.96 steps, of which exactly 18 whole steps integrate.
    let step = 1.0 / 60.0;
    let clock = ScriptedClock::new(&[0.0, 0.020, 0.030, 0.016, 0.500]);
    let mut game_loop = FixedGameLoop::new(clock, LoopConfig::new(step, 0.25));
    let mut stage = RecorderStage::new(game_loop.handle(), 4);

    game_loop.run(&mut stage);

    assert_eq!(
        stage.integrates.len(),
        18,
        "18 whole steps fit in the clamped 0.316 s budget"
    );
    assert_eq!(
        stage.integrates_per_iter,
        vec![1, 2, 0, 15],
        "integration bursts should follow the scripted frame times"
    );

    // The k-th integrate call observes (k - 1) whole steps of game time.
    for (k, &(elapsed, observed_step)) in stage.integrates.iter().enumerate() {
        assert_relative_eq!(elapsed, k as f64 * step, epsilon = 1e-9);
        assert_eq!(observed_step, step, "the fixed loop never varies its step");
    }

    // After 18 steps, 0.96 of a step is left in the accumulator.
    assert_relative_eq!(stage.alphas[3], 0.96, epsilon = 1e-9);
    for &alpha in &stage.alphas {
        assert!((0.0..1.0).contains(&alpha), "alpha {alpha} outside [0, 1)");
    }
}

#[test]
fn fixed_loop_clamp_bounds_integration_bursts() {
    // One monstrous 10 s stall. The clamp allows at most
    // ceil(max_frame / step) integrate calls in a single outer iteration.
    let step = 1.0 / 60.0;
    let max_frame = 0.25;
    let clock = ScriptedClock::new(&[0.0, 10.0, 10.0]);
    let mut game_loop = FixedGameLoop::new(clock, LoopConfig::new(step, max_frame));
    let mut stage = RecorderStage::new(game_loop.handle(), 2);

    game_loop.run(&mut stage);

    let bound = (max_frame / step).ceil() as usize;
    for (i, &n) in stage.integrates_per_iter.iter().enumerate() {
        assert!(
            n <= bound,
            "iteration {i} ran {n} integrate calls, clamp allows at most {bound}"
        );
    }
}

#[test]
fn fixed_loop_calls_back_in_order() {
    // One frame holding exactly two whole steps: input, the two integration
    // steps, then render. Binary-exact values keep the schedule unambiguous.
    let clock = ScriptedClock::new(&[0.0, 0.5]);
    let mut game_loop = FixedGameLoop::new(clock, LoopConfig::new(0.25, 1.0));
    let mut stage = RecorderStage::new(game_loop.handle(), 1);

    game_loop.run(&mut stage);

    assert_eq!(
        stage.calls,
        vec![Call::Input, Call::Integrate, Call::Integrate, Call::Render]
    );
    assert_eq!(stage.alphas, vec![0.0]);
}

#[test]
fn fixed_loop_stops_cooperatively() {
    let clock = ScriptedClock::new(&[0.0]);
    let mut game_loop = FixedGameLoop::new(clock, LoopConfig::default());
    let handle = game_loop.handle();
    assert!(!handle.is_running(), "loop has not started yet");

    let mut stage = RecorderStage::new(handle.clone(), 1);
    game_loop.run(&mut stage);

    assert!(stage.running_seen_during_render, "flag is set while running");
    assert!(!handle.is_running(), "stop() clears the flag");
    assert_eq!(
        stage.alphas.len(),
        1,
        "the iteration in flight completes before the loop exits"
    );
}

// --- SEMI-FIXED LOOP ---

#[test]
fn semi_fixed_drains_frame_in_substeps() {
    // 0.625 s of frame time at a 0.25 s step: two whole sub-steps and one
    // partial 0.125 s sub-step, all exactly representable.
    let clock = ScriptedClock::new(&[0.0, 0.625]);
    let mut game_loop = SemiFixedGameLoop::new(clock, LoopConfig::new(0.25, 1.0));
    let mut stage = RecorderStage::new(game_loop.handle(), 1);

    game_loop.run(&mut stage);

    assert_eq!(
        stage.integrates,
        vec![(0.0, 0.25), (0.25, 0.25), (0.5, 0.125)],
        "the frame should drain in capped sub-steps with a short tail"
    );
    assert_eq!(
        stage.calls.last(),
        Some(&Call::Render),
        "render follows once the frame is drained"
    );
}

#[test]
fn semi_fixed_clamps_long_frames() {
    // A 3 s stall clamped to 1 s integrates exactly four 0.25 s sub-steps.
    let clock = ScriptedClock::new(&[0.0, 3.0]);
    let mut game_loop = SemiFixedGameLoop::new(clock, LoopConfig::new(0.25, 1.0));
    let mut stage = RecorderStage::new(game_loop.handle(), 1);

    game_loop.run(&mut stage);

    assert_eq!(
        stage.integrates,
        vec![(0.0, 0.25), (0.25, 0.25), (0.5, 0.25), (0.75, 0.25)]
    );
}

// --- CONFIG ---

#[test]
fn loop_config_default_is_sixty_hertz() {
    let config = LoopConfig::default();
    assert_relative_eq!(config.step, 1.0 / 60.0);
    assert_relative_eq!(config.max_frame, 0.25);
}

#[test]
#[should_panic(expected = "loop step must be positive")]
fn loop_config_rejects_zero_step() {
    let _ = LoopConfig::new(0.0, 0.25);
}

#[test]
#[should_panic(expected = "must be at least one step")]
fn loop_config_rejects_clamp_below_step() {
    let _ = LoopConfig::new(0.1, 0.05);
}
