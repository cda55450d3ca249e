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

// Ember runtime demo
// A headless particle fountain: entities with Position/Velocity/Lifetime
// integrated under a fixed timestep, rendered through a state cache that
// talks to a logging backend instead of a GPU.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::Result;
use ember_core::game_loop::{FixedGameLoop, GameStage, LoopConfig, LoopHandle};
use ember_core::renderer::{
    BlendFactor, CompareFunction, CullFace, Face, PolygonMode, RenderStateBackend,
    RenderStateCache,
};
use ember_core::time::SteadyClock;
use ember_core::Stopwatch;
use ember_data::ecs::{
    Component, ComponentManager, Entity, EntityListener, EntityManager, Signature,
};

#[derive(Debug, Clone, Copy)]
struct Position {
    x: f32,
    y: f32,
}
impl Component for Position {}

#[derive(Debug, Clone, Copy)]
struct Velocity {
    x: f32,
    y: f32,
}
impl Component for Velocity {}

#[derive(Debug, Clone, Copy)]
struct Lifetime {
    remaining: f32,
}
impl Component for Lifetime {}

/// Entity and component managers glued together so that signatures stay in
/// lockstep with storage membership.
struct World {
    entities: EntityManager,
    components: ComponentManager,
}

impl World {
    fn new() -> Self {
        let mut components = ComponentManager::new();
        components.register::<Position>();
        components.register::<Velocity>();
        components.register::<Lifetime>();
        Self {
            entities: EntityManager::new(),
            components,
        }
    }

    fn spawn(&mut self) -> Entity {
        self.entities.create()
    }

    fn despawn(&mut self, entity: Entity) {
        self.components.detach_all(entity);
        self.entities.set_signature(entity, Signature::EMPTY);
        self.entities.destroy(entity);
    }

    fn attach<T: Component>(&mut self, entity: Entity, value: T) {
        self.components.attach(entity, value);
        let mut signature = self.entities.get_signature(entity);
        signature.set(self.components.kind_of::<T>());
        self.entities.set_signature(entity, signature);
    }
}

/// Logs lifecycle traffic; registered with the entity manager so the demo
/// shows the listener path end to end.
struct LifecycleLogger;

impl EntityListener for LifecycleLogger {
    fn on_created(&mut self, entity: Entity) {
        log::trace!("spawned {entity}");
    }

    fn on_destroyed(&mut self, entity: Entity) {
        log::trace!("despawned {entity}");
    }
}

/// Counts raw device writes, standing in for a GL context. Every call that
/// reaches it is a state change the cache could not elide.
#[derive(Default)]
struct CountingBackend {
    writes: usize,
}

impl RenderStateBackend for CountingBackend {
    fn set_depth_test_enabled(&mut self, enabled: bool) {
        self.writes += 1;
        log::debug!("device: depth test {enabled}");
    }

    fn set_depth_compare(&mut self, compare: CompareFunction) {
        self.writes += 1;
        log::debug!("device: depth compare {compare:?}");
    }

    fn set_blend_enabled(&mut self, enabled: bool) {
        self.writes += 1;
        log::debug!("device: blend {enabled}");
    }

    fn set_blend_function(&mut self, source: BlendFactor, destination: BlendFactor) {
        self.writes += 1;
        log::debug!("device: blend function {source:?}/{destination:?}");
    }

    fn set_blend_equation(&mut self, equation: ember_core::renderer::BlendOperation) {
        self.writes += 1;
        log::debug!("device: blend equation {equation:?}");
    }

    fn set_cull_enabled(&mut self, enabled: bool) {
        self.writes += 1;
        log::debug!("device: cull {enabled}");
    }

    fn set_cull_face(&mut self, face: Face) {
        self.writes += 1;
        log::debug!("device: cull face {face:?}");
    }

    fn set_polygon_mode(&mut self, mode: PolygonMode) {
        self.writes += 1;
        log::debug!("device: polygon mode {mode:?}");
    }
}

const GRAVITY: f32 = -9.81;
const SPAWN_PER_STEP: usize = 4;
const PARTICLE_LIFETIME: f32 = 1.5;
const SIMULATED_SECONDS: f64 = 3.0;

struct ParticleStage {
    world: World,
    cache: RenderStateCache<CountingBackend>,
    handle: LoopHandle,
    spawned: usize,
    expired: usize,
    frames: usize,
    seed: u32,
}

impl ParticleStage {
    fn new(world: World, cache: RenderStateCache<CountingBackend>, handle: LoopHandle) -> Self {
        Self {
            world,
            cache,
            handle,
            spawned: 0,
            expired: 0,
            frames: 0,
            seed: 0x2545_f491,
        }
    }

    /// xorshift, plenty for scattering demo particles.
    fn next_unit(&mut self) -> f32 {
        self.seed ^= self.seed << 13;
        self.seed ^= self.seed >> 17;
        self.seed ^= self.seed << 5;
        (self.seed >> 8) as f32 / (1u32 << 24) as f32
    }

    fn spawn_particle(&mut self) {
        let vx = self.next_unit() * 4.0 - 2.0;
        let vy = self.next_unit() * 6.0 + 4.0;
        let entity = self.world.spawn();
        self.world.attach(entity, Position { x: 0.0, y: 0.0 });
        self.world.attach(entity, Velocity { x: vx, y: vy });
        self.world.attach(
            entity,
            Lifetime {
                remaining: PARTICLE_LIFETIME,
            },
        );
        self.spawned += 1;
    }
}

impl GameStage for ParticleStage {
    fn update_input(&mut self) {
        // Headless: nothing to poll.
    }

    fn integrate(&mut self, elapsed: f64, step: f64) {
        if elapsed >= SIMULATED_SECONDS {
            self.handle.stop();
            return;
        }

        for _ in 0..SPAWN_PER_STEP {
            self.spawn_particle();
        }

        let dt = step as f32;
        let moved: Vec<(Entity, f32, f32)> = self
            .world
            .components
            .storage::<Velocity>()
            .iter()
            .map(|(e, v)| (e, v.x * dt, v.y * dt))
            .collect();
        for (entity, dx, dy) in moved {
            let position = self.world.components.get_mut::<Position>(entity);
            position.x += dx;
            position.y += dy;
            self.world.components.get_mut::<Velocity>(entity).y += GRAVITY * dt;
        }

        let mut expired = Vec::new();
        for (entity, lifetime) in self.world.components.storage_mut::<Lifetime>().iter_mut() {
            lifetime.remaining -= dt;
            if lifetime.remaining <= 0.0 {
                expired.push(entity);
            }
        }
        for entity in expired {
            self.world.despawn(entity);
            self.expired += 1;
        }
    }

    fn render(&mut self, alpha: f64) {
        self.frames += 1;

        // The same pipeline state every frame; after the first frame the
        // cache swallows all of it.
        self.cache.enable_depth_test(true);
        self.cache.set_depth_compare(CompareFunction::LessEqual);
        self.cache.enable_blend(true);
        self.cache
            .set_blend_function(BlendFactor::SrcAlpha, BlendFactor::OneMinusSrcAlpha);
        self.cache.set_cull_face(CullFace::Back);

        log::debug!(
            "frame {}: {} live particles, alpha {alpha:.3}",
            self.frames,
            self.world.entities.len()
        );
    }
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut world = World::new();
    let logger: Rc<RefCell<dyn EntityListener>> = Rc::new(RefCell::new(LifecycleLogger));
    world.entities.register_listener(&logger);

    let cache = RenderStateCache::new(CountingBackend::default());
    let config = LoopConfig::default();
    let mut game_loop = FixedGameLoop::new(SteadyClock::new(), config);
    let mut stage = ParticleStage::new(world, cache, game_loop.handle());

    log::info!(
        "simulating {SIMULATED_SECONDS} s of particles at {} Hz",
        (1.0 / config.step).round()
    );
    let wall = Stopwatch::new();
    game_loop.run(&mut stage);

    let writes = stage.cache.into_backend().writes;
    log::info!(
        "done in {} ms wall: {} spawned, {} expired, {} frames, {} device writes",
        wall.elapsed_ms(),
        stage.spawned,
        stage.expired,
        stage.frames,
        writes
    );
    Ok(())
}
