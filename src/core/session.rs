use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::{
    CaptureZone, ContactPipeline, EventQueue, GameConfig, Movement, ObjectPool, Score,
    SwallowEvent, SwallowResolver,
};
use crate::Result;

/// Summary of one call to [`GameSession::tick`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    /// Time step actually simulated, after clamping
    pub dt: f32,

    /// False if the session was paused and only the zone moved
    pub simulated: bool,

    pub pulled: usize,

    pub captured: usize,

    pub removed: usize,

    pub contacts: usize,

    pub contacts_exhausted: bool,
}

/// One game: the zone, the objects it hunts, the score and the clock.
///
/// A session starts paused. While paused, `tick` only moves the zone so the
/// player can position it; once started, every tick resolves swallowing and
/// then steps the physics.
#[derive(Debug)]
pub struct GameSession {
    config: GameConfig,

    zone: CaptureZone,

    pool: ObjectPool,

    score: Score,

    swallow: SwallowResolver,

    contacts: ContactPipeline,

    events: EventQueue,

    rng: StdRng,

    running: bool,

    /// Simulated time while running, in seconds
    elapsed: f32,
}

impl GameSession {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut pool = ObjectPool::new(config.spawn.pool_capacity);
        pool.reset_all(&config.spawn, &mut rng)?;

        let session = Self {
            zone: CaptureZone::new(&config.zone)?,
            pool,
            score: Score::default(),
            swallow: SwallowResolver::new(config.swallow.clone())?,
            contacts: ContactPipeline::new(&config.contact)?,
            events: EventQueue::new(),
            rng,
            running: false,
            elapsed: 0.0,
            config,
        };

        tracing::info!(
            objects = session.pool.len(),
            capacity = session.pool.capacity(),
            radius = session.zone.get_radius(),
            seed = ?session.config.seed,
            "game session created"
        );
        Ok(session)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_movement(&mut self, forward: bool, backward: bool, left: bool, right: bool) {
        self.zone.set_movement(forward, backward, left, right);
    }

    pub fn set_movement_flags(&mut self, movement: Movement) {
        self.zone.set_movement_flags(movement);
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            tracing::info!(elapsed = self.elapsed, "game started");
        }
    }

    pub fn pause(&mut self) {
        if self.running {
            self.running = false;
            tracing::info!(elapsed = self.elapsed, score = self.score.get(), "game paused");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advances the game by `dt` seconds, capped at the configured maximum step
    pub fn tick(&mut self, dt: f32) -> TickReport {
        let dt = dt.clamp(0.0, self.config.max_time_step);
        let mut report = TickReport {
            dt,
            ..TickReport::default()
        };

        if !self.running {
            self.zone.update(dt);
            return report;
        }

        self.events.clear();
        self.elapsed += dt;
        self.zone.update(dt);

        let swallowed = self.swallow.resolve(
            &mut self.zone,
            &mut self.pool,
            &mut self.score,
            &mut self.events,
        );
        let stepped = self.contacts.step(&mut self.pool, dt);

        report.simulated = true;
        report.pulled = swallowed.pulled;
        report.captured = swallowed.captured;
        report.removed = swallowed.removed;
        report.contacts = stepped.contacts;
        report.contacts_exhausted = stepped.exhausted;
        report
    }

    /// Back to the start: paused, zero score and time, fresh zone and objects
    pub fn reset(&mut self) -> Result<()> {
        self.pool.reset_all(&self.config.spawn, &mut self.rng)?;
        self.zone.reset(&self.config.zone)?;
        self.score.set(0);
        self.events.clear();
        self.elapsed = 0.0;
        self.running = false;

        tracing::info!(objects = self.pool.len(), "game session reset");
        Ok(())
    }

    pub fn zone(&self) -> &CaptureZone {
        &self.zone
    }

    pub fn zone_mut(&mut self) -> &mut CaptureZone {
        &mut self.zone
    }

    pub fn pool(&self) -> &ObjectPool {
        &self.pool
    }

    pub fn pool_mut(&mut self) -> &mut ObjectPool {
        &mut self.pool
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Events raised by the last running tick
    pub fn events(&self) -> &EventQueue {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SwallowEvent> {
        self.events.drain().collect()
    }

    pub fn live_count(&self) -> usize {
        self.pool.len()
    }

    /// True once every object has been swallowed
    pub fn is_cleared(&self) -> bool {
        self.pool.is_empty()
    }
}
