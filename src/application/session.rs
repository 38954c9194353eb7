use crate::application::TickClock;
use crate::config::Config;
use crate::domain::{FractalNoise, GenerationStats, GridSimulation, Pattern, TerrainProvider};
use crate::error::{Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{debug, info, trace, warn};

/// Running time spent on each terrain level before the next one rises.
const LEVEL_DURATION: Duration = Duration::from_secs(1);

/// Where the session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Clock stopped; the board may be painted.
    Editing,
    /// Terrain rises one level per second of running time.
    Constructing,
    /// Each tick advances one generation.
    Simulating,
}

/// Session owns the board, the clock and the terrain source for one run.
///
/// Renderers borrow it read-only; input handlers go through the edit
/// methods, which refuse to touch the board once the clock is running.
pub struct Session {
    config: Config,
    grid: GridSimulation,
    clock: TickClock,
    terrain: Box<dyn TerrainProvider>,
    rng: StdRng,
    phase: Phase,
    level: u32,
    generation: u64,
    last_stats: GenerationStats,
}

impl Session {
    /// Build a session with fractal-noise terrain seeded from the config.
    pub fn new(config: Config) -> Result<Self> {
        let mut rng = seeded_rng(config.seed);
        let noise = FractalNoise::new(
            &mut rng,
            config.noise_scale,
            config.noise_octaves,
            config.noise_falloff,
        );
        Self::build(config, Box::new(noise), rng)
    }

    /// Build a session over a caller-supplied terrain source.
    pub fn with_terrain(config: Config, terrain: Box<dyn TerrainProvider>) -> Result<Self> {
        let rng = seeded_rng(config.seed);
        Self::build(config, terrain, rng)
    }

    fn build(config: Config, terrain: Box<dyn TerrainProvider>, rng: StdRng) -> Result<Self> {
        config.validate()?;
        let grid = GridSimulation::new(config.columns, config.rows, config.max_building_height)?;
        let clock = TickClock::new(config.tick_interval())?;

        let mut session = Self {
            config,
            grid,
            clock,
            terrain,
            rng,
            phase: Phase::Editing,
            level: 1,
            generation: 0,
            last_stats: GenerationStats::default(),
        };
        let max_level = session.config.max_terrain_level;
        session.grid.construct_level(session.terrain.as_ref(), 1, max_level);
        session.grid.randomize(&mut session.rng);

        info!(
            columns = session.config.columns,
            rows = session.config.rows,
            tick_seconds = session.config.tick_seconds,
            "session created"
        );
        Ok(session)
    }

    /// Settings fixed at construction.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read-only board for renderers.
    pub fn grid(&self) -> &GridSimulation {
        &self.grid
    }

    /// The session's only tick clock.
    pub fn clock(&self) -> &TickClock {
        &self.clock
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_editing(&self) -> bool {
        matches!(self.phase, Phase::Editing)
    }

    /// Current terrain level ceiling.
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Generations committed since `start()`.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Births and deaths of the latest committed generation.
    pub const fn last_stats(&self) -> GenerationStats {
        self.last_stats
    }

    /// Running time since `start()`; zero while editing.
    pub fn running_time(&self) -> Duration {
        self.clock.elapsed()
    }

    /// Leave edit mode and start the clock.
    pub fn start(&mut self) {
        if !self.is_editing() {
            return;
        }
        self.clock.start();
        self.phase = if self.level >= self.config.max_terrain_level {
            Phase::Simulating
        } else {
            Phase::Constructing
        };
        info!(phase = ?self.phase, population = self.grid.population(), "session started");
    }

    /// Stop the clock and return to edit mode with a flat, empty skyline.
    pub fn reset(&mut self) {
        self.clock.reset();
        self.phase = Phase::Editing;
        self.level = 1;
        self.generation = 0;
        self.last_stats = GenerationStats::default();
        self.grid.reset_buildings();
        let max_level = self.config.max_terrain_level;
        self.grid.construct_level(self.terrain.as_ref(), 1, max_level);
        info!("session reset");
    }

    /// Feed one frame, then ease every column once.
    ///
    /// While constructing, terrain follows running time and ticks are
    /// consumed without effect. While simulating, every new tick advances
    /// one generation. Returns the number of generations applied.
    pub fn update(&mut self, frame: Duration) -> u64 {
        self.clock.advance(frame);
        let ticks = self.clock.take_new_ticks();

        let generations = match self.phase {
            Phase::Editing => 0,
            Phase::Constructing => {
                self.advance_construction();
                0
            }
            Phase::Simulating => {
                for _ in 0..ticks {
                    self.last_stats = self.grid.step();
                    self.generation += 1;
                }
                ticks
            }
        };

        self.grid.advance_animation(self.config.easing);
        generations
    }

    /// Level `n` stands during second `n - 1` of running time; simulation
    /// begins once every level has had its second.
    fn advance_construction(&mut self) {
        let elapsed = self.clock.elapsed();
        let max_level = self.config.max_terrain_level;
        let target = (elapsed.as_secs() + 1).min(u64::from(max_level)) as u32;

        while self.level < target {
            self.level += 1;
            self.grid
                .construct_level(self.terrain.as_ref(), self.level, max_level);
            debug!(level = self.level, "terrain level raised");
        }

        if elapsed >= LEVEL_DURATION * max_level {
            self.phase = Phase::Simulating;
            info!(level = self.level, "terrain complete, simulating");
        }
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.clock.is_running() {
            warn!("edit rejected while running");
            return Err(Error::EditWhileRunning);
        }
        Ok(())
    }

    /// Refill the board at random. Edit mode only.
    pub fn randomize(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.grid.randomize(&mut self.rng);
        Ok(())
    }

    /// Kill every cell. Edit mode only.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.grid.clear();
        Ok(())
    }

    /// Set one cell. Returns whether it changed.
    pub fn paint(&mut self, column: usize, row: usize, alive: bool) -> Result<bool> {
        self.ensure_editable()?;
        let changed = self.grid.set_alive(column, row, alive)?;
        trace!(column, row, alive, changed, "paint");
        Ok(changed)
    }

    /// Stamp `pattern` centred on (column, row). Returns the cells placed.
    pub fn stamp(&mut self, pattern: &Pattern, column: usize, row: usize) -> Result<usize> {
        self.ensure_editable()?;
        let placed = pattern.stamp_centered(&mut self.grid, column, row);
        trace!(pattern = pattern.name, column, row, placed, "stamp");
        Ok(placed)
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
