//! Fluent builder for constructing a [`Kennel`].

use std::path::Path;

use kn_behavior::{ARRIVAL_EPSILON, FoodBowl};
use kn_core::{BowlId, KennelConfig, SimClock, SimRng, Vec2};
use kn_pension::{Pension, SatisfactionAggregator};

use crate::{DogRoster, Kennel, SimError, SimResult};

/// Fluent builder for [`Kennel`].
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                        |
/// |-------------------------|------------------------------------------------|
/// | `.spawn_positions(v)`   | `dog_count` random points around the centre    |
/// | `.seed(s)`              | `config.sim.seed`                              |
///
/// # Example
///
/// ```rust,ignore
/// let mut kennel = KennelBuilder::from_file(Path::new("kennel.toml"))?
///     .seed(7)
///     .build()?;
/// kennel.run(&mut NoopObserver)?;
/// ```
pub struct KennelBuilder {
    config:    KennelConfig,
    positions: Option<Vec<Vec2>>,
}

impl KennelBuilder {
    pub fn new(config: KennelConfig) -> Self {
        Self { config, positions: None }
    }

    /// Load the configuration from a TOML file.
    pub fn from_file(path: &Path) -> SimResult<Self> {
        Ok(Self::new(KennelConfig::from_file(path)?))
    }

    /// Override the master seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.sim.seed = seed;
        self
    }

    /// Supply the starting position of each dog (must be length
    /// `dog_count`).
    pub fn spawn_positions(mut self, positions: Vec<Vec2>) -> Self {
        self.positions = Some(positions);
        self
    }

    /// Validate inputs, spawn the initial dogs and return a ready-to-run
    /// [`Kennel`].
    ///
    /// A bowl trigger radius that a halted dog cannot reach (smaller than
    /// `stopping_distance + ARRIVAL_EPSILON`) is raised to that distance.
    pub fn build(mut self) -> SimResult<Kennel> {
        let reach = self.config.dog.stopping_distance.max(0.0) + ARRIVAL_EPSILON;
        let radius = self.config.bowl.trigger_radius;
        if radius.is_nan() || radius < reach {
            tracing::warn!(
                trigger_radius = radius,
                raised_to = reach,
                "bowl trigger radius inside the stopping distance, raising it"
            );
            self.config.bowl.trigger_radius = reach;
        }

        let sim = &self.config.sim;
        if !sim.frame_duration_secs.is_finite() || sim.frame_duration_secs <= 0.0 {
            return Err(SimError::Config(format!(
                "frame_duration_secs must be positive, got {}",
                sim.frame_duration_secs
            )));
        }
        if sim.day_length_secs.is_nan() || sim.day_length_secs < 0.0 {
            return Err(SimError::Config(format!(
                "day_length_secs must not be negative, got {}",
                sim.day_length_secs
            )));
        }

        let dog_count = self.config.dog_count;
        if let Some(p) = &self.positions {
            if p.len() != dog_count {
                return Err(SimError::CountMismatch {
                    expected: dog_count,
                    got:      p.len(),
                    what:     "spawn positions",
                });
            }
        }

        let clock = SimClock::new(sim.frame_duration_secs);
        let frames_per_day = clock.frames_for_secs(sim.day_length_secs);
        let mut rng = SimRng::new(sim.seed);
        let pension = Pension::from_settings(&self.config.pension, &mut rng);
        let bowl = FoodBowl::new(BowlId(0), &self.config.bowl);

        let mut kennel = Kennel {
            clock,
            roster: DogRoster::new(),
            bowl,
            aggregator: SatisfactionAggregator::new(),
            pension,
            rng,
            frames_per_day,
            days: 0,
            config: self.config,
        };

        match self.positions {
            Some(positions) => {
                for position in positions {
                    kennel.spawn_dog(position);
                }
            }
            None => {
                for _ in 0..dog_count {
                    let position = kennel.random_spawn_point();
                    kennel.spawn_dog(position);
                }
            }
        }

        tracing::info!(
            pension = kennel.pension.name(),
            dogs = kennel.dog_count(),
            seed = kennel.config.sim.seed,
            "kennel ready"
        );
        Ok(kennel)
    }
}
