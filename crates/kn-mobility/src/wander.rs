//! Idle roaming.

use kn_behavior::{Countdown, Navigator};
use kn_core::{DogConfig, DogRng, Vec2};

use crate::KinematicAgent;

/// Attempts at finding a destination far enough from the previous one.
const MAX_POINT_TRIES: usize = 10;

/// Pause before retrying when no destination could be found.
const RETRY_COOLDOWN_SECS: f32 = 1.0;

/// What [`Wander::process`] did this frame.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum WanderAction {
    /// Stopped in place to sniff for `secs` seconds.
    Sniff { secs: f32 },
    /// Sent the agent to a new point at the given speed.
    Destination { point: Vec2, speed: f32 },
    /// No acceptable point found; will retry shortly.
    Retry,
}

/// Picks random destinations around the pension centre while the dog idles.
///
/// Between two destinations the dog waits a random cooldown.  Once arrived
/// and rested it either sniffs in place for a while or heads to a new point
/// within `range` of the centre, at a random walking speed.
#[derive(Clone, Debug)]
pub struct Wander {
    center:           Vec2,
    config:           DogConfig,
    cooldown:         f32,
    sniff:            Option<Countdown>,
    last_destination: Option<Vec2>,
}

impl Wander {
    pub fn new(center: Vec2, config: &DogConfig, rng: &mut DogRng) -> Self {
        let cooldown = sample(rng, config.cooldown_min, config.cooldown_max);
        Self {
            center,
            config: config.clone(),
            cooldown,
            sniff: None,
            last_destination: None,
        }
    }

    /// Seconds left before the next destination may be picked.
    #[inline]
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    #[inline]
    pub fn is_sniffing(&self) -> bool {
        self.sniff.is_some()
    }

    #[inline]
    pub fn last_destination(&self) -> Option<Vec2> {
        self.last_destination
    }

    /// One frame of roaming.  `idle` tells whether the dog's machine is in
    /// Idle; roaming never starts outside it.
    pub fn process(
        &mut self,
        dt:    f32,
        agent: &mut KinematicAgent,
        idle:  bool,
        rng:   &mut DogRng,
    ) -> Option<WanderAction> {
        if self.cooldown > 0.0 && dt.is_finite() && dt > 0.0 {
            self.cooldown -= dt;
        }

        if let Some(sniff) = self.sniff.as_mut() {
            if !sniff.tick(dt) {
                return None;
            }
            self.sniff = None;
            agent.set_stopped(false);
            return Some(self.choose_destination(agent, rng));
        }

        if agent.is_stopped() || !idle || agent.path_pending() {
            return None;
        }
        if !agent.has_arrived() || self.cooldown > 0.0 {
            return None;
        }

        if rng.random::<f32>() < self.config.sniff_chance {
            let secs = sample(rng, self.config.sniff_min_secs, self.config.sniff_max_secs);
            agent.set_stopped(true);
            self.sniff = Some(Countdown::new(secs));
            return Some(WanderAction::Sniff { secs });
        }
        Some(self.choose_destination(agent, rng))
    }

    /// Send the agent to a fresh random point and restart the cooldown.
    pub fn choose_destination(&mut self, agent: &mut KinematicAgent, rng: &mut DogRng) -> WanderAction {
        let Some(point) = self.random_point(rng) else {
            self.cooldown = RETRY_COOLDOWN_SECS;
            return WanderAction::Retry;
        };
        let speed = sample(rng, self.config.min_walk_speed, self.config.max_walk_speed);
        agent.set_speed(speed);
        agent.move_to(point);
        self.last_destination = Some(point);
        self.cooldown = sample(rng, self.config.cooldown_min, self.config.cooldown_max);
        tracing::trace!(%point, speed, "wander destination");
        WanderAction::Destination { point, speed }
    }

    fn random_point(&self, rng: &mut DogRng) -> Option<Vec2> {
        let range = self.config.wander_range.max(0.0);
        for _ in 0..MAX_POINT_TRIES {
            let point = self.center + unit_disk(rng) * range;
            if let Some(last) = self.last_destination {
                if point.distance(last) < self.config.min_distance_from_last_point {
                    continue;
                }
            }
            return Some(point);
        }
        None
    }
}

/// Uniform sample in `[lo, hi)`, or `lo` when the range is empty.
fn sample(rng: &mut DogRng, lo: f32, hi: f32) -> f32 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}

/// Uniform point inside the unit disk (rejection sampling).
fn unit_disk(rng: &mut DogRng) -> Vec2 {
    loop {
        let p = Vec2::new(rng.gen_range(-1.0f32..=1.0), rng.gen_range(-1.0f32..=1.0));
        if p.length() <= 1.0 {
            return p;
        }
    }
}
