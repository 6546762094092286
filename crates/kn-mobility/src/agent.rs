//! Straight-line navigator.

use kn_behavior::Navigator;
use kn_core::{DogConfig, Vec2};

/// A point agent on the ground plane.
///
/// An agent is either **idle** (`destination == None`) or **heading** to a
/// destination.  A heading agent keeps its destination after it halts inside
/// the stopping distance, so `has_path` stays true and arrival is read from
/// `remaining_distance`, as with a navmesh agent.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicAgent {
    position:          Vec2,
    destination:       Option<Vec2>,
    velocity:          Vec2,
    speed:             f32,
    stopping_distance: f32,
    is_stopped:        bool,
}

impl KinematicAgent {
    /// An idle agent at `position`, moving at `config.base_speed`.
    pub fn new(position: Vec2, config: &DogConfig) -> Self {
        Self {
            position,
            destination: None,
            velocity: Vec2::ZERO,
            speed: config.base_speed.max(0.0),
            stopping_distance: config.stopping_distance.max(0.0),
            is_stopped: false,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Negative speeds are treated as 0.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = if speed.is_nan() { 0.0 } else { speed.max(0.0) };
    }

    pub fn set_stopping_distance(&mut self, distance: f32) {
        self.stopping_distance = distance.max(0.0);
    }

    /// A stopped agent keeps its destination but does not move.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.is_stopped
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.is_stopped = stopped;
        if stopped {
            self.velocity = Vec2::ZERO;
        }
    }

    /// Move instantly, keeping the destination.
    pub fn teleport(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Advance one frame of `dt` seconds toward the destination.
    pub fn step(&mut self, dt: f32) {
        self.velocity = Vec2::ZERO;
        if self.is_stopped || !dt.is_finite() || dt <= 0.0 {
            return;
        }
        let Some(target) = self.destination else {
            return;
        };
        let dist = self.position.distance(target);
        let travel = (dist - self.stopping_distance).min(self.speed * dt);
        if travel <= 0.0 {
            return;
        }
        let next = self.position.move_towards(target, travel);
        self.velocity = (next - self.position) * (1.0 / dt);
        self.position = next;
    }
}

impl Navigator for KinematicAgent {
    fn move_to(&mut self, target: Vec2) {
        self.destination = Some(target);
    }

    fn has_path(&self) -> bool {
        self.destination.is_some()
    }

    fn path_pending(&self) -> bool {
        false
    }

    fn remaining_distance(&self) -> f32 {
        self.destination.map_or(0.0, |d| self.position.distance(d))
    }

    fn stopping_distance(&self) -> f32 {
        self.stopping_distance
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn stop(&mut self) {
        self.destination = None;
        self.velocity = Vec2::ZERO;
    }
}
