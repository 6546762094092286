//! The navigation collaborator.

use kn_core::Vec2;

/// Slack added to the stopping distance when testing for arrival.
pub const ARRIVAL_EPSILON: f32 = 0.1;

/// Moves a dog around the pension.
///
/// The behavior core only issues move commands and reads arrival status; it
/// never computes paths.  Any path planner (or the straight-line
/// `KinematicAgent` in kn-mobility) can sit behind this trait.
pub trait Navigator {
    /// Set a new destination.  Repeating the current destination is cheap.
    fn move_to(&mut self, target: Vec2);

    /// `true` while the agent has a destination it has not given up on.
    fn has_path(&self) -> bool;

    /// `true` while a path request is still being computed.
    fn path_pending(&self) -> bool;

    fn remaining_distance(&self) -> f32;

    fn stopping_distance(&self) -> f32;

    fn velocity(&self) -> Vec2;

    /// Drop the current path and halt.
    fn stop(&mut self);

    /// No path left to follow, or within `stopping_distance + ARRIVAL_EPSILON`
    /// of the destination.
    fn has_arrived(&self) -> bool {
        !self.has_path() || self.remaining_distance() <= self.stopping_distance() + ARRIVAL_EPSILON
    }
}
