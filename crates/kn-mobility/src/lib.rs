//! `kn-mobility`: moving dogs around the pension floor.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                            |
//! |------------|---------------------------------------------------------------------|
//! | [`agent`]  | `KinematicAgent`: straight-line `Navigator` stepped once per frame |
//! | [`wander`] | `Wander`: idle roaming: pauses, sniffing, random destinations      |
//!
//! # Movement model
//!
//! There is no path planning.  A [`KinematicAgent`] heads straight for its
//! destination at its current speed and halts once within its stopping
//! distance, which is exactly the arrival rule the behavior states test:
//!
//! 1. A state (or [`Wander`]) calls `Navigator::move_to(target)`.
//! 2. The orchestrator calls `KinematicAgent::step(dt)` once per frame,
//!    before the dog's own update.
//! 3. `remaining_distance <= stopping_distance + ARRIVAL_EPSILON` then reads
//!    as arrived, and the velocity drops to zero.

pub mod agent;
pub mod wander;

#[cfg(test)]
mod tests;

pub use agent::KinematicAgent;
pub use wander::{Wander, WanderAction};
