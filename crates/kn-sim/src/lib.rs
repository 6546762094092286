//! `kn-sim`: frame loop orchestrator for the kennel simulation.
//!
//! # Frame loop
//!
//! ```text
//! for frame in 0..config.sim.total_frames:
//!   for each dog (ascending DogId):
//!     ① Roam    : Wander picks a destination or a sniff while the dog is Idle.
//!     ② Move    : KinematicAgent::step(dt).
//!     ③ Trigger : an Eating dog within trigger_radius of the bowl is told
//!                 it arrived.
//!     ④ Behave  : Dog::process(dt, bowl): need decay, urgency, state machine.
//!     ⑤ Report  : drained dog events go to the observer.
//!   ⑥ Aggregate : SatisfactionAggregator::recompute over the roster.
//!   ⑦ Day end   : every day_length_secs, DayRewards paid into the Pension.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                   |
//! |-----------|----------------------------------------------------------|
//! | `fx-hash` | `needs_snapshot` returns an `FxHashMap` (via kn-pension). |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use kn_core::KennelConfig;
//! use kn_sim::{KennelBuilder, NoopObserver};
//!
//! let mut kennel = KennelBuilder::new(KennelConfig::default()).build()?;
//! kennel.run(&mut NoopObserver)?;
//! println!("{}", kennel.pension);
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod roster;
pub mod sim;

#[cfg(test)]
mod tests;

pub use builder::KennelBuilder;
pub use error::{SimError, SimResult};
pub use observer::{KennelObserver, NoopObserver};
pub use roster::{DogRoster, KennelDog, KennelDogCore};
pub use sim::Kennel;
