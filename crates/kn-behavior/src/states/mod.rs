//! The five dog behavior states.

mod eating;
mod hungry;
mod idle;
mod move_to_bowl;
mod walk;

pub use eating::EatingState;
pub use hungry::HungryState;
pub use idle::{IDLE_VARIANTS, IdleState};
pub use move_to_bowl::MoveToBowlState;
pub use walk::WalkState;
