//! Notifications queued by a dog for its owner.

use kn_needs::NeedEvent;

use crate::StateTag;

#[derive(Clone, Debug, PartialEq)]
pub enum BehaviorEvent {
    StateChanged { from: StateTag, to: StateTag },

    /// Idle was entered with this cosmetic variant (`0..IDLE_VARIANTS`).
    IdleVariant(u8),

    /// A meal began: hunger gained `gain`, the bowl lost `cost`.
    MealStarted { gain: f32, cost: u32 },

    /// The meal hold elapsed.
    MealFinished,

    /// Eating was left before the meal hold elapsed.
    MealInterrupted,

    /// Forwarded from the dog's need controller.
    Need(NeedEvent),
}
