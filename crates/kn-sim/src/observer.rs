//! Kennel observer trait for progress reporting and data collection.

use kn_behavior::BehaviorEvent;
use kn_core::{DogId, Frame};
use kn_pension::{DayRewards, Pension};

/// Callbacks invoked by [`Kennel::run`][crate::Kennel::run] at key points in
/// the frame loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: meal counter
///
/// ```rust,ignore
/// struct MealCounter(usize);
///
/// impl KennelObserver for MealCounter {
///     fn on_dog_event(&mut self, _frame: Frame, _dog: DogId, event: &BehaviorEvent) {
///         if matches!(event, BehaviorEvent::MealStarted { .. }) {
///             self.0 += 1;
///         }
///     }
/// }
/// ```
pub trait KennelObserver {
    /// Called at the very start of each frame, before any dog moves.
    fn on_frame_start(&mut self, _frame: Frame) {}

    /// Called for every event a dog emitted this frame, oldest first.
    fn on_dog_event(&mut self, _frame: Frame, _dog: DogId, _event: &BehaviorEvent) {}

    /// Called at the end of each frame with the freshly recomputed
    /// pension-wide satisfaction.
    fn on_frame_end(&mut self, _frame: Frame, _satisfaction: f32) {}

    /// Called when an in-game day ends, after its rewards were paid.
    fn on_day_end(&mut self, _day: u64, _rewards: &DayRewards, _pension: &Pension) {}

    /// Called once after the final frame of [`Kennel::run`][crate::Kennel::run].
    fn on_sim_end(&mut self, _final_frame: Frame, _pension: &Pension) {}
}

/// A [`KennelObserver`] that does nothing.
pub struct NoopObserver;

impl KennelObserver for NoopObserver {}
