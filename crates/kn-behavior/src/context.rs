//! Everything a state may read or mutate during one machine call.

use kn_core::{DogId, DogRng, HungerConfig, Vec2};
use kn_needs::{NeedController, NeedType};

use crate::{BehaviorEvent, Bowl, Navigator};

/// Dog-owned flags and counters that states read and write.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DogSignals {
    /// Set by the bowl's trigger zone when the dog's paws reach it; cleared
    /// by the eating state.
    pub arrived_at_bowl: bool,
    /// Last speed read off the navigator, for locomotion display.
    pub locomotion_speed: f32,
    /// Cosmetic idle animation picked on the last entry into Idle.
    pub idle_variant: u8,
    /// Meals eaten since the dog was created.
    pub meals: u32,
}

/// Mutable borrows of one dog's parts, built fresh for every machine call.
///
/// Collaborators are optional: a state that needs a missing navigator or
/// bowl returns early without transitioning.
///
/// # Lifetimes
///
/// All borrows live for one `Dog::process` call.  The dog hands out its
/// state machine and this context as disjoint borrows of its own fields.
pub struct DogContext<'a> {
    pub dog: DogId,

    /// Seconds simulated by this call.
    pub dt: f32,

    pub needs: &'a mut NeedController,

    pub navigator: Option<&'a mut dyn Navigator>,

    pub bowl: Option<&'a mut dyn Bowl>,

    /// Eat cost and fallback cooldown.
    pub hunger: &'a HungerConfig,

    pub rng: &'a mut DogRng,

    pub signals: &'a mut DogSignals,

    pub events: &'a mut Vec<BehaviorEvent>,
}

impl DogContext<'_> {
    #[inline]
    pub fn bowl_usable(&self) -> bool {
        self.bowl.as_deref().is_some_and(|b| b.is_usable())
    }

    #[inline]
    pub fn bowl_position(&self) -> Option<Vec2> {
        self.bowl.as_deref().map(|b| b.position())
    }

    /// Current navigator velocity, zero without a navigator.
    pub fn velocity(&self) -> Vec2 {
        self.navigator.as_deref().map_or(Vec2::ZERO, |n| n.velocity())
    }

    /// Send the navigator toward the bowl.  Returns `false` when either
    /// collaborator is missing.
    pub fn move_to_bowl(&mut self) -> bool {
        let Some(target) = self.bowl_position() else {
            return false;
        };
        match self.navigator.as_deref_mut() {
            Some(nav) => {
                nav.move_to(target);
                true
            }
            None => false,
        }
    }

    /// Halt the navigator, if any.
    pub fn stop(&mut self) {
        if let Some(nav) = self.navigator.as_deref_mut() {
            nav.stop();
        }
    }

    /// Eat one meal: hunger gains its `eat_gain`, the bowl loses `eat_cost`.
    ///
    /// Requires a usable bowl and a hunger need; otherwise nothing changes
    /// and `None` is returned.
    pub fn eat(&mut self) -> Option<f32> {
        if !self.bowl_usable() || !self.needs.is_present(NeedType::Hunger) {
            return None;
        }
        let gain = self.needs.eat_once()?;
        let cost = self.hunger.eat_cost as f32;
        if let Some(bowl) = self.bowl.as_deref_mut() {
            bowl.decrease_quantity(cost);
        }
        self.signals.meals += 1;
        tracing::debug!(dog = %self.dog, gain, cost, "meal eaten");
        Some(gain)
    }

    /// Seconds one meal lasts, from the hunger need's parameters.
    pub fn eat_cooldown(&self) -> f32 {
        self.needs
            .hunger()
            .and_then(|n| n.hunger_params())
            .map_or(self.hunger.eat_cooldown.max(0.0), |p| p.eat_cooldown)
    }

    #[inline]
    pub fn emit(&mut self, event: BehaviorEvent) {
        self.events.push(event);
    }
}
