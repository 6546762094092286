use crate::{BehaviorEvent, Countdown, DogContext, DogState, StateTag};

/// At (or closing in on) the bowl, eating one meal.
///
/// The dog keeps walking to the bowl until the trigger zone reports its paws
/// inside (`signals.arrived_at_bowl`).  It then stops, eats once and holds
/// for the meal cooldown before going back to Idle.  The hold is a
/// [`Countdown`] ticked by this state, so the rest of the simulation keeps
/// running meanwhile.
#[derive(Debug, Default)]
pub struct EatingState {
    meal: Option<Countdown>,
}

impl EatingState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The running meal hold, if a meal has started.
    #[inline]
    pub fn meal(&self) -> Option<&Countdown> {
        self.meal.as_ref()
    }
}

impl DogState for EatingState {
    fn tag(&self) -> StateTag {
        StateTag::Eating
    }

    fn enter(&mut self, ctx: &mut DogContext<'_>) {
        ctx.signals.arrived_at_bowl = false;
        self.meal = None;
    }

    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag> {
        if let Some(meal) = self.meal.as_mut() {
            if !meal.tick(ctx.dt) {
                return None;
            }
            self.meal = None;
            ctx.signals.arrived_at_bowl = false;
            ctx.emit(BehaviorEvent::MealFinished);
            tracing::debug!(dog = %ctx.dog, "meal finished");
            return Some(StateTag::Idle);
        }

        if !ctx.bowl_usable() {
            return Some(StateTag::Idle);
        }

        if !ctx.signals.arrived_at_bowl {
            ctx.move_to_bowl();
            return None;
        }

        ctx.stop();
        let Some(gain) = ctx.eat() else {
            return Some(StateTag::Idle);
        };
        let cooldown = ctx.eat_cooldown();
        let cost = ctx.hunger.eat_cost;
        self.meal = Some(Countdown::new(cooldown));
        ctx.emit(BehaviorEvent::MealStarted { gain, cost });
        tracing::debug!(dog = %ctx.dog, cooldown, "meal started");
        None
    }

    fn exit(&mut self, ctx: &mut DogContext<'_>) {
        if self.meal.take().is_some() {
            ctx.emit(BehaviorEvent::MealInterrupted);
            tracing::debug!(dog = %ctx.dog, "meal interrupted");
        }
        ctx.signals.arrived_at_bowl = false;
    }
}
