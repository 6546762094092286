use crate::{BehaviorEvent, DogContext, DogState, StateTag, VELOCITY_EPSILON};

/// Number of cosmetic idle animations to pick from.
pub const IDLE_VARIANTS: u8 = 6;

/// Standing around.  Leaves for Walk as soon as something moves the dog.
///
/// Hunger pulls the dog out of Idle through the machine's urgency rule, not
/// through this state.
#[derive(Debug, Default)]
pub struct IdleState {
    variant: u8,
}

impl IdleState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn variant(&self) -> u8 {
        self.variant
    }
}

impl DogState for IdleState {
    fn tag(&self) -> StateTag {
        StateTag::Idle
    }

    fn enter(&mut self, ctx: &mut DogContext<'_>) {
        self.variant = ctx.rng.gen_range(0..IDLE_VARIANTS);
        ctx.signals.idle_variant = self.variant;
        ctx.signals.locomotion_speed = 0.0;
        ctx.emit(BehaviorEvent::IdleVariant(self.variant));
    }

    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag> {
        let nav = ctx.navigator.as_deref()?;
        (nav.velocity().length() > VELOCITY_EPSILON).then_some(StateTag::Walk)
    }
}
