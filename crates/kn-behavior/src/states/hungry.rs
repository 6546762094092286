use crate::{DogContext, DogState, StateTag};

/// At an empty bowl, waiting for the player to refill it.
#[derive(Debug, Default)]
pub struct HungryState;

impl HungryState {
    pub fn new() -> Self {
        Self
    }
}

impl DogState for HungryState {
    fn tag(&self) -> StateTag {
        StateTag::Hungry
    }

    fn enter(&mut self, ctx: &mut DogContext<'_>) {
        tracing::debug!(dog = %ctx.dog, "bowl is empty, waiting for a refill");
    }

    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag> {
        ctx.bowl_usable().then_some(StateTag::MoveToBowl)
    }
}
