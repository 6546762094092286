use crate::{DogContext, DogState, StateTag, VELOCITY_EPSILON};

/// Moving without a purpose (roaming).  Back to Idle once the dog stops.
#[derive(Debug, Default)]
pub struct WalkState;

impl WalkState {
    pub fn new() -> Self {
        Self
    }
}

impl DogState for WalkState {
    fn tag(&self) -> StateTag {
        StateTag::Walk
    }

    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag> {
        let speed = ctx.navigator.as_deref()?.velocity().length();
        ctx.signals.locomotion_speed = speed;
        (speed <= VELOCITY_EPSILON).then_some(StateTag::Idle)
    }

    fn exit(&mut self, ctx: &mut DogContext<'_>) {
        ctx.signals.locomotion_speed = 0.0;
    }
}
