use crate::{DogContext, DogState, StateTag};

/// Heading for the bowl.
///
/// The move command is repeated every call, since the bowl may have moved.
/// On arrival the dog eats if there is food, and otherwise waits in Hungry.
#[derive(Debug, Default)]
pub struct MoveToBowlState;

impl MoveToBowlState {
    pub fn new() -> Self {
        Self
    }
}

impl DogState for MoveToBowlState {
    fn tag(&self) -> StateTag {
        StateTag::MoveToBowl
    }

    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag> {
        if !ctx.move_to_bowl() {
            return None;
        }
        let nav = ctx.navigator.as_deref()?;
        ctx.signals.locomotion_speed = nav.velocity().length();
        if nav.path_pending() || !nav.has_arrived() {
            return None;
        }
        if ctx.bowl_usable() {
            Some(StateTag::Eating)
        } else {
            Some(StateTag::Hungry)
        }
    }
}
