//! Change notifications emitted by [`NeedController`][crate::NeedController].

use crate::NeedType;

#[derive(Clone, Debug, PartialEq)]
pub enum NeedEvent {
    /// A need's value moved.
    NeedChanged {
        need_type:   NeedType,
        normalized:  f32,
        is_critical: bool,
    },

    /// The controller's overall satisfaction moved.
    SatisfactionChanged(f32),
}
