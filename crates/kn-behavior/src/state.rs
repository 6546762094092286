//! The `DogState` trait and state identities.

use std::fmt;

use kn_needs::NeedType;
use serde::Serialize;

use crate::DogContext;

/// Speed below which a dog counts as standing still.
pub const VELOCITY_EPSILON: f32 = 0.05;

// ── StateTag ──────────────────────────────────────────────────────────────────

/// Identity of a behavior state.  Also the state's slot in the machine's
/// arena.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum StateTag {
    Idle,
    Walk,
    MoveToBowl,
    Eating,
    Hungry,
}

impl StateTag {
    /// Every tag, in arena order.
    pub const ALL: [StateTag; 5] = [
        StateTag::Idle,
        StateTag::Walk,
        StateTag::MoveToBowl,
        StateTag::Eating,
        StateTag::Hungry,
    ];

    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            StateTag::Idle => "Idle",
            StateTag::Walk => "Walk",
            StateTag::MoveToBowl => "MoveToBowl",
            StateTag::Eating => "Eating",
            StateTag::Hungry => "Hungry",
        }
    }
}

impl fmt::Display for StateTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── UrgentNeed ────────────────────────────────────────────────────────────────

/// The most urgent need of this call, copied out of the controller so the
/// machine can read it while states mutate the needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct UrgentNeed {
    pub need_type:   NeedType,
    pub priority:    f32,
    pub is_critical: bool,
}

impl UrgentNeed {
    pub fn of(need: &kn_needs::Need) -> Self {
        Self {
            need_type:   need.need_type(),
            priority:    need.priority(),
            is_critical: need.is_critical(),
        }
    }
}

// ── DogState ──────────────────────────────────────────────────────────────────

/// One behavior state.
///
/// States are built once per machine and reused across transitions, so
/// `enter` must reset whatever per-visit data the state keeps.
///
/// # Required methods
///
/// [`tag`][Self::tag] and [`process`][Self::process].  `enter` and `exit`
/// default to no-ops.
pub trait DogState {
    fn tag(&self) -> StateTag;

    fn enter(&mut self, _ctx: &mut DogContext<'_>) {}

    /// Run one call's worth of behavior.  Return `Some(tag)` to request a
    /// transition, which the machine performs after this returns.
    fn process(&mut self, ctx: &mut DogContext<'_>) -> Option<StateTag>;

    /// Leave the state.  Must not block; unfinished work is discarded.
    fn exit(&mut self, _ctx: &mut DogContext<'_>) {}
}
