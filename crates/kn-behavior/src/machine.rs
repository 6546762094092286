//! `DogStateMachine`: state arena, urgency rule and transitions.

use kn_needs::NeedType;

use crate::{
    BehaviorEvent, DogContext, DogState, EatingState, HungryState, IdleState, MoveToBowlState,
    StateTag, UrgentNeed, WalkState,
};

/// Finite state machine over the five behavior states.
///
/// Every state is built once, at construction, and lives in an arena slot
/// indexed by its [`StateTag`].  The machine starts in Idle; the first call
/// that carries a context (`start`, `process` or `change_state`) runs Idle's
/// `enter`.
pub struct DogStateMachine {
    states:      Vec<Box<dyn DogState>>,
    current:     StateTag,
    started:     bool,
    transitions: u64,
}

impl Default for DogStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl DogStateMachine {
    pub fn new() -> Self {
        let states: Vec<Box<dyn DogState>> = vec![
            Box::new(IdleState::new()),
            Box::new(WalkState::new()),
            Box::new(MoveToBowlState::new()),
            Box::new(EatingState::new()),
            Box::new(HungryState::new()),
        ];
        debug_assert!(StateTag::ALL.iter().all(|t| states[t.index()].tag() == *t));
        Self {
            states,
            current: StateTag::Idle,
            started: false,
            transitions: 0,
        }
    }

    #[inline]
    pub fn current(&self) -> StateTag {
        self.current
    }

    /// Number of transitions performed so far.
    #[inline]
    pub fn transitions(&self) -> u64 {
        self.transitions
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn state(&self, tag: StateTag) -> &dyn DogState {
        self.states[tag.index()].as_ref()
    }

    /// Install `state` in the slot for `tag`, returning the previous
    /// occupant.  Used to plug in instrumented states.
    ///
    /// `state.tag()` must equal `tag`.
    pub fn replace_state(&mut self, tag: StateTag, state: Box<dyn DogState>) -> Box<dyn DogState> {
        debug_assert_eq!(state.tag(), tag, "state installed in the wrong slot");
        std::mem::replace(&mut self.states[tag.index()], state)
    }

    /// Enter the initial state.  No-op once started.
    pub fn start(&mut self, ctx: &mut DogContext<'_>) {
        if self.started {
            return;
        }
        self.started = true;
        self.states[self.current.index()].enter(ctx);
    }

    /// Move to `target`: exit the current state, switch, enter the new one.
    ///
    /// Returns `false` and does nothing when `target` is already current.
    pub fn change_state(&mut self, target: StateTag, ctx: &mut DogContext<'_>) -> bool {
        self.start(ctx);
        if target == self.current {
            return false;
        }
        let from = self.current;
        self.states[from.index()].exit(ctx);
        self.current = target;
        self.transitions += 1;
        ctx.emit(BehaviorEvent::StateChanged { from, to: target });
        tracing::debug!(dog = %ctx.dog, %from, to = %target, "state changed");
        self.states[target.index()].enter(ctx);
        true
    }

    /// Idle-only urgency rule: a critical hunger that is also the most urgent
    /// need sends the dog to the bowl.  Other states are never interrupted.
    ///
    /// Returns `true` if it caused a transition.
    pub fn check_urgent_need(&mut self, urgent: Option<UrgentNeed>, ctx: &mut DogContext<'_>) -> bool {
        if self.current != StateTag::Idle {
            return false;
        }
        match urgent {
            Some(u) if u.need_type == NeedType::Hunger && u.is_critical => {
                self.change_state(StateTag::MoveToBowl, ctx)
            }
            _ => false,
        }
    }

    /// One machine step: the urgency rule, then the current state's
    /// `process`, then the transition it asked for (if any).
    pub fn process(&mut self, urgent: Option<UrgentNeed>, ctx: &mut DogContext<'_>) {
        self.start(ctx);
        self.check_urgent_need(urgent, ctx);
        if let Some(next) = self.states[self.current.index()].process(ctx) {
            self.change_state(next, ctx);
        }
    }
}

impl std::fmt::Debug for DogStateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DogStateMachine")
            .field("current", &self.current)
            .field("started", &self.started)
            .field("transitions", &self.transitions)
            .finish()
    }
}
