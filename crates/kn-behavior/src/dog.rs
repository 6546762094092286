//! `Dog<N>`: one simulated dog.

use kn_core::{DogId, DogRng, HungerConfig};
use kn_needs::{NeedController, NeedSnapshot, SatisfactionProvider};

use crate::{
    BehaviorEvent, Bowl, DogContext, DogSignals, DogStateMachine, Navigator, StateTag, UrgentNeed,
};

/// A dog: its needs, its behavior machine, and the navigator that moves it.
///
/// The bowl is not owned by the dog; it is lent to each
/// [`process`][Self::process] call.  A dog without a navigator (or called
/// without a bowl) still ticks its needs, but states that require the missing
/// collaborator hold still.
pub struct Dog<N: Navigator> {
    id:        DogId,
    needs:     NeedController,
    machine:   DogStateMachine,
    navigator: Option<N>,
    rng:       DogRng,
    hunger:    HungerConfig,
    signals:   DogSignals,
    events:    Vec<BehaviorEvent>,
}

impl<N: Navigator> Dog<N> {
    /// A dog with the hunger need from `hunger`, starting in Idle.
    pub fn new(id: DogId, hunger: &HungerConfig, navigator: Option<N>, rng: DogRng) -> Self {
        if navigator.is_none() {
            tracing::warn!(dog = %id, "dog created without a navigator");
        }
        let mut dog = Self {
            id,
            needs: NeedController::from_config(hunger),
            machine: DogStateMachine::new(),
            navigator,
            rng,
            hunger: hunger.clone(),
            signals: DogSignals::default(),
            events: Vec::new(),
        };
        let (machine, mut ctx) = dog.split(0.0, None);
        machine.start(&mut ctx);
        dog
    }

    // ── Frame update ──────────────────────────────────────────────────────────

    /// Advance the dog by `dt` seconds: decay needs, rank urgency, then run
    /// the state machine.
    pub fn process(&mut self, dt: f32, bowl: Option<&mut dyn Bowl>) {
        self.needs.tick_all(dt);
        self.forward_need_events();

        let urgent = self.needs.most_urgent().map(UrgentNeed::of);
        let (machine, mut ctx) = self.split(dt, bowl);
        machine.process(urgent, &mut ctx);

        self.forward_need_events();
    }

    /// Force a transition from outside the machine (e.g. the bowl was taken
    /// away).  Same-state requests are no-ops.
    pub fn force_state(&mut self, target: StateTag, bowl: Option<&mut dyn Bowl>) -> bool {
        let (machine, mut ctx) = self.split(0.0, bowl);
        let changed = machine.change_state(target, &mut ctx);
        self.forward_need_events();
        changed
    }

    /// The bowl's trigger zone reports the dog's paws inside.
    pub fn notify_arrived_at_bowl(&mut self) {
        self.signals.arrived_at_bowl = true;
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<BehaviorEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> DogId {
        self.id
    }

    #[inline]
    pub fn state(&self) -> StateTag {
        self.machine.current()
    }

    #[inline]
    pub fn needs(&self) -> &NeedController {
        &self.needs
    }

    #[inline]
    pub fn needs_mut(&mut self) -> &mut NeedController {
        &mut self.needs
    }

    #[inline]
    pub fn machine(&self) -> &DogStateMachine {
        &self.machine
    }

    #[inline]
    pub fn machine_mut(&mut self) -> &mut DogStateMachine {
        &mut self.machine
    }

    #[inline]
    pub fn navigator(&self) -> Option<&N> {
        self.navigator.as_ref()
    }

    #[inline]
    pub fn navigator_mut(&mut self) -> Option<&mut N> {
        self.navigator.as_mut()
    }

    /// Navigator and RNG together, for collaborators that steer the dog
    /// (idle roaming).
    pub fn navigator_and_rng(&mut self) -> (Option<&mut N>, &mut DogRng) {
        (self.navigator.as_mut(), &mut self.rng)
    }

    #[inline]
    pub fn signals(&self) -> &DogSignals {
        &self.signals
    }

    #[inline]
    pub fn has_arrived_at_bowl(&self) -> bool {
        self.signals.arrived_at_bowl
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn split<'a, 'b: 'a>(
        &'a mut self,
        dt:   f32,
        bowl: Option<&'a mut (dyn Bowl + 'b)>,
    ) -> (&'a mut DogStateMachine, DogContext<'a>) {
        let ctx = DogContext {
            dog: self.id,
            dt,
            needs: &mut self.needs,
            navigator: self.navigator.as_mut().map(|n| n as &mut dyn Navigator),
            bowl: bowl.map(|b| b as &mut dyn Bowl),
            hunger: &self.hunger,
            rng: &mut self.rng,
            signals: &mut self.signals,
            events: &mut self.events,
        };
        (&mut self.machine, ctx)
    }

    fn forward_need_events(&mut self) {
        self.events.extend(self.needs.drain_events().into_iter().map(BehaviorEvent::Need));
    }
}

impl<N: Navigator> SatisfactionProvider for Dog<N> {
    fn satisfaction(&self) -> f32 {
        self.needs.satisfaction()
    }

    fn needs_snapshot(&self) -> Vec<NeedSnapshot> {
        self.needs.needs_snapshot()
    }
}
