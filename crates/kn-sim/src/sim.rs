//! The `Kennel` struct and its frame loop.

use kn_behavior::{Bowl, Dog, FoodBowl, StateTag};
use kn_core::{DogId, DogRng, Frame, KennelConfig, SimClock, SimRng, Vec2};
use kn_mobility::{KinematicAgent, Wander};
use kn_pension::{DayRewards, Pension, SatisfactionAggregator, SnapshotMap};

use crate::{DogRoster, KennelDog, KennelObserver, SimResult};

/// The pension simulation runner.
///
/// `Kennel` owns every dog, the food bowl, the satisfaction aggregator and
/// the pension economy, and drives them one fixed frame at a time:
///
/// 1. **Per dog**, in ascending `DogId` order:
///    - idle roaming ([`Wander`]) picks destinations while the dog is Idle;
///    - the agent steps toward its destination;
///    - the bowl trigger zone signals arrival to a dog that is Eating;
///    - [`Dog::process`] decays needs and runs the state machine;
///    - the dog's events are forwarded to the observer.
/// 2. **Satisfaction**: the aggregator recomputes the pension-wide mean.
/// 3. **Day end**: every `day_length_secs` the mean is converted to money
///    and prestige.
///
/// Create via [`KennelBuilder`][crate::KennelBuilder].
pub struct Kennel {
    /// The configuration the kennel was built from.  Dogs spawned later use
    /// its hunger and movement sections.
    pub config: KennelConfig,

    /// Frame counter and delta time.
    pub clock: SimClock,

    /// Dogs by id.  Despawned dogs leave empty slots.
    pub roster: DogRoster,

    /// The single food bowl every dog eats from.
    pub bowl: FoodBowl,

    /// Pension-wide satisfaction over every registered dog.
    pub aggregator: SatisfactionAggregator,

    /// Money and prestige.
    pub pension: Pension,

    /// Global RNG (pension name, default spawn points).
    pub rng: SimRng,

    /// Frames per in-game day; 0 disables day ends.
    pub(crate) frames_per_day: u64,

    /// Days completed so far.
    pub(crate) days: u64,
}

impl Kennel {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current frame to `config.sim.total_frames`.
    pub fn run<O: KennelObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        let end = Frame(self.config.sim.total_frames);
        while self.clock.current_frame < end {
            self.step(observer);
        }
        observer.on_sim_end(self.clock.current_frame, &self.pension);
        Ok(())
    }

    /// Run exactly `n` frames from the current position (ignores
    /// `total_frames`).
    pub fn run_frames<O: KennelObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer);
        }
        Ok(())
    }

    /// Admit a new dog at `position` and register it with the aggregator.
    ///
    /// Ids are handed out in order and never reused.
    pub fn spawn_dog(&mut self, position: Vec2) -> DogId {
        let id = self.roster.next_id();
        let mut rng = DogRng::new(self.config.sim.seed, id);
        let wander = Wander::new(position, &self.config.dog, &mut rng);
        let agent = KinematicAgent::new(position, &self.config.dog);
        let dog = Dog::new(id, &self.config.hunger, Some(agent), rng);

        self.roster.push(KennelDog { dog, wander });
        self.aggregator.register(id);
        tracing::info!(dog = %id, %position, "dog joined the pension");
        id
    }

    /// Remove a dog and unregister it.  Returns `false` for an unknown or
    /// already removed id.
    pub fn despawn_dog(&mut self, id: DogId) -> bool {
        let Some(mut gone) = self.roster.take(id) else {
            return false;
        };
        // Leaving mid-meal must not leave a countdown running.
        gone.dog.force_state(StateTag::Idle, Some(&mut self.bowl as &mut dyn Bowl));
        self.aggregator.unregister(id);
        tracing::info!(dog = %id, "dog left the pension");
        true
    }

    /// A random point within the roaming range of the pension centre.
    pub fn random_spawn_point(&mut self) -> Vec2 {
        let range = self.config.dog.wander_range.max(0.0);
        if range == 0.0 {
            return Vec2::ZERO;
        }
        Vec2::new(self.rng.gen_range(-range..=range), self.rng.gen_range(-range..=range))
    }

    /// Fill the bowl back to capacity.
    pub fn refill_bowl(&mut self) {
        self.bowl.refill();
        tracing::debug!(bowl = %self.bowl, "bowl refilled");
    }

    pub fn dog(&self, id: DogId) -> Option<&KennelDog> {
        self.roster.get(id)
    }

    pub fn dog_mut(&mut self, id: DogId) -> Option<&mut KennelDog> {
        self.roster.get_mut(id)
    }

    /// Number of dogs currently in the pension.
    pub fn dog_count(&self) -> usize {
        self.roster.live_count()
    }

    /// The last recomputed pension-wide satisfaction.
    #[inline]
    pub fn satisfaction(&self) -> f32 {
        self.aggregator.current()
    }

    /// In-game days completed.
    #[inline]
    pub fn days_completed(&self) -> u64 {
        self.days
    }

    /// Every registered dog's needs, keyed by id.
    pub fn needs_snapshot(&self) -> SnapshotMap {
        self.aggregator.all_needs_snapshot(&self.roster)
    }

    // ── Core frame processing ─────────────────────────────────────────────

    fn step<O: KennelObserver>(&mut self, observer: &mut O) {
        let now = self.clock.current_frame;
        observer.on_frame_start(now);
        self.process_frame(now, observer);
        self.clock.advance();

        if self.frames_per_day > 0 && self.clock.current_frame.0 % self.frames_per_day == 0 {
            self.end_day(observer);
        }
    }

    fn process_frame<O: KennelObserver>(&mut self, now: Frame, observer: &mut O) {
        let dt = self.clock.dt();
        let bowl_position = self.bowl.position();
        let trigger_radius = self.config.bowl.trigger_radius;
        let base_speed = self.config.dog.base_speed;

        for kd in self.roster.iter_mut() {
            // ── Movement ──────────────────────────────────────────────────
            let idle = kd.dog.state() == StateTag::Idle;
            let (agent, rng) = kd.dog.navigator_and_rng();
            if let Some(agent) = agent {
                if let Some(action) = kd.wander.process(dt, agent, idle, rng) {
                    tracing::trace!(frame = %now, ?action, "wander");
                }
                agent.step(dt);
            }

            // ── Bowl trigger zone ─────────────────────────────────────────
            if kd.dog.state() == StateTag::Eating && !kd.dog.has_arrived_at_bowl() {
                let inside = kd
                    .dog
                    .navigator()
                    .is_some_and(|a| a.position().distance(bowl_position) <= trigger_radius);
                if inside {
                    kd.dog.notify_arrived_at_bowl();
                }
            }

            // ── Needs and behavior ────────────────────────────────────────
            let before = kd.dog.state();
            kd.dog.process(dt, Some(&mut self.bowl as &mut dyn Bowl));

            // Wander legs leave a random walk speed behind; the bowl run
            // goes at base speed.
            if kd.dog.state() == StateTag::MoveToBowl && before != StateTag::MoveToBowl {
                if let Some(agent) = kd.dog.navigator_mut() {
                    agent.set_speed(base_speed);
                }
            }

            let id = kd.dog.id();
            for event in kd.dog.drain_events() {
                observer.on_dog_event(now, id, &event);
            }
        }

        let satisfaction = self.aggregator.recompute(&self.roster);
        observer.on_frame_end(now, satisfaction);
    }

    fn end_day<O: KennelObserver>(&mut self, observer: &mut O) {
        let day = self.days;
        let rewards = DayRewards::from_satisfaction(self.aggregator.current());
        self.pension.apply_rewards(&rewards);
        self.days += 1;
        tracing::info!(
            day,
            satisfaction = rewards.satisfaction,
            money = rewards.money,
            prestige = rewards.prestige,
            "day ended"
        );
        observer.on_day_end(day, &rewards, &self.pension);
    }
}
