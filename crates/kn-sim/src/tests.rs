//! Integration tests for kn-sim.

use kn_behavior::{ARRIVAL_EPSILON, BehaviorEvent, Navigator, StateTag};
use kn_core::{DogId, Frame, KennelConfig, Vec2};
use kn_needs::NeedType;
use kn_pension::{DayRewards, Pension};

use crate::{Kennel, KennelBuilder, KennelObserver, NoopObserver, SimError};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config(dog_count: usize) -> KennelConfig {
    KennelConfig { dog_count, ..KennelConfig::default() }
}

fn kennel_with(positions: Vec<Vec2>) -> Kennel {
    KennelBuilder::new(config(positions.len()))
        .spawn_positions(positions)
        .build()
        .unwrap()
}

/// Drop a dog's hunger to `value` (below the critical threshold of 25 when
/// `value <= 25`).
fn set_hunger(kennel: &mut Kennel, id: DogId, value: f32) {
    let need = kennel
        .dog_mut(id)
        .unwrap()
        .dog
        .needs_mut()
        .find_by_type_mut(NeedType::Hunger)
        .unwrap();
    let delta = value - need.value();
    need.apply_satisfaction(delta);
}

#[derive(Default)]
struct Recorder {
    frames:        u64,
    events:        Vec<(DogId, BehaviorEvent)>,
    satisfactions: Vec<f32>,
    days:          Vec<(u64, DayRewards)>,
    ended:         Option<Frame>,
}

impl KennelObserver for Recorder {
    fn on_frame_start(&mut self, _frame: Frame) {
        self.frames += 1;
    }

    fn on_dog_event(&mut self, _frame: Frame, dog: DogId, event: &BehaviorEvent) {
        self.events.push((dog, event.clone()));
    }

    fn on_frame_end(&mut self, _frame: Frame, satisfaction: f32) {
        self.satisfactions.push(satisfaction);
    }

    fn on_day_end(&mut self, day: u64, rewards: &DayRewards, _pension: &Pension) {
        self.days.push((day, *rewards));
    }

    fn on_sim_end(&mut self, final_frame: Frame, _pension: &Pension) {
        self.ended = Some(final_frame);
    }
}

// ── KennelBuilder validation ──────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_successfully_with_defaults() {
        let kennel = KennelBuilder::new(KennelConfig::default()).build().unwrap();
        assert_eq!(kennel.dog_count(), 3);
        assert_eq!(kennel.aggregator.len(), 3);
        assert_eq!(kennel.pension.money(), 1000);
        assert_eq!(kennel.bowl.quantity(), 500.0);
        assert_eq!(kennel.satisfaction(), 1.0);
        for i in 0..3 {
            assert_eq!(kennel.dog(DogId(i)).unwrap().dog.state(), StateTag::Idle);
        }
    }

    #[test]
    fn position_count_mismatch_errors() {
        let result = KennelBuilder::new(config(3))
            .spawn_positions(vec![Vec2::ZERO; 2])
            .build();
        assert!(matches!(
            result,
            Err(SimError::CountMismatch { expected: 3, got: 2, .. })
        ));
    }

    #[test]
    fn zero_frame_duration_errors() {
        let mut cfg = config(1);
        cfg.sim.frame_duration_secs = 0.0;
        assert!(matches!(KennelBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn spawn_positions_are_used() {
        let kennel = kennel_with(vec![Vec2::new(1.0, 2.0), Vec2::new(-3.0, 0.5)]);
        let agent = kennel.dog(DogId(1)).unwrap().dog.navigator().unwrap();
        assert_eq!(agent.position(), Vec2::new(-3.0, 0.5));
    }

    #[test]
    fn builds_from_toml() {
        let cfg = KennelConfig::from_str("dog_count = 1\n[sim]\nseed = 9\n").unwrap();
        let kennel = KennelBuilder::new(cfg).build().unwrap();
        assert_eq!(kennel.dog_count(), 1);
        assert_eq!(kennel.config.sim.seed, 9);
    }

    #[test]
    fn unreachable_trigger_radius_is_raised() {
        let mut cfg = config(1);
        cfg.bowl.trigger_radius = 1.0;
        let mut kennel = KennelBuilder::new(cfg)
            .spawn_positions(vec![Vec2::ZERO])
            .build()
            .unwrap();
        let reach = kennel.config.dog.stopping_distance + ARRIVAL_EPSILON;
        assert_eq!(kennel.config.bowl.trigger_radius, reach);

        // The dog halts 1.5 from the bowl and must still get its meal.
        set_hunger(&mut kennel, DogId(0), 20.0);
        kennel.run_frames(150, &mut NoopObserver).unwrap();
        assert_eq!(kennel.bowl.quantity(), 400.0);
        assert_ne!(kennel.dog(DogId(0)).unwrap().dog.state(), StateTag::Eating);
    }

    #[test]
    fn reachable_trigger_radius_is_kept() {
        let mut cfg = config(0);
        cfg.bowl.trigger_radius = 3.0;
        let kennel = KennelBuilder::new(cfg).build().unwrap();
        assert_eq!(kennel.config.bowl.trigger_radius, 3.0);
    }

    #[test]
    fn seed_override() {
        let kennel = KennelBuilder::new(config(0)).seed(1234).build().unwrap();
        assert_eq!(kennel.config.sim.seed, 1234);
    }
}

// ── Frame loop ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use super::*;

    #[test]
    fn run_frames_advances_clock() {
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        let mut rec = Recorder::default();
        kennel.run_frames(10, &mut rec).unwrap();
        assert_eq!(kennel.clock.current_frame, Frame(10));
        assert_eq!(rec.frames, 10);
        assert_eq!(rec.satisfactions.len(), 10);
        assert!(rec.satisfactions.iter().all(|s| (0.0..=1.0).contains(s)));
        assert!(rec.ended.is_none());
    }

    #[test]
    fn run_stops_at_total_frames() {
        let mut cfg = config(1);
        cfg.sim.total_frames = 30;
        let mut kennel = KennelBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        kennel.run(&mut rec).unwrap();
        assert_eq!(kennel.clock.current_frame, Frame(30));
        assert_eq!(rec.ended, Some(Frame(30)));
    }

    #[test]
    fn needs_decay_lowers_satisfaction() {
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        kennel.run_frames(30, &mut NoopObserver).unwrap();
        let s = kennel.satisfaction();
        assert!(s < 1.0 && s > 0.99);
    }

    #[test]
    fn hungry_dog_walks_to_bowl_and_eats() {
        // Bowl at (4, 0); the dog starts 4 away and halts 1.5 short, inside
        // the 2.0 trigger radius.
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        set_hunger(&mut kennel, DogId(0), 20.0);

        let mut rec = Recorder::default();
        kennel.run_frames(150, &mut rec).unwrap();

        let tags: Vec<StateTag> = rec
            .events
            .iter()
            .filter_map(|(_, e)| match e {
                BehaviorEvent::StateChanged { to, .. } => Some(*to),
                _ => None,
            })
            .collect();
        assert_eq!(&tags[..3], &[StateTag::MoveToBowl, StateTag::Eating, StateTag::Idle]);
        assert!(rec
            .events
            .iter()
            .any(|(_, e)| matches!(e, BehaviorEvent::MealStarted { cost: 100, .. })));
        assert!(rec.events.iter().any(|(_, e)| *e == BehaviorEvent::MealFinished));

        assert_eq!(kennel.bowl.quantity(), 400.0);
        let hunger = kennel.dog(DogId(0)).unwrap().dog.needs().hunger().unwrap().value();
        assert!(hunger > 45.0 && hunger < 55.0, "hunger {hunger}");
    }

    #[test]
    fn bowl_run_uses_base_speed() {
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        // Leftover speed of a slow wander leg.
        kennel.dog_mut(DogId(0)).unwrap().dog.navigator_mut().unwrap().set_speed(1.2);
        set_hunger(&mut kennel, DogId(0), 20.0);

        kennel.run_frames(5, &mut NoopObserver).unwrap();
        let dog = &kennel.dog(DogId(0)).unwrap().dog;
        assert_eq!(dog.state(), StateTag::MoveToBowl);
        let agent = dog.navigator().unwrap();
        assert_eq!(agent.speed(), kennel.config.dog.base_speed);
        assert!((agent.velocity().length() - 2.5).abs() < 1e-3);
    }

    #[test]
    fn empty_bowl_leaves_dog_hungry() {
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        kennel.bowl.empty();
        set_hunger(&mut kennel, DogId(0), 20.0);

        kennel.run_frames(90, &mut NoopObserver).unwrap();
        assert_eq!(kennel.dog(DogId(0)).unwrap().dog.state(), StateTag::Hungry);

        kennel.refill_bowl();
        assert_eq!(kennel.bowl.quantity(), 500.0);
        kennel.run_frames(1, &mut NoopObserver).unwrap();
        assert_eq!(kennel.dog(DogId(0)).unwrap().dog.state(), StateTag::MoveToBowl);
    }

    #[test]
    fn same_seed_same_run() {
        let run = || {
            let mut kennel = KennelBuilder::new(config(3)).seed(7).build().unwrap();
            kennel.run_frames(300, &mut NoopObserver).unwrap();
            (0..3)
                .map(|i| kennel.dog(DogId(i)).unwrap().dog.navigator().unwrap().clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}

// ── Spawn / despawn ───────────────────────────────────────────────────────────

#[cfg(test)]
mod roster_tests {
    use super::*;

    #[test]
    fn late_spawn_registers_with_aggregator() {
        let mut kennel = kennel_with(vec![Vec2::ZERO; 2]);
        let id = kennel.spawn_dog(Vec2::new(1.0, 1.0));
        assert_eq!(id, DogId(2));
        assert!(kennel.aggregator.contains(id));
        assert_eq!(kennel.dog_count(), 3);
        assert!(kennel.aggregator.is_dirty());
    }

    #[test]
    fn despawn_unregisters_and_never_reuses_ids() {
        let mut kennel = kennel_with(vec![Vec2::ZERO; 2]);
        assert!(kennel.despawn_dog(DogId(0)));
        assert!(!kennel.despawn_dog(DogId(0)));
        assert!(!kennel.despawn_dog(DogId(99)));
        assert!(!kennel.aggregator.contains(DogId(0)));
        assert_eq!(kennel.dog_count(), 1);
        assert!(kennel.dog(DogId(0)).is_none());

        let id = kennel.spawn_dog(Vec2::ZERO);
        assert_eq!(id, DogId(2));
    }

    #[test]
    fn empty_pension_is_fully_satisfied() {
        let mut kennel = kennel_with(vec![Vec2::ZERO]);
        kennel.run_frames(60, &mut NoopObserver).unwrap();
        assert!(kennel.satisfaction() < 1.0);

        kennel.despawn_dog(DogId(0));
        assert_eq!(kennel.satisfaction(), 1.0);
        kennel.run_frames(1, &mut NoopObserver).unwrap();
        assert_eq!(kennel.satisfaction(), 1.0);
    }

    #[test]
    fn needs_snapshot_covers_live_dogs() {
        let mut kennel = kennel_with(vec![Vec2::ZERO; 3]);
        kennel.despawn_dog(DogId(1));
        let snap = kennel.needs_snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[&DogId(0)].len(), 1);
        assert_eq!(snap[&DogId(2)][0].need_type, NeedType::Hunger);
    }
}

// ── Day end ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod day_tests {
    use super::*;

    fn short_days() -> KennelConfig {
        let mut cfg = config(2);
        cfg.sim.frame_duration_secs = 0.1;
        cfg.sim.day_length_secs = 1.0;
        cfg
    }

    #[test]
    fn rewards_paid_at_each_day_boundary() {
        let mut kennel = KennelBuilder::new(short_days()).build().unwrap();
        let mut rec = Recorder::default();
        kennel.run_frames(25, &mut rec).unwrap();

        assert_eq!(kennel.days_completed(), 2);
        assert_eq!(rec.days.iter().map(|(d, _)| *d).collect::<Vec<_>>(), vec![0, 1]);
        let paid: i64 = rec.days.iter().map(|(_, r)| r.money).sum();
        assert_eq!(kennel.pension.money(), 1000 + paid);
        assert!(paid > 190);
        assert_eq!(kennel.pension.prestige(), 2);
    }

    #[test]
    fn zero_day_length_never_ends_a_day() {
        let mut cfg = short_days();
        cfg.sim.day_length_secs = 0.0;
        let mut kennel = KennelBuilder::new(cfg).build().unwrap();
        let mut rec = Recorder::default();
        kennel.run_frames(50, &mut rec).unwrap();
        assert!(rec.days.is_empty());
        assert_eq!(kennel.pension.money(), 1000);
    }
}
