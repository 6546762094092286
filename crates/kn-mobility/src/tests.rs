//! Unit tests for kn-mobility.

use kn_behavior::Navigator;
use kn_core::{DogConfig, DogId, DogRng, Vec2};

use crate::{KinematicAgent, Wander, WanderAction};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn config() -> DogConfig {
    DogConfig::default()
}

fn agent_at(x: f32, z: f32) -> KinematicAgent {
    KinematicAgent::new(Vec2::new(x, z), &config())
}

fn rng(seed: u64) -> DogRng {
    DogRng::new(seed, DogId(0))
}

/// Config with no pauses and no sniffing, so roaming acts on every frame.
fn eager_config() -> DogConfig {
    DogConfig {
        cooldown_min: 0.0,
        cooldown_max: 0.0,
        sniff_chance: 0.0,
        ..DogConfig::default()
    }
}

// ── KinematicAgent ────────────────────────────────────────────────────────────

#[cfg(test)]
mod agent_tests {
    use super::*;

    #[test]
    fn idle_agent_has_no_path() {
        let a = agent_at(0.0, 0.0);
        assert!(!a.has_path());
        assert!(a.has_arrived());
        assert_eq!(a.remaining_distance(), 0.0);
        assert_eq!(a.velocity(), Vec2::ZERO);
    }

    #[test]
    fn steps_at_speed() {
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(10.0, 0.0));
        a.step(1.0);
        assert_eq!(a.position(), Vec2::new(2.5, 0.0));
        assert_eq!(a.velocity(), Vec2::new(2.5, 0.0));
        assert!(!a.has_arrived());
    }

    #[test]
    fn halts_at_stopping_distance() {
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(4.0, 0.0));
        for _ in 0..10 {
            a.step(0.5);
        }
        assert!((a.position().x - 2.5).abs() < 1e-5);
        assert!(a.has_path());
        assert!(a.has_arrived());
        assert_eq!(a.velocity(), Vec2::ZERO);
    }

    #[test]
    fn stop_clears_path() {
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(10.0, 0.0));
        a.step(1.0);
        a.stop();
        assert!(!a.has_path());
        assert_eq!(a.velocity(), Vec2::ZERO);
        a.step(1.0);
        assert_eq!(a.position(), Vec2::new(2.5, 0.0));
    }

    #[test]
    fn stopped_agent_holds_position() {
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(10.0, 0.0));
        a.set_stopped(true);
        a.step(1.0);
        assert_eq!(a.position(), Vec2::ZERO);
        a.set_stopped(false);
        a.step(1.0);
        assert_eq!(a.position(), Vec2::new(2.5, 0.0));
    }

    #[test]
    fn bad_dt_does_not_move() {
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(10.0, 0.0));
        a.step(-1.0);
        a.step(f32::NAN);
        assert_eq!(a.position(), Vec2::ZERO);
    }
}

// ── Wander ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander_tests {
    use super::*;

    #[test]
    fn waits_for_cooldown() {
        let cfg = DogConfig { sniff_chance: 0.0, ..config() };
        let mut r = rng(1);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        assert!(w.cooldown() >= 1.5 && w.cooldown() < 4.0);

        let mut a = agent_at(0.0, 0.0);
        assert_eq!(w.process(1.0, &mut a, true, &mut r), None);
        let mut acted = false;
        for _ in 0..4 {
            if w.process(1.0, &mut a, true, &mut r).is_some() {
                acted = true;
                break;
            }
        }
        assert!(acted);
    }

    #[test]
    fn destination_within_range_and_speed_within_bounds() {
        let cfg = eager_config();
        let mut r = rng(2);
        let center = Vec2::new(3.0, -1.0);
        let mut w = Wander::new(center, &cfg, &mut r);
        for _ in 0..50 {
            let mut a = agent_at(0.0, 0.0);
            match w.choose_destination(&mut a, &mut r) {
                WanderAction::Destination { point, speed } => {
                    assert!(point.distance(center) <= cfg.wander_range + 1e-4);
                    assert!(speed >= cfg.min_walk_speed && speed < cfg.max_walk_speed);
                    assert_eq!(a.destination(), Some(point));
                    assert_eq!(a.speed(), speed);
                }
                other => panic!("unexpected {other:?}"),
            }
        }
    }

    #[test]
    fn new_point_avoids_the_last_one() {
        let cfg = eager_config();
        let mut r = rng(3);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        let mut a = agent_at(0.0, 0.0);
        let mut last: Option<Vec2> = None;
        for _ in 0..30 {
            if let WanderAction::Destination { point, .. } = w.choose_destination(&mut a, &mut r) {
                if let Some(prev) = last {
                    assert!(point.distance(prev) >= cfg.min_distance_from_last_point);
                }
                last = Some(point);
            }
        }
    }

    #[test]
    fn impossible_point_retries_later() {
        // A zero range puts every point on the centre, so the second pick
        // can never be far enough from the first.
        let cfg = DogConfig { wander_range: 0.0, ..eager_config() };
        let mut r = rng(4);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        let mut a = agent_at(0.0, 0.0);
        assert!(matches!(w.choose_destination(&mut a, &mut r), WanderAction::Destination { .. }));
        assert_eq!(w.choose_destination(&mut a, &mut r), WanderAction::Retry);
        assert_eq!(w.cooldown(), 1.0);
    }

    #[test]
    fn does_nothing_outside_idle() {
        let cfg = eager_config();
        let mut r = rng(5);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        let mut a = agent_at(0.0, 0.0);
        assert_eq!(w.process(1.0, &mut a, false, &mut r), None);
        assert!(a.destination().is_none());
    }

    #[test]
    fn does_nothing_while_travelling() {
        let cfg = eager_config();
        let mut r = rng(6);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        let mut a = agent_at(0.0, 0.0);
        a.move_to(Vec2::new(50.0, 0.0));
        assert_eq!(w.process(1.0, &mut a, true, &mut r), None);
    }

    #[test]
    fn sniff_stops_then_resumes_with_a_destination() {
        let cfg = DogConfig { sniff_chance: 1.0, ..eager_config() };
        let mut r = rng(7);
        let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
        let mut a = agent_at(0.0, 0.0);

        let secs = match w.process(0.1, &mut a, true, &mut r) {
            Some(WanderAction::Sniff { secs }) => secs,
            other => panic!("expected a sniff, got {other:?}"),
        };
        assert!((1.0..3.0).contains(&secs));
        assert!(a.is_stopped());
        assert!(w.is_sniffing());

        let mut resumed = None;
        for _ in 0..40 {
            if let Some(action) = w.process(0.1, &mut a, true, &mut r) {
                resumed = Some(action);
                break;
            }
        }
        assert!(matches!(resumed, Some(WanderAction::Destination { .. })));
        assert!(!a.is_stopped());
        assert!(!w.is_sniffing());
    }

    #[test]
    fn same_seed_same_walk() {
        let cfg = eager_config();
        let run = |seed| {
            let mut r = rng(seed);
            let mut w = Wander::new(Vec2::ZERO, &cfg, &mut r);
            let mut a = agent_at(0.0, 0.0);
            (0..5).map(|_| w.choose_destination(&mut a, &mut r)).collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
