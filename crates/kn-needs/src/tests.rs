//! Unit tests for kn-needs.

use kn_core::{HungerConfig, NeedConfig};

use crate::{Need, NeedController, NeedEvent, NeedType, NeedVariant, SatisfactionProvider};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn need_config(max: f32, rate: f32, threshold: f32) -> NeedConfig {
    NeedConfig {
        name:               "Hunger".into(),
        max_value:          max,
        decrease_rate:      rate,
        critical_threshold: threshold,
    }
}

fn hunger_config() -> HungerConfig {
    HungerConfig::default()
}

fn tick_secs(need: &mut Need, secs: u32) {
    for _ in 0..secs {
        need.tick(1.0);
    }
}

// ── Need ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod need_tests {
    use super::*;

    #[test]
    fn starts_full() {
        let need = Need::hunger(&hunger_config());
        assert_eq!(need.value(), 300.0);
        assert_eq!(need.priority(), 0.0);
        assert!(!need.is_critical());
        assert_eq!(need.need_type(), NeedType::Hunger);
    }

    #[test]
    fn construction_clamps_bad_config() {
        let need = Need::new(&need_config(0.0, -3.0, 250.0), NeedVariant::Thirst);
        assert_eq!(need.max_value(), 1.0);
        assert_eq!(need.value(), 1.0);
        assert_eq!(need.decrease_rate(), 0.0);
        assert_eq!(need.critical_threshold(), 100.0);

        let need = Need::new(&need_config(50.0, 1.0, -5.0), NeedVariant::Thirst);
        assert_eq!(need.critical_threshold(), 0.0);
    }

    #[test]
    fn nan_config_falls_back() {
        let need = Need::new(&need_config(f32::NAN, f32::NAN, f32::NAN), NeedVariant::Thirst);
        assert_eq!(need.max_value(), 1.0);
        assert_eq!(need.decrease_rate(), 0.0);
        assert_eq!(need.critical_threshold(), 0.0);
    }

    #[test]
    fn blank_name_defaults() {
        let mut cfg = need_config(10.0, 1.0, 1.0);
        cfg.name = "   ".into();
        assert_eq!(Need::new(&cfg, NeedVariant::Thirst).name(), "Need");
    }

    #[test]
    fn clamp_invariant_holds_for_any_sequence() {
        let mut need = Need::new(&need_config(100.0, 7.0, 10.0), NeedVariant::Thirst);
        let ops: [(bool, f32); 10] = [
            (true, 3.0),
            (false, 500.0),
            (true, 40.0),
            (false, -1000.0),
            (false, 12.5),
            (true, 0.5),
            (false, f32::INFINITY),
            (true, f32::NAN),
            (true, -10.0),
            (false, 1e9),
        ];
        for (is_tick, x) in ops {
            if is_tick {
                need.tick(x);
            } else {
                need.apply_satisfaction(x);
            }
            assert!(need.value() >= 0.0 && need.value() <= need.max_value());
        }
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut need = Need::hunger(&hunger_config());
        need.tick(-5.0);
        assert_eq!(need.value(), 300.0);
    }

    #[test]
    fn priority_monotonic() {
        let mut need = Need::hunger(&hunger_config());
        let mut last = need.priority();
        for _ in 0..50 {
            need.tick(3.0);
            assert!(need.priority() >= last);
            last = need.priority();
        }
        for _ in 0..50 {
            need.apply_satisfaction(4.0);
            assert!(need.priority() <= last);
            last = need.priority();
        }
    }

    #[test]
    fn critical_boundary_is_inclusive() {
        let mut need = Need::hunger(&hunger_config());
        tick_secs(&mut need, 274);
        assert_eq!(need.value(), 26.0);
        assert!(!need.is_critical());
        need.tick(1.0);
        assert_eq!(need.value(), 25.0);
        assert!(need.is_critical());
    }

    #[test]
    fn hunger_scenario_reaches_critical_after_276s() {
        let mut need = Need::hunger(&hunger_config());
        tick_secs(&mut need, 276);
        assert_eq!(need.value(), 24.0);
        assert!(need.is_critical());
    }

    #[test]
    fn eat_once_applies_gain() {
        let mut need = Need::hunger(&hunger_config());
        tick_secs(&mut need, 276);
        assert_eq!(need.eat_once(), Some(35.0));
        assert_eq!(need.value(), 59.0);
    }

    #[test]
    fn eat_once_clamps_at_max() {
        let mut need = Need::hunger(&hunger_config());
        need.tick(10.0);
        need.eat_once();
        assert_eq!(need.value(), 300.0);
    }

    #[test]
    fn thirst_cannot_eat() {
        let mut need = Need::thirst(&need_config(100.0, 1.0, 10.0));
        assert_eq!(need.eat_once(), None);
        assert!(need.hunger_params().is_none());
    }

    #[test]
    fn snapshot_fields() {
        let mut need = Need::hunger(&hunger_config());
        need.tick(150.0);
        let snap = need.snapshot();
        assert_eq!(snap.need_type, NeedType::Hunger);
        assert_eq!(snap.display_name, "Hunger");
        assert_eq!(snap.current_value, 150.0);
        assert_eq!(snap.max_value, 300.0);
        assert_eq!(snap.normalized_value, 0.5);
        assert!(!snap.is_critical);
    }
}

// ── NeedController ────────────────────────────────────────────────────────────

#[cfg(test)]
mod controller_tests {
    use super::*;

    #[test]
    fn from_config_registers_hunger() {
        let c = NeedController::from_config(&hunger_config());
        assert_eq!(c.len(), 1);
        assert!(c.is_present(NeedType::Hunger));
        assert!(!c.is_present(NeedType::Thirst));
        assert!(!c.is_hungry());
    }

    #[test]
    fn empty_controller() {
        let c = NeedController::new();
        assert!(c.most_urgent().is_none());
        assert_eq!(c.satisfaction(), 1.0);
        assert!(!c.is_hungry());
        assert!(c.needs_snapshot().is_empty());
    }

    #[test]
    fn most_urgent_picks_highest_priority() {
        let mut c = NeedController::new();
        c.register(Need::thirst(&need_config(100.0, 1.0, 10.0)));
        c.register(Need::hunger(&hunger_config()));
        c.tick_all(60.0);
        // thirst: 40/100 -> 0.6; hunger: 240/300 -> 0.2
        assert_eq!(c.most_urgent().map(Need::need_type), Some(NeedType::Thirst));
    }

    #[test]
    fn most_urgent_ties_go_to_first_registered() {
        let mut c = NeedController::new();
        let mut first = need_config(100.0, 1.0, 10.0);
        first.name = "First".into();
        let mut second = first.clone();
        second.name = "Second".into();
        c.register(Need::thirst(&first));
        c.register(Need::thirst(&second));
        c.tick_all(30.0);
        assert_eq!(c.most_urgent().map(Need::name), Some("First"));
    }

    #[test]
    fn duplicates_are_accepted_and_lookup_returns_first() {
        let mut c = NeedController::from_config(&hunger_config());
        let mut other = hunger_config();
        other.need.name = "Second hunger".into();
        c.register(Need::hunger(&other));
        assert_eq!(c.len(), 2);
        assert_eq!(c.hunger().map(Need::name), Some("Hunger"));
    }

    #[test]
    fn find_by_predicate() {
        let c = NeedController::from_config(&hunger_config());
        assert!(c.find(|n| n.max_value() == 300.0).is_some());
        assert!(c.find(|n| n.is_critical()).is_none());
    }

    #[test]
    fn is_hungry_follows_hunger_need() {
        let mut c = NeedController::from_config(&hunger_config());
        for _ in 0..276 {
            c.tick_all(1.0);
        }
        assert!(c.is_hungry());
        assert_eq!(c.eat_once(), Some(35.0));
        assert_eq!(c.hunger().map(Need::value), Some(59.0));
        assert!(!c.is_hungry());
    }

    #[test]
    fn eat_once_without_hunger() {
        let mut c = NeedController::new();
        c.register(Need::thirst(&need_config(100.0, 1.0, 10.0)));
        assert_eq!(c.eat_once(), None);
    }

    #[test]
    fn satisfaction_is_mean_of_normalized() {
        let mut c = NeedController::new();
        c.register(Need::thirst(&need_config(100.0, 1.0, 10.0)));
        c.register(Need::hunger(&hunger_config()));
        c.tick_all(50.0);
        // thirst 0.5, hunger 250/300
        let expected = (0.5 + 250.0 / 300.0) / 2.0;
        assert!((c.satisfaction() - expected).abs() < 1e-6);
    }

    #[test]
    fn tick_emits_change_events() {
        let mut c = NeedController::from_config(&hunger_config());
        c.tick_all(30.0);
        let events = c.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            NeedEvent::NeedChanged {
                need_type:   NeedType::Hunger,
                normalized:  0.9,
                is_critical: false,
            },
        );
        assert_eq!(events[1], NeedEvent::SatisfactionChanged(0.9));
        assert!(c.drain_events().is_empty());
    }

    #[test]
    fn no_events_when_nothing_moves() {
        let mut c = NeedController::from_config(&hunger_config());
        c.tick_all(0.0);
        assert!(c.drain_events().is_empty());

        // A full need cannot rise further.
        c.eat_once();
        assert!(c.drain_events().is_empty());
    }
}
