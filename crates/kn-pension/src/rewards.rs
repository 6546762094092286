//! End-of-day rewards.

use serde::Serialize;

/// Satisfaction at or above which a day earns one prestige point.
pub const PRESTIGE_SATISFACTION: f32 = 0.8;

/// Money paid for a day at full satisfaction.
pub const MONEY_PER_DAY: f32 = 100.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct DayRewards {
    pub money:        i64,
    pub prestige:     i64,
    pub satisfaction: f32,
}

impl DayRewards {
    /// Money is `100 * s` rounded half-to-even; prestige is 1 when
    /// `s >= 0.8`.  `s` is clamped to `[0, 1]` first (NaN counts as 0).
    pub fn from_satisfaction(satisfaction: f32) -> Self {
        let s = if satisfaction.is_nan() { 0.0 } else { satisfaction.clamp(0.0, 1.0) };
        Self {
            money:        (MONEY_PER_DAY * s).round_ties_even() as i64,
            prestige:     i64::from(s >= PRESTIGE_SATISFACTION),
            satisfaction: s,
        }
    }
}
