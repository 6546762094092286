//! A single decaying need.

use std::fmt;

use kn_core::{HungerConfig, NeedConfig};
use serde::{Deserialize, Serialize};

use crate::NeedSnapshot;

/// Upper bound of the critical threshold, whatever the need's maximum.
pub const MAX_CRITICAL_THRESHOLD: f32 = 100.0;

// ── NeedType / NeedVariant ────────────────────────────────────────────────────

/// Discriminant of a need, used for presence queries and urgency rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NeedType {
    Hunger,
    Thirst,
}

impl fmt::Display for NeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NeedType::Hunger => write!(f, "hunger"),
            NeedType::Thirst => write!(f, "thirst"),
        }
    }
}

/// Parameters of the eat action driven by the hunger need.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HungerParams {
    /// Value restored by one meal.
    pub eat_gain: f32,
    /// Seconds one meal keeps the dog at the bowl.
    pub eat_cooldown: f32,
}

/// Variant-specific data of a need.
#[derive(Clone, Debug, PartialEq)]
pub enum NeedVariant {
    Hunger(HungerParams),
    Thirst,
}

impl NeedVariant {
    #[inline]
    pub fn need_type(&self) -> NeedType {
        match self {
            NeedVariant::Hunger(_) => NeedType::Hunger,
            NeedVariant::Thirst => NeedType::Thirst,
        }
    }
}

// ── Need ──────────────────────────────────────────────────────────────────────

/// A bounded scalar that decays over time and is restored by satisfaction
/// events.
///
/// `value` stays in `[0, max_value]` after every mutation, and
/// `max_value >= 1` so [`priority`][Self::priority] never divides by zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Need {
    name:               String,
    value:              f32,
    max_value:          f32,
    decrease_rate:      f32,
    critical_threshold: f32,
    variant:            NeedVariant,
}

impl Need {
    /// Build a need from its configuration, starting fully satisfied.
    ///
    /// Out-of-range inputs are normalized, never rejected:
    /// `max_value` is raised to at least 1, a negative `decrease_rate` becomes
    /// 0, `critical_threshold` is clamped to `[0, 100]` and a blank name
    /// becomes `"Need"`.
    pub fn new(config: &NeedConfig, variant: NeedVariant) -> Self {
        let name = if config.name.trim().is_empty() {
            tracing::warn!("need has a blank name, using \"Need\"");
            "Need".to_string()
        } else {
            config.name.clone()
        };

        let max_value = sanitize(config.max_value, 1.0, f32::MAX, 1.0);
        if max_value != config.max_value {
            tracing::warn!(need = %name, input = config.max_value, used = max_value, "max_value normalized");
        }

        let decrease_rate = sanitize(config.decrease_rate, 0.0, f32::MAX, 0.0);
        if decrease_rate != config.decrease_rate {
            tracing::warn!(need = %name, input = config.decrease_rate, used = decrease_rate, "decrease_rate normalized");
        }

        let critical_threshold =
            sanitize(config.critical_threshold, 0.0, MAX_CRITICAL_THRESHOLD, 0.0);
        if critical_threshold != config.critical_threshold {
            tracing::warn!(
                need = %name,
                input = config.critical_threshold,
                used = critical_threshold,
                "critical_threshold normalized",
            );
        }

        Self {
            name,
            value: max_value,
            max_value,
            decrease_rate,
            critical_threshold,
            variant,
        }
    }

    /// Build the hunger need, including its eat-action parameters.
    pub fn hunger(config: &HungerConfig) -> Self {
        let eat_cooldown = sanitize(config.eat_cooldown, 0.0, f32::MAX, 0.0);
        if eat_cooldown != config.eat_cooldown {
            tracing::warn!(input = config.eat_cooldown, used = eat_cooldown, "eat_cooldown normalized");
        }
        let eat_gain = if config.eat_gain.is_finite() { config.eat_gain } else { 0.0 };

        Self::new(&config.need, NeedVariant::Hunger(HungerParams { eat_gain, eat_cooldown }))
    }

    /// Build a thirst need.  Thirst carries no extra parameters yet.
    pub fn thirst(config: &NeedConfig) -> Self {
        Self::new(config, NeedVariant::Thirst)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn max_value(&self) -> f32 {
        self.max_value
    }

    #[inline]
    pub fn decrease_rate(&self) -> f32 {
        self.decrease_rate
    }

    #[inline]
    pub fn critical_threshold(&self) -> f32 {
        self.critical_threshold
    }

    #[inline]
    pub fn variant(&self) -> &NeedVariant {
        &self.variant
    }

    #[inline]
    pub fn need_type(&self) -> NeedType {
        self.variant.need_type()
    }

    /// Eat-action parameters, for hunger needs only.
    pub fn hunger_params(&self) -> Option<&HungerParams> {
        match &self.variant {
            NeedVariant::Hunger(params) => Some(params),
            _ => None,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Decay by `decrease_rate * dt`.  A negative or non-finite `dt` is
    /// treated as zero.
    pub fn tick(&mut self, dt: f32) {
        if !dt.is_finite() || dt <= 0.0 {
            return;
        }
        self.value = (self.value - self.decrease_rate * dt).clamp(0.0, self.max_value);
    }

    /// Add `amount` (any sign) and clamp.  Non-finite amounts are ignored.
    pub fn apply_satisfaction(&mut self, amount: f32) {
        if !amount.is_finite() {
            return;
        }
        self.value = (self.value + amount).clamp(0.0, self.max_value);
    }

    /// Apply one meal's `eat_gain`.  Returns the configured gain, or `None`
    /// when this is not a hunger need.
    pub fn eat_once(&mut self) -> Option<f32> {
        let gain = self.hunger_params()?.eat_gain;
        self.apply_satisfaction(gain);
        Some(gain)
    }

    // ── Derived values ────────────────────────────────────────────────────────

    /// Urgency in `[0, 1]`: 0 when full, 1 when empty.
    #[inline]
    pub fn priority(&self) -> f32 {
        1.0 - self.value / self.max_value
    }

    /// `value <= critical_threshold` (inclusive boundary).
    #[inline]
    pub fn is_critical(&self) -> bool {
        self.value <= self.critical_threshold
    }

    /// `value / max_value`.
    #[inline]
    pub fn normalized(&self) -> f32 {
        self.value / self.max_value
    }

    pub fn snapshot(&self) -> NeedSnapshot {
        NeedSnapshot {
            need_type:        self.need_type(),
            display_name:     self.name.clone(),
            current_value:    self.value,
            max_value:        self.max_value,
            normalized_value: self.normalized(),
            is_critical:      self.is_critical(),
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.1}/{:.1}", self.name, self.value, self.max_value)
    }
}

/// Clamp `input` into `[min, max]`; a NaN becomes `fallback`.
fn sanitize(input: f32, min: f32, max: f32, fallback: f32) -> f32 {
    if input.is_nan() { fallback } else { input.clamp(min, max) }
}
