//! The player's pension: a name plus money and prestige balances.

use std::fmt;

use kn_core::{PensionSettings, SimRng};
use serde::Serialize;

use crate::{DayRewards, PensionError, PensionResult};

/// Name used when none is given and none can be drawn.
pub const DEFAULT_PENSION_NAME: &str = "Ma pension";

/// Money and prestige never go below zero; every setter clamps.
#[derive(Clone, Debug, PartialEq)]
pub struct Pension {
    name:     String,
    money:    i64,
    prestige: i64,
}

impl Pension {
    /// A blank `name` becomes [`DEFAULT_PENSION_NAME`]; surrounding
    /// whitespace is trimmed.
    pub fn new(name: &str, money: i64, prestige: i64) -> Self {
        let trimmed = name.trim();
        let name = if trimmed.is_empty() {
            DEFAULT_PENSION_NAME.to_string()
        } else {
            trimmed.to_string()
        };
        Self {
            name,
            money: money.max(0),
            prestige: prestige.max(0),
        }
    }

    /// Create a pension from its settings.  A blank configured name is
    /// replaced by one drawn from `settings.random_names`.
    pub fn from_settings(settings: &PensionSettings, rng: &mut SimRng) -> Self {
        let name = if settings.name.trim().is_empty() {
            random_pension_name(settings, rng)
        } else {
            settings.name.clone()
        };
        let pension = Self::new(&name, settings.starting_money, settings.starting_prestige);
        tracing::info!(name = %pension.name, money = pension.money, "pension created");
        pension
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn money(&self) -> i64 {
        self.money
    }

    #[inline]
    pub fn prestige(&self) -> i64 {
        self.prestige
    }

    /// Add `amount` (may be negative); the balance floors at 0.
    pub fn add_money(&mut self, amount: i64) {
        self.money = self.money.saturating_add(amount).max(0);
    }

    /// Withdraw `amount`, failing without change if the balance is short or
    /// the amount is negative (use [`add_money`][Self::add_money] to credit).
    pub fn spend_money(&mut self, amount: i64) -> PensionResult<()> {
        if amount < 0 {
            return Err(PensionError::NegativeAmount { requested: amount });
        }
        if self.money < amount {
            tracing::warn!(balance = self.money, requested = amount, "not enough money");
            return Err(PensionError::InsufficientFunds {
                balance:   self.money,
                requested: amount,
            });
        }
        self.add_money(-amount);
        Ok(())
    }

    pub fn add_prestige(&mut self, amount: i64) {
        self.prestige = self.prestige.saturating_add(amount).max(0);
    }

    /// Overwrite both balances (restoring a saved pension).
    pub fn set_values(&mut self, money: i64, prestige: i64) {
        self.money = money.max(0);
        self.prestige = prestige.max(0);
    }

    pub fn apply_rewards(&mut self, rewards: &DayRewards) {
        self.add_money(rewards.money);
        self.add_prestige(rewards.prestige);
        tracing::info!(
            money = rewards.money,
            prestige = rewards.prestige,
            satisfaction = rewards.satisfaction,
            "day rewards applied",
        );
    }

    pub fn summary(&self) -> PensionSummary {
        PensionSummary {
            name:     self.name.clone(),
            money:    self.money,
            prestige: self.prestige,
        }
    }
}

impl fmt::Display for Pension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (${}, {} prestige)", self.name, self.money, self.prestige)
    }
}

/// Plain-data view of a pension for display and export.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PensionSummary {
    pub name:     String,
    pub money:    i64,
    pub prestige: i64,
}

/// Draw a name from `settings.random_names`, or [`DEFAULT_PENSION_NAME`]
/// when the list is empty.
pub fn random_pension_name(settings: &PensionSettings, rng: &mut SimRng) -> String {
    rng.choose(&settings.random_names)
        .cloned()
        .unwrap_or_else(|| DEFAULT_PENSION_NAME.to_string())
}
