//! The food bowl collaborator and its stock implementation.

use std::fmt;

use kn_core::{BowlConfig, BowlId, Vec2};

/// Something a dog can eat from.
pub trait Bowl {
    /// `true` while there is food left.
    fn is_usable(&self) -> bool;

    /// Remove `amount` of food.  The quantity never goes below zero.
    fn decrease_quantity(&mut self, amount: f32);

    fn position(&self) -> Vec2;
}

/// A bowl with a fixed capacity, refilled by the player.
#[derive(Clone, Debug, PartialEq)]
pub struct FoodBowl {
    id:       BowlId,
    position: Vec2,
    capacity: f32,
    quantity: f32,
}

impl FoodBowl {
    /// A full bowl.  A negative or NaN capacity is treated as 0.
    pub fn new(id: BowlId, config: &BowlConfig) -> Self {
        let capacity = if config.capacity.is_nan() { 0.0 } else { config.capacity.max(0.0) };
        if capacity != config.capacity {
            tracing::warn!(bowl = %id, input = config.capacity, used = capacity, "bowl capacity normalized");
        }
        Self {
            id,
            position: config.position,
            capacity,
            quantity: capacity,
        }
    }

    #[inline]
    pub fn id(&self) -> BowlId {
        self.id
    }

    #[inline]
    pub fn quantity(&self) -> f32 {
        self.quantity
    }

    #[inline]
    pub fn capacity(&self) -> f32 {
        self.capacity
    }

    /// Add food, clamped to the capacity.  Non-finite amounts are ignored.
    pub fn add_quantity(&mut self, amount: f32) {
        if amount.is_finite() {
            self.quantity = (self.quantity + amount).clamp(0.0, self.capacity);
        }
    }

    /// Fill to capacity (the player's interaction with the bowl).
    pub fn refill(&mut self) {
        self.quantity = self.capacity;
        tracing::debug!(bowl = %self.id, quantity = self.quantity, "bowl refilled");
    }

    pub fn empty(&mut self) {
        self.quantity = 0.0;
    }
}

impl Bowl for FoodBowl {
    fn is_usable(&self) -> bool {
        self.quantity > 0.0
    }

    fn decrease_quantity(&mut self, amount: f32) {
        if amount.is_finite() {
            self.quantity = (self.quantity - amount).clamp(0.0, self.capacity);
        }
    }

    fn position(&self) -> Vec2 {
        self.position
    }
}

impl fmt::Display for FoodBowl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.0}/{:.0}", self.id, self.quantity, self.capacity)
    }
}
