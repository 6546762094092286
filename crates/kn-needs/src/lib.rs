//! `kn-needs`: decaying needs and the per-dog need controller.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                      |
//! |----------------|---------------------------------------------------------------|
//! | [`need`]       | `Need`, `NeedType`, `NeedVariant`, `HungerParams`             |
//! | [`controller`] | `NeedController`: ticks needs, ranks urgency, eats           |
//! | [`snapshot`]   | `NeedSnapshot`: display projection of one need               |
//! | [`events`]     | `NeedEvent` change notifications                              |
//! | [`provider`]   | `SatisfactionProvider` capability                             |
//!
//! # Design notes
//!
//! A need is one struct carrying a tagged [`NeedVariant`]; code that cares
//! about a specific kind matches on [`NeedType`] rather than inspecting
//! concrete types.  Bad configuration values are clamped at construction and
//! logged with `tracing::warn!`; nothing in this crate returns an error.
//!
//! Change notifications are queued on the controller and drained by its
//! owner, so the controller never holds references to listeners.

pub mod controller;
pub mod events;
pub mod need;
pub mod provider;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use controller::NeedController;
pub use events::NeedEvent;
pub use need::{HungerParams, Need, NeedType, NeedVariant};
pub use provider::SatisfactionProvider;
pub use snapshot::NeedSnapshot;
