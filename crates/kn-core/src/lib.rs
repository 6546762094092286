//! `kn-core`: foundational types for the `kennel` dog-pension simulation.
//!
//! This crate is a dependency of every other `kn-*` crate.  It has no `kn-*`
//! dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`ids`]         | `DogId`, `BowlId`                                         |
//! | [`geo`]         | `Vec2` ground-plane vector                                |
//! | [`time`]        | `Frame`, `SimClock`                                       |
//! | [`rng`]         | `DogRng` (per-dog), `SimRng` (global)                     |
//! | [`config`]      | `KennelConfig` and its sections, TOML loading             |
//! | [`error`]       | `KnError`, `KnResult`                                     |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{
    BowlConfig, DogConfig, HungerConfig, KennelConfig, NeedConfig, PensionSettings, SimConfig,
};
pub use error::{KnError, KnResult};
pub use geo::Vec2;
pub use ids::{BowlId, DogId};
pub use rng::{DogRng, SimRng};
pub use time::{Frame, SimClock};
