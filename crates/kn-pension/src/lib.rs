//! `kn-pension`: pension-wide satisfaction and the economy it feeds.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                     |
//! |----------------|--------------------------------------------------------------|
//! | [`aggregator`] | `SatisfactionAggregator`, `ProviderLookup`, `SnapshotMap`    |
//! | [`pension`]    | `Pension` (name, money, prestige), `PensionSummary`          |
//! | [`rewards`]    | `DayRewards`: end-of-day conversion of satisfaction         |
//! | [`error`]      | `PensionError`, `PensionResult<T>`                           |
//!
//! # Design notes
//!
//! The aggregator is a plain owned value.  The orchestrator creates it at
//! session start, passes it by reference to whoever needs it, and drops it at
//! session end; there is no global instance.  It stores dog handles rather
//! than references, and resolves them through a [`ProviderLookup`] at
//! recompute time, so dogs can join and leave without borrow entanglement.
//!
//! # Features
//!
//! - `fx-hash`: [`SnapshotMap`] uses `rustc_hash::FxHashMap` instead of the
//!   standard SipHash map.

pub mod aggregator;
pub mod error;
pub mod pension;
pub mod rewards;


pub use aggregator::{ProviderLookup, SatisfactionAggregator, SnapshotMap};
pub use error::{PensionError, PensionResult};
pub use pension::{DEFAULT_PENSION_NAME, Pension, PensionSummary, random_pension_name};
pub use rewards::DayRewards;
