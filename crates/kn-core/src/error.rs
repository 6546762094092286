//! Framework error type.
//!
//! Only configuration loading and validation can fail in this workspace.  The
//! behavior core (needs, state machine, aggregator) recovers locally from bad
//! data and never returns an error.

use thiserror::Error;

/// The top-level error type for `kn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum KnError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Shorthand result type for all `kn-*` crates.
pub type KnResult<T> = Result<T, KnError>;
