use kn_core::KnError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("kennel configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match dog count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] KnError),
}

pub type SimResult<T> = Result<T, SimError>;
