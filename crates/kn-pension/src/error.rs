use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PensionError {
    #[error("not enough money: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: i64, requested: i64 },

    #[error("cannot spend a negative amount: {requested}")]
    NegativeAmount { requested: i64 },
}

pub type PensionResult<T> = Result<T, PensionError>;
