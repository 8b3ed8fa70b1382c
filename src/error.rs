use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or dividing a [`BigInt`](crate::BigInt).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("cannot parse integer from a string without digits")]
    Empty,

    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("radix {0} is not supported, only decimal numerals are")]
    UnsupportedRadix(u32),
}
