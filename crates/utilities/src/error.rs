use thiserror::Error;

pub type UtilityResult<T> = Result<T, UtilityError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UtilityError {
    #[error("Cannot divide by zero.")]
    DivideByZero,

    /// Argument outside the operation's domain.
    #[error("{0}")]
    OutOfRange(&'static str),

    #[error("result of {0} does not fit in 64 bits")]
    Overflow(&'static str),
}
