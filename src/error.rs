use thiserror::Error;

/// Errors raised by operations that are undefined for their input
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CfError {
    #[error("the operation is undefined for an infinite value")]
    Infinite,
    #[error("square root of a negative number")]
    NegativeSqrt,
    #[error("radix {0} is outside the supported range 2..=36")]
    InvalidRadix(u32),
    #[error("radix {radix} needs {radix} digit glyphs, but only {available} are given")]
    MissingDigits { radix: u32, available: usize },
    #[error("NaN has no continued fraction")]
    NotANumber,
}
