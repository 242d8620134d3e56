//! Exact real arithmetic on lazily evaluated continued fractions.
//!
//! Numbers are streams of integer partial quotients, every operation transforms
//! the streams directly (Gosper's algorithm) without rounding through floats.

mod cont_frac;
mod error;
mod format;
pub mod random;
pub mod symbols;
pub mod traits;

pub use cont_frac::*;
pub use error::CfError;
pub use format::{FormatOptions, NegativePattern};
pub use traits::{Approximation, Computable};
