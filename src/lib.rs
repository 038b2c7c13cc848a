//! Combinations of `m` out of `n` values, generated in place with Chase's twiddle
//! algorithm (ACM TOMS 382).

mod combination_iterator;
mod error;
mod twiddle_state;

pub use combination_iterator::{binomial, Combinations, Twiddle};
pub use error::{Constraint, Error};
pub use twiddle_state::{validate, TwiddleState};
