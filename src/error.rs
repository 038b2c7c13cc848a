use std::fmt::Display;

/// The precondition that made a pair of parameters invalid
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Constraint {
    SetSizeNotPositive,
    CombinationSizeNotPositive,
    CombinationLargerThanSet,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Error {
    InvalidParameters {
        set_size: isize,
        combination_size: isize,
        constraint: Constraint,
    },
    ValueCountMismatch {
        len: usize,
        expected: usize,
    },
}

impl Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::SetSizeNotPositive => write!(f, "set size must be a positive integer"),
            Constraint::CombinationSizeNotPositive => {
                write!(f, "combination size must be a positive integer")
            }
            Constraint::CombinationLargerThanSet => {
                write!(f, "set size must be at least the combination size")
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidParameters {
                set_size,
                combination_size,
                constraint,
            } => write!(
                f,
                "Invalid parameters n = {set_size}, m = {combination_size}: {constraint}"
            ),
            Error::ValueCountMismatch { len, expected } => {
                write!(f, "Invalid number of values: {len}, expected {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
