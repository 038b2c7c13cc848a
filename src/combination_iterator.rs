use std::iter::FusedIterator;

use crate::{error::Error, twiddle_state::TwiddleState};

/// Number of ways to choose `k` out of `n` elements, `None` if it does not fit a `usize`
pub fn binomial(n: usize, k: usize) -> Option<usize> {
    if k > n {
        return Some(0);
    }

    let k = k.min(n - k);
    let mut result = 1usize;

    for i in 0..k {
        let next = result as u128 * (n - i) as u128 / (i + 1) as u128;
        result = usize::try_from(next).ok()?;
    }

    Some(result)
}

/// Generates all combinations of `m` out of `n` values using Chase's twiddle algorithm.
///
/// Consecutive combinations differ in exactly one slot. The order is the one the
/// algorithm produces, not a lexicographic one.
#[derive(Clone, Debug)]
pub struct Twiddle {
    state: TwiddleState,
}

impl Twiddle {
    pub fn new(set_size: isize, combination_size: isize) -> Result<Self, Error> {
        Ok(Twiddle {
            state: TwiddleState::new(set_size, combination_size)?,
        })
    }

    pub fn set_size(&self) -> usize {
        self.state.set_size()
    }

    pub fn combination_size(&self) -> usize {
        self.state.combination_size()
    }

    pub fn combination_count(&self) -> Option<usize> {
        binomial(self.set_size(), self.combination_size())
    }

    /// Lazily generates the combinations of `values`, which must hold exactly `n` elements.
    ///
    /// Every call starts from a fresh copy of the control state, so runs never
    /// influence each other.
    pub fn generate<'a, T: Clone>(&self, values: &'a [T]) -> Result<Combinations<'a, T>, Error> {
        if values.len() != self.set_size() {
            return Err(Error::ValueCountMismatch {
                len: values.len(),
                expected: self.set_size(),
            });
        }

        let mut state = self.state.clone();
        state.reset();

        Ok(Combinations::new(values, state))
    }

    pub fn collect_all<T: Clone>(&self, values: &[T]) -> Result<Vec<Vec<T>>, Error> {
        Ok(self.generate(values)?.collect())
    }
}

#[derive(Clone, Debug)]
pub struct Combinations<'a, T> {
    values: &'a [T],
    state: TwiddleState,
    current: Vec<T>,
    started: bool,
    done: bool,
}

impl<'a, T: Clone> Combinations<'a, T> {
    fn new(values: &'a [T], state: TwiddleState) -> Self {
        let first = values.len() - state.combination_size();

        Combinations {
            values,
            current: values[first..].to_vec(),
            state,
            started: false,
            done: false,
        }
    }

    /// Returns the next combination without copying it.
    ///
    /// The buffer is modified in place, the view is only valid until the next call.
    pub fn advance(&mut self) -> Option<&[T]> {
        if self.done {
            return None;
        }

        if !self.started {
            self.started = true;
            return Some(&self.current);
        }

        if self.state.step() {
            self.done = true;
            return None;
        }

        self.current[self.state.z()] = self.values[self.state.x()].clone();
        Some(&self.current)
    }

    /// Starts over from the first combination
    pub fn restart(&mut self) {
        self.state.reset();

        let first = self.values.len() - self.state.combination_size();
        self.current.clone_from_slice(&self.values[first..]);

        self.started = false;
        self.done = false;
    }
}

impl<'a, T: Clone> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().map(<[T]>::to_vec)
    }
}

impl<'a, T: Clone> FusedIterator for Combinations<'a, T> {}
