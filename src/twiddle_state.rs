use crate::error::{Constraint, Error};

/// Bookkeeping of Chase's twiddle algorithm for choosing `m` out of `n`.
///
/// `p` has `n + 2` entries. `p[0]` holds `n + 1` and `p[n + 1]` holds `-2`, both
/// are never written after initialization. Positive entries in between mark
/// selected positions, zero entries are pending and `-1` entries are consumed.
///
/// After every successful [`step`](TwiddleState::step) the slot `z` of the
/// current combination has to be replaced by the value at index `x`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TwiddleState {
    n: usize,
    m: usize,
    p: Box<[isize]>,
    x: usize,
    y: usize,
    z: usize,
    exhausted: bool,
}

/// Checks `1 <= m <= n` and returns `(n, m)` as unsigned sizes
pub fn validate(set_size: isize, combination_size: isize) -> Result<(usize, usize), Error> {
    let constraint = if set_size <= 0 {
        Constraint::SetSizeNotPositive
    } else if combination_size <= 0 {
        Constraint::CombinationSizeNotPositive
    } else if combination_size > set_size {
        Constraint::CombinationLargerThanSet
    } else {
        return Ok((set_size as usize, combination_size as usize));
    };

    Err(Error::InvalidParameters {
        set_size,
        combination_size,
        constraint,
    })
}

impl TwiddleState {
    pub fn new(set_size: isize, combination_size: isize) -> Result<Self, Error> {
        let (n, m) = validate(set_size, combination_size)?;

        let mut state = TwiddleState {
            n,
            m,
            p: vec![0; n + 2].into_boxed_slice(),
            x: 0,
            y: 0,
            z: 0,
            exhausted: false,
        };
        state.reset();

        Ok(state)
    }

    pub fn set_size(&self) -> usize {
        self.n
    }

    pub fn combination_size(&self) -> usize {
        self.m
    }

    /// Index of the value that entered the combination in the last step
    pub fn x(&self) -> usize {
        self.x
    }

    /// Index of the value that left the combination in the last step
    pub fn y(&self) -> usize {
        self.y
    }

    /// Slot of the combination that changed in the last step
    pub fn z(&self) -> usize {
        self.z
    }

    /// Restores the layout produced by [`TwiddleState::new`]
    pub fn reset(&mut self) {
        let (n, m) = (self.n, self.m);

        self.p[0] = n as isize + 1;
        self.p[1..=n - m].fill(0);
        for i in n - m + 1..=n {
            self.p[i] = (i + m - n) as isize;
        }
        self.p[n + 1] = -2;

        self.x = 0;
        self.y = 0;
        self.z = 0;
        self.exhausted = false;
    }

    /// Advances to the next combination, returns `true` if there is none left.
    ///
    /// Once exhausted the state stays untouched until [`reset`](TwiddleState::reset).
    pub fn step(&mut self) -> bool {
        if self.exhausted {
            return true;
        }

        let p = &mut self.p;

        let mut j = 1;
        while p[j] <= 0 {
            j += 1;
        }

        if p[j - 1] == 0 {
            p[2..j].fill(-1);
            p[j] = 0;
            p[1] = 1;

            self.x = 0;
            self.y = j - 1;
            self.z = 0;
            return false;
        }

        if j > 1 {
            p[j - 1] = 0;
        }

        j += 1;
        while p[j] > 0 {
            j += 1;
        }

        let k = j - 1;
        let mut i = j;
        while p[i] == 0 {
            p[i] = -1;
            i += 1;
        }

        if p[i] == -1 {
            p[j] = p[k];
            self.x = i - 1;
            self.y = k - 1;
            self.z = (p[k] - 1) as usize;
            p[k] = -1;
        } else if i as isize == p[0] {
            self.exhausted = true;
            return true;
        } else {
            p[j] = p[i];
            self.x = j - 1;
            self.y = i - 1;
            self.z = (p[i] - 1) as usize;
            p[i] = 0;
        }

        false
    }
}
