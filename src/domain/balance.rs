use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Amount of the chain's smallest indivisible unit.
///
/// `Balance` is unsigned and must never go negative: every subtraction that can
/// legitimately come up short goes through [`Balance::saturating_sub`] instead
/// of `-`. The `Sub` operator is reserved for differences the caller has
/// already proven safe and panics on underflow.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Balance(pub u128);

impl Balance {
    pub const ZERO: Balance = Balance(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Subtraction floored at zero.
    ///
    /// This is the single place the no-negative-Balance invariant is enforced;
    /// call sites must not reimplement it with `max`/`checked_sub` ad hoc.
    pub fn saturating_sub(self, other: Balance) -> Balance {
        Balance(self.0.saturating_sub(other.0))
    }
}

impl From<u128> for Balance {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Balance> for u128 {
    fn from(value: Balance) -> Self {
        value.0
    }
}

impl Add for Balance {
    type Output = Balance;

    fn add(self, rhs: Balance) -> Self::Output {
        Balance(self.0 + rhs.0)
    }
}

impl AddAssign for Balance {
    fn add_assign(&mut self, rhs: Balance) {
        self.0 += rhs.0;
    }
}

impl Sub for Balance {
    type Output = Balance;

    fn sub(self, rhs: Balance) -> Self::Output {
        Balance(self.0 - rhs.0)
    }
}

impl SubAssign for Balance {
    fn sub_assign(&mut self, rhs: Balance) {
        self.0 -= rhs.0;
    }
}

impl Display for Balance {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
