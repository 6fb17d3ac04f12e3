use std::fmt::{self, Display, Formatter};
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A nomination pool's internal accounting unit.
///
/// Points represent a member's proportional claim on the pool's total balance.
/// They are deliberately a distinct type from [`Balance`]: the two are only
/// comparable through the pool's total-points/total-balance ratio, never
/// directly.
///
/// [`Balance`]: crate::domain::Balance
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct PoolPoints(pub u128);

impl PoolPoints {
    pub const ZERO: PoolPoints = PoolPoints(0);

    pub fn value(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u128> for PoolPoints {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<PoolPoints> for u128 {
    fn from(value: PoolPoints) -> Self {
        value.0
    }
}

impl Add for PoolPoints {
    type Output = PoolPoints;

    fn add(self, rhs: PoolPoints) -> Self::Output {
        PoolPoints(self.0 + rhs.0)
    }
}

impl AddAssign for PoolPoints {
    fn add_assign(&mut self, rhs: PoolPoints) {
        self.0 += rhs.0;
    }
}

impl Sub for PoolPoints {
    type Output = PoolPoints;

    fn sub(self, rhs: PoolPoints) -> Self::Output {
        PoolPoints(self.0 - rhs.0)
    }
}

impl SubAssign for PoolPoints {
    fn sub_assign(&mut self, rhs: PoolPoints) {
        self.0 -= rhs.0;
    }
}

impl Display for PoolPoints {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
