use crate::core::U256;
use crate::domain::{Balance, PoolPoints};

/// Rounding policy for balance-to-points conversions.
///
/// The direction is a financial-safety policy, not a formatting choice:
/// round up when computing how many points must be *burned* to redeem a
/// balance (the pool must never pay out more than the points cover), round
/// down when computing how many points to *credit* for a deposited balance
/// (the pool must never issue excess points).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Rounding {
    Down,
    Up,
}

/// Nomination pool totals at a point in time, i.e., at a block height.
///
/// pool balance per point = `total_balance` / `total_points`
///
/// A snapshot is fetched per query and never mutated or cached beyond a single
/// computation; conversions against two different snapshots are not comparable.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct PoolState {
    total_points: PoolPoints,
    total_balance: Balance,
}

impl PoolState {
    pub fn new(total_points: PoolPoints, total_balance: Balance) -> Self {
        Self {
            total_points,
            total_balance,
        }
    }

    pub fn total_points(&self) -> PoolPoints {
        self.total_points
    }

    pub fn total_balance(&self) -> Balance {
        self.total_balance
    }

    /// Converts pool points to balance, rounded down.
    ///
    /// Returns the member's proportional share of the pool balance:
    /// `floor(total_balance * points / total_points)`.
    ///
    /// An empty or newly created pool has no redeemable balance yet, so a zero
    /// pool balance, zero total points, or zero target resolves to zero rather
    /// than an error.
    pub fn points_to_balance(&self, points: PoolPoints) -> Balance {
        if self.total_balance.is_zero() || self.total_points.is_zero() || points.is_zero() {
            return Balance::ZERO;
        }
        let value = U256::from(self.total_balance.value()) * U256::from(points.value())
            / U256::from(self.total_points.value());
        value.as_u128().into()
    }

    /// Converts balance to pool points under the given rounding policy.
    ///
    /// Computes `balance * total_points / total_balance` exactly in 256-bit
    /// arithmetic; [`Rounding::Up`] adds one point when the division is
    /// inexact. Same zero-guard as [`PoolState::points_to_balance`].
    pub fn balance_to_points(&self, balance: Balance, rounding: Rounding) -> PoolPoints {
        if self.total_balance.is_zero() || self.total_points.is_zero() || balance.is_zero() {
            return PoolPoints::ZERO;
        }
        let product = U256::from(balance.value()) * U256::from(self.total_points.value());
        let (quotient, remainder) = product.div_mod(U256::from(self.total_balance.value()));
        let points = match rounding {
            Rounding::Up if !remainder.is_zero() => quotient + U256::from(1u64),
            _ => quotient,
        };
        points.as_u128().into()
    }

    /// Points to burn to withdraw `balance`, clamped to the member's own stake.
    ///
    /// Always rounds up: under-burning points relative to the balance
    /// extracted would let a member take out more value than their points
    /// represent. The clamp to `member_points` protects the member's total
    /// entitlement against rounding artifacts and stale balance reads.
    pub fn unstaking_balance_to_points(
        &self,
        balance: Balance,
        member_points: PoolPoints,
    ) -> PoolPoints {
        let points = self.balance_to_points(balance, Rounding::Up);
        if points > member_points {
            log::debug!(
                "unstake of {} needs {} points, clamping to member stake of {}",
                balance,
                points,
                member_points
            );
            member_points
        } else {
            points
        }
    }

    /// The member's staked balance: the round-down redemption value of their points.
    pub fn member_stake(&self, member_points: PoolPoints) -> Balance {
        self.points_to_balance(member_points)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn points_to_balance_zero_guard() {
        let pool = PoolState::new(PoolPoints(1000), Balance(500));
        assert_eq!(pool.points_to_balance(PoolPoints::ZERO), Balance::ZERO);

        let empty_balance = PoolState::new(PoolPoints(1000), Balance::ZERO);
        assert_eq!(empty_balance.points_to_balance(PoolPoints(100)), Balance::ZERO);

        let empty_points = PoolState::new(PoolPoints::ZERO, Balance(500));
        assert_eq!(empty_points.points_to_balance(PoolPoints(100)), Balance::ZERO);
    }

    #[test]
    fn full_pool_redemption_returns_full_balance() {
        let pool = PoolState::new(PoolPoints(1000), Balance(500));
        assert_eq!(pool.points_to_balance(PoolPoints(1000)), Balance(500));
    }

    #[test]
    fn points_to_balance_rounds_down() {
        // 7 * 100 / 3 = 233.33..
        let pool = PoolState::new(PoolPoints(3), Balance(7));
        assert_eq!(pool.points_to_balance(PoolPoints(100)), Balance(233));
    }

    #[test]
    fn balance_to_points_exact_division() {
        let pool = PoolState::new(PoolPoints(1000), Balance(1000));
        assert_eq!(
            pool.balance_to_points(Balance(333), Rounding::Down),
            PoolPoints(333)
        );
        assert_eq!(
            pool.balance_to_points(Balance(333), Rounding::Up),
            PoolPoints(333)
        );
    }

    #[test]
    fn balance_to_points_rounding() {
        // 100 * 3 / 7 = 42.857..
        let pool = PoolState::new(PoolPoints(3), Balance(7));
        assert_eq!(
            pool.balance_to_points(Balance(100), Rounding::Down),
            PoolPoints(42)
        );
        assert_eq!(
            pool.balance_to_points(Balance(100), Rounding::Up),
            PoolPoints(43)
        );
    }

    #[test]
    fn balance_to_points_zero_guard() {
        let pool = PoolState::new(PoolPoints(1000), Balance(500));
        assert_eq!(
            pool.balance_to_points(Balance::ZERO, Rounding::Up),
            PoolPoints::ZERO
        );

        let empty = PoolState::default();
        assert_eq!(
            empty.balance_to_points(Balance(100), Rounding::Up),
            PoolPoints::ZERO
        );
    }

    #[test]
    fn large_pool_products_do_not_overflow() {
        // both operands near u128::MAX - the product only fits in 256 bits
        let pool = PoolState::new(PoolPoints(u128::MAX), Balance(u128::MAX));
        assert_eq!(
            pool.points_to_balance(PoolPoints(u128::MAX)),
            Balance(u128::MAX)
        );
        assert_eq!(
            pool.balance_to_points(Balance(u128::MAX), Rounding::Up),
            PoolPoints(u128::MAX)
        );
    }

    #[test]
    fn unstaking_clamps_to_member_points() {
        let pool = PoolState::new(PoolPoints(3), Balance(7));
        // unclamped round-up result would be 43
        assert_eq!(
            pool.unstaking_balance_to_points(Balance(100), PoolPoints(40)),
            PoolPoints(40)
        );
        assert_eq!(
            pool.unstaking_balance_to_points(Balance(100), PoolPoints(50)),
            PoolPoints(43)
        );
    }

    #[test]
    fn member_stake_matches_points_to_balance() {
        let pool = PoolState::new(PoolPoints(1000), Balance(2500));
        assert_eq!(pool.member_stake(PoolPoints(400)), Balance(1000));
        assert_eq!(
            pool.member_stake(PoolPoints(400)),
            pool.points_to_balance(PoolPoints(400))
        );
    }

    #[quickcheck]
    fn points_to_balance_zero_on_any_zero_input(
        total_points: u64,
        pool_balance: u64,
        target: u64,
    ) -> bool {
        let inputs = [
            (0, pool_balance as u128, target as u128),
            (total_points as u128, 0, target as u128),
            (total_points as u128, pool_balance as u128, 0),
        ];
        inputs.iter().all(|&(points, balance, target)| {
            PoolState::new(PoolPoints(points), Balance(balance))
                .points_to_balance(PoolPoints(target))
                .is_zero()
        })
    }

    #[quickcheck]
    fn unstaking_never_exceeds_member_points(
        total_points: u64,
        pool_balance: u64,
        target: u64,
        member_points: u64,
    ) -> bool {
        let pool = PoolState::new(PoolPoints(total_points as u128), Balance(pool_balance as u128));
        let points =
            pool.unstaking_balance_to_points(Balance(target as u128), PoolPoints(member_points as u128));
        points <= PoolPoints(member_points as u128)
    }

    #[quickcheck]
    fn rounding_up_exceeds_rounding_down_by_at_most_one(
        total_points: u64,
        pool_balance: u64,
        target: u64,
    ) -> bool {
        let pool = PoolState::new(PoolPoints(total_points as u128), Balance(pool_balance as u128));
        let down = pool.balance_to_points(Balance(target as u128), Rounding::Down);
        let up = pool.balance_to_points(Balance(target as u128), Rounding::Up);
        up >= down && up.value() - down.value() <= 1
    }

    #[quickcheck]
    fn member_share_never_exceeds_pool_balance(
        total_points: u64,
        pool_balance: u64,
        member_points: u64,
    ) -> bool {
        let member_points = member_points.min(total_points);
        let pool = PoolState::new(PoolPoints(total_points as u128), Balance(pool_balance as u128));
        pool.member_stake(PoolPoints(member_points as u128)) <= Balance(pool_balance as u128)
    }
}
