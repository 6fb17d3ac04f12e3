use crate::domain::{Balance, BlockHeight, FrozenBalance, StakeProjection, StakingDetails};

/// A wallet's balance, lock, and staking position at a single block.
///
/// All inputs are snapshots supplied by the caller's query services; nothing
/// here is fetched or cached. The derivations are pure and safe to call from
/// any thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccountStakeState {
    free_balance: Balance,
    frozen: FrozenBalance,
    staking: Option<StakingDetails>,
    current_block: BlockHeight,
}

impl AccountStakeState {
    pub fn new(
        free_balance: Balance,
        frozen: FrozenBalance,
        staking: Option<StakingDetails>,
        current_block: BlockHeight,
    ) -> Self {
        Self {
            free_balance,
            frozen,
            staking,
            current_block,
        }
    }

    pub fn free_balance(&self) -> Balance {
        self.free_balance
    }

    pub fn frozen(&self) -> FrozenBalance {
        self.frozen
    }

    pub fn staking(&self) -> Option<StakingDetails> {
        self.staking
    }

    pub fn current_block(&self) -> BlockHeight {
        self.current_block
    }

    pub fn total_staked(&self) -> Balance {
        self.staking
            .map(|details| details.total_stake)
            .unwrap_or(Balance::ZERO)
    }

    /// Balance held back by a still-pending unstake, per [`StakingDetails::unavailable_due_unstake`].
    pub fn unavailable_due_unstake(&self) -> Balance {
        self.staking
            .map(|details| details.unavailable_due_unstake(self.current_block))
            .unwrap_or(Balance::ZERO)
    }

    /// How much additional balance can be newly staked right now.
    ///
    /// Frozen-but-not-staked funds (e.g. released but not yet withdrawn) count
    /// toward capacity; a pending unstake is subtracted because its funds
    /// cannot be restaked until their unlock block.
    pub fn stakable_amount(&self) -> Balance {
        let total_staked = self.total_staked();
        let frozen_but_not_staked = self.frozen.total().saturating_sub(total_staked);
        let available = self.free_balance.saturating_sub(total_staked) + frozen_but_not_staked;
        available.saturating_sub(self.unavailable_due_unstake())
    }

    /// Splits a requested stake amount into freshly-locked and already-frozen
    /// portions.
    ///
    /// Returns `None` when the request exceeds [`AccountStakeState::stakable_amount`];
    /// callers are expected to surface that as an insufficient-funds validation.
    /// For any `Some` result, `to_lock + to_stake` equals `amount`.
    pub fn derive_stake_projection(&self, amount: Balance) -> Option<StakeProjection> {
        let stakable = self.stakable_amount();
        if amount > stakable {
            log::debug!(
                "stake request of {} exceeds stakable amount of {}",
                amount,
                stakable
            );
            return None;
        }

        let already_committed = self.total_staked() + self.unavailable_due_unstake();
        let available_staked_amount = self.frozen.total().saturating_sub(already_committed);

        if available_staked_amount >= amount {
            Some(StakeProjection::new(Balance::ZERO, amount))
        } else {
            Some(StakeProjection::new(
                amount - available_staked_amount,
                available_staked_amount,
            ))
        }
    }
}
