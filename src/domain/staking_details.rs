use crate::domain::{Balance, BlockHeight};

/// An account's staking position at a given block.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct StakingDetails {
    pub total_stake: Balance,
    pub last_unstake: Option<UnstakeRecord>,
}

impl StakingDetails {
    pub fn new(total_stake: Balance, last_unstake: Option<UnstakeRecord>) -> Self {
        Self {
            total_stake,
            last_unstake,
        }
    }

    /// Balance held back by a still-pending unstake.
    ///
    /// A just-initiated unstake is not available to restake while its unlock
    /// block lies in the future, even though it may no longer show as staked.
    pub fn unavailable_due_unstake(&self, current_block: BlockHeight) -> Balance {
        match self.last_unstake {
            Some(unstake) if unstake.is_pending(current_block) => unstake.amount,
            _ => Balance::ZERO,
        }
    }
}

/// The most recent unstake request and the block at which its funds unlock.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UnstakeRecord {
    pub amount: Balance,
    pub block_height: BlockHeight,
}

impl UnstakeRecord {
    pub fn new(amount: Balance, block_height: BlockHeight) -> Self {
        Self {
            amount,
            block_height,
        }
    }

    /// true while the unlock block has not been reached
    pub fn is_pending(&self, current_block: BlockHeight) -> bool {
        self.block_height > current_block
    }
}
