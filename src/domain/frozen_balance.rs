use crate::domain::Balance;

/// On-chain lock categories for an account at a given block.
///
/// Frozen funds still count toward the account's total balance but cannot be
/// transferred. `total == staking + releasing + candidate_bond`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct FrozenBalance {
    pub staking: Balance,
    pub releasing: Balance,
    pub candidate_bond: Balance,
}

impl FrozenBalance {
    pub fn new(staking: Balance, releasing: Balance, candidate_bond: Balance) -> Self {
        Self {
            staking,
            releasing,
            candidate_bond,
        }
    }

    pub fn total(&self) -> Balance {
        self.staking + self.releasing + self.candidate_bond
    }
}
