use crate::domain::Balance;

/// How a requested stake amount is satisfied.
///
/// `to_stake` is covered by balance that is already frozen; `to_lock` requires
/// a fresh freeze. `to_lock + to_stake` always equals the requested amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StakeProjection {
    pub to_lock: Balance,
    pub to_stake: Balance,
}

impl StakeProjection {
    pub fn new(to_lock: Balance, to_stake: Balance) -> Self {
        Self { to_lock, to_stake }
    }

    /// the originally requested amount
    pub fn amount(&self) -> Balance {
        self.to_lock + self.to_stake
    }
}
