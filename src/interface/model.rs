use crate::domain;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Display, Formatter};

/// `u128` that serializes as a decimal string.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Default)]
pub struct U128(pub u128);

impl Serialize for U128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for U128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse::<u128>().map(U128).map_err(de::Error::custom)
    }
}

impl From<u128> for U128 {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<U128> for u128 {
    fn from(value: U128) -> Self {
        value.0
    }
}

impl From<domain::Balance> for U128 {
    fn from(value: domain::Balance) -> Self {
        Self(value.value())
    }
}

impl From<U128> for domain::Balance {
    fn from(value: U128) -> Self {
        value.0.into()
    }
}

impl From<domain::PoolPoints> for U128 {
    fn from(value: domain::PoolPoints) -> Self {
        Self(value.value())
    }
}

impl From<U128> for domain::PoolPoints {
    fn from(value: U128) -> Self {
        value.0.into()
    }
}

impl Display for U128 {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct PoolState {
    pub total_points: U128,
    pub total_balance: U128,
}

impl From<domain::PoolState> for PoolState {
    fn from(value: domain::PoolState) -> Self {
        Self {
            total_points: value.total_points().into(),
            total_balance: value.total_balance().into(),
        }
    }
}

impl From<PoolState> for domain::PoolState {
    fn from(value: PoolState) -> Self {
        domain::PoolState::new(value.total_points.into(), value.total_balance.into())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct FrozenBalance {
    pub staking: U128,
    pub releasing: U128,
    pub candidate_bond: U128,
}

impl From<domain::FrozenBalance> for FrozenBalance {
    fn from(value: domain::FrozenBalance) -> Self {
        Self {
            staking: value.staking.into(),
            releasing: value.releasing.into(),
            candidate_bond: value.candidate_bond.into(),
        }
    }
}

impl From<FrozenBalance> for domain::FrozenBalance {
    fn from(value: FrozenBalance) -> Self {
        domain::FrozenBalance::new(
            value.staking.into(),
            value.releasing.into(),
            value.candidate_bond.into(),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct StakingDetails {
    pub total_stake: U128,
    pub last_unstake: Option<UnstakeRecord>,
}

impl From<domain::StakingDetails> for StakingDetails {
    fn from(value: domain::StakingDetails) -> Self {
        Self {
            total_stake: value.total_stake.into(),
            last_unstake: value.last_unstake.map(Into::into),
        }
    }
}

impl From<StakingDetails> for domain::StakingDetails {
    fn from(value: StakingDetails) -> Self {
        domain::StakingDetails::new(
            value.total_stake.into(),
            value.last_unstake.map(Into::into),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct UnstakeRecord {
    pub amount: U128,
    pub block_height: u64,
}

impl From<domain::UnstakeRecord> for UnstakeRecord {
    fn from(value: domain::UnstakeRecord) -> Self {
        Self {
            amount: value.amount.into(),
            block_height: value.block_height.value(),
        }
    }
}

impl From<UnstakeRecord> for domain::UnstakeRecord {
    fn from(value: UnstakeRecord) -> Self {
        domain::UnstakeRecord::new(value.amount.into(), value.block_height.into())
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
pub struct StakeProjection {
    pub to_lock: U128,
    pub to_stake: U128,
}

impl From<domain::StakeProjection> for StakeProjection {
    fn from(value: domain::StakeProjection) -> Self {
        Self {
            to_lock: value.to_lock.into(),
            to_stake: value.to_stake.into(),
        }
    }
}

impl From<StakeProjection> for domain::StakeProjection {
    fn from(value: StakeProjection) -> Self {
        domain::StakeProjection::new(value.to_lock.into(), value.to_stake.into())
    }
}
