//! defines the JSON-facing interface model
//!
//! The interface model mirrors the domain model. Amounts are string-encoded
//! because JSON numbers cannot carry `u128` precision across all consumers.

pub mod model;

pub use model::{
    FrozenBalance, PoolState, StakeProjection, StakingDetails, UnstakeRecord, U128,
};
