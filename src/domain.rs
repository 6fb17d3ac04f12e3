//! defines the internal domain model used to implement the staking math
//!
//! NOTE: the domain model is separate from the interface model. That being said, the interface model
//! closely mirrors the domain model.

mod account_stake_state;
mod balance;
mod block_height;
mod frozen_balance;
mod pool_points;
mod pool_state;
mod stake_projection;
mod staking_details;

pub use account_stake_state::AccountStakeState;
pub use balance::Balance;
pub use block_height::BlockHeight;
pub use frozen_balance::FrozenBalance;
pub use pool_points::PoolPoints;
pub use pool_state::{PoolState, Rounding};
pub use stake_projection::StakeProjection;
pub use staking_details::{StakingDetails, UnstakeRecord};
