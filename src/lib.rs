//! Points/balance conversion and stake projection math for nomination pool staking.
//!
//! A pool member's claim on the pool is tracked in *points*, an internal accounting
//! unit. Points are only convertible to balance through the pool's
//! total-points/total-balance ratio at a point in time - see [`domain::PoolState`].
//!
//! [`domain::AccountStakeState`] derives how much of a wallet's balance is free to
//! stake right now and splits a requested stake amount between funds that are
//! already frozen and funds that require a fresh lock.
//!
//! All computations are total functions over immutable snapshots: degenerate
//! ratio conversions resolve to zero, requests that exceed capacity resolve to
//! `None`. The crate performs no I/O and holds no state.

pub mod core;
pub mod domain;
pub mod interface;
