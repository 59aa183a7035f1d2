#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for the reward formula and the APR bound.
//!
//! Invariants tested:
//! - Accrual never exceeds the exact rational reward and misses it by less than one unit
//! - Accrual is non-decreasing in elapsed time, principal and rate
//! - A clock behind the checkpoint accrues nothing
//! - `update_apr` accepts every rate up to the cap and rejects every rate above it

use proptest::prelude::*;
use staking_pool::rewards::{accrued, BPS_DENOMINATOR, SECONDS_PER_YEAR};
use staking_pool::{ContractError, StakerRecord, MAX_APR_BPS, UNIT};

use crate::fixture::setup;

fn record(staked_amount: i128, last_accrual_time: u64) -> StakerRecord {
    StakerRecord {
        staked_amount,
        last_accrual_time,
    }
}

proptest! {
    /// Truncation only ever rounds down, by strictly less than one base unit.
    #[test]
    fn prop_accrual_matches_exact_rate(
        staked in 1i128..=1_000_000 * UNIT,
        apr in 0u32..=MAX_APR_BPS,
        elapsed in 0u64..=10 * SECONDS_PER_YEAR,
    ) {
        let reward = accrued(&record(staked, 0), elapsed, apr).unwrap();
        let denominator = BPS_DENOMINATOR * SECONDS_PER_YEAR as i128;
        let numerator = staked * apr as i128 * elapsed as i128;

        prop_assert!(reward * denominator <= numerator);
        prop_assert!(numerator - reward * denominator < denominator);
    }

    /// More time, more principal or a higher rate never pays less.
    #[test]
    fn prop_accrual_is_monotonic(
        staked in 1i128..=1_000_000 * UNIT,
        extra in 0i128..=1_000 * UNIT,
        apr in 0u32..MAX_APR_BPS,
        t1 in 0u64..=SECONDS_PER_YEAR,
        dt in 0u64..=SECONDS_PER_YEAR,
    ) {
        let base = accrued(&record(staked, 0), t1, apr).unwrap();

        prop_assert!(accrued(&record(staked, 0), t1 + dt, apr).unwrap() >= base);
        prop_assert!(accrued(&record(staked + extra, 0), t1, apr).unwrap() >= base);
        prop_assert!(accrued(&record(staked, 0), t1, apr + 1).unwrap() >= base);
    }

    /// A ledger clock earlier than the checkpoint counts as no elapsed time.
    #[test]
    fn prop_clock_behind_checkpoint_accrues_nothing(
        staked in 1i128..=1_000_000 * UNIT,
        apr in 0u32..=MAX_APR_BPS,
        checkpoint in 1u64..=u64::MAX / 2,
        lag in 0u64..=1_000_000,
    ) {
        let now = checkpoint.saturating_sub(lag);
        prop_assert_eq!(accrued(&record(staked, checkpoint), now, apr), Some(0));
    }

    /// The configured cap is inclusive.
    #[test]
    fn prop_apr_cap_is_enforced(apr in 0u32..=2 * MAX_APR_BPS) {
        let fx = setup(1_000);
        let result = fx.pool.try_update_apr(&fx.admin, &apr);

        if apr <= MAX_APR_BPS {
            prop_assert!(result.is_ok());
            prop_assert_eq!(fx.pool.get_apr(), apr);
        } else {
            match result {
                Err(Ok(e)) => prop_assert_eq!(e, ContractError::AprTooHigh),
                _ => unreachable!("Expected AprTooHigh error"),
            }
            prop_assert_eq!(fx.pool.get_apr(), 1_000);
        }
    }
}
