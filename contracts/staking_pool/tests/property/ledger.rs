#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based state machine tests for the staking ledger.
//!
//! Random sequences of stake / unstake / claim / emergency / pause / clock
//! moves are replayed against a live pool, checking consistency after every
//! step.
//!
//! Invariants tested:
//! - `total_staked` always equals the sum of every staker's record
//! - The pool's token balance always equals `total_staked`
//! - A rejected call leaves every record, the total and all balances untouched
//! - Pending rewards are zero straight after any successful position change
//! - Pending rewards never decrease while only the clock moves
//! - No staker ever holds less (wallet + principal) than they were funded with

use proptest::prelude::*;
use proptest_derive::Arbitrary;
use soroban_sdk::Address;
use staking_pool::{StakerRecord, UNIT};

use crate::fixture::{setup, Fixture};

const STAKERS: usize = 3;
const FUNDING: i128 = 500;

#[derive(Arbitrary, Clone, Debug)]
enum Action {
    Stake {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
        #[proptest(strategy = "1i128..=250")]
        tokens: i128,
    },
    Unstake {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
        #[proptest(strategy = "1i128..=100")]
        percent: i128,
    },
    Claim {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
    },
    Emergency {
        #[proptest(strategy = "0usize..STAKERS")]
        who: usize,
    },
    TogglePause,
    Advance {
        #[proptest(strategy = "0u64..=2_592_000")]
        seconds: u64,
    },
}

// ── Helpers ───────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
struct Snapshot {
    total: i128,
    records: Vec<StakerRecord>,
    balances: Vec<i128>,
}

fn snapshot(fx: &Fixture, stakers: &[Address]) -> Snapshot {
    Snapshot {
        total: fx.pool.total_staked(),
        records: stakers.iter().map(|s| fx.pool.get_staker_info(s)).collect(),
        balances: stakers.iter().map(|s| fx.token.balance(s)).collect(),
    }
}

fn check_consistency(fx: &Fixture, stakers: &[Address]) -> Result<(), TestCaseError> {
    let sum: i128 = stakers
        .iter()
        .map(|s| fx.pool.get_staker_info(s).staked_amount)
        .sum();
    prop_assert_eq!(fx.pool.total_staked(), sum);
    prop_assert_eq!(fx.pool.pooled_balance(), sum);

    for staker in stakers {
        let record = fx.pool.get_staker_info(staker);
        prop_assert!(record.staked_amount >= 0);
        prop_assert!(fx.token.balance(staker) + record.staked_amount >= FUNDING * UNIT);
    }
    Ok(())
}

/// Runs one action. Returns whether the call was accepted.
fn apply(fx: &Fixture, stakers: &[Address], action: &Action) -> bool {
    match *action {
        Action::Stake { who, tokens } => {
            fx.pool.try_stake(&stakers[who], &(tokens * UNIT)).is_ok()
        }
        Action::Unstake { who, percent } => {
            let staked = fx.pool.get_staker_info(&stakers[who]).staked_amount;
            let amount = staked * percent / 100;
            fx.pool.try_unstake(&stakers[who], &amount).is_ok()
        }
        Action::Claim { who } => fx.pool.try_claim_rewards(&stakers[who]).is_ok(),
        Action::Emergency { who } => fx.pool.try_emergency_withdraw(&stakers[who]).is_ok(),
        Action::TogglePause => {
            if fx.pool.is_paused() {
                fx.pool.try_unpause(&fx.admin).is_ok()
            } else {
                fx.pool.try_pause(&fx.admin).is_ok()
            }
        }
        Action::Advance { seconds } => {
            fx.advance(seconds);
            true
        }
    }
}

fn target(action: &Action) -> Option<usize> {
    match *action {
        Action::Stake { who, .. }
        | Action::Unstake { who, .. }
        | Action::Claim { who }
        | Action::Emergency { who } => Some(who),
        Action::TogglePause | Action::Advance { .. } => None,
    }
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Any interleaving of operations keeps the ledger self-consistent.
    #[test]
    fn prop_ledger_stays_consistent(actions in prop::collection::vec(any::<Action>(), 1..40)) {
        let fx = setup(1_000);
        let stakers: Vec<Address> = (0..STAKERS).map(|_| fx.staker(FUNDING)).collect();

        for action in &actions {
            let before = snapshot(&fx, &stakers);
            let pending_before: Vec<i128> =
                stakers.iter().map(|s| fx.pool.pending_rewards(s)).collect();

            let accepted = apply(&fx, &stakers, action);

            if !accepted {
                prop_assert_eq!(snapshot(&fx, &stakers), before);
            } else if let Some(who) = target(action) {
                prop_assert_eq!(fx.pool.pending_rewards(&stakers[who]), 0);
            } else if let Action::Advance { .. } = action {
                for (staker, earlier) in stakers.iter().zip(pending_before) {
                    prop_assert!(fx.pool.pending_rewards(staker) >= earlier);
                }
            }

            check_consistency(&fx, &stakers)?;
        }
    }

    /// Emergency exit always returns exactly the recorded principal and
    /// never mints anything.
    #[test]
    fn prop_emergency_returns_principal_only(
        tokens in 10i128..=500,
        seconds in 1u64..=31_536_000,
    ) {
        let fx = setup(1_000);
        let staker = fx.staker(FUNDING);

        fx.pool.stake(&staker, &(tokens * UNIT));
        fx.advance(seconds);
        let supply_before = fx.token.total_supply();

        prop_assert_eq!(fx.pool.emergency_withdraw(&staker), tokens * UNIT);
        prop_assert_eq!(fx.token.balance(&staker), FUNDING * UNIT);
        prop_assert_eq!(fx.token.total_supply(), supply_before);
        prop_assert_eq!(fx.pool.get_staker_info(&staker).staked_amount, 0);
    }

    /// Claiming splits nothing: a claim at t1 plus a claim at t2 never pays
    /// more than a single claim at t2 would have.
    #[test]
    fn prop_split_claims_never_beat_single_claim(
        tokens in 10i128..=500,
        first in 1u64..=15_768_000,
        second in 1u64..=15_768_000,
    ) {
        let split = setup(2_500);
        let single = setup(2_500);
        let a = split.staker(FUNDING);
        let b = single.staker(FUNDING);

        split.pool.stake(&a, &(tokens * UNIT));
        single.pool.stake(&b, &(tokens * UNIT));

        split.advance(first);
        let paid_first = split.pool.claim_rewards(&a);
        split.advance(second);
        let paid_second = split.pool.claim_rewards(&a);

        single.advance(first + second);
        let paid_once = single.pool.claim_rewards(&b);

        prop_assert!(paid_first + paid_second <= paid_once);
        // Each truncation loses less than one base unit.
        prop_assert!(paid_once - (paid_first + paid_second) <= 1);
    }
}
