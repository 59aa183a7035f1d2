#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the pool is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub staking_token: Address,
    pub apr_bps: u32,
    pub timestamp: u64,
}

/// Fired when a staker deposits principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

/// Fired when a staker withdraws principal together with its reward.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEvent {
    pub staker: Address,
    pub amount: i128,
    pub reward_paid: i128,
    pub new_total_staked: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired on the reward-forfeiting exit path.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EmergencyWithdrawEvent {
    pub staker: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AprUpdatedEvent {
    pub old_apr_bps: u32,
    pub new_apr_bps: u32,
    pub timestamp: u64,
}

/// Fired when an admin halts or resumes the pool.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseToggledEvent {
    pub account: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, admin: Address, staking_token: Address, apr_bps: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            admin,
            staking_token,
            apr_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(
    env: &Env,
    staker: Address,
    amount: i128,
    reward_paid: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("STAKED"), staker.clone()),
        StakedEvent {
            staker,
            amount,
            reward_paid,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unstaked(
    env: &Env,
    staker: Address,
    amount: i128,
    reward_paid: i128,
    new_total_staked: i128,
) {
    env.events().publish(
        (symbol_short!("UNSTAKED"), staker.clone()),
        UnstakedEvent {
            staker,
            amount,
            reward_paid,
            new_total_staked,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_rewards_claimed(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), staker.clone()),
        RewardsClaimedEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_emergency_withdraw(env: &Env, staker: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("EMERG_WD"), staker.clone()),
        EmergencyWithdrawEvent {
            staker,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_apr_updated(env: &Env, old_apr_bps: u32, new_apr_bps: u32) {
    env.events().publish(
        (symbol_short!("APR_UPD"),),
        AprUpdatedEvent {
            old_apr_bps,
            new_apr_bps,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_paused(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("PAUSED"),),
        PauseToggledEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_unpaused(env: &Env, account: Address) {
    env.events().publish(
        (symbol_short!("UNPAUSED"),),
        PauseToggledEvent {
            account,
            timestamp: env.ledger().timestamp(),
        },
    );
}
