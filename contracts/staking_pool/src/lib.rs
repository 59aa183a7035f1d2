#![no_std]

pub mod errors;
pub mod events;
pub mod guard;
pub mod pause;
pub mod records;
pub mod rewards;
pub mod token;

use common::access_control;
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol};

pub use common::Role;
pub use errors::{ContractError, ErrorCategory};
pub use records::StakerRecord;
use token::TokenLedgerClient;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const STAKING_TOKEN: Symbol = symbol_short!("STK_TOK");
const APR_BPS: Symbol = symbol_short!("APR");
const TOTAL_STAKED: Symbol = symbol_short!("TOT_STK");

// ── Pool parameters ──────────────────────────────────────────────────────────

/// One whole token in base units (18 decimals).
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Smallest accepted deposit: 10 tokens.
pub const MIN_STAKE: i128 = 10 * UNIT;

/// Highest accepted reward rate: 50 000 bps = 500 % a year.
pub const MAX_APR_BPS: u32 = 50_000;

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `admin`         – receives `DefaultAdmin` and `Admin`.
    /// * `staking_token` – token ledger holding principal; the pool must also
    ///                     be granted its `Minter` role to pay rewards.
    /// * `apr_bps`       – initial annual reward rate in basis points.
    pub fn initialize(
        env: Env,
        admin: Address,
        staking_token: Address,
        apr_bps: u32,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(errors::reject(&env, ContractError::AlreadyInitialized));
        }
        if apr_bps > MAX_APR_BPS {
            return Err(errors::reject(&env, ContractError::AprTooHigh));
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&STAKING_TOKEN, &staking_token);
        env.storage().instance().set(&APR_BPS, &apr_bps);
        env.storage().instance().set(&TOTAL_STAKED, &0i128);

        access_control::setup_role(&env, Role::DefaultAdmin, &admin);
        access_control::setup_role(&env, Role::Admin, &admin);

        events::publish_initialized(&env, admin, staking_token, apr_bps);

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` of the staking token.
    ///
    /// Any reward pending on the existing position is paid out first, so a
    /// second deposit implicitly claims. The staker must have approved the
    /// pool for at least `amount`.
    pub fn stake(env: Env, staker: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        guard::non_reentrant(&env, || {
            pause::require_not_paused(&env)?;
            if amount < MIN_STAKE {
                return Err(errors::reject(&env, ContractError::BelowMinimumStake));
            }

            let now = env.ledger().timestamp();
            let mut record = records::load(&env, &staker);
            let reward = Self::accrued(&env, &record, now)?;

            record.staked_amount = record
                .staked_amount
                .checked_add(amount)
                .ok_or_else(|| errors::reject(&env, ContractError::ArithmeticOverflow))?;
            record.last_accrual_time = now;
            records::store(&env, &staker, &record);

            let new_total = Self::read_total(&env)
                .checked_add(amount)
                .ok_or_else(|| errors::reject(&env, ContractError::ArithmeticOverflow))?;
            env.storage().instance().set(&TOTAL_STAKED, &new_total);

            let token = Self::token_client(&env)?;
            let pool = env.current_contract_address();
            Self::pay_reward(&env, &token, &staker, reward);
            token.transfer_from(&pool, &staker, &pool, &amount);

            events::publish_staked(&env, staker.clone(), amount, reward, new_total);

            Ok(())
        })
    }

    // ── Unstaking ───────────────────────────────────────────────────────────

    /// Withdraw `amount` of principal together with all pending reward.
    ///
    /// Returns the reward paid.
    pub fn unstake(env: Env, staker: Address, amount: i128) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        guard::non_reentrant(&env, || {
            pause::require_not_paused(&env)?;
            if amount <= 0 {
                return Err(errors::reject(&env, ContractError::InvalidAmount));
            }

            let now = env.ledger().timestamp();
            let mut record = records::load(&env, &staker);
            if amount > record.staked_amount {
                return Err(errors::reject(&env, ContractError::InsufficientStake));
            }
            let reward = Self::accrued(&env, &record, now)?;

            record.staked_amount -= amount;
            record.last_accrual_time = now;
            records::store(&env, &staker, &record);

            let new_total = Self::read_total(&env) - amount;
            env.storage().instance().set(&TOTAL_STAKED, &new_total);

            let token = Self::token_client(&env)?;
            Self::pay_reward(&env, &token, &staker, reward);
            token.transfer(&env.current_contract_address(), &staker, &amount);

            events::publish_unstaked(&env, staker.clone(), amount, reward, new_total);

            Ok(reward)
        })
    }

    // ── Rewards ─────────────────────────────────────────────────────────────

    /// Pay out the pending reward and restart accrual; principal stays put.
    ///
    /// Returns the reward paid, which may be zero.
    pub fn claim_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        guard::non_reentrant(&env, || {
            pause::require_not_paused(&env)?;

            let now = env.ledger().timestamp();
            let mut record = records::load(&env, &staker);
            let reward = Self::accrued(&env, &record, now)?;

            // No record is created for an account that never staked.
            if record.staked_amount > 0 {
                record.last_accrual_time = now;
                records::store(&env, &staker, &record);
            }

            let token = Self::token_client(&env)?;
            Self::pay_reward(&env, &token, &staker, reward);

            events::publish_rewards_claimed(&env, staker.clone(), reward);

            Ok(reward)
        })
    }

    // ── Emergency exit ──────────────────────────────────────────────────────

    /// Return the full principal and forfeit every pending reward.
    ///
    /// Reward math is never evaluated on this path, and it stays open while
    /// the pool is paused. Returns the principal returned.
    pub fn emergency_withdraw(env: Env, staker: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        staker.require_auth();

        guard::non_reentrant(&env, || {
            let mut record = records::load(&env, &staker);
            if record.staked_amount == 0 {
                return Err(errors::reject(&env, ContractError::NoStake));
            }

            let amount = record.staked_amount;
            record.staked_amount = 0;
            record.last_accrual_time = env.ledger().timestamp();
            records::store(&env, &staker, &record);

            let new_total = Self::read_total(&env) - amount;
            env.storage().instance().set(&TOTAL_STAKED, &new_total);

            let token = Self::token_client(&env)?;
            token.transfer(&env.current_contract_address(), &staker, &amount);

            events::publish_emergency_withdraw(&env, staker.clone(), amount);

            Ok(amount)
        })
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Change the annual reward rate.
    ///
    /// Unsettled time is not checkpointed here: each staker's next settlement
    /// prices its whole interval since its own last checkpoint at the rate
    /// current at that moment.
    ///
    /// Requires `Admin`.
    pub fn update_apr(env: Env, caller: Address, new_apr_bps: u32) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        guard::non_reentrant(&env, || {
            if !access_control::has_role(&env, Role::Admin, &caller) {
                return Err(errors::reject(&env, ContractError::Unauthorized));
            }
            if new_apr_bps > MAX_APR_BPS {
                return Err(errors::reject(&env, ContractError::AprTooHigh));
            }

            let old_apr_bps = Self::read_apr(&env);
            env.storage().instance().set(&APR_BPS, &new_apr_bps);

            events::publish_apr_updated(&env, old_apr_bps, new_apr_bps);

            Ok(())
        })
    }

    /// Halt `stake`, `unstake` and `claim_rewards`. Requires `Admin`.
    pub fn pause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::pause(&env, &caller)
    }

    /// Resume a paused pool. Requires `Admin`.
    pub fn unpause(env: Env, caller: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        pause::unpause(&env, &caller)
    }

    // ── Role management ──────────────────────────────────────────────────────

    /// Add `account` to `role`. Only a `DefaultAdmin` may call this.
    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access_control::grant_role(&env, &caller, role, &account) {
            return Err(errors::reject(&env, ContractError::Unauthorized));
        }
        Ok(())
    }

    /// Remove `account` from `role`. Only a `DefaultAdmin` may call this.
    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access_control::revoke_role(&env, &caller, role, &account) {
            return Err(errors::reject(&env, ContractError::Unauthorized));
        }
        Ok(())
    }

    /// Drop the caller's own membership of `role`.
    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        account.require_auth();
        access_control::renounce_role(&env, &account, role);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access_control::has_role(&env, role, &account)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the stored position; zeroed for an account that never staked.
    pub fn get_staker_info(env: Env, staker: Address) -> StakerRecord {
        records::load(&env, &staker)
    }

    /// Return the reward `staker` would be paid right now, without mutating
    /// anything.
    pub fn pending_rewards(env: Env, staker: Address) -> Result<i128, ContractError> {
        let record = records::load(&env, &staker);
        Self::accrued(&env, &record, env.ledger().timestamp())
    }

    pub fn get_apr(env: Env) -> u32 {
        Self::read_apr(&env)
    }

    /// Return the sum of every staker's principal.
    pub fn total_staked(env: Env) -> i128 {
        Self::read_total(&env)
    }

    /// Return the staking-token balance the pool actually holds.
    pub fn pooled_balance(env: Env) -> Result<i128, ContractError> {
        let token = Self::token_client(&env)?;
        Ok(token.balance(&env.current_contract_address()))
    }

    pub fn staking_token(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&STAKING_TOKEN)
            .ok_or_else(|| errors::reject(&env, ContractError::NotInitialized))
    }

    pub fn is_paused(env: Env) -> bool {
        pause::is_paused(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    pub fn min_stake(_env: Env) -> i128 {
        MIN_STAKE
    }

    pub fn max_apr(_env: Env) -> u32 {
        MAX_APR_BPS
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the pool is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(errors::reject(env, ContractError::NotInitialized));
        }
        Ok(())
    }

    fn read_apr(env: &Env) -> u32 {
        env.storage().instance().get(&APR_BPS).unwrap_or(0)
    }

    fn read_total(env: &Env) -> i128 {
        env.storage().instance().get(&TOTAL_STAKED).unwrap_or(0)
    }

    fn token_client(env: &Env) -> Result<TokenLedgerClient<'_>, ContractError> {
        let address: Address = env
            .storage()
            .instance()
            .get(&STAKING_TOKEN)
            .ok_or_else(|| errors::reject(env, ContractError::NotInitialized))?;
        Ok(TokenLedgerClient::new(env, &address))
    }

    /// Reward owed on `record` at `now` under the live rate.
    fn accrued(env: &Env, record: &StakerRecord, now: u64) -> Result<i128, ContractError> {
        rewards::accrued(record, now, Self::read_apr(env))
            .ok_or_else(|| errors::reject(env, ContractError::ArithmeticOverflow))
    }

    /// Mint `reward` to `to`; a zero reward makes no token call.
    fn pay_reward(env: &Env, token: &TokenLedgerClient, to: &Address, reward: i128) {
        if reward > 0 {
            token.mint(&env.current_contract_address(), to, &reward);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
