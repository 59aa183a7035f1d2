#![no_std]

pub mod events;

use common::access_control::{self, Role};
use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{
    contract, contractimpl, contracttype, log, symbol_short, Address, Env, String, Symbol,
};

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOTAL_SUPPLY: Symbol = symbol_short!("TOT_SUP");

// Per-account persistent storage uses tuple keys: (prefix, address[, address])
const BALANCE: Symbol = symbol_short!("BAL");
const ALLOWANCE: Symbol = symbol_short!("ALLOW");

// ── Token parameters ─────────────────────────────────────────────────────────

pub const NAME: &str = "HeraldToken";
pub const SYMBOL: &str = "HLD";
pub const DECIMALS: u32 = 18;

/// One whole token in base units.
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Hard cap on the circulating supply: 10 million tokens.
pub const MAX_SUPPLY: i128 = 10_000_000 * UNIT;

/// Supply minted to the deployer on `initialize`: 1 000 tokens.
pub const INITIAL_SUPPLY: i128 = 1_000 * UNIT;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 10,
    InvalidAmount = 30,
    InvalidExpiration = 31,
    InsufficientBalance = 40,
    InsufficientAllowance = 41,
    MaxSupplyExceeded = 42,
}

/// Allowance granted by `from` to a spender, valid up to `expiration_ledger`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceValue {
    pub amount: i128,
    pub expiration_ledger: u32,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct HeraldToken;

#[contractimpl]
impl HeraldToken {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the token.
    ///
    /// `admin` becomes `DefaultAdmin` and `Minter`, and receives the initial
    /// supply.
    pub fn initialize(env: Env, admin: Address) -> Result<(), TokenError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(TokenError::AlreadyInitialized);
        }

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&TOTAL_SUPPLY, &0i128);

        access_control::setup_role(&env, Role::DefaultAdmin, &admin);
        access_control::setup_role(&env, Role::Minter, &admin);

        Self::mint_unchecked(&env, &admin, INITIAL_SUPPLY)?;

        Ok(())
    }

    // ── Metadata ────────────────────────────────────────────────────────────

    pub fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> i128 {
        env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0)
    }

    pub fn max_supply(_env: Env) -> i128 {
        MAX_SUPPLY
    }

    // ── Balances & allowances ───────────────────────────────────────────────

    pub fn balance(env: Env, id: Address) -> i128 {
        Self::read_balance(&env, &id)
    }

    /// Returns the live allowance; an expired allowance reads as zero.
    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        Self::read_allowance(&env, &from, &spender).amount
    }

    /// Let `spender` move up to `amount` of `from`'s tokens until
    /// `expiration_ledger` (inclusive).
    pub fn approve(
        env: Env,
        from: Address,
        spender: Address,
        amount: i128,
        expiration_ledger: u32,
    ) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }
        if amount > 0 && expiration_ledger < env.ledger().sequence() {
            return Err(TokenError::InvalidExpiration);
        }

        let key = (ALLOWANCE, from.clone(), spender.clone());
        env.storage().persistent().set(
            &key,
            &AllowanceValue {
                amount,
                expiration_ledger,
            },
        );
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

        events::publish_approve(&env, from, spender, amount, expiration_ledger);

        Ok(())
    }

    // ── Transfers ───────────────────────────────────────────────────────────

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        from.require_auth();

        Self::move_balance(&env, &from, &to, amount)?;
        events::publish_transfer(&env, from, to, amount);

        Ok(())
    }

    /// Move `amount` from `from` to `to`, spending `spender`'s allowance.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        spender.require_auth();

        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        let allowance = Self::read_allowance(&env, &from, &spender);
        if allowance.amount < amount {
            log!(&env, "allowance too low", allowance.amount, amount);
            return Err(TokenError::InsufficientAllowance);
        }

        Self::move_balance(&env, &from, &to, amount)?;

        if amount > 0 {
            let key = (ALLOWANCE, from.clone(), spender);
            env.storage().persistent().set(
                &key,
                &AllowanceValue {
                    amount: allowance.amount - amount,
                    expiration_ledger: allowance.expiration_ledger,
                },
            );
        }

        events::publish_transfer(&env, from, to, amount);

        Ok(())
    }

    // ── Minting ─────────────────────────────────────────────────────────────

    /// Create `amount` new tokens for `to`.
    ///
    /// `minter` must hold the `Minter` role; the total supply may never
    /// exceed [`MAX_SUPPLY`].
    pub fn mint(env: Env, minter: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        minter.require_auth();

        if !access_control::has_role(&env, Role::Minter, &minter) {
            return Err(TokenError::Unauthorized);
        }

        Self::mint_unchecked(&env, &to, amount)
    }

    // ── Role management ─────────────────────────────────────────────────────

    pub fn grant_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access_control::grant_role(&env, &caller, role, &account) {
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        role: Role,
        account: Address,
    ) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        caller.require_auth();
        if !access_control::revoke_role(&env, &caller, role, &account) {
            return Err(TokenError::Unauthorized);
        }
        Ok(())
    }

    pub fn renounce_role(env: Env, account: Address, role: Role) -> Result<(), TokenError> {
        Self::require_initialized(&env)?;
        account.require_auth();
        access_control::renounce_role(&env, &account, role);
        Ok(())
    }

    pub fn has_role(env: Env, role: Role, account: Address) -> bool {
        access_control::has_role(&env, role, &account)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), TokenError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(TokenError::NotInitialized);
        }
        Ok(())
    }

    fn read_balance(env: &Env, id: &Address) -> i128 {
        env.storage()
            .persistent()
            .get(&(BALANCE, id.clone()))
            .unwrap_or(0)
    }

    fn write_balance(env: &Env, id: &Address, amount: i128) {
        let key = (BALANCE, id.clone());
        env.storage().persistent().set(&key, &amount);
        env.storage()
            .persistent()
            .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }

    fn read_allowance(env: &Env, from: &Address, spender: &Address) -> AllowanceValue {
        let stored: Option<AllowanceValue> = env
            .storage()
            .persistent()
            .get(&(ALLOWANCE, from.clone(), spender.clone()));
        match stored {
            Some(value) if value.expiration_ledger >= env.ledger().sequence() => value,
            Some(value) => AllowanceValue {
                amount: 0,
                expiration_ledger: value.expiration_ledger,
            },
            None => AllowanceValue {
                amount: 0,
                expiration_ledger: 0,
            },
        }
    }

    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        let from_balance = Self::read_balance(env, from);
        if from_balance < amount {
            log!(env, "balance too low", from_balance, amount);
            return Err(TokenError::InsufficientBalance);
        }

        Self::write_balance(env, from, from_balance - amount);
        let to_balance = Self::read_balance(env, to);
        Self::write_balance(env, to, to_balance.saturating_add(amount));

        Ok(())
    }

    fn mint_unchecked(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
        if amount < 0 {
            return Err(TokenError::InvalidAmount);
        }

        let supply: i128 = env.storage().instance().get(&TOTAL_SUPPLY).unwrap_or(0);
        let new_supply = supply
            .checked_add(amount)
            .filter(|s| *s <= MAX_SUPPLY)
            .ok_or(TokenError::MaxSupplyExceeded)?;

        env.storage().instance().set(&TOTAL_SUPPLY, &new_supply);
        let balance = Self::read_balance(env, to);
        Self::write_balance(env, to, balance + amount);

        events::publish_mint(env, to.clone(), amount, new_supply);

        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
