#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{TTL_EXTEND_TO, TTL_THRESHOLD};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const ROLE_PREFIX: Symbol = symbol_short!("ROLE");

// ── Role Enum ────────────────────────────────────────────────────────────────

/// Closed set of roles understood by the Herald contracts.
///
/// - `DefaultAdmin` – Admin of every other role: the only role allowed to
///                    grant or revoke membership.
/// - `Admin`        – Operates the staking pool: reward rate and pause switch.
/// - `Minter`       – May mint new supply on the token ledger.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    DefaultAdmin = 0,
    Admin = 1,
    Minter = 2,
}

impl Role {
    /// Returns the role whose members may grant and revoke `self`.
    pub fn admin_role(&self) -> Role {
        Role::DefaultAdmin
    }
}

// ── Events ───────────────────────────────────────────────────────────────────

/// Fired when an account is added to a role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleGrantedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

/// Fired when an account is removed from a role.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleRevokedEvent {
    pub role: Role,
    pub account: Address,
    pub sender: Address,
    pub timestamp: u64,
}

fn publish_role_granted(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_grnt"), account.clone()),
        RoleGrantedEvent {
            role,
            account: account.clone(),
            sender: sender.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

fn publish_role_revoked(env: &Env, role: Role, account: &Address, sender: &Address) {
    env.events().publish(
        (symbol_short!("role_rvk"), account.clone()),
        RoleRevokedEvent {
            role,
            account: account.clone(),
            sender: sender.clone(),
            timestamp: env.ledger().timestamp(),
        },
    );
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn role_key(role: Role, account: &Address) -> (Symbol, Role, Address) {
    (ROLE_PREFIX, role, account.clone())
}

fn set_member(env: &Env, role: Role, account: &Address) {
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &true);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn remove_member(env: &Env, role: Role, account: &Address) {
    env.storage().persistent().remove(&role_key(role, account));
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns `true` if `account` is a member of `role`.
pub fn has_role(env: &Env, role: Role, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&role_key(role, account))
        .unwrap_or(false)
}

/// Adds `account` to `role` without any authorization check.
///
/// Only for contract bootstrap (`initialize`), where the deployer becomes the
/// first member of the admin roles.
pub fn setup_role(env: &Env, role: Role, account: &Address) {
    if has_role(env, role, account) {
        return;
    }
    set_member(env, role, account);
    publish_role_granted(env, role, account, account);
}

/// Grants `role` to `account` on behalf of `caller`.
///
/// The caller must already have been authenticated via `require_auth()`.
/// Returns `false` if `caller` is not a member of the role's admin role.
/// Granting a role the account already holds succeeds without an event.
pub fn grant_role(env: &Env, caller: &Address, role: Role, account: &Address) -> bool {
    if !has_role(env, role.admin_role(), caller) {
        return false;
    }
    if !has_role(env, role, account) {
        set_member(env, role, account);
        publish_role_granted(env, role, account, caller);
    }
    true
}

/// Revokes `role` from `account` on behalf of `caller`.
///
/// Returns `false` if `caller` is not a member of the role's admin role.
/// Revoking a role the account does not hold succeeds without an event.
pub fn revoke_role(env: &Env, caller: &Address, role: Role, account: &Address) -> bool {
    if !has_role(env, role.admin_role(), caller) {
        return false;
    }
    if has_role(env, role, account) {
        remove_member(env, role, account);
        publish_role_revoked(env, role, account, caller);
    }
    true
}

/// Drops `account`'s own membership of `role`.
///
/// The account must already have been authenticated via `require_auth()`.
pub fn renounce_role(env: &Env, account: &Address, role: Role) {
    if has_role(env, role, account) {
        remove_member(env, role, account);
        publish_role_revoked(env, role, account, account);
    }
}
