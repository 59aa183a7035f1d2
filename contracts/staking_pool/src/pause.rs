use common::access_control::{self, Role};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::{errors, events, ContractError};

// ── Storage Keys ─────────────────────────────────────────────

const PAUSED: Symbol = symbol_short!("PAUSED");

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Fails with `Paused` while the pool is halted.
pub fn require_not_paused(env: &Env) -> Result<(), ContractError> {
    if is_paused(env) {
        return Err(errors::reject(env, ContractError::Paused));
    }
    Ok(())
}

/// Halts `stake`, `unstake` and `claim_rewards`.
///
/// Requires `Admin`. Pausing an already paused pool is rejected.
pub fn pause(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !access_control::has_role(env, Role::Admin, caller) {
        return Err(errors::reject(env, ContractError::Unauthorized));
    }
    if is_paused(env) {
        return Err(errors::reject(env, ContractError::AlreadyPaused));
    }

    env.storage().instance().set(&PAUSED, &true);
    events::publish_paused(env, caller.clone());

    Ok(())
}

/// Lifts the halt set by [`pause`].
///
/// Requires `Admin`. Unpausing a running pool is rejected.
pub fn unpause(env: &Env, caller: &Address) -> Result<(), ContractError> {
    if !access_control::has_role(env, Role::Admin, caller) {
        return Err(errors::reject(env, ContractError::Unauthorized));
    }
    if !is_paused(env) {
        return Err(errors::reject(env, ContractError::NotPaused));
    }

    env.storage().instance().set(&PAUSED, &false);
    events::publish_unpaused(env, caller.clone());

    Ok(())
}
