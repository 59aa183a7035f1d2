//! Reentrance guard.
//!
//! A single instance-storage flag marks a guarded entry point as in progress.
//! Any guarded call that starts while the flag is set fails with
//! `ReentrantCall`. The flag is cleared when the guarded body returns, on
//! both the `Ok` and the `Err` path; if the invocation aborts, the host
//! discards the flag write together with every other write.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::{errors, ContractError};

const LOCKED: Symbol = symbol_short!("LOCKED");

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCKED).unwrap_or(false)
}

/// Sets the in-progress flag, failing if it is already set.
pub fn enter(env: &Env) -> Result<(), ContractError> {
    if is_locked(env) {
        return Err(errors::reject(env, ContractError::ReentrantCall));
    }
    env.storage().instance().set(&LOCKED, &true);
    Ok(())
}

pub fn exit(env: &Env) {
    env.storage().instance().remove(&LOCKED);
}

/// Runs `body` with the flag held.
pub fn non_reentrant<T>(
    env: &Env,
    body: impl FnOnce() -> Result<T, ContractError>,
) -> Result<T, ContractError> {
    enter(env)?;
    let result = body();
    exit(env);
    result
}
