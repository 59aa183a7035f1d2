use common::{TTL_EXTEND_TO, TTL_THRESHOLD};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Per-staker persistent storage uses tuple keys: (prefix, staker_address)
const STAKER: Symbol = symbol_short!("STAKER");

/// One staker's position.
///
/// Created lazily on first stake. An emptied record is kept with a zero
/// amount; a later stake resumes accrual from its reset checkpoint.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StakerRecord {
    pub staked_amount: i128,
    pub last_accrual_time: u64,
}

fn staker_key(staker: &Address) -> (Symbol, Address) {
    (STAKER, staker.clone())
}

/// Returns the stored record, or a zeroed one for an unknown staker.
pub fn load(env: &Env, staker: &Address) -> StakerRecord {
    env.storage()
        .persistent()
        .get(&staker_key(staker))
        .unwrap_or_default()
}

pub fn store(env: &Env, staker: &Address, record: &StakerRecord) {
    let key = staker_key(staker);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
