#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Publishers ──────────────────────────────────────────────────────────────
//
// Topic layout follows the standard token event shape so indexers that
// understand fungible tokens can read them unchanged.

pub fn publish_transfer(env: &Env, from: Address, to: Address, amount: i128) {
    env.events()
        .publish((symbol_short!("transfer"), from, to), amount);
}

pub fn publish_approve(
    env: &Env,
    from: Address,
    spender: Address,
    amount: i128,
    expiration_ledger: u32,
) {
    env.events().publish(
        (symbol_short!("approve"), from, spender),
        (amount, expiration_ledger),
    );
}

pub fn publish_mint(env: &Env, to: Address, amount: i128, new_total_supply: i128) {
    env.events()
        .publish((symbol_short!("mint"), to), (amount, new_total_supply));
}
