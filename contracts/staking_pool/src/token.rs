use soroban_sdk::{contractclient, Address, Env};

/// The token ledger the pool moves funds through.
///
/// Principal travels with `transfer_from` (in, against the staker's
/// allowance to the pool) and `transfer` (out). Rewards are minted, so the
/// pool must hold the token's minter role.
#[contractclient(name = "TokenLedgerClient")]
pub trait TokenLedger {
    fn balance(env: Env, id: Address) -> i128;

    fn transfer(env: Env, from: Address, to: Address, amount: i128);

    fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128);

    fn mint(env: Env, minter: Address, to: Address, amount: i128);
}
