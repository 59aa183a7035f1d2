#![no_main]

use arbitrary::Arbitrary;
use herald_token::{HeraldToken, HeraldTokenClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{
    testutils::{Address as _, Ledger as _},
    Address, Env,
};
use staking_pool::{Role, StakingPool, StakingPoolClient, UNIT};

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Stake { who: u8, amount: i128 },
    Unstake { who: u8, amount: i128 },
    ClaimRewards { who: u8 },
    EmergencyWithdraw { who: u8 },
    UpdateApr { apr_bps: u32 },
    TogglePause,
    Advance { seconds: u16 },
}

const STAKERS: usize = 4;

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(1_700_000_000);

    let admin = Address::generate(&env);

    let token_id = env.register(HeraldToken, ());
    let token = HeraldTokenClient::new(&env, &token_id);
    token.initialize(&admin);

    let pool_id = env.register(StakingPool, ());
    let pool = StakingPoolClient::new(&env, &pool_id);
    pool.initialize(&admin, &token_id, &1_000);
    token.grant_role(&admin, &Role::Minter, &pool_id);

    let mut stakers = Vec::new();
    for _ in 0..STAKERS {
        let staker = Address::generate(&env);
        token.mint(&admin, &staker, &(10_000 * UNIT));
        token.approve(&staker, &pool_id, &i128::MAX, &1_000_000);
        stakers.push(staker);
    }

    // Arbitrary amounts hit every pool-side rejection path. Token-side
    // failures are kept out: the clock moves in small steps so minted
    // rewards stay far below the supply cap, and no stake exceeds the
    // staker's wallet.
    for action in actions {
        match action {
            FuzzAction::Stake { who, amount } => {
                let staker = &stakers[who as usize % STAKERS];
                if amount <= token.balance(staker) {
                    let _ = pool.try_stake(staker, &amount);
                }
            }
            FuzzAction::Unstake { who, amount } => {
                let _ = pool.try_unstake(&stakers[who as usize % STAKERS], &amount);
            }
            FuzzAction::ClaimRewards { who } => {
                let _ = pool.try_claim_rewards(&stakers[who as usize % STAKERS]);
            }
            FuzzAction::EmergencyWithdraw { who } => {
                let _ = pool.try_emergency_withdraw(&stakers[who as usize % STAKERS]);
            }
            FuzzAction::UpdateApr { apr_bps } => {
                let _ = pool.try_update_apr(&admin, &apr_bps);
            }
            FuzzAction::TogglePause => {
                if pool.is_paused() {
                    let _ = pool.try_unpause(&admin);
                } else {
                    let _ = pool.try_pause(&admin);
                }
            }
            FuzzAction::Advance { seconds } => {
                let now = env.ledger().timestamp();
                env.ledger().set_timestamp(now.saturating_add(seconds as u64));
            }
        }

        let sum: i128 = stakers
            .iter()
            .map(|s| pool.get_staker_info(s).staked_amount)
            .sum();
        assert_eq!(pool.total_staked(), sum);
        assert_eq!(pool.pooled_balance(), sum);
        assert!(pool.get_apr() <= pool.max_apr());
    }
});
