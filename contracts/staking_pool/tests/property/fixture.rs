use herald_token::{HeraldToken, HeraldTokenClient};
use soroban_sdk::testutils::{Address as _, Ledger as _};
use soroban_sdk::{Address, Env};
use staking_pool::{Role, StakingPool, StakingPoolClient};

pub const UNIT: i128 = staking_pool::UNIT;
pub const START: u64 = 1_700_000_000;

pub struct Fixture {
    pub env: Env,
    pub pool: StakingPoolClient<'static>,
    pub token: HeraldTokenClient<'static>,
    pub admin: Address,
}

/// Token + pool wired together, clock at `START`.
pub fn setup(apr_bps: u32) -> Fixture {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().set_timestamp(START);

    let admin = Address::generate(&env);

    let token_id = env.register(HeraldToken, ());
    let token = HeraldTokenClient::new(&env, &token_id);
    token.initialize(&admin);

    let pool_id = env.register(StakingPool, ());
    let pool = StakingPoolClient::new(&env, &pool_id);
    pool.initialize(&admin, &token_id, &apr_bps);
    token.grant_role(&admin, &Role::Minter, &pool_id);

    Fixture {
        env,
        pool,
        token,
        admin,
    }
}

impl Fixture {
    /// A fresh account holding `tokens` whole tokens, with an allowance deep
    /// enough to restake after any number of withdrawals.
    pub fn staker(&self, tokens: i128) -> Address {
        let staker = Address::generate(&self.env);
        let amount = tokens * UNIT;
        self.token.mint(&self.admin, &staker, &amount);
        self.token.approve(
            &staker,
            &self.pool.address,
            &(amount * 1_000),
            &(self.env.ledger().sequence() + 1_000_000),
        );
        staker
    }

    pub fn advance(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }
}
