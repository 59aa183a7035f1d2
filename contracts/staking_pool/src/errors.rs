use soroban_sdk::{contracttype, log, Env, String};

/// Contract errors.
///
/// # Code ranges
/// | Range   | Purpose                        |
/// |---------|--------------------------------|
/// | 1 – 9   | Lifecycle / initialisation     |
/// | 10 – 19 | Authorisation                  |
/// | 30 – 39 | Input validation               |
/// | 40 – 49 | Ledger state                   |
/// | 50 – 59 | Pause gate                     |
#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 10,
    BelowMinimumStake = 30,
    InvalidAmount = 31,
    AprTooHigh = 32,
    InsufficientStake = 40,
    NoStake = 41,
    AlreadyPaused = 42,
    NotPaused = 43,
    ReentrantCall = 44,
    ArithmeticOverflow = 45,
    Paused = 50,
}

/// Caller-facing classification of a [`ContractError`].
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ErrorCategory {
    /// Bad argument; correct it and resubmit.
    Input = 1,
    /// The ledger is not in a state that allows the call.
    State = 2,
    /// Caller lacks the required role.
    Authorization = 3,
    /// Value-moving operations are halted by an admin.
    Paused = 4,
}

impl ContractError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ContractError::BelowMinimumStake
            | ContractError::InvalidAmount
            | ContractError::AprTooHigh => ErrorCategory::Input,
            ContractError::NotInitialized
            | ContractError::AlreadyInitialized
            | ContractError::InsufficientStake
            | ContractError::NoStake
            | ContractError::AlreadyPaused
            | ContractError::NotPaused
            | ContractError::ReentrantCall
            | ContractError::ArithmeticOverflow => ErrorCategory::State,
            ContractError::Unauthorized => ErrorCategory::Authorization,
            ContractError::Paused => ErrorCategory::Paused,
        }
    }

    /// Returns a human-readable reason for this error.
    pub fn message(&self) -> &'static str {
        match self {
            ContractError::NotInitialized => "Pool has not been initialized",
            ContractError::AlreadyInitialized => "Pool is already initialized",
            ContractError::Unauthorized => "Caller does not hold the required role",
            ContractError::BelowMinimumStake => "Below minimum stake",
            ContractError::InvalidAmount => "Amount must be > 0",
            ContractError::AprTooHigh => "Invalid APR",
            ContractError::InsufficientStake => "Insufficient staked amount",
            ContractError::NoStake => "No staked amount",
            ContractError::AlreadyPaused => "Pool is already paused",
            ContractError::NotPaused => "Pool is not paused",
            ContractError::ReentrantCall => "Reentrant call",
            ContractError::ArithmeticOverflow => "Reward computation overflowed",
            ContractError::Paused => "Pool is paused",
        }
    }
}

/// Logs `error` with its code and reason, then hands it back for returning.
pub fn reject(env: &Env, error: ContractError) -> ContractError {
    let code = error as u32;
    let reason = String::from_str(env, error.message());
    log!(env, "staking pool rejected call", code, reason);
    error
}
