//! Reward accrual math.
//!
//! Rewards accrue linearly on the staked principal at an annual rate given in
//! basis points:
//!
//! ```text
//! reward = staked * apr_bps * elapsed / (BPS_DENOMINATOR * SECONDS_PER_YEAR)
//! ```
//!
//! The division truncates toward zero, so every rounding error is at most one
//! base unit and always in the pool's favour. Nothing here touches storage.

use crate::records::StakerRecord;

pub const SECONDS_PER_YEAR: u64 = 365 * 24 * 60 * 60;

/// 10 000 basis points = 100 %.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Reward owed on `record` at ledger time `now` for the given rate.
///
/// A `now` earlier than the checkpoint counts as zero elapsed time. Returns
/// `None` if the intermediate product does not fit in an `i128`.
pub fn accrued(record: &StakerRecord, now: u64, apr_bps: u32) -> Option<i128> {
    if record.staked_amount <= 0 || apr_bps == 0 {
        return Some(0);
    }

    let elapsed = now.saturating_sub(record.last_accrual_time);
    if elapsed == 0 {
        return Some(0);
    }

    let numerator = record
        .staked_amount
        .checked_mul(apr_bps as i128)?
        .checked_mul(elapsed as i128)?;

    Some(numerator / (BPS_DENOMINATOR * SECONDS_PER_YEAR as i128))
}
