//! Shared building blocks for the Herald staking contracts.
//!
//! This crate provides:
//! - [`access_control`]: the role registry both the token and the staking
//!   pool consult before any privileged state change.
//!
//! Contracts keep their own `#[contracterror]` enums; helpers here report
//! authorization failures as `bool` so each contract maps them onto its own
//! error codes.

#![no_std]

pub mod access_control;

pub use access_control::Role;

/// TTL threshold (in ledgers) below which persistent entries are extended.
pub const TTL_THRESHOLD: u32 = 17_280; // ~1 day

/// TTL (in ledgers) persistent entries are extended to.
pub const TTL_EXTEND_TO: u32 = 518_400; // ~30 days
