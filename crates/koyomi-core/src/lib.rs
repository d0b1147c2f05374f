//! Shared foundations for the koyomi planner workspace: configuration,
//! error types, and timezone-aware calendar-day arithmetic.

pub mod config;
pub mod error;
pub mod util;
