//! src/lib.rs
//! # launchvest - Token-Sale Vesting & Allocation Engine
//!
//! This crate implements the off-chain calculation core of a token-sale
//! platform: splitting a total supply into named allocation buckets,
//! computing cliff + linear vested amounts at a point in time, expanding
//! vesting terms into monthly and date-keyed schedules, and validating that
//! an allocation table is self-consistent.
//!
//! ## Components:
//! - **Allocation planner**: total supply × percentage → per-bucket amounts
//! - **Vesting calculator**: point-in-time vested amounts under cliff +
//!   linear rules, plus monthly tranche schedules
//! - **Date scheduler**: calendar-dated release timelines for dashboards
//! - **Allocation validator**: percentage-sum consistency check
//! - **Sample generator**: randomized but constraint-satisfying allocation
//!   fixtures for tests and demos
//!
//! Everything here is a synchronous pure transformation over numbers and
//! timestamps. Wallet connection, contract reads, HTTP, and persistence are
//! external collaborators; the engine never touches them. The only implicit
//! clock read lives in the `*_now` boundary conveniences.

// Module declarations
pub mod allocation;
pub mod amount;
pub mod params;
pub mod sample;
pub mod schedule;
pub mod utils;
pub mod vesting;

// Re-export commonly used types for easier crate access
pub use allocation::{
    allocations_sum_to_hundred, plan_allocations, AllocationDefinition, AllocationResult,
};
pub use amount::{AmountError, TokenAmount};
pub use sample::{random_allocation_set, random_allocation_set_with};
pub use schedule::{vesting_date_list, vesting_date_list_default, ScheduleError};
pub use vesting::{monthly_vesting_schedule, vested_amount, vested_amount_now, ScheduleEntry};

// ============================================================================
// GLOBAL ERROR TYPE - Unified error handling across all modules
// ============================================================================

/// Unified error type for the vesting & allocation engine
#[derive(thiserror::Error, Debug)]
pub enum EngineError {
    /// Amount normalization failed (unparseable supply input)
    #[error("Amount error: {0}")]
    Amount(#[from] amount::AmountError),

    /// Date schedule generation failed (out-of-range date arithmetic)
    #[error("Schedule error: {0}")]
    Schedule(#[from] schedule::ScheduleError),

    /// Logging initialization error
    #[error("Logging error: {0}")]
    Logging(#[from] utils::logging::LoggingError),
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// ============================================================================
// VERSION INFORMATION
// ============================================================================

/// Get the current version of the engine crate
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_error_conversion() {
        let err: EngineError = "not a number"
            .parse::<TokenAmount>()
            .unwrap_err()
            .into();
        assert!(matches!(err, EngineError::Amount(_)));
    }
}
