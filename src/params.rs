// src/params.rs
// ============================================================================
// ENGINE PARAMETERS
// ============================================================================
// This file defines all fixed constants for the vesting & allocation engine.
// These values are part of the engine's observable behavior (dashboards and
// contract-read layers compare against them) and must not change between
// releases without a compatibility note.
// ============================================================================

// ============================================================================
// TIME CONSTANTS
// ============================================================================

/// One vesting month in milliseconds: exactly 30 days.
///
/// Point-in-time vesting math uses this fixed approximation rather than
/// calendar months so that off-chain results match what a vesting contract
/// computes. Calendar-aware month arithmetic is used only for display
/// schedules (see `schedule::vesting_date_list`).
pub const MONTH_MS: i64 = 30 * 24 * 3600 * 1000;

/// Milliseconds per second, for converting caller-supplied Unix timestamps.
pub const MS_PER_SEC: i64 = 1000;

// ============================================================================
// ALLOCATION VALIDATION
// ============================================================================

/// Tolerance for the allocation-percentage sum check.
///
/// A set of percentages is accepted iff |sum - 100| < this epsilon. The value
/// governs acceptance of floating-point-accumulated allocation tables and is
/// used verbatim by `allocation::allocations_sum_to_hundred`.
pub const PERCENT_SUM_EPSILON: f64 = 0.001;

// ============================================================================
// SCHEDULE GENERATION
// ============================================================================

/// Default number of release periods in a vesting date list.
pub const DEFAULT_SCHEDULE_PERIODS: u32 = 12;

/// Days in the fixed vesting month, used when a fractional month remainder
/// must be converted to days during date-list generation.
pub const DAYS_PER_MONTH: f64 = 30.0;

// ============================================================================
// SAMPLE GENERATOR BOUNDS
// ============================================================================

/// Minimum percentage a randomly generated allocation bucket receives.
pub const SAMPLE_MIN_PERCENT: f64 = 5.0;

/// Fraction of the remaining budget a random bucket may claim at most.
pub const SAMPLE_BUDGET_FRACTION: f64 = 0.8;

/// Exclusive upper bound for randomized lockup months (0..12).
pub const SAMPLE_LOCKUP_MONTHS_MAX: u32 = 12;

/// Inclusive lower / exclusive upper bounds for randomized vesting months.
pub const SAMPLE_VESTING_MONTHS_MIN: u32 = 6;
pub const SAMPLE_VESTING_MONTHS_MAX: u32 = 30;

/// Name/color templates for generated allocation buckets. The sample
/// generator caps the requested category count at this table's length.
pub const SAMPLE_TEMPLATES: [(&str, &str); 8] = [
    ("Public Sale", "#22c55e"),
    ("Private Sale", "#0ea5e9"),
    ("Team", "#6366f1"),
    ("Advisors", "#a855f7"),
    ("Ecosystem", "#f59e0b"),
    ("Liquidity", "#14b8a6"),
    ("Treasury", "#ef4444"),
    ("Marketing", "#ec4899"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_constant() {
        // 30 days * 24h * 3600s * 1000ms
        assert_eq!(MONTH_MS, 2_592_000_000);
    }

    #[test]
    fn test_sampler_bounds_are_sane() {
        assert!(SAMPLE_MIN_PERCENT > 0.0);
        assert!(SAMPLE_BUDGET_FRACTION < 1.0);
        assert!(SAMPLE_VESTING_MONTHS_MIN < SAMPLE_VESTING_MONTHS_MAX);
        assert!(!SAMPLE_TEMPLATES.is_empty());
    }
}
