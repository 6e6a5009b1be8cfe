// src/allocation.rs
// ============================================================================
// ALLOCATION PLANNING AND VALIDATION
// ============================================================================
// Splits a total token supply into named allocation buckets and checks that
// a percentage table is internally consistent.
//
// Planning and validation are deliberately separate steps: the planner
// accepts any percentage set (wizard screens work with half-finished tables)
// and callers run the validator explicitly before accepting user input.
// ============================================================================

use crate::amount::TokenAmount;
use crate::params::PERCENT_SUM_EPSILON;
use serde::{Deserialize, Serialize};


/// One named share of the total token supply, with optional lockup/vesting
/// terms attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationDefinition {
    /// Bucket name, unique within a plan (e.g. "Team", "Public Sale")
    pub name: String,

    /// Share of total supply, 0-100
    pub percentage: f64,

    /// Opaque display color tag carried through for chart rendering
    pub color_tag: String,

    /// Lockup before vesting begins, in months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lockup_months: Option<u32>,

    /// Linear vesting duration, in months
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vesting_months: Option<u32>,
}


/// An allocation definition with its computed absolute token amount.
///
/// Derived on each planning call and never mutated afterwards; persistence
/// is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationResult {
    /// The definition this result was planned from
    #[serde(flatten)]
    pub definition: AllocationDefinition,

    /// Absolute token amount: total_supply * percentage / 100
    pub amount: f64,
}


/// Compute the absolute token amount for each allocation bucket.
///
/// Input order is preserved and no rounding is applied; callers needing
/// integral token units round downstream. The percentage set is NOT
/// validated here - run [`allocations_sum_to_hundred`] explicitly. A zero
/// total supply simply yields all-zero amounts, and an empty definition
/// slice yields an empty result.
pub fn plan_allocations(
    total_supply: TokenAmount,
    allocations: &[AllocationDefinition],
) -> Vec<AllocationResult> {
    let supply = total_supply.value();
    tracing::debug!(
        supply,
        buckets = allocations.len(),
        "planning allocation amounts"
    );

    allocations
        .iter()
        .map(|definition| AllocationResult {
            amount: supply * definition.percentage / 100.0,
            definition: definition.clone(),
        })
        .collect()
}


/// Check that a set of allocation percentages sums to 100.
///
/// Accepts iff |sum - 100| < [`PERCENT_SUM_EPSILON`], tolerating the drift
/// that floating-point accumulation introduces in user-edited tables.
/// Reported as a boolean rather than an error; the caller decides how to
/// surface a failed table.
pub fn allocations_sum_to_hundred(percentages: &[f64]) -> bool {
    let sum: f64 = percentages.iter().sum();
    (sum - 100.0).abs() < PERCENT_SUM_EPSILON
}
