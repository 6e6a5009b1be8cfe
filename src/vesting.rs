// src/vesting.rs
// ============================================================================
// POINT-IN-TIME VESTING CALCULATION
// ============================================================================
// Computes vested amounts under cliff + linear rules and expands vesting
// terms into discrete monthly tranches.
//
// All arithmetic here uses the fixed 30-day month (`params::MONTH_MS`), not
// calendar months, so results line up with what a vesting contract computes
// on-chain. Calendar-dated timelines for display live in `schedule`.
// ============================================================================

use crate::params::{MONTH_MS, MS_PER_SEC};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};


/// One tranche of a monthly vesting schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Zero-based month index
    pub month: u32,

    /// Amount released in this month
    pub amount: f64,

    /// Running total released through this month
    pub cumulative: f64,
}


/// Calculate the vested amount at an explicit evaluation instant.
///
/// Time parameters are Unix seconds; the math is carried out in
/// milliseconds. Branch order is load-bearing:
///
/// 1. strictly before the cliff end -> 0
/// 2. at or after the vesting end -> `total_amount`
/// 3. otherwise -> linear interpolation between cliff end and vesting end
///
/// The vesting end is `start + (cliff + duration) months`, so a zero
/// duration makes the fully-vested branch fire the instant the cliff passes
/// and the interpolation (with its zero denominator) is never reached.
/// Month counts are signed and negative values are not rejected; they
/// produce degenerate but well-defined results rather than a panic.
pub fn vested_amount(
    total_amount: f64,
    start_secs: i64,
    cliff_months: i64,
    vesting_duration_months: i64,
    eval_secs: i64,
) -> f64 {
    let start_ms = start_secs * MS_PER_SEC;
    let eval_ms = eval_secs * MS_PER_SEC;

    let cliff_end_ms = start_ms + cliff_months * MONTH_MS;
    let vesting_end_ms = start_ms + (cliff_months + vesting_duration_months) * MONTH_MS;

    if eval_ms < cliff_end_ms {
        return 0.0;
    }
    if eval_ms >= vesting_end_ms {
        return total_amount;
    }

    let vested_fraction = (eval_ms - cliff_end_ms) as f64 / (vesting_end_ms - cliff_end_ms) as f64;
    total_amount * vested_fraction
}


/// [`vested_amount`] evaluated at the system clock's current time.
///
/// Boundary convenience only; the core calculator takes the evaluation
/// instant explicitly so results stay reproducible in tests.
pub fn vested_amount_now(
    total_amount: f64,
    start_secs: i64,
    cliff_months: i64,
    vesting_duration_months: i64,
) -> f64 {
    let now_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64;

    vested_amount(
        total_amount,
        start_secs,
        cliff_months,
        vesting_duration_months,
        now_secs,
    )
}


/// Expand vesting terms into discrete monthly tranches.
///
/// Produces `cliff_months` leading zero entries (months `0..cliff`),
/// followed by `vesting_months` equal tranches of
/// `total_amount / vesting_months` with an exact running cumulative. The
/// final entry's cumulative equals `total_amount` within floating-point
/// tolerance whenever `vesting_months > 0`.
///
/// A zero `vesting_months` yields an empty post-cliff schedule (the cliff
/// entries only) instead of a division by zero.
pub fn monthly_vesting_schedule(
    total_amount: f64,
    vesting_months: u32,
    cliff_months: u32,
) -> Vec<ScheduleEntry> {
    let mut entries = Vec::with_capacity((cliff_months + vesting_months) as usize);

    for month in 0..cliff_months {
        entries.push(ScheduleEntry {
            month,
            amount: 0.0,
            cumulative: 0.0,
        });
    }

    if vesting_months == 0 {
        tracing::warn!(total_amount, "zero-month vesting requested, schedule has no tranches");
        return entries;
    }

    let tranche = total_amount / vesting_months as f64;
    let mut cumulative = 0.0;
    for i in 0..vesting_months {
        cumulative += tranche;
        entries.push(ScheduleEntry {
            month: cliff_months + i,
            amount: tranche,
            cumulative,
        });
    }

    entries
}
