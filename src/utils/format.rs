// src/utils/format.rs
// ============================================================================
// PRESENTATION-BOUNDARY FORMATTING
// ============================================================================
// Display helpers for dashboards and wizards. These deliberately never fail:
// bad input degrades to a placeholder or an empty sequence so a rendering
// layer stays robust. The calculation core underneath reports errors
// explicitly; only this boundary swallows them.
// ============================================================================

use crate::schedule;
use chrono::{DateTime, TimeZone, Utc};

/// Placeholder shown when a timestamp cannot be rendered.
pub const DATE_PLACEHOLDER: &str = "--";

/// Render a Unix-seconds timestamp as `YYYY-MM-DD`, degrading to
/// [`DATE_PLACEHOLDER`] when the timestamp is out of range.
pub fn format_date(unix_secs: i64) -> String {
    match Utc.timestamp_opt(unix_secs, 0).single() {
        Some(date) => date.format("%Y-%m-%d").to_string(),
        None => DATE_PLACEHOLDER.to_string(),
    }
}

/// Render a token amount with fixed four-decimal precision for display.
pub fn format_token_amount(amount: f64) -> String {
    format!("{amount:.4}")
}

/// [`schedule::vesting_date_list`] degraded for display: any generation
/// error yields an empty sequence instead of propagating.
pub fn vesting_date_list_or_empty(
    start: DateTime<Utc>,
    cliff_months: u32,
    vesting_duration_months: u32,
    period_count: u32,
) -> Vec<DateTime<Utc>> {
    schedule::vesting_date_list(start, cliff_months, vesting_duration_months, period_count)
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "vesting date list degraded to empty for display");
            Vec::new()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(1735689600), "2025-01-01");
        // Far outside chrono's representable range
        assert_eq!(format_date(i64::MAX), DATE_PLACEHOLDER);
    }

    #[test]
    fn test_format_token_amount() {
        assert_eq!(format_token_amount(1234.5), "1234.5000");
    }

    #[test]
    fn test_date_list_degrades_to_empty() {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        let ok = vesting_date_list_or_empty(start, 0, 12, 4);
        assert_eq!(ok.len(), 5);

        let far = Utc.with_ymd_and_hms(200_000, 1, 1, 0, 0, 0).unwrap();
        let degraded = vesting_date_list_or_empty(far, 0, u32::MAX, 1);
        assert!(degraded.is_empty());
    }
}
