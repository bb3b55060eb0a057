//! Attendance time reconciliation: spans, deltas, and display formatting.
//!
//! All arithmetic is done in whole minutes on `HH:MM[:SS]` strings.
//! Malformed or missing values never fail a computation: an unparsable leg
//! contributes zero duration, and the caller's UI layer is expected to
//! surface an "invalid" marker instead of crashing.

/// Parses an `HH:MM` or `HH:MM:SS` time string into minutes since
/// midnight.
///
/// Seconds are validated but truncated; out-of-range components and any
/// other malformed input return `None`.
///
/// # Examples
///
/// ```
/// use lifecycle_engine::calculation::parse_time_minutes;
///
/// assert_eq!(parse_time_minutes("09:30"), Some(570));
/// assert_eq!(parse_time_minutes("18:00:45"), Some(1080));
/// assert_eq!(parse_time_minutes("9am"), None);
/// assert_eq!(parse_time_minutes("25:00"), None);
/// ```
pub fn parse_time_minutes(value: &str) -> Option<i64> {
    let mut parts = value.trim().split(':');
    let hours: i64 = parts.next()?.parse().ok()?;
    let minutes: i64 = parts.next()?.parse().ok()?;
    let seconds: i64 = match parts.next() {
        Some(s) => s.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) || !(0..60).contains(&seconds) {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// Returns the worked span between a check-in and check-out leg, in
/// minutes.
///
/// Inverted pairs (check-out before check-in) are treated as zero
/// duration, not negative, and a leg that is absent or unparsable zeroes
/// the span.
pub fn span_minutes(check_in: Option<&str>, check_out: Option<&str>) -> i64 {
    let start = check_in.and_then(parse_time_minutes);
    let end = check_out.and_then(parse_time_minutes);
    match (start, end) {
        (Some(start), Some(end)) => (end - start).max(0),
        _ => 0,
    }
}

/// Returns the change in worked minutes an adjustment requests:
/// the adjusted span minus the original span.
///
/// # Examples
///
/// ```
/// use lifecycle_engine::calculation::hour_delta;
///
/// // 9h originally, 8h30m requested
/// let delta = hour_delta(
///     Some("09:00"),
///     Some("18:00"),
///     Some("09:00"),
///     Some("17:30"),
/// );
/// assert_eq!(delta, -30);
/// ```
pub fn hour_delta(
    original_in: Option<&str>,
    original_out: Option<&str>,
    adjusted_in: Option<&str>,
    adjusted_out: Option<&str>,
) -> i64 {
    span_minutes(adjusted_in, adjusted_out) - span_minutes(original_in, original_out)
}

/// Formats a minute delta as a signed `Xh MMm` string.
///
/// Deltas under one minute in magnitude render as `"±0h 00m"`.
///
/// # Examples
///
/// ```
/// use lifecycle_engine::calculation::format_hour_delta;
///
/// assert_eq!(format_hour_delta(-30), "-0h 30m");
/// assert_eq!(format_hour_delta(75), "+1h 15m");
/// assert_eq!(format_hour_delta(0), "±0h 00m");
/// ```
pub fn format_hour_delta(minutes: i64) -> String {
    if minutes == 0 {
        return "±0h 00m".to_string();
    }
    let sign = if minutes < 0 { '-' } else { '+' };
    let magnitude = minutes.abs();
    format!("{}{}h {:02}m", sign, magnitude / 60, magnitude % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hh_mm() {
        assert_eq!(parse_time_minutes("00:00"), Some(0));
        assert_eq!(parse_time_minutes("09:00"), Some(540));
        assert_eq!(parse_time_minutes("23:59"), Some(1439));
    }

    #[test]
    fn test_parse_hh_mm_ss_truncates_seconds() {
        assert_eq!(parse_time_minutes("09:00:59"), Some(540));
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert_eq!(parse_time_minutes(" 09:15 "), Some(555));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert_eq!(parse_time_minutes(""), None);
        assert_eq!(parse_time_minutes("9am"), None);
        assert_eq!(parse_time_minutes("09"), None);
        assert_eq!(parse_time_minutes("09:00:00:00"), None);
        assert_eq!(parse_time_minutes("24:00"), None);
        assert_eq!(parse_time_minutes("12:60"), None);
        assert_eq!(parse_time_minutes("-1:30"), None);
    }

    #[test]
    fn test_span_basic() {
        assert_eq!(span_minutes(Some("09:00"), Some("18:00")), 540);
    }

    #[test]
    fn test_span_inverted_pair_is_zero() {
        // negative spans are floored at 0, not carried as negative
        assert_eq!(span_minutes(Some("18:00"), Some("09:00")), 0);
    }

    #[test]
    fn test_span_with_missing_leg_is_zero() {
        assert_eq!(span_minutes(None, Some("18:00")), 0);
        assert_eq!(span_minutes(Some("09:00"), None), 0);
    }

    #[test]
    fn test_span_with_malformed_leg_is_zero() {
        assert_eq!(span_minutes(Some("garbage"), Some("18:00")), 0);
    }

    /// HD-001: 09:00-18:00 original, 09:00-17:30 adjusted
    #[test]
    fn test_delta_thirty_minutes_shorter() {
        let delta = hour_delta(Some("09:00"), Some("18:00"), Some("09:00"), Some("17:30"));
        assert_eq!(delta, -30);
        assert_eq!(format_hour_delta(delta), "-0h 30m");
    }

    /// HD-002: identical original and adjusted times
    #[test]
    fn test_delta_identical_times() {
        let delta = hour_delta(Some("09:00"), Some("18:00"), Some("09:00"), Some("18:00"));
        assert_eq!(delta, 0);
        assert_eq!(format_hour_delta(delta), "±0h 00m");
    }

    #[test]
    fn test_delta_longer_day() {
        let delta = hour_delta(Some("09:00"), Some("17:00"), Some("08:30"), Some("18:15"));
        assert_eq!(delta, 105);
        assert_eq!(format_hour_delta(delta), "+1h 45m");
    }

    #[test]
    fn test_delta_with_no_original_snapshot() {
        // No original attendance: the whole adjusted span is the delta.
        let delta = hour_delta(None, None, Some("09:00"), Some("17:00"));
        assert_eq!(delta, 480);
        assert_eq!(format_hour_delta(delta), "+8h 00m");
    }

    #[test]
    fn test_format_pads_minutes() {
        assert_eq!(format_hour_delta(61), "+1h 01m");
        assert_eq!(format_hour_delta(-605), "-10h 05m");
    }
}
