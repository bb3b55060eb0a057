//! Progress percentages: date interpolation and task completion.

use chrono::NaiveDate;

/// Returns how far `today` has progressed through the `[start, end]` date
/// range, as a percentage in `[0, 100]`.
///
/// Returns 0 when `today <= start`, 100 when `today >= end`, and the
/// linear interpolation `(today - start) / (end - start) * 100` (rounded
/// half-up on whole days) in between. Degenerate ranges where
/// `end <= start` short-circuit through the boundary checks, so the result
/// is always defined and always clamped.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lifecycle_engine::calculation::progress_percent;
///
/// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2024, 5, 30).unwrap();
/// assert_eq!(progress_percent(start, end, start), 0);
/// assert_eq!(progress_percent(start, end, end), 100);
/// let halfway = NaiveDate::from_ymd_opt(2024, 4, 15).unwrap();
/// assert_eq!(progress_percent(start, end, halfway), 50);
/// ```
pub fn progress_percent(start: NaiveDate, end: NaiveDate, today: NaiveDate) -> u8 {
    if today <= start {
        return 0;
    }
    if today >= end {
        return 100;
    }
    let total = (end - start).num_days();
    let elapsed = (today - start).num_days();
    // total >= 2 here: start < today < end on whole dates
    let percent = (elapsed * 100 + total / 2) / total;
    percent.clamp(0, 100) as u8
}

/// Returns the share of completed items as a rounded percentage.
///
/// Zero-safe: an empty set yields 0 rather than a division error, so
/// derived aggregates built on this never fail.
///
/// # Examples
///
/// ```
/// use lifecycle_engine::calculation::completion_percent;
///
/// assert_eq!(completion_percent(1, 4), 25);
/// assert_eq!(completion_percent(0, 0), 0);
/// assert_eq!(completion_percent(3, 3), 100);
/// ```
pub fn completion_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u64;
    let total = total as u64;
    ((completed * 100 + total / 2) / total) as u8
}
