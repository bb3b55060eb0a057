//! Whole-day countdown and overdue test.

use chrono::NaiveDate;

/// Returns the number of whole days from `today` until `due`.
///
/// Positive means the due date is in the future, zero means it is due
/// today, negative means it is overdue. Both arguments are calendar dates,
/// so time-of-day can never affect the count.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lifecycle_engine::calculation::days_left;
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 27).unwrap();
/// let due = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// assert_eq!(days_left(due, today), 3);
/// assert_eq!(days_left(today, today), 0);
/// assert_eq!(days_left(due, due.succ_opt().unwrap()), -1);
/// ```
pub fn days_left(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Returns true when a deadline has passed and the item still needs
/// attention.
///
/// `terminal` marks items in a terminal/acknowledged state (a completed
/// task, a confirmed probation): those are never overdue, and neither is
/// an item with no deadline at all.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use lifecycle_engine::calculation::is_overdue;
///
/// let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
/// let due = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
/// assert!(is_overdue(Some(due), false, today));
/// assert!(!is_overdue(Some(due), true, today));
/// assert!(!is_overdue(None, false, today));
/// ```
pub fn is_overdue(deadline: Option<NaiveDate>, terminal: bool, today: NaiveDate) -> bool {
    if terminal {
        return false;
    }
    match deadline {
        Some(due) => due < today,
        None => false,
    }
}
