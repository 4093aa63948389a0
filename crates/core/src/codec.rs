//! Conversion between the persisted range form and the dense day-set form.
//!
//! [`collapse`] is the canonicalizer: its output is always sorted and
//! non-adjacent, which is the only shape a season's ranges are stored in.

use crate::error::CoreError;
use crate::types::{DateRange, Day, DaySet};

/// Longest single range [`expand`] accepts (roughly ten years of days).
pub const MAX_RANGE_DAYS: usize = 3660;

/// Expand inclusive ranges into the set of every day they cover.
///
/// Fails with [`CoreError::InvalidRange`] when a range ends before it starts
/// and with [`CoreError::RangeTooLong`] past [`MAX_RANGE_DAYS`].
pub fn expand(ranges: &[DateRange]) -> Result<DaySet, CoreError> {
    let mut days = DaySet::new();
    for range in ranges {
        expand_into(range, &mut days)?;
    }
    Ok(days)
}

/// Insert every day of `range` into `days`.
pub fn expand_into(range: &DateRange, days: &mut DaySet) -> Result<(), CoreError> {
    if range.start > range.end {
        return Err(CoreError::InvalidRange {
            start: range.start.to_string(),
            end: range.end.to_string(),
        });
    }

    let span = (range.end.as_naive() - range.start.as_naive()).num_days() + 1;
    if span > MAX_RANGE_DAYS as i64 {
        return Err(CoreError::RangeTooLong {
            start: range.start.to_string(),
            end: range.end.to_string(),
            max_days: MAX_RANGE_DAYS,
        });
    }

    let mut current = range.start;
    loop {
        days.insert(current);
        if current == range.end {
            break;
        }
        match current.succ() {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(())
}

/// Compress a day set into the minimal sorted list of maximal runs.
pub fn collapse(days: &DaySet) -> Vec<DateRange> {
    let mut ranges: Vec<DateRange> = Vec::new();

    // BTreeSet iterates in ascending order already.
    for &day in days {
        match ranges.last_mut() {
            Some(last) if last.end.succ() == Some(day) => last.end = day,
            _ => ranges.push(DateRange::single(day)),
        }
    }

    ranges
}

/// Sort and merge an arbitrary range list into canonical form.
pub fn canonicalize(ranges: &[DateRange]) -> Result<Vec<DateRange>, CoreError> {
    Ok(collapse(&expand(ranges)?))
}

/// `true` when `ranges` is sorted, well-formed and has a gap of at least one
/// day between consecutive entries.
pub fn is_canonical(ranges: &[DateRange]) -> bool {
    if ranges.iter().any(|r| r.start > r.end) {
        return false;
    }
    ranges.windows(2).all(|pair| {
        let (prev, next) = (&pair[0], &pair[1]);
        match prev.end.succ() {
            Some(after_prev) => after_prev < next.start,
            None => false,
        }
    })
}

/// Number of distinct days covered by `ranges`.
pub fn day_count(ranges: &[DateRange]) -> Result<usize, CoreError> {
    Ok(expand(ranges)?.len())
}
