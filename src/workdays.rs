//! Working-day math over inclusive date ranges.
//!
//! A working day is any calendar day whose weekday is not in the configured
//! weekend set. The default weekend is Friday/Saturday, matching the host
//! deployments this system was built for. Leave-day counting and quota
//! accounting both run through [count_working_days].

use chrono::{Datelike, NaiveDate, Weekday};
use crate::{
    error::{Error, Result},
};

/// The weekend days excluded from leave-day counting unless the caller says
/// otherwise.
pub const DEFAULT_WEEKEND: [Weekday; 2] = [Weekday::Fri, Weekday::Sat];

/// Count the working days in the inclusive range `[start, end]`, skipping any
/// day whose weekday appears in `weekend`.
///
/// With an empty weekend set this is simply `end - start + 1`. The range is
/// checked even though callers are expected to have validated it already.
pub fn count_working_days(start: NaiveDate, end: NaiveDate, weekend: &[Weekday]) -> Result<u32> {
    if start > end {
        Err(Error::InvalidRange)?;
    }
    let mut days = 0;
    let mut day = start;
    loop {
        if !weekend.contains(&day.weekday()) {
            days += 1;
        }
        if day == end {
            break;
        }
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    Ok(days)
}
