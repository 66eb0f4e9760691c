//! An attendance row records one employee's presence on one calendar day:
//! an optional check-in time and an optional check-out time.
//!
//! Invariants: `out_time` never exists without `in_time`, and always comes
//! strictly after it. At most one row exists per `(employee_id, date)` pair;
//! the storage layer must back that with a unique constraint so two
//! concurrent first check-ins cannot both insert (the loser must be reported
//! as [AlreadyCheckedIn][err], not as a storage fault).
//!
//! [err]: ../../error/enum.Error.html#variant.AlreadyCheckedIn

use chrono::{NaiveDate, NaiveTime};
use crate::models::employee::EmployeeID;

hr_model! {
    /// The attendance model: one employee-day.
    pub struct Attendance {
        id: <<AttendanceID>>,
        /// The employee this row belongs to.
        employee_id: EmployeeID,
        /// The calendar day this row covers. Unique per employee.
        date: NaiveDate,
        /// Check-in time, set by the first successful check-in of the day.
        #[builder(setter(strip_option), default)]
        in_time: Option<NaiveTime>,
        /// Check-out time. Requires `in_time` and must be later than it.
        #[builder(setter(strip_option), default)]
        out_time: Option<NaiveTime>,
    }
    AttendanceBuilder
}

/// Where an employee-day sits in the check-in/check-out lifecycle.
///
/// The day only ever moves forward: `NoRecord` to `CheckedIn` to
/// `CheckedOut`, which is terminal.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum DayState {
    /// No presence recorded yet (no row, or a row with no check-in).
    NoRecord,
    /// Checked in, not yet checked out.
    CheckedIn,
    /// Checked in and out; nothing more can happen on this day.
    CheckedOut,
}

/// A read-only projection of an employee-day: its state plus a message
/// suitable for showing to the employee.
#[derive(Clone, Debug, PartialEq, getset::Getters, serde::Serialize, serde::Deserialize)]
#[getset(get = "pub")]
pub struct DayStatus {
    /// Current position in the day's lifecycle.
    state: DayState,
    /// Human-readable rendering of the state.
    message: String,
}

impl DayStatus {
    /// Project the status of a day from its attendance row (or lack of one).
    pub fn of(record: Option<&Attendance>) -> Self {
        let (state, message) = match record {
            Some(row) => match (row.in_time(), row.out_time()) {
                (Some(_), Some(out)) => (DayState::CheckedOut, format!("Checked out at {}", out)),
                (Some(inn), None) => (DayState::CheckedIn, format!("Checked in at {}", inn)),
                (None, _) => (DayState::NoRecord, "Not checked in yet.".into()),
            },
            None => (DayState::NoRecord, "Not checked in yet.".into()),
        };
        Self { state, message }
    }
}
