//! The daily check-in/check-out state machine, enforced per employee per
//! calendar day.
//!
//! A day moves `NoRecord -> CheckedIn -> CheckedOut` and never backwards;
//! checking out requires a check-in earlier the same day, and a checked-out
//! day is closed for good. The caller passes in whatever attendance row
//! already exists for the `(employee, date)` pair; storage must hold a unique
//! constraint on that pair so racing first check-ins cannot both insert (the
//! loser surfaces as [AlreadyCheckedIn][err], not a storage fault).
//!
//! See the [attendance model.][1]
//!
//! [1]: ../../models/attendance/index.html
//! [err]: ../../error/enum.Error.html#variant.AlreadyCheckedIn

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        attendance::{Attendance, AttendanceID, DayStatus},
        employee::Employee,
        user::User,
    },
};

/// Record a check-in for an employee on a day.
///
/// `existing` is the day's attendance row, if storage has one. A row that
/// already carries an in time rejects the call; a row without one (left
/// behind by an interrupted write) is completed rather than duplicated.
pub fn check_in(caller: &User, employee: &Employee, existing: Option<Attendance>, id: AttendanceID, date: NaiveDate, time: NaiveTime, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AttendanceCheckIn)?;
    employee.self_check(caller.id())?;
    if !employee.is_active() {
        Err(Error::ObjectIsInactive("employee".into()))?;
    }
    match existing {
        Some(mut row) => {
            if row.in_time().is_some() {
                Err(Error::AlreadyCheckedIn)?;
            }
            row.set_in_time(Some(time));
            row.set_updated(now.clone());
            Ok(Modifications::new_single(Op::Update, row))
        }
        None => {
            let model = Attendance::builder()
                .id(id)
                .employee_id(employee.id().clone())
                .date(date)
                .in_time(time)
                .active(true)
                .created(now.clone())
                .updated(now.clone())
                .build()
                .map_err(|e| Error::BuilderFailed(e))?;
            Ok(Modifications::new_single(Op::Create, model))
        }
    }
}

/// Record a check-out for an employee on a day.
///
/// Requires the day to be in the checked-in state, and the out time to come
/// strictly after the in time.
pub fn check_out(caller: &User, employee: &Employee, existing: Option<Attendance>, time: NaiveTime, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::AttendanceCheckOut)?;
    employee.self_check(caller.id())?;
    if !employee.is_active() {
        Err(Error::ObjectIsInactive("employee".into()))?;
    }
    let mut row = match existing {
        Some(row) => row,
        None => Err(Error::NotCheckedIn)?,
    };
    let in_time = match row.in_time() {
        Some(t) => t.clone(),
        None => Err(Error::NotCheckedIn)?,
    };
    if row.out_time().is_some() {
        Err(Error::AlreadyCheckedOut)?;
    }
    if time <= in_time {
        Err(Error::InvalidTimeOrder)?;
    }
    row.set_out_time(Some(time));
    row.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, row))
}

/// Project the current status of an employee-day. Read-only; safe to serve
/// from a stale row.
pub fn status(record: Option<&Attendance>) -> DayStatus {
    DayStatus::of(record)
}
