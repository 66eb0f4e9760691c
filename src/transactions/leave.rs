//! Leave requests: validation, submission, and the approve/reject workflow.
//!
//! Validation runs an ordered rule chain and stops at the first failure, so
//! callers always see one deterministic error for a given state: range, then
//! backdating, then overlap with approved leave, then working-day count, then
//! attendance conflict, then quota. Approval runs the *same* chain again with
//! the request's stored parameters, because the world may have drifted since
//! submission (another approval can consume the quota, or attendance can be
//! recorded inside the range). That second call is deliberate; never cache
//! the submission-time result.
//!
//! See the [leave model.][1]
//!
//! [1]: ../../models/leave/index.html

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use rust_decimal::Decimal;
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        attendance::Attendance,
        employee::Employee,
        leave::{Leave, LeaveID, LeaveStatus},
        leave_type::LeaveType,
        user::User,
    },
    workdays,
};

/// How many calendar days in the past a request's start date may fall.
pub const BACKDATE_LIMIT_DAYS: i64 = 7;

/// Validate a leave request for an employee and compute its working-day
/// count.
///
/// `history` is the employee's leave requests (any status; the rules filter
/// for approved ones themselves) and `attendance` their attendance rows --
/// both may be scoped to the request's range/year by the caller, but passing
/// more is harmless. Returns the number of working days the request covers,
/// which is also the amount charged against the year's quota.
///
/// A request is charged entirely to the calendar year of its start date,
/// even when the range crosses into the next year.
pub fn validate(employee: &Employee, leave_type: &LeaveType, start: NaiveDate, end: NaiveDate, history: &Vec<Leave>, attendance: &Vec<Attendance>, today: NaiveDate) -> Result<Decimal> {
    if start > end {
        Err(Error::InvalidRange)?;
    }
    if start < today - Duration::days(BACKDATE_LIMIT_DAYS) {
        Err(Error::BackdateLimitExceeded(BACKDATE_LIMIT_DAYS))?;
    }
    let overlaps = history.iter().any(|leave| {
        leave.employee_id() == employee.id()
            && leave.status() == &LeaveStatus::Approved
            && leave.start_date() <= &end
            && leave.end_date() >= &start
    });
    if overlaps {
        Err(Error::OverlapApproved)?;
    }
    let work_days = workdays::count_working_days(start, end, &workdays::DEFAULT_WEEKEND)?;
    if work_days == 0 {
        Err(Error::NoWorkingDays)?;
    }
    let requested = Decimal::from(work_days);
    let present = attendance.iter().any(|row| {
        row.employee_id() == employee.id() && row.date() >= &start && row.date() <= &end
    });
    if present {
        Err(Error::AttendanceConflict)?;
    }
    let year = start.year();
    let used: Decimal = history.iter()
        .filter(|leave| {
            leave.employee_id() == employee.id()
                && leave.leave_type_id() == leave_type.id()
                && leave.status() == &LeaveStatus::Approved
                && leave.start_date().year() == year
        })
        .map(|leave| leave.days().clone())
        .sum();
    let quota = leave_type.annual_quota().clone();
    if used + requested > quota {
        Err(Error::QuotaExceeded { used, requested, quota })?;
    }
    Ok(requested)
}

/// Submit a leave request. On success the new request is returned for
/// insertion, in `Pending` status and carrying the computed day count.
pub fn apply(caller: &User, employee: &Employee, leave_type: &LeaveType, id: LeaveID, start: NaiveDate, end: NaiveDate, reason: Option<String>, history: &Vec<Leave>, attendance: &Vec<Attendance>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::LeaveApply)?;
    employee.self_check(caller.id())?;
    if !employee.is_active() {
        Err(Error::ObjectIsInactive("employee".into()))?;
    }
    let days = validate(employee, leave_type, start, end, history, attendance, now.date_naive())?;
    let model = Leave::builder()
        .id(id)
        .employee_id(employee.id().clone())
        .leave_type_id(leave_type.id().clone())
        .start_date(start)
        .end_date(end)
        .days(days)
        .status(LeaveStatus::Pending)
        .reason(reason)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    Ok(Modifications::new_single(Op::Create, model))
}

/// Approve a pending leave request.
///
/// Re-runs the full validation with the request's stored parameters before
/// flipping the status, and records the approving employee. A request that
/// already reached a terminal status cannot be approved.
pub fn approve(caller: &User, approver: &Employee, subject: Option<Leave>, employee: &Employee, leave_type: &LeaveType, history: &Vec<Leave>, attendance: &Vec<Attendance>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::LeaveApprove)?;
    let mut subject = match subject {
        Some(leave) => leave,
        None => Err(Error::NotFound("leave".into()))?,
    };
    if subject.employee_id() != employee.id() {
        Err(Error::NotFound("employee".into()))?;
    }
    if subject.status() != &LeaveStatus::Pending {
        Err(Error::InvalidStateTransition(subject.status().to_string()))?;
    }
    // state may have drifted since submission; run the whole chain again
    validate(employee, leave_type, subject.start_date().clone(), subject.end_date().clone(), history, attendance, now.date_naive())?;
    subject.set_status(LeaveStatus::Approved);
    subject.set_approved_by(Some(approver.id().clone()));
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

/// Reject a pending leave request. No re-validation: rejection is always
/// allowed while the request is pending.
pub fn reject(caller: &User, subject: Option<Leave>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::LeaveReject)?;
    let mut subject = match subject {
        Some(leave) => leave,
        None => Err(Error::NotFound("leave".into()))?,
    };
    if subject.status() != &LeaveStatus::Pending {
        Err(Error::InvalidStateTransition(subject.status().to_string()))?;
    }
    subject.set_status(LeaveStatus::Rejected);
    subject.set_updated(now.clone());
    Ok(Modifications::new_single(Op::Update, subject))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        access::Role,
        models::{
            attendance::AttendanceID,
            designation::DesignationID,
            employee::EmployeeID,
            leave_type::LeaveTypeID,
            user::UserID,
        },
        util::{self, test::*},
    };

    fn fixture(now: &DateTime<Utc>) -> (User, Employee, LeaveType) {
        let user = make_user(&UserID::create(), None, now);
        let employee = make_employee(&EmployeeID::create(), Some(user.id()), &DesignationID::create(), date(2020, 1, 1), now);
        let leave_type = make_leave_type(&LeaveTypeID::create(), "Annual", num!(10), now);
        (user, employee, leave_type)
    }

    #[test]
    fn validate_rejects_backwards_range() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let res = validate(&employee, &leave_type, date(2024, 3, 12), date(2024, 3, 11), &vec![], &vec![], date(2024, 3, 15));
        assert_eq!(res, Err(Error::InvalidRange));
    }

    #[test]
    fn validate_enforces_backdate_window() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 3, 15);

        // eight days back is out
        let res = validate(&employee, &leave_type, date(2024, 3, 7), date(2024, 3, 18), &vec![], &vec![], today);
        assert_eq!(res, Err(Error::BackdateLimitExceeded(7)));

        // exactly seven days back is still allowed
        let res = validate(&employee, &leave_type, date(2024, 3, 8), date(2024, 3, 18), &vec![], &vec![], today);
        assert!(res.is_ok());
    }

    #[test]
    fn validate_overlap_is_boundary_inclusive() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 1, 1);
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 1, 1), date(2024, 1, 5), num!(4), LeaveStatus::Approved, &now),
        ];

        // sharing a single endpoint day counts as overlap
        let res = validate(&employee, &leave_type, date(2024, 1, 5), date(2024, 1, 10), &history, &vec![], today);
        assert_eq!(res, Err(Error::OverlapApproved));

        // the day after the approved range is clear
        let res = validate(&employee, &leave_type, date(2024, 1, 7), date(2024, 1, 10), &history, &vec![], today);
        assert!(res.is_ok());
    }

    #[test]
    fn validate_ignores_pending_and_rejected() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 1, 1);
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 1, 1), date(2024, 1, 5), num!(4), LeaveStatus::Pending, &now),
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 1, 1), date(2024, 1, 5), num!(4), LeaveStatus::Rejected, &now),
        ];
        let res = validate(&employee, &leave_type, date(2024, 1, 5), date(2024, 1, 10), &history, &vec![], today);
        assert!(res.is_ok());
    }

    #[test]
    fn validate_requires_working_days() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        // 2024-03-08 is a Friday, 2024-03-09 a Saturday
        let res = validate(&employee, &leave_type, date(2024, 3, 8), date(2024, 3, 9), &vec![], &vec![], date(2024, 3, 8));
        assert_eq!(res, Err(Error::NoWorkingDays));
    }

    #[test]
    fn validate_rejects_recorded_presence() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 3, 11);
        let attendance = vec![
            make_attendance(&AttendanceID::create(), employee.id(), date(2024, 3, 12), Some(time(9, 0)), None, &now),
        ];
        let res = validate(&employee, &leave_type, date(2024, 3, 11), date(2024, 3, 13), &vec![], &attendance, today);
        assert_eq!(res, Err(Error::AttendanceConflict));

        // presence outside the range doesn't matter
        let res = validate(&employee, &leave_type, date(2024, 3, 13), date(2024, 3, 14), &vec![], &attendance, today);
        assert!(res.is_ok());
    }

    #[test]
    fn validate_enforces_quota_boundary() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 6, 1);
        // 8 of the 10 annual days already approved this year
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 2, 4), date(2024, 2, 14), num!(8), LeaveStatus::Approved, &now),
        ];

        // Mon 2024-06-03 .. Tue 2024-06-04 is exactly 2 working days: lands
        // right on the quota and passes
        let res = validate(&employee, &leave_type, date(2024, 6, 3), date(2024, 6, 4), &history, &vec![], today);
        assert_eq!(res, Ok(num!(2)));

        // one more working day tips it over
        let res = validate(&employee, &leave_type, date(2024, 6, 3), date(2024, 6, 5), &history, &vec![], today);
        assert_eq!(res, Err(Error::QuotaExceeded { used: num!(8), requested: num!(3), quota: num!(10) }));
    }

    #[test]
    fn validate_charges_year_of_start_date() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 12, 27);
        // a spent 2024 quota doesn't touch a request that *starts* in 2025...
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 3, 3), date(2024, 3, 17), num!(10), LeaveStatus::Approved, &now),
        ];
        let res = validate(&employee, &leave_type, date(2025, 1, 1), date(2025, 1, 2), &history, &vec![], today);
        assert!(res.is_ok());

        // ...but a request starting Dec 30 is charged entirely to 2024, even
        // the days that fall in January
        let res = validate(&employee, &leave_type, date(2024, 12, 30), date(2025, 1, 2), &history, &vec![], today);
        assert_eq!(res, Err(Error::QuotaExceeded { used: num!(10), requested: num!(4), quota: num!(10) }));
    }

    #[test]
    fn validate_rule_order_is_fixed() {
        let now = util::time::now();
        let (_, employee, leave_type) = fixture(&now);
        let today = date(2024, 1, 1);
        // this request both overlaps an approved leave and blows the quota;
        // the overlap rule runs first so it's the one reported
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 1, 1), date(2024, 1, 18), num!(14), LeaveStatus::Approved, &now),
        ];
        let res = validate(&employee, &leave_type, date(2024, 1, 15), date(2024, 1, 25), &history, &vec![], today);
        assert_eq!(res, Err(Error::OverlapApproved));

        // and a bad range wins over everything
        let res = validate(&employee, &leave_type, date(2024, 1, 25), date(2024, 1, 15), &history, &vec![], today);
        assert_eq!(res, Err(Error::InvalidRange));
    }

    #[test]
    fn can_apply() {
        let now = datetime(2024, 3, 1);
        let (user, employee, leave_type) = fixture(&now);
        let id = LeaveID::create();
        // Mon 2024-03-11 .. Sun 2024-03-17: five working days
        let start = date(2024, 3, 11);
        let end = date(2024, 3, 17);

        let mods = apply(&user, &employee, &leave_type, id.clone(), start, end, Some("family visit".into()), &vec![], &vec![], &now).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let leave = mods[0].clone().expect_op::<Leave>(Op::Create).unwrap();
        assert_eq!(leave.id(), &id);
        assert_eq!(leave.employee_id(), employee.id());
        assert_eq!(leave.leave_type_id(), leave_type.id());
        assert_eq!(leave.status(), &LeaveStatus::Pending);
        assert_eq!(leave.days(), &num!(5));
        assert_eq!(leave.reason(), &Some("family visit".into()));
        assert_eq!(leave.approved_by(), &None);

        // the validator runs inside apply
        let res = apply(&user, &employee, &leave_type, LeaveID::create(), end, start, None, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::InvalidRange));

        // an admin who isn't the employee can't file for them
        let admin = make_user(&UserID::create(), Some(vec![Role::Admin]), &now);
        let res = apply(&admin, &employee, &leave_type, LeaveID::create(), start, end, None, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));

        let mut inactive = employee.clone();
        inactive.set_active(false);
        let res = apply(&user, &inactive, &leave_type, LeaveID::create(), start, end, None, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::ObjectIsInactive("employee".into())));
    }

    #[test]
    fn can_approve() {
        let now = datetime(2024, 3, 1);
        let (_user, employee, leave_type) = fixture(&now);
        let admin = make_user(&UserID::create(), Some(vec![Role::Admin]), &now);
        let approver = make_employee(&EmployeeID::create(), Some(admin.id()), &DesignationID::create(), date(2018, 1, 1), &now);
        // Mon 2024-03-11 .. Wed 2024-03-13: three working days
        let start = date(2024, 3, 11);
        let end = date(2024, 3, 13);
        let subject = make_leave(&LeaveID::create(), employee.id(), leave_type.id(), start, end, num!(3), LeaveStatus::Pending, &now);

        let mods = approve(&admin, &approver, Some(subject.clone()), &employee, &leave_type, &vec![], &vec![], &now).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let approved = mods[0].clone().expect_op::<Leave>(Op::Update).unwrap();
        assert_eq!(approved.status(), &LeaveStatus::Approved);
        assert_eq!(approved.approved_by(), &Some(approver.id().clone()));

        // a non-admin cannot approve
        let employee_user = make_user(&UserID::create(), None, &now);
        let res = approve(&employee_user, &approver, Some(subject.clone()), &employee, &leave_type, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));

        // a missing subject is reported, not invented
        let res = approve(&admin, &approver, None, &employee, &leave_type, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::NotFound("leave".into())));

        // terminal requests stay terminal
        let res = approve(&admin, &approver, Some(approved.clone()), &employee, &leave_type, &vec![], &vec![], &now);
        assert_eq!(res, Err(Error::InvalidStateTransition("Approved".into())));
    }

    #[test]
    fn approve_rechecks_for_drift() {
        let now = datetime(2024, 3, 1);
        let (_user, employee, leave_type) = fixture(&now);
        let admin = make_user(&UserID::create(), Some(vec![Role::Admin]), &now);
        let approver = make_employee(&EmployeeID::create(), Some(admin.id()), &DesignationID::create(), date(2018, 1, 1), &now);
        let start = date(2024, 3, 11);
        let end = date(2024, 3, 13);
        let subject = make_leave(&LeaveID::create(), employee.id(), leave_type.id(), start, end, num!(3), LeaveStatus::Pending, &now);

        // another request was approved over the same days after this one was
        // submitted; the approval-time re-validation catches it
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), start, start, num!(1), LeaveStatus::Approved, &now),
        ];
        let res = approve(&admin, &approver, Some(subject.clone()), &employee, &leave_type, &history, &vec![], &now);
        assert_eq!(res, Err(Error::OverlapApproved));

        // quota consumed in the interim fails the same way
        let history = vec![
            make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2024, 1, 8), date(2024, 1, 19), num!(10), LeaveStatus::Approved, &now),
        ];
        let res = approve(&admin, &approver, Some(subject.clone()), &employee, &leave_type, &history, &vec![], &now);
        assert_eq!(res, Err(Error::QuotaExceeded { used: num!(10), requested: num!(3), quota: num!(10) }));

        // attendance recorded inside the range in the interim blocks too
        let attendance = vec![
            make_attendance(&AttendanceID::create(), employee.id(), start, Some(time(9, 0)), None, &now),
        ];
        let res = approve(&admin, &approver, Some(subject), &employee, &leave_type, &vec![], &attendance, &now);
        assert_eq!(res, Err(Error::AttendanceConflict));
    }

    #[test]
    fn can_reject() {
        let now = util::time::now();
        let (_user, employee, leave_type) = fixture(&now);
        let admin = make_user(&UserID::create(), Some(vec![Role::Admin]), &now);
        // a request that would fail validation is still freely rejectable:
        // rejection never re-validates
        let subject = make_leave(&LeaveID::create(), employee.id(), leave_type.id(), date(2020, 1, 5), date(2020, 1, 9), num!(5), LeaveStatus::Pending, &now);

        let mods = reject(&admin, Some(subject.clone()), &now).unwrap().into_vec();
        assert_eq!(mods.len(), 1);
        let rejected = mods[0].clone().expect_op::<Leave>(Op::Update).unwrap();
        assert_eq!(rejected.status(), &LeaveStatus::Rejected);
        assert_eq!(rejected.approved_by(), &None);

        let res = reject(&admin, Some(rejected), &now);
        assert_eq!(res, Err(Error::InvalidStateTransition("Rejected".into())));

        let res = reject(&admin, None, &now);
        assert_eq!(res, Err(Error::NotFound("leave".into())));

        let employee_user = make_user(&UserID::create(), None, &now);
        let res = reject(&employee_user, Some(subject), &now);
        assert_eq!(res, Err(Error::InsufficientPrivileges));
    }
}
