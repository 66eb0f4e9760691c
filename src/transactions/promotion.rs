//! Promotions: validating a designation change against an employee's history
//! and committing it together with the employee's new designation.
//!
//! Recording a promotion produces *two* modifications -- the new promotion
//! record and the updated employee -- and they are one atomic unit: the
//! caller must apply both in a single storage transaction, or roll both
//! back. An employee whose designation disagrees with their promotion
//! history is a correctness violation, not a recoverable state.
//!
//! See the [promotion model.][1]
//!
//! [1]: ../../models/promotion/index.html

use chrono::{DateTime, NaiveDate, Utc};
use crate::{
    access::Permission,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        designation::DesignationID,
        employee::Employee,
        promotion::{Promotion, PromotionID},
        user::User,
    },
};

/// Validate a designation change against the employee's current state and
/// promotion history.
///
/// The old designation must match the employee's *current* one (this guards
/// against stale client state), the new one must differ, and the effective
/// date must fall on or after the join date and strictly after the latest
/// promotion already on file -- compared by effective date alone, not by
/// insertion order. Returns that latest effective date, if any.
pub fn validate(employee: Option<&Employee>, old_designation_id: &DesignationID, new_designation_id: &DesignationID, effective_date: NaiveDate, history: &Vec<Promotion>) -> Result<Option<NaiveDate>> {
    let employee = match employee {
        Some(employee) => employee,
        None => Err(Error::NotFound("employee".into()))?,
    };
    if old_designation_id != employee.designation_id() {
        Err(Error::DesignationMismatch)?;
    }
    if new_designation_id == old_designation_id {
        Err(Error::SameDesignation)?;
    }
    if effective_date < *employee.join_date() {
        Err(Error::EffectiveDateTooEarly)?;
    }
    let last = history.iter()
        .filter(|promotion| promotion.employee_id() == employee.id())
        .map(|promotion| promotion.effective_date().clone())
        .max();
    if let Some(last) = last {
        if effective_date <= last {
            Err(Error::EffectiveDateNotMonotonic(last))?;
        }
    }
    Ok(last)
}

/// Record a promotion: insert the promotion and move the employee to the new
/// designation.
///
/// Both returned modifications must be applied atomically by the caller.
pub fn record(caller: &User, employee: Option<Employee>, id: PromotionID, old_designation_id: DesignationID, new_designation_id: DesignationID, effective_date: NaiveDate, notes: Option<String>, history: &Vec<Promotion>, now: &DateTime<Utc>) -> Result<Modifications> {
    caller.access_check(Permission::PromotionCreate)?;
    validate(employee.as_ref(), &old_designation_id, &new_designation_id, effective_date, history)?;
    let mut employee = match employee {
        Some(employee) => employee,
        None => Err(Error::NotFound("employee".into()))?,
    };
    if !employee.is_active() {
        Err(Error::ObjectIsInactive("employee".into()))?;
    }
    let promotion = Promotion::builder()
        .id(id)
        .employee_id(employee.id().clone())
        .old_designation_id(old_designation_id)
        .new_designation_id(new_designation_id.clone())
        .effective_date(effective_date)
        .notes(notes)
        .active(true)
        .created(now.clone())
        .updated(now.clone())
        .build()
        .map_err(|e| Error::BuilderFailed(e))?;
    employee.set_designation_id(new_designation_id);
    employee.set_updated(now.clone());
    let mut mods = Modifications::new();
    mods.push(Op::Create, promotion);
    mods.push(Op::Update, employee);
    Ok(mods)
}
