//! Linking a login principal to its employee record.
//!
//! The host application resolves a session to a [User] and, on the first
//! visit, calls [link_by_email] with the already-linked employee (if any) and
//! the unlinked employee whose email matches the login's (if any). The
//! transaction is idempotent: once the link exists and the user carries the
//! `Employee` role, re-running it produces no modifications. There is no
//! permission gate here -- the whole point is to run before the user has any
//! roles at all.
//!
//! An empty modification set with no `linked` employee passed in means no
//! record matched; the caller treats the session as having no employee.
//!
//! [User]: ../../models/user/struct.User.html
//! [link_by_email]: fn.link_by_email.html

use chrono::{DateTime, Utc};
use crate::{
    access::Role,
    error::{Error, Result},
    models::{
        Op,
        Modifications,
        employee::Employee,
        user::User,
    },
};

/// Link a login to an employee record by email match, provisioning the
/// default `Employee` role along the way.
///
/// `linked` is the employee already pointing at this user, if storage has
/// one; `candidate` is the caller's case-insensitive match on email among
/// *unlinked* employees. The email match is re-checked here, and a candidate
/// that gained a link since the caller's query surfaces as a conflict the
/// caller may retry (by re-querying).
pub fn link_by_email(user: User, linked: Option<Employee>, candidate: Option<Employee>, now: &DateTime<Utc>) -> Result<Modifications> {
    let mut mods = Modifications::new();
    if linked.is_some() {
        ensure_employee_role(user, &mut mods, now);
        return Ok(mods);
    }
    let candidate = match candidate {
        Some(employee) => employee,
        None => return Ok(mods),
    };
    if candidate.user_id().is_some() {
        Err(Error::ConcurrencyConflict("employee is already linked to another login".into()))?;
    }
    if !candidate.email().eq_ignore_ascii_case(user.email()) {
        // not actually a match; nothing to link
        return Ok(mods);
    }
    let mut employee = candidate;
    employee.set_user_id(Some(user.id().clone()));
    employee.set_updated(now.clone());
    mods.push(Op::Update, employee);
    ensure_employee_role(user, &mut mods, now);
    Ok(mods)
}

/// Add the default `Employee` role to the user if they don't have it yet.
fn ensure_employee_role(mut user: User, mods: &mut Modifications, now: &DateTime<Utc>) {
    if user.roles().contains(&Role::Employee) {
        return;
    }
    let mut roles = user.roles().clone();
    roles.push(Role::Employee);
    user.set_roles(roles);
    user.set_updated(now.clone());
    mods.push(Op::Update, user);
}
