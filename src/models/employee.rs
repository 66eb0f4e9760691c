//! An employee is the central record of the directory: every attendance row,
//! leave request, and promotion hangs off of one.
//!
//! Directory assignments (company, department) and the current designation
//! are held as plain ids; the designation is only ever changed by the
//! promotion transaction, the rest by master-data edits outside the core.

use chrono::NaiveDate;
use crate::{
    error::{Error, Result},
    models::{
        company::CompanyID,
        department::DepartmentID,
        designation::DesignationID,
        user::UserID,
    },
};

hr_model! {
    /// The employee model.
    pub struct Employee {
        id: <<EmployeeID>>,
        /// Unique employee number, assigned by the directory.
        emp_no: String,
        /// The employee's full name.
        full_name: String,
        /// Unique work email. Used for linking the login principal to this
        /// record (case-insensitive match).
        email: String,
        /// The day the employee joined; promotions cannot take effect before
        /// this date.
        join_date: NaiveDate,
        /// The company this employee belongs to.
        company_id: CompanyID,
        /// The department this employee belongs to.
        department_id: DepartmentID,
        /// The employee's current designation. Mutated only by the promotion
        /// transaction.
        designation_id: DesignationID,
        /// The login principal linked to this record, once the identity
        /// transaction has matched one by email.
        #[builder(default)]
        user_id: Option<UserID>,
    }
    EmployeeBuilder
}

impl Employee {
    /// Whether this record is linked to the given login principal.
    pub fn linked_to(&self, user_id: &UserID) -> bool {
        self.user_id().as_ref() == Some(user_id)
    }

    /// Check that the given principal is the one this record belongs to.
    /// Self-service transactions (check-in/out, leave application) run this
    /// after the role check.
    pub(crate) fn self_check(&self, user_id: &UserID) -> Result<()> {
        if !self.linked_to(user_id) {
            Err(Error::InsufficientPrivileges)?;
        }
        Ok(())
    }
}
