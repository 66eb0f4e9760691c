//! A promotion records a designation change for an employee on a given
//! effective date.
//!
//! Promotions are immutable once created, and an employee's history is
//! strictly ordered by effective date: each new promotion must take effect
//! after the last one. Applying a promotion also updates the employee's
//! current designation; the two writes are one atomic unit (see the
//! [promotion transaction][1]).
//!
//! [1]: ../../transactions/promotion/index.html

use chrono::NaiveDate;
use crate::models::{
    designation::DesignationID,
    employee::EmployeeID,
};

hr_model! {
    /// The promotion model.
    pub struct Promotion {
        id: <<PromotionID>>,
        /// The employee being promoted.
        employee_id: EmployeeID,
        /// The designation the employee held when the promotion was recorded.
        old_designation_id: DesignationID,
        /// The designation the promotion moves the employee to.
        new_designation_id: DesignationID,
        /// The day the change takes force.
        effective_date: NaiveDate,
        /// Optional free-text notes from the recording admin.
        #[builder(default)]
        notes: Option<String>,
    }
    PromotionBuilder
}
