//! A leave request covers an inclusive date range for one employee and one
//! leave type, carrying the working-day count the validator computed at
//! submission time.
//!
//! Requests are born `Pending` and move exactly once, to `Approved` or
//! `Rejected`; both are terminal. Requests are never deleted by the core.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use crate::models::{
    employee::EmployeeID,
    leave_type::LeaveTypeID,
};

/// Lifecycle status of a leave request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum LeaveStatus {
    /// Submitted, awaiting an approver.
    Pending,
    /// Approved; counts against the year's quota and blocks overlapping
    /// requests.
    Approved,
    /// Rejected; has no further effect on anything.
    Rejected,
}

impl std::fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            LeaveStatus::Pending => write!(f, "Pending"),
            LeaveStatus::Approved => write!(f, "Approved"),
            LeaveStatus::Rejected => write!(f, "Rejected"),
        }
    }
}

hr_model! {
    /// The leave request model.
    pub struct Leave {
        id: <<LeaveID>>,
        /// The employee requesting leave.
        employee_id: EmployeeID,
        /// The type of leave requested, which determines the annual quota it
        /// draws from.
        leave_type_id: LeaveTypeID,
        /// First day of leave (inclusive).
        start_date: NaiveDate,
        /// Last day of leave (inclusive). Never before `start_date`.
        end_date: NaiveDate,
        /// Working-day count of the range, computed by the validator at
        /// submission. Fractional-capable for half-day leave types.
        days: Decimal,
        /// Where the request sits in its lifecycle.
        status: LeaveStatus,
        /// Optional free-text reason given by the employee.
        #[builder(default)]
        reason: Option<String>,
        /// The employee who approved the request. Set only on approval.
        #[builder(default)]
        approved_by: Option<EmployeeID>,
    }
    LeaveBuilder
}
