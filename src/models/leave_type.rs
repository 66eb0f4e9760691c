//! A leave type pairs a name ("Annual", "Sick") with the fractional number of
//! days of it an employee may take per calendar year. The quota check in the
//! leave validator reads the allowance from here.

use rust_decimal::Decimal;

hr_model! {
    /// The leave type model.
    pub struct LeaveType {
        id: <<LeaveTypeID>>,
        /// Display name of the leave type.
        name: String,
        /// Fractional days of this type allowed per calendar year.
        annual_quota: Decimal,
    }
    LeaveTypeBuilder
}
