//! The error module houses the error types the core can return.
//!
//! Business-rule failures are values, not panics: validators and transactions
//! hand back one named error kind (with the relevant figures baked into the
//! message) and leave storage faults to the caller, which must roll back any
//! partially-applied modification set.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The set of errors the core's validators and transactions can produce.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// A check-in was attempted for a day that already has one
    #[error("already checked in")]
    AlreadyCheckedIn,
    /// A check-out was attempted for a day that already has one
    #[error("already checked out")]
    AlreadyCheckedOut,
    /// A leave range covers days the employee was recorded present
    #[error("attendance exists in the selected range")]
    AttendanceConflict,
    /// A leave request starts further back than the backdating window allows
    #[error("backdated requests beyond {0} days are not allowed")]
    BackdateLimitExceeded(i64),
    /// A model builder was given incomplete data
    #[error("error building model: {0}")]
    BuilderFailed(String),
    /// A concurrent writer got there first; the caller may retry
    #[error("conflicting concurrent write: {0}")]
    ConcurrencyConflict(String),
    /// A promotion's old designation does not match the employee's current one
    #[error("old designation must match the employee's current designation")]
    DesignationMismatch,
    /// A promotion's effective date does not advance the employee's history
    #[error("effective date must be later than the last promotion date ({0})")]
    EffectiveDateNotMonotonic(NaiveDate),
    /// A promotion's effective date falls before the employee joined
    #[error("effective date cannot be earlier than the join date")]
    EffectiveDateTooEarly,
    /// The current caller doesn't have access to perform the operation
    #[error("insufficient privileges")]
    InsufficientPrivileges,
    /// A date range ends before it starts
    #[error("start date must be before or equal to end date")]
    InvalidRange,
    /// An action was attempted on a record whose status is terminal
    #[error("invalid state transition from status {0}")]
    InvalidStateTransition(String),
    /// A check-out time does not come after the check-in time
    #[error("out time must be greater than in time")]
    InvalidTimeOrder,
    /// A leave range contains no working days at all
    #[error("no working days in the selected range")]
    NoWorkingDays,
    /// A check-out was attempted without a check-in
    #[error("please check in first")]
    NotCheckedIn,
    /// A record the operation needs does not exist
    #[error("{0} not found")]
    NotFound(String),
    /// An object we're trying to operate on is inactive or deleted
    #[error("{0} is inactive")]
    ObjectIsInactive(String),
    /// Tried to unwrap a modification with the wrong operation
    #[error("op does not match expected")]
    OpMismatch,
    /// A leave range shares at least one day with an approved leave
    #[error("overlaps with an approved leave")]
    OverlapApproved,
    /// A leave request would push the year's approved days past the quota
    #[error("quota exceeded: used {used}, requested {requested}, quota {quota}")]
    QuotaExceeded {
        /// Approved days already consumed this year for this leave type
        used: Decimal,
        /// Working days the current request would add
        requested: Decimal,
        /// The leave type's annual allowance
        quota: Decimal,
    },
    /// A promotion's new designation is the one the employee already holds
    #[error("new designation cannot be the same as old designation")]
    SameDesignation,
    /// Tried to unwrap a modification into the wrong model type
    #[error("wrong model type")]
    WrongModelType,
}

/// Standard result, works every time.
pub type Result<T> = std::result::Result<T, Error>;
