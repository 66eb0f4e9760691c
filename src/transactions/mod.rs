//! Transactions are the primary interface for interacting with the HR core.
//! They are responsible for taking the needed information (which must be
//! passed in) and returning a list of modifications that the caller is
//! responsible for applying to whatever storage medium they are using.
//!
//! The high-level picture here is that we're creating a functional API for the
//! models within the system and the interactions between them. The logic all
//! lives in the transactions (and in some cases the models) but storage happens
//! somewhere else and we don't touch it here.
//!
//! This means that any storage system that *can* support the HR data models
//! could (in theory) be used without needing to couple any of the logic to the
//! storage mechanism. The storage layer keeps two obligations, though:
//!
//! - a modification set with more than one entry is atomic: apply all of it in
//!   one storage transaction or none of it (promotion recording relies on
//!   this, as does identity linking);
//! - where a rule was checked against queried state (the leave quota, the
//!   one-row-per-employee-day attendance constraint), a concurrent writer can
//!   invalidate the check before the write lands. Either scope the query and
//!   the write in one serializable/snapshot transaction, or re-run the
//!   transaction function immediately before committing and surface
//!   [ConcurrencyConflict][err_conflict] (or the rule's own error) to the
//!   caller for retry. The core never retries by itself.
//!
//! [err_conflict]: ../error/enum.Error.html#variant.ConcurrencyConflict

pub mod attendance;
pub mod identity;
pub mod leave;
pub mod promotion;
