//! Shared machinery the model modules are built on.

#[macro_use]
pub mod hr_model;
