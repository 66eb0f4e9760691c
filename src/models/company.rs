//! A company is the top-level grouping the directory hangs off of. Employees
//! and departments reference it by id.
//!
//! Companies are master data: the core never edits them, it only links to
//! them, so the model carries nothing beyond its name.

hr_model! {
    /// The company model. Employee and department records point at it through
    /// [CompanyID].
    pub struct Company {
        id: <<CompanyID>>,
        /// Legal/display name of the company.
        name: String,
    }
    CompanyBuilder
}
