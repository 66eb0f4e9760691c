//! A department groups employees inside a company. Like companies,
//! departments are master data referenced by id only.

use crate::models::company::CompanyID;

hr_model! {
    /// The department model.
    pub struct Department {
        id: <<DepartmentID>>,
        /// The company this department belongs to.
        company_id: CompanyID,
        /// Display name of the department.
        name: String,
    }
    DepartmentBuilder
}
