//! A designation is a job title an employee can hold. Promotions move an
//! employee from one designation to another; nothing else in the core mutates
//! an employee's designation.

hr_model! {
    /// The designation model. Promotion records reference two of these (old
    /// and new) by id; no back-navigation is kept on the designation itself.
    pub struct Designation {
        id: <<DesignationID>>,
        /// Job title, ie "Senior Engineer".
        title: String,
        /// Optional ranking used for ordering titles in reports.
        #[builder(default)]
        grade: Option<i32>,
    }
    DesignationBuilder
}
