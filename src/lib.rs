/// A macro that standardizes including, exporting, and creating wrapper type(s)
/// for our heroic models.
macro_rules! load_models {
    (
        @pub use
        $( ($path:ident, $model:ident, $($extratypes:ident),*), )*
    ) => {
        pub use crate::models::{
            $( $path::{$model, $($extratypes),*}, )*
        };
    };

    (
        @pub mod
        $( ($path:ident, $($_rest:tt)*), )*
    ) => {
        $(
            pub mod $path;
        )*
    };

    // create an enum that wraps our models in CUD
    (
        @pub enum $enumname:ident
        $( ($path:ident, $model:ident, $($_extratypes:ident),*), )*
    ) => {
        /// An enum that allows returning *any* model type. This is mainly used
        /// along with [Op](enum.Op.html) to specify modifications (ie
        /// `[Op::Create, Leave]`).
        #[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
        pub enum $enumname {
            $(
                $model(crate::models::$path::$model),
            )*
        }
    };

    // conversions between the wrapper enum and the concrete models, used
    // when unwrapping modifications
    (
        @impl from $enumname:ident
        $( ($path:ident, $model:ident, $($_extratypes:ident),*), )*
    ) => {
        $(
            impl From<crate::models::$path::$model> for $enumname {
                fn from(model: crate::models::$path::$model) -> Self {
                    $enumname::$model(model)
                }
            }

            impl std::convert::TryFrom<$enumname> for crate::models::$path::$model {
                type Error = crate::error::Error;

                fn try_from(wrapped: $enumname) -> std::result::Result<Self, Self::Error> {
                    match wrapped {
                        $enumname::$model(model) => Ok(model),
                        _ => Err(crate::error::Error::WrongModelType),
                    }
                }
            }
        )*
    };

    // entry point
    ($($load_type:tt)*) => {
        load_models! {
            @$($load_type)*
            // kind of trying to load based on dependency order here, but it's not perfect.
            (company, Company, CompanyID),
            (department, Department, DepartmentID),
            (designation, Designation, DesignationID),
            (user, User, UserID),
            (employee, Employee, EmployeeID),
            (leave_type, LeaveType, LeaveTypeID),
            (attendance, Attendance, AttendanceID, DayState, DayStatus),
            (leave, Leave, LeaveID, LeaveStatus),
            (promotion, Promotion, PromotionID),
        }
    };
}

pub mod error;
#[macro_use]
mod util;
pub mod access;
pub mod models;
pub mod workdays;
pub mod transactions;

load_models!{ pub use }
