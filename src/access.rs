//! The access module defines the various top-level permissions within the
//! system and the roles that contain those permissions.
//!
//! Roles can have multiple Permission objects. Permissions are additive,
//! meaning everyone starts with *no* permissions (returning
//! [Error::InsufficientPrivileges][err_priv]) and permissions are added
//! (allowed) from there.
//!
//! The role split mirrors the cookie roles of the host application: `Admin`
//! runs the approval and promotion workflows, `Employee` runs the
//! self-service ones. Self-service transactions additionally require that
//! the caller is the principal linked to the employee record being acted on.
//!
//! [err_priv]: ../error/enum.Error.html#variant.InsufficientPrivileges

use serde::{Serialize, Deserialize};

/// Define the system-wide permissions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Permission {
    All,

    AttendanceCheckIn,
    AttendanceCheckOut,

    LeaveApply,
    LeaveApprove,
    LeaveReject,

    PromotionCreate,
}

/// Define the system-wide roles users can have.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    Employee,
}

impl Role {
    /// For a given role, return the permissions that role has access to.
    pub fn permissions(&self) -> Vec<Permission> {
        match *self {
            Role::Admin => {
                vec![Permission::All]
            }
            Role::Employee => {
                vec![
                    Permission::AttendanceCheckIn,
                    Permission::AttendanceCheckOut,
                    Permission::LeaveApply,
                ]
            }
        }
    }

    /// Determine if a role has a specific permission.
    pub fn can(&self, perm: &Permission) -> bool {
        for p in &self.permissions() {
            match p {
                Permission::All => {
                    return true;
                }
                _ => {
                    if p == perm {
                        return true;
                    }
                }
            }
        }
        false
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn permissions_work() {
        let admin = Role::Admin;
        assert!(admin.can(&Permission::All));
        assert!(admin.can(&Permission::LeaveApprove));
        assert!(admin.can(&Permission::LeaveReject));
        assert!(admin.can(&Permission::PromotionCreate));
        assert!(admin.can(&Permission::AttendanceCheckIn));

        let employee = Role::Employee;
        assert!(employee.can(&Permission::AttendanceCheckIn));
        assert!(employee.can(&Permission::AttendanceCheckOut));
        assert!(employee.can(&Permission::LeaveApply));
        assert!(!employee.can(&Permission::LeaveApprove));
        assert!(!employee.can(&Permission::LeaveReject));
        assert!(!employee.can(&Permission::PromotionCreate));
    }

}
