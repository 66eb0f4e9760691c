//! The user is the authenticated principal behind every call into the core.
//! Users carry roles, and roles carry permissions; the employee record a user
//! acts for is linked separately (see the [employee model][1] and the
//! identity transaction).
//!
//! [1]: ../employee/index.html

use crate::{
    access::{Permission, Role},
    error::{Error, Result},
};

hr_model! {
    /// The `User` model describes a login of the system.
    pub struct User {
        id: <<UserID>>,
        /// Defines this user's roles, ie what permissions they have access to.
        roles: Vec<Role>,
        /// The user's login email. Linking to an employee record matches this
        /// against the employee's email, case-insensitively.
        email: String,
        /// The user's full name.
        name: String,
    }
    UserBuilder
}

impl User {
    /// Determines if a user can perform an action (based on their roles).
    pub fn can(&self, permission: &Permission) -> bool {
        if !self.is_active() {
            return false;
        }
        for role in self.roles() {
            if role.can(permission) {
                return true;
            }
        }
        false
    }

    /// Check if this user can perform an action.
    pub fn access_check(&self, permission: Permission) -> Result<()> {
        if !self.can(&permission) {
            Err(Error::InsufficientPrivileges)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        access::{Permission, Role},
        models::user::UserID,
        util::{self, test::*},
    };

    #[test]
    fn permissions() {
        let now = util::time::now();
        let user = make_user(&UserID::create(), None, &now);
        assert!(user.can(&Permission::AttendanceCheckIn));
        assert!(user.access_check(Permission::LeaveApply).is_ok());
        assert!(user.access_check(Permission::LeaveApprove).is_err());

        let admin = make_user(&UserID::create(), Some(vec![Role::Admin]), &now);
        assert!(admin.can(&Permission::LeaveApprove));
        assert!(admin.access_check(Permission::PromotionCreate).is_ok());

        let user3 = make_user(&UserID::create(), Some(vec![]), &now);
        assert!(!user3.can(&Permission::AttendanceCheckIn));
        assert!(user3.access_check(Permission::LeaveApply).is_err());

        let mut user4 = user.clone();
        user4.set_deleted(Some(now.clone()));
        assert!(!user4.can(&Permission::AttendanceCheckIn));
        assert!(user4.access_check(Permission::LeaveApply).is_err());

        let mut user5 = user.clone();
        user5.set_active(false);
        assert!(!user5.can(&Permission::AttendanceCheckIn));
        assert!(user5.access_check(Permission::LeaveApply).is_err());
    }
}
