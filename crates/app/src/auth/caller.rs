//! Authenticated caller identity.

use crate::domain::users::records::{UserRecord, UserUuid};

/// Identity of the user making a request, resolved from their access token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller {
    pub uuid: UserUuid,
    pub is_admin: bool,
}

impl From<&UserRecord> for Caller {
    fn from(user: &UserRecord) -> Self {
        Self {
            uuid: user.uuid,
            is_admin: user.is_admin,
        }
    }
}
