//! User Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// Argon2 PHC string; never leaves the service boundary.
    pub encrypted_password: String,

    pub is_admin: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
