//! Auth data models.

use std::fmt;

use crate::domain::users::records::UserRecord;

/// Email and password presented to `POST /auth`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .finish()
    }
}

/// A successful login: the user and a fresh access token for them.
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub user: UserRecord,
    pub token: String,
}
