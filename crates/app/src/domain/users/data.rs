//! User Data

use thiserror::Error;

use crate::domain::users::records::UserUuid;

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 100;
const MIN_PASSWORD_CHARS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UserValidationError {
    #[error("firstName length should be between {MIN_NAME_CHARS} and {MAX_NAME_CHARS} characters")]
    FirstName,

    #[error("lastName length should be between {MIN_NAME_CHARS} and {MAX_NAME_CHARS} characters")]
    LastName,

    #[error("email is invalid")]
    Email,

    #[error("password length should be at least {MIN_PASSWORD_CHARS} characters")]
    Password,
}

/// New User Data
///
/// Carries the plain-text password until the service hashes it.
#[derive(Clone, PartialEq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("password", &"**redacted**")
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

impl NewUser {
    /// Check registration input.
    ///
    /// # Errors
    ///
    /// Returns the first field that fails validation.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if !is_valid_name(&self.first_name) {
            return Err(UserValidationError::FirstName);
        }

        if !is_valid_name(&self.last_name) {
            return Err(UserValidationError::LastName);
        }

        if !is_valid_email(&self.email) {
            return Err(UserValidationError::Email);
        }

        if self.password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(UserValidationError::Password);
        }

        Ok(())
    }
}

/// User row to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserRecord {
    pub uuid: UserUuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub encrypted_password: String,
    pub is_admin: bool,
}

/// User Update Data
///
/// Only the name fields are mutable; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UserUpdate {
    /// Drop empty values so they leave the stored field untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            first_name: self.first_name.filter(|name| !name.is_empty()),
            last_name: self.last_name.filter(|name| !name.is_empty()),
        }
    }

    /// Check the fields that will be written.
    ///
    /// # Errors
    ///
    /// Returns the first present field that fails validation.
    pub fn validate(&self) -> Result<(), UserValidationError> {
        if self.first_name.as_deref().is_some_and(|name| !is_valid_name(name)) {
            return Err(UserValidationError::FirstName);
        }

        if self.last_name.as_deref().is_some_and(|name| !is_valid_name(name)) {
            return Err(UserValidationError::LastName);
        }

        Ok(())
    }
}

/// Exact-match filters for user listings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFilter {
    pub first_name: Option<String>,
}

fn is_valid_name(name: &str) -> bool {
    (MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&name.chars().count())
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}
