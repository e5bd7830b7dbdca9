//! Typed Uuids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
    str::FromStr,
};

use thiserror::Error;
use uuid::Uuid;

/// Returned when an externally supplied identifier is not a well-formed UUID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid id given")]
pub struct InvalidIdError;

/// A UUID tagged with the record type it identifies.
pub struct TypedUuid<T>(Uuid, PhantomData<T>);

impl<T> TypedUuid<T> {
    /// Generate a fresh, time-ordered identifier.
    #[must_use]
    pub fn new() -> Self {
        Self::from_uuid(Uuid::now_v7())
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, PhantomData)
    }

    #[must_use]
    pub const fn into_uuid(self) -> Uuid {
        self.0
    }

    /// Parse an identifier received from a client.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIdError`] when `value` is not a UUID.
    pub fn parse(value: &str) -> Result<Self, InvalidIdError> {
        Uuid::try_parse(value.trim())
            .map(Self::from_uuid)
            .map_err(|_parse_error| InvalidIdError)
    }
}

impl<T> Default for TypedUuid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromStr for TypedUuid<T> {
    type Err = InvalidIdError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl<T> Clone for TypedUuid<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedUuid<T> {}

impl<T> Debug for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedUuid<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedUuid<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedUuid<T> {}

impl<T> Hash for TypedUuid<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedUuid<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedUuid<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<Uuid> for TypedUuid<T> {
    fn from(value: Uuid) -> Self {
        Self::from_uuid(value)
    }
}

impl<T> From<TypedUuid<T>> for Uuid {
    fn from(value: TypedUuid<T>) -> Self {
        value.into_uuid()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    #[test]
    fn parse_accepts_hyphenated_uuid() {
        let uuid = Uuid::now_v7();

        let parsed = TypedUuid::<Marker>::parse(&uuid.to_string());

        assert_eq!(parsed, Ok(TypedUuid::from_uuid(uuid)));
    }

    #[test]
    fn parse_rejects_malformed_ids() {
        for value in ["", "123", "not-a-uuid", "650c0a2e9b1c2d3e4f5a6b7c"] {
            assert_eq!(
                TypedUuid::<Marker>::parse(value),
                Err(InvalidIdError),
                "{value:?} should be rejected"
            );
        }
    }
}
