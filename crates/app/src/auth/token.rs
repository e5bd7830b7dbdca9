//! Access token issuing and verification.

use std::fmt;

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::{Error as JwtError, ErrorKind},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use zeroize::Zeroize;

use crate::domain::users::records::{UserRecord, UserUuid};

/// Lifetime of a token when none is configured: four hours.
pub const DEFAULT_TOKEN_TTL: SignedDuration = SignedDuration::from_secs(4 * 60 * 60);

/// Algorithm new tokens are signed with.
const SIGNING_ALGORITHM: Algorithm = Algorithm::HS256;

/// Tokens signed with anything outside the HMAC family are rejected.
const ACCEPTED_ALGORITHMS: [Algorithm; 3] = [Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is signed with an unexpected algorithm")]
    InvalidAlgorithm,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token is malformed")]
    Malformed,

    #[error("failed to sign token")]
    Signing(#[source] JwtError),
}

impl From<JwtError> for TokenError {
    fn from(error: JwtError) -> Self {
        match error.kind() {
            ErrorKind::InvalidAlgorithm
            | ErrorKind::InvalidAlgorithmName
            | ErrorKind::MissingAlgorithm => Self::InvalidAlgorithm,
            ErrorKind::InvalidSignature => Self::InvalidSignature,
            ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::Malformed,
        }
    }
}

/// Server-held HMAC key.
#[derive(Clone)]
pub struct TokenSecret {
    bytes: Vec<u8>,
}

impl TokenSecret {
    #[must_use]
    pub fn new(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: secret.into(),
        }
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for TokenSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TokenSecret(**redacted**)")?;
        Ok(())
    }
}

impl Drop for TokenSecret {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    exp: i64,
}

/// Issues and verifies signed, time-limited access tokens carrying a user id.
#[derive(Clone)]
pub struct AccessTokens {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: SignedDuration,
}

impl fmt::Debug for AccessTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokens")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl AccessTokens {
    #[must_use]
    pub fn new(secret: &TokenSecret, ttl: SignedDuration) -> Self {
        let mut validation = Validation::new(SIGNING_ALGORITHM);

        validation.algorithms = ACCEPTED_ALGORITHMS.to_vec();
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    #[must_use]
    pub const fn ttl(&self) -> SignedDuration {
        self.ttl
    }

    /// Issue a token for `user` that expires one TTL from now.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the token cannot be signed.
    pub fn issue(&self, user: &UserRecord) -> Result<String, TokenError> {
        self.issue_at(user, Timestamp::now())
    }

    /// Issue a token as if it were signed at `issued_at`.
    ///
    /// # Errors
    ///
    /// Returns [`TokenError::Signing`] if the token cannot be signed.
    pub fn issue_at(&self, user: &UserRecord, issued_at: Timestamp) -> Result<String, TokenError> {
        let claims = Claims {
            id: user.uuid.to_string(),
            exp: issued_at.as_second().saturating_add(self.ttl.as_secs()),
        };

        encode(&Header::new(SIGNING_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Check a token's algorithm, signature and expiry and return the user id it carries.
    ///
    /// # Errors
    ///
    /// Returns the [`TokenError`] describing why the token was rejected.
    pub fn verify(&self, token: &str) -> Result<UserUuid, TokenError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;

        UserUuid::parse(&data.claims.id).map_err(|_invalid_id| TokenError::Malformed)
    }
}

#[cfg(test)]
mod tests {
    use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
    use testresult::TestResult;

    use super::*;

    fn user() -> UserRecord {
        UserRecord {
            uuid: UserUuid::new(),
            first_name: "James".to_string(),
            last_name: "Foo".to_string(),
            email: "james@foo.com".to_string(),
            encrypted_password: String::new(),
            is_admin: false,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    fn tokens(secret: &str) -> AccessTokens {
        AccessTokens::new(&TokenSecret::new(secret), DEFAULT_TOKEN_TTL)
    }

    #[test]
    fn issued_token_verifies_to_user_id() -> TestResult {
        let tokens = tokens("secret");
        let user = user();

        let token = tokens.issue(&user)?;

        assert_eq!(tokens.verify(&token)?, user.uuid);

        Ok(())
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() -> TestResult {
        let token = tokens("other secret").issue(&user())?;

        let result = tokens("secret").verify(&token);

        assert!(
            matches!(result, Err(TokenError::InvalidSignature)),
            "expected InvalidSignature, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn expired_token_is_rejected() -> TestResult {
        let tokens = tokens("secret");
        let issued_at = Timestamp::now() - SignedDuration::from_hours(5);

        let token = tokens.issue_at(&user(), issued_at)?;
        let result = tokens.verify(&token);

        assert!(
            matches!(result, Err(TokenError::Expired)),
            "expected Expired, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn non_hmac_algorithm_is_rejected() {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let claims = format!(
            r#"{{"id":"{}","exp":{}}}"#,
            user().uuid,
            Timestamp::now().as_second() + 3600
        );
        let payload = URL_SAFE_NO_PAD.encode(claims);
        let signature = URL_SAFE_NO_PAD.encode(b"signature");

        let result = tokens("secret").verify(&format!("{header}.{payload}.{signature}"));

        assert!(
            matches!(result, Err(TokenError::InvalidAlgorithm)),
            "expected InvalidAlgorithm, got {result:?}"
        );
    }

    #[test]
    fn garbage_is_malformed() {
        for token in ["", "abc", "a.b.c"] {
            let result = tokens("secret").verify(token);

            assert!(
                matches!(result, Err(TokenError::Malformed)),
                "expected Malformed for {token:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn secret_is_redacted_from_debug_output() {
        let debug = format!("{:?}", TokenSecret::new("hunter2"));

        assert_eq!(debug, "TokenSecret(**redacted**)");
    }
}
