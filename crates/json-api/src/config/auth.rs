//! Auth Config

use clap::Args;
use jiff::SignedDuration;

use hotel_app::auth::{AccessTokens, TokenSecret};

/// Access token settings.
#[derive(Debug, Args)]
pub struct AuthConfig {
    /// Secret used to sign and verify access tokens
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Lifetime of issued access tokens in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 14_400)]
    pub jwt_ttl_seconds: u32,
}

impl AuthConfig {
    /// Build the token issuer/verifier described by these settings.
    #[must_use]
    pub fn access_tokens(&self) -> AccessTokens {
        let secret = TokenSecret::new(self.jwt_secret.as_bytes());

        AccessTokens::new(
            &secret,
            SignedDuration::from_secs(i64::from(self.jwt_ttl_seconds)),
        )
    }
}
