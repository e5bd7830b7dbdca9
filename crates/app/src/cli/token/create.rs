use clap::Args;
use hotel_app::{
    auth::{AccessTokens, AuthManager, TokenSecret},
    database,
};
use jiff::SignedDuration;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// Email of the user the token is issued to
    #[arg(long)]
    email: String,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// HMAC secret shared with the API server
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    jwt_secret: String,

    /// Token lifetime in seconds
    #[arg(long, env = "JWT_TTL_SECONDS", default_value_t = 14_400)]
    jwt_ttl_seconds: u32,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    if args.jwt_secret.is_empty() {
        return Err("jwt-secret cannot be empty".to_string());
    }

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let tokens = AccessTokens::new(
        &TokenSecret::new(args.jwt_secret),
        SignedDuration::from_secs(i64::from(args.jwt_ttl_seconds)),
    );

    let token = AuthManager::new(pool, tokens)
        .issue_token(&args.email)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("access_token: {token}");
    println!("expires_in_seconds: {}", args.jwt_ttl_seconds);

    Ok(())
}
