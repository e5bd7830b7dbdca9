use clap::Args;
use hotel_app::{
    database,
    domain::users::{UsersManager, UsersService, data::NewUser},
};

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    #[arg(long)]
    first_name: String,

    #[arg(long)]
    last_name: String,

    #[arg(long)]
    email: String,

    /// Initial password (at least 7 characters)
    #[arg(long, env = "USER_PASSWORD", hide_env_values = true)]
    password: String,

    /// Grant the administrator role
    #[arg(long)]
    admin: bool,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = UsersManager::new(pool)
        .register_user(NewUser {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            is_admin: args.admin,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("user_email: {}", user.email);
    println!("user_is_admin: {}", user.is_admin);

    Ok(())
}
