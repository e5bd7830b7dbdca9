use clap::Args;
use hotel_app::{
    database,
    domain::hotels::{HotelsManager, HotelsService, data::NewHotel},
};

#[derive(Debug, Args)]
pub(crate) struct CreateHotelArgs {
    /// Hotel display name
    #[arg(long)]
    name: String,

    #[arg(long)]
    location: String,

    /// Star rating from 1 to 5
    #[arg(long)]
    rating: u8,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateHotelArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let hotel = HotelsManager::new(pool)
        .create_hotel(NewHotel {
            name: args.name,
            location: args.location,
            rating: args.rating,
        })
        .await
        .map_err(|error| format!("failed to create hotel: {error}"))?;

    println!("hotel_uuid: {}", hotel.uuid);
    println!("hotel_name: {}", hotel.name);

    Ok(())
}
