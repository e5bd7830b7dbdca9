use clap::Args;
use hotel_app::{
    database,
    domain::{
        hotels::records::HotelUuid,
        rooms::{RoomsManager, RoomsService, data::NewRoom},
    },
};
use uuid::Uuid;

#[derive(Debug, Args)]
pub(crate) struct CreateRoomArgs {
    /// Hotel the room belongs to
    #[arg(long)]
    hotel_uuid: Uuid,

    /// Room category, e.g. `small`, `normal` or `kingsize`
    #[arg(long)]
    size: String,

    /// Nightly price in minor currency units
    #[arg(long)]
    price: u64,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

pub(crate) async fn run(args: CreateRoomArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let room = RoomsManager::new(pool)
        .create_room(NewRoom {
            hotel_uuid: HotelUuid::from_uuid(args.hotel_uuid),
            size: args.size,
            price: args.price,
        })
        .await
        .map_err(|error| format!("failed to create room: {error}"))?;

    println!("room_uuid: {}", room.uuid);
    println!("hotel_uuid: {}", room.hotel_uuid);

    Ok(())
}
