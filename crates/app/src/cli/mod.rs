use clap::{Parser, Subcommand};

mod db;
mod hotel;
mod room;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "hotel-app", about = "Hotel reservation administration CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    User(user::UserCommand),
    Hotel(hotel::HotelCommand),
    Room(room::RoomCommand),
    Token(token::TokenCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::User(command) => user::run(command).await,
            Commands::Hotel(command) => hotel::run(command).await,
            Commands::Room(command) => room::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}
