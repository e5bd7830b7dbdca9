use clap::{Args, Subcommand};

mod create;

#[derive(Debug, Args)]
pub(crate) struct HotelCommand {
    #[command(subcommand)]
    command: HotelSubcommand,
}

#[derive(Debug, Subcommand)]
enum HotelSubcommand {
    Create(create::CreateHotelArgs),
}

pub(crate) async fn run(command: HotelCommand) -> Result<(), String> {
    match command.command {
        HotelSubcommand::Create(args) => create::run(args).await,
    }
}
