mod commands;
mod terminal;

use commands::{CommandLine, Commands, interfaces, names};
use tally_common::config::Config;
use terminal::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; flags and the real environment still apply.
    let _ = dotenvy::dotenv();

    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let mut cfg = Config {
        database_url: commands.database_url.unwrap_or_default(),
        max_connections: commands.max_connections,
        wireless_only: false,
    };

    match commands.command {
        Commands::Names { unique } => names::names(&cfg, unique).await,
        Commands::Interfaces { addresses, wireless, vendor } => {
            cfg.wireless_only = wireless;
            interfaces::interfaces(&cfg, addresses, vendor)
        }
    }
}
