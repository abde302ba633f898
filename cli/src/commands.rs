pub mod interfaces;
pub mod names;

use clap::{ArgAction, Parser, Subcommand};
use tally_common::config::DEFAULT_MAX_CONNECTIONS;

#[derive(Parser)]
#[command(name = "tally")]
#[command(about = "Lists user names and local network interfaces.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Connection string for the users database
    #[arg(long, global = true, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections
    #[arg(long, global = true, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the names stored in the users table
    #[command(alias = "n")]
    Names {
        /// Only print each name once
        #[arg(long)]
        unique: bool,
    },
    /// Print the network interfaces of this device
    #[command(alias = "i")]
    Interfaces {
        /// Print hardware addresses instead of names
        #[arg(long)]
        addresses: bool,
        /// Only list wireless interfaces
        #[arg(long)]
        wireless: bool,
        /// Resolve the vendor of each hardware address
        #[arg(long, requires = "addresses")]
        vendor: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
