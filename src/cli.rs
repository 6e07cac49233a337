use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::config::settings::DEFAULT_PORT;
use crate::swiss::PlayerId;

#[derive(Parser, Debug)]
#[command(author, version, about = "swiss-tournament tracker")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or tournament.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
    /// Create the database schema if it does not exist yet
    Init {
        /// Drop all players and matches and recreate the schema
        #[arg(long)]
        reset: bool,
    },
    /// Register a new player
    Register {
        /// Display name, need not be unique
        name: String,
    },
    /// Record the result of a match
    Report {
        /// Id of the winning player
        winner: PlayerId,
        /// Id of the losing player
        loser: PlayerId,
        /// Round the match was played in
        #[arg(short, long)]
        round: Option<i32>,
    },
    /// Print the number of registered players
    Count,
    /// Print current standings
    Standings,
    /// Print pairings for the next round
    Pairings,
    /// Delete every match result, keeping players
    ResetMatches,
    /// Delete every player and match result
    ResetPlayers,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
