use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::swiss::{OddPolicy, PlayerId};

#[derive(Parser, Debug)]
#[command(author, version, about = "Swiss-system tournament standings and pairings")]
pub struct Cli {
    /// SQLite database file (defaults to $DATABASE_PATH or swiss_pairings.db)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "kebab-case")]
pub enum Command {
    /// Register a new player
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },
    /// Record the outcome of a match
    Report {
        /// Id of the player who won
        winner: PlayerId,
        /// Id of the player who lost
        loser: PlayerId,
        #[arg(long)]
        winner_score: Option<i64>,
        #[arg(long)]
        loser_score: Option<i64>,
    },
    /// Show players ranked by wins
    Standings {
        #[arg(long)]
        json: bool,
    },
    /// Compute pairings for the next round
    Pairings {
        /// What to do with the last player when the field is odd
        #[arg(long, value_enum)]
        odd_policy: Option<OddPolicy>,
        /// Prefer opponents who have not met yet (`--avoid-rematches=false`
        /// turns it off when the environment enables it)
        #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
        avoid_rematches: Option<bool>,
        #[arg(long)]
        json: bool,
    },
    /// List registered players
    Players {
        #[arg(long)]
        json: bool,
    },
    /// List recorded matches
    Matches {
        #[arg(long)]
        json: bool,
    },
    /// Print the number of registered players
    Count,
    /// Remove all match records
    DeleteMatches,
    /// Remove all players (fails while matches reference them)
    DeletePlayers,
    /// Remove all matches and players
    Reset,
    /// Start the HTTP API server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Print shell completions
    Completions {
        shell: Shell,
    },
}
