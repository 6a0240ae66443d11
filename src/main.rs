use anyhow::Result;

use swiss_pairings::cli::{Cli, Command};
use swiss_pairings::config::AppConfig;
use swiss_pairings::{
    handle_completions, handle_count, handle_delete_matches, handle_delete_players,
    handle_matches, handle_pairings, handle_players, handle_register, handle_report,
    handle_reset, handle_serve, handle_standings, interpret, load_config,
};
use swiss_pairings::swiss::NewMatch;

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = load_config(&cli);
    execute_command(&cli.command, &config)
}

fn execute_command(command: &Command, config: &AppConfig) -> Result<()> {
    match command {
        Command::Register { name } => handle_register(config, name),
        Command::Report {
            winner,
            loser,
            winner_score,
            loser_score,
        } => handle_report(
            config,
            &NewMatch {
                winner: *winner,
                loser: *loser,
                winner_score: *winner_score,
                loser_score: *loser_score,
            },
        ),
        Command::Standings { json } => handle_standings(config, *json),
        Command::Pairings {
            odd_policy,
            avoid_rematches,
            json,
        } => handle_pairings(config, *odd_policy, *avoid_rematches, *json),
        Command::Players { json } => handle_players(config, *json),
        Command::Matches { json } => handle_matches(config, *json),
        Command::Count => handle_count(config),
        Command::DeleteMatches => handle_delete_matches(config),
        Command::DeletePlayers => handle_delete_players(config),
        Command::Reset => handle_reset(config),
        Command::Serve { port } => handle_serve(config, *port),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
