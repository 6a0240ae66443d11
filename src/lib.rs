pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod display;
pub mod errors;
pub mod services;
pub mod swiss;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use serde::Serialize;

use crate::cli::Cli;
use crate::config::settings::AppConfig;
use crate::database::SqliteRepository;
use crate::services::server::ServerService;
use crate::services::TournamentService;
use crate::swiss::{NewMatch, OddPolicy};

pub fn interpret() -> Cli {
    Cli::parse()
}

/// Environment-derived config with command line overrides applied
pub fn load_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::new();
    if let Some(path) = &cli.database {
        config.database.path = path.clone();
    }
    config
}

fn open_service(config: &AppConfig) -> Result<TournamentService<SqliteRepository>> {
    let repository = SqliteRepository::open(&config.database)?;
    Ok(TournamentService::new(repository, config.pairing.clone()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let service = open_service(config)?;
    let id = service.register_player(name)?;
    println!("Registered {name} with id {id}");
    Ok(())
}

pub fn handle_report(config: &AppConfig, new_match: &NewMatch) -> Result<()> {
    let service = open_service(config)?;
    let match_id = service.report_match(new_match)?;
    println!("Recorded match {match_id}");
    Ok(())
}

pub fn handle_standings(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let rows = service.standings()?;
    if json {
        return print_json(&rows);
    }
    display::print_standings(&rows);
    Ok(())
}

pub fn handle_pairings(
    config: &AppConfig,
    odd_policy: Option<OddPolicy>,
    avoid_rematches: Option<bool>,
    json: bool,
) -> Result<()> {
    let service = open_service(config)?;
    let settings = config.pairing.overridden(odd_policy, avoid_rematches);
    let round = service.pairings_with(&settings)?;
    if json {
        return print_json(&round);
    }
    display::print_pairings(&round);
    Ok(())
}

pub fn handle_players(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let players = service.players()?;
    if json {
        return print_json(&players);
    }
    display::print_players(&players);
    Ok(())
}

pub fn handle_matches(config: &AppConfig, json: bool) -> Result<()> {
    let service = open_service(config)?;
    let matches = service.matches()?;
    if json {
        return print_json(&matches);
    }
    display::print_matches(&matches);
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    let service = open_service(config)?;
    println!("{}", service.count_players()?);
    Ok(())
}

pub fn handle_delete_matches(config: &AppConfig) -> Result<()> {
    open_service(config)?.delete_matches()?;
    println!("All matches deleted");
    Ok(())
}

pub fn handle_delete_players(config: &AppConfig) -> Result<()> {
    open_service(config)?
        .delete_players()
        .context("Failed to delete players (delete matches first or use reset)")?;
    println!("All players deleted");
    Ok(())
}

pub fn handle_reset(config: &AppConfig) -> Result<()> {
    open_service(config)?.reset()?;
    println!("Tournament reset");
    Ok(())
}

pub fn handle_serve(config: &AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(port, config.clone());
        service.run().await
    })
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
