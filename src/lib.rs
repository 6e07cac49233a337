pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod output;
pub mod services;
pub mod swiss;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use log::info;

use crate::config::settings::AppConfig;
use crate::database::SqliteRepository;
use crate::services::server::ServerService;
use crate::services::tournament::TournamentService;
use crate::swiss::PlayerId;

pub fn interpret() -> Cli {
    Cli::parse()
}

pub fn load_config(database: Option<&str>) -> AppConfig {
    let mut config = AppConfig::from_env();
    if let Some(path) = database {
        config.database.path = path.to_string();
    }
    config
}

fn open_service(config: &AppConfig) -> Result<TournamentService<SqliteRepository>> {
    let repository = SqliteRepository::open(&config.database.path)?;
    Ok(TournamentService::new(repository, config.pairing.clone()))
}

pub fn handle_serve(config: AppConfig, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let service = ServerService::new(config.with_port(port));
        service.run().await
    })
}

pub fn handle_init(config: &AppConfig, reset: bool) -> Result<()> {
    let repository = SqliteRepository::open(&config.database.path)?;
    if reset {
        repository.reset_schema()?;
        println!("Database reset at {}", config.database.path);
    }
    info!("Database ready at {}", config.database.path);
    Ok(())
}

pub fn handle_register(config: &AppConfig, name: &str) -> Result<()> {
    let player = open_service(config)?.register_player(name)?;
    println!("Registered {} with id {}", player.name, player.id);
    Ok(())
}

pub fn handle_report(config: &AppConfig, winner: PlayerId, loser: PlayerId, round: Option<i32>) -> Result<()> {
    let recorded = open_service(config)?.report_match_in_round(winner, loser, round)?;
    println!("Recorded match {}: {} beat {}", recorded.id, recorded.winner_id, recorded.loser_id);
    Ok(())
}

pub fn handle_count(config: &AppConfig) -> Result<()> {
    println!("{}", open_service(config)?.count_players()?);
    Ok(())
}

pub fn handle_standings(config: &AppConfig) -> Result<()> {
    let standings = open_service(config)?.standings()?;
    output::print_standings(&standings);
    Ok(())
}

pub fn handle_pairings(config: &AppConfig) -> Result<()> {
    let pairings = open_service(config)?.swiss_pairings()?;
    output::print_pairings(&pairings);
    Ok(())
}

pub fn handle_reset_matches(config: &AppConfig) -> Result<()> {
    open_service(config)?.reset_matches()?;
    println!("All matches deleted");
    Ok(())
}

pub fn handle_reset_players(config: &AppConfig) -> Result<()> {
    open_service(config)?.reset_players()?;
    println!("All players and matches deleted");
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}
