use anyhow::Result;

use swiss_tournament::cli::{Cli, Command};
use swiss_tournament::config::settings::AppConfig;
use swiss_tournament::{
    handle_completions, handle_count, handle_init, handle_pairings, handle_register, handle_report,
    handle_reset_matches, handle_reset_players, handle_serve, handle_standings, interpret, load_config,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let cli: Cli = interpret();
    let config = load_config(cli.database.as_deref());
    execute_command(&cli.command, config)
}

fn execute_command(command: &Command, config: AppConfig) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(config, *port),
        Command::Init { reset } => handle_init(&config, *reset),
        Command::Register { name } => handle_register(&config, name),
        Command::Report { winner, loser, round } => handle_report(&config, *winner, *loser, *round),
        Command::Count => handle_count(&config),
        Command::Standings => handle_standings(&config),
        Command::Pairings => handle_pairings(&config),
        Command::ResetMatches => handle_reset_matches(&config),
        Command::ResetPlayers => handle_reset_players(&config),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
