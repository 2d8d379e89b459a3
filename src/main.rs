use anyhow::Result;

use game_scorekeeper::cli::Command;
use game_scorekeeper::{
    handle_completions, handle_recompute, handle_serve, handle_setup, handle_standings, interpret,
};

fn main() {
    dotenvy::dotenv().ok();
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
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(*port),
        Command::Setup => handle_setup(),
        Command::Standings { tournament_id } => handle_standings(*tournament_id),
        Command::Recompute { tournament_id } => handle_recompute(*tournament_id),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
