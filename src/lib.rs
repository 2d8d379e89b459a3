pub mod api;
pub mod cli;
pub mod config;
pub mod database;
pub mod domain;
pub mod errors;
pub mod registration;
pub mod schedule;
pub mod services;
pub mod standings;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;
use colored::Colorize;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::services::server::ServerService;
use crate::standings::Standing;

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_serve(port: u16) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let config = AppConfig::from_env();
        let service = ServerService::new(port, config);
        service.run().await
    })
}

pub fn handle_setup() -> Result<()> {
    let config = AppConfig::from_env();
    let conn = open_connection(&config)?;
    database::setup::provision(&conn)?;
    log::info!("Database schema ready at {}", config.database.path);
    Ok(())
}

pub fn handle_standings(tournament_id: i64) -> Result<()> {
    let config = AppConfig::from_env();
    let conn = open_connection(&config)?;
    let tournament = services::tournaments::find_tournament(&conn, tournament_id)?;
    let table = services::standings_for(&conn, tournament_id)?;

    println!(
        "{} ({})",
        tournament.name.bold(),
        tournament.scoring.to_string().dimmed()
    );
    print_table(&table);
    Ok(())
}

pub fn handle_recompute(tournament_id: i64) -> Result<()> {
    let config = AppConfig::from_env();
    let mut conn = open_connection(&config)?;
    let totals = services::recompute_tournament(&mut conn, tournament_id)?;
    println!(
        "{} {} competitor total(s) for tournament {}",
        "Recomputed".green(),
        totals.len(),
        tournament_id
    );
    print_table(&services::standings_for(&conn, tournament_id)?);
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn open_connection(config: &AppConfig) -> Result<database::DbConn> {
    let pool = database::create_pool(&config.database)?;
    database::get_connection(&pool)
}

fn print_table(table: &[Standing]) {
    println!(
        "{}",
        format!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>5} {:>4}",
            "#", "Competitor", "P", "W", "D", "L", "+/-", "Pts"
        )
        .bold()
    );
    for standing in table {
        let line = &standing.line;
        let row = format!(
            "{:>3}  {:<24} {:>3} {:>3} {:>3} {:>3} {:>5} {:>4}",
            standing.position,
            standing.name,
            line.played,
            line.won,
            line.drawn,
            line.lost,
            line.score_difference(),
            standing.points
        );
        if standing.position == 1 && line.played > 0 {
            println!("{}", row.yellow());
        } else {
            println!("{row}");
        }
    }
}
