//! Lincoln Hotels TUI - Main entry point

mod app;
mod booking;
mod catalog;
mod cli;
mod error;
mod forms;
mod request_file;
mod theme;
mod types;
mod ui;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use log::{debug, error, info};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::PathBuf;

use crate::cli::{Cli, Commands};
use crate::request_file::BookingRequest;

/// Initialize the logger with appropriate settings
fn init_logger() {
    use env_logger::Builder;
    use std::io::Write;

    Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env() // Allows RUST_LOG env var to override
        .init();
}

/// Main application entry point
fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();
    info!("Lincoln Hotels TUI starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { request }) => {
            info!("Validating booking request file: {:?}", request);
            match BookingRequest::load_from_file(&request) {
                Ok(booking) => match booking.validate() {
                    Ok(_) => {
                        println!("✓ Booking request is valid: {:?}", request);
                        println!(
                            "  {} → {}, {} night(s), total ${:.2}",
                            booking.check_in, booking.check_out, booking.nights, booking.total
                        );
                        Ok(())
                    }
                    Err(e) => {
                        error!("Booking request validation failed: {:#}", e);
                        eprintln!("✗ Booking request is invalid: {:#}", e);
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("Failed to load booking request: {:#}", e);
                    eprintln!("✗ Failed to load booking request: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::Rates) => {
            print_rates();
            Ok(())
        }
        Some(Commands::Book { save_request }) => run_tui(save_request),
        None => run_tui(None),
    }
}

/// Print the rate card to stdout.
fn print_rates() {
    println!("Lincoln Hotels — Rooms & Suites");
    for room in catalog::rooms() {
        println!(
            "  {:<22} ${:>4}/night  {}",
            room.name, room.rate, room.capacity_label
        );
    }
    println!();
    println!("Chauffeur Fleet");
    for vehicle in catalog::vehicles() {
        println!(
            "  {:<22} ${:>4}/hour   {}",
            vehicle.name, vehicle.rate, vehicle.capacity_label
        );
    }
}

/// Set up the terminal, run the TUI, and restore the terminal afterwards.
fn run_tui(save_request: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, terminal::EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(out);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = app::App::new(save_request);
    let result = app.run(&mut terminal);

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e.into());
    }

    info!("Lincoln Hotels TUI shut down cleanly");
    Ok(())
}
