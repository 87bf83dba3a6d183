use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::{ debug, info };

use tally::TallyConfig;

mod cli;
use cli::{ Commands, TallyCli };

fn main() -> ExitCode {
    // Parse the command line arguments
    let cli = TallyCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            cli::ui::print_error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &TallyCli) -> Result<()> {
    let output_format = cli::parse_output_format(&cli.output_format)?;
    let config = TallyConfig::load(cli.config.as_deref())?;
    debug!("Using {} configured people", config.people.len());

    // Handle commands
    match &cli.command {
        None => cli::commands::sample::execute(&config, output_format)?,

        Some(Commands::Count { property, values }) => {
            cli::commands::count::execute(&config, property, values, output_format)?;
        }

        Some(Commands::List) => cli::commands::list::execute(),
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Warn,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
