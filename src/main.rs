use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use registrar::cli::run_menu;
use registrar::config::Settings;
use registrar::display::format_history;
use registrar::logging;
use registrar::registry::Registry;

#[derive(Parser)]
#[command(
    name = "registrar",
    version,
    about = "Course registration, enrollment and tuition tracking",
    long_about = "Registrar is a menu-driven tool for managing course offerings, \
                  student registrations, enrollments and tuition payments. \
                  All data is kept in memory and is lost when the program exits."
)]
struct Cli {
    /// Settings file (JSON)
    #[arg(short, long, env = "REGISTRAR_CONFIG")]
    config: Option<PathBuf>,

    /// Currency symbol used when printing amounts
    #[arg(long)]
    currency: Option<String>,

    /// Minimum payment as a percentage of the outstanding balance
    #[arg(
        long,
        env = "REGISTRAR_MIN_PAYMENT_PERCENT",
        value_parser = clap::value_parser!(u32).range(0..=100)
    )]
    min_payment_percent: Option<u32>,

    /// Read menu input from a file instead of the terminal
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Print the audit history when the menu exits
    #[arg(long)]
    history: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let settings = Settings::load_or_default(cli.config.as_deref())?
        .with_overrides(cli.currency, cli.min_payment_percent)?;
    let mut registry = Registry::from_settings(&settings);

    let stdout = io::stdout().lock();
    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open script {}", path.display()))?;
            run_menu(&mut registry, &settings, BufReader::new(file), stdout)?;
        }
        None => run_menu(&mut registry, &settings, io::stdin().lock(), stdout)?,
    }

    if cli.history {
        print!("{}", format_history(registry.history()));
    }

    Ok(())
}
