mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "grating", about = "Diffraction grating spectrum extraction tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Locate the zero-order aperture in a capture
    Locate(commands::locate::LocateArgs),
    /// Extract, normalize and export the spectrum of a capture
    Scan(commands::scan::ScanArgs),
    /// Print or save the default pipeline config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Locate(args) => commands::locate::run(args),
        Commands::Scan(args) => commands::scan::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
