//! AdBoard - Terminal dashboard for PPC ad copy and UGC video scripts
//!
//! This application displays a sample catalogue of generated advertising
//! content for a fictitious home-goods brand, with a status board for review
//! workflows and a setup wizard that simulates connecting a store.

use anyhow::Result;
use clap::{Parser, Subcommand};

use adboard::app;
use adboard::cli::{ExportArgs, SummaryArgs};
use adboard::config::Config;
use adboard::constants::{APP_BINARY_NAME, APP_NAME};

/// AdBoard - Terminal dashboard for ad copy and UGC scripts
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Run the setup wizard before opening the dashboard
    #[arg(short, long)]
    init: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Export the sample catalogue to CSV or JSON files
    Export(ExportArgs),
    /// Print catalogue statistics
    Summary(SummaryArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Headless commands never touch the terminal UI.
    match &cli.command {
        Some(Commands::Export(args)) => return args.execute(),
        Some(Commands::Summary(args)) => return args.execute(),
        None => {}
    }

    println!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION"));
    println!();

    if cli.init {
        // Explicit setup request
        return app::run(Config::load().unwrap_or_default(), true);
    }

    if !Config::exists() {
        // First run - walk through setup before showing the dashboard
        println!(
            "Welcome! It looks like this is your first time running {}.",
            APP_NAME
        );
        println!();
        println!("Starting the setup wizard...");
        println!();
        return app::run(Config::default(), true);
    }

    match Config::load() {
        Ok(config) => app::run(config, false),
        Err(e) => {
            eprintln!("Warning: Failed to load config: {e}");
            eprintln!();
            eprintln!("Run `{} --init` to create a new configuration.", APP_BINARY_NAME);
            app::run(Config::default(), true)
        }
    }
}
