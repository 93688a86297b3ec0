//! QR Menu command line
//!
//! Reads product and business payloads captured from the menu backend and prints
//! what a guest would see:
//! - **categories**: the derived taxonomy
//! - **browse**: the menu for a category, sub category and search
//! - **business**: the resolved business header
//! - **config**: resolved paths and display settings

use clap::{Parser, Subcommand};
use qrmenu_logging::{init_logging, LogConfig};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(name = "qrmenu", about = "Browse QR menu product payloads", version)]
struct Cli {
    /// Enable verbose logging (info/debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show the categories derived from a product payload
    Categories {
        /// Product payload ({"urunler": [...]} or a bare array)
        products: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Render the menu for a selection
    Browse {
        /// Product payload ({"urunler": [...]} or a bare array)
        products: PathBuf,

        /// Top category to select (use "Tümü" for everything)
        #[arg(short, long)]
        top: Option<String>,

        /// Sub category of the selected top category
        #[arg(short, long)]
        sub: Option<String>,

        /// Case-insensitive name search
        #[arg(short = 'q', long)]
        search: Option<String>,

        /// Business lookup response to show in the header
        #[arg(long, requires = "short_name")]
        business: Option<PathBuf>,

        /// Short name of the business to resolve
        #[arg(long)]
        short_name: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resolve a business lookup response
    Business {
        /// Business lookup response
        response: PathBuf,

        /// Short name of the business to resolve
        #[arg(long)]
        short_name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show configuration paths and display settings
    Config(cli::config::ConfigArgs),
}

fn command_wants_json(command: &Commands) -> bool {
    match command {
        Commands::Categories { json, .. } => *json,
        Commands::Browse { json, .. } => *json,
        Commands::Business { json, .. } => *json,
        Commands::Config(args) => args.json,
    }
}

fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Categories { products, json } => {
            cli::categories::run(cli::categories::CategoriesArgs { products, json })
        }
        Commands::Browse {
            products,
            top,
            sub,
            search,
            business,
            short_name,
            json,
        } => cli::browse::run(cli::browse::BrowseArgs {
            products,
            top,
            sub,
            search,
            business,
            short_name,
            json,
        }),
        Commands::Business {
            response,
            short_name,
            json,
        } => cli::business::run(cli::business::BusinessArgs {
            response,
            short_name,
            json,
        }),
        Commands::Config(args) => cli::config::run(args),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let json_mode = command_wants_json(&cli.command);

    if let Err(err) = init_logging(LogConfig {
        app_name: "qrmenu",
        verbose: cli.verbose,
    }) {
        eprintln!("Warning: logging disabled: {:#}", err);
    }

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if json_mode {
                cli::error::print_json_error(&err);
            } else {
                eprintln!("{:?}", err);
            }
            ExitCode::from(1)
        }
    }
}
