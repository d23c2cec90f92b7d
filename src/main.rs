use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};

use wayfinder::StartScreen;
use wayfinder::cli::{self, OutputFormat, PlacesQuery};
use wayfinder::core::config::{
    CliOverrides, ResolvedConfig, WayfinderConfig, load_config, resolve,
};
use wayfinder::core::log_file::open_append;
use wayfinder::core::state::App;
use wayfinder::directory::Directory;
use wayfinder::tui;

#[derive(Parser)]
#[command(name = "wayfinder", version, about = "Airport place directory and walking directions")]
struct Args {
    /// Screen the terminal UI opens on
    #[arg(long = "start", value_enum)]
    start: Option<StartScreen>,

    /// Write logs here instead of ~/.wayfinder/logs.txt
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List places, optionally filtered
    Places {
        /// Case-insensitive text matched against name, type and description
        #[arg(short, long, default_value = "")]
        query: String,
        /// Category slug or name, e.g. "gate" or "Lounges"
        #[arg(short, long)]
        category: Option<String>,
        /// Place type label, e.g. "Help Desk"
        #[arg(short = 't', long = "type", conflicts_with = "category")]
        place_type: Option<String>,
        /// Nearest first
        #[arg(short, long)]
        sort: bool,
        #[arg(long)]
        json: bool,
    },
    /// Directions to one place
    Route {
        id: u32,
        #[arg(long)]
        json: bool,
    },
    /// List place categories
    Categories {
        #[arg(long)]
        json: bool,
    },
}

fn init_logger(config: &ResolvedConfig) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    match open_append(&config.log_file) {
        Ok(file) => {
            let _ = WriteLogger::init(config.log_level, log_config, file);
        }
        Err(e) => eprintln!(
            "Warning: cannot open log file {}: {}",
            config.log_file.display(),
            e
        ),
    }
}

fn run_command(command: Command, config: &ResolvedConfig) -> Result<String, cli::CliError> {
    let directory = Directory::builtin();
    match command {
        Command::Places {
            query,
            category,
            place_type,
            sort,
            json,
        } => {
            log::info!("CLI places query={:?} category={:?} type={:?}", query, category, place_type);
            let query = PlacesQuery {
                query: &query,
                category: category.as_deref(),
                place_type: place_type.as_deref(),
                sort: sort || config.sort_by_distance,
            };
            cli::places_report(&directory, &query, OutputFormat::from_json_flag(json))
        }
        Command::Route { id, json } => {
            log::info!("CLI route to place {}", id);
            cli::route_report(&directory, id, OutputFormat::from_json_flag(json))
        }
        Command::Categories { json } => {
            cli::categories_report(&directory, OutputFormat::from_json_flag(json))
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let loaded = load_config();
    let fallback = WayfinderConfig::default();
    let file_config = match &loaded {
        Ok((config, _)) => config,
        Err(e) => {
            eprintln!("Warning: {e}; using defaults");
            &fallback
        }
    };
    let overrides = CliOverrides {
        start_screen: args.start,
        log_file: args.log_file,
    };
    let config = resolve(file_config, &overrides);

    init_logger(&config);
    match &loaded {
        Ok((_, source)) => source.log(),
        Err(e) => log::warn!("{}; using defaults", e),
    }
    log::info!(
        "Wayfinder starting (start screen {:?}, log level {})",
        config.start_screen,
        config.log_level
    );

    let Some(command) = args.command else {
        return tui::run(App::from_config(&config));
    };
    match run_command(command, &config) {
        Ok(output) => {
            print!("{output}");
            Ok(())
        }
        Err(e) => {
            log::warn!("CLI command failed: {}", e);
            eprintln!("{e}");
            process::exit(e.exit_code());
        }
    }
}
