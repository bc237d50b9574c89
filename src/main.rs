use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use pair_finder::config::Config;

mod commands;

#[derive(Parser)]
#[command(name = "pair-finder")]
#[command(about = "Find two values that add up to a target, and judge practice test cases")]
#[command(version = "0.1.0")]
struct Cli {
    /// Disable coloured output
    #[arg(long, global = true)]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the indices of two values summing to the target, or []
    Solve {
        /// Target sum
        #[arg(short, long, allow_negative_numbers = true)]
        target: i64,
        /// Values, as separate arguments or a bracketed list like [2,7,11,15]
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Run test cases through the pair finder
    Test {
        /// Test case file (defaults to the built-in cases)
        #[arg(short, long)]
        test_file: Option<PathBuf>,
    },
    /// Show problem details
    Show,
    /// Write the built-in test cases to test_cases.json
    Export {
        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show or reset the saved configuration
    Config {
        /// Print the configuration file path
        #[arg(long, conflicts_with = "reset")]
        path: bool,
        /// Restore default settings
        #[arg(long)]
        reset: bool,
    },
}

fn main() -> Result<()> {
    let env = env_logger::Env::new()
        .filter("PAIR_FINDER_LOG")
        .write_style("PAIR_FINDER_LOG_STYLE");
    env_logger::init_from_env(env);

    let cli = Cli::parse();
    let config = Config::load()?;
    debug!("loaded configuration: {:?}", config);

    if !commands::apply_color_preference(cli.no_color, &config) {
        debug!("coloured output disabled");
    }

    match cli.command {
        Commands::Solve { target, values } => {
            commands::solve::execute(&values, target)?;
        }
        Commands::Test { test_file } => {
            commands::test::execute(&config, test_file)?;
        }
        Commands::Show => {
            commands::show::execute(config.show_explanations)?;
        }
        Commands::Export { output } => {
            let output = output.unwrap_or_else(|| config.get_export_dir());
            commands::export::execute(&output)?;
        }
        Commands::Config { path, reset } => {
            commands::config::execute(&config, path, reset)?;
        }
    }

    Ok(())
}
