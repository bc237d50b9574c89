//! Config command - Inspect or reset the saved configuration

use anyhow::Result;
use colored::Colorize;
use pair_finder::config::{get_config_path, reset_config, Config};

pub fn execute(config: &Config, path: bool, reset: bool) -> Result<()> {
    if path {
        println!("{}", get_config_path()?.display());
        return Ok(());
    }

    let config = if reset {
        let config = reset_config()?;
        println!("{}", "✓ Configuration reset to defaults.".green());
        config
    } else {
        config.clone()
    };

    println!("{} {}", "color_output:".bold(), config.color_output);
    println!("{} {}", "show_explanations:".bold(), config.show_explanations);
    println!(
        "{} {}",
        "default_test_file:".bold(),
        display_path(config.default_test_file.as_deref())
    );
    println!(
        "{} {}",
        "export_dir:".bold(),
        display_path(config.export_dir.as_deref())
    );

    Ok(())
}

fn display_path(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not set)".to_string())
}
