//! Export command - Write the problem's test cases to disk

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use log::info;
use pair_finder::problem::{Problem, TestCaseFile};

/// Write `test_cases.json` into `output` and return its path
pub fn execute(output: &Path) -> Result<PathBuf> {
    let problem = Problem::two_sum();
    println!(
        "{}",
        format!("Exporting test cases for problem {}...", problem.id).cyan()
    );

    std::fs::create_dir_all(output)
        .with_context(|| format!("failed to create {}", output.display()))?;

    let path = output.join(TestCaseFile::FILE_NAME);
    problem.test_case_file().save(&path)?;
    info!("wrote {} test cases to {}", problem.test_cases.len(), path.display());

    println!(
        "{}",
        format!("✓ Test cases written to: {}", path.display()).green()
    );
    println!();
    println!("{}", "To run them:".cyan());
    println!("  pair-finder test --test-file {}", path.display());

    Ok(path)
}
