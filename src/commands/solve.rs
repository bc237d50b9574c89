//! Solve command - Find the pair of indices for the given values

use anyhow::{Context, Result};
use colored::Colorize;
use log::debug;
use pair_finder::{find_pair, problem::format_pair, problem::parse_values};

/// Parse the values from the command line and print the answer.
pub fn execute(values: &[String], target: i64) -> Result<()> {
    let values = collect_values(values)?;
    debug!("solving for target {target} over {} values", values.len());

    match find_pair(&values, target) {
        Some((i, j)) => {
            println!("{}", format_pair(Some((i, j))));
            debug!("values[{i}] = {}, values[{j}] = {}", values[i], values[j]);
        }
        None => {
            println!("{}", format_pair(None));
            eprintln!("{}", format!("No two values sum to {target}.").yellow());
        }
    }

    Ok(())
}

/// Values may arrive as separate arguments, a comma list, or one bracketed list.
fn collect_values(args: &[String]) -> Result<Vec<i64>> {
    let joined = args.join(" ");
    parse_values(&joined).with_context(|| format!("invalid value list `{joined}`"))
}
