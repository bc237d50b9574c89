//! Command modules for pair-finder
//!
//! Each submodule handles a specific CLI subcommand.

pub mod config;
pub mod export;
pub mod show;
pub mod solve;
pub mod test;

use colored::{ColoredString, Colorize};
use pair_finder::{
    config::Config,
    problem::{DifficultyLevel, Problem},
};

/// Turn colour off when `--no-color` is given or the config disables it.
/// Returns whether coloured output stays enabled.
pub fn apply_color_preference(no_color: bool, config: &Config) -> bool {
    let enabled = !no_color && config.color_output;
    if !enabled {
        colored::control::set_override(false);
    }
    enabled
}

pub fn difficulty_label(level: DifficultyLevel) -> ColoredString {
    let name = level.to_string();
    match level {
        DifficultyLevel::Easy => name.green(),
        DifficultyLevel::Medium => name.yellow(),
        DifficultyLevel::Hard => name.red(),
    }
}

/// Print the problem banner shared by `show` and `test`
pub fn print_problem_header(problem: &Problem) {
    println!("\n{}", "═".repeat(80).cyan());
    println!(
        "{} {}. {}",
        "Problem".bold(),
        problem.id,
        problem.title.bold()
    );
    println!("{}", "═".repeat(80).cyan());
    println!(
        "{} {}",
        "Difficulty:".bold(),
        difficulty_label(problem.difficulty)
    );
    println!(
        "{} https://leetcode.com/problems/{}",
        "Link:".bold(),
        problem.title_slug()
    );
}
