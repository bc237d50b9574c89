//! Show command - Display problem details

use anyhow::Result;
use colored::Colorize;
use pair_finder::problem::Problem;

use super::print_problem_header;

/// Show problem details
pub fn execute(show_explanations: bool) -> Result<()> {
    let problem = Problem::two_sum();

    print_problem_header(&problem);
    println!("{}", "─".repeat(80).cyan());
    println!("\n{}\n", problem.description);

    println!("{}", "Examples:".bold());
    for (i, example) in problem.examples.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).cyan(), example.input);
        println!("     {} {}", "Output:".bold(), example.output);
        if show_explanations {
            println!("     {} {}", "Explanation:".italic(), example.explanation);
        }
    }

    Ok(())
}
