//! Test command - Judge the pair finder against test cases

use std::path::PathBuf;

use anyhow::{bail, Result};
use colored::Colorize;
use log::info;
use pair_finder::{config::Config, problem::Problem, test_runner::TestRunner};

use super::print_problem_header;

/// Run the built-in test cases, or the ones in `test_file` when given
pub fn execute(config: &Config, test_file: Option<PathBuf>) -> Result<()> {
    let problem = Problem::two_sum();

    let runner = match config.test_file(test_file) {
        Some(path) => {
            println!(
                "{}",
                format!("Running test cases from {}...", path.display()).cyan()
            );
            TestRunner::from_file(&path)?
        }
        None => {
            print_problem_header(&problem);
            println!("{}", "Running built-in test cases...".cyan());
            TestRunner::new(problem.test_cases.clone())
        }
    };

    info!("judging {} test cases", runner.cases().len());
    let report = runner.run();
    report.print(config.show_explanations);
    info!(
        "{} of {} test cases passed",
        report.passed_count(),
        report.total()
    );

    if !report.all_passed() {
        bail!(
            "{} of {} test cases failed",
            report.total() - report.passed_count(),
            report.total()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use pair_finder::problem::{TestCase, TestCaseFile};

    fn quiet_config() -> Config {
        Config {
            show_explanations: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_builtin_cases() {
        assert!(execute(&quiet_config(), None).is_ok());
    }

    #[test]
    fn test_failing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cases.json");
        TestCaseFile {
            problem_id: "1".to_string(),
            problem_title: "Two Sum".to_string(),
            test_cases: vec![
                TestCase::new("[1,2], 3", "[0,1]"),
                TestCase::new("[1,2], 4", "[0,1]"),
            ],
        }
        .save(&path)
        .unwrap();

        let err = execute(&quiet_config(), Some(path)).unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 test cases failed");
    }

    #[test]
    fn test_configured_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cases.json");
        fs::write(
            &path,
            r#"{"problem_id":"1","problem_title":"Two Sum","test_cases":[]}"#,
        )
        .unwrap();

        let config = Config {
            default_test_file: Some(path),
            ..quiet_config()
        };
        assert!(execute(&config, None).is_ok());
    }
}
