use std::path::Path;

use colored::*;
use log::{debug, info};
use serde_json::Value;

use crate::{
    error::JudgeError,
    pair::find_pair,
    problem::{format_pair, parse_input, TestCase, TestCaseFile},
};

/// Outcome of running one test case through the pair finder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    pub input: String,
    pub expected: String,
    pub explanation: Option<String>,
    pub actual: Option<String>,
    pub error: Option<String>,
    pub passed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct TestReport {
    pub results: Vec<CaseResult>,
}

impl TestReport {
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn print(&self, show_explanations: bool) {
        for (i, result) in self.results.iter().enumerate() {
            let status = if result.passed {
                "✓ PASS".green().bold()
            } else {
                "✗ FAIL".red().bold()
            };
            println!("\n{} {} {}", "Test Case".bold(), format!("#{}", i + 1).cyan(), status);
            println!("  {} {}", "Input:".bold(), result.input);
            println!("  {} {}", "Expected:".bold(), result.expected);
            if let Some(ref actual) = result.actual {
                println!("  {} {}", "Output:".bold(), actual);
            }
            if let Some(ref error) = result.error {
                println!("  {} {}", "Error:".bold(), error.red());
            }
            if show_explanations {
                if let Some(ref explanation) = result.explanation {
                    println!("  {} {}", "Explanation:".italic(), explanation);
                }
            }
        }

        println!("\n{}", "-".repeat(60));
        let summary = format!("{}/{} test cases passed", self.passed_count(), self.total());
        if self.all_passed() {
            println!("{}", format!("✓ {summary}").green().bold());
        } else {
            println!("{}", format!("✗ {summary}").red().bold());
        }
    }
}

pub struct TestRunner {
    cases: Vec<TestCase>,
}

impl TestRunner {
    pub fn new(cases: Vec<TestCase>) -> Self {
        Self { cases }
    }

    pub fn from_file(path: &Path) -> Result<Self, JudgeError> {
        let file = TestCaseFile::load(path)?;
        info!(
            "loaded {} test cases for problem {} from {}",
            file.test_cases.len(),
            file.problem_id,
            path.display()
        );
        Ok(Self::new(file.test_cases))
    }

    pub fn cases(&self) -> &[TestCase] {
        &self.cases
    }

    pub fn run(&self) -> TestReport {
        let results = self.cases.iter().map(Self::run_case).collect();
        TestReport { results }
    }

    fn run_case(case: &TestCase) -> CaseResult {
        let mut result = CaseResult {
            input: case.input.clone(),
            expected: case.expected.clone(),
            explanation: case.explanation.clone(),
            actual: None,
            error: None,
            passed: false,
        };

        let (values, target) = match parse_input(&case.input) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("rejected test input `{}`: {e}", case.input);
                result.error = Some(e.to_string());
                return result;
            }
        };

        let actual = format_pair(find_pair(&values, target));
        let expected = match serde_json::from_str::<Value>(&case.expected.replace('\'', "\"")) {
            Ok(expected) => expected,
            Err(e) => {
                result.error = Some(format!("expected output is not valid JSON: {e}"));
                result.actual = Some(actual);
                return result;
            }
        };

        result.passed = serde_json::from_str::<Value>(&actual).is_ok_and(|a| a == expected);
        debug!(
            "case `{}`: expected {}, got {}, passed={}",
            case.input, case.expected, actual, result.passed
        );
        result.actual = Some(actual);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::problem::Problem;

    #[test]
    fn test_builtin_cases_pass() {
        let runner = TestRunner::new(Problem::two_sum().test_cases);
        let report = runner.run();
        assert!(report.all_passed());
        assert_eq!(report.passed_count(), 3);
        assert_eq!(report.total(), 3);
        assert_eq!(report.results[1].actual.as_deref(), Some("[1,2]"));
    }

    #[test]
    fn test_structural_comparison() {
        let runner = TestRunner::new(vec![
            TestCase::new("[2,7,11,15], 9", "[0, 1]"),
            TestCase::new("[1,2,3], 100", "[]"),
            TestCase::new("[], 5", " [ ] "),
        ]);
        assert!(runner.run().all_passed());
    }

    #[test]
    fn test_wrong_answer_is_reported() {
        let runner = TestRunner::new(vec![TestCase::new("[3,2,4], 6", "[0,2]")]);
        let report = runner.run();
        assert!(!report.all_passed());
        let result = &report.results[0];
        assert_eq!(result.actual.as_deref(), Some("[1,2]"));
        assert!(result.error.is_none());
    }

    #[test]
    fn test_bad_cases_do_not_stop_the_run() {
        let runner = TestRunner::new(vec![
            TestCase::new("[1,x], 3", "[0,1]"),
            TestCase::new("[1,2], 3", "not json"),
            TestCase::new("[1,2], 3", "[0,1]"),
        ]);
        let report = runner.run();

        assert_eq!(report.total(), 3);
        assert_eq!(report.passed_count(), 1);
        assert!(report.results[0].actual.is_none());
        assert!(report.results[0].error.as_deref().unwrap().contains("x"));
        assert_eq!(report.results[1].actual.as_deref(), Some("[0,1]"));
        assert!(report.results[1].error.is_some());
        assert!(report.results[2].passed);
    }

    #[test]
    fn test_single_quoted_expected_output() {
        let runner = TestRunner::new(vec![TestCase::new("[1,2], 3", "[0,1]")]);
        assert!(runner.run().all_passed());

        let runner = TestRunner::new(vec![TestCase::new("[1,2], 3", "'[0,1]'")]);
        let report = runner.run();
        // A quoted string is a JSON string, not a list.
        assert!(!report.all_passed());
    }

    #[test]
    fn test_explanation_carried_on_result() {
        let mut explained = TestCase::new("[1,4], 5", "[0,1]");
        explained.explanation = Some("1 + 4 == 5".to_string());
        let runner = TestRunner::new(vec![explained, TestCase::new("[1,x], 5", "[0,1]")]);

        let report = runner.run();
        assert_eq!(report.results[0].explanation.as_deref(), Some("1 + 4 == 5"));
        assert!(report.results[1].explanation.is_none());
        assert!(report.results[1].error.is_some());
    }

    #[test]
    fn test_empty_case_list_passes() {
        let report = TestRunner::new(vec![]).run();
        assert!(report.all_passed());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_runner_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test_cases.json");
        fs::write(
            &path,
            r#"{"problem_id":"1","problem_title":"Two Sum","test_cases":[
                {"input":"[0,4,3,0], 0","expected":"[0,3]"},
                {"input":"[-3,4,3,90], 0","expected":"[0,2]"}
            ]}"#,
        )
        .unwrap();

        let runner = TestRunner::from_file(&path).unwrap();
        assert_eq!(runner.cases().len(), 2);
        assert!(runner.run().all_passed());
    }
}
