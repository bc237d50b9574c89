use std::{fmt, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::error::{JudgeError, ParseError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub input: String,
    pub output: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TestCase {
    pub input: String,
    pub expected: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl TestCase {
    pub fn new(input: &str, expected: &str) -> Self {
        Self {
            input: input.to_string(),
            expected: expected.to_string(),
            explanation: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Problem {
    pub id: u32,
    pub title: String,
    pub difficulty: DifficultyLevel,
    pub description: String,
    pub examples: Vec<Example>,
    pub test_cases: Vec<TestCase>,
}

impl Problem {
    /// The built-in Two Sum problem with its judged test cases.
    pub fn two_sum() -> Self {
        Self {
            id: 1,
            title: "Two Sum".to_string(),
            difficulty: DifficultyLevel::Easy,
            description: "Given an array of integers nums and an integer target, \
                          return indices of the two numbers such that they add up to target."
                .to_string(),
            examples: vec![
                Example {
                    input: "nums = [2,7,11,15], target = 9".to_string(),
                    output: "[0,1]".to_string(),
                    explanation: "Because nums[0] + nums[1] == 9, we return [0, 1].".to_string(),
                },
                Example {
                    input: "nums = [3,2,4], target = 6".to_string(),
                    output: "[1,2]".to_string(),
                    explanation: "Because nums[1] + nums[2] == 6, we return [1, 2].".to_string(),
                },
            ],
            test_cases: vec![
                TestCase::new("[2,7,11,15], 9", "[0,1]"),
                TestCase::new("[3,2,4], 6", "[1,2]"),
                TestCase::new("[3,3], 6", "[0,1]"),
            ],
        }
    }

    pub fn title_slug(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }

    pub fn test_case_file(&self) -> TestCaseFile {
        TestCaseFile {
            problem_id: self.id.to_string(),
            problem_title: self.title.clone(),
            test_cases: self.test_cases.clone(),
        }
    }
}

/// On-disk test case collection, `test_cases.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseFile {
    pub problem_id: String,
    pub problem_title: String,
    pub test_cases: Vec<TestCase>,
}

impl TestCaseFile {
    pub const FILE_NAME: &'static str = "test_cases.json";

    pub fn load(path: &Path) -> Result<Self, JudgeError> {
        let content = fs::read_to_string(path).map_err(|source| JudgeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| JudgeError::Format {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), JudgeError> {
        let json = serde_json::to_string_pretty(self).map_err(|source| JudgeError::Serialize {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(|source| JudgeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Parse a list of integers, with or without surrounding brackets.
/// Commas and whitespace both separate values.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = text.trim();
    let inner = match (trimmed.strip_prefix('['), trimmed.ends_with(']')) {
        (Some(rest), true) => &rest[..rest.len() - 1],
        (None, false) => trimmed,
        _ => return Err(ParseError::MissingBrackets(trimmed.to_string())),
    };

    inner
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_integer)
        .collect()
}

/// Parse a test case input of the form `[2,7,11,15], 9`.
pub fn parse_input(text: &str) -> Result<(Vec<i64>, i64), ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    if !trimmed.starts_with('[') {
        return Err(ParseError::MissingBrackets(trimmed.to_string()));
    }
    let close = trimmed
        .rfind(']')
        .ok_or_else(|| ParseError::MissingBrackets(trimmed.to_string()))?;

    let (list, rest) = trimmed.split_at(close + 1);
    let target = rest
        .trim_start()
        .strip_prefix(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| ParseError::MissingTarget(trimmed.to_string()))?;

    Ok((parse_values(list)?, parse_integer(target)?))
}

/// Render a result the way the judge expects it: `[i,j]` or `[]`.
pub fn format_pair(pair: Option<(usize, usize)>) -> String {
    match pair {
        Some((i, j)) => format!("[{i},{j}]"),
        None => "[]".to_string(),
    }
}

fn parse_integer(token: &str) -> Result<i64, ParseError> {
    token
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidInteger(token.trim().to_string()))
}
