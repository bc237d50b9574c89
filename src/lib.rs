//! Two-sum pair finding with a small local judge.
//!
//! [`find_pair`] is the core operation. The [`problem`] and [`test_runner`]
//! modules parse practice test cases and check them against it.

pub mod config;
pub mod error;
pub mod pair;
pub mod problem;
pub mod test_runner;

pub use error::{JudgeError, ParseError};
pub use pair::{find_pair, Solution};
