// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading problems from text.
//!
//! Two formats are supported:
//!
//! - **tokens**: whitespace-separated integers. The participant count comes first,
//!   followed by one ranking of `count - 1` indices per participant. A count of 1
//!   needs nothing further.
//! - **json**: `{"participant_count": 4, "preferences": [[1, 2, 3], ...]}`.
//!
//! Both produce a validated [`Problem`]; nothing unvalidated reaches the solver.

use crate::problem::{Problem, ProblemError};
use serde::Deserialize;
use std::io::Read;
use thiserror::Error;

/// Errors raised while reading a problem.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input")]
    Io(#[from] std::io::Error),

    #[error("token {position} ({token:?}) is not an integer")]
    NotAnInteger { position: usize, token: String },

    #[error("invalid number of people: {0}")]
    InvalidCount(i64),

    #[error("negative participant index {value} at token {position}")]
    NegativeIndex { position: usize, value: i64 },

    #[error("input ended early: expected {expected} tokens, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("unexpected trailing input after {expected} tokens")]
    TrailingInput { expected: usize },

    #[error("malformed JSON problem")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Problem(#[from] ProblemError),
}

/// Supported problem encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Whitespace-separated integers
    #[default]
    Tokens,
    /// JSON object with `participant_count` and `preferences`
    Json,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProblemFile {
    participant_count: usize,
    preferences: Vec<Vec<usize>>,
}

/// Read all of `reader` and parse it in the given format.
pub fn read_problem<R: Read>(mut reader: R, format: InputFormat) -> Result<Problem, InputError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    match format {
        InputFormat::Tokens => parse_tokens(&text),
        InputFormat::Json => parse_json(&text),
    }
}

/// Parse the token format.
///
/// # Example
///
/// ```
/// use roommates_search::input::parse_tokens;
///
/// let problem = parse_tokens("2\n1\n0\n").unwrap();
/// assert_eq!(problem.participant_count(), 2);
/// ```
pub fn parse_tokens(text: &str) -> Result<Problem, InputError> {
    let mut tokens = text.split_whitespace().enumerate().map(|(position, token)| {
        token.parse::<i64>().map_err(|_| InputError::NotAnInteger {
            position,
            token: token.to_string(),
        })
    });

    let count = match tokens.next() {
        Some(token) => token?,
        None => return Err(InputError::Truncated { expected: 1, found: 0 }),
    };
    if count <= 0 {
        return Err(InputError::InvalidCount(count));
    }
    let count = usize::try_from(count).map_err(|_| InputError::InvalidCount(count))?;

    // Sizes come from untrusted input, so nothing is preallocated from them.
    let expected = count.saturating_mul(count - 1).saturating_add(1);
    let mut preferences = Vec::new();
    let mut found = 1;
    for _ in 0..count {
        let mut ranking = Vec::new();
        for _ in 0..count - 1 {
            let value = match tokens.next() {
                Some(token) => token?,
                None => return Err(InputError::Truncated { expected, found }),
            };
            let index = usize::try_from(value)
                .map_err(|_| InputError::NegativeIndex { position: found, value })?;
            ranking.push(index);
            found += 1;
        }
        preferences.push(ranking);
    }

    if tokens.next().is_some() {
        return Err(InputError::TrailingInput { expected });
    }

    Ok(Problem::new(count, preferences)?)
}

/// Parse the JSON format.
pub fn parse_json(text: &str) -> Result<Problem, InputError> {
    let file: ProblemFile = serde_json::from_str(text)?;
    Ok(Problem::new(file.participant_count, file.preferences)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        let problem = parse_tokens("4\n1 2 3\n0 2 3\n0 1 3\n0 1 2\n").unwrap();
        assert_eq!(problem.participant_count(), 4);
        assert_eq!(problem.participant(3).preferences(), &[0, 1, 2]);
    }

    #[test]
    fn test_parse_tokens_single() {
        let problem = parse_tokens("1").unwrap();
        assert_eq!(problem.participant_count(), 1);
    }

    #[test]
    fn test_parse_tokens_invalid_count() {
        assert!(matches!(parse_tokens("0"), Err(InputError::InvalidCount(0))));
        assert!(matches!(parse_tokens("-2"), Err(InputError::InvalidCount(-2))));
    }

    #[test]
    fn test_parse_tokens_empty() {
        assert!(matches!(
            parse_tokens("   "),
            Err(InputError::Truncated { expected: 1, found: 0 })
        ));
    }

    #[test]
    fn test_parse_tokens_not_integer() {
        match parse_tokens("2 x 0") {
            Err(InputError::NotAnInteger { position, token }) => {
                assert_eq!(position, 1);
                assert_eq!(token, "x");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_parse_tokens_truncated() {
        assert!(matches!(
            parse_tokens("3 1 2 0 2 0"),
            Err(InputError::Truncated { expected: 7, found: 6 })
        ));
    }

    #[test]
    fn test_parse_tokens_trailing() {
        assert!(matches!(
            parse_tokens("2 1 0 5"),
            Err(InputError::TrailingInput { expected: 3 })
        ));
    }

    #[test]
    fn test_parse_tokens_negative_index() {
        assert!(matches!(
            parse_tokens("2 -1 0"),
            Err(InputError::NegativeIndex { position: 1, value: -1 })
        ));
    }

    #[test]
    fn test_parse_tokens_invalid_problem() {
        assert!(matches!(
            parse_tokens("2 0 1"),
            Err(InputError::Problem(ProblemError::SelfReference { participant: 0 }))
        ));
    }

    #[test]
    fn test_parse_json() {
        let problem =
            parse_json(r#"{"participant_count": 2, "preferences": [[1], [0]]}"#).unwrap();
        assert_eq!(problem.participant_count(), 2);
    }

    #[test]
    fn test_parse_json_errors() {
        assert!(matches!(parse_json("{"), Err(InputError::Json(_))));
        assert!(matches!(
            parse_json(r#"{"participant_count": 3, "preferences": [[1], [0]]}"#),
            Err(InputError::Problem(ProblemError::WrongListCount { expected: 3, found: 2 }))
        ));
    }

    #[test]
    fn test_read_problem() {
        let problem = read_problem("2 1 0".as_bytes(), InputFormat::Tokens).unwrap();
        assert_eq!(problem.participant_count(), 2);
    }
}
