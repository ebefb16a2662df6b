//! Course-input parsing: whitespace-separated numbers into arrays.
//!
//! Lecture material builds arrays from literal strings (`"1 2 3 4"`).
//! Malformed input is an expected runtime condition — unlike the container
//! contract checks, parsing reports failure through a [`ParseError`]
//! instead of panicking.

use std::error::Error;
use std::fmt;

use crate::Array;

/// A token that failed to parse as a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// A whitespace-separated token was not a valid integer.
    InvalidInt {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the input.
        position: usize,
    },
    /// A whitespace-separated token was not a valid floating-point number.
    InvalidFloat {
        /// The offending token.
        token: String,
        /// Zero-based position of the token in the input.
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInt { token, position } => {
                write!(f, "token '{token}' at position {position} is not an integer")
            }
            Self::InvalidFloat { token, position } => {
                write!(f, "token '{token}' at position {position} is not a number")
            }
        }
    }
}

impl Error for ParseError {}

/// Parse a whitespace-separated list of integers into an array.
///
/// An input with no tokens (empty or all whitespace) yields the empty
/// array.
pub fn parse_ints(input: &str) -> Result<Array<i32>, ParseError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| ParseError::InvalidInt {
                token: token.to_string(),
                position,
            })
        })
        .collect::<Result<_, _>>()
}

/// Parse a whitespace-separated list of floating-point numbers into an
/// array.
pub fn parse_f64s(input: &str) -> Result<Array<f64>, ParseError> {
    input
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<f64>().map_err(|_| ParseError::InvalidFloat {
                token: token.to_string(),
                position,
            })
        })
        .collect::<Result<_, _>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_space_separated_ints() {
        let a = parse_ints("1 2 3 4").unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn tolerates_arbitrary_whitespace() {
        let a = parse_ints("  1\t2\n3   4 ").unwrap();
        assert_eq!(a.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn empty_input_is_the_empty_array() {
        assert!(parse_ints("").unwrap().is_empty());
        assert!(parse_ints("   \n ").unwrap().is_empty());
    }

    #[test]
    fn reports_the_bad_token_and_position() {
        let err = parse_ints("1 2 x 4").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidInt {
                token: "x".into(),
                position: 2
            }
        );
        assert_eq!(err.to_string(), "token 'x' at position 2 is not an integer");
    }

    #[test]
    fn parses_floats_including_negatives() {
        let a = parse_f64s("0.5 -1.25 3").unwrap();
        assert_eq!(a.as_slice(), &[0.5, -1.25, 3.0]);
    }

    #[test]
    fn lecture_scenario_sub_of_parsed_input() {
        let a = parse_ints("1 2 3 4").unwrap();
        assert_eq!(a.sub(1, 3).as_slice(), &[2, 3]);
    }
}
