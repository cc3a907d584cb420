//! Token input and typed validation
//!
//! The session reads single whitespace-delimited tokens: a line may carry
//! several tokens, and a token never spans lines.  [`TokenReader`] buffers
//! the remainder of the current line; [`parse_int_in_range`] turns a token
//! into an integer within declared bounds, returning a typed
//! [`InputError`] so the caller decides between re-prompt and abort.

use std::collections::VecDeque;
use std::fmt;
use std::io::{self, BufRead};

/// Whitespace-delimited token reader over any buffered input
#[derive(Debug)]
pub struct TokenReader<R: BufRead> {
    inner: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(inner: R) -> Self {
        TokenReader {
            inner,
            pending: VecDeque::new(),
        }
    }

    /// Next token, reading further lines as needed; `None` at end of input
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            let mut line = String::new();
            if self.inner.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

/// Validation failures for a single token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Token is not an integer
    NotAnInteger { token: String },

    /// Integer outside the declared bounds
    OutOfRange { value: i64, min: i64, max: i64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::NotAnInteger { token } => {
                write!(f, "'{}' is not an integer", token)
            }
            InputError::OutOfRange { value, min, max } => {
                write!(f, "{} is out of range ({}..{})", value, min, max)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parse a token as an integer in `min..=max`
pub fn parse_int_in_range(token: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value = token
        .parse::<i64>()
        .map_err(|_| InputError::NotAnInteger {
            token: token.to_string(),
        })?;
    if value < min || value > max {
        return Err(InputError::OutOfRange { value, min, max });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_tokens_split_within_and_across_lines() {
        let mut reader = TokenReader::new(Cursor::new("1 two\n\n  3\n"));
        assert_eq!(reader.next_token().unwrap(), Some("1".to_string()));
        assert_eq!(reader.next_token().unwrap(), Some("two".to_string()));
        assert_eq!(reader.next_token().unwrap(), Some("3".to_string()));
        assert_eq!(reader.next_token().unwrap(), None);
    }

    #[test]
    fn test_parse_int_in_range() {
        assert_eq!(parse_int_in_range("42", 0, 100), Ok(42));
        assert_eq!(parse_int_in_range("-5", -10, 10), Ok(-5));
        assert_eq!(
            parse_int_in_range("abc", 0, 100),
            Err(InputError::NotAnInteger {
                token: "abc".to_string()
            })
        );
        assert_eq!(
            parse_int_in_range("101", 0, 100),
            Err(InputError::OutOfRange {
                value: 101,
                min: 0,
                max: 100
            })
        );
        // bounds are inclusive
        assert_eq!(parse_int_in_range("0", 0, 100), Ok(0));
        assert_eq!(parse_int_in_range("100", 0, 100), Ok(100));
    }
}
