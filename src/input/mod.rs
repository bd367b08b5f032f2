//! Line-based numeric input
//!
//! Reads whitespace-separated real numbers, one request per line, as typed at
//! an interactive prompt. Tokens must parse as finite `f64` values.

use crate::coordinates::Cartesian3;
use std::io::BufRead;
use thiserror::Error;

/// Errors raised while reading numbers from text
#[derive(Debug, Error)]
pub enum InputError {
    /// Reading from the underlying stream failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a line was available
    #[error("Unexpected end of input")]
    Eof,

    /// The line held the wrong number of values
    #[error("Expected {expected} values, found {found}")]
    WrongArity {
        /// Values required
        expected: usize,
        /// Values present on the line
        found: usize,
    },

    /// A token was not a finite real number
    #[error("Invalid number: {token:?}")]
    InvalidNumber {
        /// The offending token
        token: String,
    },
}

/// Result type for input parsing
pub type Result<T> = std::result::Result<T, InputError>;

fn parse_token(token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidNumber {
            token: token.to_string(),
        }),
    }
}

/// Parses exactly `N` whitespace-separated reals
pub fn parse_reals<const N: usize>(line: &str) -> Result<[f64; N]> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != N {
        return Err(InputError::WrongArity {
            expected: N,
            found: tokens.len(),
        });
    }

    let mut values = [0.0; N];
    for (slot, token) in values.iter_mut().zip(tokens) {
        *slot = parse_token(token)?;
    }
    Ok(values)
}

/// Parses a single real, e.g. an angle
pub fn parse_real(line: &str) -> Result<f64> {
    let [value] = parse_reals::<1>(line)?;
    Ok(value)
}

/// Parses three reals `x y z` into a point
///
/// ```rust
/// use line_rotation::input::parse_vector3;
///
/// let p = parse_vector3("  1.5 -2   3e1 ").unwrap();
/// assert_eq!((p.x, p.y, p.z), (1.5, -2.0, 30.0));
/// assert!(parse_vector3("1 2").is_err());
/// ```
pub fn parse_vector3(line: &str) -> Result<Cartesian3> {
    Ok(Cartesian3::from(parse_reals::<3>(line)?))
}

/// Reads the next line from `reader`
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    log::debug!("read input line {:?}", line.trim_end());
    Ok(line)
}

/// Reads one line and parses it as a point
pub fn read_vector3<R: BufRead>(reader: &mut R) -> Result<Cartesian3> {
    parse_vector3(&read_line(reader)?)
}

/// Reads one line and parses it as a single real
pub fn read_real<R: BufRead>(reader: &mut R) -> Result<f64> {
    parse_real(&read_line(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_vector3() {
        let p = parse_vector3("1 2 3").unwrap();
        assert_eq!(p, Cartesian3::new(1.0, 2.0, 3.0));

        let p = parse_vector3("\t-0.5   4e-3\t7\n").unwrap();
        assert_eq!(p, Cartesian3::new(-0.5, 0.004, 7.0));
    }

    #[test]
    fn test_wrong_arity() {
        match parse_vector3("1 2") {
            Err(InputError::WrongArity { expected, found }) => {
                assert_eq!(expected, 3);
                assert_eq!(found, 2);
            }
            other => panic!("expected WrongArity, got {:?}", other),
        }
        assert!(matches!(
            parse_vector3("1 2 3 4"),
            Err(InputError::WrongArity { found: 4, .. })
        ));
        assert!(matches!(
            parse_real(""),
            Err(InputError::WrongArity { found: 0, .. })
        ));
    }

    #[test]
    fn test_invalid_numbers() {
        match parse_vector3("1 two 3") {
            Err(InputError::InvalidNumber { token }) => assert_eq!(token, "two"),
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
        assert!(parse_real("NaN").is_err());
        assert!(parse_real("inf").is_err());
        assert_eq!(parse_real(" 90 ").unwrap(), 90.0);
    }

    #[test]
    fn test_read_sequence() {
        let mut reader = Cursor::new("1 0 0\n90\n0 0 0\n0 0 1\n");
        assert_eq!(read_vector3(&mut reader).unwrap(), Cartesian3::new(1.0, 0.0, 0.0));
        assert_eq!(read_real(&mut reader).unwrap(), 90.0);
        assert_eq!(read_vector3(&mut reader).unwrap(), Cartesian3::origin());
        assert_eq!(read_vector3(&mut reader).unwrap(), Cartesian3::new(0.0, 0.0, 1.0));
        assert!(matches!(read_vector3(&mut reader), Err(InputError::Eof)));
    }

    #[test]
    fn test_error_messages() {
        let err = parse_vector3("a b c").unwrap_err();
        assert_eq!(err.to_string(), "Invalid number: \"a\"");
        let err = parse_vector3("1").unwrap_err();
        assert_eq!(err.to_string(), "Expected 3 values, found 1");
    }
}
