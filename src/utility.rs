use lazy_static::lazy_static;
use rand::{rngs::StdRng, Rng, SeedableRng};
use regex::Regex;
use tracing::trace;

use crate::error::ParseError;

lazy_static! {
    static ref SEPARATORS: Regex = Regex::new(r"[\s,;]+").unwrap();
    static ref BRACKETS: Regex = Regex::new(r"^[\{\[\(]|[\}\]\)]$").unwrap();
}

/// Smallest value produced by `random_values`.
pub const RANDOM_MIN: i64 = -99;
/// Largest value produced by `random_values`.
pub const RANDOM_MAX: i64 = 99;

/// Parses a list such as `{3,1,4}`, `3 1 4` or `[3, 1, 4]`.
///
/// An explicitly bracketed empty list (`{}`) is an empty vector; a blank
/// string is `ParseError::Empty`.
pub fn parse_values(text: &str) -> Result<Vec<i64>, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }
    let inner = BRACKETS.replace_all(trimmed, "");
    let values = SEPARATORS
        .split(inner.trim())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token.parse::<i64>().map_err(|_| ParseError::InvalidNumber {
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    trace!(count = values.len(), "parsed values");
    Ok(values)
}

/// Generates `count` values in `RANDOM_MIN..=RANDOM_MAX`.
///
/// A seed makes the output reproducible.
pub fn random_values(count: usize, seed: Option<u64>) -> Vec<i64> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| rng.gen_range(RANDOM_MIN..=RANDOM_MAX))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_braced() {
        assert_eq!(parse_values("{3,1,4}"), Ok(vec![3, 1, 4]));
        assert_eq!(parse_values("[3, 1, 4]"), Ok(vec![3, 1, 4]));
        assert_eq!(parse_values("{}"), Ok(vec![]));
    }

    #[test]
    fn parse_plain() {
        assert_eq!(parse_values("3 -1  4"), Ok(vec![3, -1, 4]));
        assert_eq!(parse_values(" 7 "), Ok(vec![7]));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_values("   "), Err(ParseError::Empty));
        assert_eq!(
            parse_values("1,x,3"),
            Err(ParseError::InvalidNumber {
                token: "x".to_string()
            })
        );
    }

    #[test]
    fn random_is_seeded() {
        let a = random_values(16, Some(7));
        let b = random_values(16, Some(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 16);
        assert!(a.iter().all(|v| (RANDOM_MIN..=RANDOM_MAX).contains(v)));
    }
}
