//! Positional arguments passed to registered functions.

use super::error::ZabError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// A single positional argument.
///
/// Functions take at most one argument, either an integer or a word.
/// `Display` renders the value the way it appears inside a history line:
/// integers in decimal, text unquoted.
///
/// # Example
///
/// ```rust
/// use zab::core::Arg;
///
/// assert_eq!(Arg::parse("3"), Arg::Int(3));
/// assert_eq!(Arg::parse("\"triangle\""), Arg::Text("triangle".to_string()));
/// assert_eq!(Arg::from("cat").to_string(), "cat");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Arg {
    Int(i64),
    Text(String),
}

impl Arg {
    /// Interpret a raw token from free text.
    ///
    /// The token is trimmed and stripped of surrounding quotes, then read as
    /// an integer if possible, otherwise kept as text.
    pub fn parse(token: &str) -> Self {
        let token = token.trim().trim_matches(|c| c == '"' || c == '\'');
        match token.parse::<i64>() {
            Ok(n) => Self::Int(n),
            Err(_) => Self::Text(token.to_string()),
        }
    }

    /// Read this argument as an integer parameter of `function`.
    pub fn as_int(&self, function: &str) -> Result<i64, ZabError> {
        match self {
            Self::Int(n) => Ok(*n),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| ZabError::invalid(function, format!("expected an integer, got '{s}'"))),
        }
    }

    /// Read this argument as a text parameter. Integers are rendered in decimal.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            Self::Int(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Self::Int(n.into())
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Check that `function` received exactly `expected` arguments.
pub(crate) fn expect_arity(function: &str, args: &[Arg], expected: usize) -> Result<(), ZabError> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(ZabError::invalid(
            function,
            format!("expected {expected} argument(s), got {}", args.len()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_reads_integers() {
        assert_eq!(Arg::parse("7"), Arg::Int(7));
        assert_eq!(Arg::parse(" -2 "), Arg::Int(-2));
        assert_eq!(Arg::parse("'3'"), Arg::Int(3));
    }

    #[test]
    fn parse_strips_quotes_from_text() {
        assert_eq!(Arg::parse("'hexagon'"), Arg::Text("hexagon".to_string()));
        assert_eq!(Arg::parse("\"cat\""), Arg::Text("cat".to_string()));
        assert_eq!(Arg::parse("blue"), Arg::Text("blue".to_string()));
    }

    #[test]
    fn as_int_accepts_numeric_text() {
        assert_eq!(Arg::from("4").as_int("plox"), Ok(4));
        assert_eq!(Arg::from(9).as_int("plox"), Ok(9));
    }

    #[test]
    fn as_int_rejects_words() {
        let err = Arg::from("four").as_int("plox").unwrap_err();
        assert!(matches!(err, ZabError::InvalidArgument { ref function, .. } if function == "plox"));
    }

    #[test]
    fn as_text_renders_integers() {
        assert_eq!(Arg::from(12).as_text(), "12");
        assert_eq!(Arg::from("owl").as_text(), "owl");
    }

    #[test]
    fn arity_mismatch_is_invalid_argument() {
        assert!(expect_arity("fin", &[], 0).is_ok());
        assert!(expect_arity("fin", &[Arg::from(1)], 0).is_err());
        assert!(expect_arity("hin", &[], 1).is_err());
    }

    #[test]
    fn args_serialize_untagged() {
        let json = serde_json::to_string(&vec![Arg::from(3), Arg::from("cat")]).unwrap();
        assert_eq!(json, r#"[3,"cat"]"#);
    }
}
