//! Extracting an action and scratchpad notes from a free-text response.

use crate::core::Arg;
use once_cell::sync::Lazy;
use regex::Regex;

static SCRATCH_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<scratch>(.*?)</scratch>").expect("Invalid regex pattern"));

static CALL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\w+)\s*\(\s*([^)]*)\s*\)").expect("Invalid regex pattern"));

/// A function call found in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    pub function: String,
    pub args: Vec<Arg>,
}

/// Everything a response contributes to a turn.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedResponse {
    pub scratchpad: Option<String>,
    pub action: Option<Action>,
}

/// Parse a response against the functions on offer.
///
/// The first `<scratch>` block becomes the new scratchpad. Scratch blocks are
/// removed before searching for calls, and the **last** call to an offered
/// function wins. Names match case-insensitively and are reported in the
/// offered spelling. Everything between the parentheses is one argument.
///
/// # Example
///
/// ```rust
/// use zab::core::Arg;
/// use zab::session::parse_response;
///
/// let offered = vec!["mox".to_string(), "fin".to_string()];
/// let parsed = parse_response("<scratch>try Fin()</scratch> I will call Mox(3).", &offered);
///
/// assert_eq!(parsed.scratchpad.as_deref(), Some("try Fin()"));
/// let action = parsed.action.unwrap();
/// assert_eq!(action.function, "mox");
/// assert_eq!(action.args, vec![Arg::Int(3)]);
/// ```
pub fn parse_response(response: &str, offered: &[String]) -> ParsedResponse {
    let scratchpad = SCRATCH_REGEX
        .captures(response)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string());

    let visible = SCRATCH_REGEX.replace_all(response, "");

    let action = CALL_REGEX
        .captures_iter(&visible)
        .filter_map(|caps| {
            let called = caps.get(1)?.as_str();
            let function = offered.iter().find(|f| f.eq_ignore_ascii_case(called))?;
            let raw = caps.get(2).map_or("", |m| m.as_str()).trim();
            let args = if raw.is_empty() {
                Vec::new()
            } else {
                vec![Arg::parse(raw)]
            };
            Some(Action {
                function: function.clone(),
                args,
            })
        })
        .last();

    ParsedResponse { scratchpad, action }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offered(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn finds_call_without_arguments() {
        let parsed = parse_response("Let me try fin()", &offered(&["fin"]));
        assert_eq!(
            parsed.action,
            Some(Action {
                function: "fin".to_string(),
                args: vec![],
            })
        );
        assert!(parsed.scratchpad.is_none());
    }

    #[test]
    fn last_offered_call_wins() {
        let parsed = parse_response(
            "First Rox(\"square\"), then maybe Lox('blue')",
            &offered(&["rox", "lox"]),
        );
        let action = parsed.action.unwrap();
        assert_eq!(action.function, "lox");
        assert_eq!(action.args, vec![Arg::Text("blue".to_string())]);
    }

    #[test]
    fn calls_to_other_functions_are_ignored() {
        let parsed = parse_response("tox() then print(x)", &offered(&["fin"]));
        assert!(parsed.action.is_none());
    }

    #[test]
    fn calls_inside_scratch_are_ignored() {
        let parsed = parse_response(
            "<scratch>\n  hin(2) shortens?\n</scratch>\nNothing to do.",
            &offered(&["hin"]),
        );
        assert_eq!(parsed.scratchpad.as_deref(), Some("hin(2) shortens?"));
        assert!(parsed.action.is_none());
    }

    #[test]
    fn quoted_numbers_become_integers() {
        let parsed = parse_response("Plox(\"4\")", &offered(&["plox"]));
        assert_eq!(parsed.action.unwrap().args, vec![Arg::Int(4)]);
    }
}
