//! Non-interactive play: apply a list of written calls in order.

use super::action::parse_response;
use crate::core::{Zab, ZabError};
use crate::registry::Registry;
use thiserror::Error;
use tracing::debug;

/// Errors that stop a scripted run
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("'{call}' is not a call to a known function")]
    NotACall { call: String },

    #[error("Failed to apply '{call}': {source}")]
    Rejected { call: String, source: ZabError },
}

/// Apply each call, such as `"mox(3)"`, to `start` and return the final Zab.
///
/// Every registered function may be called, placeholders included. The
/// first call that is unparsable, unknown, or rejected stops the run.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use zab::core::initial_state;
/// use zab::oracle::FailingOracle;
/// use zab::registry::Registry;
/// use zab::session::apply_calls;
///
/// let registry = Registry::standard(Arc::new(FailingOracle));
/// let zab = apply_calls(&registry, initial_state(10), &["fin()", "mox(3)"]).unwrap();
/// assert_eq!(zab.describe(), "You are a zab named amaC with bim Yellow and pim 1.");
/// ```
pub fn apply_calls<S: AsRef<str>>(
    registry: &Registry,
    start: Zab,
    calls: &[S],
) -> Result<Zab, ScriptError> {
    let names: Vec<String> = registry.names().into_iter().map(String::from).collect();

    calls.iter().try_fold(start, |zab, call| {
        let call = call.as_ref();
        let action = parse_response(call, &names)
            .action
            .ok_or_else(|| ScriptError::NotACall {
                call: call.to_string(),
            })?;

        debug!(call, function = %action.function, "Applying scripted call");
        zab.call(registry, &action.function, &action.args)
            .map_err(|source| ScriptError::Rejected {
                call: call.to_string(),
                source,
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initial_state;
    use crate::oracle::FailingOracle;
    use std::sync::Arc;

    fn registry() -> Registry {
        Registry::standard(Arc::new(FailingOracle))
    }

    #[test]
    fn applies_calls_in_order() {
        let zab = apply_calls(&registry(), initial_state(10), &["fin()", "tox()", "mox(3)"]).unwrap();

        assert_eq!(zab.history().len(), 3);
        assert_eq!(zab.history().lines()[1].split(" -> ").nth(1), Some("tox()"));
        assert_eq!(zab.bim(), "Yellow");
    }

    #[test]
    fn placeholders_are_callable() {
        let zab = apply_calls(&registry(), initial_state(10), &["fin()", "vin()", "cin()"]).unwrap();
        assert_eq!(zab.name(), "Cama");
        assert_eq!(zab.history().len(), 3);
    }

    #[test]
    fn unknown_function_stops_the_run() {
        let err = apply_calls(&registry(), initial_state(10), &["fin()", "zap(2)"]).unwrap_err();
        assert!(matches!(err, ScriptError::NotACall { ref call } if call == "zap(2)"));
        assert_eq!(err.to_string(), "'zap(2)' is not a call to a known function");
    }

    #[test]
    fn text_without_a_call_stops_the_run() {
        let err = apply_calls(&registry(), initial_state(10), &["fin"]).unwrap_err();
        assert!(matches!(err, ScriptError::NotACall { .. }));
    }

    #[test]
    fn invalid_argument_stops_the_run() {
        let err = apply_calls(&registry(), initial_state(10), &["plox(4)", "plox(11)", "tox()"])
            .unwrap_err();

        match err {
            ScriptError::Rejected { call, source } => {
                assert_eq!(call, "plox(11)");
                assert!(matches!(source, ZabError::InvalidArgument { ref function, .. } if function == "plox"));
            }
            other => panic!("Expected Rejected, got {other:?}"),
        }
    }

    #[test]
    fn final_state_serializes_for_json_output() {
        let zab = apply_calls(&registry(), initial_state(5), &["Hin(2)"]).unwrap();
        let json = serde_json::to_value(&zab).unwrap();

        assert_eq!(json["name"], "Ca");
        assert_eq!(json["turns"], 5);
        assert_eq!(json["history"]["entries"][0]["call"], "hin(2)");
    }
}
