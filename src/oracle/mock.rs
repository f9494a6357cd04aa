//! Deterministic oracles for tests, demos, and offline play.

use super::{OracleError, TextOracle};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

/// Always answers with the same text.
#[derive(Debug, Clone)]
pub struct StaticOracle {
    answer: String,
}

impl StaticOracle {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl TextOracle for StaticOracle {
    fn respond(&self, _prompt: &str) -> Result<String, OracleError> {
        Ok(self.answer.clone())
    }
}

/// Never answers. Every oracle-dependent function falls back.
#[derive(Debug, Clone, Default)]
pub struct FailingOracle;

impl TextOracle for FailingOracle {
    fn respond(&self, _prompt: &str) -> Result<String, OracleError> {
        Err(OracleError::Unavailable("no oracle configured".to_string()))
    }
}

/// Answers from a queue, in order, and remembers every prompt it saw.
///
/// Clones share the same queue and call log, so a test can keep a handle
/// after handing the oracle to a registry.
///
/// # Example
///
/// ```rust
/// use zab::oracle::{ScriptedOracle, TextOracle};
///
/// let oracle = ScriptedOracle::new(["8", "Black"]).then_fail();
/// assert_eq!(oracle.respond("legs?").unwrap(), "8");
/// assert_eq!(oracle.respond("color?").unwrap(), "Black");
/// assert!(oracle.respond("again?").is_err());
/// assert_eq!(oracle.prompts(), vec!["legs?", "color?", "again?"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScriptedOracle {
    answers: Arc<Mutex<VecDeque<Option<String>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOracle {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Arc::new(Mutex::new(
                answers.into_iter().map(|a| Some(a.into())).collect(),
            )),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue another answer.
    pub fn then(self, answer: impl Into<String>) -> Self {
        self.lock_answers().push_back(Some(answer.into()));
        self
    }

    /// Queue a failure.
    pub fn then_fail(self) -> Self {
        self.lock_answers().push_back(None);
        self
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn lock_answers(&self) -> std::sync::MutexGuard<'_, VecDeque<Option<String>>> {
        self.answers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TextOracle for ScriptedOracle {
    fn respond(&self, prompt: &str) -> Result<String, OracleError> {
        self.prompts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(prompt.to_string());

        match self.lock_answers().pop_front() {
            Some(Some(answer)) => Ok(answer),
            Some(None) => Err(OracleError::Unavailable("scripted failure".to_string())),
            None => Err(OracleError::Exhausted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_oracle_ignores_prompt() {
        let oracle = StaticOracle::new("Gray");
        assert_eq!(oracle.respond("a").unwrap(), "Gray");
        assert_eq!(oracle.respond("b").unwrap(), "Gray");
    }

    #[test]
    fn failing_oracle_always_fails() {
        assert!(matches!(
            FailingOracle.respond("anything"),
            Err(OracleError::Unavailable(_))
        ));
    }

    #[test]
    fn scripted_oracle_is_exhausted_when_empty() {
        let oracle = ScriptedOracle::new(Vec::<String>::new());
        assert!(matches!(oracle.respond("x"), Err(OracleError::Exhausted)));
    }

    #[test]
    fn clones_share_queue_and_log() {
        let oracle = ScriptedOracle::new(["one"]).then("two");
        let handle = oracle.clone();

        assert_eq!(oracle.respond("first").unwrap(), "one");
        assert_eq!(handle.respond("second").unwrap(), "two");
        assert_eq!(handle.prompts(), vec!["first", "second"]);
    }
}
