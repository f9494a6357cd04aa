//! Builder for constructing starting states.

use crate::core::{Zab, ZabError, DEFAULT_BIM, DEFAULT_NAME, DEFAULT_PIM};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Problems with a requested starting state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StateViolation {
    #[error("name must be non-empty")]
    EmptyName,

    #[error("bim must be non-empty")]
    EmptyBim,

    #[error("pim must be nonzero")]
    ZeroPim,
}

/// Builder for a starting Zab with a fluent API.
///
/// Unset attributes take the defaults (`Cama`, `Red`, `1`). All violations
/// are collected before failing, so a caller sees every problem at once.
///
/// # Example
///
/// ```rust
/// use zab::builder::ZabBuilder;
///
/// let zab = ZabBuilder::new(10).name("Oso").pim(3).build().unwrap();
/// assert_eq!(zab.name(), "Oso");
/// assert_eq!(zab.bim(), "Red");
/// assert_eq!(zab.pim(), 3);
///
/// assert!(ZabBuilder::new(10).name("").pim(0).build().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ZabBuilder {
    turns: u32,
    name: Option<String>,
    bim: Option<String>,
    pim: Option<i64>,
}

impl ZabBuilder {
    /// Create a new builder for a game with `turns` turns.
    pub fn new(turns: u32) -> Self {
        Self {
            turns,
            name: None,
            bim: None,
            pim: None,
        }
    }

    /// Start from an existing Zab's turns and attributes.
    ///
    /// This is how transforms registered outside the crate build a
    /// successor: the result is validated like any starting state and has
    /// an empty history, which dispatch then fills in.
    pub fn from_state(zab: &Zab) -> Self {
        Self {
            turns: zab.turns(),
            name: Some(zab.name().to_string()),
            bim: Some(zab.bim().to_string()),
            pim: Some(zab.pim()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn bim(mut self, bim: impl Into<String>) -> Self {
        self.bim = Some(bim.into());
        self
    }

    pub fn pim(mut self, pim: i64) -> Self {
        self.pim = Some(pim);
        self
    }

    /// Build the Zab.
    /// Returns `InvalidArgument` listing every violation if any check fails.
    pub fn build(self) -> Result<Zab, ZabError> {
        let name = self.name.unwrap_or_else(|| DEFAULT_NAME.to_string());
        let bim = self.bim.unwrap_or_else(|| DEFAULT_BIM.to_string());
        let pim = self.pim.unwrap_or(DEFAULT_PIM);

        match validate(&name, &bim, pim) {
            Validation::Success(_) => Ok(Zab::from_parts(self.turns, name, bim, pim)),
            Validation::Failure(violations) => {
                let reasons: Vec<String> = violations.iter().map(ToString::to_string).collect();
                Err(ZabError::invalid("initial_state", reasons.join("; ")))
            }
        }
    }
}

fn require(ok: bool, violation: StateViolation) -> Validation<(), NonEmptyVec<StateViolation>> {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation)
    }
}

/// Run every starting-state check, accumulating ALL violations.
fn validate(name: &str, bim: &str, pim: i64) -> Validation<(), NonEmptyVec<StateViolation>> {
    let checks = vec![
        require(!name.is_empty(), StateViolation::EmptyName),
        require(!bim.is_empty(), StateViolation::EmptyBim),
        require(pim != 0, StateViolation::ZeroPim),
    ];

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults_match_initial_state() {
        let built = ZabBuilder::new(5).build().unwrap();
        assert_eq!(built, crate::core::initial_state(5));
    }

    #[test]
    fn builder_overrides_each_attribute() {
        let zab = ZabBuilder::new(2)
            .name("Pez")
            .bim("Teal")
            .pim(-3)
            .build()
            .unwrap();

        assert_eq!(zab.name(), "Pez");
        assert_eq!(zab.bim(), "Teal");
        assert_eq!(zab.pim(), -3);
        assert_eq!(zab.turns(), 2);
    }

    #[test]
    fn from_state_copies_attributes_and_drops_history() {
        let registry = crate::registry::Registry::standard(std::sync::Arc::new(
            crate::oracle::FailingOracle,
        ));
        let zab = crate::core::initial_state(4)
            .call(&registry, "plox", &[crate::core::Arg::from(6)])
            .unwrap();

        let copy = ZabBuilder::from_state(&zab).bim("Navy").build().unwrap();

        assert_eq!(copy.turns(), 4);
        assert_eq!(copy.name(), "Cama");
        assert_eq!(copy.bim(), "Navy");
        assert_eq!(copy.pim(), 7);
        assert!(copy.history().is_empty());
    }

    #[test]
    fn from_state_still_validates() {
        let zab = crate::core::initial_state(4);
        let err = ZabBuilder::from_state(&zab).name("").build().unwrap_err();
        assert!(matches!(err, ZabError::InvalidArgument { ref reason, .. } if reason == "name must be non-empty"));
    }

    #[test]
    fn validation_accumulates_all_violations() {
        let result = validate("", "", 0);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().any(|e| *e == StateViolation::EmptyName));
                assert!(errors.iter().any(|e| *e == StateViolation::EmptyBim));
                assert!(errors.iter().any(|e| *e == StateViolation::ZeroPim));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn build_reports_every_violation() {
        let err = ZabBuilder::new(1).name("").pim(0).build().unwrap_err();

        match err {
            ZabError::InvalidArgument { function, reason } => {
                assert_eq!(function, "initial_state");
                assert!(reason.contains("name must be non-empty"));
                assert!(reason.contains("pim must be nonzero"));
                assert!(!reason.contains("bim"));
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }
}
