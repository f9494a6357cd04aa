//! Guard predicates for argument checks.
//!
//! Guards are pure boolean functions over a function's argument. A failing
//! guard rejects the call before any new state is built.

use super::error::ZabError;

/// Pure predicate paired with the reason reported when it fails.
///
/// # Example
///
/// ```rust
/// use zab::core::Guard;
///
/// let one_to_ten = Guard::new("n must be between 1 and 10", |n: &i64| (1..=10).contains(n));
///
/// assert!(one_to_ten.allows(&4));
/// assert!(!one_to_ten.allows(&11));
/// assert!(one_to_ten.check("plox", &0).is_err());
/// ```
pub struct Guard<T: ?Sized> {
    reason: &'static str,
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Guard<T> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(reason: &'static str, predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            reason,
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the predicate.
    pub fn allows(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Evaluate the predicate, reporting a failure against `function`.
    pub fn check(&self, function: &str, value: &T) -> Result<(), ZabError> {
        if self.allows(value) {
            Ok(())
        } else {
            Err(ZabError::invalid(function, self.reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_allows_matching_values() {
        let positive = Guard::new("n must be positive", |n: &i64| *n > 0);

        assert!(positive.allows(&1));
        assert!(!positive.allows(&0));
        assert!(!positive.allows(&-1));
    }

    #[test]
    fn guard_reports_reason_and_function() {
        let non_empty = Guard::new("string must be non-empty", |s: &str| !s.is_empty());

        assert_eq!(
            non_empty.check("min", ""),
            Err(ZabError::InvalidArgument {
                function: "min".to_string(),
                reason: "string must be non-empty".to_string(),
            })
        );
        assert!(non_empty.check("min", "x").is_ok());
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::new("i must be between 1 and 7", |i: &i64| (1..=7).contains(i));

        assert_eq!(guard.allows(&7), guard.allows(&7));
        assert_eq!(guard.check("mox", &7), guard.check("mox", &7));
    }
}
