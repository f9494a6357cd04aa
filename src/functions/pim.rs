//! Functions that change the pim.

use super::tables::known_sides;
use super::{ask, int_arg, text_arg};
use crate::core::{expect_arity, Arg, Guard, Zab, ZabError};
use crate::oracle::{prompts, TextOracle};
use once_cell::sync::Lazy;
use tracing::debug;

static ONE_TO_TEN: Lazy<Guard<i64>> = Lazy::new(|| {
    Guard::new("n must be between 1 and 10", |n: &i64| (1..=10).contains(n))
});

/// Double the pim.
pub fn tox(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("tox", args, 0)?;
    Ok(zab.with_pim(zab.pim().saturating_mul(2)))
}

/// Add a number from 1 to 10 to the pim.
pub fn plox(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let n = int_arg("plox", args)?;
    ONE_TO_TEN.check("plox", &n)?;
    Ok(zab.with_pim(zab.pim().saturating_add(n)))
}

/// Add the number of sides of a 2D shape to the pim.
///
/// Shapes outside the built-in table are put to the oracle; an answer that
/// is not an integer counts as 0.
pub fn rox(zab: &Zab, args: &[Arg], oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let shape = text_arg("rox", args)?;
    let sides = match known_sides(&shape) {
        Some(sides) => sides,
        None => {
            let answer = ask(oracle, "rox", &prompts::shape_sides(&shape));
            let sides = answer.and_then(|a| a.parse::<i64>().ok()).unwrap_or(0);
            debug!(shape = %shape, sides, "Resolved unknown shape");
            sides
        }
    };
    Ok(zab.with_pim(zab.pim().saturating_add(sides)))
}
