//! Functions that change the name.

use super::{ask, int_arg, text_arg};
use crate::core::{expect_arity, Arg, Guard, Zab, ZabError, DEFAULT_NAME};
use crate::oracle::{prompts, TextOracle};
use once_cell::sync::Lazy;

pub const BAD_NAME: &str = "bad name, please change me immediately!";
pub const UNNAMED: &str = "unnamed";

static POSITIVE: Lazy<Guard<i64>> = Lazy::new(|| Guard::new("n must be positive", |n: &i64| *n > 0));

static NON_EMPTY: Lazy<Guard<str>> =
    Lazy::new(|| Guard::new("string must be non-empty", |s: &str| !s.is_empty()));

/// Reverse the name.
pub fn fin(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("fin", args, 0)?;
    Ok(zab.with_name(zab.name().chars().rev().collect::<String>()))
}

pub fn bin(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("bin", args, 0)?;
    Ok(zab.with_name(BAD_NAME))
}

/// Rename to the Spanish translation of a noun.
///
/// Whatever the oracle says is taken as-is after trimming. Without an
/// answer the name is kept.
pub fn stin(zab: &Zab, args: &[Arg], oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let noun = text_arg("stin", args)?;
    let name = ask(oracle, "stin", &prompts::translation(&noun))
        .filter(|answer| !answer.is_empty())
        .unwrap_or_else(|| zab.name().to_string());
    Ok(zab.with_name(name))
}

/// Keep the first `n` characters of the name.
pub fn hin(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let n = int_arg("hin", args)?;
    POSITIVE.check("hin", &n)?;
    let keep = usize::try_from(n).unwrap_or(usize::MAX);
    Ok(zab.with_name(zab.name().chars().take(keep).collect::<String>()))
}

/// Rename to the given word minus its first character.
pub fn min(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let word = text_arg("min", args)?;
    NON_EMPTY.check("min", &word)?;
    let rest: String = word.chars().skip(1).collect();
    if rest.is_empty() {
        Ok(zab.with_name(UNNAMED))
    } else {
        Ok(zab.with_name(rest))
    }
}

/// Placeholder with no agreed behavior; leaves the Zab unchanged.
pub fn vin(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("vin", args, 0)?;
    Ok(zab.with_name(zab.name()))
}

/// Placeholder with no agreed behavior; resets the name to the default.
pub fn cin(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("cin", args, 0)?;
    Ok(zab.with_name(DEFAULT_NAME))
}
