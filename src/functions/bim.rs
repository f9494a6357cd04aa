//! Functions that change the bim.

use super::tables::{palette_exact, palette_match, ROYGBIV};
use super::{ask, int_arg, text_arg};
use crate::core::{expect_arity, Arg, Guard, Zab, ZabError, DEFAULT_BIM};
use crate::oracle::{prompts, TextOracle};
use once_cell::sync::Lazy;

/// Used when an animal's color cannot be resolved.
pub const FALLBACK_COLOR: &str = "Brown";

static ONE_TO_SEVEN: Lazy<Guard<i64>> = Lazy::new(|| {
    Guard::new("i must be between 1 and 7", |i: &i64| (1..=7).contains(i))
});

pub fn sox(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("sox", args, 0)?;
    Ok(zab.with_bim(DEFAULT_BIM))
}

/// Set the bim to the color most associated with an animal.
pub fn vox(zab: &Zab, args: &[Arg], oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let animal = text_arg("vox", args)?;
    let color = ask(oracle, "vox", &prompts::animal_color(&animal))
        .and_then(|answer| palette_match(&answer))
        .unwrap_or(FALLBACK_COLOR);
    Ok(zab.with_bim(color))
}

/// Set the bim to a color between the current bim and the given one.
///
/// Unlike `vox`, an answer outside the palette keeps the current bim.
pub fn lox(zab: &Zab, args: &[Arg], oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let color = text_arg("lox", args)?;
    let between = ask(oracle, "lox", &prompts::color_between(zab.bim(), &color))
        .and_then(|answer| palette_exact(&answer));
    match between {
        Some(between) => Ok(zab.with_bim(between)),
        None => Ok(zab.with_bim(zab.bim())),
    }
}

/// Set the bim to the i-th rainbow color, counting from 1.
pub fn mox(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let i = int_arg("mox", args)?;
    ONE_TO_SEVEN.check("mox", &i)?;
    Ok(zab.with_bim(ROYGBIV[(i - 1) as usize]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initial_state;
    use crate::oracle::{FailingOracle, ScriptedOracle, StaticOracle};

    fn colored(bim: &str) -> Zab {
        initial_state(10).with_bim(bim)
    }

    #[test]
    fn sox_resets_to_red() {
        assert_eq!(sox(&colored("Navy"), &[], &FailingOracle).unwrap().bim(), "Red");
    }

    #[test]
    fn vox_matches_palette_ignoring_case() {
        let zab = vox(&colored("Red"), &[Arg::from("elephant")], &StaticOracle::new(" gray\n"))
            .unwrap();
        assert_eq!(zab.bim(), "Gray");
    }

    #[test]
    fn vox_off_palette_answer_falls_back_to_brown() {
        let zab = vox(&colored("Red"), &[Arg::from("zebra")], &StaticOracle::new("Striped"))
            .unwrap();
        assert_eq!(zab.bim(), FALLBACK_COLOR);
    }

    #[test]
    fn vox_oracle_failure_falls_back_to_brown() {
        let zab = vox(&colored("Red"), &[Arg::from("zebra")], &FailingOracle).unwrap();
        assert_eq!(zab.bim(), FALLBACK_COLOR);
    }

    #[test]
    fn lox_accepts_exact_palette_answer() {
        let oracle = ScriptedOracle::new(["Orange"]);
        let zab = lox(&colored("Red"), &[Arg::from("Yellow")], &oracle).unwrap();

        assert_eq!(zab.bim(), "Orange");
        assert!(oracle.prompts()[0].starts_with("What color would be between Red and Yellow?"));
    }

    #[test]
    fn lox_invalid_answer_keeps_current_bim() {
        let zab = lox(&colored("Teal"), &[Arg::from("blue")], &StaticOracle::new("Bluish")).unwrap();
        assert_eq!(zab.bim(), "Teal");
    }

    #[test]
    fn lox_wrong_case_keeps_current_bim() {
        let zab = lox(&colored("Teal"), &[Arg::from("blue")], &StaticOracle::new("cyan")).unwrap();
        assert_eq!(zab.bim(), "Teal");
    }

    #[test]
    fn lox_oracle_failure_keeps_current_bim() {
        let zab = lox(&colored("Teal"), &[Arg::from("blue")], &FailingOracle).unwrap();
        assert_eq!(zab.bim(), "Teal");
    }

    #[test]
    fn mox_indexes_rainbow_from_one() {
        let red = mox(&colored("Teal"), &[Arg::from(1)], &FailingOracle).unwrap();
        let violet = mox(&colored("Teal"), &[Arg::from(7)], &FailingOracle).unwrap();
        assert_eq!(red.bim(), "Red");
        assert_eq!(violet.bim(), "Violet");
    }

    #[test]
    fn mox_rejects_out_of_range() {
        for i in [0, 8] {
            assert!(mox(&colored("Teal"), &[Arg::from(i)], &FailingOracle).is_err());
        }
    }
}
