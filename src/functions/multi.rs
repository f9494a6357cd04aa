//! Functions that change more than one attribute.

use super::bim::FALLBACK_COLOR;
use super::tables::palette_exact;
use super::{ask, text_arg};
use crate::core::{expect_arity, initial_state, Arg, Zab, ZabError};
use crate::oracle::{prompts, TextOracle};

/// Used when an animal's leg count cannot be resolved.
pub const FALLBACK_LEGS: i64 = 4;

/// Reset name, bim and pim to their defaults.
pub fn hox(zab: &Zab, args: &[Arg], _oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    expect_arity("hox", args, 0)?;
    Ok(initial_state(zab.turns()))
}

/// Set the pim to an animal's leg count and the bim to its predominant color.
///
/// Two oracle calls, legs first.
pub fn r#box(zab: &Zab, args: &[Arg], oracle: &dyn TextOracle) -> Result<Zab, ZabError> {
    let animal = text_arg("box", args)?;

    let legs = ask(oracle, "box", &prompts::leg_count(&animal))
        .and_then(|answer| answer.parse::<i64>().ok())
        .unwrap_or(FALLBACK_LEGS);

    let color = ask(oracle, "box", &prompts::predominant_color(&animal))
        .and_then(|answer| palette_exact(&answer))
        .unwrap_or(FALLBACK_COLOR);

    Ok(zab.with_bim(color).with_pim(legs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ZabError;
    use crate::oracle::{FailingOracle, ScriptedOracle};

    #[test]
    fn hox_restores_defaults_and_keeps_turns() {
        let zab = initial_state(6).with_name("Sapo").with_bim("Green").with_pim(42);
        let reset = hox(&zab, &[], &FailingOracle).unwrap();

        assert_eq!(reset.name(), "Cama");
        assert_eq!(reset.bim(), "Red");
        assert_eq!(reset.pim(), 1);
        assert_eq!(reset.turns(), 6);
    }

    #[test]
    fn box_asks_legs_then_color() {
        let oracle = ScriptedOracle::new(["8", "Black"]);
        let zab = r#box(&initial_state(10), &[Arg::from("spider")], &oracle).unwrap();

        assert_eq!(zab.pim(), 8);
        assert_eq!(zab.bim(), "Black");

        let prompts = oracle.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(
            prompts[0],
            "How many legs does a spider have? Respond with only a number."
        );
        assert!(prompts[1].starts_with("What is the predominant color of a spider?"));
    }

    #[test]
    fn box_falls_back_independently() {
        let oracle = ScriptedOracle::new(["many"]).then("White");
        let zab = r#box(&initial_state(10), &[Arg::from("centipede")], &oracle).unwrap();
        assert_eq!(zab.pim(), FALLBACK_LEGS);
        assert_eq!(zab.bim(), "White");

        let oracle = ScriptedOracle::new(["2"]).then("black");
        let zab = r#box(&initial_state(10), &[Arg::from("penguin")], &oracle).unwrap();
        assert_eq!(zab.pim(), 2);
        assert_eq!(zab.bim(), FALLBACK_COLOR);
    }

    #[test]
    fn box_without_oracle_uses_both_fallbacks() {
        let zab = r#box(&initial_state(10), &[Arg::from("cow")], &FailingOracle).unwrap();
        assert_eq!(zab.pim(), FALLBACK_LEGS);
        assert_eq!(zab.bim(), FALLBACK_COLOR);
    }

    #[test]
    fn box_requires_an_animal() {
        assert!(matches!(
            r#box(&initial_state(10), &[], &FailingOracle),
            Err(ZabError::InvalidArgument { .. })
        ));
    }
}
