//! Player-facing descriptions of the playable functions.

/// What a player is told about a function, and what it really does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionInfo {
    pub name: &'static str,
    /// Deliberately vague parameter description shown during play
    pub hint: &'static str,
    pub example: &'static str,
    /// The real effect, revealed after the game
    pub effect: &'static str,
}

impl FunctionInfo {
    /// The name with its first letter capitalized, as shown to players.
    pub fn title(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Two-line hint block used in briefings.
    pub fn hint_block(&self) -> String {
        format!(
            "{} - {}\n      - Example: {}",
            self.title(),
            self.hint,
            self.example
        )
    }
}

/// The fourteen functions a game can offer. `vin` and `cin` are registered
/// but never offered.
pub static PLAYABLE: [FunctionInfo; 14] = [
    FunctionInfo {
        name: "fin",
        hint: "Takes no parameters",
        example: "Fin()",
        effect: "Reverses the name",
    },
    FunctionInfo {
        name: "bin",
        hint: "Takes no parameters",
        example: "Bin()",
        effect: "Changes name to 'bad name, please change me immediately!'",
    },
    FunctionInfo {
        name: "stin",
        hint: "Takes a single noun",
        example: "Stin(\"cat\")",
        effect: "Changes name to Spanish translation of the input noun",
    },
    FunctionInfo {
        name: "hin",
        hint: "Takes a positive integer",
        example: "Hin(3)",
        effect: "Keeps first N characters of the name",
    },
    FunctionInfo {
        name: "min",
        hint: "Takes a single word",
        example: "Min(\"hello\")",
        effect: "Changes name to input string without its first character",
    },
    FunctionInfo {
        name: "tox",
        hint: "Takes no parameters",
        example: "Tox()",
        effect: "Doubles the pim value",
    },
    FunctionInfo {
        name: "plox",
        hint: "Takes a number from 1-10",
        example: "Plox(4)",
        effect: "Adds the input number (1-10) to pim",
    },
    FunctionInfo {
        name: "rox",
        hint: "Takes the name of a 2D shape",
        example: "Rox(\"triangle\")",
        effect: "Adds the number of sides of the shape to pim",
    },
    FunctionInfo {
        name: "sox",
        hint: "Takes no parameters",
        example: "Sox()",
        effect: "Changes bim to 'Red'",
    },
    FunctionInfo {
        name: "vox",
        hint: "Takes the name of an animal",
        example: "Vox(\"elephant\")",
        effect: "Changes bim to color associated with the input animal",
    },
    FunctionInfo {
        name: "lox",
        hint: "Takes the name of a color",
        example: "Lox(\"blue\")",
        effect: "Changes bim to intermediate color between current bim and input color",
    },
    FunctionInfo {
        name: "mox",
        hint: "Takes a number from 1-7",
        example: "Mox(3)",
        effect: "Changes bim to ROYGBIV color at position N (1-7)",
    },
    FunctionInfo {
        name: "hox",
        hint: "Takes no parameters",
        example: "Hox()",
        effect: "Resets to name='Cama', bim='Red', pim=1",
    },
    FunctionInfo {
        name: "box",
        hint: "Takes the name of an animal",
        example: "Box(\"spider\")",
        effect: "Changes bim to animal's color, pim to animal's leg count",
    },
];

pub fn lookup(name: &str) -> Option<&'static FunctionInfo> {
    PLAYABLE.iter().find(|info| info.name == name)
}

pub fn playable_names() -> Vec<String> {
    PLAYABLE.iter().map(|info| info.name.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_capitalizes() {
        assert_eq!(lookup("plox").unwrap().title(), "Plox");
    }

    #[test]
    fn hint_block_matches_briefing_layout() {
        assert_eq!(
            lookup("mox").unwrap().hint_block(),
            "Mox - Takes a number from 1-7\n      - Example: Mox(3)"
        );
    }

    #[test]
    fn placeholders_are_not_playable() {
        assert!(lookup("vin").is_none());
        assert!(lookup("cin").is_none());
        assert_eq!(playable_names().len(), 14);
    }
}
