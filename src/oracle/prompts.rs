//! Prompt templates sent to the oracle.

use crate::functions::tables::palette_list;

pub fn translation(noun: &str) -> String {
    format!(
        "Translate the English noun '{noun}' to Spanish. Respond with only the Spanish word, no explanation."
    )
}

pub fn shape_sides(shape: &str) -> String {
    format!("How many sides does the 2D shape '{shape}' have? Respond with only a number.")
}

pub fn animal_color(animal: &str) -> String {
    format!(
        "What color is most associated with a {animal}? Choose from this list: {}. Respond with only the color name.",
        palette_list()
    )
}

pub fn color_between(current: &str, color: &str) -> String {
    format!(
        "What color would be between {current} and {color}? Choose from this list: {}. Respond with only the color name.",
        palette_list()
    )
}

pub fn leg_count(animal: &str) -> String {
    format!("How many legs does a {animal} have? Respond with only a number.")
}

pub fn predominant_color(animal: &str) -> String {
    format!(
        "What is the predominant color of a {animal}? Choose from this list: {}. Respond with only the color name.",
        palette_list()
    )
}
