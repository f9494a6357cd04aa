//! Fixed lookup tables used by the catalogue.

/// The colors oracle-resolved bims are constrained to.
pub const PALETTE: [&str; 35] = [
    "Pink",
    "Crimson",
    "Brown",
    "Maroon",
    "Red",
    "Salmon",
    "Coral",
    "Chocolate",
    "Orange",
    "Gold",
    "Ivory",
    "Yellow",
    "Olive",
    "Chartreuse",
    "Lime",
    "Green",
    "Aquamarine",
    "Turquoise",
    "Azure",
    "Cyan",
    "Teal",
    "Navy",
    "Blue",
    "Lavender",
    "Indigo",
    "Plum",
    "Violet",
    "Magenta",
    "Purple",
    "Tan",
    "Beige",
    "White",
    "Silver",
    "Gray",
    "Black",
];

pub const ROYGBIV: [&str; 7] = ["Red", "Orange", "Yellow", "Green", "Blue", "Indigo", "Violet"];

const SHAPE_SIDES: &[(&str, i64)] = &[
    ("triangle", 3),
    ("square", 4),
    ("rectangle", 4),
    ("rhombus", 4),
    ("parallelogram", 4),
    ("pentagon", 5),
    ("hexagon", 6),
    ("heptagon", 7),
    ("octagon", 8),
    ("nonagon", 9),
    ("decagon", 10),
    ("circle", 0),
    ("ellipse", 0),
    ("oval", 0),
];

/// The palette joined for inclusion in a prompt.
pub fn palette_list() -> String {
    PALETTE.join(", ")
}

/// Exact palette membership.
pub fn palette_exact(color: &str) -> Option<&'static str> {
    PALETTE.iter().copied().find(|c| *c == color)
}

/// Case-insensitive palette lookup, returning the palette's spelling.
pub fn palette_match(color: &str) -> Option<&'static str> {
    PALETTE.iter().copied().find(|c| c.eq_ignore_ascii_case(color))
}

/// Side count of a known shape, ignoring case.
pub fn known_sides(shape: &str) -> Option<i64> {
    let shape = shape.to_lowercase();
    SHAPE_SIDES
        .iter()
        .find(|(name, _)| *name == shape)
        .map(|(_, sides)| *sides)
}
