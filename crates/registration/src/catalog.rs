//! Option catalogs backing the wizard's select fields.
//!
//! These are presentation vocabularies, not validation whitelists: the
//! rules in `validate` only check that a required selection was made.
//! The front-end may substitute venue or country lists from its config.

pub const POSITIONS: [&str; 12] = [
    "Goalkeeper",
    "Defender",
    "Midfielder",
    "Forward",
    "Center Back",
    "Full Back",
    "Wing Back",
    "Defensive Midfielder",
    "Central Midfielder",
    "Attacking Midfielder",
    "Winger",
    "Striker",
];

pub const COUNTRIES: [&str; 17] = [
    "Trinidad and Tobago",
    "United States",
    "Canada",
    "United Kingdom",
    "Brazil",
    "Argentina",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Netherlands",
    "Portugal",
    "Mexico",
    "Jamaica",
    "Barbados",
    "Guyana",
    "Suriname",
];

pub const STRONG_FOOT: [&str; 3] = ["Left", "Right", "Both"];

pub const SHIRT_SIZES: [&str; 6] = ["XS", "S", "M", "L", "XL", "XXL"];

/// Training venues currently offered by the academy.
pub const VENUES: [&str; 2] = [
    "Nelson Mandela Park Port of Spain",
    "Stalagnite Park Cunupia",
];
