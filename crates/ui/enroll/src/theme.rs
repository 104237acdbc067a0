//! Semantic color roles for the enroll TUI. Widgets ask for roles
//! (`primary`, `danger`, ...) instead of concrete colors so the palette
//! stays swappable in one place.

use ratatui::style::Color;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RoleColors {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub subtle_text: Color,
    pub inverted_text: Color,
    pub selection: Color,

    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,
    pub muted: Color,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Theme {
    pub name: String,
    pub roles: RoleColors,
}

/// Default dark theme: pitch-green primary, tuned for contrast on the
/// common dark terminal backgrounds.
pub fn default_dark_theme() -> Theme {
    let roles = RoleColors {
        background: Color::Rgb(14, 18, 14),
        surface: Color::Rgb(26, 32, 26),
        text: Color::Rgb(220, 220, 220),
        subtle_text: Color::Rgb(130, 130, 130),
        inverted_text: Color::Rgb(0, 0, 0),
        selection: Color::Rgb(58, 91, 156),

        primary: Color::Rgb(102, 187, 106), // pitch green
        accent: Color::Rgb(99, 205, 218),
        success: Color::Rgb(129, 199, 132),
        warning: Color::Rgb(255, 214, 102),
        danger: Color::Rgb(239, 83, 80),
        info: Color::Rgb(144, 202, 249),
        muted: Color::Rgb(70, 75, 70),
    };
    Theme {
        name: "dark".into(),
        roles,
    }
}
