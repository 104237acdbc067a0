//! Progress rail across the top of the wizard: one marker per step,
//! completed/current/upcoming styled apart.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use registration::{StepDescriptor, StepIcon};

use crate::theme::Theme;

/// Glyph shown next to the active step's title.
pub fn icon_glyph(icon: StepIcon) -> &'static str {
    match icon {
        StepIcon::User => "👤",
        StepIcon::Users => "👥",
        StepIcon::Shirt => "👕",
        StepIcon::Trophy => "🏆",
        StepIcon::Heart => "♥",
        StepIcon::Phone => "📞",
    }
}

pub fn rail(steps: &[StepDescriptor], current: usize, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(steps.len() * 2);
    for (index, _step) in steps.iter().enumerate() {
        let marker = if index < current {
            Span::styled("✓", Style::default().fg(theme.roles.success))
        } else if index == current {
            Span::styled(
                "●",
                Style::default()
                    .fg(theme.roles.primary)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("○", Style::default().fg(theme.roles.muted))
        };
        spans.push(marker);
        if index + 1 < steps.len() {
            spans.push(Span::raw(" "));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::default_dark_theme;
    use pretty_assertions::assert_eq;
    use registration::generate_steps;

    #[test]
    fn rail_has_one_marker_per_step() {
        let steps = generate_steps(3);
        let line = rail(&steps, 4, &default_dark_theme());
        // markers plus separators
        assert_eq!(line.spans.len(), steps.len() * 2 - 1);
    }

    #[test]
    fn markers_reflect_progress() {
        let steps = generate_steps(1);
        let line = rail(&steps, 2, &default_dark_theme());
        assert_eq!(line.spans[0].content, "✓");
        assert_eq!(line.spans[2].content, "✓");
        assert_eq!(line.spans[4].content, "●");
        assert_eq!(line.spans[6].content, "○");
    }
}
