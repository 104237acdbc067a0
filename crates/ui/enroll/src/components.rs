use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub mod inputs;
pub mod progress;

/// Center a fixed-width column inside `area`, full height.
pub fn centered_column(area: Rect, width: u16) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .split(area);
    chunks[1]
}
