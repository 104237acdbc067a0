//! Focusable form fields for the wizard pages.
//!
//! Each field renders as a bordered box with the label in the title and
//! an error line underneath. Text and secret fields delegate editing to
//! `tui-input`; select fields cycle a fixed option list with Left/Right
//! and clear with Backspace.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols::border,
    widgets::{Block, Paragraph},
    Frame,
};
use tui_input::backend::crossterm::EventHandler as _;
use tui_input::Input;

use crate::theme::Theme;

/// How a field captures its value.
enum FieldControl {
    Text(Input),
    /// Free text with the echo masked.
    Secret(Input),
    Select {
        options: Vec<String>,
        selected: Option<usize>,
    },
}

pub struct InputField {
    pub label: String,
    control: FieldControl,
    pub error: Option<String>,
}

impl InputField {
    /// Rows one field occupies, error line included.
    pub const HEIGHT: u16 = 4;

    pub fn text(label: impl Into<String>, value: &str) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Text(Input::new(value.to_string())),
            error: None,
        }
    }

    pub fn secret(label: impl Into<String>, value: &str) -> Self {
        Self {
            label: label.into(),
            control: FieldControl::Secret(Input::new(value.to_string())),
            error: None,
        }
    }

    pub fn select(label: impl Into<String>, options: Vec<String>, value: &str) -> Self {
        let selected = options.iter().position(|option| option == value);
        Self {
            label: label.into(),
            control: FieldControl::Select { options, selected },
            error: None,
        }
    }

    pub fn value(&self) -> String {
        match &self.control {
            FieldControl::Text(input) | FieldControl::Secret(input) => input.value().to_string(),
            FieldControl::Select { options, selected } => selected
                .and_then(|index| options.get(index))
                .cloned()
                .unwrap_or_default(),
        }
    }

    /// Feed a key to the field; returns whether the field consumed it.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match &mut self.control {
            FieldControl::Select { options, selected } => {
                if options.is_empty() {
                    return false;
                }
                match key.code {
                    KeyCode::Left => {
                        *selected = Some(match *selected {
                            Some(0) | None => options.len() - 1,
                            Some(index) => index - 1,
                        });
                        true
                    }
                    KeyCode::Right | KeyCode::Char(' ') => {
                        *selected = Some(match *selected {
                            None => 0,
                            Some(index) => (index + 1) % options.len(),
                        });
                        true
                    }
                    KeyCode::Backspace | KeyCode::Delete => {
                        *selected = None;
                        true
                    }
                    _ => false,
                }
            }
            FieldControl::Text(input) | FieldControl::Secret(input) => input
                .handle_event(&crossterm::event::Event::Key(key))
                .is_some(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let box_area = Rect {
            height: area.height.min(3),
            ..area
        };
        let title_style = if focused {
            Style::default()
                .fg(theme.roles.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.roles.subtle_text)
        };
        let border_style = if self.error.is_some() {
            Style::default().fg(theme.roles.danger)
        } else if focused {
            Style::default().fg(theme.roles.primary)
        } else {
            Style::default().fg(theme.roles.muted)
        };
        let block = Block::bordered()
            .title(self.label.as_str())
            .title_style(title_style)
            .border_set(border::ROUNDED)
            .border_style(border_style);

        // keep 2 for borders and 1 for cursor
        let width = box_area.width.max(3) - 3;
        match &self.control {
            FieldControl::Text(input) => {
                let scroll = input.visual_scroll(width as usize);
                let paragraph = Paragraph::new(input.value())
                    .style(Style::default().fg(theme.roles.text))
                    .scroll((0, scroll as u16))
                    .block(block);
                frame.render_widget(paragraph, box_area);
                if focused {
                    let x = input.visual_cursor().max(scroll) - scroll + 1;
                    frame.set_cursor_position((box_area.x + x as u16, box_area.y + 1));
                }
            }
            FieldControl::Secret(input) => {
                let scroll = input.visual_scroll(width as usize);
                let masked: String = input.value().chars().map(|_| '•').collect();
                let paragraph = Paragraph::new(masked)
                    .style(Style::default().fg(theme.roles.text))
                    .scroll((0, scroll as u16))
                    .block(block);
                frame.render_widget(paragraph, box_area);
                if focused {
                    let x = input.visual_cursor().max(scroll) - scroll + 1;
                    frame.set_cursor_position((box_area.x + x as u16, box_area.y + 1));
                }
            }
            FieldControl::Select { options, selected } => {
                let value = selected
                    .and_then(|index| options.get(index))
                    .map(String::as_str)
                    .unwrap_or("—");
                let text = if focused {
                    format!("◂ {value} ▸")
                } else {
                    value.to_string()
                };
                let paragraph = Paragraph::new(text)
                    .style(Style::default().fg(theme.roles.text))
                    .block(block);
                frame.render_widget(paragraph, box_area);
            }
        }

        if area.height > 3 {
            if let Some(message) = &self.error {
                let error_area = Rect {
                    x: area.x + 1,
                    y: area.y + 3,
                    width: area.width.saturating_sub(1),
                    height: 1,
                };
                frame.render_widget(
                    Paragraph::new(message.as_str())
                        .style(Style::default().fg(theme.roles.danger)),
                    error_area,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn foot_select(value: &str) -> InputField {
        InputField::select(
            "Strong Foot",
            vec!["Left".into(), "Right".into(), "Both".into()],
            value,
        )
    }

    #[test]
    fn text_field_round_trips_its_value() {
        let mut field = InputField::text("City", "Arima");
        assert_eq!(field.value(), "Arima");
        assert!(field.handle_key(KeyEvent::from(KeyCode::Char('!'))));
        assert_eq!(field.value(), "Arima!");
    }

    #[test]
    fn select_starts_on_the_matching_option() {
        let field = foot_select("Right");
        assert_eq!(field.value(), "Right");
    }

    #[test]
    fn select_cycles_with_arrows_and_wraps() {
        let mut field = foot_select("");
        assert_eq!(field.value(), "");

        assert!(field.handle_key(KeyEvent::from(KeyCode::Right)));
        assert_eq!(field.value(), "Left");

        // Wraps backwards from the first option to the last.
        assert!(field.handle_key(KeyEvent::from(KeyCode::Left)));
        assert_eq!(field.value(), "Both");

        assert!(field.handle_key(KeyEvent::from(KeyCode::Right)));
        assert_eq!(field.value(), "Left");
    }

    #[test]
    fn select_clears_with_backspace() {
        let mut field = foot_select("Both");
        assert!(field.handle_key(KeyEvent::from(KeyCode::Backspace)));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn select_ignores_character_keys() {
        let mut field = foot_select("Left");
        assert!(!field.handle_key(KeyEvent::from(KeyCode::Char('x'))));
        assert_eq!(field.value(), "Left");
    }
}
