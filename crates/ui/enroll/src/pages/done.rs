use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame,
};
use registration::SubmissionReceipt;

use super::Page;
use crate::{
    action::Action,
    theme::{default_dark_theme, Theme},
    tui::{Event, EventResponse},
};

/// Success screen shown once the sink has accepted the registration.
pub struct DonePage {
    theme: Theme,
    receipt: Option<SubmissionReceipt>,
}

impl DonePage {
    pub fn new() -> Self {
        Self {
            theme: default_dark_theme(),
            receipt: None,
        }
    }
}

impl Default for DonePage {
    fn default() -> Self {
        Self::new()
    }
}

impl Page for DonePage {
    fn name(&self) -> &str {
        "done"
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        let Some(Event::Key(key)) = event else {
            return Ok(None);
        };
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => {
                Ok(Some(EventResponse::Stop(Action::NewRegistration)))
            }
            KeyCode::Esc | KeyCode::Char('q') => Ok(Some(EventResponse::Stop(Action::Quit))),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::SubmissionAccepted(receipt) => self.receipt = Some(receipt),
            Action::NewRegistration => self.receipt = None,
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.roles.background)),
            area,
        );

        let [_, body, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Registration successful!",
                Style::default()
                    .fg(self.theme.roles.success)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Welcome to Project Pro!",
                Style::default().fg(self.theme.roles.text),
            )),
        ];
        if let Some(receipt) = &self.receipt {
            lines.push(Line::from(Span::styled(
                format!(
                    "{} player(s) registered  ·  receipt {}",
                    receipt.players_registered, receipt.id
                ),
                Style::default().fg(self.theme.roles.subtle_text),
            )));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Enter/n: register another family  ·  q: quit",
            Style::default().fg(self.theme.roles.subtle_text),
        )));

        frame.render_widget(Paragraph::new(Text::from(lines)).centered(), body);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;
    use pretty_assertions::assert_eq;

    fn receipt() -> SubmissionReceipt {
        SubmissionReceipt {
            id: "REG-0001".into(),
            players_registered: 2,
        }
    }

    #[test]
    fn settlement_is_remembered_until_the_next_registration() {
        let mut page = DonePage::new();
        page.update(Action::SubmissionAccepted(receipt())).unwrap();
        assert_eq!(page.receipt.as_ref().map(|r| r.players_registered), Some(2));

        page.update(Action::NewRegistration).unwrap();
        assert_eq!(page.receipt, None);
    }

    #[test]
    fn keys_map_to_restart_and_quit() {
        let mut page = DonePage::new();
        let restart = page
            .handle_events(Some(Event::Key(KeyEvent::from(KeyCode::Enter))))
            .unwrap();
        assert_eq!(restart, Some(EventResponse::Stop(Action::NewRegistration)));

        let quit = page
            .handle_events(Some(Event::Key(KeyEvent::from(KeyCode::Char('q')))))
            .unwrap();
        assert_eq!(quit, Some(EventResponse::Stop(Action::Quit)));
    }
}
