//! Application shell: owns the terminal, the page stack and the action
//! channel. Events flow from the terminal task to the active page;
//! pages answer with actions; the shell executes the cross-page ones
//! (navigation, submission, lifecycle) and forwards the rest.

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use registration::SubmissionSink;
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::{
    action::Action,
    config::Config,
    pages::{DonePage, Page, RegistrationPage},
    services::store::JsonFileSink,
    theme::{default_dark_theme, Theme},
    tui::{Event, EventResponse, Tui},
};

pub struct App {
    theme: Theme,
    pages: Vec<Box<dyn Page>>,
    active_page: usize,
    sink: Arc<dyn SubmissionSink>,
    should_quit: bool,
    should_suspend: bool,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::new()?;
        let theme = default_dark_theme();
        let sink: Arc<dyn SubmissionSink> =
            Arc::new(JsonFileSink::new(config.config.data_dir.clone()));
        let today = chrono::Local::now().date_naive();

        let mut pages: Vec<Box<dyn Page>> =
            vec![Box::new(RegistrationPage::new(today)), Box::new(DonePage::new())];
        for page in pages.iter_mut() {
            page.register_config_handler(config.clone())?;
            page.register_theme(theme.clone())?;
        }

        Ok(Self {
            theme,
            pages,
            active_page: 0,
            sink,
            should_quit: false,
            should_suspend: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

        let mut tui = Tui::new()?.tick_rate(4.0).frame_rate(30.0);
        tui.enter()?;

        loop {
            if let Some(event) = tui.next().await {
                let stop_event_propagation = self
                    .pages
                    .get_mut(self.active_page)
                    .and_then(|page| page.handle_events(Some(event.clone())).ok())
                    .map(|response| match response {
                        Some(EventResponse::Continue(action)) => {
                            action_tx.send(action).ok();
                            false
                        }
                        Some(EventResponse::Stop(action)) => {
                            action_tx.send(action).ok();
                            true
                        }
                        _ => false,
                    })
                    .unwrap_or(false);

                if !stop_event_propagation {
                    match event {
                        Event::Quit => {
                            action_tx.send(Action::Quit).ok();
                        }
                        Event::Tick => {
                            action_tx.send(Action::Tick).ok();
                        }
                        Event::Render => {
                            action_tx.send(Action::Render).ok();
                        }
                        Event::Resize(x, y) => {
                            action_tx.send(Action::Resize(x, y)).ok();
                        }
                        Event::Key(key) => {
                            if let Some(action) = global_key_action(key) {
                                action_tx.send(action).ok();
                            }
                        }
                        _ => {}
                    }
                }
            }

            while let Ok(action) = action_rx.try_recv() {
                if !matches!(action, Action::Tick | Action::Render) {
                    debug!("{action}");
                }
                match action {
                    Action::Tick => {}
                    Action::Quit => self.should_quit = true,
                    Action::Suspend => self.should_suspend = true,
                    Action::Resume => self.should_suspend = false,
                    Action::Resize(w, h) => {
                        tui.resize(Rect::new(0, 0, w, h))?;
                        tui.draw(|frame| {
                            self.render(frame).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Render => {
                        tui.draw(|frame| {
                            self.render(frame).unwrap_or_else(|err| {
                                action_tx
                                    .send(Action::Error(format!("Failed to draw: {err:?}")))
                                    .ok();
                            })
                        })?;
                    }
                    Action::Navigate(page) => {
                        self.active_page = page.min(self.pages.len().saturating_sub(1));
                    }
                    Action::Submit(payload) => {
                        // One task per submission; the controller refuses a
                        // second one while this settles.
                        let sink = Arc::clone(&self.sink);
                        let tx = action_tx.clone();
                        tokio::task::spawn_blocking(move || {
                            let settled = match sink.submit(&payload) {
                                Ok(receipt) => Action::SubmissionAccepted(receipt),
                                Err(err) => Action::SubmissionFailed(err.to_string()),
                            };
                            tx.send(settled).ok();
                        });
                        continue;
                    }
                    Action::SubmissionAccepted(_)
                    | Action::SubmissionFailed(_)
                    | Action::NewRegistration => {
                        // Settlement concerns both pages: the wizard closes
                        // its in-flight phase, the done page keeps the receipt.
                        if matches!(action, Action::NewRegistration) {
                            self.active_page = 0;
                        }
                        for page in self.pages.iter_mut() {
                            if let Some(follow_up) = page.update(action.clone())? {
                                action_tx.send(follow_up).ok();
                            }
                        }
                        continue;
                    }
                    Action::Error(ref message) => {
                        error!("{message}");
                    }
                    _ => {}
                }

                if let Some(page) = self.pages.get_mut(self.active_page) {
                    if let Some(follow_up) = page.update(action)? {
                        action_tx.send(follow_up).ok();
                    }
                }
            }

            if self.should_suspend {
                tui.suspend()?;
                action_tx.send(Action::Resume).ok();
                tui = Tui::new()?;
                tui.enter()?;
            } else if self.should_quit {
                tui.stop()?;
                break;
            }
        }
        tui.exit()?;
        Ok(())
    }

    fn render(&mut self, frame: &mut Frame<'_>) -> Result<()> {
        let vertical_layout =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).split(frame.area());

        if let Some(page) = self.pages.get_mut(self.active_page) {
            page.draw(frame, vertical_layout[0])?;
        }

        let page_name = self
            .pages
            .get(self.active_page)
            .map(|page| page.name())
            .unwrap_or("root");
        let footer = vertical_layout[1];
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(footer);

        let left = Paragraph::new(Line::from(vec![
            Span::styled(
                format!(" {} ", env!("CARGO_PKG_NAME")),
                Style::default()
                    .fg(self.theme.roles.inverted_text)
                    .bg(self.theme.roles.primary),
            ),
            Span::raw(" "),
            Span::styled(page_name, Style::default().fg(self.theme.roles.subtle_text)),
        ]));
        let right = Paragraph::new(Line::from(Span::styled(
            format!("v{} ", env!("CARGO_PKG_VERSION")),
            Style::default().fg(self.theme.roles.subtle_text),
        )))
        .alignment(ratatui::layout::Alignment::Right);

        frame.render_widget(left, cols[0]);
        frame.render_widget(right, cols[1]);
        Ok(())
    }
}

/// Keys handled regardless of the active page.
fn global_key_action(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('z') => Some(Action::Suspend),
            _ => None,
        };
    }
    None
}
