use color_eyre::Result;
use ratatui::layout::Rect;

use crate::{
    action::Action,
    config::Config,
    theme::Theme,
    tui::{Event, EventResponse, Frame},
};

mod done;
mod registration;

pub use done::DonePage;
pub use registration::RegistrationPage;

/// A full-screen view. The app keeps a page stack and forwards events
/// and actions to the active one; a page reacts by returning follow-up
/// actions.
pub trait Page {
    fn name(&self) -> &str;

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        let _ = config;
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        let _ = theme;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        let _ = event;
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let _ = action;
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()>;
}
