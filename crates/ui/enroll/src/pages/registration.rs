//! The wizard page: progress rail, the active step's form fields and a
//! status banner. All registration semantics live in the domain crate's
//! `WizardController`; this page binds form widgets to draft fields and
//! turns key presses into controller calls.

use chrono::NaiveDate;
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Paragraph},
    Frame,
};
use registration::{
    catalog, validate::player_error_key, GuardianField, PlayerField, PlayerSection, StepKind,
    SubmissionError, SubmitPhase, WizardController, MAX_PLAYERS, MIN_PLAYERS,
};

use super::Page;
use crate::{
    action::Action,
    components::{centered_column, inputs::InputField, progress},
    config::Config,
    theme::{default_dark_theme, Theme},
    tui::{Event, EventResponse},
};

const FORM_WIDTH: u16 = 64;

/// Where a field widget's committed value goes.
#[derive(Debug, Clone, Copy)]
enum FieldTarget {
    Guardian(GuardianField),
    Player(usize, PlayerField),
    PlayerCount,
}

struct BoundField {
    target: FieldTarget,
    field: InputField,
}

impl BoundField {
    fn guardian(field: GuardianField, value: &str) -> Self {
        let widget = match field {
            GuardianField::Password | GuardianField::PasswordConfirmation => {
                InputField::secret(field.label(), value)
            }
            _ => InputField::text(field.label(), value),
        };
        Self {
            target: FieldTarget::Guardian(field),
            field: widget,
        }
    }

    fn text(index: usize, field: PlayerField, label: String, value: &str) -> Self {
        Self {
            target: FieldTarget::Player(index, field),
            field: InputField::text(label, value),
        }
    }

    fn select(index: usize, field: PlayerField, options: Vec<String>, value: &str) -> Self {
        Self {
            target: FieldTarget::Player(index, field),
            field: InputField::select(field.label(), options, value),
        }
    }
}

pub struct RegistrationPage {
    config: Config,
    theme: Theme,
    wizard: WizardController,
    fields: Vec<BoundField>,
    focus: usize,
}

impl RegistrationPage {
    pub fn new(today: NaiveDate) -> Self {
        let mut page = Self {
            config: Config::default(),
            theme: default_dark_theme(),
            wizard: WizardController::new(today),
            fields: Vec::new(),
            focus: 0,
        };
        page.rebuild_fields();
        page
    }

    /// Recreate the widget list for the current step from the draft.
    fn rebuild_fields(&mut self) {
        let draft = self.wizard.draft();
        let fields = match self.wizard.current_kind() {
            StepKind::Guardian => {
                let guardian = &draft.guardian;
                vec![
                    BoundField::guardian(GuardianField::Name, &guardian.name),
                    BoundField::guardian(GuardianField::Email, &guardian.email),
                    BoundField::guardian(GuardianField::Password, &guardian.password),
                    BoundField::guardian(
                        GuardianField::PasswordConfirmation,
                        &guardian.password_confirmation,
                    ),
                ]
            }
            StepKind::PlayerCount => {
                let options = (MIN_PLAYERS..=MAX_PLAYERS).map(|n| n.to_string()).collect();
                vec![BoundField {
                    target: FieldTarget::PlayerCount,
                    field: InputField::select(
                        "Number of Players",
                        options,
                        &draft.player_count().to_string(),
                    ),
                }]
            }
            StepKind::Player { index, section } => {
                let player = draft.player(index).cloned().unwrap_or_default();
                match section {
                    PlayerSection::Basics => vec![
                        BoundField::text(
                            index,
                            PlayerField::Name,
                            PlayerField::Name.label().into(),
                            &player.name,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::DateOfBirth,
                            format!("{} (YYYY-MM-DD)", PlayerField::DateOfBirth.label()),
                            &player.date_of_birth,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::PhotoUrl,
                            format!("{} (optional)", PlayerField::PhotoUrl.label()),
                            &player.photo_url,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::City,
                            PlayerField::City.label().into(),
                            &player.city,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::School,
                            PlayerField::School.label().into(),
                            &player.school,
                        ),
                        BoundField::select(
                            index,
                            PlayerField::Country,
                            self.config.catalogs.countries.clone(),
                            &player.country,
                        ),
                    ],
                    PlayerSection::Sports => vec![
                        BoundField::select(
                            index,
                            PlayerField::Position,
                            catalog::POSITIONS.iter().map(|p| p.to_string()).collect(),
                            &player.position,
                        ),
                        BoundField::select(
                            index,
                            PlayerField::StrongFoot,
                            catalog::STRONG_FOOT.iter().map(|f| f.to_string()).collect(),
                            &player.strong_foot,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::SportsHistory,
                            format!("{} (optional)", PlayerField::SportsHistory.label()),
                            &player.sports_history,
                        ),
                        BoundField::select(
                            index,
                            PlayerField::PreferredLocation,
                            self.config.catalogs.venues.clone(),
                            &player.preferred_location,
                        ),
                    ],
                    PlayerSection::Personal => vec![
                        BoundField::text(
                            index,
                            PlayerField::Hobbies,
                            format!("{} (optional)", PlayerField::Hobbies.label()),
                            &player.hobbies,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::MedicalNotes,
                            format!("{} (optional)", PlayerField::MedicalNotes.label()),
                            &player.medical_notes,
                        ),
                        BoundField::select(
                            index,
                            PlayerField::ShirtSize,
                            catalog::SHIRT_SIZES.iter().map(|s| s.to_string()).collect(),
                            &player.shirt_size,
                        ),
                    ],
                    PlayerSection::Emergency => vec![
                        BoundField::text(
                            index,
                            PlayerField::EmergencyContactName,
                            PlayerField::EmergencyContactName.label().into(),
                            &player.emergency_contact_name,
                        ),
                        BoundField::text(
                            index,
                            PlayerField::EmergencyContactPhone,
                            PlayerField::EmergencyContactPhone.label().into(),
                            &player.emergency_contact_phone,
                        ),
                    ],
                }
            }
        };
        self.fields = fields;
        self.focus = 0;
        self.apply_errors();
    }

    fn error_key(target: FieldTarget) -> String {
        match target {
            FieldTarget::Guardian(field) => field.key().to_string(),
            FieldTarget::Player(index, field) => player_error_key(index, field),
            FieldTarget::PlayerCount => "player_count".into(),
        }
    }

    /// Pull the controller's error map into the widgets' inline errors.
    fn apply_errors(&mut self) {
        let errors = self.wizard.errors().clone();
        for bound in &mut self.fields {
            bound.field.error = errors.get(&Self::error_key(bound.target)).cloned();
        }
    }

    /// Write one widget's value through to the draft.
    fn commit_field(&mut self, index: usize) {
        let Some((target, value)) = self
            .fields
            .get(index)
            .map(|bound| (bound.target, bound.field.value()))
        else {
            return;
        };
        match target {
            FieldTarget::Guardian(field) => self.wizard.edit_guardian(field, &value),
            FieldTarget::Player(player, field) => self.wizard.edit_player(player, field, &value),
            FieldTarget::PlayerCount => {
                if let Ok(count) = value.parse::<usize>() {
                    self.wizard.set_player_count(count);
                }
            }
        }
    }

    fn commit_all(&mut self) {
        for index in 0..self.fields.len() {
            self.commit_field(index);
        }
    }

    fn focus_next(&mut self) {
        self.commit_field(self.focus);
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    fn focus_prev(&mut self) {
        self.commit_field(self.focus);
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<EventResponse<Action>>> {
        if self.wizard.is_submitting() {
            return Ok(None);
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_next();
                Ok(None)
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_prev();
                Ok(None)
            }
            KeyCode::Enter => Ok(Some(EventResponse::Stop(Action::NextStep))),
            KeyCode::Esc => Ok(Some(EventResponse::Stop(Action::PrevStep))),
            _ => {
                if let Some(bound) = self.fields.get_mut(self.focus) {
                    if bound.field.handle_key(key) {
                        bound.field.error = None;
                    }
                }
                Ok(None)
            }
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let step = self.wizard.current_step();
        let title = Line::from(Span::styled(
            "Project Pro Enrollment",
            Style::default()
                .fg(self.theme.roles.primary)
                .add_modifier(Modifier::BOLD),
        ));
        let subtitle = Line::from(vec![
            Span::raw(format!("{} ", progress::icon_glyph(step.icon))),
            Span::styled(
                step.title.clone(),
                Style::default().fg(self.theme.roles.text),
            ),
            Span::styled(
                format!(
                    "  ·  Step {} of {}",
                    self.wizard.step_index() + 1,
                    self.wizard.step_count()
                ),
                Style::default().fg(self.theme.roles.subtle_text),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(Text::from(vec![title, subtitle])).centered(),
            area,
        );
    }

    fn render_form(&self, frame: &mut Frame, area: Rect) {
        let column = centered_column(area, FORM_WIDTH.min(area.width));
        let per_field = InputField::HEIGHT;
        let visible = ((column.height / per_field).max(1)) as usize;
        // Window the field list so the focused field stays on screen.
        let start = (self.focus + 1).saturating_sub(visible);

        let editing = !self.wizard.is_submitting();
        let mut y = column.y;
        for (index, bound) in self.fields.iter().enumerate().skip(start) {
            if y + per_field > column.y + column.height {
                break;
            }
            let rect = Rect {
                x: column.x,
                y,
                width: column.width,
                height: per_field,
            };
            bound
                .field
                .render(frame, rect, &self.theme, editing && index == self.focus);
            y += per_field;
        }
    }

    fn render_banner(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = match self.wizard.phase() {
            SubmitPhase::Submitting => vec![Line::from(Span::styled(
                "Submitting registration…",
                Style::default().fg(self.theme.roles.info),
            ))],
            SubmitPhase::Failed(reason) => vec![
                Line::from(Span::styled(
                    reason.clone(),
                    Style::default()
                        .fg(self.theme.roles.danger)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Enter: try again  ·  Esc: back",
                    Style::default().fg(self.theme.roles.subtle_text),
                )),
            ],
            _ => {
                let advance = if self.wizard.is_last_step() {
                    "Enter: complete registration"
                } else {
                    "Enter: continue"
                };
                vec![Line::from(Span::styled(
                    format!("{advance}  ·  Esc: back  ·  Tab: next field  ·  Ctrl-C: quit"),
                    Style::default().fg(self.theme.roles.subtle_text),
                ))]
            }
        };
        frame.render_widget(Paragraph::new(Text::from(lines)).centered(), area);
    }
}

impl Page for RegistrationPage {
    fn name(&self) -> &str {
        "registration"
    }

    fn register_config_handler(&mut self, config: Config) -> Result<()> {
        self.config = config;
        self.rebuild_fields();
        Ok(())
    }

    fn register_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        Ok(())
    }

    fn handle_events(&mut self, event: Option<Event>) -> Result<Option<EventResponse<Action>>> {
        match event {
            Some(Event::Key(key)) => self.handle_key_event(key),
            _ => Ok(None),
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        match action {
            Action::NextStep => {
                if self.wizard.is_submitting() {
                    return Ok(None);
                }
                self.commit_all();
                if self.wizard.is_last_step() {
                    if let Some(payload) = self.wizard.begin_submit() {
                        return Ok(Some(Action::Submit(payload)));
                    }
                    self.apply_errors();
                } else if self.wizard.next() {
                    self.rebuild_fields();
                } else {
                    self.apply_errors();
                }
                Ok(None)
            }
            Action::PrevStep => {
                if self.wizard.is_submitting() {
                    return Ok(None);
                }
                self.commit_all();
                self.wizard.previous();
                self.rebuild_fields();
                Ok(None)
            }
            Action::SubmissionAccepted(receipt) => {
                self.wizard.finish_submit(Ok(receipt));
                Ok(Some(Action::Navigate(1)))
            }
            Action::SubmissionFailed(reason) => {
                self.wizard
                    .finish_submit(Err(SubmissionError::Rejected(reason)));
                Ok(None)
            }
            Action::NewRegistration => {
                self.wizard.reset();
                self.rebuild_fields();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.roles.background)),
            area,
        );

        let [header, rail, _, form, banner] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .areas(area);

        self.render_header(frame, header);
        frame.render_widget(
            Paragraph::new(progress::rail(
                self.wizard.steps(),
                self.wizard.step_index(),
                &self.theme,
            ))
            .centered(),
            rail,
        );
        self.render_form(frame, form);
        self.render_banner(frame, banner);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page() -> RegistrationPage {
        RegistrationPage::new(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
    }

    fn press(page: &mut RegistrationPage, code: KeyCode) -> Option<EventResponse<Action>> {
        page.handle_key_event(KeyEvent::from(code)).unwrap()
    }

    fn type_text(page: &mut RegistrationPage, text: &str) {
        for ch in text.chars() {
            press(page, KeyCode::Char(ch));
        }
    }

    #[test]
    fn guardian_step_binds_four_fields() {
        let page = page();
        assert_eq!(page.fields.len(), 4);
        assert_eq!(page.fields[0].field.label, "Parent Name");
        assert_eq!(page.fields[3].field.label, "Confirm Password");
    }

    #[test]
    fn blocked_next_surfaces_inline_errors_and_stays() {
        let mut page = page();
        page.update(Action::NextStep).unwrap();
        assert_eq!(page.wizard.step_index(), 0);
        assert_eq!(
            page.fields[1].field.error.as_deref(),
            Some("Parent email is required")
        );
    }

    #[test]
    fn filling_the_guardian_step_advances_to_the_count_select() {
        let mut page = page();
        type_text(&mut page, "Maya Persad");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "maya@example.com");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");

        assert_eq!(
            press(&mut page, KeyCode::Enter),
            Some(EventResponse::Stop(Action::NextStep))
        );
        page.update(Action::NextStep).unwrap();
        assert_eq!(page.wizard.current_kind(), StepKind::PlayerCount);
        assert_eq!(page.fields.len(), 1);
    }

    #[test]
    fn count_select_commits_into_the_draft() {
        let mut page = page();
        type_text(&mut page, "Maya Persad");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "maya@example.com");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");
        page.update(Action::NextStep).unwrap();

        // "1" is preselected; one step right selects "2".
        press(&mut page, KeyCode::Right);
        page.update(Action::NextStep).unwrap();
        assert_eq!(page.wizard.draft().player_count(), 2);
        assert_eq!(
            page.wizard.current_kind(),
            StepKind::Player {
                index: 0,
                section: PlayerSection::Basics
            }
        );
        assert_eq!(page.fields.len(), 6);
    }

    #[test]
    fn previous_returns_without_validation() {
        let mut page = page();
        type_text(&mut page, "Maya Persad");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "maya@example.com");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");
        press(&mut page, KeyCode::Tab);
        type_text(&mut page, "sufficient8");
        page.update(Action::NextStep).unwrap();

        page.update(Action::PrevStep).unwrap();
        assert_eq!(page.wizard.current_kind(), StepKind::Guardian);
        assert_eq!(page.fields.len(), 4);
        // Values round-trip through the rebuild.
        assert_eq!(page.fields[1].field.value(), "maya@example.com");
    }

    #[test]
    fn editing_a_field_clears_its_inline_error() {
        let mut page = page();
        page.update(Action::NextStep).unwrap();
        assert!(page.fields[0].field.error.is_some());
        type_text(&mut page, "M");
        assert!(page.fields[0].field.error.is_none());
    }
}
