//! Per-step validation rules.
//!
//! `validate_step` gates forward navigation: it returns a map of error
//! key → human-readable message, and the controller only advances when
//! the map comes back empty. Player errors are keyed per player
//! (`player{index}_{field}`) so several players' states never collide.
//! The reference date is injected so the age rule stays deterministic
//! under test.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;

use crate::draft::{RegistrationDraft, MAX_PLAYERS, MIN_PLAYERS};
use crate::field::{GuardianField, PlayerField};
use crate::steps::{PlayerSection, StepKind};

pub const MIN_PLAYER_AGE: i32 = 5;
pub const MAX_PLAYER_AGE: i32 = 25;
pub const MIN_PASSWORD_LEN: usize = 8;

/// Ordered error map; empty means the step passes.
pub type ValidationErrors = BTreeMap<String, String>;

lazy_static! {
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_RE: Regex = Regex::new(r"^\+?[\d\s\-()]+$").unwrap();
}

/// Error key for a player field, e.g. `player0_city`.
pub fn player_error_key(index: usize, field: PlayerField) -> String {
    format!("player{}_{}", index, field.key())
}

/// Age as a bare calendar-year difference, matching how the academy has
/// always bucketed age groups (no month/day adjustment).
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    today.year() - birth.year()
}

/// Validate the step identified by `kind` against the draft.
pub fn validate_step(draft: &RegistrationDraft, kind: StepKind, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    match kind {
        StepKind::Guardian => validate_guardian(draft, &mut errors),
        StepKind::PlayerCount => validate_player_count(draft, &mut errors),
        StepKind::Player { index, section } => {
            if let Some(player) = draft.player(index) {
                validate_player_section(player, index, section, today, &mut errors);
            }
        }
    }
    errors
}

fn validate_guardian(draft: &RegistrationDraft, errors: &mut ValidationErrors) {
    let guardian = &draft.guardian;
    if guardian.name.trim().is_empty() {
        errors.insert(
            GuardianField::Name.key().into(),
            "Parent name is required".into(),
        );
    }
    if guardian.email.trim().is_empty() {
        errors.insert(
            GuardianField::Email.key().into(),
            "Parent email is required".into(),
        );
    } else if !EMAIL_RE.is_match(guardian.email.trim()) {
        errors.insert(
            GuardianField::Email.key().into(),
            "Please enter a valid email address".into(),
        );
    }
    if guardian.password.is_empty() {
        errors.insert(
            GuardianField::Password.key().into(),
            "Password is required".into(),
        );
    } else if guardian.password.chars().count() < MIN_PASSWORD_LEN {
        errors.insert(
            GuardianField::Password.key().into(),
            "Password must be at least 8 characters".into(),
        );
    }
    if guardian.password != guardian.password_confirmation {
        errors.insert(
            GuardianField::PasswordConfirmation.key().into(),
            "Passwords do not match".into(),
        );
    }
}

fn validate_player_count(draft: &RegistrationDraft, errors: &mut ValidationErrors) {
    // The draft clamps on mutation; the rule still guards direct deserialized input.
    let count = draft.player_count();
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&count) {
        errors.insert(
            "player_count".into(),
            "Number of players must be between 1 and 10".into(),
        );
    }
}

fn require(
    player: &crate::draft::PlayerDraft,
    index: usize,
    field: PlayerField,
    message: &str,
    errors: &mut ValidationErrors,
) {
    if player.field(field).trim().is_empty() {
        errors.insert(player_error_key(index, field), message.into());
    }
}

fn validate_player_section(
    player: &crate::draft::PlayerDraft,
    index: usize,
    section: PlayerSection,
    today: NaiveDate,
    errors: &mut ValidationErrors,
) {
    match section {
        PlayerSection::Basics => {
            require(player, index, PlayerField::Name, "Player name is required", errors);
            require(player, index, PlayerField::City, "Player city is required", errors);
            require(player, index, PlayerField::School, "Player school is required", errors);
            require(player, index, PlayerField::Country, "Player country is required", errors);

            let dob = player.date_of_birth.trim();
            if dob.is_empty() {
                errors.insert(
                    player_error_key(index, PlayerField::DateOfBirth),
                    "Player date of birth is required".into(),
                );
            } else {
                match NaiveDate::parse_from_str(dob, "%Y-%m-%d") {
                    Ok(birth) => {
                        let age = age_on(birth, today);
                        if !(MIN_PLAYER_AGE..=MAX_PLAYER_AGE).contains(&age) {
                            errors.insert(
                                player_error_key(index, PlayerField::DateOfBirth),
                                "Player must be between 5 and 25 years old".into(),
                            );
                        }
                    }
                    Err(_) => {
                        errors.insert(
                            player_error_key(index, PlayerField::DateOfBirth),
                            "Enter the date of birth as YYYY-MM-DD".into(),
                        );
                    }
                }
            }
        }
        PlayerSection::Sports => {
            require(player, index, PlayerField::StrongFoot, "Strong foot is required", errors);
            require(
                player,
                index,
                PlayerField::PreferredLocation,
                "Preferred location is required",
                errors,
            );
        }
        PlayerSection::Personal => {
            require(player, index, PlayerField::ShirtSize, "T-shirt size is required", errors);
        }
        PlayerSection::Emergency => {
            require(
                player,
                index,
                PlayerField::EmergencyContactName,
                "Emergency contact name is required",
                errors,
            );
            let phone = player.emergency_contact_phone.trim();
            if phone.is_empty() {
                errors.insert(
                    player_error_key(index, PlayerField::EmergencyContactPhone),
                    "Emergency contact number is required".into(),
                );
            } else if !PHONE_RE.is_match(phone) {
                errors.insert(
                    player_error_key(index, PlayerField::EmergencyContactPhone),
                    "Please enter a valid phone number".into(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn draft_with_guardian(name: &str, email: &str, password: &str, confirm: &str) -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_guardian_field(GuardianField::Name, name);
        draft.set_guardian_field(GuardianField::Email, email);
        draft.set_guardian_field(GuardianField::Password, password);
        draft.set_guardian_field(GuardianField::PasswordConfirmation, confirm);
        draft
    }

    #[test]
    fn empty_guardian_email_is_rejected() {
        let draft = draft_with_guardian("Maya Persad", "", "sufficient8", "sufficient8");
        let errors = validate_step(&draft, StepKind::Guardian, today());
        assert_eq!(errors.get("email").map(String::as_str), Some("Parent email is required"));
    }

    #[test]
    fn malformed_guardian_email_is_rejected() {
        let draft = draft_with_guardian("Maya Persad", "not-an-email", "sufficient8", "sufficient8");
        let errors = validate_step(&draft, StepKind::Guardian, today());
        assert_eq!(
            errors.get("email").map(String::as_str),
            Some("Please enter a valid email address")
        );
    }

    #[test]
    fn valid_guardian_step_passes() {
        let draft = draft_with_guardian("Maya Persad", "a@b.com", "sufficient8", "sufficient8");
        let errors = validate_step(&draft, StepKind::Guardian, today());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn short_password_and_mismatch_are_both_reported() {
        let draft = draft_with_guardian("Maya Persad", "a@b.com", "short", "different");
        let errors = validate_step(&draft, StepKind::Guardian, today());
        assert_eq!(
            errors.get("password").map(String::as_str),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            errors.get("password_confirmation").map(String::as_str),
            Some("Passwords do not match")
        );
    }

    fn basics_step() -> StepKind {
        StepKind::Player {
            index: 0,
            section: PlayerSection::Basics,
        }
    }

    fn draft_with_basics(dob: &str) -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_player_field(0, PlayerField::Name, "Asha");
        draft.set_player_field(0, PlayerField::DateOfBirth, dob);
        draft.set_player_field(0, PlayerField::City, "Arima");
        draft.set_player_field(0, PlayerField::School, "Fatima College");
        draft.set_player_field(0, PlayerField::Country, "Trinidad and Tobago");
        draft
    }

    #[test]
    fn age_three_is_rejected_and_age_twenty_accepted() {
        let toddler = draft_with_basics("2022-01-01");
        let errors = validate_step(&toddler, basics_step(), today());
        assert_eq!(
            errors.get("player0_date_of_birth").map(String::as_str),
            Some("Player must be between 5 and 25 years old")
        );

        let adult = draft_with_basics("2005-01-01");
        let errors = validate_step(&adult, basics_step(), today());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }

    #[test]
    fn unparseable_birth_date_is_rejected() {
        let draft = draft_with_basics("12/31/2012");
        let errors = validate_step(&draft, basics_step(), today());
        assert_eq!(
            errors.get("player0_date_of_birth").map(String::as_str),
            Some("Enter the date of birth as YYYY-MM-DD")
        );
    }

    #[test]
    fn missing_basics_fields_are_keyed_per_player() {
        let mut draft = RegistrationDraft::new();
        draft.set_player_count(2);
        let errors = validate_step(
            &draft,
            StepKind::Player {
                index: 1,
                section: PlayerSection::Basics,
            },
            today(),
        );
        assert!(errors.contains_key("player1_name"));
        assert!(errors.contains_key("player1_city"));
        assert!(!errors.contains_key("player0_name"));
    }

    #[test]
    fn sports_and_personal_sections_require_their_selections() {
        let draft = RegistrationDraft::new();
        let sports = validate_step(
            &draft,
            StepKind::Player {
                index: 0,
                section: PlayerSection::Sports,
            },
            today(),
        );
        assert!(sports.contains_key("player0_strong_foot"));
        assert!(sports.contains_key("player0_preferred_location"));

        let personal = validate_step(
            &draft,
            StepKind::Player {
                index: 0,
                section: PlayerSection::Personal,
            },
            today(),
        );
        assert_eq!(
            personal.get("player0_shirt_size").map(String::as_str),
            Some("T-shirt size is required")
        );
    }

    #[test]
    fn emergency_phone_must_look_like_a_phone_number() {
        let mut draft = RegistrationDraft::new();
        draft.set_player_field(0, PlayerField::EmergencyContactName, "Grandma Joan");
        draft.set_player_field(0, PlayerField::EmergencyContactPhone, "call me maybe");
        let step = StepKind::Player {
            index: 0,
            section: PlayerSection::Emergency,
        };
        let errors = validate_step(&draft, step, today());
        assert_eq!(
            errors.get("player0_emergency_contact_phone").map(String::as_str),
            Some("Please enter a valid phone number")
        );

        draft.set_player_field(0, PlayerField::EmergencyContactPhone, "+1 (868) 555-0101");
        let errors = validate_step(&draft, step, today());
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
    }
}
