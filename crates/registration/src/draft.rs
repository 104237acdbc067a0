//! The in-progress registration aggregate.
//!
//! All values are kept as the strings the guardian typed; parsing and
//! range rules live in `validate`. The aggregate's single structural
//! invariant is that `players.len()` always equals the chosen player
//! count, maintained by `set_player_count`.

use serde::{Deserialize, Serialize};

use crate::field::{GuardianField, PlayerField};
use crate::sync;

pub const MIN_PLAYERS: usize = 1;
pub const MAX_PLAYERS: usize = 10;

/// Account details of the parent/guardian completing the registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl GuardianDraft {
    pub fn field(&self, field: GuardianField) -> &str {
        match field {
            GuardianField::Name => &self.name,
            GuardianField::Email => &self.email,
            GuardianField::Password => &self.password,
            GuardianField::PasswordConfirmation => &self.password_confirmation,
        }
    }

    pub fn set_field(&mut self, field: GuardianField, value: impl Into<String>) {
        let value = value.into();
        match field {
            GuardianField::Name => self.name = value,
            GuardianField::Email => self.email = value,
            GuardianField::Password => self.password = value,
            GuardianField::PasswordConfirmation => self.password_confirmation = value,
        }
    }
}

/// One child's form data, one instance per registered player.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerDraft {
    pub name: String,
    pub date_of_birth: String,
    pub photo_url: String,
    pub city: String,
    pub school: String,
    pub country: String,
    pub position: String,
    pub strong_foot: String,
    pub sports_history: String,
    pub preferred_location: String,
    pub hobbies: String,
    pub medical_notes: String,
    pub shirt_size: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
}

impl PlayerDraft {
    pub fn field(&self, field: PlayerField) -> &str {
        match field {
            PlayerField::Name => &self.name,
            PlayerField::DateOfBirth => &self.date_of_birth,
            PlayerField::PhotoUrl => &self.photo_url,
            PlayerField::City => &self.city,
            PlayerField::School => &self.school,
            PlayerField::Country => &self.country,
            PlayerField::Position => &self.position,
            PlayerField::StrongFoot => &self.strong_foot,
            PlayerField::SportsHistory => &self.sports_history,
            PlayerField::PreferredLocation => &self.preferred_location,
            PlayerField::Hobbies => &self.hobbies,
            PlayerField::MedicalNotes => &self.medical_notes,
            PlayerField::ShirtSize => &self.shirt_size,
            PlayerField::EmergencyContactName => &self.emergency_contact_name,
            PlayerField::EmergencyContactPhone => &self.emergency_contact_phone,
        }
    }

    pub fn set_field(&mut self, field: PlayerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            PlayerField::Name => self.name = value,
            PlayerField::DateOfBirth => self.date_of_birth = value,
            PlayerField::PhotoUrl => self.photo_url = value,
            PlayerField::City => self.city = value,
            PlayerField::School => self.school = value,
            PlayerField::Country => self.country = value,
            PlayerField::Position => self.position = value,
            PlayerField::StrongFoot => self.strong_foot = value,
            PlayerField::SportsHistory => self.sports_history = value,
            PlayerField::PreferredLocation => self.preferred_location = value,
            PlayerField::Hobbies => self.hobbies = value,
            PlayerField::MedicalNotes => self.medical_notes = value,
            PlayerField::ShirtSize => self.shirt_size = value,
            PlayerField::EmergencyContactName => self.emergency_contact_name = value,
            PlayerField::EmergencyContactPhone => self.emergency_contact_phone = value,
        }
    }
}

/// Root aggregate for one in-progress registration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub guardian: GuardianDraft,
    players: Vec<PlayerDraft>,
}

impl RegistrationDraft {
    /// A fresh draft with an empty guardian and a single blank player.
    pub fn new() -> Self {
        Self {
            guardian: GuardianDraft::default(),
            players: vec![PlayerDraft::default()],
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn players(&self) -> &[PlayerDraft] {
        &self.players
    }

    pub fn player(&self, index: usize) -> Option<&PlayerDraft> {
        self.players.get(index)
    }

    /// Resize the player list, clamping to the allowed range.
    ///
    /// Growing seeds each new player from the first player's shared
    /// fields (identity fields stay blank); shrinking discards trailing
    /// players. Returns the count actually applied.
    pub fn set_player_count(&mut self, requested: usize) -> usize {
        let count = requested.clamp(MIN_PLAYERS, MAX_PLAYERS);
        if count > self.players.len() {
            let template = sync::seed_from(&self.players[0]);
            while self.players.len() < count {
                self.players.push(template.clone());
            }
        } else {
            self.players.truncate(count);
        }
        count
    }

    /// Apply a guardian edit.
    pub fn set_guardian_field(&mut self, field: GuardianField, value: impl Into<String>) {
        self.guardian.set_field(field, value);
    }

    /// Apply a player edit, propagating shared values from the first
    /// player into still-empty fields of the others.
    pub fn set_player_field(&mut self, index: usize, field: PlayerField, value: impl Into<String>) {
        let value = value.into();
        if let Some(player) = self.players.get_mut(index) {
            player.set_field(field, value.clone());
            sync::propagate_shared_field(&mut self.players, index, field, &value);
        }
    }
}
