//! Field vocabulary for the registration forms.
//!
//! Two enums name every value the wizard captures: `GuardianField` for the
//! account step and `PlayerField` for the per-player sections. Error maps,
//! copy-forward and the submission payload all key off `key()`, so the
//! strings here are the one place the wire/error spelling is defined.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Guardian account fields collected on the first step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum GuardianField {
    Name,
    Email,
    Password,
    PasswordConfirmation,
}

impl GuardianField {
    pub fn key(self) -> &'static str {
        match self {
            GuardianField::Name => "name",
            GuardianField::Email => "email",
            GuardianField::Password => "password",
            GuardianField::PasswordConfirmation => "password_confirmation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GuardianField::Name => "Parent Name",
            GuardianField::Email => "Parent Email",
            GuardianField::Password => "Password",
            GuardianField::PasswordConfirmation => "Confirm Password",
        }
    }
}

/// Per-player form fields.
///
/// Identity fields distinguish one child from another and are never copied
/// between players; everything else is "shared" and eligible for
/// copy-forward from the first player (see `sync`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum PlayerField {
    Name,
    DateOfBirth,
    PhotoUrl,
    City,
    School,
    Country,
    Position,
    StrongFoot,
    SportsHistory,
    PreferredLocation,
    Hobbies,
    MedicalNotes,
    ShirtSize,
    EmergencyContactName,
    EmergencyContactPhone,
}

impl PlayerField {
    /// Fields that uniquely identify a child; excluded from any copying.
    pub const IDENTITY: [PlayerField; 3] = [
        PlayerField::Name,
        PlayerField::DateOfBirth,
        PlayerField::PhotoUrl,
    ];

    /// Household-context fields seeded into and synced across players.
    pub const SHARED: [PlayerField; 12] = [
        PlayerField::City,
        PlayerField::School,
        PlayerField::Country,
        PlayerField::Position,
        PlayerField::StrongFoot,
        PlayerField::SportsHistory,
        PlayerField::PreferredLocation,
        PlayerField::Hobbies,
        PlayerField::MedicalNotes,
        PlayerField::ShirtSize,
        PlayerField::EmergencyContactName,
        PlayerField::EmergencyContactPhone,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PlayerField::Name => "name",
            PlayerField::DateOfBirth => "date_of_birth",
            PlayerField::PhotoUrl => "photo_url",
            PlayerField::City => "city",
            PlayerField::School => "school",
            PlayerField::Country => "country",
            PlayerField::Position => "position",
            PlayerField::StrongFoot => "strong_foot",
            PlayerField::SportsHistory => "sports_history",
            PlayerField::PreferredLocation => "preferred_location",
            PlayerField::Hobbies => "hobbies",
            PlayerField::MedicalNotes => "medical_notes",
            PlayerField::ShirtSize => "shirt_size",
            PlayerField::EmergencyContactName => "emergency_contact_name",
            PlayerField::EmergencyContactPhone => "emergency_contact_phone",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PlayerField::Name => "Player Name",
            PlayerField::DateOfBirth => "Date of Birth",
            PlayerField::PhotoUrl => "Player Photo URL",
            PlayerField::City => "City",
            PlayerField::School => "School",
            PlayerField::Country => "Country",
            PlayerField::Position => "Position",
            PlayerField::StrongFoot => "Strong Foot",
            PlayerField::SportsHistory => "Football History",
            PlayerField::PreferredLocation => "Preferred Location",
            PlayerField::Hobbies => "Hobbies & Interests",
            PlayerField::MedicalNotes => "Ailments/Allergies",
            PlayerField::ShirtSize => "T-Shirt Size",
            PlayerField::EmergencyContactName => "Emergency Contact Name",
            PlayerField::EmergencyContactPhone => "Emergency Contact Number",
        }
    }

    pub fn is_identity(self) -> bool {
        matches!(
            self,
            PlayerField::Name | PlayerField::DateOfBirth | PlayerField::PhotoUrl
        )
    }
}
