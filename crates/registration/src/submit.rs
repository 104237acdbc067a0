//! Submission boundary.
//!
//! On final confirmation the draft is frozen into a `SubmissionPayload`
//! and handed to a `SubmissionSink`. The sink is an opaque collaborator;
//! the shipped implementation lives in the front-end crate and writes
//! the academy's local registration store.

use serde::{Deserialize, Serialize};

use crate::draft::{PlayerDraft, RegistrationDraft};
use crate::error::SubmissionError;

/// Guardian account entry inside a payload.
///
/// The password travels in memory because submission doubles as account
/// creation; sinks must hash it and never persist it in clear.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardianEntry {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Immutable snapshot of a completed draft, submitted as one unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub guardian: GuardianEntry,
    pub players: Vec<PlayerDraft>,
}

impl SubmissionPayload {
    pub fn from_draft(draft: &RegistrationDraft) -> Self {
        Self {
            guardian: GuardianEntry {
                name: draft.guardian.name.trim().to_string(),
                email: draft.guardian.email.trim().to_string(),
                password: draft.guardian.password.clone(),
            },
            players: draft.players().to_vec(),
        }
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }
}

/// Acknowledgement returned by a sink for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    pub players_registered: usize,
}

/// Where accepted registrations go. All players submit atomically as
/// one payload; there is no partial success.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::PlayerField;
    use pretty_assertions::assert_eq;

    #[test]
    fn payload_carries_one_entry_per_player_plus_the_guardian() {
        let mut draft = RegistrationDraft::new();
        draft.guardian.name = "  Maya Persad  ".into();
        draft.guardian.email = "maya@example.com".into();
        draft.guardian.password = "sufficient8".into();
        draft.set_player_count(3);
        draft.set_player_field(0, PlayerField::Name, "Asha");

        let payload = SubmissionPayload::from_draft(&draft);
        assert_eq!(payload.player_count(), 3);
        assert_eq!(payload.guardian.name, "Maya Persad");
        assert_eq!(payload.players[0].name, "Asha");
    }

    #[test]
    fn payload_serializes_with_stable_field_keys() {
        let draft = RegistrationDraft::new();
        let payload = SubmissionPayload::from_draft(&draft);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["guardian"]["email"].is_string());
        assert_eq!(json["players"].as_array().map(Vec::len), Some(1));
        assert!(json["players"][0]["date_of_birth"].is_string());
    }
}
