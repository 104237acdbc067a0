//! Local registration store: the shipped `SubmissionSink`.
//!
//! Accepted registrations are appended to `registrations.json` under
//! the data directory and the guardian's account is created alongside
//! (see `auth`). The whole payload is stored or nothing is; a rejected
//! duplicate email leaves both files untouched.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::Utc;
use registration::{
    PlayerDraft, SubmissionError, SubmissionPayload, SubmissionReceipt, SubmissionSink,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::auth::AccountStore;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredGuardian {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRegistration {
    pub id: String,
    pub submitted_at: String,
    pub guardian: StoredGuardian,
    pub players: Vec<PlayerDraft>,
}

pub struct JsonFileSink {
    data_dir: PathBuf,
}

impl JsonFileSink {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn registrations_path(&self) -> PathBuf {
        self.data_dir.join("registrations.json")
    }

    pub fn records(&self) -> Result<Vec<StoredRegistration>, SubmissionError> {
        let path = self.registrations_path();
        if !path.exists() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
    }
}

impl SubmissionSink for JsonFileSink {
    fn submit(&self, payload: &SubmissionPayload) -> Result<SubmissionReceipt, SubmissionError> {
        let accounts = AccountStore::new(&self.data_dir);
        if accounts
            .contains(&payload.guardian.email)
            .map_err(storage_err)?
        {
            return Err(SubmissionError::Rejected(
                "An account with this email already exists".into(),
            ));
        }

        fs::create_dir_all(&self.data_dir)?;
        accounts
            .insert(
                &payload.guardian.name,
                &payload.guardian.email,
                &payload.guardian.password,
            )
            .map_err(storage_err)?;

        let mut records = self.records()?;
        let receipt = SubmissionReceipt {
            id: format!("REG-{:04}", records.len() + 1),
            players_registered: payload.player_count(),
        };
        records.push(StoredRegistration {
            id: receipt.id.clone(),
            submitted_at: Utc::now().to_rfc3339(),
            guardian: StoredGuardian {
                name: payload.guardian.name.clone(),
                email: payload.guardian.email.clone(),
            },
            players: payload.players.clone(),
        });
        fs::write(self.registrations_path(), serde_json::to_vec_pretty(&records)?)?;
        info!(target: "enroll", id = %receipt.id, players = receipt.players_registered, "registration stored");
        Ok(receipt)
    }
}

fn storage_err(report: color_eyre::Report) -> SubmissionError {
    SubmissionError::Storage(io::Error::new(io::ErrorKind::Other, report.to_string()))
}

/// Convenience for the CLI listing.
pub fn read_registrations(data_dir: &Path) -> Result<Vec<StoredRegistration>, SubmissionError> {
    JsonFileSink::new(data_dir).records()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use registration::{GuardianField, PlayerField, RegistrationDraft};

    fn payload(email: &str, players: usize) -> SubmissionPayload {
        let mut draft = RegistrationDraft::new();
        draft.set_guardian_field(GuardianField::Name, "Maya Persad");
        draft.set_guardian_field(GuardianField::Email, email);
        draft.set_guardian_field(GuardianField::Password, "sufficient8");
        draft.set_player_count(players);
        draft.set_player_field(0, PlayerField::Name, "Asha");
        draft.set_player_field(0, PlayerField::City, "Arima");
        SubmissionPayload::from_draft(&draft)
    }

    #[test]
    fn accepted_registrations_are_appended_and_re_readable() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path());

        let receipt = sink.submit(&payload("maya@example.com", 3)).unwrap();
        assert_eq!(receipt.id, "REG-0001");
        assert_eq!(receipt.players_registered, 3);

        let records = sink.records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].guardian.email, "maya@example.com");
        assert_eq!(records[0].players.len(), 3);
        assert_eq!(records[0].players[0].name, "Asha");
    }

    #[test]
    fn receipt_ids_are_sequential() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path());
        sink.submit(&payload("first@example.com", 1)).unwrap();
        let second = sink.submit(&payload("second@example.com", 1)).unwrap();
        assert_eq!(second.id, "REG-0002");
    }

    #[test]
    fn duplicate_guardian_emails_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonFileSink::new(dir.path());
        sink.submit(&payload("maya@example.com", 1)).unwrap();

        let result = sink.submit(&payload("maya@example.com", 1));
        assert!(matches!(result, Err(SubmissionError::Rejected(_))));
        assert_eq!(sink.records().unwrap().len(), 1);
    }

    #[test]
    fn the_password_never_reaches_disk_in_clear() {
        let dir = tempfile::tempdir().unwrap();
        JsonFileSink::new(dir.path())
            .submit(&payload("maya@example.com", 1))
            .unwrap();

        for file in ["registrations.json", "accounts.json"] {
            let raw = fs::read_to_string(dir.path().join(file)).unwrap();
            assert!(!raw.contains("sufficient8"), "{file} leaks the password");
        }
    }

    #[test]
    fn records_are_empty_before_the_first_submission() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_registrations(dir.path()).unwrap().is_empty());
    }
}
