//! Guardian account store.
//!
//! Submission doubles as account creation: the guardian's name, email
//! and an argon2 hash of their password are appended to `accounts.json`
//! under the data directory. Emails are the account key and are matched
//! case-insensitively. The raw password never reaches disk.

use std::fs;
use std::path::{Path, PathBuf};

use argon2::password_hash::{PasswordHash, SaltString};
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use color_eyre::{eyre::eyre, Result};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
struct AccountRecord {
    name: String,
    email: String,
    hash: String,
}

pub struct AccountStore {
    path: PathBuf,
}

impl AccountStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("accounts.json"),
        }
    }

    fn load(&self) -> Result<Vec<AccountRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&fs::read_to_string(&self.path)?)?)
    }

    fn save(&self, accounts: &[AccountRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(accounts)?)?;
        Ok(())
    }

    pub fn contains(&self, email: &str) -> Result<bool> {
        Ok(self
            .load()?
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(email)))
    }

    /// Hash the password and append the account. Fails on a duplicate
    /// email.
    pub fn insert(&self, name: &str, email: &str, password: &str) -> Result<()> {
        let mut accounts = self.load()?;
        if accounts
            .iter()
            .any(|account| account.email.eq_ignore_ascii_case(email))
        {
            return Err(eyre!("an account for {email} already exists"));
        }
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| eyre!("failed to hash password: {e}"))?
            .to_string();
        accounts.push(AccountRecord {
            name: name.to_string(),
            email: email.to_string(),
            hash,
        });
        self.save(&accounts)
    }

    /// Check a sign-in attempt against the stored hash.
    pub fn verify(&self, email: &str, password: &str) -> Result<bool> {
        let accounts = self.load()?;
        let Some(account) = accounts
            .iter()
            .find(|account| account.email.eq_ignore_ascii_case(email))
        else {
            return Ok(false);
        };
        let parsed =
            PasswordHash::new(&account.hash).map_err(|e| eyre!("invalid stored hash: {e}"))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(dir: &tempfile::TempDir) -> AccountStore {
        AccountStore::new(dir.path())
    }

    #[test]
    fn create_and_verify_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let accounts = store(&dir);
        accounts
            .insert("Maya Persad", "maya@example.com", "sufficient8")
            .unwrap();

        assert!(accounts.verify("maya@example.com", "sufficient8").unwrap());
        assert!(!accounts.verify("maya@example.com", "wrong-pass").unwrap());
        assert!(!accounts.verify("nobody@example.com", "sufficient8").unwrap());
    }

    #[test]
    fn emails_match_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let accounts = store(&dir);
        accounts
            .insert("Maya Persad", "Maya@Example.com", "sufficient8")
            .unwrap();
        assert!(accounts.contains("maya@example.com").unwrap());
    }

    #[test]
    fn duplicate_emails_are_refused() {
        let dir = tempfile::tempdir().unwrap();
        let accounts = store(&dir);
        accounts
            .insert("Maya Persad", "maya@example.com", "sufficient8")
            .unwrap();
        let second = accounts.insert("Maya Persad", "maya@example.com", "different8");
        assert!(second.is_err());
    }

    #[test]
    fn the_raw_password_is_not_persisted() {
        let dir = tempfile::tempdir().unwrap();
        store(&dir)
            .insert("Maya Persad", "maya@example.com", "sufficient8")
            .unwrap();
        let raw = std::fs::read_to_string(dir.path().join("accounts.json")).unwrap();
        assert!(!raw.contains("sufficient8"));
        assert!(raw.contains("$argon2"));
    }
}
