//! Vault Access Gate
//!
//! Password-set / unlock / reset state machine guarding the vault lists.
//! The password is stored in plaintext and compared with `==`: this gate
//! hides the vault from casual view, it does not protect it.

use thiserror::Error;

use crate::domain::{ListType, ValidationError};
use crate::repository::KeyValueStore;

pub const PASSWORD_KEY: &str = "VAULT_PASSWORD";
pub const FAILED_ATTEMPTS_KEY: &str = "vaultFailedAttempts";
/// Session-scoped flag, `"true"` while unlocked
pub const UNLOCKED_KEY: &str = "vaultUnlocked";

/// Measured in UTF-16 code units, as the browser counts string length
pub const MIN_PASSWORD_LEN: usize = 4;
/// Failed attempts after which the reset link is offered
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// Lists hidden behind the gate
pub const VAULT_LISTS: [ListType; 2] = [ListType::VaultNotes, ListType::VaultLinks];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VaultState {
    NoPasswordSet,
    Locked,
    Unlocked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VaultError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Incorrect password. Attempts: {attempts}/{}", MAX_FAILED_ATTEMPTS)]
    IncorrectPassword { attempts: u32 },
    #[error("no vault password has been set")]
    NoPasswordSet,
    #[error("a vault password is already set")]
    PasswordAlreadySet,
}

/// Gate over the durable store and the session store
#[derive(Clone, Copy)]
pub struct VaultGate<'a> {
    store: &'a dyn KeyValueStore,
    session: &'a dyn KeyValueStore,
}

impl<'a> VaultGate<'a> {
    pub fn new(store: &'a dyn KeyValueStore, session: &'a dyn KeyValueStore) -> Self {
        Self { store, session }
    }

    /// Current state, recomputed from storage on every call
    pub fn state(&self) -> VaultState {
        if self.password().is_none() {
            VaultState::NoPasswordSet
        } else if self.session.get(UNLOCKED_KEY).as_deref() == Some("true") {
            VaultState::Unlocked
        } else {
            VaultState::Locked
        }
    }

    pub fn failed_attempts(&self) -> u32 {
        self.store
            .get(FAILED_ATTEMPTS_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0)
    }

    /// The reset link shows once a password exists and enough attempts failed.
    pub fn forgot_password_visible(&self) -> bool {
        self.password().is_some() && self.failed_attempts() >= MAX_FAILED_ATTEMPTS
    }

    pub fn set_password(&self, password: &str, confirmation: &str) -> Result<VaultState, VaultError> {
        if self.password().is_some() {
            return Err(VaultError::PasswordAlreadySet);
        }
        if password.is_empty() || confirmation.is_empty() {
            return Err(ValidationError::PasswordMissing.into());
        }
        if password.encode_utf16().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort.into());
        }
        if password != confirmation {
            return Err(ValidationError::PasswordMismatch.into());
        }

        self.store.set(PASSWORD_KEY, password);
        self.session.set(UNLOCKED_KEY, "true");
        log::info!("[Vault] password set, vault unlocked for this session");
        Ok(VaultState::Unlocked)
    }

    /// Compare `attempt` with the stored password.
    ///
    /// Failures only count; they never block the next attempt.
    pub fn unlock(&self, attempt: &str) -> Result<VaultState, VaultError> {
        let password = self.password().ok_or(VaultError::NoPasswordSet)?;

        if attempt == password {
            self.store.set(FAILED_ATTEMPTS_KEY, "0");
            self.session.set(UNLOCKED_KEY, "true");
            log::info!("[Vault] unlocked");
            return Ok(VaultState::Unlocked);
        }

        let attempts = self.failed_attempts().saturating_add(1);
        self.store.set(FAILED_ATTEMPTS_KEY, &attempts.to_string());
        log::info!("[Vault] incorrect password ({}/{})", attempts, MAX_FAILED_ATTEMPTS);
        Err(VaultError::IncorrectPassword { attempts })
    }

    /// Wipe the vault lists, the password and the attempt counter.
    pub fn reset(&self) -> VaultState {
        for list in VAULT_LISTS {
            self.store.remove(list.storage_key());
            self.store.remove(list.last_updated_key());
        }
        self.store.remove(PASSWORD_KEY);
        self.store.remove(FAILED_ATTEMPTS_KEY);
        self.session.remove(UNLOCKED_KEY);
        log::info!("[Vault] reset: notes, links and password removed");
        VaultState::NoPasswordSet
    }

    /// Stored password; an empty string counts as none.
    fn password(&self) -> Option<String> {
        self.store.get(PASSWORD_KEY).filter(|p| !p.is_empty())
    }
}
