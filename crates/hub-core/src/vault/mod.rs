//! Vault
//!
//! Password gate for the vault page.

mod gate;

pub use gate::{
    VaultError, VaultGate, VaultState, FAILED_ATTEMPTS_KEY, MAX_FAILED_ATTEMPTS, MIN_PASSWORD_LEN,
    PASSWORD_KEY, UNLOCKED_KEY, VAULT_LISTS,
};
