//! The account store: in-memory collection plus whole-state persistence.

use crate::error::Result;
use crate::ids::IdSource;
use crate::labels::{parse_labels, stringify_labels};
use crate::models::{Account, AccountType, AccountsState};
use crate::restore::restore_state;
use crate::storage::KeyValueStorage;
use crate::validation;

/// Storage key the collection is written under.
pub const STORAGE_KEY: &str = "accounts-store";

/// State container for the account list.
///
/// Every mutating operation applies its change, re-validates the touched record and then
/// writes the entire collection back to storage. Operations on an unknown id are no-ops and
/// report `Ok(false)`. A failed write is returned to the caller; the in-memory change stays
/// applied and is written again by the next successful mutation.
pub struct AccountStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    state: AccountsState,
    ids: IdSource,
}

impl<S: KeyValueStorage> AccountStore<S> {
    /// Load the collection stored under the default key.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, STORAGE_KEY)
    }

    /// Load the collection stored under `key`, falling back to an empty one.
    pub fn load_with_key(storage: S, key: &str) -> Self {
        let state = match storage.get(key) {
            Ok(Some(blob)) => match restore_state(&blob) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!(key, "failed to load stored accounts, starting empty: {e}");
                    AccountsState::new()
                }
            },
            Ok(None) => AccountsState::new(),
            Err(e) => {
                tracing::warn!(key, "failed to read storage, starting empty: {e}");
                AccountsState::new()
            }
        };
        tracing::debug!(key, count = state.accounts.len(), "accounts loaded");

        Self {
            ids: IdSource::after(state.max_id()),
            storage,
            key: key.to_string(),
            state,
        }
    }

    /// All accounts in insertion order.
    pub fn accounts(&self) -> &[Account] {
        &self.state.accounts
    }

    pub fn state(&self) -> &AccountsState {
        &self.state
    }

    pub fn get(&self, id: i64) -> Option<&Account> {
        self.state.find(id)
    }

    pub fn len(&self) -> usize {
        self.state.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.accounts.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give back the underlying storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Append a new Local account with empty fields and return its id.
    pub fn add_account(&mut self) -> Result<i64> {
        let id = self.ids.next_id()?;
        let mut account = Account::new(id);
        validation::validate_account(&mut account);
        self.state.accounts.push(account);
        tracing::info!(id, "account added");

        self.persist()?;
        Ok(id)
    }

    /// Delete the account with `id`. The collection is written even when nothing matched.
    pub fn remove_account(&mut self, id: i64) -> Result<bool> {
        let before = self.state.accounts.len();
        self.state.accounts.retain(|acc| acc.id != id);
        let removed = self.state.accounts.len() != before;
        if removed {
            tracing::info!(id, "account removed");
        }

        self.persist()?;
        Ok(removed)
    }

    /// Set the trimmed login.
    pub fn update_login(&mut self, id: i64, value: &str) -> Result<bool> {
        let Some(acc) = self.state.find_mut(id) else {
            return Ok(false);
        };

        acc.login = value.trim().to_string();
        validation::validate_account(acc);

        self.persist()?;
        Ok(true)
    }

    /// Set the trimmed password of a Local account; blank input clears it.
    pub fn update_password(&mut self, id: i64, value: &str) -> Result<bool> {
        let Some(acc) = self.state.find_mut(id) else {
            return Ok(false);
        };
        if !acc.is_local() {
            return Ok(false);
        }

        let trimmed = value.trim();
        acc.password = (!trimmed.is_empty()).then(|| trimmed.to_string());
        validation::validate_account(acc);

        self.persist()?;
        Ok(true)
    }

    /// Change the account kind.
    ///
    /// Switching to LDAP drops the password. Re-selecting Local on a Local account without a
    /// password seeds an empty, editable one.
    pub fn update_type(&mut self, id: i64, kind: AccountType) -> Result<bool> {
        let Some(acc) = self.state.find_mut(id) else {
            return Ok(false);
        };

        let was_local = acc.is_local();
        acc.account_type = kind;
        match kind {
            AccountType::Ldap => acc.password = None,
            AccountType::Local => {
                let has_password = acc.password.as_deref().is_some_and(|p| !p.is_empty());
                if was_local && !has_password {
                    acc.password = Some(String::new());
                }
            }
        }
        validation::validate_account(acc);

        self.persist()?;
        Ok(true)
    }

    /// Replace the labels from free text. `label_raw` is refreshed by the write that follows.
    pub fn update_label_raw(&mut self, id: i64, value: &str) -> Result<bool> {
        let Some(acc) = self.state.find_mut(id) else {
            return Ok(false);
        };

        acc.label = parse_labels(value);

        self.persist()?;
        Ok(true)
    }

    /// Flip whether the password is shown in cleartext.
    pub fn toggle_password_visibility(&mut self, id: i64) -> Result<bool> {
        let Some(acc) = self.state.find_mut(id) else {
            return Ok(false);
        };

        acc.password_visible = !acc.password_visible;

        self.persist()?;
        Ok(true)
    }

    /// Recompute both error slots of `account`.
    pub fn validate_account(account: &mut Account) {
        validation::validate_account(account);
    }

    /// Write the whole collection, refreshing every `label_raw` first.
    fn persist(&mut self) -> Result<()> {
        for acc in &mut self.state.accounts {
            acc.label_raw = stringify_labels(&acc.label);
        }

        let blob = serde_json::to_string(&self.state)?;
        if let Err(e) = self.storage.set(&self.key, &blob) {
            tracing::warn!(key = %self.key, "failed to persist accounts: {e}");
            return Err(e);
        }
        tracing::debug!(key = %self.key, bytes = blob.len(), "accounts persisted");
        Ok(())
    }
}
