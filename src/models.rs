//! Data models for the account list.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single free-text tag attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabelItem {
    pub text: String,
}

impl LabelItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Kind of account. Local accounts carry a password, LDAP accounts never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccountType {
    #[default]
    #[serde(rename = "Локальная")]
    Local,
    #[serde(rename = "LDAP")]
    Ldap,
}

impl AccountType {
    /// Token written to storage for this kind.
    pub fn token(self) -> &'static str {
        match self {
            AccountType::Local => "Локальная",
            AccountType::Ldap => "LDAP",
        }
    }

    /// Parse an exact storage token.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Локальная" => Some(AccountType::Local),
            "LDAP" => Some(AccountType::Ldap),
            _ => None,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AccountType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(kind) = Self::from_token(s.trim()) {
            return Ok(kind);
        }
        match s.trim().to_lowercase().as_str() {
            "local" | "локальная" => Ok(AccountType::Local),
            "ldap" => Ok(AccountType::Ldap),
            _ => Err(StoreError::UnknownAccountType(s.to_string())),
        }
    }
}

/// Advisory validation messages, one slot per validated field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors {
    pub login: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.login.is_none() && self.password.is_none()
    }
}

/// One credential record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: i64,
    /// Parsed labels, the form used for display and filtering
    pub label: Vec<LabelItem>,
    /// Canonical label string, refreshed from `label` on every write
    pub label_raw: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub login: String,
    pub password: Option<String>,
    pub password_visible: bool,
    pub errors: FieldErrors,
}

impl Account {
    /// Create a record with empty defaults.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            label: Vec::new(),
            label_raw: String::new(),
            account_type: AccountType::Local,
            login: String::new(),
            password: None,
            password_visible: false,
            errors: FieldErrors::default(),
        }
    }

    pub fn is_local(&self) -> bool {
        self.account_type == AccountType::Local
    }

    /// Password as it should be displayed, honoring the visibility toggle.
    pub fn masked_password(&self) -> Option<String> {
        let password = self.password.as_deref()?;
        if self.password_visible {
            Some(password.to_string())
        } else {
            Some("•".repeat(password.chars().count()))
        }
    }
}

/// The whole persisted collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountsState {
    pub accounts: Vec<Account>,
}

impl AccountsState {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find account by id.
    pub fn find(&self, id: i64) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id == id)
    }

    /// Find account by id (mutable).
    pub fn find_mut(&mut self, id: i64) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id == id)
    }

    /// Largest id in the collection.
    pub fn max_id(&self) -> Option<i64> {
        self.accounts.iter().map(|acc| acc.id).max()
    }
}
