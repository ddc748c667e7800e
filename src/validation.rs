//! Field rules for account records.

use crate::models::{Account, AccountType};

/// Longest login or password accepted, in characters.
pub const MAX_FIELD_LENGTH: usize = 100;

pub const LOGIN_REQUIRED: &str = "Логин обязателен";
pub const PASSWORD_REQUIRED: &str = "Пароль обязателен";
pub const TOO_LONG: &str = "Максимум 100 символов";

/// Check a login value.
pub fn login_error(login: &str) -> Option<String> {
    if login.is_empty() {
        Some(LOGIN_REQUIRED.to_string())
    } else if login.chars().count() > MAX_FIELD_LENGTH {
        Some(TOO_LONG.to_string())
    } else {
        None
    }
}

/// Check a password value for the given account kind.
pub fn password_error(kind: AccountType, password: Option<&str>) -> Option<String> {
    match (kind, password) {
        (AccountType::Ldap, _) => None,
        (AccountType::Local, None) => Some(PASSWORD_REQUIRED.to_string()),
        (AccountType::Local, Some(p)) if p.is_empty() => Some(PASSWORD_REQUIRED.to_string()),
        (AccountType::Local, Some(p)) if p.chars().count() > MAX_FIELD_LENGTH => {
            Some(TOO_LONG.to_string())
        }
        (AccountType::Local, Some(_)) => None,
    }
}

/// Recompute both error slots of a record in place.
pub fn validate_account(account: &mut Account) {
    account.errors.login = login_error(&account.login);
    account.errors.password = password_error(account.account_type, account.password.as_deref());
}
