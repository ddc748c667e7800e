//! Decoding of previously stored collections.
//!
//! Stored data is treated as untyped JSON. Every field is checked and coerced on its own
//! so that older or hand-edited blobs still load.

use crate::error::{Result, StoreError};
use crate::labels::parse_labels;
use crate::models::{Account, AccountType, AccountsState, FieldErrors};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Decode a stored blob into a collection with all derived fields rebuilt.
pub fn restore_state(blob: &str) -> Result<AccountsState> {
    let value: Value = serde_json::from_str(blob)?;
    let accounts = value
        .get("accounts")
        .and_then(Value::as_array)
        .ok_or_else(|| malformed("missing `accounts` array"))?;

    let mut seen = HashSet::new();
    let mut state = AccountsState::new();
    for (index, raw) in accounts.iter().enumerate() {
        let account = restore_account(index, raw)?;
        if !seen.insert(account.id) {
            tracing::warn!(id = account.id, "dropping stored account with duplicate id");
            continue;
        }
        state.accounts.push(account);
    }
    Ok(state)
}

fn restore_account(index: usize, raw: &Value) -> Result<Account> {
    let obj = raw
        .as_object()
        .ok_or_else(|| malformed(&format!("account #{index} is not an object")))?;

    let id = obj
        .get("id")
        .and_then(integer)
        .ok_or_else(|| malformed(&format!("account #{index} has no integer id")))?;

    let account_type = match obj.get("type") {
        None | Some(Value::Null) => AccountType::Local,
        Some(Value::String(token)) => AccountType::from_token(token)
            .ok_or_else(|| StoreError::UnknownAccountType(token.clone()))?,
        Some(other) => return Err(StoreError::UnknownAccountType(other.to_string())),
    };

    let label_raw = string_field(obj, "labelRaw");
    let password = match (account_type, obj.get("password")) {
        (AccountType::Local, Some(Value::String(p))) => Some(p.trim().to_string()),
        _ => None,
    };

    Ok(Account {
        id,
        label: parse_labels(&label_raw),
        label_raw,
        account_type,
        login: string_field(obj, "login"),
        password,
        password_visible: obj.get("passwordVisible").is_some_and(truthy),
        errors: obj.get("errors").map(restore_errors).unwrap_or_default(),
    })
}

fn restore_errors(raw: &Value) -> FieldErrors {
    let Some(obj) = raw.as_object() else {
        return FieldErrors::default();
    };
    let slot = |key: &str| obj.get(key).and_then(Value::as_str).map(str::to_string);
    FieldErrors {
        login: slot("login"),
        password: slot("password"),
    }
}

fn string_field(obj: &Map<String, Value>, key: &str) -> String {
    obj.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && f.abs() < i64::MAX as f64).then_some(f as i64)
}

/// Truthiness of a loosely typed flag.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn malformed(reason: &str) -> StoreError {
    StoreError::Other(format!("malformed stored accounts: {reason}"))
}
