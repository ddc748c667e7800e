// Integration tests for the account store
// These tests drive the public API the way a UI layer would

use acctedit::{
    parse_labels, stringify_labels, AccountStore, AccountType, FileStorage, KeyValueStorage,
    LabelItem, MemoryStorage, STORAGE_KEY,
};
use tempfile::TempDir;

#[test]
fn test_add_login_ldap_scenario() {
    let mut store = AccountStore::load(MemoryStorage::new());
    let id = store.add_account().unwrap();

    assert_eq!(store.len(), 1);
    let acc = store.get(id).unwrap();
    assert_eq!(acc.account_type, AccountType::Local);
    assert_eq!(acc.login, "");
    assert!(acc.errors.login.is_some());

    store.update_login(id, "bob").unwrap();
    let acc = store.get(id).unwrap();
    assert_eq!(acc.login, "bob");
    assert_eq!(acc.errors.login, None);

    store.update_type(id, AccountType::Ldap).unwrap();
    let acc = store.get(id).unwrap();
    assert_eq!(acc.password, None);
    assert_eq!(acc.errors.password, None);
}

#[test]
fn test_empty_login_keeps_record() {
    let mut store = AccountStore::load(MemoryStorage::new());
    let id = store.add_account().unwrap();
    store.update_login(id, "alice").unwrap();

    store.update_login(id, "").unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(
        store.get(id).unwrap().errors.login.as_deref(),
        Some("Логин обязателен")
    );
}

#[test]
fn test_ldap_never_holds_password() {
    let mut store = AccountStore::load(MemoryStorage::new());
    let id = store.add_account().unwrap();
    store.update_password(id, "hunter2").unwrap();
    store.update_type(id, AccountType::Ldap).unwrap();

    store.update_password(id, "again").unwrap();
    store.update_login(id, "carol").unwrap();
    store.toggle_password_visibility(id).unwrap();
    store.update_label_raw(id, "x").unwrap();

    let acc = store.get(id).unwrap();
    assert_eq!(acc.password, None);
    assert_eq!(acc.errors.password, None);
}

#[test]
fn test_reload_matches_last_persisted_state() {
    let mut store = AccountStore::load(MemoryStorage::new());
    let a = store.add_account().unwrap();
    let b = store.add_account().unwrap();
    store.update_login(a, "admin").unwrap();
    store.update_password(a, "pw").unwrap();
    store.toggle_password_visibility(a).unwrap();
    store.update_label_raw(a, " prod ;; db;").unwrap();
    store.update_login(b, "svc").unwrap();
    store.update_type(b, AccountType::Ldap).unwrap();

    let expected = store.state().clone();
    let reloaded = AccountStore::load(store.into_storage());

    assert_eq!(reloaded.state(), &expected);
    assert_eq!(reloaded.accounts()[0].label_raw, "prod; db");
    assert_eq!(reloaded.accounts()[1].account_type, AccountType::Ldap);
}

#[test]
fn test_stored_blob_uses_exact_tokens() {
    let mut store = AccountStore::load(MemoryStorage::new());
    let local = store.add_account().unwrap();
    let ldap = store.add_account().unwrap();
    store.update_type(ldap, AccountType::Ldap).unwrap();

    let blob = store.storage().get(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
    let accounts = value["accounts"].as_array().unwrap();

    assert_eq!(accounts[0]["id"], local);
    assert_eq!(accounts[0]["type"], "Локальная");
    assert_eq!(accounts[1]["type"], "LDAP");
    for key in [
        "id",
        "label",
        "labelRaw",
        "type",
        "login",
        "password",
        "passwordVisible",
        "errors",
    ] {
        assert!(accounts[0].get(key).is_some(), "missing key {key}");
    }
}

#[test]
fn test_loads_blob_written_by_other_clients() {
    let blob = r#"{"accounts":[
        {"id":1700000000000,"label":[{"text":"stale"}],"labelRaw":"ops; web","type":"Локальная","login":"root","password":"toor","passwordVisible":false,"errors":{"login":null,"password":null}},
        {"id":1700000000001,"labelRaw":"","type":"LDAP","login":"jdoe","password":null,"passwordVisible":"yes"}
    ]}"#;
    let store = AccountStore::load(MemoryStorage::with_value(STORAGE_KEY, blob));

    assert_eq!(store.len(), 2);
    let first = &store.accounts()[0];
    assert_eq!(
        first.label,
        vec![LabelItem::new("ops"), LabelItem::new("web")]
    );
    assert_eq!(first.password.as_deref(), Some("toor"));

    let second = &store.accounts()[1];
    assert!(second.password_visible);
    assert!(second.errors.login.is_none() && second.errors.password.is_none());
}

#[test]
fn test_malformed_blob_falls_back_to_empty() {
    for blob in ["", "[]", "null", r#"{"accounts":"nope"}"#, r#"{"accounts":[{"id":"x"}]}"#] {
        let store = AccountStore::load(MemoryStorage::with_value(STORAGE_KEY, blob));
        assert!(store.is_empty(), "blob {blob:?} should load empty");
    }
}

#[test]
fn test_file_storage_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    let id = {
        let mut store = AccountStore::load(FileStorage::new(temp_dir.path()));
        let id = store.add_account().unwrap();
        store.update_login(id, "dave").unwrap();
        store.update_label_raw(id, "a;b").unwrap();
        id
    };

    let store = AccountStore::load(FileStorage::new(temp_dir.path()));
    let acc = store.get(id).unwrap();
    assert_eq!(acc.login, "dave");
    assert_eq!(acc.label_raw, "a; b");
}

#[test]
fn test_separate_keys_are_independent() {
    let temp_dir = TempDir::new().unwrap();

    let mut team = AccountStore::load_with_key(FileStorage::new(temp_dir.path()), "team");
    team.add_account().unwrap();

    let personal = AccountStore::load(FileStorage::new(temp_dir.path()));
    assert!(personal.is_empty());
}

#[test]
fn test_label_round_trip_properties() {
    let labels = vec![
        LabelItem::new("alpha"),
        LabelItem::new("beta gamma"),
        LabelItem::new("delta"),
    ];
    let once = stringify_labels(&labels);
    assert_eq!(parse_labels(&once), labels);
    assert_eq!(stringify_labels(&parse_labels(&once)), once);

    let parsed = parse_labels(" z ;;y; ; x");
    let texts: Vec<_> = parsed.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["z", "y", "x"]);
}

#[cfg(target_os = "linux")]
#[test]
#[serial_test::serial]
fn test_default_data_dir_follows_xdg() {
    let temp_dir = TempDir::new().unwrap();
    let previous = std::env::var_os("XDG_DATA_HOME");
    std::env::set_var("XDG_DATA_HOME", temp_dir.path());

    let dir = acctedit::config::default_data_dir().unwrap();
    assert_eq!(dir, temp_dir.path().join("acctedit"));

    match previous {
        Some(value) => std::env::set_var("XDG_DATA_HOME", value),
        None => std::env::remove_var("XDG_DATA_HOME"),
    }
}
