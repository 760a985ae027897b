use super::*;
use crate::util::storage::{KeyValueStore, MemoryStorage};

struct Fixture {
    durable: MemoryStorage,
    session: MemoryStorage,
    store: SessionStore,
}

fn fixture() -> Fixture {
    let durable = MemoryStorage::new();
    let session = MemoryStorage::new();
    let store = SessionStore::new(Storages::from_memory(&durable, &session));
    Fixture { durable, session, store }
}

// =============================================================
// current_user
// =============================================================

#[test]
fn guest_flow_creates_and_persists_session_guest() {
    let f = fixture();
    let user = f.store.current_user();
    assert!(user.is_guest);
    assert_eq!(user.name, "Гость");
    assert!(user.id.starts_with("guest_"));

    let persisted: UserRecord = load_json(&f.session, CURRENT_USER_KEY).unwrap().unwrap();
    assert_eq!(persisted, user);
    assert!(f.durable.is_empty());
}

#[test]
fn current_user_is_stable_once_guest_exists() {
    let f = fixture();
    let first = f.store.current_user();
    let second = f.store.current_user();
    assert_eq!(first, second);
}

#[test]
fn durable_slot_wins_over_session_slot() {
    let f = fixture();
    let remembered = UserRecord { name: "Remembered".to_owned(), ..UserRecord::guest() };
    save_json(&f.durable, CURRENT_USER_KEY, &remembered).unwrap();
    save_json(&f.session, CURRENT_USER_KEY, &UserRecord::guest()).unwrap();
    assert_eq!(f.store.current_user().name, "Remembered");
}

#[test]
fn corrupt_slots_fall_back_to_new_guest() {
    let f = fixture();
    f.durable.set(CURRENT_USER_KEY, "not json").unwrap();
    let user = f.store.current_user();
    assert!(user.is_guest);
    assert!(f.session.get(CURRENT_USER_KEY).unwrap().is_some());
}

// =============================================================
// register / login
// =============================================================

#[test]
fn registration_then_login_yields_member_without_credential() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();

    let user = f.store.login("a@b.com", "secret", false).unwrap();
    assert!(!user.is_guest);
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.name, "A");

    let raw = f.session.get(CURRENT_USER_KEY).unwrap().unwrap();
    let active: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert!(active.get("password").is_none());
    assert!(active.get("passwordDigest").is_none());
    assert_eq!(active["isGuest"], false);
}

#[test]
fn registered_list_never_stores_plaintext() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    let raw = f.durable.get(REGISTERED_USERS_KEY).unwrap().unwrap();
    assert!(!raw.contains("secret"));
    assert!(raw.contains("passwordDigest"));
}

#[test]
fn duplicate_email_is_rejected() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    assert_eq!(f.store.register("B", "a@b.com", "other1"), Err(FormError::EmailTaken));
    assert_eq!(f.store.registered_users().len(), 1);
}

#[test]
fn wrong_password_is_rejected() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    assert_eq!(f.store.login("a@b.com", "Secret", false), Err(FormError::InvalidCredentials));
    assert_eq!(f.store.login("x@b.com", "secret", false), Err(FormError::InvalidCredentials));
}

#[test]
fn legacy_plaintext_records_still_log_in() {
    let f = fixture();
    f.durable
        .set(
            REGISTERED_USERS_KEY,
            r#"[{"id":"user_1","name":"Old","email":"old@b.com","password":"hunter2","isGuest":false,"isAdmin":false}]"#,
        )
        .unwrap();
    let user = f.store.login("old@b.com", "hunter2", true).unwrap();
    assert_eq!(user.id, "user_1");
    let raw = f.durable.get(CURRENT_USER_KEY).unwrap().unwrap();
    assert!(!raw.contains("hunter2"));
}

#[test]
fn remember_selects_durable_slot() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    f.store.login("a@b.com", "secret", true).unwrap();
    assert!(f.durable.get(CURRENT_USER_KEY).unwrap().is_some());
    assert!(f.session.get(CURRENT_USER_KEY).unwrap().is_none());
}

#[test]
fn session_sign_in_clears_remembered_user() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    f.store.register("B", "b@b.com", "secret").unwrap();
    f.store.login("a@b.com", "secret", true).unwrap();
    f.store.login("b@b.com", "secret", false).unwrap();
    assert_eq!(f.store.current_user().email, "b@b.com");
}

#[test]
fn logout_clears_both_slots() {
    let f = fixture();
    f.store.register("A", "a@b.com", "secret").unwrap();
    f.store.login("a@b.com", "secret", true).unwrap();
    let _ = f.store.current_user();
    f.store.logout();
    assert!(f.durable.get(CURRENT_USER_KEY).unwrap().is_none());
    assert!(f.session.get(CURRENT_USER_KEY).unwrap().is_none());
}

// =============================================================
// greeting
// =============================================================

#[test]
fn guest_greeting_has_no_email_line() {
    let g = greeting(&UserRecord::guest());
    assert_eq!(g.name_line, "👤 Гость");
    assert_eq!(g.email_line, None);
}

#[test]
fn member_greeting_includes_email() {
    let f = fixture();
    let user = f.store.register("Anna", "anna@b.com", "secret").unwrap();
    let g = greeting(&user);
    assert_eq!(g.name_line, "👤 Anna");
    assert_eq!(g.email_line.as_deref(), Some("📧 anna@b.com"));
}
