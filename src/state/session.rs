//! Local-only guest/user session records.
//!
//! SYSTEM CONTEXT
//! ==============
//! The active user is personalisation only: it drives the greeting in the
//! home header and nothing else. "Registration" appends to a list in
//! `localStorage`; "login" searches that list. There is no server and no
//! security boundary here, and none should be inferred from the names.
//!
//! TRADE-OFFS
//! ==========
//! New registrations store a SHA-256 digest salted with the user id instead
//! of the password itself. Records written by the earlier prototype carry a
//! plaintext `password` field; those are still accepted on login so old
//! local accounts keep working, but a plaintext credential is never written.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::config::{CURRENT_USER_KEY, REGISTERED_USERS_KEY};
use crate::error::FormError;
use crate::util::clock::now_iso;
use crate::util::storage::{StorageScope, Storages, load_json, save_json};

pub const GUEST_NAME: &str = "Гость";

/// The `currentUser` record. Never carries a credential.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_guest: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<String>,
}

impl UserRecord {
    #[must_use]
    pub fn guest() -> Self {
        let now = now_iso();
        Self {
            id: format!("guest_{}", Uuid::new_v4().simple()),
            name: GUEST_NAME.to_owned(),
            email: String::new(),
            is_guest: true,
            is_admin: false,
            created_at: Some(now.clone()),
            last_login: Some(now),
        }
    }

    fn member(name: &str, email: &str) -> Self {
        let now = now_iso();
        Self {
            id: format!("user_{}", Uuid::new_v4().simple()),
            name: name.to_owned(),
            email: email.to_owned(),
            is_guest: false,
            is_admin: false,
            created_at: Some(now.clone()),
            last_login: Some(now),
        }
    }
}

/// One entry of `registeredUsers`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredUser {
    #[serde(flatten)]
    pub user: UserRecord,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    password_digest: Option<String>,
    /// Plaintext credential from prototype-era records. Read, never written.
    #[serde(default, skip_serializing)]
    password: Option<String>,
}

impl RegisteredUser {
    fn new(user: UserRecord, password: &str) -> Self {
        let password_digest = Some(credential_digest(&user.id, password));
        Self { user, password_digest, password: None }
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        if self.user.email != email {
            return false;
        }
        match (&self.password_digest, &self.password) {
            (Some(digest), _) => *digest == credential_digest(&self.user.id, password),
            (None, Some(legacy)) => legacy == password,
            (None, None) => false,
        }
    }
}

fn credential_digest(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(b":");
    hasher.update(password.as_bytes());
    let bytes = hasher.finalize();
    let mut hex = String::with_capacity(bytes.len() * 2);
    for b in bytes.iter() {
        let _ = write!(hex, "{b:02x}");
    }
    hex
}

/// Greeting lines for the `#userInfo` header block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Greeting {
    pub name_line: String,
    pub email_line: Option<String>,
}

#[must_use]
pub fn greeting(user: &UserRecord) -> Greeting {
    let email_line = (!user.is_guest).then(|| format!("📧 {}", user.email));
    Greeting { name_line: format!("👤 {}", user.name), email_line }
}

/// Reads and writes the user slots of both storage areas.
#[derive(Clone)]
pub struct SessionStore {
    storages: Storages,
}

impl SessionStore {
    #[must_use]
    pub fn new(storages: Storages) -> Self {
        Self { storages }
    }

    /// Durable slot, then session slot, then a new guest saved to the
    /// session slot. An unreadable slot counts as empty.
    #[must_use]
    pub fn current_user(&self) -> UserRecord {
        for scope in [StorageScope::Durable, StorageScope::Session] {
            match load_json::<UserRecord>(self.storages.scope(scope), CURRENT_USER_KEY) {
                Ok(Some(user)) => return user,
                Ok(None) => {}
                Err(err) => log::warn!("ignoring unreadable {scope:?} user record: {err}"),
            }
        }
        self.create_guest()
    }

    /// New guest record, persisted to the session slot.
    #[must_use]
    pub fn create_guest(&self) -> UserRecord {
        let guest = UserRecord::guest();
        if let Err(err) = save_json(self.storages.session.as_ref(), CURRENT_USER_KEY, &guest) {
            log::warn!("could not persist guest record: {err}");
        }
        log::info!("created guest session {}", guest.id);
        guest
    }

    /// Every locally registered user; unreadable data reads as none.
    #[must_use]
    pub fn registered_users(&self) -> Vec<RegisteredUser> {
        match load_json::<Vec<RegisteredUser>>(self.storages.durable.as_ref(), REGISTERED_USERS_KEY) {
            Ok(users) => users.unwrap_or_default(),
            Err(err) => {
                log::warn!("ignoring unreadable registered users: {err}");
                Vec::new()
            }
        }
    }

    /// Add a user to the local list. Inputs are expected to be validated.
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<UserRecord, FormError> {
        let mut users = self.registered_users();
        if users.iter().any(|u| u.user.email == email) {
            return Err(FormError::EmailTaken);
        }
        let user = UserRecord::member(name, email);
        users.push(RegisteredUser::new(user.clone(), password));
        if let Err(err) = save_json(self.storages.durable.as_ref(), REGISTERED_USERS_KEY, &users) {
            log::warn!("could not persist registered users: {err}");
        }
        log::info!("registered local user {}", user.id);
        Ok(user)
    }

    /// Find a registered user by email and password and make it active.
    pub fn login(&self, email: &str, password: &str, remember: bool) -> Result<UserRecord, FormError> {
        let found = self
            .registered_users()
            .into_iter()
            .find(|u| u.matches(email, password))
            .ok_or(FormError::InvalidCredentials)?;
        Ok(self.sign_in(found.user, remember))
    }

    /// Make `user` the active record: durable slot when `remember`, else the
    /// session slot (clearing any remembered user so it does not shadow it).
    pub fn sign_in(&self, mut user: UserRecord, remember: bool) -> UserRecord {
        user.last_login = Some(now_iso());
        let scope = if remember { StorageScope::Durable } else { StorageScope::Session };
        if !remember && let Err(err) = self.storages.durable.remove(CURRENT_USER_KEY) {
            log::warn!("could not clear remembered user: {err}");
        }
        if let Err(err) = save_json(self.storages.scope(scope), CURRENT_USER_KEY, &user) {
            log::warn!("could not persist signed-in user: {err}");
        }
        log::info!("signed in {} ({scope:?})", user.id);
        user
    }

    /// Drop the active record from both slots.
    pub fn logout(&self) {
        for scope in [StorageScope::Durable, StorageScope::Session] {
            if let Err(err) = self.storages.scope(scope).remove(CURRENT_USER_KEY) {
                log::warn!("could not clear {scope:?} user record: {err}");
            }
        }
        log::info!("signed out");
    }
}
