//! Active-user state for the current page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Loaded once from `SessionStore` when a page mounts and read by the home
//! header. Pages navigate with a full document load, so nothing here needs
//! to follow later storage changes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::state::session::{Greeting, SessionStore, UserRecord, greeting};

/// The user shown in the header; `None` until the page has loaded it.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserRecord>,
}

impl AuthState {
    /// Current user from storage, creating a guest if there is none.
    #[must_use]
    pub fn load(session: &SessionStore) -> Self {
        Self { user: Some(session.current_user()) }
    }

    #[must_use]
    pub fn greeting(&self) -> Option<Greeting> {
        self.user.as_ref().map(greeting)
    }
}
