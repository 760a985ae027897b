//! Form input validation and the status a form displays.
//!
//! DESIGN
//! ======
//! Validation is pure and returns the first failing rule as a `FormError`,
//! whose text is shown inline. Flows that drive a form (`util::auth_flow`,
//! `util::gate`) report through the `FormView` trait so they can run against
//! Leptos signals in the browser and a recorder in tests.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::error::FormError;

/// Minimum password length in UTF-16 code units, as a browser input counts.
pub const MIN_PASSWORD_UNITS: usize = 6;

/// Matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot with at least one character on each side.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Raw login form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Trimmed email and untouched password, or the first failing rule.
pub fn validate_login(form: &LoginForm) -> Result<LoginForm, FormError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    Ok(LoginForm { email: email.to_owned(), ..form.clone() })
}

/// Raw registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm: String,
}

/// Rules in display order: all fields, email format, length, confirmation.
pub fn validate_registration(form: &RegistrationForm) -> Result<RegistrationForm, FormError> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() || form.confirm.is_empty() {
        return Err(FormError::MissingFields);
    }
    if !is_valid_email(email) {
        return Err(FormError::InvalidEmail);
    }
    if form.password.encode_utf16().count() < MIN_PASSWORD_UNITS {
        return Err(FormError::PasswordTooShort);
    }
    if form.password != form.confirm {
        return Err(FormError::PasswordMismatch);
    }
    Ok(RegistrationForm { name: name.to_owned(), email: email.to_owned(), ..form.clone() })
}

/// What a form shows below its inputs and on its submit button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    /// Submitted; the button shows this label and is disabled.
    Busy(&'static str),
    Failed(FormError),
    Succeeded(&'static str),
}

impl FormStatus {
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy(_))
    }

    /// Inline message, if any.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match self {
            Self::Failed(err) => Some(err.to_string()),
            Self::Succeeded(text) => Some((*text).to_owned()),
            Self::Idle | Self::Busy(_) => None,
        }
    }

    /// Submit button text, falling back to `idle` when not busy.
    #[must_use]
    pub fn button_label(&self, idle: &'static str) -> &'static str {
        match self {
            Self::Busy(label) => *label,
            _ => idle,
        }
    }

    /// Class modifier for the message element.
    #[must_use]
    pub fn tone(&self) -> &'static str {
        match self {
            Self::Failed(_) => "error-message",
            Self::Succeeded(_) => "success-message",
            Self::Idle | Self::Busy(_) => "",
        }
    }
}

/// The form a flow is driving.
pub trait FormView: Send + Sync {
    fn status(&self) -> FormStatus;
    fn set_status(&self, status: FormStatus);
    /// Empty the secret input and put the cursor back in it.
    fn clear_secret(&self) {}
    /// Play the error shake on the form.
    fn shake(&self) {}
}

/// Captures every status a flow sets.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingForm {
    statuses: std::sync::Mutex<Vec<FormStatus>>,
    cleared: std::sync::atomic::AtomicUsize,
    shakes: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl RecordingForm {
    pub(crate) fn statuses(&self) -> Vec<FormStatus> {
        self.statuses.lock().unwrap().clone()
    }

    pub(crate) fn cleared(&self) -> usize {
        self.cleared.load(std::sync::atomic::Ordering::SeqCst)
    }

    pub(crate) fn shakes(&self) -> usize {
        self.shakes.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl FormView for RecordingForm {
    fn status(&self) -> FormStatus {
        self.statuses.lock().unwrap().last().cloned().unwrap_or_default()
    }

    fn set_status(&self, status: FormStatus) {
        self.statuses.lock().unwrap().push(status);
    }

    fn clear_secret(&self) {
        self.cleared.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }

    fn shake(&self) {
        self.shakes.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}
