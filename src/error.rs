//! Error types shared across the client.
//!
//! Storage errors are internal: callers recover locally and never surface
//! them to the user. Form errors are the opposite; their `Display` text is
//! exactly what the form shows inline.

/// Failure talking to a browser key-value storage area.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage area is not available")]
    Unavailable,
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
    #[error("stored value is not valid JSON for its record: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("value could not be encoded: {0}")]
    Encode(#[source] serde_json::Error),
}

/// User-facing validation and verification failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Заполните все поля")]
    MissingFields,
    #[error("Введите корректный email")]
    InvalidEmail,
    #[error("Пароль должен быть не менее 6 символов")]
    PasswordTooShort,
    #[error("Пароли не совпадают")]
    PasswordMismatch,
    #[error("Пользователь с таким email уже существует")]
    EmailTaken,
    #[error("Неверный email или пароль")]
    InvalidCredentials,
    #[error("Введите пароль")]
    EmptyGatePassword,
    #[error("Неверный пароль. Попробуйте снова.")]
    WrongGatePassword,
}
