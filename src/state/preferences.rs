//! Stored display preferences and the rule that resolves them to a theme.
//!
//! SYSTEM CONTEXT
//! ==============
//! One preference record exists per browser origin, under `userSettings` in
//! durable storage. Every page reads it at load; only
//! `util::preference_sync::PreferenceSync` writes it.
//!
//! DESIGN
//! ======
//! The stored `theme` is the user's intent and may be `auto`. The painted
//! value is always `light` or `dark` and is derived on demand by
//! [`resolve`], so an OS scheme change can repaint without touching intent.

#[cfg(test)]
#[path = "preferences_test.rs"]
mod preferences_test;

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{SITE_THEME_KEY, USER_SETTINGS_KEY};
use crate::error::StorageError;
use crate::util::clock::now_iso;
use crate::util::storage::{KeyValueStore, load_json, save_json};

pub const DEFAULT_TIMEZONE: &str = "auto";
pub const SETTINGS_VERSION: &str = "1.0";

/// Stored theme intent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the OS colour scheme.
    Auto,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::Auto];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }

    /// Radio label in the settings panel.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Светлая",
            Self::Dark => "Тёмная",
            Self::Auto => "Как в системе",
        }
    }
}

/// Theme actually painted on the document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl From<EffectiveTheme> for ThemeMode {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

/// The `userSettings` record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceRecord {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(rename = "animations", default = "default_true")]
    pub animations_enabled: bool,
    /// `auto` or a zone identifier; display only, never validated.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_owned()
}

impl Default for PreferenceRecord {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            animations_enabled: true,
            timezone: default_timezone(),
            settings_version: Some(SETTINGS_VERSION.to_owned()),
            created_at: None,
            updated_at: None,
        }
    }
}

impl PreferenceRecord {
    /// Default record stamped with a creation time.
    #[must_use]
    pub fn fresh() -> Self {
        Self { created_at: Some(now_iso()), ..Self::default() }
    }

    pub fn touch(&mut self) {
        self.updated_at = Some(now_iso());
    }
}

/// Effective theme for `record` given the OS colour-scheme signal.
#[must_use]
pub fn resolve(record: &PreferenceRecord, system_prefers_dark: bool) -> EffectiveTheme {
    match record.theme {
        ThemeMode::Light => EffectiveTheme::Light,
        ThemeMode::Dark => EffectiveTheme::Dark,
        ThemeMode::Auto if system_prefers_dark => EffectiveTheme::Dark,
        ThemeMode::Auto => EffectiveTheme::Light,
    }
}

/// Accessor over the durable preference keys.
#[derive(Clone)]
pub struct PreferenceStore {
    durable: Arc<dyn KeyValueStore>,
}

impl PreferenceStore {
    #[must_use]
    pub fn new(durable: Arc<dyn KeyValueStore>) -> Self {
        Self { durable }
    }

    /// Stored record, or a freshly persisted default when the stored value
    /// is missing or unreadable.
    #[must_use]
    pub fn read(&self) -> PreferenceRecord {
        match load_json::<PreferenceRecord>(self.durable.as_ref(), USER_SETTINGS_KEY) {
            Ok(Some(record)) => record,
            Ok(None) => {
                log::debug!("no stored preferences, writing defaults");
                self.repair()
            }
            Err(err) => {
                log::warn!("stored preferences unreadable ({err}), writing defaults");
                self.repair()
            }
        }
    }

    /// Overwrite the stored record. No merge: callers read-modify-write.
    pub fn write(&self, record: &PreferenceRecord) -> Result<(), StorageError> {
        save_json(self.durable.as_ref(), USER_SETTINGS_KEY, record)
    }

    /// Record the painted theme under the legacy `siteTheme` key.
    pub fn mirror(&self, effective: EffectiveTheme) -> Result<(), StorageError> {
        self.durable.set(SITE_THEME_KEY, effective.as_str())
    }

    fn repair(&self) -> PreferenceRecord {
        let record = PreferenceRecord::fresh();
        if let Err(err) = self.write(&record) {
            log::warn!("could not persist default preferences: {err}");
        }
        record
    }
}
