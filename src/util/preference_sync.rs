//! The single owner of preference transitions in a tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The floating toggle, the inline toggle, the settings panel, and the OS
//! media queries all change the same stored record. They all call into one
//! `PreferenceSync` provided through Leptos context instead of each running
//! its own read-modify-write against storage.
//!
//! DESIGN
//! ======
//! Every transition runs under one lock in the same order:
//!
//! 1. compute the new record from the one this tab last painted
//! 2. write the record, then mirror the effective theme to `siteTheme`
//! 3. paint
//!
//! Storage is read only at `init` and on `reload`. Write failures are logged
//! and the paint still happens, so the page always reflects the user's last
//! action even when it could not be saved, and the next action builds on it.
//!
//! TRADE-OFFS
//! ==========
//! The toggle stores the opposite of the *painted* theme as an explicit
//! mode. From `auto` that means the toggle leaves `auto` behind; the radios
//! are the only way back.

#[cfg(test)]
#[path = "preference_sync_test.rs"]
mod preference_sync_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::state::preferences::{EffectiveTheme, PreferenceRecord, PreferenceStore, ThemeMode, resolve};
use crate::util::paint::{ControlsView, Paint, Surface, paint};

/// OS-level media signals that feed resolution and painting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SystemSignals {
    pub prefers_dark: bool,
    pub reduced_motion: bool,
}

/// Unsaved values of the settings panel form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettingsDraft {
    pub theme: ThemeMode,
    pub animations_enabled: bool,
    pub timezone: String,
}

impl SettingsDraft {
    /// The values the panel inputs currently show.
    #[must_use]
    pub fn from_controls(controls: &ControlsView) -> Self {
        Self {
            theme: controls.mode,
            animations_enabled: controls.animations_enabled,
            timezone: controls.timezone.clone(),
        }
    }
}

impl From<&PreferenceRecord> for SettingsDraft {
    fn from(record: &PreferenceRecord) -> Self {
        Self {
            theme: record.theme,
            animations_enabled: record.animations_enabled,
            timezone: record.timezone.clone(),
        }
    }
}

/// What this tab last painted, and the signals it was painted with.
#[derive(Debug, Default)]
struct Painted {
    signals: SystemSignals,
    /// `None` until `init`.
    record: Option<PreferenceRecord>,
    /// Motion flag of the last paint.
    motion: Option<bool>,
}

pub struct PreferenceSync {
    store: PreferenceStore,
    surface: Arc<dyn Surface>,
    state: Mutex<Painted>,
}

impl PreferenceSync {
    #[must_use]
    pub fn new(store: PreferenceStore, surface: Arc<dyn Surface>) -> Self {
        Self { store, surface, state: Mutex::new(Painted::default()) }
    }

    /// Page-load paint: read (repairing if needed), resolve, mirror, paint.
    pub fn init(&self, signals: SystemSignals) -> PreferenceRecord {
        let mut state = self.lock();
        state.signals = signals;
        let record = self.store.read();
        log::debug!("preferences loaded: theme={} animations={}", record.theme.as_str(), record.animations_enabled);
        self.publish(&mut state, record.clone(), false);
        record
    }

    /// Flip the painted theme, storing the result as an explicit mode.
    pub fn toggle(&self) -> EffectiveTheme {
        let (_, effective) = self.transition("toggle", |record, signals| {
            record.theme = resolve(record, signals.prefers_dark).opposite().into();
        });
        effective
    }

    /// Store `mode` as chosen from the settings radios.
    pub fn select_mode(&self, mode: ThemeMode) -> EffectiveTheme {
        let (_, effective) = self.transition("select mode", |record, _| record.theme = mode);
        effective
    }

    /// OS colour scheme changed. Only repaints when the stored mode is `auto`.
    pub fn system_scheme_changed(&self, prefers_dark: bool) {
        let mut state = self.lock();
        state.signals.prefers_dark = prefers_dark;
        let record = self.last(&state);
        if record.theme != ThemeMode::Auto {
            log::debug!("os scheme changed (dark={prefers_dark}), explicit mode kept");
            return;
        }
        log::info!("os scheme changed (dark={prefers_dark}), repainting auto theme");
        self.publish(&mut state, record, false);
    }

    /// OS reduced-motion setting changed. Stored intent is left alone.
    pub fn reduced_motion_changed(&self, reduced_motion: bool) {
        let mut state = self.lock();
        state.signals.reduced_motion = reduced_motion;
        log::info!("os reduced motion changed (reduce={reduced_motion})");
        let record = self.last(&state);
        self.apply(&mut state, record);
    }

    pub fn set_animations(&self, enabled: bool) -> PreferenceRecord {
        self.transition("animations", |record, _| record.animations_enabled = enabled).0
    }

    pub fn set_timezone(&self, timezone: &str) -> PreferenceRecord {
        self.transition("timezone", |record, _| timezone.clone_into(&mut record.timezone)).0
    }

    /// Apply the settings panel form in one write.
    pub fn save(&self, draft: &SettingsDraft) -> PreferenceRecord {
        self.transition("save", |record, _| {
            record.theme = draft.theme;
            record.animations_enabled = draft.animations_enabled;
            draft.timezone.clone_into(&mut record.timezone);
        })
        .0
    }

    /// Replace the stored record with defaults.
    pub fn reset(&self) -> PreferenceRecord {
        let mut state = self.lock();
        let record = PreferenceRecord::fresh();
        log::info!("preferences reset to defaults");
        self.publish(&mut state, record.clone(), true);
        record
    }

    /// Repaint from storage after another tab changed it.
    pub fn reload(&self) -> PreferenceRecord {
        let mut state = self.lock();
        let record = self.store.read();
        log::debug!("preferences changed in another tab, repainting");
        self.apply(&mut state, record.clone());
        record
    }

    /// The record as last painted in this tab.
    #[must_use]
    pub fn current(&self) -> PreferenceRecord {
        let state = self.lock();
        self.last(&state)
    }

    #[must_use]
    pub fn signals(&self) -> SystemSignals {
        self.lock().signals
    }

    fn lock(&self) -> MutexGuard<'_, Painted> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn last(&self, state: &Painted) -> PreferenceRecord {
        state.record.clone().unwrap_or_else(|| self.store.read())
    }

    fn transition(
        &self,
        name: &str,
        change: impl FnOnce(&mut PreferenceRecord, &SystemSignals),
    ) -> (PreferenceRecord, EffectiveTheme) {
        let mut state = self.lock();
        let mut record = self.last(&state);
        change(&mut record, &state.signals);
        record.touch();
        log::info!(
            "preferences {name}: theme={} animations={} timezone={}",
            record.theme.as_str(),
            record.animations_enabled,
            record.timezone
        );
        let effective = self.publish(&mut state, record.clone(), true);
        (record, effective)
    }

    /// Write (optionally), mirror, then paint.
    fn publish(&self, state: &mut Painted, record: PreferenceRecord, write: bool) -> EffectiveTheme {
        if write && let Err(err) = self.store.write(&record) {
            log::warn!("could not persist preferences: {err}");
        }
        let effective = resolve(&record, state.signals.prefers_dark);
        if let Err(err) = self.store.mirror(effective) {
            log::warn!("could not mirror theme: {err}");
        }
        self.apply(state, record);
        effective
    }

    fn apply(&self, state: &mut Painted, record: PreferenceRecord) {
        let signals = state.signals;
        let next = Paint::new(&record, resolve(&record, signals.prefers_dark), signals.reduced_motion);
        paint(self.surface.as_ref(), &next, state.motion);
        state.motion = Some(next.motion);
        state.record = Some(record);
    }
}
