use super::*;
use crate::config::{SITE_THEME_KEY, USER_SETTINGS_KEY};
use crate::error::StorageError;
use crate::util::paint::{MemorySurface, THEME_ATTRIBUTE};
use crate::util::storage::{KeyValueStore, MemoryStorage, load_json};

struct Fixture {
    storage: MemoryStorage,
    surface: Arc<MemorySurface>,
    sync: PreferenceSync,
}

fn fixture() -> Fixture {
    let storage = MemoryStorage::new();
    let surface = Arc::new(MemorySurface::default());
    let sync = PreferenceSync::new(PreferenceStore::new(Arc::new(storage.clone())), surface.clone());
    Fixture { storage, surface, sync }
}

impl Fixture {
    fn stored(&self) -> PreferenceRecord {
        load_json(&self.storage, USER_SETTINGS_KEY).unwrap().unwrap()
    }

    fn painted(&self) -> String {
        self.surface.snapshot().attributes[THEME_ATTRIBUTE].clone()
    }

    fn mirrored(&self) -> Option<String> {
        self.storage.get(SITE_THEME_KEY).unwrap()
    }

    fn store_theme(&self, theme: ThemeMode) {
        let record = PreferenceRecord { theme, ..PreferenceRecord::default() };
        PreferenceStore::new(Arc::new(self.storage.clone())).write(&record).unwrap();
    }
}

/// Reads like `MemoryStorage`; every write fails as a full quota would.
struct FullStorage(MemoryStorage);

impl KeyValueStore for FullStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.0.get(key)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_owned()))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.0.remove(key)
    }
}

fn full_fixture() -> (Arc<MemorySurface>, PreferenceSync) {
    let surface = Arc::new(MemorySurface::default());
    let store = PreferenceStore::new(Arc::new(FullStorage(MemoryStorage::new())));
    let sync = PreferenceSync::new(store, surface.clone());
    (surface, sync)
}

const OS_DARK: SystemSignals = SystemSignals { prefers_dark: true, reduced_motion: false };
const OS_LIGHT: SystemSignals = SystemSignals { prefers_dark: false, reduced_motion: false };

// =============================================================
// init
// =============================================================

#[test]
fn init_on_empty_storage_paints_light_and_persists_default() {
    let f = fixture();
    let record = f.sync.init(OS_DARK);
    assert_eq!(record.theme, ThemeMode::Light);
    assert_eq!(f.painted(), "light");
    assert_eq!(f.stored().theme, ThemeMode::Light);
    assert_eq!(f.mirrored().as_deref(), Some("light"));
}

#[test]
fn init_resolves_auto_from_os_signal() {
    let f = fixture();
    f.store_theme(ThemeMode::Auto);
    f.sync.init(OS_DARK);
    assert_eq!(f.painted(), "dark");
    let controls = f.surface.snapshot().controls.unwrap();
    assert!(controls.is_selected(ThemeMode::Auto));
}

// =============================================================
// toggle
// =============================================================

#[test]
fn toggle_from_auto_dark_stores_explicit_light() {
    let f = fixture();
    f.store_theme(ThemeMode::Auto);
    f.sync.init(OS_DARK);

    assert_eq!(f.sync.toggle(), EffectiveTheme::Light);
    assert_eq!(f.stored().theme, ThemeMode::Light);
    assert_eq!(f.painted(), "light");
    assert_eq!(f.mirrored().as_deref(), Some("light"));
}

#[test]
fn toggle_twice_returns_to_start() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    assert_eq!(f.sync.toggle(), EffectiveTheme::Dark);
    assert_eq!(f.sync.toggle(), EffectiveTheme::Light);
    assert_eq!(f.stored().theme, ThemeMode::Light);
    assert!(f.stored().updated_at.is_some());
}

#[test]
fn toggle_preserves_other_fields() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    f.sync.set_animations(false);
    f.sync.set_timezone("Asia/Tokyo");
    f.sync.toggle();
    let stored = f.stored();
    assert_eq!(stored.theme, ThemeMode::Dark);
    assert!(!stored.animations_enabled);
    assert_eq!(stored.timezone, "Asia/Tokyo");
}

// =============================================================
// select_mode / system signals
// =============================================================

#[test]
fn select_auto_follows_current_os_signal() {
    let f = fixture();
    f.sync.init(OS_DARK);
    assert_eq!(f.sync.select_mode(ThemeMode::Auto), EffectiveTheme::Dark);
    assert_eq!(f.stored().theme, ThemeMode::Auto);
    assert_eq!(f.painted(), "dark");
}

#[test]
fn os_change_repaints_auto() {
    let f = fixture();
    f.store_theme(ThemeMode::Auto);
    f.sync.init(OS_LIGHT);
    f.sync.system_scheme_changed(true);
    assert_eq!(f.painted(), "dark");
    assert_eq!(f.mirrored().as_deref(), Some("dark"));
    assert_eq!(f.stored().theme, ThemeMode::Auto);
}

#[test]
fn os_change_is_ignored_for_explicit_mode() {
    let f = fixture();
    f.store_theme(ThemeMode::Light);
    f.sync.init(OS_LIGHT);
    f.sync.system_scheme_changed(true);
    assert_eq!(f.painted(), "light");
    assert!(f.sync.signals().prefers_dark);
}

#[test]
fn reduced_motion_pauses_without_changing_stored_flag() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    f.sync.reduced_motion_changed(true);
    assert!(f.surface.snapshot().paused);
    assert!(f.stored().animations_enabled);

    f.sync.reduced_motion_changed(false);
    assert!(!f.surface.snapshot().paused);
}

#[test]
fn disabling_animations_pauses_motion() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    let record = f.sync.set_animations(false);
    assert!(!record.animations_enabled);
    assert!(f.surface.snapshot().paused);
}

// =============================================================
// save / reset / reload
// =============================================================

#[test]
fn save_applies_draft_in_one_write() {
    let f = fixture();
    f.sync.init(OS_DARK);
    let draft = SettingsDraft { theme: ThemeMode::Auto, animations_enabled: false, timezone: "Europe/London".to_owned() };
    f.sync.save(&draft);
    assert_eq!(SettingsDraft::from(&f.stored()), draft);
    assert_eq!(f.painted(), "dark");
    let controls = f.surface.snapshot().controls.unwrap();
    assert_eq!(controls.timezone, "Europe/London");
    assert!(!controls.animations_enabled);
}

#[test]
fn reset_restores_defaults() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    f.sync.toggle();
    f.sync.set_animations(false);
    let record = f.sync.reset();
    assert_eq!(record.theme, ThemeMode::Light);
    assert!(record.animations_enabled);
    assert_eq!(f.stored().timezone, "auto");
    assert_eq!(f.painted(), "light");
}

#[test]
fn reload_picks_up_external_write() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    f.store_theme(ThemeMode::Dark);
    assert_eq!(f.sync.reload().theme, ThemeMode::Dark);
    assert_eq!(f.painted(), "dark");
}

#[test]
fn repeated_init_paints_identically() {
    let f = fixture();
    f.sync.init(OS_DARK);
    let first = f.surface.snapshot();
    f.sync.init(OS_DARK);
    assert_eq!(f.surface.snapshot(), first);
}

#[test]
fn draft_from_painted_controls_matches_stored_record() {
    let f = fixture();
    f.store_theme(ThemeMode::Auto);
    let record = f.sync.init(OS_DARK);
    let controls = f.surface.snapshot().controls.unwrap();
    assert_eq!(SettingsDraft::from_controls(&controls), SettingsDraft::from(&record));
}

// =============================================================
// rejected writes
// =============================================================

#[test]
fn toggle_alternates_when_storage_rejects_writes() {
    let (surface, sync) = full_fixture();
    sync.init(OS_LIGHT);
    let mut painted = vec![surface.snapshot().attributes[THEME_ATTRIBUTE].clone()];
    for _ in 0..3 {
        sync.toggle();
        painted.push(surface.snapshot().attributes[THEME_ATTRIBUTE].clone());
    }
    assert_eq!(painted, ["light", "dark", "light", "dark"]);
}

#[test]
fn settings_edits_accumulate_when_storage_rejects_writes() {
    let (surface, sync) = full_fixture();
    sync.init(OS_LIGHT);
    sync.set_animations(false);
    let record = sync.set_timezone("Asia/Tokyo");
    assert!(!record.animations_enabled);
    assert_eq!(record.timezone, "Asia/Tokyo");
    assert_eq!(sync.current(), record);

    let controls = surface.snapshot().controls.unwrap();
    assert!(!controls.animations_enabled);
    assert!(surface.snapshot().paused);
}

#[test]
fn theme_toggle_leaves_element_motion_alone() {
    let f = fixture();
    f.sync.init(OS_LIGHT);
    f.sync.toggle();
    f.sync.toggle();
    assert_eq!(f.surface.motion_walks(), 1);

    f.sync.set_animations(false);
    assert_eq!(f.surface.motion_walks(), 2);
}
