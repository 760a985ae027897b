use super::*;
use crate::util::storage::MemoryStorage;

fn store_over(storage: &MemoryStorage) -> PreferenceStore {
    PreferenceStore::new(Arc::new(storage.clone()))
}

fn record_with(theme: ThemeMode) -> PreferenceRecord {
    PreferenceRecord { theme, ..PreferenceRecord::default() }
}

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_truth_table() {
    for theme in ThemeMode::ALL {
        for prefers_dark in [true, false] {
            let expected_dark = theme == ThemeMode::Dark || (theme == ThemeMode::Auto && prefers_dark);
            let got = resolve(&record_with(theme), prefers_dark);
            assert_eq!(got.is_dark(), expected_dark, "theme={theme:?} prefers_dark={prefers_dark}");
        }
    }
}

#[test]
fn explicit_modes_ignore_system_signal() {
    assert_eq!(resolve(&record_with(ThemeMode::Light), true), EffectiveTheme::Light);
    assert_eq!(resolve(&record_with(ThemeMode::Dark), false), EffectiveTheme::Dark);
}

// =============================================================
// ThemeMode / EffectiveTheme
// =============================================================

#[test]
fn theme_mode_names_match_wire_format() {
    for mode in ThemeMode::ALL {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{}\"", mode.as_str()));
    }
    assert!(serde_json::from_str::<ThemeMode>("\"sepia\"").is_err());
}

#[test]
fn effective_theme_opposite_flips() {
    assert_eq!(EffectiveTheme::Light.opposite(), EffectiveTheme::Dark);
    assert_eq!(EffectiveTheme::Dark.opposite(), EffectiveTheme::Light);
}

// =============================================================
// PreferenceStore
// =============================================================

#[test]
fn read_on_empty_storage_returns_and_persists_default() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);

    let record = store.read();
    assert_eq!(record.theme, ThemeMode::Light);
    assert!(record.animations_enabled);
    assert_eq!(record.timezone, "auto");
    assert!(record.created_at.is_some());

    let persisted: PreferenceRecord = load_json(&storage, USER_SETTINGS_KEY).unwrap().unwrap();
    assert_eq!(persisted, record);
}

#[test]
fn read_repairs_corrupt_json() {
    let storage = MemoryStorage::new();
    storage.set(USER_SETTINGS_KEY, "{\"theme\":").unwrap();
    let record = store_over(&storage).read();
    assert_eq!(record.theme, ThemeMode::Light);
    let raw = storage.get(USER_SETTINGS_KEY).unwrap().unwrap();
    assert!(serde_json::from_str::<PreferenceRecord>(&raw).is_ok());
}

#[test]
fn read_treats_unknown_theme_as_corrupt() {
    let storage = MemoryStorage::new();
    storage.set(USER_SETTINGS_KEY, r#"{"theme":"sepia","animations":false}"#).unwrap();
    let record = store_over(&storage).read();
    assert_eq!(record.theme, ThemeMode::Light);
    assert!(record.animations_enabled);
}

#[test]
fn read_fills_missing_fields_and_ignores_unknown_ones() {
    let storage = MemoryStorage::new();
    storage
        .set(USER_SETTINGS_KEY, r#"{"theme":"dark","themeUpdated":"2024-01-01T00:00:00Z"}"#)
        .unwrap();
    let record = store_over(&storage).read();
    assert_eq!(record.theme, ThemeMode::Dark);
    assert!(record.animations_enabled);
    assert_eq!(record.timezone, "auto");
    assert_eq!(record.settings_version, None);
}

#[test]
fn write_then_read_round_trips() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    let record = PreferenceRecord {
        theme: ThemeMode::Auto,
        animations_enabled: false,
        timezone: "Europe/Moscow".to_owned(),
        settings_version: None,
        created_at: Some("2024-01-01T00:00:00Z".to_owned()),
        updated_at: Some("2024-02-01T00:00:00Z".to_owned()),
    };
    store.write(&record).unwrap();
    assert_eq!(store.read(), record);
}

#[test]
fn write_uses_legacy_wire_names() {
    let storage = MemoryStorage::new();
    store_over(&storage).write(&PreferenceRecord::default()).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&storage.get(USER_SETTINGS_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(raw["theme"], "light");
    assert_eq!(raw["animations"], true);
    assert_eq!(raw["timezone"], "auto");
    assert_eq!(raw["settingsVersion"], "1.0");
}

#[test]
fn mirror_records_effective_theme() {
    let storage = MemoryStorage::new();
    let store = store_over(&storage);
    assert_eq!(storage.get(SITE_THEME_KEY).unwrap(), None);
    store.mirror(EffectiveTheme::Dark).unwrap();
    assert_eq!(storage.get(SITE_THEME_KEY).unwrap().as_deref(), Some("dark"));
}
