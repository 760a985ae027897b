use super::*;

fn record(theme: ThemeMode, animations_enabled: bool) -> PreferenceRecord {
    PreferenceRecord { theme, animations_enabled, ..PreferenceRecord::default() }
}

// =============================================================
// paint
// =============================================================

#[test]
fn paint_is_idempotent() {
    for (theme, effective, animations) in [
        (ThemeMode::Light, EffectiveTheme::Light, true),
        (ThemeMode::Dark, EffectiveTheme::Dark, false),
        (ThemeMode::Auto, EffectiveTheme::Dark, true),
    ] {
        let p = Paint::new(&record(theme, animations), effective, false);
        let once = MemorySurface::default();
        paint(&once, &p, None);
        let twice = MemorySurface::default();
        paint(&twice, &p, None);
        paint(&twice, &p, None);
        assert_eq!(once.snapshot(), twice.snapshot());
    }
}

#[test]
fn paint_sets_theme_attribute_and_meta_color() {
    let surface = MemorySurface::default();
    paint(&surface, &Paint::new(&record(ThemeMode::Dark, true), EffectiveTheme::Dark, false), None);
    let snap = surface.snapshot();
    assert_eq!(snap.attributes.get(THEME_ATTRIBUTE).map(String::as_str), Some("dark"));
    assert_eq!(snap.meta.get(THEME_COLOR_META).map(String::as_str), Some("#121212"));
    assert!(snap.styles["background"].contains("#121212"));
    assert_eq!(snap.styles["background-size"], "400% 400%");
}

#[test]
fn repaint_replaces_previous_theme() {
    let surface = MemorySurface::default();
    paint(&surface, &Paint::new(&record(ThemeMode::Dark, true), EffectiveTheme::Dark, false), None);
    paint(&surface, &Paint::new(&record(ThemeMode::Light, true), EffectiveTheme::Light, false), None);
    let snap = surface.snapshot();
    assert_eq!(snap.attributes[THEME_ATTRIBUTE], "light");
    assert_eq!(snap.meta[THEME_COLOR_META], "#e73c7e");
}

#[test]
fn disabled_animations_set_zero_speed_and_pause() {
    let surface = MemorySurface::default();
    paint(&surface, &Paint::new(&record(ThemeMode::Light, false), EffectiveTheme::Light, false), None);
    let snap = surface.snapshot();
    assert_eq!(snap.styles.get(ANIMATION_SPEED_VAR).map(String::as_str), Some("0s"));
    assert!(snap.paused);
}

#[test]
fn enabling_animations_clears_override_and_resumes() {
    let surface = MemorySurface::default();
    paint(&surface, &Paint::new(&record(ThemeMode::Light, false), EffectiveTheme::Light, false), None);
    paint(&surface, &Paint::new(&record(ThemeMode::Light, true), EffectiveTheme::Light, false), None);
    let snap = surface.snapshot();
    assert!(!snap.styles.contains_key(ANIMATION_SPEED_VAR));
    assert!(!snap.paused);
}

#[test]
fn repaint_skips_element_walk_when_motion_unchanged() {
    let surface = MemorySurface::default();
    let dark = Paint::new(&record(ThemeMode::Dark, true), EffectiveTheme::Dark, false);
    let light = Paint::new(&record(ThemeMode::Light, true), EffectiveTheme::Light, false);
    paint(&surface, &dark, None);
    paint(&surface, &light, Some(true));
    assert_eq!(surface.motion_walks(), 1);
    assert_eq!(surface.snapshot().attributes[THEME_ATTRIBUTE], "light");

    let still = Paint::new(&record(ThemeMode::Light, false), EffectiveTheme::Light, false);
    paint(&surface, &still, Some(true));
    assert_eq!(surface.motion_walks(), 2);
    assert!(surface.snapshot().paused);
}

#[test]
fn paused_repaint_keeps_root_paused_after_animation_reset() {
    let surface = MemorySurface::default();
    let paused = Paint::new(&record(ThemeMode::Dark, false), EffectiveTheme::Dark, false);
    paint(&surface, &paused, Some(false));
    assert_eq!(surface.motion_walks(), 0);
    assert_eq!(surface.snapshot().styles["animation-play-state"], "paused");
}

#[test]
fn reduced_motion_pauses_without_touching_stored_flag() {
    let p = Paint::new(&record(ThemeMode::Light, true), EffectiveTheme::Light, true);
    assert!(!p.motion);
    assert!(p.controls.animations_enabled);
}

// =============================================================
// ControlsView
// =============================================================

#[test]
fn toggle_labels_describe_the_next_action() {
    let light = Paint::new(&record(ThemeMode::Light, true), EffectiveTheme::Light, false).controls;
    assert_eq!(light.toggle_icon(), "🌙");
    assert_eq!(light.toggle_title(), "Включить тёмную тему");
    assert_eq!(light.toggle_text(), "Тёмная тема");
    assert_eq!(light.toggle_caption(), "🌙 Тёмная");

    let dark = Paint::new(&record(ThemeMode::Dark, true), EffectiveTheme::Dark, false).controls;
    assert_eq!(dark.toggle_icon(), "☀️");
    assert_eq!(dark.toggle_title(), "Включить светлую тему");
    assert_eq!(dark.toggle_text(), "Светлая тема");
    assert_eq!(dark.toggle_caption(), "☀️ Светлая");
}

#[test]
fn radios_follow_stored_mode_not_painted_theme() {
    let controls = Paint::new(&record(ThemeMode::Auto, true), EffectiveTheme::Dark, false).controls;
    assert!(controls.is_selected(ThemeMode::Auto));
    assert!(!controls.is_selected(ThemeMode::Dark));
    assert_eq!(controls.toggle_icon(), "☀️");
}

#[cfg(not(feature = "csr"))]
#[test]
fn document_surface_is_noop_outside_browser() {
    paint(&DocumentSurface, &Paint::new(&record(ThemeMode::Dark, false), EffectiveTheme::Dark, false), None);
}
