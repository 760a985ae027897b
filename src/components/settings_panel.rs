//! Settings panel: theme mode, animations, timezone.
//!
//! Inputs apply immediately through `PreferenceSync`; "save" writes the
//! whole form again and closes the panel. Reset asks for a second press
//! before it replaces the stored record with defaults.

use leptos::prelude::*;

use crate::components::form_status::focus;
use crate::components::notification::notify;
use crate::site::Site;
use crate::state::preferences::{DEFAULT_TIMEZONE, ThemeMode};
use crate::state::ui::UiState;
use crate::util::clock::KNOWN_TIMEZONES;
use crate::util::entrance;
use crate::util::paint::ControlsView;
use crate::util::preference_sync::SettingsDraft;

pub const SAVED_NOTICE: &str = "Настройки сохранены!";
pub const RESET_NOTICE: &str = "Настройки сброшены";
pub const RESET_LABEL: &str = "Сбросить";
pub const RESET_CONFIRM_LABEL: &str = "Точно сбросить?";

/// `#settingsBtn` opening the panel.
#[component]
pub fn SettingsButton() -> impl IntoView {
    let site = expect_context::<Site>();
    let ui = expect_context::<RwSignal<UiState>>();
    let on_open = move |_| {
        ui.update(UiState::open_settings);
        site.scheduler.schedule(site.config.delays.panel_focus, Box::new(|| focus("themeLight")));
    };
    view! {
        <button id="settingsBtn" class="settings-btn nav-btn" type="button" title="Настройки" on:click=on_open>
            "⚙️"
        </button>
    }
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let site = expect_context::<Site>();
    let ui = expect_context::<RwSignal<UiState>>();
    let controls = expect_context::<RwSignal<ControlsView>>();

    let open = move || ui.with(|state| state.settings_open);
    let close = move || ui.update(UiState::close_settings);

    let prefs = site.prefs.clone();
    let on_mode = move |mode: ThemeMode| {
        prefs.select_mode(mode);
    };

    let prefs = site.prefs.clone();
    let scheduler = site.scheduler.clone();
    let on_animations = move |ev: leptos::ev::Event| {
        let enabled = event_target_checked(&ev);
        prefs.set_animations(enabled);
        if enabled {
            entrance::run(scheduler.as_ref(), entrance::motion_allowed(&prefs));
        }
    };

    let prefs = site.prefs.clone();
    let on_timezone = move |ev: leptos::ev::Event| {
        prefs.set_timezone(&event_target_value(&ev));
    };

    let save_site = site.clone();
    let on_save = move |_| {
        let draft = SettingsDraft::from_controls(&controls.get_untracked());
        save_site.prefs.save(&draft);
        notify(&save_site, ui, SAVED_NOTICE);
        close();
    };

    let reset_site = site.clone();
    let on_reset = move |_| {
        if !ui.with_untracked(|state| state.confirm_reset) {
            ui.update(|state| state.confirm_reset = true);
            return;
        }
        reset_site.prefs.reset();
        notify(&reset_site, ui, RESET_NOTICE);
        close();
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close();
        }
    };

    let radios = ThemeMode::ALL
        .into_iter()
        .map(|mode| {
            let on_mode = on_mode.clone();
            let id = match mode {
                ThemeMode::Light => "themeLight",
                ThemeMode::Dark => "themeDark",
                ThemeMode::Auto => "themeAuto",
            };
            view! {
                <label class="settings-radio" for=id>
                    <input
                        id=id
                        type="radio"
                        name="theme"
                        value=mode.as_str()
                        prop:checked=move || controls.with(|c| c.is_selected(mode))
                        on:change=move |_| on_mode(mode)
                    />
                    <span>{mode.label()}</span>
                </label>
            }
        })
        .collect_view();

    let zones = KNOWN_TIMEZONES
        .iter()
        .map(|(zone, label)| {
            view! {
                <option value=*zone selected=move || controls.with(|c| c.timezone == *zone)>
                    {*label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div
            id="settingsOverlay"
            class=move || if open() { "settings-overlay active" } else { "settings-overlay" }
            on:click=move |_| close()
        ></div>
        <aside
            id="settingsPanel"
            class=move || if open() { "settings-panel open" } else { "settings-panel" }
            aria-hidden=move || (!open()).to_string()
            on:keydown=on_keydown
        >
            <header class="settings-header">
                <h2>"Настройки"</h2>
                <button class="settings-close" type="button" aria-label="Закрыть" on:click=move |_| close()>
                    "✕"
                </button>
            </header>

            <section class="settings-section">
                <h3>"Тема"</h3>
                {radios}
            </section>

            <section class="settings-section">
                <label class="settings-toggle" for="animationsToggle">
                    <span>"Анимации"</span>
                    <input
                        id="animationsToggle"
                        type="checkbox"
                        prop:checked=move || controls.with(|c| c.animations_enabled)
                        on:change=on_animations
                    />
                </label>
            </section>

            <section class="settings-section">
                <label for="timezoneSelect">"Часовой пояс"</label>
                <select id="timezoneSelect" on:change=on_timezone>
                    <option value=DEFAULT_TIMEZONE selected=move || controls.with(|c| c.timezone == DEFAULT_TIMEZONE)>
                        "Автоматически"
                    </option>
                    {zones}
                </select>
            </section>

            <footer class="settings-actions">
                <button id="saveSettings" class="btn btn--primary" type="button" on:click=on_save>
                    "Сохранить"
                </button>
                <button id="resetSettings" class="btn" type="button" on:click=on_reset>
                    {move || if ui.with(|s| s.confirm_reset) { RESET_CONFIRM_LABEL } else { RESET_LABEL }}
                </button>
            </footer>
        </aside>
    }
}
