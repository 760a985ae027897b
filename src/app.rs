//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notification::Notification;
use crate::components::settings_panel::SettingsPanel;
use crate::components::theme_toggle::FloatingThemeToggle;
use crate::config::USER_SETTINGS_KEY;
use crate::pages::{gate::GatePage, home::HomePage, login::LoginPage, register::RegisterPage};
use crate::site::Site;
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::media;
use crate::util::paint::{ControlsView, theme_color};

/// Root application component.
///
/// Provides shared services and state, paints the stored preferences, and
/// sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controls = RwSignal::new(ControlsView::default());
    let ui = RwSignal::new(UiState::default());
    let auth = RwSignal::new(AuthState::default());
    let site = Site::browser(controls);

    provide_context(controls);
    provide_context(ui);
    provide_context(auth);
    provide_context(site.clone());

    site.prefs.init(media::read_signals());
    watch_system(&site);

    view! {
        <Title text="Glass"/>
        <Meta name="theme-color" content=move || theme_color(controls.with(|c| c.effective))/>

        <FloatingThemeToggle/>
        <SettingsPanel/>
        <Notification/>

        <Router>
            <Routes fallback=|| "Страница не найдена.".into_view()>
                <Route path=StaticSegment("") view=GatePage/>
                <Route path=StaticSegment("home") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
            </Routes>
        </Router>
    }
}

/// Route OS media changes and other tabs' writes into `PreferenceSync`.
fn watch_system(site: &Site) {
    let prefs = site.prefs.clone();
    media::watch(media::PREFERS_DARK, move |dark| prefs.system_scheme_changed(dark));

    let prefs = site.prefs.clone();
    media::watch(media::PREFERS_REDUCED_MOTION, move |reduce| prefs.reduced_motion_changed(reduce));

    let prefs = site.prefs.clone();
    media::watch_storage(USER_SETTINGS_KEY, move || {
        prefs.reload();
    });
}
