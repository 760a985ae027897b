//! Glass header of the home page; slides away while scrolling down.

use leptos::prelude::*;

use crate::components::current_time::CurrentTime;
use crate::components::settings_panel::SettingsButton;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::user_info::{LogoutButton, UserInfo};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "csr")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = web_sys::window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
            let _ = ui.try_update(|state| state.scrolled(offset));
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <header
            class="glass-header"
            style:transform=move || if ui.with(|s| s.header_hidden) { "translateY(-100%)" } else { "translateY(0)" }
        >
            <UserInfo/>
            <CurrentTime/>
            <nav class="header-actions">
                <ThemeToggle/>
                <SettingsButton/>
                <LogoutButton/>
            </nav>
        </header>
    }
}
