//! Greeting block and logout button in the home header.

use leptos::prelude::*;

use crate::site::Site;
use crate::state::auth::AuthState;

/// `#userInfo`: name line, plus email line for registered users.
#[component]
pub fn UserInfo() -> impl IntoView {
    let site = expect_context::<Site>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let loaded = RwSignal::new(false);
    site.scheduler.schedule(
        site.config.delays.focus,
        Box::new(move || {
            let _ = loaded.try_set(true);
        }),
    );

    let greeting = move || auth.with(AuthState::greeting);
    view! {
        <div id="userInfo" class=move || if loaded.get() { "user-info loaded" } else { "user-info" }>
            <div class="user-details">
                <span class="user-name">{move || greeting().map(|g| g.name_line).unwrap_or_default()}</span>
                {move || {
                    greeting()
                        .and_then(|g| g.email_line)
                        .map(|line| view! { <span class="user-email">{line}</span> })
                }}
            </div>
        </div>
    }
}

/// `#logoutBtn`.
#[component]
pub fn LogoutButton() -> impl IntoView {
    let site = expect_context::<Site>();
    let pressed = RwSignal::new(false);
    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        if pressed.get_untracked() {
            return;
        }
        pressed.set(true);
        site.auth_flow().logout();
    };
    view! {
        <button
            id="logoutBtn"
            class="logout-btn nav-btn"
            type="button"
            title="Выйти"
            style:transform=move || if pressed.get() { "scale(0.9)" } else { "" }
            on:click=on_click
        >
            "Выйти"
        </button>
    }
}
