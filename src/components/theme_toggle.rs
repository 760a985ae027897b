//! Theme toggle buttons: the floating one on every page and the inline one
//! in the home header.

use leptos::prelude::*;

use crate::site::Site;
use crate::util::paint::ControlsView;

/// `#themeToggleFloating`, fixed in a corner of every page.
#[component]
pub fn FloatingThemeToggle() -> impl IntoView {
    let site = expect_context::<Site>();
    let controls = expect_context::<RwSignal<ControlsView>>();
    view! {
        <button
            id="themeToggleFloating"
            class="theme-toggle-floating"
            type="button"
            title=move || controls.with(ControlsView::toggle_title)
            aria-label=move || controls.with(ControlsView::toggle_title)
            on:click=move |_| {
                site.prefs.toggle();
            }
        >
            {move || controls.with(ControlsView::toggle_icon)}
        </button>
    }
}

/// `#themeToggle`, with a separate icon and text.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let site = expect_context::<Site>();
    let controls = expect_context::<RwSignal<ControlsView>>();
    view! {
        <button
            id="themeToggle"
            class="theme-toggle nav-btn"
            type="button"
            title=move || controls.with(ControlsView::toggle_title)
            on:click=move |_| {
                site.prefs.toggle();
            }
        >
            <span class="theme-icon">{move || controls.with(ControlsView::toggle_icon)}</span>
            <span class="theme-text">{move || controls.with(ControlsView::toggle_text)}</span>
        </button>
    }
}

/// Compact toggle for the gate and auth pages, icon and word in one label.
#[component]
pub fn CompactThemeToggle() -> impl IntoView {
    let site = expect_context::<Site>();
    let controls = expect_context::<RwSignal<ControlsView>>();
    view! {
        <button
            class="theme-switch btn"
            type="button"
            title=move || controls.with(ControlsView::toggle_title)
            on:click=move |_| {
                site.prefs.toggle();
            }
        >
            {move || controls.with(ControlsView::toggle_caption)}
        </button>
    }
}
