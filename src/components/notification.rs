//! Transient toast shown after settings are saved or reset.

use leptos::prelude::*;

use crate::site::Site;
use crate::state::ui::UiState;

/// Show `text` and hide it after `Delays::notice`, unless replaced first.
pub fn notify(site: &Site, ui: RwSignal<UiState>, text: &str) {
    let Some(seq) = ui.try_update(|state| state.show_notice(text)) else {
        return;
    };
    site.scheduler.schedule(
        site.config.delays.notice,
        Box::new(move || {
            let _ = ui.try_update(|state| state.expire_notice(seq));
        }),
    );
}

#[component]
pub fn Notification() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let notice = move || ui.get().notice;
    view! {
        <Show when=move || notice().is_some()>
            <div class="settings-notification" role="alert">
                {move || notice().map(|n| n.text).unwrap_or_default()}
            </div>
        </Show>
    }
}
