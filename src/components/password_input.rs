//! Password field with a show/hide toggle.

use leptos::prelude::*;

/// Icon of the toggle: a plain eye while hidden, a crossed eye while shown.
#[must_use]
pub fn reveal_icon(visible: bool) -> &'static str {
    if visible { "👁️‍🗨️" } else { "👁️" }
}

#[must_use]
pub fn reveal_label(visible: bool) -> &'static str {
    if visible { "Скрыть пароль" } else { "Показать пароль" }
}

#[component]
pub fn PasswordInput(
    id: &'static str,
    value: RwSignal<String>,
    placeholder: &'static str,
    #[prop(optional)] on_input: Option<Callback<()>>,
) -> impl IntoView {
    let visible = RwSignal::new(false);
    view! {
        <div class="input-group">
            <input
                id=id
                class="glass-input"
                type=move || if visible.get() { "text" } else { "password" }
                placeholder=placeholder
                autocomplete="current-password"
                prop:value=move || value.get()
                on:input=move |ev| {
                    value.set(event_target_value(&ev));
                    if let Some(cb) = on_input {
                        cb.run(());
                    }
                }
            />
            <button
                type="button"
                class="toggle-password"
                aria-label=move || reveal_label(visible.get())
                on:click=move |_| visible.update(|v| *v = !*v)
            >
                {move || reveal_icon(visible.get())}
            </button>
        </div>
    }
}
