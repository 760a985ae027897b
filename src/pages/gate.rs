//! Landing page asking for the shared site password.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::form_status::{FormMessage, SignalForm, focus};
use crate::components::password_input::PasswordInput;
use crate::components::theme_toggle::CompactThemeToggle;
use crate::pages::stage_entrance;
use crate::site::Site;
use crate::util::form::FormStatus;
use crate::util::gate::submit_label;

#[component]
pub fn GatePage() -> impl IntoView {
    let site = expect_context::<Site>();
    let form = SignalForm::new("passwordForm", "password", site.scheduler.clone(), site.config.delays.shake);
    let status = form.status;
    let secret = form.secret;
    let gate = site.gate();

    stage_entrance(&site);
    site.scheduler.schedule(site.config.delays.focus, Box::new(|| focus("password")));

    let edited = form.clone();
    let on_input = Callback::new(move |()| edited.edited());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        gate.submit(&secret.get_untracked(), Arc::new(form.clone()));
    };

    let locked = move || status.with(|s| s.is_busy() || matches!(s, FormStatus::Succeeded(_)));

    view! {
        <main class="password-page">
            <div class="glass-container password-form-container fade-up">
                <h1>"Добро пожаловать"</h1>
                <p class="subtitle">"Введите пароль для входа на сайт"</p>
                <form id="passwordForm" class="password-form" on:submit=on_submit>
                    <PasswordInput id="password" value=secret placeholder="Пароль" on_input=on_input/>
                    <button
                        id="submitBtn"
                        class="submit-btn"
                        type="submit"
                        class:success=move || matches!(status.get(), FormStatus::Succeeded(_))
                        disabled=locked
                    >
                        <span>{move || status.with(submit_label)}</span>
                    </button>
                </form>
                <FormMessage status=status id="message"/>
                <div class="theme-section">
                    <CompactThemeToggle/>
                </div>
            </div>
        </main>
    }
}
