//! Local registration page (`#registerForm`).

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::form_status::{FormMessage, SignalForm};
use crate::components::password_input::PasswordInput;
use crate::components::theme_toggle::CompactThemeToggle;
use crate::pages::stage_entrance;
use crate::site::Site;
use crate::util::form::RegistrationForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let site = expect_context::<Site>();
    let form = SignalForm::new("registerForm", "registerPassword", site.scheduler.clone(), site.config.delays.shake);
    let status = form.status;
    let password = form.secret;
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let flow = site.auth_flow();

    stage_entrance(&site);

    let edited = form.clone();
    let on_input = Callback::new(move |()| edited.edited());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = RegistrationForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        flow.submit_registration(&values, Arc::new(form.clone()));
    };

    let text_input = move |id: &'static str, kind: &'static str, placeholder: &'static str, value: RwSignal<String>| {
        view! {
            <div class="input-group">
                <input
                    id=id
                    class="glass-input"
                    type=kind
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        value.set(event_target_value(&ev));
                        on_input.run(());
                    }
                />
            </div>
        }
    };

    view! {
        <main class="auth-page">
            <div class="glass-container register-form fade-up">
                <h1>"Регистрация"</h1>
                <form id="registerForm" on:submit=on_submit>
                    {text_input("registerName", "text", "Имя", name)}
                    {text_input("registerEmail", "email", "Email", email)}
                    <PasswordInput id="registerPassword" value=password placeholder="Пароль" on_input=on_input/>
                    <PasswordInput id="confirmPassword" value=confirm placeholder="Повторите пароль" on_input=on_input/>
                    <button class="submit-btn" type="submit" disabled=move || status.with(|s| s.is_busy())>
                        {move || status.with(|s| s.button_label("Зарегистрироваться"))}
                    </button>
                    <FormMessage status=status/>
                </form>
                <p class="auth-switch">
                    "Уже есть аккаунт? " <a href=site.config.routes.login.clone()>"Войти"</a>
                </p>
                <CompactThemeToggle/>
            </div>
        </main>
    }
}
