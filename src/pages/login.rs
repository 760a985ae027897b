//! Local login page (`#loginForm`).

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::form_status::{FormMessage, SignalForm};
use crate::components::password_input::PasswordInput;
use crate::components::theme_toggle::CompactThemeToggle;
use crate::pages::stage_entrance;
use crate::site::Site;
use crate::util::form::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    let site = expect_context::<Site>();
    let form = SignalForm::new("loginForm", "loginPassword", site.scheduler.clone(), site.config.delays.shake);
    let status = form.status;
    let password = form.secret;
    let email = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let flow = site.auth_flow();

    stage_entrance(&site);

    let edited = form.clone();
    let on_input = Callback::new(move |()| edited.edited());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let values = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
            remember: remember.get_untracked(),
        };
        flow.submit_login(&values, Arc::new(form.clone()));
    };

    view! {
        <main class="auth-page">
            <div class="glass-container login-form fade-up">
                <h1>"Вход"</h1>
                <form id="loginForm" on:submit=on_submit>
                    <div class="input-group">
                        <input
                            id="loginEmail"
                            class="glass-input"
                            type="email"
                            placeholder="Email"
                            autocomplete="email"
                            prop:value=move || email.get()
                            on:input=move |ev| {
                                email.set(event_target_value(&ev));
                                on_input.run(());
                            }
                        />
                    </div>
                    <PasswordInput id="loginPassword" value=password placeholder="Пароль" on_input=on_input/>
                    <label class="remember-me" for="rememberMe">
                        <input
                            id="rememberMe"
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        <span>"Запомнить меня"</span>
                    </label>
                    <button class="submit-btn" type="submit" disabled=move || status.with(|s| s.is_busy())>
                        {move || status.with(|s| s.button_label("Войти"))}
                    </button>
                    <FormMessage status=status/>
                </form>
                <p class="auth-switch">
                    "Нет аккаунта? " <a href=site.config.routes.register.clone()>"Зарегистрироваться"</a>
                </p>
                <p class="auth-switch">
                    <a href=site.config.routes.home.clone()>"Продолжить как гость"</a>
                </p>
                <CompactThemeToggle/>
            </div>
        </main>
    }
}
