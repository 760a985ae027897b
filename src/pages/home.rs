//! Home page: greeting header, welcome block, and the card grid.

use leptos::prelude::*;

use crate::components::header::Header;
use crate::pages::{restage_cards_on_resize, stage_entrance};
use crate::site::Site;
use crate::state::auth::AuthState;

/// `(icon, title, text)` of each grid card.
pub const CARDS: [(&str, &str, &str); 6] = [
    ("🎨", "Дизайн", "Стеклянный интерфейс с плавными градиентами"),
    ("🌓", "Темы", "Светлая, тёмная или как в системе"),
    ("⚡", "Скорость", "Без сервера: всё работает в браузере"),
    ("📱", "Адаптивность", "Удобно на телефоне и на компьютере"),
    ("🔒", "Доступ", "Вход по паролю на главной странице"),
    ("⚙️", "Настройки", "Анимации и часовой пояс сохраняются"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let site = expect_context::<Site>();
    let auth = expect_context::<RwSignal<AuthState>>();
    auth.set(AuthState::load(&site.session));

    stage_entrance(&site);
    restage_cards_on_resize(&site);

    let first_name = move || {
        auth.with(|state| state.user.as_ref().map(|u| u.name.clone()))
            .unwrap_or_default()
    };

    let cards = CARDS
        .into_iter()
        .map(|(icon, title, text)| {
            view! {
                <article class="grid-card glass-card">
                    <div class="card-icon">{icon}</div>
                    <h3>{title}</h3>
                    <p>{text}</p>
                </article>
            }
        })
        .collect_view();

    view! {
        <Header/>
        <main class="content-wrapper">
            <section class="welcome-section fade-up">
                <h1>{move || format!("Привет, {}!", first_name())}</h1>
                <p>"Рады видеть вас снова"</p>
            </section>
            <section class="grid-table">{cards}</section>
        </main>
        <footer class="footer fade-up">
            <p>"© Glass"</p>
        </footer>
    }
}
