//! The landing-page password gate.
//!
//! A single shared password compared in the browser. It keeps casual
//! visitors on the landing page and nothing more: the password ships in the
//! bundle. No lockout and no attempt counter.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::error::FormError;
use crate::util::form::{FormStatus, FormView};
use crate::util::navigate::{Navigator, navigate_after};
use crate::util::schedule::Scheduler;

pub const CHECKING: &str = "Проверка...";
pub const ACCEPTED: &str = "Пароль верный! Перенаправление...";

/// `#submitBtn` text for the current status.
#[must_use]
pub fn submit_label(status: &FormStatus) -> &'static str {
    match status {
        FormStatus::Succeeded(_) => "Успешно!",
        other => other.button_label("Войти"),
    }
}

#[derive(Clone)]
pub struct Gate {
    config: Arc<SiteConfig>,
    scheduler: Arc<dyn Scheduler>,
    navigator: Arc<dyn Navigator>,
}

impl Gate {
    #[must_use]
    pub fn new(config: Arc<SiteConfig>, scheduler: Arc<dyn Scheduler>, navigator: Arc<dyn Navigator>) -> Self {
        Self { config, scheduler, navigator }
    }

    pub fn submit(&self, input: &str, view: Arc<dyn FormView>) {
        let status = view.status();
        if status.is_busy() || matches!(status, FormStatus::Succeeded(_)) {
            return;
        }
        let password = input.trim().to_owned();
        if password.is_empty() {
            view.set_status(FormStatus::Failed(FormError::EmptyGatePassword));
            view.shake();
            return;
        }
        view.set_status(FormStatus::Busy(CHECKING));
        let gate = self.clone();
        self.scheduler.schedule(self.config.delays.gate_check, Box::new(move || gate.check(&password, view)));
    }

    fn check(&self, password: &str, view: Arc<dyn FormView>) {
        if password == self.config.gate_password {
            log::info!("gate password accepted");
            view.set_status(FormStatus::Succeeded(ACCEPTED));
            navigate_after(
                self.scheduler.as_ref(),
                self.navigator.clone(),
                self.config.delays.redirect,
                &self.config.routes.home,
            );
            return;
        }
        log::info!("gate password rejected");
        let failed = FormStatus::Failed(FormError::WrongGatePassword);
        view.set_status(failed.clone());
        view.shake();
        view.clear_secret();
        // The error fades on its own unless something replaced it.
        self.scheduler.schedule(
            self.config.delays.message_linger,
            Box::new(move || {
                if view.status() == failed {
                    view.set_status(FormStatus::Idle);
                }
            }),
        );
    }
}
