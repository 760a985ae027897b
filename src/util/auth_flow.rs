//! Login, registration, and logout flows over the local session store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Drives the `#loginForm` and `#registerForm` pages and the `#logoutBtn`
//! on the home page. Latency is simulated: the store answers instantly, but
//! the result is only shown after `Delays::login` so the busy state is seen.
//!
//! DESIGN
//! ======
//! Validation failures are shown immediately and never schedule anything.
//! A form that is already busy ignores further submits.

#[cfg(test)]
#[path = "auth_flow_test.rs"]
mod auth_flow_test;

use std::sync::Arc;

use crate::config::{Delays, Routes};
use crate::error::FormError;
use crate::state::session::SessionStore;
use crate::util::form::{FormStatus, FormView, LoginForm, RegistrationForm, validate_login, validate_registration};
use crate::util::navigate::{Navigator, navigate_after};
use crate::util::schedule::Scheduler;

pub const LOGIN_BUSY: &str = "Вход...";
pub const REGISTER_BUSY: &str = "Регистрация...";
pub const SIGNED_IN: &str = "Успешный вход! Перенаправление...";

#[derive(Clone)]
pub struct AuthFlow {
    session: SessionStore,
    scheduler: Arc<dyn Scheduler>,
    navigator: Arc<dyn Navigator>,
    delays: Delays,
    routes: Routes,
}

impl AuthFlow {
    #[must_use]
    pub fn new(
        session: SessionStore,
        scheduler: Arc<dyn Scheduler>,
        navigator: Arc<dyn Navigator>,
        delays: Delays,
        routes: Routes,
    ) -> Self {
        Self { session, scheduler, navigator, delays, routes }
    }

    pub fn submit_login(&self, form: &LoginForm, view: Arc<dyn FormView>) {
        if view.status().is_busy() {
            return;
        }
        let form = match validate_login(form) {
            Ok(form) => form,
            Err(err) => return fail(view.as_ref(), err),
        };
        view.set_status(FormStatus::Busy(LOGIN_BUSY));
        let flow = self.clone();
        self.scheduler.schedule(
            self.delays.login,
            Box::new(move || match flow.session.login(&form.email, &form.password, form.remember) {
                Ok(_) => flow.succeed(view.as_ref()),
                Err(err) => {
                    log::info!("local login rejected");
                    fail(view.as_ref(), err);
                }
            }),
        );
    }

    pub fn submit_registration(&self, form: &RegistrationForm, view: Arc<dyn FormView>) {
        if view.status().is_busy() {
            return;
        }
        let form = match validate_registration(form) {
            Ok(form) => form,
            Err(err) => return fail(view.as_ref(), err),
        };
        if self.session.registered_users().iter().any(|u| u.user.email == form.email) {
            return fail(view.as_ref(), FormError::EmailTaken);
        }
        view.set_status(FormStatus::Busy(REGISTER_BUSY));
        let flow = self.clone();
        self.scheduler.schedule(
            self.delays.login,
            Box::new(move || match flow.session.register(&form.name, &form.email, &form.password) {
                Ok(user) => {
                    flow.session.sign_in(user, true);
                    flow.succeed(view.as_ref());
                }
                Err(err) => fail(view.as_ref(), err),
            }),
        );
    }

    /// Clear both user slots after the button press, then go to login.
    pub fn logout(&self) {
        let flow = self.clone();
        self.scheduler.schedule(
            self.delays.logout_press,
            Box::new(move || {
                flow.session.logout();
                flow.navigator.go(&flow.routes.login);
            }),
        );
    }

    fn succeed(&self, view: &dyn FormView) {
        view.set_status(FormStatus::Succeeded(SIGNED_IN));
        navigate_after(self.scheduler.as_ref(), self.navigator.clone(), self.delays.redirect, &self.routes.home);
    }
}

fn fail(view: &dyn FormView, err: FormError) {
    view.set_status(FormStatus::Failed(err));
    view.shake();
}
