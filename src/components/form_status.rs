//! Signal-backed form view and the inline message under a form.

use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::*;

use crate::util::entrance;
use crate::util::form::{FormStatus, FormView};
use crate::util::schedule::Scheduler;

/// `FormView` over Leptos signals owned by a page.
#[derive(Clone)]
pub struct SignalForm {
    pub status: RwSignal<FormStatus>,
    /// The password input, emptied on a failed gate check.
    pub secret: RwSignal<String>,
    form_id: &'static str,
    secret_id: &'static str,
    scheduler: Arc<dyn Scheduler>,
    shake: Duration,
}

impl SignalForm {
    #[must_use]
    pub fn new(
        form_id: &'static str,
        secret_id: &'static str,
        scheduler: Arc<dyn Scheduler>,
        shake: Duration,
    ) -> Self {
        Self {
            status: RwSignal::new(FormStatus::Idle),
            secret: RwSignal::new(String::new()),
            form_id,
            secret_id,
            scheduler,
            shake,
        }
    }

    /// Drop a shown error once the user edits an input.
    pub fn edited(&self) {
        if matches!(self.status.get_untracked(), FormStatus::Failed(_)) {
            self.status.set(FormStatus::Idle);
        }
    }
}

impl FormView for SignalForm {
    fn status(&self) -> FormStatus {
        self.status.try_get_untracked().unwrap_or_default()
    }

    fn set_status(&self, status: FormStatus) {
        let _ = self.status.try_set(status);
    }

    fn clear_secret(&self) {
        let _ = self.secret.try_set(String::new());
        focus(self.secret_id);
    }

    fn shake(&self) {
        entrance::shake(self.scheduler.as_ref(), self.form_id, self.shake);
    }
}

/// Move keyboard focus to the element with `id`, if it exists.
pub fn focus(id: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// The `#message` block under a form.
#[component]
pub fn FormMessage(status: RwSignal<FormStatus>, #[prop(optional)] id: Option<&'static str>) -> impl IntoView {
    let class = move || {
        let status = status.get();
        match status.message() {
            Some(_) => format!("message {} show", status.tone()),
            None => "message".to_owned(),
        }
    };
    view! {
        <div id=id class=class role="status" aria-live="polite">
            {move || status.get().message().unwrap_or_default()}
        </div>
    }
}
