//! Shared services for every page, provided once through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `Site` for the browser and components fetch it with
//! `expect_context::<Site>()`. Tests build the same struct over in-memory
//! storage, a manual scheduler, and recording doubles.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::sync::Arc;

use leptos::prelude::RwSignal;

use crate::config::SiteConfig;
use crate::state::preferences::PreferenceStore;
use crate::state::session::SessionStore;
use crate::util::auth_flow::AuthFlow;
use crate::util::gate::Gate;
use crate::util::navigate::{LocationNavigator, Navigator};
use crate::util::paint::{ControlsView, ReactiveSurface, Surface};
use crate::util::preference_sync::PreferenceSync;
use crate::util::schedule::{Scheduler, TimerScheduler};
use crate::util::storage::Storages;

#[derive(Clone)]
pub struct Site {
    pub config: Arc<SiteConfig>,
    pub prefs: Arc<PreferenceSync>,
    pub session: SessionStore,
    pub scheduler: Arc<dyn Scheduler>,
    pub navigator: Arc<dyn Navigator>,
}

impl Site {
    #[must_use]
    pub fn new(
        config: SiteConfig,
        storages: Storages,
        surface: Arc<dyn Surface>,
        scheduler: Arc<dyn Scheduler>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        let prefs = PreferenceSync::new(PreferenceStore::new(storages.durable.clone()), surface);
        Self {
            config: Arc::new(config),
            prefs: Arc::new(prefs),
            session: SessionStore::new(storages),
            scheduler,
            navigator,
        }
    }

    /// Live browser services painting into `controls`.
    #[must_use]
    pub fn browser(controls: RwSignal<ControlsView>) -> Self {
        Self::new(
            SiteConfig::from_build_env(),
            Storages::browser(),
            Arc::new(ReactiveSurface::new(controls)),
            Arc::new(TimerScheduler),
            Arc::new(LocationNavigator),
        )
    }

    #[must_use]
    pub fn auth_flow(&self) -> AuthFlow {
        AuthFlow::new(
            self.session.clone(),
            self.scheduler.clone(),
            self.navigator.clone(),
            self.config.delays,
            self.config.routes.clone(),
        )
    }

    #[must_use]
    pub fn gate(&self) -> Gate {
        Gate::new(self.config.clone(), self.scheduler.clone(), self.navigator.clone())
    }
}
