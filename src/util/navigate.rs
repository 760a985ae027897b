//! Page navigation.
//!
//! The site is multi-page: moving between the gate, login, and home screens
//! is a full document load, so navigation goes through `location.href`
//! rather than the client router.

use std::sync::Arc;
use std::time::Duration;

use crate::util::schedule::Scheduler;

pub trait Navigator: Send + Sync {
    fn go(&self, path: &str);
}

/// Sets `window.location.href`. No-op without the `csr` feature.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocationNavigator;

impl Navigator for LocationNavigator {
    fn go(&self, path: &str) {
        log::info!("navigating to {path}");
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href(path);
            }
        }
    }
}

/// Navigate to `path` once `delay` has elapsed.
pub fn navigate_after(scheduler: &dyn Scheduler, navigator: Arc<dyn Navigator>, delay: Duration, path: &str) {
    let path = path.to_owned();
    scheduler.schedule(delay, Box::new(move || navigator.go(&path)));
}

/// Records requested paths instead of leaving the page.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    visits: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub(crate) fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn go(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_owned());
    }
}
