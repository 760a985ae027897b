//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its form state and the flow that drives it, and delegates
//! rendering details to `components`. Every page stages its entrance
//! animation once it has mounted.

pub mod gate;
pub mod home;
pub mod login;
pub mod register;

use leptos::prelude::*;

use crate::site::Site;
use crate::util::entrance;

/// Run the entrance animation after the page's first render.
fn stage_entrance(site: &Site) {
    let prefs = site.prefs.clone();
    let scheduler = site.scheduler.clone();
    Effect::new(move |_| {
        entrance::run(scheduler.as_ref(), entrance::motion_allowed(&prefs));
    });
}

/// Re-stage the card grid whenever the window is resized.
fn restage_cards_on_resize(site: &Site) {
    #[cfg(feature = "csr")]
    {
        let prefs = site.prefs.clone();
        let scheduler = site.scheduler.clone();
        let handle = window_event_listener(leptos::ev::resize, move |_| {
            entrance::restage_cards(scheduler.as_ref(), entrance::motion_allowed(&prefs));
        });
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = site;
    }
}
