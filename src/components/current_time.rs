//! `#currentTime` clock in the home header.

use leptos::prelude::*;

use crate::site::Site;
use crate::util::clock::current_time_label;
use crate::util::paint::ControlsView;

/// Refreshes every `Delays::clock_refresh` and whenever the stored
/// timezone changes.
#[component]
pub fn CurrentTime() -> impl IntoView {
    let site = expect_context::<Site>();
    let controls = expect_context::<RwSignal<ControlsView>>();
    let tick = RwSignal::new(0_u64);

    #[cfg(feature = "csr")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        let period = site.config.delays.clock_refresh;
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                if !alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                let _ = tick.try_update(|t| *t += 1);
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = &site;
    }

    let label = move || {
        tick.track();
        controls.with(|c| current_time_label(&c.timezone))
    };
    view! { <span id="currentTime" class="current-time">{label}</span> }
}
