//! Staggered entrance animations for page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs once per page after mount, and again when animations are switched
//! back on in settings. Each element group is hidden, then revealed one by
//! one with a delay that grows with its position. Grid delays depend on the
//! column count, so the cards alone are staged again on window resize.
//!
//! DESIGN
//! ======
//! The delay math ([`stagger`], [`plan`]) is pure. The browser runner only
//! applies styles; scheduled reveals capture a selector and an index rather
//! than the element, and look the element up again when they fire.

#[cfg(test)]
#[path = "entrance_test.rs"]
mod entrance_test;

use std::time::Duration;

use crate::util::preference_sync::PreferenceSync;
use crate::util::schedule::Scheduler;

/// Viewport width below which an implicit grid is laid out in two columns.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;
pub const GRID_SELECTOR: &str = ".grid-table";

/// Element groups, in the order they are staged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Group {
    FadeUp,
    Form,
    Card,
    Button,
    Header,
}

impl Group {
    pub const ALL: [Self; 5] = [Self::FadeUp, Self::Form, Self::Card, Self::Button, Self::Header];

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::FadeUp => ".fade-up",
            Self::Form => "form, .form-container, .login-form, .register-form, .password-form",
            Self::Card => ".grid-card, .card, .feature-card",
            Self::Button => ".btn, .nav-btn, .logout-btn, .settings-btn, .submit-btn",
            Self::Header => "h1, h2, h3, .welcome-section",
        }
    }

    /// Styles applied before the reveal: `(opacity, transform, transition)`.
    #[must_use]
    pub fn hidden(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Self::FadeUp => (
                "0",
                "translateY(30px)",
                "opacity 0.6s cubic-bezier(0.4, 0, 0.2, 1), transform 0.6s cubic-bezier(0.4, 0, 0.2, 1)",
            ),
            Self::Form => ("0", "translateY(40px) scale(0.98)", "opacity 0.8s ease, transform 0.8s ease"),
            Self::Card => ("0", "translateY(30px) scale(0.95)", "all 0.5s cubic-bezier(0.4, 0, 0.2, 1)"),
            Self::Button => ("0.8", "scale(0.95)", "all 0.3s ease"),
            Self::Header => ("0", "translateY(20px)", "opacity 0.6s ease, transform 0.6s ease"),
        }
    }

    /// Styles of the revealed state: `(opacity, transform)`.
    #[must_use]
    pub fn shown(self) -> (&'static str, &'static str) {
        match self {
            Self::FadeUp | Self::Header => ("1", "translateY(0)"),
            Self::Form | Self::Card => ("1", "translateY(0) scale(1)"),
            Self::Button => ("1", "scale(1)"),
        }
    }
}

/// Card layout: a grid with a known column count, or loose cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardLayout {
    Grid { columns: usize },
    Loose,
}

/// Reveal delay of the `index`th element of `group`.
#[must_use]
pub fn stagger(group: Group, index: usize, layout: CardLayout) -> Duration {
    let i = index as u64;
    let ms = match (group, layout) {
        (Group::FadeUp, _) => 100 + 50 * i,
        (Group::Form, _) => 200 + 100 * i,
        (Group::Header, _) => 100 + 100 * i,
        (Group::Button, _) => 200 + 30 * i,
        (Group::Card, CardLayout::Grid { columns }) => {
            let columns = columns.max(1) as u64;
            300 + 120 * (i / columns) + 60 * (i % columns)
        }
        (Group::Card, CardLayout::Loose) => 300 + 100 * i,
    };
    Duration::from_millis(ms)
}

/// Column count from a computed `grid-template-columns` value.
#[must_use]
pub fn grid_columns(template: &str, viewport_width: f64) -> usize {
    let template = template.trim();
    if template.is_empty() || template == "none" {
        return if viewport_width < NARROW_VIEWPORT_PX { 2 } else { 3 };
    }
    template.split_whitespace().count()
}

/// One scheduled reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub group: Group,
    pub index: usize,
    pub delay: Duration,
}

/// Every reveal for a page with `counts[g]` elements in group `Group::ALL[g]`.
#[must_use]
pub fn plan(counts: [usize; 5], layout: CardLayout) -> Vec<Reveal> {
    Group::ALL
        .into_iter()
        .zip(counts)
        .flat_map(|(group, count)| {
            (0..count).map(move |index| Reveal { group, index, delay: stagger(group, index, layout) })
        })
        .collect()
}

/// Reveals for the card group alone, as staged after a resize.
#[must_use]
pub fn card_plan(cards: usize, layout: CardLayout) -> Vec<Reveal> {
    plan(Group::ALL.map(|group| if group == Group::Card { cards } else { 0 }), layout)
}

/// Whether entrance motion should play: stored flag on, OS not asking for
/// reduced motion.
#[must_use]
pub fn motion_allowed(prefs: &PreferenceSync) -> bool {
    prefs.current().animations_enabled && !prefs.signals().reduced_motion
}

/// Stage the current page. With `enabled == false` everything is shown at
/// once and nothing is scheduled.
pub fn run(scheduler: &dyn Scheduler, enabled: bool) {
    stage(scheduler, enabled, false);
}

/// Stage the cards again with the column count of the current viewport.
pub fn restage_cards(scheduler: &dyn Scheduler, enabled: bool) {
    stage(scheduler, enabled, true);
}

fn stage(scheduler: &dyn Scheduler, enabled: bool, cards_only: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let layout = card_layout(&doc);
        let reveals = if cards_only {
            card_plan(count(&doc, Group::Card), layout)
        } else {
            plan(Group::ALL.map(|group| count(&doc, group)), layout)
        };
        log::debug!("entrance: {} reveals (enabled={enabled})", reveals.len());
        for reveal in reveals {
            if enabled {
                if let Some(el) = nth(&doc, reveal.group, reveal.index) {
                    let (opacity, transform, transition) = reveal.group.hidden();
                    set_styles(&el, &[("opacity", opacity), ("transform", transform), ("transition", transition)]);
                }
                scheduler.schedule(reveal.delay, Box::new(move || show(reveal.group, reveal.index)));
            } else {
                show(reveal.group, reveal.index);
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (scheduler, enabled, cards_only);
    }
}

/// Play the `shake` keyframes on the element with `id` for `duration`.
pub fn shake(scheduler: &dyn Scheduler, id: &str, duration: Duration) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = by_id(id) {
            set_styles(&el, &[("animation", "shake 0.5s ease")]);
        }
        let id = id.to_owned();
        scheduler.schedule(
            duration,
            Box::new(move || {
                if let Some(el) = by_id(&id) {
                    set_styles(&el, &[("animation", "")]);
                }
            }),
        );
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (scheduler, id, duration);
    }
}

#[cfg(feature = "csr")]
fn count(doc: &web_sys::Document, group: Group) -> usize {
    doc.query_selector_all(group.selector()).map_or(0, |list| list.length() as usize)
}

#[cfg(feature = "csr")]
fn card_layout(doc: &web_sys::Document) -> CardLayout {
    let Ok(Some(grid)) = doc.query_selector(GRID_SELECTOR) else {
        return CardLayout::Loose;
    };
    let Some(window) = web_sys::window() else {
        return CardLayout::Loose;
    };
    let template = window
        .get_computed_style(&grid)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("grid-template-columns").ok())
        .unwrap_or_default();
    let width = window.inner_width().ok().and_then(|w| w.as_f64()).unwrap_or(NARROW_VIEWPORT_PX);
    CardLayout::Grid { columns: grid_columns(&template, width) }
}

#[cfg(feature = "csr")]
fn nth(doc: &web_sys::Document, group: Group, index: usize) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    let index = u32::try_from(index).ok()?;
    doc.query_selector_all(group.selector()).ok()?.item(index)?.dyn_into().ok()
}

#[cfg(feature = "csr")]
fn by_id(id: &str) -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.get_element_by_id(id)?.dyn_into().ok()
}

#[cfg(feature = "csr")]
fn show(group: Group, index: usize) {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(el) = nth(&doc, group, index) {
        let (opacity, transform) = group.shown();
        set_styles(&el, &[("opacity", opacity), ("transform", transform)]);
        if group == Group::FadeUp {
            let _ = el.class_list().add_1("animated");
        }
    }
}

#[cfg(feature = "csr")]
fn set_styles(el: &web_sys::HtmlElement, styles: &[(&str, &str)]) {
    let style = el.style();
    for (property, value) in styles {
        let _ = style.set_property(property, value);
    }
}
