//! Painting the resolved theme and motion setting onto the document.
//!
//! Applies a `data-theme` attribute, the background gradient, the
//! `theme-color` meta tag and the animation override to `<html>`, and
//! publishes the state the theme controls render from. Requires a browser
//! environment for the document half; the controls half is a Leptos signal.
//!
//! DESIGN
//! ======
//! `paint` only ever *sets* values derived from its input, never toggles or
//! appends, so applying the same `Paint` twice leaves the same document.
//!
//! TRADE-OFFS
//! ==========
//! Pausing motion walks every element. [`paint`] only walks when the
//! motion state differs from the previous paint, so a theme change does not
//! cut short transitions that are still running.

#[cfg(test)]
#[path = "paint_test.rs"]
mod paint_test;

use leptos::prelude::{RwSignal, Set};

use crate::state::preferences::{EffectiveTheme, PreferenceRecord, ThemeMode};

pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_COLOR_META: &str = "theme-color";
pub const ANIMATION_SPEED_VAR: &str = "--animation-speed";

const DARK_GRADIENT: &str = "linear-gradient(-45deg, #121212, #1a1a1a, #0d1a26, #15261f)";
const LIGHT_GRADIENT: &str = "linear-gradient(-45deg, #ee7752, #e73c7e, #23a6d5, #23d5ab)";
const GRADIENT_SIZE: &str = "400% 400%";
const GRADIENT_ANIMATION: &str = "gradientMove 20s ease infinite";
const DARK_THEME_COLOR: &str = "#121212";
const LIGHT_THEME_COLOR: &str = "#e73c7e";

/// Everything the theme toggles, radios, and settings inputs display.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ControlsView {
    /// Painted theme; toggles offer its opposite.
    pub effective: EffectiveTheme,
    /// Stored mode; radios show this, so `auto` stays selected.
    pub mode: ThemeMode,
    /// Stored animation flag, for the settings checkbox.
    pub animations_enabled: bool,
    pub timezone: String,
}

impl ControlsView {
    /// Icon of the action a toggle performs next.
    #[must_use]
    pub fn toggle_icon(&self) -> &'static str {
        if self.effective.is_dark() { "☀️" } else { "🌙" }
    }

    #[must_use]
    pub fn toggle_title(&self) -> &'static str {
        if self.effective.is_dark() {
            "Включить светлую тему"
        } else {
            "Включить тёмную тему"
        }
    }

    /// Text of an inline toggle that has a separate icon slot.
    #[must_use]
    pub fn toggle_text(&self) -> &'static str {
        if self.effective.is_dark() { "Светлая тема" } else { "Тёмная тема" }
    }

    /// Text of a compact toggle with no icon slot.
    #[must_use]
    pub fn toggle_caption(&self) -> &'static str {
        if self.effective.is_dark() { "☀️ Светлая" } else { "🌙 Тёмная" }
    }

    #[must_use]
    pub fn is_selected(&self, mode: ThemeMode) -> bool {
        self.mode == mode
    }
}

/// A fully resolved paint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Paint {
    pub effective: EffectiveTheme,
    /// Whether animations actually run: stored flag and no OS reduced motion.
    pub motion: bool,
    pub controls: ControlsView,
}

impl Paint {
    #[must_use]
    pub fn new(record: &PreferenceRecord, effective: EffectiveTheme, reduced_motion: bool) -> Self {
        Self {
            effective,
            motion: record.animations_enabled && !reduced_motion,
            controls: ControlsView {
                effective,
                mode: record.theme,
                animations_enabled: record.animations_enabled,
                timezone: record.timezone.clone(),
            },
        }
    }

    #[must_use]
    pub fn background(&self) -> &'static str {
        if self.effective.is_dark() { DARK_GRADIENT } else { LIGHT_GRADIENT }
    }

    #[must_use]
    pub fn theme_color(&self) -> &'static str {
        theme_color(self.effective)
    }
}

/// `<meta name="theme-color">` value for `effective`.
#[must_use]
pub fn theme_color(effective: EffectiveTheme) -> &'static str {
    if effective.is_dark() { DARK_THEME_COLOR } else { LIGHT_THEME_COLOR }
}

/// Where a paint lands. Implementations must tolerate missing elements.
pub trait Surface: Send + Sync {
    fn set_root_attribute(&self, name: &str, value: &str);
    /// Set (`Some`) or remove (`None`) an inline style property on `<html>`.
    fn set_root_style(&self, property: &str, value: Option<&str>);
    fn set_meta_content(&self, name: &str, content: &str);
    fn set_motion_paused(&self, paused: bool);
    fn show_controls(&self, controls: &ControlsView);
}

/// Apply `paint` to `surface`. Every element's motion is rewritten only when
/// `paint.motion` differs from `last_motion` (`None`: nothing painted yet).
pub fn paint(surface: &dyn Surface, paint: &Paint, last_motion: Option<bool>) {
    surface.set_root_attribute(THEME_ATTRIBUTE, paint.effective.as_str());
    surface.set_root_style("background", Some(paint.background()));
    surface.set_root_style("background-size", Some(GRADIENT_SIZE));
    surface.set_root_style("animation", Some(GRADIENT_ANIMATION));
    surface.set_meta_content(THEME_COLOR_META, paint.theme_color());
    // After the `animation` shorthand, which resets the play state.
    surface.set_root_style("animation-play-state", Some(if paint.motion { "running" } else { "paused" }));
    surface.set_root_style(ANIMATION_SPEED_VAR, if paint.motion { None } else { Some("0s") });
    if last_motion != Some(paint.motion) {
        surface.set_motion_paused(!paint.motion);
    }
    surface.show_controls(&paint.controls);
}

/// The live document. Every method is a no-op without the `csr` feature or
/// when the targeted element is absent.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentSurface;

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(feature = "csr")]
fn root_element() -> Option<web_sys::HtmlElement> {
    use wasm_bindgen::JsCast;

    document()?.document_element()?.dyn_into::<web_sys::HtmlElement>().ok()
}

impl Surface for DocumentSurface {
    fn set_root_attribute(&self, name: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root_element() {
                let _ = el.set_attribute(name, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, value);
        }
    }

    fn set_root_style(&self, property: &str, value: Option<&str>) {
        #[cfg(feature = "csr")]
        {
            if let Some(el) = root_element() {
                let style = el.style();
                let _ = match value {
                    Some(v) => style.set_property(property, v),
                    None => style.remove_property(property).map(|_| ()),
                };
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (property, value);
        }
    }

    fn set_meta_content(&self, name: &str, content: &str) {
        #[cfg(feature = "csr")]
        {
            let selector = format!("meta[name=\"{name}\"]");
            if let Some(meta) = document().and_then(|doc| doc.query_selector(&selector).ok().flatten()) {
                let _ = meta.set_attribute("content", content);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (name, content);
        }
    }

    fn set_motion_paused(&self, paused: bool) {
        #[cfg(feature = "csr")]
        {
            use wasm_bindgen::JsCast;

            let Some(all) = document().and_then(|doc| doc.query_selector_all("*").ok()) else {
                return;
            };
            let play_state = if paused { "paused" } else { "running" };
            for i in 0..all.length() {
                let Some(el) = all.item(i).and_then(|node| node.dyn_into::<web_sys::HtmlElement>().ok()) else {
                    continue;
                };
                let style = el.style();
                let _ = style.set_property("animation-play-state", play_state);
                let _ = if paused {
                    style.set_property("transition", "none")
                } else {
                    style.remove_property("transition").map(|_| ())
                };
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = paused;
        }
    }

    fn show_controls(&self, _controls: &ControlsView) {}
}

/// The document plus a signal the theme controls render from.
#[derive(Clone, Copy)]
pub struct ReactiveSurface {
    document: DocumentSurface,
    controls: RwSignal<ControlsView>,
}

impl ReactiveSurface {
    #[must_use]
    pub fn new(controls: RwSignal<ControlsView>) -> Self {
        Self { document: DocumentSurface, controls }
    }
}

impl Surface for ReactiveSurface {
    fn set_root_attribute(&self, name: &str, value: &str) {
        self.document.set_root_attribute(name, value);
    }

    fn set_root_style(&self, property: &str, value: Option<&str>) {
        self.document.set_root_style(property, value);
    }

    fn set_meta_content(&self, name: &str, content: &str) {
        self.document.set_meta_content(name, content);
    }

    fn set_motion_paused(&self, paused: bool) {
        self.document.set_motion_paused(paused);
    }

    fn show_controls(&self, controls: &ControlsView) {
        // Disposed when the app has been unmounted; nothing left to update.
        let _ = self.controls.try_set(controls.clone());
    }
}

/// Records the resulting document state in memory.
#[cfg(test)]
#[derive(Default)]
pub(crate) struct MemorySurface {
    state: std::sync::Mutex<SurfaceSnapshot>,
    walks: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SurfaceSnapshot {
    pub(crate) attributes: std::collections::BTreeMap<String, String>,
    pub(crate) styles: std::collections::BTreeMap<String, String>,
    pub(crate) meta: std::collections::BTreeMap<String, String>,
    pub(crate) paused: bool,
    pub(crate) controls: Option<ControlsView>,
}

#[cfg(test)]
impl MemorySurface {
    pub(crate) fn snapshot(&self) -> SurfaceSnapshot {
        self.state.lock().unwrap().clone()
    }

    /// How many times every element's motion was rewritten.
    pub(crate) fn motion_walks(&self) -> usize {
        self.walks.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
impl Surface for MemorySurface {
    fn set_root_attribute(&self, name: &str, value: &str) {
        self.state.lock().unwrap().attributes.insert(name.to_owned(), value.to_owned());
    }

    fn set_root_style(&self, property: &str, value: Option<&str>) {
        let mut state = self.state.lock().unwrap();
        match value {
            Some(v) => state.styles.insert(property.to_owned(), v.to_owned()),
            None => state.styles.remove(property),
        };
    }

    fn set_meta_content(&self, name: &str, content: &str) {
        self.state.lock().unwrap().meta.insert(name.to_owned(), content.to_owned());
    }

    fn set_motion_paused(&self, paused: bool) {
        self.walks.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        self.state.lock().unwrap().paused = paused;
    }

    fn show_controls(&self, controls: &ControlsView) {
        self.state.lock().unwrap().controls = Some(controls.clone());
    }
}
