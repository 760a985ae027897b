//! Site configuration: gate password, pacing delays, and routes.
//!
//! DESIGN
//! ======
//! A static WASM bundle has no runtime environment, so overrides are read at
//! build time through `option_env!`. Every cosmetic delay is a named
//! constant here and flows through `Delays` into the scheduler, which lets
//! tests run the same flows with zero delays.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_GATE_PASSWORD: &str = "1234";

pub const SIMULATED_LOGIN_DELAY_MS: u64 = 1500;
pub const GATE_CHECK_DELAY_MS: u64 = 800;
pub const REDIRECT_DELAY_MS: u64 = 1000;
pub const LOGOUT_PRESS_DELAY_MS: u64 = 150;
pub const NOTICE_DURATION_MS: u64 = 3000;
pub const FOCUS_DELAY_MS: u64 = 300;
pub const PANEL_FOCUS_DELAY_MS: u64 = 100;
pub const CLOCK_REFRESH_MS: u64 = 30_000;
/// How long a gate verdict stays on screen before the form settles.
pub const MESSAGE_LINGER_MS: u64 = 5000;
pub const SHAKE_MS: u64 = 500;

/// Durable key holding the last effective theme (`light`/`dark`).
pub const SITE_THEME_KEY: &str = "siteTheme";
/// Durable key holding the JSON preference record.
pub const USER_SETTINGS_KEY: &str = "userSettings";
/// Key of the active user record, durable or session scoped.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Durable key holding the JSON array of locally registered users.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

/// Pacing delays for simulated latency and cosmetic transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delays {
    pub login: Duration,
    pub gate_check: Duration,
    pub redirect: Duration,
    pub logout_press: Duration,
    pub notice: Duration,
    pub focus: Duration,
    pub panel_focus: Duration,
    pub clock_refresh: Duration,
    pub message_linger: Duration,
    pub shake: Duration,
}

impl Default for Delays {
    fn default() -> Self {
        Self::scaled(100)
    }
}

impl Delays {
    /// All delays scaled by `percent` (100 = nominal, 0 = instant).
    ///
    /// The clock refresh interval is never scaled: it is a period, not a
    /// pause, and a zero period would spin.
    #[must_use]
    pub fn scaled(percent: u64) -> Self {
        let ms = |base: u64| Duration::from_millis(base.saturating_mul(percent) / 100);
        Self {
            login: ms(SIMULATED_LOGIN_DELAY_MS),
            gate_check: ms(GATE_CHECK_DELAY_MS),
            redirect: ms(REDIRECT_DELAY_MS),
            logout_press: ms(LOGOUT_PRESS_DELAY_MS),
            notice: ms(NOTICE_DURATION_MS),
            focus: ms(FOCUS_DELAY_MS),
            panel_focus: ms(PANEL_FOCUS_DELAY_MS),
            clock_refresh: Duration::from_millis(CLOCK_REFRESH_MS),
            message_linger: ms(MESSAGE_LINGER_MS),
            shake: ms(SHAKE_MS),
        }
    }
}

/// Absolute paths of the site's pages. The gate always sits at `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Routes {
    pub home: String,
    pub login: String,
    pub register: String,
}

impl Default for Routes {
    fn default() -> Self {
        Self {
            home: "/home".to_owned(),
            login: "/login".to_owned(),
            register: "/register".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub gate_password: String,
    pub delays: Delays,
    pub routes: Routes,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            gate_password: DEFAULT_GATE_PASSWORD.to_owned(),
            delays: Delays::default(),
            routes: Routes::default(),
        }
    }
}

impl SiteConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `SITE_GATE_PASSWORD`: landing-page password, default `1234`
    /// - `SITE_DELAY_SCALE`: percent applied to all pacing delays, default 100
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_vars(option_env!("SITE_GATE_PASSWORD"), option_env!("SITE_DELAY_SCALE"))
    }

    /// Same as [`SiteConfig::from_build_env`] with explicit raw values.
    #[must_use]
    pub fn from_vars(gate_password: Option<&str>, delay_scale: Option<&str>) -> Self {
        let gate_password = gate_password
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_GATE_PASSWORD)
            .to_owned();
        let scale = parse_or(delay_scale, 100_u64);
        Self { gate_password, delays: Delays::scaled(scale), routes: Routes::default() }
    }

    /// Zero-delay config for tests and previews.
    #[must_use]
    pub fn instant() -> Self {
        Self { delays: Delays::scaled(0), ..Self::default() }
    }
}

fn parse_or<T>(raw: Option<&str>, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    raw.and_then(|v| v.trim().parse::<T>().ok()).unwrap_or(default)
}
