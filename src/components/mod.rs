//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the theme controls, settings panel, and page chrome
//! while reading shared services and state from Leptos context providers.

pub mod current_time;
pub mod form_status;
pub mod header;
pub mod notification;
pub mod password_input;
pub mod settings_panel;
pub mod theme_toggle;
pub mod user_info;
